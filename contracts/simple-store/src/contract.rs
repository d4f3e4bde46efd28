//! Store front - purchases against the product ledger

use soroban_sdk::{
    contractimpl, contracttype, log, panic_with_error, token, Address, Env, IntoVal, Val, Vec,
};
use crate::{
    errors::StoreError, events, ProductLedgerClient, SimpleStore, SimpleStoreArgs,
    SimpleStoreClient, StoreFront,
};

/// 0.01 of the native asset, which has 7 decimals.
pub const MIN_PRICE: i128 = 100_000;

pub const PRODUCTS_PER_ORDER: u64 = 1;

#[contracttype]
pub enum DataKey {
    ProductLedger,
    PaymentToken,
}

#[contracttype]
pub enum StoreStorageKey {
    Purchased(Address /* buyer */, u64 /* id */),
    Owners(u64),
}

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn write_persistent<V: IntoVal<Env, Val>>(e: &Env, key: &StoreStorageKey, value: &V) {
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn read_address(e: &Env, key: &DataKey) -> Address {
    e.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(e, StoreError::UnsetConfiguration))
}

fn ledger(e: &Env) -> ProductLedgerClient<'_> {
    ProductLedgerClient::new(e, &read_address(e, &DataKey::ProductLedger))
}

fn payment_client(e: &Env) -> token::Client<'_> {
    token::Client::new(e, &read_address(e, &DataKey::PaymentToken))
}

fn read_owners(e: &Env, id: u64) -> Vec<Address> {
    e.storage()
        .persistent()
        .get(&StoreStorageKey::Owners(id))
        .unwrap_or_else(|| Vec::new(e))
}


#[contractimpl]
impl StoreFront for SimpleStore {

    fn __constructor(e: &Env, product_ledger: Address, payment_token: Address) {
        e.storage().instance().set(&DataKey::ProductLedger, &product_ledger);
        e.storage().instance().set(&DataKey::PaymentToken, &payment_token);
        extend_instance(e);
    }

    fn buy_product(e: &Env, buyer: Address, id: u64, price: i128) -> Result<(), StoreError> {
        buyer.require_auth();

        if price < MIN_PRICE {
            return Err(StoreError::PriceTooLow);
        }

        let purchased_key = StoreStorageKey::Purchased(buyer.clone(), id);
        if e.storage().persistent().has(&purchased_key) {
            return Err(StoreError::AlreadyBoughtThatItem);
        }

        let store = e.current_contract_address();
        let ledger = ledger(e);
        if !ledger.is_authorized(&store) {
            return Err(StoreError::AccessNotGranted);
        }

        let holder = ledger.owner();
        if ledger.balance_of(&holder, &id) < PRODUCTS_PER_ORDER {
            return Err(StoreError::OutOfStock);
        }

        payment_client(e).transfer(&buyer, &store, &price);
        ledger.safe_transfer_from(&store, &holder, &buyer, &id, &PRODUCTS_PER_ORDER);

        write_persistent(e, &purchased_key, &true);
        let mut owners = read_owners(e, id);
        owners.push_back(buyer.clone());
        write_persistent(e, &StoreStorageKey::Owners(id), &owners);
        extend_instance(e);

        log!(e, "product {} bought by {} for {}", id, buyer, price);
        events::ItemBought { holder, buyer, id, amount: PRODUCTS_PER_ORDER }.publish(e);

        Ok(())
    }

    fn show_owners(e: &Env, id: u64) -> Vec<Address> {
        read_owners(e, id)
    }

    fn show_products(e: &Env) -> Vec<u64> {
        ledger(e).get_unique_products_ids()
    }

    fn has_purchased(e: &Env, buyer: Address, id: u64) -> bool {
        e.storage()
            .persistent()
            .has(&StoreStorageKey::Purchased(buyer, id))
    }

    fn withdraw(e: &Env, caller: Address, to: Address, amount: i128) -> Result<(), StoreError> {
        caller.require_auth();

        if caller != ledger(e).owner() {
            return Err(StoreError::NotOwnerOfContract);
        }
        if amount <= 0 {
            return Err(StoreError::InvalidAmount);
        }

        payment_client(e).transfer(&e.current_contract_address(), &to, &amount);
        extend_instance(e);

        log!(e, "withdrew {} to {}", amount, to);
        events::Withdrawal { to, amount }.publish(e);

        Ok(())
    }

    fn product_ledger(e: &Env) -> Address {
        read_address(e, &DataKey::ProductLedger)
    }

    fn payment_token(e: &Env) -> Address {
        read_address(e, &DataKey::PaymentToken)
    }

    fn min_price(_e: &Env) -> i128 {
        MIN_PRICE
    }

}
