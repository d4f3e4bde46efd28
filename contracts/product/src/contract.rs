//! Product ledger - inventory and per-holder balances

use soroban_sdk::{
    contractimpl, contracttype, log, panic_with_error, Address, Env, IntoVal, String, Val, Vec,
};
use crate::{
    errors::ProductError, events, MultiTokenLedger, Product, ProductArgs, ProductClient,
};

#[contracttype]
pub enum DataKey {
    Owner,
    Uri,
}

#[contracttype]
pub enum LedgerStorageKey {
    Quantity(u64),
    Balance(Address /* holder */, u64 /* id */),
    Operator(Address),
    ProductIds,
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

/// Writes a persistent entry and extends its TTL.
fn write_persistent<V: IntoVal<Env, Val>>(e: &Env, key: &LedgerStorageKey, value: &V) {
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn read_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(e, ProductError::UnsetMetadata))
}

/// Authenticates `caller` and checks it is the ledger owner.
fn require_owner(e: &Env, caller: &Address) -> Result<(), ProductError> {
    caller.require_auth();
    if *caller != read_owner(e) {
        return Err(ProductError::NotOwnerOfContract);
    }
    Ok(())
}

fn read_balance(e: &Env, holder: &Address, id: u64) -> u64 {
    e.storage()
        .persistent()
        .get::<_, u64>(&LedgerStorageKey::Balance(holder.clone(), id))
        .unwrap_or(0)
}

fn write_balance(e: &Env, holder: &Address, id: u64, amount: u64) {
    write_persistent(e, &LedgerStorageKey::Balance(holder.clone(), id), &amount);
}

fn read_operator(e: &Env, operator: &Address) -> bool {
    e.storage()
        .persistent()
        .get::<_, bool>(&LedgerStorageKey::Operator(operator.clone()))
        .unwrap_or(false)
}

fn read_product_ids(e: &Env) -> Vec<u64> {
    e.storage()
        .persistent()
        .get(&LedgerStorageKey::ProductIds)
        .unwrap_or_else(|| Vec::new(e))
}

#[contractimpl]
impl MultiTokenLedger for Product {

    fn __constructor(e: &Env, owner: Address, uri: String) {
        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage().instance().set(&DataKey::Uri, &uri);
        extend_instance(e);
    }

    fn add_product(e: &Env, caller: Address, id: u64, quantity: u64) -> Result<(), ProductError> {
        require_owner(e, &caller)?;
        extend_instance(e);

        let quantity_key = LedgerStorageKey::Quantity(id);
        if !e.storage().persistent().has(&quantity_key) {
            let mut ids = read_product_ids(e);
            ids.push_back(id);
            write_persistent(e, &LedgerStorageKey::ProductIds, &ids);
        }

        write_persistent(e, &quantity_key, &quantity);
        write_balance(e, &caller, id, quantity);

        log!(e, "product {} stocked with {} units", id, quantity);
        events::ItemUpdate { id, quantity }.publish(e);

        Ok(())
    }

    fn grant_store_access(
        e: &Env,
        caller: Address,
        operator: Address,
    ) -> Result<(), ProductError> {
        require_owner(e, &caller)?;
        extend_instance(e);

        write_persistent(e, &LedgerStorageKey::Operator(operator.clone()), &true);

        log!(e, "granted transfer access to {}", operator);
        events::GrantedAccessToProducts { operator }.publish(e);

        Ok(())
    }

    fn revoke_access(e: &Env, caller: Address, operator: Address) -> Result<(), ProductError> {
        require_owner(e, &caller)?;

        e.storage()
            .persistent()
            .remove(&LedgerStorageKey::Operator(operator.clone()));

        events::RevokedAccessToProducts { operator }.publish(e);

        Ok(())
    }

    fn is_authorized(e: &Env, operator: Address) -> bool {
        read_operator(e, &operator)
    }

    fn get_unique_products_ids(e: &Env) -> Vec<u64> {
        read_product_ids(e)
    }

    fn balance_of(e: &Env, account: Address, id: u64) -> u64 {
        read_balance(e, &account, id)
    }

    fn balance_of_batch(e: &Env, accounts: Vec<Address>, ids: Vec<u64>) -> Result<Vec<u64>, ProductError> {
        if accounts.len() != ids.len() {
            return Err(ProductError::InvalidAmount);
        }

        let mut balances = Vec::new(e);
        for (account, id) in accounts.iter().zip(ids.iter()) {
            balances.push_back(read_balance(e, &account, id));
        }
        Ok(balances)
    }

    fn quantity(e: &Env, id: u64) -> Result<u64, ProductError> {
        e.storage()
            .persistent()
            .get(&LedgerStorageKey::Quantity(id))
            .ok_or(ProductError::UnknownProduct)
    }

    fn safe_transfer_from(
        e: &Env,
        operator: Address,
        from: Address,
        to: Address,
        id: u64,
        amount: u64,
    ) -> Result<(), ProductError> {
        operator.require_auth();

        if operator != from && !read_operator(e, &operator) {
            return Err(ProductError::NotAuthorizedOperator);
        }
        if amount == 0 {
            return Err(ProductError::InvalidAmount);
        }

        let from_balance = read_balance(e, &from, id);
        if from_balance < amount {
            return Err(ProductError::InsufficientBalance);
        }
        // self-transfer is a no-op on balances
        if from != to {
            let to_balance = read_balance(e, &to, id)
                .checked_add(amount)
                .ok_or(ProductError::MathOverflow)?;
            write_balance(e, &from, id, from_balance - amount);
            write_balance(e, &to, id, to_balance);
        }
        extend_instance(e);

        events::TransferSingle { operator, from, to, id, amount }.publish(e);

        Ok(())
    }

    fn owner(e: &Env) -> Address {
        read_owner(e)
    }

    fn uri(e: &Env) -> String {
        e.storage()
            .instance()
            .get(&DataKey::Uri)
            .unwrap_or_else(|| panic_with_error!(e, ProductError::UnsetMetadata))
    }

}
