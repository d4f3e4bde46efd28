#![no_std]

use soroban_sdk::{contract, contractclient, contractmeta, Address, Env, Vec};

contractmeta!(key = "Description", val = "Simple Store");

mod contract;
pub mod errors;
pub mod events;


pub use contract::{DataKey, StoreStorageKey, MIN_PRICE, PRODUCTS_PER_ORDER};
pub use errors::StoreError;

#[contract]
pub struct SimpleStore;

/// Interface of the product ledger the store sells from.
#[contractclient(name = "ProductLedgerClient")]
pub trait ProductLedger {
    fn owner(e: Env) -> Address;
    fn is_authorized(e: Env, operator: Address) -> bool;
    fn balance_of(e: Env, account: Address, id: u64) -> u64;
    fn get_unique_products_ids(e: Env) -> Vec<u64>;
    fn safe_transfer_from(e: Env, operator: Address, from: Address, to: Address, id: u64, amount: u64);
}

pub trait StoreFront {

    fn __constructor(e: &Env, product_ledger: Address, payment_token: Address);

    /// Buy one unit of product `id`.
    ///
    /// The payment moves from `buyer` to the store through the payment token,
    /// then one unit of `id` moves from the ledger owner to `buyer` through
    /// the ledger's authorized-transfer path. A buyer can purchase a given
    /// `id` only once.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `buyer` - Account paying and receiving the unit.
    /// * `id` - Product id.
    /// * `price` - Attached payment, in stroops of the payment token.
    ///
    /// # Errors
    ///
    /// * [`StoreError::PriceTooLow`] - `price` is below [`MIN_PRICE`].
    /// * [`StoreError::AlreadyBoughtThatItem`] - `buyer` already bought `id`.
    /// * [`StoreError::AccessNotGranted`] - the ledger owner did not grant the store.
    /// * [`StoreError::OutOfStock`] - the ledger owner holds no unit of `id`.
    ///
    /// # Events
    ///
    /// * topics - `["item_bought", holder: Address, buyer: Address]`
    /// * data - `[id: u64, amount: u64]`
    fn buy_product(e: &Env, buyer: Address, id: u64, price: i128) -> Result<(), StoreError>;

    /// Returns the buyers of `id` in purchase order.
    fn show_owners(e: &Env, id: u64) -> Vec<Address>;

    /// Returns the product ids known to the ledger.
    fn show_products(e: &Env) -> Vec<u64>;

    /// Returns whether `buyer` already bought `id`.
    fn has_purchased(e: &Env, buyer: Address, id: u64) -> bool;

    /// Move collected payments out of the store.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `caller` - Must be the ledger owner.
    /// * `to` - Recipient of the funds.
    /// * `amount` - Amount of the payment token.
    ///
    /// # Errors
    ///
    /// * [`StoreError::NotOwnerOfContract`] - `caller` is not the ledger owner.
    /// * [`StoreError::InvalidAmount`] - `amount` is not positive.
    fn withdraw(e: &Env, caller: Address, to: Address, amount: i128) -> Result<(), StoreError>;

    fn product_ledger(e: &Env) -> Address;

    fn payment_token(e: &Env) -> Address;

    fn min_price(e: &Env) -> i128;
}
