#![no_std]

use soroban_sdk::{contract, contractmeta, Address, Env, String, Vec};

contractmeta!(key = "Description", val = "Product inventory ledger");

mod contract;
pub mod errors;
pub mod events;


pub use contract::{DataKey, LedgerStorageKey};
pub use errors::ProductError;

#[contract]
pub struct Product;

pub trait MultiTokenLedger {

    fn __constructor(e: &Env, owner: Address, uri: String);

    /// Add a product or update the quantity of an existing one.
    ///
    /// The quantity is overwritten, not summed, and the owner's balance for
    /// `id` is set to `quantity`. Units already held by buyers are left
    /// untouched. The `id` is appended to the enumerable id list only the
    /// first time it is seen.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `caller` - Account performing the call, must be the ledger owner.
    /// * `id` - Product id.
    /// * `quantity` - Number of units available.
    ///
    /// # Errors
    ///
    /// * [`ProductError::NotOwnerOfContract`] - `caller` is not the owner.
    ///
    /// # Events
    ///
    /// * topics - `["item_update", id: u64]`
    /// * data - `[quantity: u64]`
    fn add_product(e: &Env, caller: Address, id: u64, quantity: u64) -> Result<(), ProductError>;

    /// Authorize `operator` to move balances on behalf of holders.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `caller` - Account performing the call, must be the ledger owner.
    /// * `operator` - Contract (usually the store front) receiving the grant.
    ///
    /// # Errors
    ///
    /// * [`ProductError::NotOwnerOfContract`] - `caller` is not the owner.
    ///
    /// # Events
    ///
    /// * topics - `["granted_access_to_products", operator: Address]`
    /// * data - `[]`
    fn grant_store_access(
        e: &Env,
        caller: Address,
        operator: Address,
    ) -> Result<(), ProductError>;

    /// Remove a grant previously given with
    /// [`MultiTokenLedger::grant_store_access`].
    ///
    /// # Errors
    ///
    /// * [`ProductError::NotOwnerOfContract`] - `caller` is not the owner.
    ///
    /// # Events
    ///
    /// * topics - `["revoked_access_to_products", operator: Address]`
    /// * data - `[]`
    fn revoke_access(e: &Env, caller: Address, operator: Address) -> Result<(), ProductError>;

    /// Returns whether `operator` may move balances on behalf of holders.
    fn is_authorized(e: &Env, operator: Address) -> bool;

    /// Returns every product id ever added, once each, in insertion order.
    fn get_unique_products_ids(e: &Env) -> Vec<u64>;

    /// Returns the amount of units of `id` held by `account`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `account` - Holder to query.
    /// * `id` - Product id.
    fn balance_of(e: &Env, account: Address, id: u64) -> u64;

    /// Batched version of [`MultiTokenLedger::balance_of`].
    ///
    /// # Errors
    ///
    /// * [`ProductError::InvalidAmount`] - `accounts` and `ids` differ in length.
    fn balance_of_batch(e: &Env, accounts: Vec<Address>, ids: Vec<u64>) -> Result<Vec<u64>, ProductError>;

    /// Returns the last quantity set for `id`.
    ///
    /// # Errors
    ///
    /// * [`ProductError::UnknownProduct`] - `id` was never added.
    fn quantity(e: &Env, id: u64) -> Result<u64, ProductError>;

    /// Transfers `amount` units of `id` from `from` to `to`.
    ///
    /// `operator` must authorize the call and be either `from` itself or an
    /// operator granted access by the owner.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `operator` - Account or contract moving the units.
    /// * `from` - Current holder.
    /// * `to` - Recipient.
    /// * `id` - Product id.
    /// * `amount` - Units to move, must be positive.
    ///
    /// # Errors
    ///
    /// * [`ProductError::NotAuthorizedOperator`] - `operator` is neither `from` nor granted.
    /// * [`ProductError::InvalidAmount`] - `amount` is zero.
    /// * [`ProductError::InsufficientBalance`] - `from` holds less than `amount`.
    /// * [`ProductError::MathOverflow`] - the recipient balance would overflow.
    ///
    /// # Events
    ///
    /// * topics - `["transfer_single", operator: Address, from: Address, to: Address]`
    /// * data - `[id: u64, amount: u64]`
    fn safe_transfer_from(
        e: &Env,
        operator: Address,
        from: Address,
        to: Address,
        id: u64,
        amount: u64,
    ) -> Result<(), ProductError>;

    /// Returns the ledger owner.
    fn owner(e: &Env) -> Address;

    /// Returns the metadata URI set at deployment.
    fn uri(e: &Env) -> String;
}
