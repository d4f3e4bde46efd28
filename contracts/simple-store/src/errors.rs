use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StoreError {
    /// Indicates the attached payment is below the minimum price.
    PriceTooLow = 200,
    /// Indicates the buyer already purchased this product.
    AlreadyBoughtThatItem = 201,
    /// Indicates the ledger owner has not granted the store transfer access.
    AccessNotGranted = 202,
    /// Indicates the ledger owner has no unit left of the product.
    OutOfStock = 203,
    /// Indicates the caller is not the ledger owner.
    NotOwnerOfContract = 204,
    /// Indicates a non-positive amount.
    InvalidAmount = 205,
    /// Indicates instance configuration was never set.
    UnsetConfiguration = 206,
}
