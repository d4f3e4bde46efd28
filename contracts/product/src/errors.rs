use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProductError {
    /// Indicates the caller of an owner-gated function is not the ledger owner.
    NotOwnerOfContract = 100,
    /// Indicates the operator of a transfer is neither the holder nor granted.
    NotAuthorizedOperator = 101,
    /// Indicates the holder does not own enough units for the transfer.
    InsufficientBalance = 102,
    /// Indicates a zero amount or mismatched batch arguments.
    InvalidAmount = 103,
    /// Indicates overflow when adding two values
    MathOverflow = 104,
    /// Indicates a non-existent product `id`.
    UnknownProduct = 105,
    /// Indicates instance metadata was never set.
    UnsetMetadata = 106,
}
