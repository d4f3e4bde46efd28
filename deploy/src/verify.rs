use soroban_sdk::Address;
use tracing::info;

use crate::Result;

/// Submits a deployed contract and its constructor arguments to a block explorer.
pub trait Verifier {
    fn verify(&self, contract: &Address, args: &[String]) -> Result<()>;
}

/// Records the verification request in the log only.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingVerifier;

impl Verifier for TracingVerifier {
    fn verify(&self, contract: &Address, args: &[String]) -> Result<()> {
        info!(contract = ?contract, args = ?args, "verifying contract");
        Ok(())
    }
}
