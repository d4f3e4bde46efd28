use product::{Product, ProductClient};
use simple_store::{SimpleStore, SimpleStoreClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, Env, String,
};
use tracing::{debug, info};

use crate::{DeployConfig, Result, TracingVerifier, Verifier};

/// Metadata URI handed to the product ledger at construction.
pub const PRODUCT_URI: &str = "some://random.uri";

/// Accounts the deployment runs with.
#[derive(Clone, Debug)]
pub struct NamedAccounts {
    pub deployer: Address,
}

impl NamedAccounts {
    pub fn generate(e: &Env) -> Self {
        Self {
            deployer: Address::generate(e),
        }
    }
}

/// Addresses of a deployed product ledger and store front.
#[derive(Clone, Debug)]
pub struct Deployment {
    pub product: Address,
    pub simple_store: Address,
    pub payment_token: Address,
}

impl Deployment {
    /// Full local deployment on a development network: native asset contract,
    /// both contracts, and the store granted transfer access.
    ///
    /// Local signer accounts are unlocked, so every authorization is mocked.
    pub fn fixture(e: &Env) -> Result<(Self, NamedAccounts)> {
        e.mock_all_auths();

        let accounts = NamedAccounts::generate(e);
        let native = e
            .register_stellar_asset_contract_v2(accounts.deployer.clone())
            .address();

        let deployment = deploy_all(e, &accounts, &native, &DeployConfig::development(), &TracingVerifier)?;
        deployment.grant_store_access(e, &accounts);

        Ok((deployment, accounts))
    }

    /// Gives the store front authority to move balances on the ledger.
    pub fn grant_store_access(&self, e: &Env, accounts: &NamedAccounts) {
        self.product_client(e)
            .grant_store_access(&accounts.deployer, &self.simple_store);
        info!(store = ?self.simple_store, "granted store access to products");
    }

    pub fn product_client<'a>(&self, e: &Env) -> ProductClient<'a> {
        ProductClient::new(e, &self.product)
    }

    pub fn store_client<'a>(&self, e: &Env) -> SimpleStoreClient<'a> {
        SimpleStoreClient::new(e, &self.simple_store)
    }
}

fn wait_confirmations(e: &Env, confirmations: u32) {
    let target = e.ledger().sequence().saturating_add(confirmations);
    e.ledger().set_sequence_number(target);
    debug!(sequence = target, confirmations, "confirmations reached");
}

/// Deploys the product ledger, then the store front referencing it.
///
/// Each step waits [`DeployConfig::wait_confirmations`] ledgers. When
/// [`DeployConfig::should_verify`] holds, both contracts are handed to
/// `verifier` with their constructor arguments.
pub fn deploy_all<V: Verifier>(
    e: &Env,
    accounts: &NamedAccounts,
    payment_token: &Address,
    config: &DeployConfig,
    verifier: &V,
) -> Result<Deployment> {
    let confirmations = config.wait_confirmations();
    info!(network = %config.network, confirmations, "deploying contracts");

    let product = e.register(
        Product,
        (&accounts.deployer, &String::from_str(e, PRODUCT_URI)),
    );
    wait_confirmations(e, confirmations);
    info!(address = ?product, "deployed Product");

    let simple_store = e.register(SimpleStore, (&product, payment_token));
    wait_confirmations(e, confirmations);
    info!(address = ?simple_store, "deployed SimpleStore");

    if config.should_verify() {
        info!("verifying contracts");
        verifier.verify(
            &product,
            &[format!("{:?}", accounts.deployer), PRODUCT_URI.to_string()],
        )?;
        verifier.verify(
            &simple_store,
            &[format!("{product:?}"), format!("{payment_token:?}")],
        )?;
    }

    Ok(Deployment {
        product,
        simple_store,
        payment_token: payment_token.clone(),
    })
}
