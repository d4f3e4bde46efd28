use crate::{DeployError, Result};

/// Networks where contracts are never submitted for verification.
pub const DEVELOPMENT_CHAINS: [&str; 3] = ["local", "standalone", "sandbox"];

const NETWORK_VAR: &str = "STELLAR_NETWORK";
const CONFIRMATIONS_VAR: &str = "BLOCK_CONFIRMATIONS";
const API_KEY_VAR: &str = "EXPLORER_API_KEY";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployConfig {
    pub network: String,
    pub block_confirmations: Option<u32>,
    pub explorer_api_key: Option<String>,
}

impl DeployConfig {
    pub fn development() -> Self {
        Self {
            network: DEVELOPMENT_CHAINS[0].to_string(),
            block_confirmations: None,
            explorer_api_key: None,
        }
    }

    /// Reads `STELLAR_NETWORK`, `BLOCK_CONFIRMATIONS` and `EXPLORER_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = lookup(NETWORK_VAR)
            .filter(|network| !network.is_empty())
            .unwrap_or_else(|| DEVELOPMENT_CHAINS[0].to_string());

        let block_confirmations = match lookup(CONFIRMATIONS_VAR) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u32>()
                    .map_err(|_| DeployError::InvalidConfirmations(raw))?,
            ),
            None => None,
        };

        let explorer_api_key = lookup(API_KEY_VAR).filter(|key| !key.is_empty());

        Ok(Self {
            network,
            block_confirmations,
            explorer_api_key,
        })
    }

    /// Confirmations to wait after each deployment; unset or zero means one.
    pub fn wait_confirmations(&self) -> u32 {
        self.block_confirmations.filter(|n| *n > 0).unwrap_or(1)
    }

    pub fn is_development(&self) -> bool {
        DEVELOPMENT_CHAINS.contains(&self.network.as_str())
    }

    pub fn should_verify(&self) -> bool {
        !self.is_development() && self.explorer_api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_local_network() {
        let config = DeployConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DeployConfig::development());
        assert!(config.is_development());
        assert_eq!(config.wait_confirmations(), 1);
        assert!(!config.should_verify());
    }

    #[test]
    fn zero_confirmations_fall_back_to_one() {
        let config = DeployConfig::from_lookup(lookup_from(&[("BLOCK_CONFIRMATIONS", "0")])).unwrap();
        assert_eq!(config.block_confirmations, Some(0));
        assert_eq!(config.wait_confirmations(), 1);

        let config = DeployConfig::from_lookup(lookup_from(&[("BLOCK_CONFIRMATIONS", " 6 ")])).unwrap();
        assert_eq!(config.wait_confirmations(), 6);
    }

    #[test]
    fn rejects_malformed_confirmations() {
        let err = DeployConfig::from_lookup(lookup_from(&[("BLOCK_CONFIRMATIONS", "six")])).unwrap_err();
        assert!(matches!(err, DeployError::InvalidConfirmations(raw) if raw == "six"));
    }

    #[test]
    fn verifies_only_on_public_network_with_key() {
        let testnet_with_key = DeployConfig::from_lookup(lookup_from(&[
            ("STELLAR_NETWORK", "testnet"),
            ("EXPLORER_API_KEY", "secret"),
        ]))
        .unwrap();
        assert!(testnet_with_key.should_verify());

        let testnet_without_key =
            DeployConfig::from_lookup(lookup_from(&[("STELLAR_NETWORK", "testnet"), ("EXPLORER_API_KEY", "")]))
                .unwrap();
        assert!(!testnet_without_key.should_verify());

        let local_with_key = DeployConfig::from_lookup(lookup_from(&[
            ("STELLAR_NETWORK", "standalone"),
            ("EXPLORER_API_KEY", "secret"),
        ]))
        .unwrap();
        assert!(!local_with_key.should_verify());
    }
}
