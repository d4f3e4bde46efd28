use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("invalid block confirmation count `{0}`")]
    InvalidConfirmations(String),

    #[error("verification of {contract} failed: {reason}")]
    Verification { contract: String, reason: String },
}

pub type Result<T> = std::result::Result<T, DeployError>;
