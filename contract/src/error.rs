use crate::constants::Constant;

/// Result alias with `ContractError` as error
pub type ContractResult<T> = Result<T, ContractError>;

/// Errors produced while rewriting, compiling or packaging the contract
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("constant {0} not found in contract source")]
    ConstantNotFound(Constant),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("vyper failed: {0}")]
    Compiler(String),
    #[error("no artifact produced for contract {0}")]
    ArtifactNotFound(String),
}

impl ContractError {
    /// Create an `InvalidParameter` error with a message
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        ContractError::InvalidParameter(msg.into())
    }
}
