pub mod artifact;

pub mod compiler;

pub mod config;

pub mod constants;
pub mod deploy;
pub mod error;

pub mod params;
pub mod rewrite;

pub use constants::Constant;
pub use error::ContractError;

pub use ethers::types::Address;
