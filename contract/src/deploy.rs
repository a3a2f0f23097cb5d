use std::sync::Arc;

use ethers::abi::Abi;
use ethers::contract::ContractFactory;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, Bytes};
use eyre::{Result, WrapErr};

use crate::artifact::Artifact;

/// Deploys the compiled contract and returns its address.
///
/// The constructor of validator_registration takes no arguments, so the
/// deployment transaction is just the creation bytecode.
pub async fn deploy_contract(
    artifact: &Artifact,
    rpc_url: &str,
    private_key: &str,
) -> Result<Address> {
    let provider = Provider::<Http>::try_from(rpc_url)?;
    let chain_id = provider.get_chainid().await?;
    log::info!("deploying {} to chain {chain_id}", artifact.contract_name);

    let wallet = private_key
        .parse::<LocalWallet>()
        .wrap_err("invalid private key")?
        .with_chain_id(chain_id.as_u64());
    let client = Arc::new(SignerMiddleware::new(provider, wallet));

    let abi: Abi = serde_json::from_value(artifact.abi.clone())?;
    let bytecode = Bytes::from(hex::decode(
        artifact.bytecode.trim_start_matches("0x"),
    )?);

    let factory = ContractFactory::new(abi, bytecode, client);
    let contract = factory
        .deploy(())?
        .send()
        .await
        .wrap_err("contract deployment failed")?;

    Ok(contract.address())
}
