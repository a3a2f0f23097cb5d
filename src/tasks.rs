use std::path::PathBuf;

use clap::Parser;
use eyre::Result;

use deposit_contract::artifact::Artifact;
use deposit_contract::compiler::compile_contract;
use deposit_contract::config::OutputConfig;
use deposit_contract::deploy::deploy_contract;
use deposit_contract::params::DepositParams;
use deposit_contract::rewrite::rewrite_constants;

#[derive(Parser, Debug)]
pub struct ReplaceArgs {
    /// Path to the contract source to rewrite
    #[clap(long, default_value = "contracts/validator_registration.v.py")]
    contract: PathBuf,

    /// The value of the constant MIN_DEPOSIT_AMOUNT
    #[clap(long, default_value = "1000000000")]
    min_deposit_amount: String,

    /// The value of the constant DEPOSIT_CONTRACT_TREE_DEPTH
    #[clap(long, default_value = "32")]
    deposit_contract_tree_depth: String,

    /// The value of the constant PUBKEY_LENGTH
    #[clap(long, default_value = "48")]
    pubkey_length: String,

    /// The value of the constant WITHDRAWAL_CREDENTIALS_LENGTH
    #[clap(long, default_value = "32")]
    withdrawal_credentials_length: String,

    /// The value of the constant SIGNATURE_LENGTH
    #[clap(long, default_value = "96")]
    signature_length: String,

    /// The value of the constant MAX_DEPOSIT_COUNT (default: 2**DEPOSIT_CONTRACT_TREE_DEPTH - 1)
    #[clap(long)]
    max_deposit_count: Option<String>,

    /// The value of the constant AMOUNT_LENGTH
    #[clap(long, default_value = "8")]
    amount_length: String,
}

impl ReplaceArgs {
    fn params(&self) -> DepositParams {
        DepositParams {
            min_deposit_amount: self.min_deposit_amount.clone(),
            deposit_contract_tree_depth: self.deposit_contract_tree_depth.clone(),
            pubkey_length: self.pubkey_length.clone(),
            withdrawal_credentials_length: self.withdrawal_credentials_length.clone(),
            signature_length: self.signature_length.clone(),
            max_deposit_count: self.max_deposit_count.clone(),
            amount_length: self.amount_length.clone(),
        }
    }

    pub fn run(&self) -> Result<()> {
        rewrite_constants(&self.contract, &self.params())?;
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct CompileArgs {
    #[clap(flatten)]
    replace: ReplaceArgs,

    /// Copy the compiled ABI to this path
    #[clap(long)]
    abi_path: Option<PathBuf>,

    /// Copy the compiled bytecode to this path
    #[clap(long)]
    bytecode_path: Option<PathBuf>,
}

impl CompileArgs {
    pub fn run(&self) -> Result<Artifact> {
        self.replace.run()?;

        let artifact = compile_contract(&self.replace.contract)?;
        log::info!("compiled contract {}", artifact.contract_name);

        let config = OutputConfig {
            abi_path: self.abi_path.clone(),
            bytecode_path: self.bytecode_path.clone(),
        };
        artifact.write_outputs(&config)?;
        Ok(artifact)
    }
}

#[derive(Parser, Debug)]
pub struct DeployArgs {
    #[clap(flatten)]
    compile: CompileArgs,

    /// JSON-RPC endpoint of the target network
    #[clap(long, default_value = "http://localhost:8545")]
    rpc_url: String,

    /// Hex-encoded private key of the deploying account
    #[clap(long)]
    private_key: String,
}

impl DeployArgs {
    pub async fn run(self) -> Result<()> {
        let artifact = self.compile.run()?;

        let address = deploy_contract(&artifact, &self.rpc_url, &self.private_key).await?;
        println!("Contract deployed to {address:?}");
        Ok(())
    }
}
