use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::OutputConfig;
use crate::error::ContractResult;

/// Compiled output for one contract: its ABI and creation bytecode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(rename = "contractName")]
    pub contract_name: String,
    pub abi: Value,
    /// 0x-prefixed hex string of the creation bytecode.
    pub bytecode: String,
}

impl Artifact {
    /// Copies the ABI and bytecode to the configured paths, creating parent
    /// directories as needed. Each copy is skipped when its path is unset.
    pub fn write_outputs(&self, config: &OutputConfig) -> ContractResult<()> {
        if let Some(path) = &config.abi_path {
            ensure_parent(path)?;
            fs::write(path, serde_json::to_string(&self.abi)?)?;
            log::info!("wrote ABI to {}", path.display());
        }
        if let Some(path) = &config.bytecode_path {
            ensure_parent(path)?;
            fs::write(path, &self.bytecode)?;
            log::info!("wrote bytecode to {}", path.display());
        }
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artifact() -> Artifact {
        Artifact {
            contract_name: "validator_registration".to_string(),
            abi: json!([{"name": "deposit", "type": "function", "inputs": []}]),
            bytecode: "0x600160005260206000f3".to_string(),
        }
    }

    #[test]
    fn writes_both_outputs_creating_directories() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig {
            abi_path: Some(dir.path().join("out/abi/validator_registration.json")),
            bytecode_path: Some(dir.path().join("out/bytecode.txt")),
        };
        artifact().write_outputs(&config).unwrap();

        let abi = fs::read_to_string(config.abi_path.as_ref().unwrap()).unwrap();
        let parsed: Value = serde_json::from_str(&abi).unwrap();
        assert_eq!(parsed, artifact().abi);
        // serde_json's default map is ordered by key
        assert!(abi.find("\"inputs\"").unwrap() < abi.find("\"name\"").unwrap());

        let bytecode = fs::read_to_string(config.bytecode_path.as_ref().unwrap()).unwrap();
        assert_eq!(bytecode, "0x600160005260206000f3");
    }

    #[test]
    fn unset_paths_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        artifact().write_outputs(&OutputConfig::default()).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
