use std::path::Path;
use std::process::Command;

use serde_json::Value;

use crate::artifact::Artifact;
use crate::error::{ContractError, ContractResult};

/// Compiles a Vyper contract and returns its build artifact.
///
/// Runs the `vyper` binary in combined-json mode and picks the compiled
/// contract back out of the output by source path.
pub fn compile_contract(source: &Path) -> ContractResult<Artifact> {
    let name = contract_name(source);
    log::info!("compiling {}", source.display());

    let output = Command::new("vyper")
        .arg("-f")
        .arg("combined_json")
        .arg(source)
        .output()?;
    if !output.status.success() {
        return Err(ContractError::Compiler(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    let combined: Value = serde_json::from_slice(&output.stdout)?;
    let entry = combined
        .as_object()
        .and_then(|contracts| {
            contracts
                .iter()
                .find(|(key, _)| Path::new(key) == source || Path::new(key).file_name() == source.file_name())
                .map(|(_, artifact)| artifact)
        })
        .ok_or_else(|| ContractError::ArtifactNotFound(name.clone()))?;

    let abi = entry
        .get("abi")
        .cloned()
        .ok_or_else(|| ContractError::ArtifactNotFound(name.clone()))?;
    let bytecode = entry
        .get("bytecode")
        .and_then(Value::as_str)
        .ok_or_else(|| ContractError::ArtifactNotFound(name.clone()))?
        .to_string();

    Ok(Artifact {
        contract_name: name,
        abi,
        bytecode,
    })
}

/// `validator_registration.v.py` compiles to a contract named
/// `validator_registration`.
fn contract_name(source: &Path) -> String {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().trim_end_matches(".v").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_name_strips_vyper_suffixes() {
        assert_eq!(
            contract_name(Path::new("contracts/validator_registration.v.py")),
            "validator_registration"
        );
        assert_eq!(contract_name(Path::new("deposit.vy")), "deposit");
    }
}
