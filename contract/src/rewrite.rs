use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::constants::replace_constant;
use crate::error::ContractResult;
use crate::params::DepositParams;

/// Rewrites all constant declarations in the contract source file.
///
/// The patched text is written to a temporary file in the same directory and
/// renamed over the original, so a crash mid-write cannot leave the source
/// truncated. The rewrite itself is not rolled back if a later build step
/// fails.
pub fn rewrite_constants(path: &Path, params: &DepositParams) -> ContractResult<()> {
    let resolved = params.resolve()?;

    let mut source = fs::read_to_string(path)?;
    for (constant, value) in &resolved {
        source = replace_constant(&source, *constant, value)?;
        log::debug!("{constant} = {value}");
    }

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(source.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;

    log::info!("rewrote {} constants in {}", resolved.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Constant;
    use crate::error::ContractError;

    const SOURCE: &str = "\
MIN_DEPOSIT_AMOUNT: constant(uint256) = 1000000000  # gwei
DEPOSIT_CONTRACT_TREE_DEPTH: constant(uint256) = 32
PUBKEY_LENGTH: constant(uint256) = 48  # bytes
WITHDRAWAL_CREDENTIALS_LENGTH: constant(uint256) = 32  # bytes
SIGNATURE_LENGTH: constant(uint256) = 96  # bytes
MAX_DEPOSIT_COUNT: constant(uint256) = 4294967295
AMOUNT_LENGTH: constant(uint256) = 8  # bytes

Deposit: event({data: bytes[528], index: bytes[8]})
";

    fn write_source(dir: &Path, text: &str) -> std::path::PathBuf {
        let path = dir.join("validator_registration.v.py");
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn rewrites_every_constant_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(dir.path(), SOURCE);

        let params = DepositParams {
            min_deposit_amount: "5000000000".to_string(),
            deposit_contract_tree_depth: "16".to_string(),
            pubkey_length: "33".to_string(),
            withdrawal_credentials_length: "20".to_string(),
            signature_length: "65".to_string(),
            max_deposit_count: None,
            amount_length: "4".to_string(),
        };
        rewrite_constants(&path, &params).unwrap();

        let patched = fs::read_to_string(&path).unwrap();
        let expected = [
            "MIN_DEPOSIT_AMOUNT: constant(uint256) = 5000000000  # gwei",
            "DEPOSIT_CONTRACT_TREE_DEPTH: constant(uint256) = 16",
            "PUBKEY_LENGTH: constant(uint256) = 33  # bytes",
            "WITHDRAWAL_CREDENTIALS_LENGTH: constant(uint256) = 20  # bytes",
            "SIGNATURE_LENGTH: constant(uint256) = 65  # bytes",
            "MAX_DEPOSIT_COUNT: constant(uint256) = 65535",
            "AMOUNT_LENGTH: constant(uint256) = 4  # bytes",
        ];
        for line in expected {
            assert!(patched.contains(line), "missing line: {line}");
        }
        // unrelated lines survive byte-for-byte
        assert!(patched.contains("Deposit: event({data: bytes[528], index: bytes[8]})\n"));

        // re-parsing the file recovers exactly the values we supplied
        let reparsed: Vec<String> = Constant::ALL
            .iter()
            .map(|c| {
                patched
                    .lines()
                    .find(|l| l.starts_with(c.name()))
                    .and_then(|l| l.split('=').nth(1))
                    .and_then(|v| v.split_whitespace().next())
                    .unwrap()
                    .to_string()
            })
            .collect();
        assert_eq!(
            reparsed,
            ["5000000000", "16", "33", "20", "65", "65535", "4"]
        );
    }

    #[test]
    fn missing_declaration_fails_and_keeps_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let truncated = SOURCE
            .lines()
            .filter(|l| !l.starts_with("SIGNATURE_LENGTH"))
            .collect::<Vec<_>>()
            .join("\n");
        let path = write_source(dir.path(), &truncated);

        let err = rewrite_constants(&path, &DepositParams::default()).unwrap_err();
        assert!(matches!(
            err,
            ContractError::ConstantNotFound(Constant::SignatureLength)
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), truncated);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = rewrite_constants(
            &dir.path().join("nope.v.py"),
            &DepositParams::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Io(_)));
    }
}
