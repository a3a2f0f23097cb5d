use num_bigint::BigUint;

use crate::constants::Constant;
use crate::error::{ContractError, ContractResult};

/// Replacement values for the contract constants, as given on the command
/// line. All values are kept as strings; they are spliced into the source
/// text verbatim.
#[derive(Debug, Clone)]
pub struct DepositParams {
    pub min_deposit_amount: String,
    pub deposit_contract_tree_depth: String,
    pub pubkey_length: String,
    pub withdrawal_credentials_length: String,
    pub signature_length: String,
    /// Defaults to `2^depth - 1` when not supplied.
    pub max_deposit_count: Option<String>,
    pub amount_length: String,
}

impl Default for DepositParams {
    fn default() -> Self {
        DepositParams {
            min_deposit_amount: "1000000000".to_string(),
            deposit_contract_tree_depth: "32".to_string(),
            pubkey_length: "48".to_string(),
            withdrawal_credentials_length: "32".to_string(),
            signature_length: "96".to_string(),
            max_deposit_count: None,
            amount_length: "8".to_string(),
        }
    }
}

impl DepositParams {
    /// Resolves every constant to its replacement value.
    ///
    /// The returned list is the full, immutable parameter set handed to the
    /// rewrite step; every value is guaranteed non-empty.
    pub fn resolve(&self) -> ContractResult<Vec<(Constant, String)>> {
        let max_deposit_count = resolve_max_deposit_count(
            &self.deposit_contract_tree_depth,
            self.max_deposit_count.as_deref(),
        )?;

        let resolved = vec![
            (Constant::MinDepositAmount, self.min_deposit_amount.clone()),
            (
                Constant::DepositContractTreeDepth,
                self.deposit_contract_tree_depth.clone(),
            ),
            (Constant::PubkeyLength, self.pubkey_length.clone()),
            (
                Constant::WithdrawalCredentialsLength,
                self.withdrawal_credentials_length.clone(),
            ),
            (Constant::SignatureLength, self.signature_length.clone()),
            (Constant::MaxDepositCount, max_deposit_count),
            (Constant::AmountLength, self.amount_length.clone()),
        ];

        for (constant, value) in &resolved {
            if value.is_empty() {
                return Err(ContractError::invalid_parameter(format!(
                    "empty value for constant {constant}"
                )));
            }
        }
        Ok(resolved)
    }
}

/// Returns the supplied value if present, otherwise `2^depth - 1` as a
/// decimal string. The depth of 32 used in production already puts the
/// result outside u32 range; arbitrary depths need arbitrary precision.
pub fn resolve_max_deposit_count(depth: &str, supplied: Option<&str>) -> ContractResult<String> {
    if let Some(value) = supplied {
        return Ok(value.to_string());
    }

    let depth: u32 = depth.trim().parse().map_err(|_| {
        ContractError::invalid_parameter(format!(
            "depositContractTreeDepth must be a non-negative integer, got {depth:?}"
        ))
    })?;

    let count = (BigUint::from(1u8) << depth) - BigUint::from(1u8);
    Ok(count.to_string())
}
