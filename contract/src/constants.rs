use std::fmt;

use regex::Regex;

use crate::error::{ContractError, ContractResult};

/// The named constants of the validator_registration contract that can be
/// overridden before compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    MinDepositAmount,
    DepositContractTreeDepth,
    PubkeyLength,
    WithdrawalCredentialsLength,
    SignatureLength,
    MaxDepositCount,
    AmountLength,
}

impl Constant {
    pub const ALL: [Constant; 7] = [
        Constant::MinDepositAmount,
        Constant::DepositContractTreeDepth,
        Constant::PubkeyLength,
        Constant::WithdrawalCredentialsLength,
        Constant::SignatureLength,
        Constant::MaxDepositCount,
        Constant::AmountLength,
    ];

    /// The identifier as it appears in the contract source.
    pub fn name(&self) -> &'static str {
        match self {
            Constant::MinDepositAmount => "MIN_DEPOSIT_AMOUNT",
            Constant::DepositContractTreeDepth => "DEPOSIT_CONTRACT_TREE_DEPTH",
            Constant::PubkeyLength => "PUBKEY_LENGTH",
            Constant::WithdrawalCredentialsLength => "WITHDRAWAL_CREDENTIALS_LENGTH",
            Constant::SignatureLength => "SIGNATURE_LENGTH",
            Constant::MaxDepositCount => "MAX_DEPOSIT_COUNT",
            Constant::AmountLength => "AMOUNT_LENGTH",
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Replaces the value of a constant declaration inside the contract source.
///
/// The declaration is a single line of the form `NAME ... = VALUE [trailing]`.
/// Only the value token is replaced; the text before the value and any
/// trailing comment or whitespace are kept byte-for-byte.
pub fn replace_constant(source: &str, constant: Constant, value: &str) -> ContractResult<String> {
    let pattern = format!(r"(?m)^({}[^=]*=\s*)(\S+)((?:[#\s].*)?)$", constant.name());
    let re = Regex::new(&pattern).expect("constant pattern is valid");

    let caps = re
        .captures(source)
        .ok_or(ContractError::ConstantNotFound(constant))?;
    let whole = caps.get(0).expect("capture group 0 always exists");

    let mut patched = String::with_capacity(source.len() + value.len());
    patched.push_str(&source[..whole.start()]);
    patched.push_str(&caps[1]);
    patched.push_str(value);
    patched.push_str(&caps[3]);
    patched.push_str(&source[whole.end()..]);
    Ok(patched)
}
