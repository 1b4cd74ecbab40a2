//! Error types for the staking client.
//!
//! Two code tables live here:
//! - 6000-6099: the deployed program's custom errors, as listed in its IDL
//! - 7000-7099: failures raised by the client before anything reaches the chain
//!
//! Both collapse into [`StakingError`], a `{ code, message }` pair returned by
//! every fallible client call.

use std::fmt;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::InstructionError;
use serde::Deserialize;

/// Custom error codes returned by the staking program.
///
/// Order matters: the program numbers these from 6000 in declaration order.
#[error_code]
#[derive(PartialEq, Eq)]
pub enum ProgramErrorCode {
    /// [6000] Pool account does not hold staking data.
    #[msg("invalid staking account data")]
    InvalidStakingAccount,

    /// [6001] Staker account does not hold staking state.
    #[msg("invalid staking state account data")]
    InvalidStakingStateAccount,

    /// [6002] Source token account cannot cover the transfer.
    #[msg("insufficient balance")]
    InSufficientBalance,

    /// [6003] Escrow cannot cover the unstake.
    #[msg("insufficient escrow balance")]
    InSufficientEscrowBalance,

    /// [6004] Unstake amount exceeds the staker's position.
    #[msg("insufficient staked balance")]
    InSufficientStakedBalance,

    /// [6005] Claim amount exceeds the staker's gained reward.
    #[msg("insufficient gained reward")]
    InSufficientGainedReward,

    /// [6006] Funding timeframe is shorter than the pool minimum.
    #[msg("timeframe must big than min")]
    TimeframeTooShort,

    /// [6007] Funding timeframe is shorter than the minimum stake period.
    #[msg("timeframe must big than min stake period")]
    TimeframeBelowMinStakePeriod,
}

/// Every program error in code order.
pub const PROGRAM_ERRORS: [ProgramErrorCode; 8] = [
    ProgramErrorCode::InvalidStakingAccount,
    ProgramErrorCode::InvalidStakingStateAccount,
    ProgramErrorCode::InSufficientBalance,
    ProgramErrorCode::InSufficientEscrowBalance,
    ProgramErrorCode::InSufficientStakedBalance,
    ProgramErrorCode::InSufficientGainedReward,
    ProgramErrorCode::TimeframeTooShort,
    ProgramErrorCode::TimeframeBelowMinStakePeriod,
];

/// Failures detected on the client side.
#[error_code(offset = 7000)]
#[derive(PartialEq, Eq)]
pub enum ClientErrorCode {
    /// [7000] No bump seed produced an off-curve address.
    #[msg("no valid bump seed for program address")]
    DerivationExhausted,

    /// [7001] Pool account is missing on chain.
    #[msg("stakingData didn't init")]
    StakingDataNotInitialized,

    /// [7002] Staker state account is missing on chain.
    #[msg("stakingState didn't init")]
    StakingStateNotInitialized,

    /// [7003] Account bytes do not decode as the expected layout.
    #[msg("account data does not match expected layout")]
    InvalidAccountData,

    /// [7004] Clock sysvar bytes are missing or truncated.
    #[msg("clock sysvar data is invalid")]
    InvalidClockData,

    /// [7005] The connection could not complete a query.
    #[msg("connection request failed")]
    ConnectionFailed,

    /// [7006] Config file could not be parsed.
    #[msg("invalid client config")]
    InvalidConfig,

    /// [7007] Transaction failed without a custom program error.
    #[msg("unknown error")]
    TransactionFailed,

    /// [7008] Derived pool seeds disagree with the initializer or mint.
    #[msg("derived pool must use the signer and mint being initialized")]
    PoolAddressMismatch,
}

/// Structured failure returned by client operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakingError {
    pub code: u32,
    pub message: String,
}

pub type Result<T> = std::result::Result<T, StakingError>;

impl StakingError {
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Attach extra context to a client error message.
    pub fn with_detail(code: ClientErrorCode, detail: impl fmt::Display) -> Self {
        Self::new(code.into(), format!("{}: {}", code, detail))
    }
}

impl fmt::Display for StakingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StakingError {}

impl From<ProgramErrorCode> for StakingError {
    fn from(e: ProgramErrorCode) -> Self {
        Self::new(e.into(), e.to_string())
    }
}

impl From<ClientErrorCode> for StakingError {
    fn from(e: ClientErrorCode) -> Self {
        Self::new(e.into(), e.to_string())
    }
}

/// Why a submitted transaction did not land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionFailure {
    /// Instruction at the given index failed.
    InstructionError(u8, InstructionError),
    /// Anything else reported by the connection.
    Other(String),
}

/// One `{ code, msg }` row of the program's error table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorEntry {
    pub code: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub msg: String,
}

#[derive(Deserialize)]
struct IdlErrors {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

/// Ordered error table used to turn custom error codes into messages.
///
/// Lookup is by offset from the first entry, so entries must be contiguous
/// and sorted by code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTable {
    entries: Vec<ErrorEntry>,
}

impl Default for ErrorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ErrorTable {
    pub fn new(entries: Vec<ErrorEntry>) -> Self {
        Self { entries }
    }

    /// Table built from [`ProgramErrorCode`].
    pub fn builtin() -> Self {
        let entries = PROGRAM_ERRORS
            .iter()
            .map(|e| ErrorEntry {
                code: (*e).into(),
                name: e.name(),
                msg: e.to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Parse the `errors` array out of an Anchor IDL document.
    pub fn from_idl_json(idl: &str) -> Result<Self> {
        let parsed: IdlErrors = serde_json::from_str(idl)
            .map_err(|e| StakingError::with_detail(ClientErrorCode::InvalidConfig, e))?;
        Ok(Self::new(parsed.errors))
    }

    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Message for `code`, if it falls between the first and last entry.
    pub fn message_for(&self, code: u32) -> Option<&str> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        if code < first.code || code > last.code {
            return None;
        }
        self.entries
            .get((code - first.code) as usize)
            .map(|entry| entry.msg.as_str())
    }

    /// Human readable text for a failed transaction.
    pub fn format_error(&self, failure: &TransactionFailure) -> String {
        match failure {
            TransactionFailure::InstructionError(_, InstructionError::Custom(code)) => self
                .message_for(*code)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Custom error code= {}", code)),
            _ => ClientErrorCode::TransactionFailed.to_string(),
        }
    }

    /// Map a failed transaction to a [`StakingError`].
    pub fn to_staking_error(&self, failure: &TransactionFailure) -> StakingError {
        let code = match failure {
            TransactionFailure::InstructionError(_, InstructionError::Custom(code)) => *code,
            _ => ClientErrorCode::TransactionFailed.into(),
        };
        StakingError::new(code, self.format_error(failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_starts_at_anchor_offset() {
        let table = ErrorTable::builtin();
        assert_eq!(table.entries()[0].code, 6000);
        assert_eq!(table.entries().last().map(|e| e.code), Some(6007));
        assert_eq!(table.message_for(6004), Some("insufficient staked balance"));
    }

    #[test]
    fn custom_code_inside_table_maps_to_message() {
        let table = ErrorTable::builtin();
        let failure = TransactionFailure::InstructionError(0, InstructionError::Custom(6005));
        assert_eq!(table.format_error(&failure), "insufficient gained reward");

        let err = table.to_staking_error(&failure);
        assert_eq!(err.code, 6005);
        assert_eq!(err, StakingError::from(ProgramErrorCode::InSufficientGainedReward));
    }

    #[test]
    fn custom_code_outside_table_reports_the_code() {
        let table = ErrorTable::builtin();
        let failure = TransactionFailure::InstructionError(0, InstructionError::Custom(42));
        assert_eq!(table.format_error(&failure), "Custom error code= 42");
    }

    #[test]
    fn non_custom_failure_is_unknown() {
        let table = ErrorTable::builtin();
        let failure = TransactionFailure::Other("blockhash not found".to_string());
        assert_eq!(table.format_error(&failure), "unknown error");
        assert_eq!(table.to_staking_error(&failure).code, 7007);

        let failure = TransactionFailure::InstructionError(1, InstructionError::InvalidArgument);
        assert_eq!(table.format_error(&failure), "unknown error");
    }

    #[test]
    fn idl_table_uses_offset_lookup() {
        let idl = r#"{
            "version": "0.1.0",
            "name": "staking",
            "errors": [
                { "code": 300, "name": "First", "msg": "first" },
                { "code": 301, "name": "Second", "msg": "second" }
            ]
        }"#;
        let table = ErrorTable::from_idl_json(idl).unwrap();
        assert_eq!(table.message_for(301), Some("second"));
        assert_eq!(table.message_for(302), None);
        assert_eq!(table.message_for(299), None);
    }

    #[test]
    fn empty_table_never_matches() {
        let table = ErrorTable::new(vec![]);
        assert_eq!(table.message_for(6000), None);
    }

    #[test]
    fn client_codes_use_their_own_offset() {
        let err: StakingError = ClientErrorCode::DerivationExhausted.into();
        assert_eq!(err.code, 7000);
        assert_eq!(err.to_string(), "no valid bump seed for program address");
    }
}
