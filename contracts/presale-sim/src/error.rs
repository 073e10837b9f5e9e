use cosmwasm_std::{CheckedFromRatioError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    CheckedFromRatio(#[from] CheckedFromRatioError),

    #[error("Participant not found: {address}. Connect the wallet first")]
    UnknownParticipant { address: String },

    #[error("Address is not whitelisted for this presale")]
    NotWhitelisted,

    #[error("Presale is not active (status: {status})")]
    SaleNotActive { status: String },

    #[error("Minimum purchase is {min}")]
    BelowMinimum { min: String },

    #[error("Total contribution cannot exceed {max}")]
    ExceedsMaximum { max: String },

    #[error("Not enough tokens left. Available: {available}, requested: {requested}")]
    InsufficientSupply {
        available: String,
        requested: String,
    },

    #[error("Invalid whitelist policy: approval_bps {approval_bps} exceeds 10000")]
    InvalidWhitelistPolicy { approval_bps: u16 },
}
