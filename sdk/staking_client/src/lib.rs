//! # Staking Client
//!
//! Off-chain client for the escrow staking program. The program keeps one
//! `StakingData` pool per (authority, mint) pair and one `StakingState` record
//! per staker. Rewards are funded into a rewarder account for a timeframe and
//! distributed pro rata to stakers, capped by the pool's maximum APY.
//!
//! ## Features
//! - Program-derived address lookup for every account the program uses
//! - Instruction builders for initialize, stake, unstake, claim, fund and
//!   max-APY updates
//! - Reward projection that mirrors the program's floating point formula
//! - Account decoding for pool, staker and clock data
//! - A connection-agnostic client that maps program errors to readable messages

use anchor_lang::prelude::*;

declare_id!("HohQ7VZFqDDn785ukULBKpNRKHsZXQPtCeUJ9PzYxgZ");

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod reward;
pub mod state;

pub mod prelude {
    pub use crate::client::{Connection, StakingClient, TransactionFailure};
    pub use crate::config::ClientConfig;
    pub use crate::error::{ClientErrorCode, ErrorTable, ProgramErrorCode, Result, StakingError};
    pub use crate::pda::{
        derive, escrow_pda, rewarder_pda, staking_authority_pda, staking_data_pda,
        staking_state_pda, PoolAddressing,
    };
    pub use crate::reward::{calculate_reward, gained_reward, project, reward_amount, RewardSnapshot};
    pub use crate::state::{ClockSnapshot, StakerEntry, StakingData, StakingState};
}
