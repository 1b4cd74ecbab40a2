//! Program-derived addresses used by the staking program.
//!
//! Each helper mirrors the seeds the program checks, so accounts can be
//! located without a round trip.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::{ClientErrorCode, Result};

/// Derive an off-curve address from a seed label plus ordered components.
///
/// Bump seeds are tried from 255 down. Fails with
/// [`ClientErrorCode::DerivationExhausted`] when no bump yields a valid address.
pub fn derive(seed_label: &[u8], components: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    let mut seeds: Vec<&[u8]> = Vec::with_capacity(components.len() + 1);
    seeds.push(seed_label);
    seeds.extend_from_slice(components);
    Pubkey::try_find_program_address(&seeds, program_id)
        .ok_or_else(|| ClientErrorCode::DerivationExhausted.into())
}

/// Pool PDA for the derived layout: `"staking" + authority + mint`.
pub fn staking_data_pda(authority: &Pubkey, mint: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(STAKING_SEED, &[authority.as_ref(), mint.as_ref()], program_id)
}

pub fn escrow_pda(staking_data: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(ESCROW_SEED, &[staking_data.as_ref()], program_id)
}

pub fn rewarder_pda(staking_data: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(REWARDER_SEED, &[staking_data.as_ref()], program_id)
}

/// Signer PDA the program uses to move tokens out of escrow and rewarder.
pub fn staking_authority_pda(staking_data: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(STAKING_AUTHORITY_SEED, &[staking_data.as_ref()], program_id)
}

pub fn staking_state_pda(staking_data: &Pubkey, staker: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(STAKER_SEED, &[staking_data.as_ref(), staker.as_ref()], program_id)
}

/// How the pool account address is obtained.
///
/// Program revisions differ here: older ones derive the pool from authority
/// and mint, newer ones expect a freshly generated keypair account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolAddressing {
    Derived { authority: Pubkey, mint: Pubkey },
    Generated { address: Pubkey },
}

impl PoolAddressing {
    pub fn resolve(&self, program_id: &Pubkey) -> Result<Pubkey> {
        match self {
            PoolAddressing::Derived { authority, mint } => {
                staking_data_pda(authority, mint, program_id).map(|(address, _)| address)
            }
            PoolAddressing::Generated { address } => Ok(*address),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, PoolAddressing::Generated { .. })
    }
}
