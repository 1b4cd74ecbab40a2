//! Initialize-stake-state instruction builder.
//!
//! Creates the per-staker state PDA under an existing pool.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, sysvar};
use anchor_lang::ToAccountMetas;

use crate::error::Result;
use crate::instructions::{build, instruction};
use crate::pda::staking_state_pda;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializeStakeState {
    pub staking_data: Pubkey,
    pub stake_state_account: Pubkey,
    pub authority: Pubkey,
}

impl InitializeStakeState {
    pub fn new(staking_data: Pubkey, authority: Pubkey, program_id: &Pubkey) -> Result<Self> {
        let (stake_state_account, _) = staking_state_pda(&staking_data, &authority, program_id)?;
        Ok(Self {
            staking_data,
            stake_state_account,
            authority,
        })
    }
}

impl ToAccountMetas for InitializeStakeState {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.staking_data, false),
            AccountMeta::new(self.stake_state_account, false),
            AccountMeta::new(self.authority, true),
            AccountMeta::new_readonly(anchor_spl::token::ID, false),
            AccountMeta::new_readonly(anchor_lang::system_program::ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ]
    }
}

pub fn initialize_stake_state(program_id: Pubkey, accounts: &InitializeStakeState) -> Instruction {
    build(program_id, accounts, &instruction::InitializeStakeState {})
}
