//! Claim-reward instruction builder.
//!
//! Pays part or all of a staker's gained reward out of the rewarder account.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::ToAccountMetas;

use crate::instructions::{build, instruction};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimReward {
    pub staking_data: Pubkey,
    pub stake_state_account: Pubkey,
    pub rewarder_account: Pubkey,
    /// Token account receiving the reward.
    pub claimer: Pubkey,
    pub authority: Pubkey,
    pub staking_authority: Pubkey,
}

impl ToAccountMetas for ClaimReward {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.staking_data, false),
            AccountMeta::new(self.stake_state_account, false),
            AccountMeta::new(self.rewarder_account, false),
            AccountMeta::new(self.claimer, false),
            AccountMeta::new_readonly(self.authority, true),
            AccountMeta::new_readonly(self.staking_authority, false),
            AccountMeta::new_readonly(anchor_spl::token::ID, false),
        ]
    }
}

/// Claim `amount` of the gained reward; the program rejects amounts above it.
pub fn claim_reward(program_id: Pubkey, accounts: &ClaimReward, amount: u64) -> Instruction {
    build(program_id, accounts, &instruction::ClaimReward { amount })
}
