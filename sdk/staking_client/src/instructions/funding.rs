//! Funding instruction builder.
//!
//! Deposits reward tokens into the rewarder account and opens a new funding
//! window of `timeframe_in_second`. Only the pool's funder authority may fund;
//! the program enforces that, along with the minimum timeframe rules.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::ToAccountMetas;

use crate::instructions::{build, instruction};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Funding {
    pub staking_data: Pubkey,
    pub rewarder_account: Pubkey,
    /// Funder's token account for the pool mint.
    pub funder_account: Pubkey,
    pub authority: Pubkey,
}

impl ToAccountMetas for Funding {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.staking_data, false),
            AccountMeta::new(self.rewarder_account, false),
            AccountMeta::new(self.funder_account, false),
            AccountMeta::new_readonly(self.authority, true),
            AccountMeta::new_readonly(anchor_spl::token::ID, false),
        ]
    }
}

pub fn funding(program_id: Pubkey, accounts: &Funding, amount: u64, timeframe_in_second: u64) -> Instruction {
    build(
        program_id,
        accounts,
        &instruction::Funding {
            amount,
            timeframe_in_second,
        },
    )
}
