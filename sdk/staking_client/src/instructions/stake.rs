//! Staking instruction builder.
//!
//! Moves tokens from the staker's token account into the pool escrow.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::ToAccountMetas;

use crate::instructions::{build, instruction};

/// Accounts required for staking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Staking {
    pub staking_data: Pubkey,
    pub stake_state_account: Pubkey,
    /// Escrow recorded in the pool account.
    pub escrow_account: Pubkey,
    /// Staker's token account for the pool mint.
    pub staker_account: Pubkey,
    pub authority: Pubkey,
}

impl ToAccountMetas for Staking {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.staking_data, false),
            AccountMeta::new(self.stake_state_account, false),
            AccountMeta::new(self.escrow_account, false),
            AccountMeta::new(self.staker_account, false),
            AccountMeta::new_readonly(self.authority, true),
            AccountMeta::new_readonly(anchor_spl::token::ID, false),
        ]
    }
}

pub fn staking(program_id: Pubkey, accounts: &Staking, amount: u64) -> Instruction {
    build(program_id, accounts, &instruction::Staking { amount })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_amount_after_discriminator() {
        let accounts = Staking {
            staking_data: Pubkey::new_unique(),
            stake_state_account: Pubkey::new_unique(),
            escrow_account: Pubkey::new_unique(),
            staker_account: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
        };
        let ix = staking(crate::ID, &accounts, 1000);
        assert_eq!(&ix.data[8..], &1000u64.to_le_bytes());
        assert_eq!(ix.accounts[4].pubkey, accounts.authority);
        assert!(ix.accounts[4].is_signer);
        assert!(!ix.accounts[4].is_writable);
        assert_eq!(ix.accounts[5].pubkey, anchor_spl::token::ID);
    }
}
