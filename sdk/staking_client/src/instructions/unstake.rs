//! Unstaking instruction builder.
//!
//! Returns tokens from the pool escrow to the staker. The escrow is drained
//! by the staking-authority PDA, so it is passed along unsigned. The rewarder
//! sits between the reclaimer and the signer; the program settles the
//! staker's pending reward against it while unstaking.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::ToAccountMetas;

use crate::instructions::{build, instruction};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unstaking {
    pub staking_data: Pubkey,
    pub stake_state_account: Pubkey,
    pub escrow_account: Pubkey,
    /// Token account receiving the unstaked tokens.
    pub reclaimer: Pubkey,
    pub rewarder_account: Pubkey,
    pub authority: Pubkey,
    pub staking_authority: Pubkey,
}

impl ToAccountMetas for Unstaking {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.staking_data, false),
            AccountMeta::new(self.stake_state_account, false),
            AccountMeta::new(self.escrow_account, false),
            AccountMeta::new(self.reclaimer, false),
            AccountMeta::new(self.rewarder_account, false),
            AccountMeta::new_readonly(self.authority, true),
            AccountMeta::new_readonly(self.staking_authority, false),
            AccountMeta::new_readonly(anchor_spl::token::ID, false),
        ]
    }
}

pub fn unstaking(program_id: Pubkey, accounts: &Unstaking, amount: u64) -> Instruction {
    build(program_id, accounts, &instruction::Unstaking { amount })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::Discriminator;

    fn accounts() -> Unstaking {
        Unstaking {
            staking_data: Pubkey::new_unique(),
            stake_state_account: Pubkey::new_unique(),
            escrow_account: Pubkey::new_unique(),
            reclaimer: Pubkey::new_unique(),
            rewarder_account: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            staking_authority: Pubkey::new_unique(),
        }
    }

    #[test]
    fn staking_authority_is_not_a_signer() {
        let ix = unstaking(crate::ID, &accounts(), 7);
        assert_eq!(&ix.data[..8], &instruction::Unstaking::DISCRIMINATOR);
        assert_eq!(&ix.data[8..], &7u64.to_le_bytes());
        assert!(!ix.accounts[6].is_signer);
        assert_eq!(ix.accounts.iter().filter(|m| m.is_signer).count(), 1);
    }

    #[test]
    fn rewarder_sits_between_reclaimer_and_authority() {
        let accounts = accounts();
        let ix = unstaking(crate::ID, &accounts, 7);
        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(
            keys,
            vec![
                accounts.staking_data,
                accounts.stake_state_account,
                accounts.escrow_account,
                accounts.reclaimer,
                accounts.rewarder_account,
                accounts.authority,
                accounts.staking_authority,
                anchor_spl::token::ID,
            ]
        );
        assert!(ix.accounts[4].is_writable);
        assert!(ix.accounts[5].is_signer);
    }
}
