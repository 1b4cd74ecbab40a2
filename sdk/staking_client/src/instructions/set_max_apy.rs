//! Set-max-apy instruction builder.
//!
//! Admin-only update of the pool's annual yield ceiling. The program checks
//! that the signer is the pool authority.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::ToAccountMetas;

use crate::instructions::{build, instruction};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetMaxApy {
    pub staking_data: Pubkey,
    pub authority: Pubkey,
}

impl ToAccountMetas for SetMaxApy {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.staking_data, false),
            AccountMeta::new_readonly(self.authority, true),
        ]
    }
}

pub fn set_max_apy(program_id: Pubkey, accounts: &SetMaxApy, apy_max: u32) -> Instruction {
    build(program_id, accounts, &instruction::SetMaxApy { apy_max })
}
