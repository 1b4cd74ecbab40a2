//! Initialize instruction builder.
//!
//! Creates the pool account together with its escrow and rewarder token
//! accounts. When the pool is a generated keypair account, a system
//! `create_account` has to run first so the program can claim the zeroed
//! account.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, rent::Rent, system_instruction, sysvar};
use anchor_lang::ToAccountMetas;

use crate::error::Result;
use crate::instructions::{build, instruction};
use crate::pda::{escrow_pda, rewarder_pda, PoolAddressing};
use crate::state::StakingData;

/// Accounts required for pool initialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Initialize {
    /// Pool account; a PDA or a freshly generated keypair.
    pub staking_data: Pubkey,
    /// Account allowed to fund reward windows.
    pub funder_authority: Pubkey,
    pub escrow_account: Pubkey,
    pub rewarder_account: Pubkey,
    /// Pool creator, pays for the new accounts.
    pub authority: Pubkey,
    pub mint_address: Pubkey,
}

impl Initialize {
    /// Resolve the pool address and derive escrow and rewarder from it.
    pub fn new(
        addressing: &PoolAddressing,
        funder_authority: Pubkey,
        authority: Pubkey,
        mint_address: Pubkey,
        program_id: &Pubkey,
    ) -> Result<Self> {
        let staking_data = addressing.resolve(program_id)?;
        let (escrow_account, _) = escrow_pda(&staking_data, program_id)?;
        let (rewarder_account, _) = rewarder_pda(&staking_data, program_id)?;
        Ok(Self {
            staking_data,
            funder_authority,
            escrow_account,
            rewarder_account,
            authority,
            mint_address,
        })
    }
}

impl ToAccountMetas for Initialize {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.staking_data, false),
            AccountMeta::new_readonly(self.funder_authority, false),
            AccountMeta::new(self.escrow_account, false),
            AccountMeta::new(self.rewarder_account, false),
            AccountMeta::new(self.authority, true),
            AccountMeta::new_readonly(self.mint_address, false),
            AccountMeta::new_readonly(anchor_spl::token::ID, false),
            AccountMeta::new_readonly(anchor_lang::system_program::ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ]
    }
}

pub fn initialize(program_id: Pubkey, accounts: &Initialize, args: instruction::Initialize) -> Instruction {
    build(program_id, accounts, &args)
}

/// System instruction allocating a rent-exempt pool account owned by the program.
///
/// Only needed for [`PoolAddressing::Generated`]; the new account must sign.
pub fn create_pool_account(payer: &Pubkey, pool: &Pubkey, program_id: &Pubkey) -> Instruction {
    let lamports = Rent::default().minimum_balance(StakingData::LEN);
    system_instruction::create_account(payer, pool, lamports, StakingData::LEN as u64, program_id)
}

/// Full instruction list for pool creation in either addressing mode.
pub fn initialize_pool(
    program_id: Pubkey,
    addressing: &PoolAddressing,
    accounts: &Initialize,
    args: instruction::Initialize,
) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(2);
    if addressing.is_generated() {
        instructions.push(create_pool_account(
            &accounts.authority,
            &accounts.staking_data,
            &program_id,
        ));
    }
    instructions.push(initialize(program_id, accounts, args));
    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::{Discriminator, InstructionData};

    fn args() -> instruction::Initialize {
        instruction::Initialize {
            apy_max: 800,
            min_timeframe_in_second: 30,
            min_stake_period: 30,
        }
    }

    #[test]
    fn derived_pool_builds_single_instruction() {
        let authority = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let funder = Pubkey::new_unique();
        let addressing = PoolAddressing::Derived { authority, mint };
        let accounts = Initialize::new(&addressing, funder, authority, mint, &crate::ID).unwrap();

        let ixs = initialize_pool(crate::ID, &addressing, &accounts, args());
        assert_eq!(ixs.len(), 1);
        let ix = &ixs[0];
        assert_eq!(ix.program_id, crate::ID);
        assert_eq!(ix.accounts.len(), 9);
        assert_eq!(ix.accounts[0].pubkey, accounts.staking_data);
        assert!(ix.accounts[4].is_signer);
        assert_eq!(ix.accounts[4].pubkey, authority);
        assert_eq!(&ix.data[..8], &instruction::Initialize::DISCRIMINATOR);
        assert_eq!(ix.data.len(), 8 + 4 + 8 + 8);
        assert_eq!(&ix.data[8..12], &800u32.to_le_bytes());
    }

    #[test]
    fn generated_pool_prepends_create_account() {
        let authority = Pubkey::new_unique();
        let pool = Pubkey::new_unique();
        let addressing = PoolAddressing::Generated { address: pool };
        let accounts =
            Initialize::new(&addressing, Pubkey::new_unique(), authority, Pubkey::new_unique(), &crate::ID)
                .unwrap();
        assert_eq!(accounts.staking_data, pool);

        let ixs = initialize_pool(crate::ID, &addressing, &accounts, args());
        assert_eq!(ixs.len(), 2);
        assert_eq!(ixs[0].program_id, anchor_lang::system_program::ID);
        assert!(ixs[0].accounts.iter().any(|m| m.pubkey == pool && m.is_signer));
        assert_eq!(ixs[1].data, args().data());
    }
}
