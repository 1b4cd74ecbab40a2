//! Instruction builders for the staking program.
//!
//! Each builder pairs an argument struct (Anchor sighash + borsh payload) with
//! an accounts struct listing keys in the order the program expects.

pub mod claim_reward;
pub mod funding;
pub mod initialize;
pub mod initialize_stake_state;
pub mod set_max_apy;
pub mod stake;
pub mod unstake;

pub use claim_reward::*;
pub use funding::*;
pub use initialize::*;
pub use initialize_stake_state::*;
pub use set_max_apy::*;
pub use stake::*;
pub use unstake::*;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::InstructionData;

/// Assemble an instruction from its accounts and argument payload.
pub fn build<A: ToAccountMetas, D: InstructionData>(program_id: Pubkey, accounts: &A, args: &D) -> Instruction {
    Instruction {
        program_id,
        accounts: accounts.to_account_metas(None),
        data: args.data(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::hash::hash;
    use anchor_lang::Discriminator;

    fn sighash(name: &str) -> [u8; 8] {
        let mut out = [0u8; 8];
        out.copy_from_slice(&hash(format!("global:{}", name).as_bytes()).to_bytes()[..8]);
        out
    }

    #[test]
    fn discriminators_match_anchor_sighash() {
        assert_eq!(instruction::Initialize::DISCRIMINATOR, sighash("initialize"));
        assert_eq!(
            instruction::InitializeStakeState::DISCRIMINATOR,
            sighash("initialize_stake_state")
        );
        assert_eq!(instruction::Staking::DISCRIMINATOR, sighash("staking"));
        assert_eq!(instruction::Unstaking::DISCRIMINATOR, sighash("unstaking"));
        assert_eq!(instruction::ClaimReward::DISCRIMINATOR, sighash("claim_reward"));
        assert_eq!(instruction::Funding::DISCRIMINATOR, sighash("funding"));
        assert_eq!(instruction::SetMaxApy::DISCRIMINATOR, sighash("set_max_apy"));
    }
}

/// Argument payloads, one per program instruction.
pub mod instruction {
    use anchor_lang::prelude::*;
    use anchor_lang::{Discriminator, InstructionData};

    #[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
    pub struct Initialize {
        pub apy_max: u32,
        pub min_timeframe_in_second: u64,
        pub min_stake_period: u64,
    }

    impl Discriminator for Initialize {
        const DISCRIMINATOR: [u8; 8] = [175, 175, 109, 31, 13, 152, 155, 237];
    }
    impl InstructionData for Initialize {}

    #[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
    pub struct InitializeStakeState {}

    impl Discriminator for InitializeStakeState {
        const DISCRIMINATOR: [u8; 8] = [4, 228, 248, 50, 14, 53, 133, 52];
    }
    impl InstructionData for InitializeStakeState {}

    #[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
    pub struct Staking {
        pub amount: u64,
    }

    impl Discriminator for Staking {
        const DISCRIMINATOR: [u8; 8] = [162, 31, 71, 84, 109, 71, 231, 228];
    }
    impl InstructionData for Staking {}

    #[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
    pub struct Unstaking {
        pub amount: u64,
    }

    impl Discriminator for Unstaking {
        const DISCRIMINATOR: [u8; 8] = [184, 53, 187, 203, 61, 92, 99, 80];
    }
    impl InstructionData for Unstaking {}

    #[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
    pub struct ClaimReward {
        pub amount: u64,
    }

    impl Discriminator for ClaimReward {
        const DISCRIMINATOR: [u8; 8] = [149, 95, 181, 242, 94, 90, 158, 162];
    }
    impl InstructionData for ClaimReward {}

    #[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
    pub struct Funding {
        pub amount: u64,
        pub timeframe_in_second: u64,
    }

    impl Discriminator for Funding {
        const DISCRIMINATOR: [u8; 8] = [201, 208, 138, 128, 47, 21, 50, 240];
    }
    impl InstructionData for Funding {}

    #[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
    pub struct SetMaxApy {
        pub apy_max: u32,
    }

    impl Discriminator for SetMaxApy {
        const DISCRIMINATOR: [u8; 8] = [128, 49, 15, 92, 77, 116, 239, 215];
    }
    impl InstructionData for SetMaxApy {}
}
