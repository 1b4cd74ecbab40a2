use anchor_lang::prelude::*;

/// Per-staker record, one per (pool, staker) pair.
///
/// `my_crc` links the record to the staker's entry in `StakingData::stakers`.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakingState {
    pub staking_account: Pubkey,
    pub mint_address: Pubkey,
    pub owner_address: Pubkey,

    pub total_staked: u64,
    pub total_rewarded: u64,
    pub last_staked: u64,
    pub last_rewarded: u64,

    pub my_crc: u32,
}

impl StakingState {
    pub const LEN: usize = 8 + 32 + 32 + 32 + 8 + 8 + 8 + 8 + 4;

    pub fn belongs_to(&self, staking_data: &Pubkey, owner: &Pubkey) -> bool {
        self.staking_account == *staking_data && self.owner_address == *owner
    }
}
