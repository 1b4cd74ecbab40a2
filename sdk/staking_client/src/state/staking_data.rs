use anchor_lang::prelude::*;

use crate::constants::MAX_STAKERS;

/// One staker's position inside a pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StakerEntry {
    pub staker_crc: u32,
    pub staked: u64,
    pub staked_time: u64,
    pub gained_reward: u64,
}

impl StakerEntry {
    pub const LEN: usize = 4 + 8 + 8 + 8;
}

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakingData {
    pub authority: Pubkey,
    pub funder_authority: Pubkey,
    pub mint_address: Pubkey,
    pub escrow_account: Pubkey,
    pub rewarder_account: Pubkey,

    pub apy_max: u32,
    pub min_timeframe_in_second: u64,
    pub min_stake_period: u64,

    pub total_staked: u64,
    pub rewarder_balance: u64,
    pub total_funded: u64,
    pub total_reward_paid: u64,

    pub pool_reward: u64,
    pub timeframe_started: u64,
    pub timeframe_in_second: u64,
    pub payout_reward: u64,

    pub stakers: Vec<StakerEntry>,
}

impl StakingData {
    pub const LEN: usize = 8
        + (32 * 5)
        + 4
        + (8 * 2)
        + (8 * 4)
        + (8 * 4)
        + 4 + MAX_STAKERS * StakerEntry::LEN;

    /// End of the current funding window.
    pub fn timeframe_end(&self) -> u64 {
        self.timeframe_started.saturating_add(self.timeframe_in_second)
    }

    pub fn find_staker(&self, staker_crc: u32) -> Option<&StakerEntry> {
        self.stakers.iter().find(|s| s.staker_crc == staker_crc)
    }

    /// Pool totals agree with the per-staker entries.
    pub fn is_consistent(&self) -> bool {
        let staked: u128 = self.stakers.iter().map(|s| s.staked as u128).sum();
        let gained: u128 = self.stakers.iter().map(|s| s.gained_reward as u128).sum();
        staked == self.total_staked as u128
            && gained == self.payout_reward as u128
            && self.stakers.iter().all(|s| s.staked > 0)
    }
}
