//! Reward projection.
//!
//! Mirrors the program's reward formula so a client can show what a staker
//! has accrued without sending a transaction. The program stores the result
//! as an integer, truncated toward zero; [`reward_amount`] does the same.
//!
//! Formula, with `days` and `frame_days` as real-valued day counts:
//!
//! ```text
//! gained_total          = pool_reward * days * staked / (frame_days * pool_staked)
//! gained_percent_per_day = min(gained_total / days * 100 / (staked / days), apy_max / 365.5)
//! gained                = gained_percent_per_day * (staked / days) * days / 100
//! ```

use crate::constants::{DAYS_PER_YEAR, SECONDS_PER_DAY};
use crate::state::{StakingData, StakingState};

/// Reward a staker would be credited for the current window.
///
/// Returns `0.0` when nothing accrues: no stake, a stake starting after the
/// window, a holding time below `min_stake_period`, or degenerate inputs
/// (empty pool, empty window, clock behind the stake).
#[allow(clippy::too_many_arguments)]
pub fn calculate_reward(
    apy_max: u64,
    pool_staked: u64,
    pool_reward: u64,
    timeframe_start: u64,
    timeframe_end: u64,
    staked: u64,
    stake_start_time: u64,
    min_stake_period: u64,
    now_ts: u64,
) -> f64 {
    if staked == 0 || stake_start_time >= timeframe_end {
        return 0.0;
    }

    let frame_seconds = match timeframe_end.checked_sub(timeframe_start) {
        Some(s) => s,
        None => return 0.0,
    };
    let seconds = match now_ts.checked_sub(stake_start_time) {
        Some(s) => s.min(frame_seconds),
        None => return 0.0,
    };

    // Cliff, not pro-rated.
    if seconds < min_stake_period {
        return 0.0;
    }
    if seconds == 0 || frame_seconds == 0 || pool_staked == 0 {
        return 0.0;
    }

    let days = seconds as f64 / SECONDS_PER_DAY as f64;
    let frame_days = frame_seconds as f64 / SECONDS_PER_DAY as f64;
    let gained_total = (pool_reward as f64 * days * staked as f64) / (frame_days * pool_staked as f64);
    let gained_per_day = gained_total / days;
    let staked_per_day = staked as f64 / days;
    let mut gained_percent_per_day = gained_per_day * 100.00 / staked_per_day;
    let apd_max = apy_max as f64 / DAYS_PER_YEAR;

    if gained_percent_per_day > apd_max {
        gained_percent_per_day = apd_max;
    }

    let gained = gained_percent_per_day * staked_per_day * days / 100.00;
    if gained.is_finite() && gained > 0.0 {
        gained
    } else {
        0.0
    }
}

/// [`calculate_reward`] truncated to a token amount.
#[allow(clippy::too_many_arguments)]
pub fn reward_amount(
    apy_max: u64,
    pool_staked: u64,
    pool_reward: u64,
    timeframe_start: u64,
    timeframe_end: u64,
    staked: u64,
    stake_start_time: u64,
    min_stake_period: u64,
    now_ts: u64,
) -> u64 {
    calculate_reward(
        apy_max,
        pool_staked,
        pool_reward,
        timeframe_start,
        timeframe_end,
        staked,
        stake_start_time,
        min_stake_period,
        now_ts,
    ) as u64
}

/// Reward the program has already recorded for this staker.
///
/// Scans every entry; a staker that fully unstaked has no entry and gets 0.
pub fn gained_reward(pool: &StakingData, state: &StakingState) -> u64 {
    pool.stakers
        .iter()
        .find(|staker| staker.staker_crc == state.my_crc)
        .map(|staker| staker.gained_reward)
        .unwrap_or(0)
}

/// Recorded and projected reward for one staker at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewardSnapshot {
    pub recorded: u64,
    pub projected: u64,
}

impl RewardSnapshot {
    pub fn total(&self) -> u64 {
        self.recorded.saturating_add(self.projected)
    }
}

/// Project the staker's reward for the pool's current funding window.
pub fn project(pool: &StakingData, state: &StakingState, now_ts: u64) -> RewardSnapshot {
    let entry = match pool.find_staker(state.my_crc) {
        Some(entry) => entry,
        None => return RewardSnapshot::default(),
    };
    let projected = reward_amount(
        pool.apy_max as u64,
        pool.total_staked,
        pool.pool_reward,
        pool.timeframe_started,
        pool.timeframe_end(),
        entry.staked,
        entry.staked_time,
        pool.min_stake_period,
        now_ts,
    );
    RewardSnapshot {
        recorded: entry.gained_reward,
        projected,
    }
}
