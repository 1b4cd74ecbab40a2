use borsh::BorshDeserialize;

use crate::error::{ClientErrorCode, Result, StakingError};

/// Clock sysvar contents, decoded as five little-endian u64 values.
#[derive(BorshDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub slot: u64,
    pub epoch_start_timestamp: u64,
    pub epoch: u64,
    pub leader_schedule_epoch: u64,
    pub unix_timestamp: u64,
}

impl ClockSnapshot {
    pub const LEN: usize = 8 * 5;

    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut buf = data;
        ClockSnapshot::deserialize(&mut buf)
            .map_err(|e| StakingError::with_detail(ClientErrorCode::InvalidClockData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(values: [u64; 5]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn decodes_sysvar_layout() {
        let clock = ClockSnapshot::decode(&encode([10, 1_600_000_000, 3, 4, 1_650_000_000])).unwrap();
        assert_eq!(clock.slot, 10);
        assert_eq!(clock.epoch_start_timestamp, 1_600_000_000);
        assert_eq!(clock.epoch, 3);
        assert_eq!(clock.leader_schedule_epoch, 4);
        assert_eq!(clock.unix_timestamp, 1_650_000_000);
    }

    #[test]
    fn short_data_fails() {
        let data = encode([1, 2, 3, 4, 5]);
        let err = ClockSnapshot::decode(&data[..ClockSnapshot::LEN - 1]).unwrap_err();
        assert_eq!(err.code, u32::from(ClientErrorCode::InvalidClockData));
    }
}
