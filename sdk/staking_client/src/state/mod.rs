//! Account layouts read back from the staking program and the clock sysvar.

pub mod clock;
pub mod staking_data;
pub mod staking_state;

pub use clock::*;
pub use staking_data::*;
pub use staking_state::*;

use anchor_lang::AccountDeserialize;

use crate::error::{ClientErrorCode, Result, StakingError};

/// Decode an Anchor account, checking its discriminator.
pub fn decode_account<T: AccountDeserialize>(data: &[u8]) -> Result<T> {
    let mut buf = data;
    T::try_deserialize(&mut buf)
        .map_err(|e| StakingError::with_detail(ClientErrorCode::InvalidAccountData, e))
}
