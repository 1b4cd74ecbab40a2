//! Client configuration: RPC endpoint and deployed program id.
//!
//! Reads the same `config.json` shape the web frontend ships with:
//! `{ "url": "...", "program": "<base58 program id>" }`.

use std::path::Path;
use std::str::FromStr;

use anchor_lang::prelude::*;
use serde::Deserialize;

use crate::constants::DEFAULT_URL;
use crate::error::{ClientErrorCode, Result, StakingError};

#[derive(Deserialize)]
struct RawConfig {
    url: String,
    program: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// RPC endpoint. The client never dials it; a [`Connection`] built by the
    /// caller does.
    ///
    /// [`Connection`]: crate::client::Connection
    pub url: String,
    /// Deployed staking program; every derived address and instruction uses it.
    pub program: Pubkey,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            program: crate::ID,
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)
            .map_err(|e| StakingError::with_detail(ClientErrorCode::InvalidConfig, e))?;
        let program = Pubkey::from_str(&raw.program)
            .map_err(|e| StakingError::with_detail(ClientErrorCode::InvalidConfig, e))?;
        Ok(Self {
            url: raw.url,
            program,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            StakingError::with_detail(ClientErrorCode::InvalidConfig, format!("{}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&json)?;
        msg!("Loaded config from {}: url={} program={}", path.display(), config.url, config.program);
        Ok(config)
    }
}
