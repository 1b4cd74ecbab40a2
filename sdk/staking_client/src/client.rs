//! Connection-agnostic staking client.
//!
//! [`StakingClient`] carries the connection, the signing wallet and the
//! program id explicitly; nothing is held in global state. Every call
//! re-fetches what it needs, so results never outlive a later transaction.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, sysvar};
use anchor_spl::associated_token::get_associated_token_address;

use crate::config::ClientConfig;
use crate::error::{ClientErrorCode, ErrorTable, Result, StakingError};
use crate::instructions::{self, instruction};
use crate::pda::{staking_authority_pda, staking_state_pda, PoolAddressing};
use crate::reward::{self, RewardSnapshot};
use crate::state::{decode_account, ClockSnapshot, StakingData, StakingState};

pub use crate::error::TransactionFailure;

/// Chain access used by the client.
///
/// Implementations own RPC transport and signing; the client only hands over
/// instructions and reads raw account bytes.
pub trait Connection {
    /// Raw account data, or `None` when the account does not exist.
    fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>>;

    /// Sign with `payer` (plus any extra signers the wallet holds), submit and
    /// confirm the instructions as one transaction.
    fn send_instructions(
        &self,
        payer: &Pubkey,
        instructions: &[Instruction],
    ) -> std::result::Result<(), TransactionFailure>;
}

pub struct StakingClient<'a, C: Connection> {
    connection: &'a C,
    signer: Pubkey,
    program_id: Pubkey,
    errors: ErrorTable,
}

impl<'a, C: Connection> StakingClient<'a, C> {
    pub fn new(connection: &'a C, signer: Pubkey) -> Self {
        Self {
            connection,
            signer,
            program_id: crate::ID,
            errors: ErrorTable::builtin(),
        }
    }

    /// Client for `config.program`. `config.url` is only logged; the
    /// connection is expected to point at it already.
    pub fn with_config(connection: &'a C, signer: Pubkey, config: &ClientConfig) -> Self {
        msg!("Using program {} via {}", config.program, config.url);
        Self {
            program_id: config.program,
            ..Self::new(connection, signer)
        }
    }

    /// Replace the builtin error table, e.g. with one read from the IDL.
    pub fn with_error_table(mut self, errors: ErrorTable) -> Self {
        self.errors = errors;
        self
    }

    pub fn signer(&self) -> Pubkey {
        self.signer
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    // ========== Queries ==========

    pub fn fetch_staking_data(&self, staking_data: &Pubkey) -> Result<Option<StakingData>> {
        self.connection
            .get_account_data(staking_data)?
            .map(|data| decode_account::<StakingData>(&data))
            .transpose()
    }

    /// State record of `owner` in the given pool.
    pub fn fetch_staking_state(&self, staking_data: &Pubkey, owner: &Pubkey) -> Result<Option<StakingState>> {
        let (address, _) = staking_state_pda(staking_data, owner, &self.program_id)?;
        self.connection
            .get_account_data(&address)?
            .map(|data| decode_account::<StakingState>(&data))
            .transpose()
    }

    pub fn clock(&self) -> Result<ClockSnapshot> {
        let data = self
            .connection
            .get_account_data(&sysvar::clock::ID)?
            .ok_or(ClientErrorCode::InvalidClockData)?;
        ClockSnapshot::decode(&data)
    }

    /// Current cluster time in unix seconds.
    pub fn now_ts(&self) -> Result<u64> {
        Ok(self.clock()?.unix_timestamp)
    }

    /// Reward already recorded for the signer in this pool.
    pub fn gained_reward(&self, staking_data: &Pubkey) -> Result<u64> {
        let pool = self.require_staking_data(staking_data)?;
        let state = self.require_staking_state(staking_data)?;
        Ok(reward::gained_reward(&pool, &state))
    }

    /// Recorded plus projected reward for the signer, from fresh account data.
    pub fn reward_snapshot(&self, staking_data: &Pubkey) -> Result<RewardSnapshot> {
        let pool = self.require_staking_data(staking_data)?;
        let state = self.require_staking_state(staking_data)?;
        let now_ts = self.now_ts()?;
        let snapshot = reward::project(&pool, &state, now_ts);
        msg!(
            "Reward for {} at {}: recorded={} projected={}",
            self.signer,
            now_ts,
            snapshot.recorded,
            snapshot.projected
        );
        Ok(snapshot)
    }

    // ========== Transactions ==========

    /// Create a pool and return its address.
    ///
    /// A [`PoolAddressing::Derived`] pool must name the signer as authority
    /// and `mint_address` as mint, otherwise [`ClientErrorCode::PoolAddressMismatch`].
    pub fn initialize(
        &self,
        addressing: &PoolAddressing,
        funder_authority: Pubkey,
        mint_address: Pubkey,
        apy_max: u32,
        min_timeframe_in_second: u64,
        min_stake_period: u64,
    ) -> Result<Pubkey> {
        if let PoolAddressing::Derived { authority, mint } = addressing {
            // The program seeds the pool with the initializer and the mint it is given.
            if *authority != self.signer || *mint != mint_address {
                msg!(
                    "Derived pool seeds ({}, {}) do not match signer {} and mint {}",
                    authority,
                    mint,
                    self.signer,
                    mint_address
                );
                return Err(ClientErrorCode::PoolAddressMismatch.into());
            }
        }
        let accounts = instructions::Initialize::new(
            addressing,
            funder_authority,
            self.signer,
            mint_address,
            &self.program_id,
        )?;
        let ixs = instructions::initialize_pool(
            self.program_id,
            addressing,
            &accounts,
            instruction::Initialize {
                apy_max,
                min_timeframe_in_second,
                min_stake_period,
            },
        );
        msg!("Initializing pool {} for mint {}", accounts.staking_data, mint_address);
        msg!(
            "APY max: {}, min timeframe: {}s, min stake period: {}s",
            apy_max,
            min_timeframe_in_second,
            min_stake_period
        );
        self.submit("initialize", &ixs)?;
        Ok(accounts.staking_data)
    }

    /// Create the signer's state record in a pool and return its address.
    pub fn initialize_stake_state(&self, staking_data: &Pubkey) -> Result<Pubkey> {
        self.require_staking_data(staking_data)?;
        let accounts = instructions::InitializeStakeState::new(*staking_data, self.signer, &self.program_id)?;
        msg!("Initializing stake state {} in pool {}", accounts.stake_state_account, staking_data);
        self.submit(
            "initialize_stake_state",
            &[instructions::initialize_stake_state(self.program_id, &accounts)],
        )?;
        Ok(accounts.stake_state_account)
    }

    /// Stake `amount`; `token_account` defaults to the signer's associated account.
    pub fn stake(&self, staking_data: &Pubkey, token_account: Option<Pubkey>, amount: u64) -> Result<u64> {
        let pool = self.require_staking_data(staking_data)?;
        let stake_state_account = self.require_state_address(staking_data)?;
        let accounts = instructions::Staking {
            staking_data: *staking_data,
            stake_state_account,
            escrow_account: pool.escrow_account,
            staker_account: self.token_account_or_ata(token_account, &pool),
            authority: self.signer,
        };
        msg!("Staking {} tokens into pool {}", amount, staking_data);
        self.submit("staking", &[instructions::staking(self.program_id, &accounts, amount)])?;
        Ok(amount)
    }

    pub fn unstake(&self, staking_data: &Pubkey, token_account: Option<Pubkey>, amount: u64) -> Result<u64> {
        let pool = self.require_staking_data(staking_data)?;
        let stake_state_account = self.require_state_address(staking_data)?;
        let (staking_authority, _) = staking_authority_pda(staking_data, &self.program_id)?;
        let accounts = instructions::Unstaking {
            staking_data: *staking_data,
            stake_state_account,
            escrow_account: pool.escrow_account,
            reclaimer: self.token_account_or_ata(token_account, &pool),
            rewarder_account: pool.rewarder_account,
            authority: self.signer,
            staking_authority,
        };
        msg!("Unstaking {} tokens from pool {}", amount, staking_data);
        self.submit("unstaking", &[instructions::unstaking(self.program_id, &accounts, amount)])?;
        Ok(amount)
    }

    pub fn claim_reward(&self, staking_data: &Pubkey, token_account: Option<Pubkey>, amount: u64) -> Result<u64> {
        let pool = self.require_staking_data(staking_data)?;
        let stake_state_account = self.require_state_address(staking_data)?;
        let (staking_authority, _) = staking_authority_pda(staking_data, &self.program_id)?;
        let accounts = instructions::ClaimReward {
            staking_data: *staking_data,
            stake_state_account,
            rewarder_account: pool.rewarder_account,
            claimer: self.token_account_or_ata(token_account, &pool),
            authority: self.signer,
            staking_authority,
        };
        msg!("Claiming {} reward tokens from pool {}", amount, staking_data);
        self.submit("claim_reward", &[instructions::claim_reward(self.program_id, &accounts, amount)])?;
        Ok(amount)
    }

    /// Fund a new reward window of `timeframe_in_second`.
    pub fn fund(
        &self,
        staking_data: &Pubkey,
        token_account: Option<Pubkey>,
        amount: u64,
        timeframe_in_second: u64,
    ) -> Result<u64> {
        let pool = self.require_staking_data(staking_data)?;
        let accounts = instructions::Funding {
            staking_data: *staking_data,
            rewarder_account: pool.rewarder_account,
            funder_account: self.token_account_or_ata(token_account, &pool),
            authority: self.signer,
        };
        msg!("Funding pool {} with {} tokens over {}s", staking_data, amount, timeframe_in_second);
        self.submit(
            "funding",
            &[instructions::funding(self.program_id, &accounts, amount, timeframe_in_second)],
        )?;
        Ok(amount)
    }

    pub fn set_max_apy(&self, staking_data: &Pubkey, apy_max: u32) -> Result<u32> {
        let pool = self.require_staking_data(staking_data)?;
        let accounts = instructions::SetMaxApy {
            staking_data: *staking_data,
            authority: self.signer,
        };
        msg!("Max APY {} -> {} on pool {}", pool.apy_max, apy_max, staking_data);
        self.submit("set_max_apy", &[instructions::set_max_apy(self.program_id, &accounts, apy_max)])?;
        Ok(apy_max)
    }

    // ========== Helpers ==========

    fn require_staking_data(&self, staking_data: &Pubkey) -> Result<StakingData> {
        self.fetch_staking_data(staking_data)?.ok_or_else(|| {
            msg!("Pool {} is not initialized", staking_data);
            ClientErrorCode::StakingDataNotInitialized.into()
        })
    }

    fn require_staking_state(&self, staking_data: &Pubkey) -> Result<StakingState> {
        self.fetch_staking_state(staking_data, &self.signer)?.ok_or_else(|| {
            msg!("Stake state for {} in pool {} is not initialized", self.signer, staking_data);
            ClientErrorCode::StakingStateNotInitialized.into()
        })
    }

    /// Address of the signer's state record, after checking it exists.
    fn require_state_address(&self, staking_data: &Pubkey) -> Result<Pubkey> {
        self.require_staking_state(staking_data)?;
        let (address, _) = staking_state_pda(staking_data, &self.signer, &self.program_id)?;
        Ok(address)
    }

    fn token_account_or_ata(&self, token_account: Option<Pubkey>, pool: &StakingData) -> Pubkey {
        token_account.unwrap_or_else(|| get_associated_token_address(&self.signer, &pool.mint_address))
    }

    fn submit(&self, label: &str, ixs: &[Instruction]) -> Result<()> {
        self.connection
            .send_instructions(&self.signer, ixs)
            .map_err(|failure| {
                let err: StakingError = self.errors.to_staking_error(&failure);
                msg!("{} failed: {} (code {})", label, err.message, err.code);
                err
            })?;
        msg!("{} confirmed", label);
        Ok(())
    }
}
