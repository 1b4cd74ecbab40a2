//! Constants shared by the address deriver, the reward projector and the
//! account layouts.

/// Seed for deriving the staking data PDA (with authority and mint).
pub const STAKING_SEED: &[u8] = b"staking";

/// Seed for deriving the escrow token account that holds staked tokens.
pub const ESCROW_SEED: &[u8] = b"staking-escrow";

/// Seed for deriving the rewarder token account that holds funded rewards.
pub const REWARDER_SEED: &[u8] = b"staking-rewarder";

/// Seed for deriving the PDA that signs transfers out of escrow and rewarder.
pub const STAKING_AUTHORITY_SEED: &[u8] = b"staking-author";

/// Seed for deriving per-staker state PDAs (with pool and staker).
pub const STAKER_SEED: &[u8] = b"staker";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Year length the program divides the APY ceiling by.
pub const DAYS_PER_YEAR: f64 = 365.50;

/// Upper bound on the stakers list stored inside one pool account.
pub const MAX_STAKERS: usize = 100;

/// Default RPC endpoint used when no config file is given.
pub const DEFAULT_URL: &str = "https://api.devnet.solana.com";
