/// PDA seeds used throughout the program for account derivation
pub mod seeds {
    /// Seed for the global configuration account
    pub const GLOBAL_CONFIG: &[u8] = b"global-config";
}

/// Number of tiers in the compiled-in tier table
pub const TIER_COUNT: usize = 6;

/// Maximum possible value of basis points (100%)
pub const MAX_BASIS_POINTS: u64 = 10_000;

/// Share of a tier's supply that may be issued through `admin_mint` (500 = 5%)
pub const ADMIN_CAP_BPS: u64 = 500;

/// Issued assets are indivisible
pub const ASSET_DECIMALS: u8 = 0;

/// Display name registered for every freshly issued asset
pub const PLACEHOLDER_NAME: &str = "Presale Mystery Pass";

/// Ticker registered for every freshly issued asset
pub const PLACEHOLDER_SYMBOL: &str = "PASS";

cfg_if::cfg_if! {
    if #[cfg(any(feature = "devnet-test", feature = "devnet-dev"))] {
        /// Base URI for per-tier placeholder metadata
        pub const METADATA_BASE_URI: &str = "https://devnet.example.com/presale";
    } else {
        /// Base URI for per-tier placeholder metadata
        pub const METADATA_BASE_URI: &str = "https://example.com/presale";
    }
}
