use crate::constants::{seeds, ADMIN_CAP_BPS, MAX_BASIS_POINTS, METADATA_BASE_URI, TIER_COUNT};
use crate::errors::PresaleErrorCode;
use anchor_lang::prelude::*;

/// Closed set of tier identifiers; the discriminant is the index into `GlobalConfig::tiers`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TierId {
    TreeSteel = 0,
    Bronze = 1,
    Silver = 2,
    Gold = 3,
    Platinum = 4,
    Ws20 = 5,
}

impl TierId {
    pub const ALL: [TierId; TIER_COUNT] = [
        TierId::TreeSteel,
        TierId::Bronze,
        TierId::Silver,
        TierId::Gold,
        TierId::Platinum,
        TierId::Ws20,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Short name used in metadata URIs, must match the off-chain JSON files
    pub fn slug(self) -> &'static str {
        match self {
            TierId::TreeSteel => "tree-steel",
            TierId::Bronze => "bronze",
            TierId::Silver => "silver",
            TierId::Gold => "gold",
            TierId::Platinum => "platinum",
            TierId::Ws20 => "ws20",
        }
    }

    pub fn metadata_uri(self) -> String {
        format!("{}/{}.json", METADATA_BASE_URI, self.slug())
    }
}

impl TryFrom<u8> for TierId {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        TierId::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| error!(PresaleErrorCode::InvalidArgument))
    }
}

/// Which issuance path produced an asset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssuancePath {
    Public,
    Admin,
}

/// Per-tier sale configuration and counters, embedded in `GlobalConfig`
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TierConfig {
    /// Equals the tier's index in `GlobalConfig::tiers`
    pub id: u8,
    /// Lamports charged per public issuance
    pub price: u64,
    /// Hard ceiling on items ever issued in this tier, public and admin combined
    pub supply_total: u16,
    /// Items issued so far, never decreases
    pub minted_count: u16,
    /// Items issued through `admin_mint`, a subset of `minted_count`
    pub admin_minted_count: u16,
    pub kyc_required: bool,
    pub invite_only: bool,
    /// Consumed by the asset layer: non-transferable tiers produce soulbound mints
    pub transferable: bool,
}

impl TierConfig {
    /// Compiled-in defaults for a tier. Prices start unset and are configured by the admin.
    pub fn for_tier(tier: TierId) -> Self {
        let (supply_total, kyc_required, invite_only, transferable) = match tier {
            TierId::TreeSteel => (2000, false, false, true),
            TierId::Bronze => (1000, false, false, true),
            TierId::Silver => (200, true, false, true),
            TierId::Gold => (100, true, false, true),
            TierId::Platinum => (20, true, false, true),
            TierId::Ws20 => (20, true, true, false),
        };

        Self {
            id: tier as u8,
            price: 0,
            supply_total,
            minted_count: 0,
            admin_minted_count: 0,
            kyc_required,
            invite_only,
            transferable,
        }
    }

    /// Maximum number of items the admin may issue in this tier.
    ///
    /// Rounds down, so tiers with fewer than 20 items have no admin allowance at all.
    pub fn admin_cap(&self) -> u16 {
        (self.supply_total as u64 * ADMIN_CAP_BPS / MAX_BASIS_POINTS) as u16
    }

    pub fn remaining_supply(&self) -> u16 {
        self.supply_total.saturating_sub(self.minted_count)
    }

    pub fn remaining_admin_allowance(&self) -> u16 {
        self.admin_cap()
            .saturating_sub(self.admin_minted_count)
            .min(self.remaining_supply())
    }

    pub fn is_sold_out(&self) -> bool {
        self.minted_count >= self.supply_total
    }

    pub fn check_invariants(&self, tier: TierId) -> Result<()> {
        let template = TierConfig::for_tier(tier);
        require!(
            self.id == template.id && self.supply_total == template.supply_total,
            PresaleErrorCode::CounterInvariantViolated
        );
        require!(
            self.minted_count <= self.supply_total,
            PresaleErrorCode::CounterInvariantViolated
        );
        require!(
            self.admin_minted_count <= self.minted_count,
            PresaleErrorCode::CounterInvariantViolated
        );
        require!(
            self.admin_minted_count <= self.admin_cap(),
            PresaleErrorCode::CounterInvariantViolated
        );
        Ok(())
    }
}

/// Singleton sale configuration, stored at the PDA derived from `seeds::GLOBAL_CONFIG`
#[account]
#[derive(InitSpace)]
pub struct GlobalConfig {
    /// Authority for configuration changes and privileged issuance.
    /// Also receives sale proceeds and signs eligibility attestations.
    pub admin: Pubkey,
    /// Collection the issued assets belong to
    pub collection: Pubkey,
    /// Payment asset reference, a placeholder for native SOL in this version
    pub payment_mint: Pubkey,
    /// Pauses the public path only
    pub sales_paused: bool,
    pub tiers: [TierConfig; TIER_COUNT],
    /// PDA bump seed for account derivation
    pub bump: u8,
}

impl GlobalConfig {
    pub fn default_tiers() -> [TierConfig; TIER_COUNT] {
        TierId::ALL.map(TierConfig::for_tier)
    }

    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    pub fn tier(&self, tier: TierId) -> &TierConfig {
        &self.tiers[tier.index()]
    }

    pub fn tier_mut(&mut self, tier: TierId) -> &mut TierConfig {
        &mut self.tiers[tier.index()]
    }

    /// Moves the tier counters for one issued asset and re-checks the tier invariants.
    ///
    /// This is the only place counters are written. Callers run their path-specific
    /// preconditions first; a failure here means the preconditions were bypassed.
    pub fn record_issuance(&mut self, tier: TierId, path: IssuancePath) -> Result<TierConfig> {
        let config = self.tier_mut(tier);

        config.minted_count = config
            .minted_count
            .checked_add(1)
            .ok_or(PresaleErrorCode::MathOverflow)?;

        if path == IssuancePath::Admin {
            config.admin_minted_count = config
                .admin_minted_count
                .checked_add(1)
                .ok_or(PresaleErrorCode::MathOverflow)?;
        }

        config.check_invariants(tier)?;
        Ok(*config)
    }

    /// Full postcondition check run by every mutating instruction before it returns
    pub fn check_invariants(&self) -> Result<()> {
        require!(self.is_initialized(), PresaleErrorCode::InvalidArgument);
        for tier in TierId::ALL {
            self.tier(tier).check_invariants(tier)?;
        }
        Ok(())
    }
}

/// Locates the global config PDA for a deployment of this program
pub fn derive_config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::GLOBAL_CONFIG], program_id)
}
