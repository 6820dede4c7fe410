use crate::constants::seeds;
use crate::events::TierStatusEvent;
use crate::state::{GlobalConfig, TierConfig, TierId};
use anchor_lang::prelude::*;
use anchor_lang::Accounts;

/// Snapshot of one tier, returned as instruction return data
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TierStatus {
    pub tier_id: u8,
    /// Price in lamports, 0 while unset
    pub price: u64,
    pub minted_count: u16,
    pub remaining_supply: u16,
    /// Admin issuances still possible, bounded by the remaining supply
    pub remaining_admin_allowance: u16,
    pub kyc_required: bool,
    pub invite_only: bool,
    pub transferable: bool,
}

impl From<&TierConfig> for TierStatus {
    fn from(tier: &TierConfig) -> Self {
        Self {
            tier_id: tier.id,
            price: tier.price,
            minted_count: tier.minted_count,
            remaining_supply: tier.remaining_supply(),
            remaining_admin_allowance: tier.remaining_admin_allowance(),
            kyc_required: tier.kyc_required,
            invite_only: tier.invite_only,
            transferable: tier.transferable,
        }
    }
}

/// Account structure for querying a tier
#[derive(Accounts)]
pub struct GetTierStatus<'info> {
    #[account(
        seeds = [seeds::GLOBAL_CONFIG],
        bump = global_config.bump
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,
}

/// Reports price, counters and gates of one tier without modifying anything.
///
/// # Errors
/// * `InvalidArgument` if `tier_id` is not a known tier
///
/// # Events
/// * `TierStatusEvent` - Emitted with the remaining supply and admin allowance
pub fn get_tier_status(ctx: Context<GetTierStatus>, tier_id: u8) -> Result<TierStatus> {
    let tier = TierId::try_from(tier_id)?;
    let status = TierStatus::from(ctx.accounts.global_config.tier(tier));
    let current_time = Clock::get()?.unix_timestamp as u64;

    msg!(
        "Tier status - Tier: {}, Minted: {}, Remaining: {}, Admin remaining: {}",
        tier_id,
        status.minted_count,
        status.remaining_supply,
        status.remaining_admin_allowance
    );

    emit!(TierStatusEvent {
        tier_id,
        remaining_supply: status.remaining_supply,
        remaining_admin_allowance: status.remaining_admin_allowance,
        timestamp: current_time,
    });

    Ok(status)
}
