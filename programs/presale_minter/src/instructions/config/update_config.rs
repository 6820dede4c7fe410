use crate::constants::seeds;
use crate::errors::PresaleErrorCode;
use crate::events::ConfigUpdatedEvent;
use crate::state::{GlobalConfig, TierId};
use anchor_lang::prelude::*;

/// Partial update of the sale configuration. Absent fields keep their current value.
///
/// Per-tier fields (`new_*`) require `tier_id`. Counters and supply caps are not
/// part of the update set and can never be changed from outside.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateConfigArgs {
    pub sales_paused: Option<bool>,
    pub tier_id: Option<u8>,
    /// New price in lamports
    pub new_price: Option<u64>,
    pub new_kyc_required: Option<bool>,
    pub new_invite_only: Option<bool>,
    pub new_transferable: Option<bool>,
}

impl UpdateConfigArgs {
    pub fn touches_tier(&self) -> bool {
        self.new_price.is_some()
            || self.new_kyc_required.is_some()
            || self.new_invite_only.is_some()
            || self.new_transferable.is_some()
    }

    /// Validates the whole update set, then writes every present field.
    /// Nothing is written when validation fails.
    pub fn apply(&self, config: &mut GlobalConfig) -> Result<()> {
        let tier_id = self.tier_id.map(TierId::try_from).transpose()?;
        require!(
            tier_id.is_some() || !self.touches_tier(),
            PresaleErrorCode::InvalidArgument
        );

        if let Some(paused) = self.sales_paused {
            config.sales_paused = paused;
        }

        if let Some(tier_id) = tier_id {
            let tier = config.tier_mut(tier_id);

            if let Some(price) = self.new_price {
                tier.price = price;
            }
            if let Some(kyc_required) = self.new_kyc_required {
                tier.kyc_required = kyc_required;
            }
            if let Some(invite_only) = self.new_invite_only {
                tier.invite_only = invite_only;
            }
            if let Some(transferable) = self.new_transferable {
                tier.transferable = transferable;
            }
        }

        Ok(())
    }
}

/// Account structure for updating the sale configuration.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [seeds::GLOBAL_CONFIG],
        bump = global_config.bump,
        has_one = admin @ PresaleErrorCode::Unauthorized
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    /// The signer authorizing the update, must be the admin.
    pub admin: Signer<'info>,
}

/// Applies a partial update to the global pause flag and/or one tier.
///
/// # Errors
/// - [`PresaleErrorCode::Unauthorized`] if the signer is not the admin.
/// - [`PresaleErrorCode::InvalidArgument`] if `tier_id` is out of range, or a
///   per-tier field is given without `tier_id`.
pub fn update_config(ctx: Context<UpdateConfig>, args: UpdateConfigArgs) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;

    args.apply(global_config)?;
    global_config.check_invariants()?;

    msg!(
        "Config updated - Sales paused: {}, Tier: {:?}",
        global_config.sales_paused,
        args.tier_id
    );

    emit!(ConfigUpdatedEvent {
        sales_paused: args.sales_paused,
        tier_id: args.tier_id,
        new_price: args.new_price,
        new_kyc_required: args.new_kyc_required,
        new_invite_only: args.new_invite_only,
        new_transferable: args.new_transferable,
    });

    Ok(())
}
