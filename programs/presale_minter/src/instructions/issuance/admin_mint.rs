use crate::constants::seeds;
use crate::errors::PresaleErrorCode;
use crate::events::AdminMintedEvent;
use crate::instructions::issuance::issuance_utils::{check_admin_issuance, resolve_recipient};
use crate::state::{GlobalConfig, IssuancePath};
use crate::utils::{create_and_assign_asset, AssetAccounts, AssetDescriptor};
use anchor_lang::{prelude::*, Accounts};
use anchor_spl::{associated_token::AssociatedToken, token_2022::Token2022};

/// Accounts required for privileged issuance
#[derive(Accounts)]
pub struct AdminMint<'info> {
    #[account(
        mut,
        seeds = [seeds::GLOBAL_CONFIG],
        bump = global_config.bump,
        has_one = admin @ PresaleErrorCode::Unauthorized
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    /// Pays the rent of the new asset
    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: any wallet may receive an asset; matched against the instruction argument
    pub recipient: UncheckedAccount<'info>,

    /// Fresh keypair for the new asset mint
    #[account(mut)]
    pub asset_mint: Signer<'info>,

    /// CHECK: address is validated by the associated token program on creation
    #[account(mut)]
    pub recipient_asset_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token2022>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

/// Issues one asset of `tier_id` without payment, bounded by the tier's admin cap.
///
/// Ignores the pause flag, the price and the eligibility gates. The new asset goes
/// to `recipient`, or to the admin when no recipient is given. Both paths share
/// the tier's supply, so admin issuance also reduces what the public can buy.
///
/// # Errors
///
/// * `Unauthorized` if the signer is not the admin
/// * `InvalidArgument` for an unknown tier or a recipient account that does not
///   match the resolved recipient
/// * `TierSoldOut`, `AdminCapExceeded`
pub fn admin_mint(
    ctx: Context<AdminMint>,
    tier_id: u8,
    recipient: Option<Pubkey>,
) -> Result<Pubkey> {
    let tier = check_admin_issuance(&ctx.accounts.global_config, tier_id)?;
    let recipient = resolve_recipient(&ctx.accounts.admin.key(), recipient);
    require_keys_eq!(
        ctx.accounts.recipient.key(),
        recipient,
        PresaleErrorCode::InvalidArgument
    );

    let transferable = ctx.accounts.global_config.tier(tier).transferable;
    let bump = ctx.accounts.global_config.bump;
    let config_seeds = &[seeds::GLOBAL_CONFIG, &[bump]];
    let signer_seeds = &[config_seeds.as_slice()];
    let authority = ctx.accounts.global_config.to_account_info();

    let asset_mint = create_and_assign_asset(
        &AssetAccounts {
            payer: &ctx.accounts.admin,
            asset_mint: &ctx.accounts.asset_mint,
            owner: &ctx.accounts.recipient,
            owner_asset_account: &ctx.accounts.recipient_asset_account,
            authority: &authority,
            authority_signer_seeds: signer_seeds,
            token_program: &ctx.accounts.token_program,
            associated_token_program: &ctx.accounts.associated_token_program,
            system_program: &ctx.accounts.system_program,
        },
        transferable,
        &AssetDescriptor::for_tier(tier),
    )?;

    let global_config = &mut ctx.accounts.global_config;
    let updated = global_config.record_issuance(tier, IssuancePath::Admin)?;
    global_config.check_invariants()?;

    msg!(
        "Admin minted - Tier: {}, Asset: {}, Recipient: {}, Admin minted: {}/{}",
        tier_id,
        asset_mint,
        recipient,
        updated.admin_minted_count,
        updated.admin_cap()
    );

    emit!(AdminMintedEvent {
        tier_id,
        asset_mint,
        recipient,
        collection: global_config.collection,
        minted_count: updated.minted_count,
        admin_minted_count: updated.admin_minted_count,
        transferable,
    });

    Ok(asset_mint)
}
