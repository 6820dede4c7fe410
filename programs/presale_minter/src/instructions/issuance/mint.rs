use crate::constants::seeds;
use crate::errors::PresaleErrorCode;
use crate::events::TierMintedEvent;
use crate::instructions::issuance::issuance_utils::{check_eligibility, check_public_issuance};
use crate::state::{GlobalConfig, IssuancePath};
use crate::utils::{
    create_and_assign_asset, settle_payment, AssetAccounts, AssetDescriptor, EligibilityProof,
    ProofContext,
};
use anchor_lang::{compat::solana_instructions_sysvar, prelude::*, Accounts};
use anchor_spl::{associated_token::AssociatedToken, token_2022::Token2022};

/// Accounts required for buying one asset of a tier
#[derive(Accounts)]
pub struct MintTier<'info> {
    /// Sale configuration. Also the mint and metadata authority of every issued asset.
    #[account(
        mut,
        seeds = [seeds::GLOBAL_CONFIG],
        bump = global_config.bump
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    /// Buyer. Pays the tier price, the rent of the new asset, and receives it.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Receives the tier price
    /// CHECK: must be the admin recorded in the global config
    #[account(
        mut,
        address = global_config.admin @ PresaleErrorCode::InvalidArgument
    )]
    pub treasury: UncheckedAccount<'info>,

    /// Fresh keypair for the new asset mint
    #[account(mut)]
    pub asset_mint: Signer<'info>,

    /// Buyer's associated token account for `asset_mint`, created by this instruction
    /// CHECK: address is validated by the associated token program on creation
    #[account(mut)]
    pub payer_asset_account: UncheckedAccount<'info>,

    /// CHECK: sysvar to read earlier attestation instructions
    #[account(address = solana_instructions_sysvar::id())]
    pub instructions_sysvar: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token2022>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

/// Sells one asset of `tier_id` to the signer.
///
/// # Process Flow
///
/// 1. Check pause flag, tier id, remaining supply and price
/// 2. Check the KYC and invite attestations the tier requires
/// 3. Transfer the tier price from the payer to the treasury
/// 4. Create the asset and assign it to the payer
/// 5. Advance the tier counter
///
/// All steps run in one instruction, so a failure at any point leaves no payment,
/// no asset and no counter change behind.
///
/// # Returns
///
/// The address of the new asset mint.
///
/// # Errors
///
/// * `SalesPaused`, `InvalidArgument`, `TierSoldOut`, `TierPriceNotSet`
/// * `KycRequired` / `KycInvalid`, `InviteRequired` / `InviteInvalid`
/// * `InsufficientPayment` if the payer cannot cover the price
pub fn mint(
    ctx: Context<MintTier>,
    tier_id: u8,
    kyc_proof: Option<EligibilityProof>,
    invite_proof: Option<EligibilityProof>,
) -> Result<Pubkey> {
    let tier = check_public_issuance(&ctx.accounts.global_config, tier_id)?;
    let tier_config = *ctx.accounts.global_config.tier(tier);
    let admin = ctx.accounts.global_config.admin;
    let payer_key = ctx.accounts.payer.key();

    let proof_ctx = ProofContext {
        program_id: ctx.program_id,
        authority: &admin,
        instructions_sysvar: &ctx.accounts.instructions_sysvar,
        now: Clock::get()?.unix_timestamp as u64,
    };
    check_eligibility(
        &tier_config,
        &proof_ctx,
        &payer_key,
        kyc_proof.as_ref(),
        invite_proof.as_ref(),
    )?;

    settle_payment(
        &ctx.accounts.system_program,
        &ctx.accounts.payer,
        &ctx.accounts.treasury,
        tier_config.price,
    )?;

    let bump = ctx.accounts.global_config.bump;
    let config_seeds = &[seeds::GLOBAL_CONFIG, &[bump]];
    let signer_seeds = &[config_seeds.as_slice()];
    let authority = ctx.accounts.global_config.to_account_info();

    let asset_mint = create_and_assign_asset(
        &AssetAccounts {
            payer: &ctx.accounts.payer,
            asset_mint: &ctx.accounts.asset_mint,
            owner: &ctx.accounts.payer,
            owner_asset_account: &ctx.accounts.payer_asset_account,
            authority: &authority,
            authority_signer_seeds: signer_seeds,
            token_program: &ctx.accounts.token_program,
            associated_token_program: &ctx.accounts.associated_token_program,
            system_program: &ctx.accounts.system_program,
        },
        tier_config.transferable,
        &AssetDescriptor::for_tier(tier),
    )?;

    let global_config = &mut ctx.accounts.global_config;
    let updated = global_config.record_issuance(tier, IssuancePath::Public)?;
    global_config.check_invariants()?;

    msg!(
        "Tier minted - Tier: {}, Asset: {}, Owner: {}, Price: {}, Minted: {}/{}",
        tier_id,
        asset_mint,
        payer_key,
        tier_config.price,
        updated.minted_count,
        updated.supply_total
    );

    emit!(TierMintedEvent {
        tier_id,
        asset_mint,
        owner: payer_key,
        collection: global_config.collection,
        price: tier_config.price,
        minted_count: updated.minted_count,
        transferable: updated.transferable,
    });

    Ok(asset_mint)
}
