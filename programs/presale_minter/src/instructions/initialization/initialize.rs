use crate::constants::seeds;
use crate::errors::PresaleErrorCode;
use crate::events::ConfigInitializedEvent;
use crate::state::GlobalConfig;
use anchor_lang::prelude::*;
use anchor_lang::Accounts;

/// Identities recorded in the global config at creation time
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializeArgs {
    /// Admin authority, treasury and attestation signer
    pub admin: Pubkey,
    /// Collection the issued assets belong to
    pub collection: Pubkey,
    /// Accepted payment asset reference
    pub payment_mint: Pubkey,
}

impl InitializeArgs {
    /// The default (all-zero) key is never a meaningful identity
    pub fn is_well_formed(&self) -> bool {
        self.admin != Pubkey::default()
            && self.collection != Pubkey::default()
            && self.payment_mint != Pubkey::default()
    }
}

/// Account structure for creating the global config.
///
/// # Preconditions
/// - The `global_config` PDA must not be initialized yet. The account is declared
///   `init_if_needed` so that a second call reaches the handler and fails with
///   `AlreadyInitialized` instead of a generic allocation error.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The global config PDA, allocated and funded by `payer`.
    ///
    /// # Note
    /// - Space is allocated as `8 + GlobalConfig::INIT_SPACE` bytes, where 8 bytes are for the discriminator.
    /// - Seeded with `"global-config"` and a bump for PDA derivation.
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + GlobalConfig::INIT_SPACE,
        seeds = [seeds::GLOBAL_CONFIG],
        bump
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    /// Funds the allocation. Does not need to be the admin.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Solana System program for account creation and rent payment.
    pub system_program: Program<'info, System>,
}

/// Creates the global config with the compiled-in tier table.
///
/// Sales start unpaused, every tier price is 0 and every counter is 0. Supply caps
/// and eligibility defaults come from `TierConfig::for_tier`, never from the caller.
///
/// # Errors
/// - [`PresaleErrorCode::AlreadyInitialized`] if the config already exists.
/// - [`PresaleErrorCode::InvalidArgument`] if any of the identities is the default key.
pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;
    require!(
        !global_config.is_initialized(),
        PresaleErrorCode::AlreadyInitialized
    );
    require!(args.is_well_formed(), PresaleErrorCode::InvalidArgument);

    global_config.admin = args.admin;
    global_config.collection = args.collection;
    global_config.payment_mint = args.payment_mint;
    global_config.sales_paused = false;
    global_config.tiers = GlobalConfig::default_tiers();
    global_config.bump = ctx.bumps.global_config;

    global_config.check_invariants()?;

    msg!(
        "Global config initialized - Admin: {}, Collection: {}",
        args.admin,
        args.collection
    );

    emit!(ConfigInitializedEvent {
        global_config: global_config.key(),
        admin: args.admin,
        collection: args.collection,
        payment_mint: args.payment_mint,
    });

    Ok(())
}
