use anchor_lang::prelude::*;
use instructions::*;
use utils::EligibilityProof;

// Program ID declaration
declare_id!("3zmHmjntKFXckhVbUycHFr6GQzHAvEqQ9WNt4a77mRKq");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

/// The main program module for the tiered presale minter.
///
/// The program sells uniquely identified assets in six fixed tiers. Each tier has
/// a hard supply cap, a price, and optional KYC and invite gates. Sold assets are
/// issued directly to the buyer with placeholder ("mystery box") metadata.
///
/// Core functionalities include:
/// - Creating the global configuration (`initialize`).
/// - Pausing sales and tuning tier price and gates (`update_config`).
/// - Public, paid issuance (`mint`).
/// - Privileged issuance, capped at 5% of each tier (`admin_mint`).
/// - Read-only tier inspection (`get_tier_status`).
///
/// # Security
/// - Only the admin recorded in the global config can update it or use `admin_mint`.
/// - KYC and invite attestations are Ed25519 signatures by the admin, verified
///   through the native Ed25519 program in the same transaction.
/// - The global config PDA is the sole mint and metadata authority of every asset.
/// - Counters are re-checked against their invariants before every mutating
///   instruction returns.
#[program]
pub mod presale_minter {
    use super::*;

    /// Creates the global configuration with the compiled-in tier table.
    ///
    /// Delegates to `initialization::initialize`.
    /// Can succeed only once per deployment.
    ///
    /// # Arguments
    /// - `ctx`: Context for `Initialize`.
    /// - `args`: Admin, collection and payment asset identities.
    pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
        initialization::initialize(ctx, args)
    }

    /// Updates the pause flag and/or the price and gates of one tier.
    ///
    /// Delegates to `config::update_config`.
    /// Only the admin can call this instruction. Emits `ConfigUpdatedEvent`.
    ///
    /// # Arguments
    /// - `ctx`: Context for `UpdateConfig`.
    /// - `args`: Fields to change; absent fields keep their value.
    pub fn update_config(ctx: Context<UpdateConfig>, args: UpdateConfigArgs) -> Result<()> {
        config::update_config(ctx, args)
    }

    /// Sells one asset of a tier to the signer.
    ///
    /// Delegates to `issuance::mint`.
    /// Attestations for gated tiers must be carried by Ed25519 verify instructions
    /// placed before this one in the same transaction.
    /// Emits `TierMintedEvent` upon success.
    ///
    /// # Arguments
    /// - `ctx`: Context for `MintTier`.
    /// - `tier_id`: Index of the tier, 0 to 5.
    /// - `kyc_proof`: KYC attestation reference, required for KYC tiers.
    /// - `invite_proof`: Invite attestation reference, required for invite-only tiers.
    ///
    /// # Returns
    /// The address of the new asset mint.
    pub fn mint(
        ctx: Context<MintTier>,
        tier_id: u8,
        kyc_proof: Option<EligibilityProof>,
        invite_proof: Option<EligibilityProof>,
    ) -> Result<Pubkey> {
        issuance::mint(ctx, tier_id, kyc_proof, invite_proof)
    }

    /// Issues one asset of a tier without payment.
    ///
    /// Delegates to `issuance::admin_mint`.
    /// Only the admin can call this instruction. Emits `AdminMintedEvent`.
    ///
    /// # Arguments
    /// - `ctx`: Context for `AdminMint`.
    /// - `tier_id`: Index of the tier, 0 to 5.
    /// - `recipient`: Receiving wallet, the admin when absent.
    ///
    /// # Returns
    /// The address of the new asset mint.
    pub fn admin_mint(
        ctx: Context<AdminMint>,
        tier_id: u8,
        recipient: Option<Pubkey>,
    ) -> Result<Pubkey> {
        issuance::admin_mint(ctx, tier_id, recipient)
    }

    /// Reports price, counters and gates of one tier.
    ///
    /// Delegates to `tier_info::get_tier_status`.
    /// This is a read-only instruction. Emits `TierStatusEvent`.
    ///
    /// # Arguments
    /// - `ctx`: Context for `GetTierStatus`.
    /// - `tier_id`: Index of the tier, 0 to 5.
    pub fn get_tier_status(ctx: Context<GetTierStatus>, tier_id: u8) -> Result<TierStatus> {
        tier_info::get_tier_status(ctx, tier_id)
    }
}
