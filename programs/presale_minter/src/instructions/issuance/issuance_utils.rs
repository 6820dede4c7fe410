use crate::errors::PresaleErrorCode;
use crate::state::{GlobalConfig, TierConfig, TierId};
use crate::utils::{verify_invite_proof, verify_kyc_proof, EligibilityProof, ProofContext};
use anchor_lang::prelude::*;

/// Public-path preconditions that depend only on the stored config.
///
/// Checked in order: paused, tier id, remaining supply, price.
pub fn check_public_issuance(config: &GlobalConfig, tier_id: u8) -> Result<TierId> {
    require!(!config.sales_paused, PresaleErrorCode::SalesPaused);

    let tier = TierId::try_from(tier_id)?;
    let tier_config = config.tier(tier);
    require!(!tier_config.is_sold_out(), PresaleErrorCode::TierSoldOut);
    require!(tier_config.price > 0, PresaleErrorCode::TierPriceNotSet);

    Ok(tier)
}

/// Admin-path preconditions. The pause flag does not apply here.
pub fn check_admin_issuance(config: &GlobalConfig, tier_id: u8) -> Result<TierId> {
    let tier = TierId::try_from(tier_id)?;
    let tier_config = config.tier(tier);
    require!(!tier_config.is_sold_out(), PresaleErrorCode::TierSoldOut);
    require!(
        tier_config.admin_minted_count < tier_config.admin_cap(),
        PresaleErrorCode::AdminCapExceeded
    );

    Ok(tier)
}

/// Runs the KYC and invite gates a tier demands, KYC first.
///
/// A proof supplied for a gate the tier does not require is ignored.
pub fn check_eligibility(
    tier: &TierConfig,
    proof_ctx: &ProofContext,
    identity: &Pubkey,
    kyc_proof: Option<&EligibilityProof>,
    invite_proof: Option<&EligibilityProof>,
) -> Result<()> {
    if tier.kyc_required {
        let proof = kyc_proof.ok_or(PresaleErrorCode::KycRequired)?;
        require!(
            verify_kyc_proof(proof_ctx, identity, proof)?,
            PresaleErrorCode::KycInvalid
        );
    }

    if tier.invite_only {
        let proof = invite_proof.ok_or(PresaleErrorCode::InviteRequired)?;
        require!(
            verify_invite_proof(proof_ctx, identity, proof)?,
            PresaleErrorCode::InviteInvalid
        );
    }

    Ok(())
}

/// Admin issuance defaults to the admin's own wallet when no recipient is named
pub fn resolve_recipient(admin: &Pubkey, recipient: Option<Pubkey>) -> Pubkey {
    recipient.unwrap_or(*admin)
}
