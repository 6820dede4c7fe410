use crate::utils::eligibility::ed25519_parser::parse_ed25519_ix;
use anchor_lang::prelude::borsh::BorshDeserialize;
use anchor_lang::prelude::*;
use anchor_lang::compat::solana_instructions_sysvar;
use solana_sdk_ids::ed25519_program;

/// Kind of eligibility an attestation grants
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProofKind {
    Kyc,
    Invite,
}

/// Caller-supplied reference to an off-chain attestation.
///
/// The attestation itself is an Ed25519 signature by the config admin over an
/// `EligibilityMessage`, carried by a native Ed25519 verify instruction placed
/// earlier in the same transaction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EligibilityProof {
    /// Unix timestamp after which the attestation is no longer accepted
    pub expiry_unix: u64,
}

/// The exact bytes the attestation authority signs (Borsh encoded)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EligibilityMessage {
    pub program_id: Pubkey,
    pub user_pubkey: Pubkey,
    pub kind: ProofKind,
    pub expiry_unix: u64,
}

/// Everything a proof is checked against, besides the proof and the identity
pub struct ProofContext<'a, 'info> {
    pub program_id: &'a Pubkey,
    /// Key whose signatures are trusted as attestations
    pub authority: &'a Pubkey,
    pub instructions_sysvar: &'a AccountInfo<'info>,
    pub now: u64,
}

pub fn verify_kyc_proof(
    ctx: &ProofContext,
    identity: &Pubkey,
    proof: &EligibilityProof,
) -> Result<bool> {
    verify_eligibility_proof(ctx, identity, ProofKind::Kyc, proof)
}

pub fn verify_invite_proof(
    ctx: &ProofContext,
    identity: &Pubkey,
    proof: &EligibilityProof,
) -> Result<bool> {
    verify_eligibility_proof(ctx, identity, ProofKind::Invite, proof)
}

/// Looks for an Ed25519 verify instruction, anywhere before the current one, that
/// carries the authority's signature over the expected message for this identity.
///
/// The precompile has already checked the signature itself by the time this runs;
/// what is left is making sure it signs the right statement with the right key.
fn verify_eligibility_proof(
    ctx: &ProofContext,
    identity: &Pubkey,
    kind: ProofKind,
    proof: &EligibilityProof,
) -> Result<bool> {
    if proof.expiry_unix < ctx.now {
        return Ok(false);
    }

    let expected = EligibilityMessage {
        program_id: *ctx.program_id,
        user_pubkey: *identity,
        kind,
        expiry_unix: proof.expiry_unix,
    };

    let current_index = solana_instructions_sysvar::load_current_index_checked(ctx.instructions_sysvar)?;

    for index in 0..current_index as usize {
        let ix = solana_instructions_sysvar::load_instruction_at_checked(index, ctx.instructions_sysvar)?;
        if ix.program_id != ed25519_program::id() {
            continue;
        }

        let Some(parsed) = parse_ed25519_ix(&ix.data) else {
            continue;
        };
        if parsed.sig_count != 1 || parsed.pubkey != ctx.authority.to_bytes() {
            continue;
        }

        match EligibilityMessage::try_from_slice(&parsed.message) {
            Ok(signed) if signed == expected => return Ok(true),
            _ => continue,
        }
    }

    Ok(false)
}
