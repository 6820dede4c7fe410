use anchor_lang::prelude::*;

#[error_code]
pub enum PresaleErrorCode {
    #[msg("Global config is already initialized")]
    AlreadyInitialized,
    #[msg("Only admin can perform this action")]
    Unauthorized,
    #[msg("Invalid argument")]
    InvalidArgument,
    #[msg("Sales are currently paused")]
    SalesPaused,
    #[msg("No remaining supply for this tier")]
    TierSoldOut,
    #[msg("Price is not set for this tier")]
    TierPriceNotSet,
    #[msg("KYC proof is required for this tier")]
    KycRequired,
    #[msg("KYC proof could not be verified")]
    KycInvalid,
    #[msg("Invite proof is required for this tier")]
    InviteRequired,
    #[msg("Invite proof could not be verified")]
    InviteInvalid,
    #[msg("Payer cannot cover the tier price")]
    InsufficientPayment,
    #[msg("Admin issuance cap reached for this tier")]
    AdminCapExceeded,
    #[msg("Tier counters are inconsistent")]
    CounterInvariantViolated,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Failed to size the asset mint account")]
    AssetSizeCalculation,
}
