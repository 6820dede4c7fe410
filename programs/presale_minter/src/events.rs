use anchor_lang::prelude::*;

/// Emitted once, when the global config is created
#[event]
pub struct ConfigInitializedEvent {
    pub global_config: Pubkey,
    pub admin: Pubkey,
    pub collection: Pubkey,
    pub payment_mint: Pubkey,
}

/// Emitted on every successful `update_config`; absent fields were left untouched
#[event]
pub struct ConfigUpdatedEvent {
    pub sales_paused: Option<bool>,
    pub tier_id: Option<u8>,
    pub new_price: Option<u64>,
    pub new_kyc_required: Option<bool>,
    pub new_invite_only: Option<bool>,
    pub new_transferable: Option<bool>,
}

/// Emitted when an asset is sold through the public path
#[event]
pub struct TierMintedEvent {
    pub tier_id: u8,
    pub asset_mint: Pubkey,
    pub owner: Pubkey,
    pub collection: Pubkey,
    pub price: u64,
    pub minted_count: u16,
    pub transferable: bool,
}

/// Emitted when the admin issues an asset through the privileged path
#[event]
pub struct AdminMintedEvent {
    pub tier_id: u8,
    pub asset_mint: Pubkey,
    pub recipient: Pubkey,
    pub collection: Pubkey,
    pub minted_count: u16,
    pub admin_minted_count: u16,
    pub transferable: bool,
}

#[event]
pub struct TierStatusEvent {
    pub tier_id: u8,
    pub remaining_supply: u16,
    pub remaining_admin_allowance: u16,
    pub timestamp: u64,
}
