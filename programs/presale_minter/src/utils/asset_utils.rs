use crate::constants::{ASSET_DECIMALS, PLACEHOLDER_NAME, PLACEHOLDER_SYMBOL};
use crate::errors::PresaleErrorCode;
use crate::state::TierId;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, CreateAccount};
use anchor_spl::associated_token::{self, Create};
use anchor_spl::token_2022::{self, InitializeMint2, MintTo};
use anchor_spl::token_2022_extensions::metadata_pointer::{
    metadata_pointer_initialize, MetadataPointerInitialize,
};
use anchor_spl::token_2022_extensions::non_transferable::{
    non_transferable_mint_initialize, NonTransferableMintInitialize,
};
use anchor_spl::token_2022_extensions::token_metadata::{
    token_metadata_initialize, TokenMetadataInitialize,
};
use spl_token_2022::extension::ExtensionType;
use spl_token_2022::state::Mint as MintState;

/// TLV header in front of the token-metadata extension: type (u16) + length (u16)
const METADATA_TLV_HEADER_LEN: usize = 4;

/// Fixed part of the Borsh-encoded token metadata: update authority, mint,
/// three string length prefixes and the empty additional-metadata vector
const METADATA_FIXED_LEN: usize = 32 + 32 + 4 + 4 + 4 + 4;

/// Display metadata registered on every issued asset
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetDescriptor {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl AssetDescriptor {
    /// Placeholder ("mystery box") metadata, revealed off-chain later
    pub fn for_tier(tier: TierId) -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            symbol: PLACEHOLDER_SYMBOL.to_string(),
            uri: tier.metadata_uri(),
        }
    }

    /// Bytes the token-metadata extension will add to the mint account
    pub fn metadata_space(&self) -> usize {
        METADATA_TLV_HEADER_LEN
            + METADATA_FIXED_LEN
            + self.name.len()
            + self.symbol.len()
            + self.uri.len()
    }
}

/// Accounts that take part in creating a single asset
pub struct AssetAccounts<'a, 'info> {
    /// Funds the mint and the owner's token account
    pub payer: &'a AccountInfo<'info>,
    /// Fresh keypair account that becomes the asset mint
    pub asset_mint: &'a AccountInfo<'info>,
    pub owner: &'a AccountInfo<'info>,
    /// Owner's associated token account for `asset_mint`, created here
    pub owner_asset_account: &'a AccountInfo<'info>,
    /// Global config PDA, mint authority and metadata update authority of every asset
    pub authority: &'a AccountInfo<'info>,
    pub authority_signer_seeds: &'a [&'a [&'a [u8]]],
    pub token_program: &'a AccountInfo<'info>,
    pub associated_token_program: &'a AccountInfo<'info>,
    pub system_program: &'a AccountInfo<'info>,
}

/// Size of the asset mint before the metadata is written
pub fn asset_mint_space(transferable: bool) -> Result<usize> {
    let mut extensions = vec![ExtensionType::MetadataPointer];
    if !transferable {
        extensions.push(ExtensionType::NonTransferable);
    }

    ExtensionType::try_calculate_account_len::<MintState>(&extensions)
        .map_err(|_| error!(PresaleErrorCode::AssetSizeCalculation))
}

/// Creates one uniquely identified asset and hands it to `owner`.
///
/// The asset is a Token-2022 mint with zero decimals and a supply of exactly one,
/// held in the owner's associated token account. Mints for non-transferable tiers
/// carry the `NonTransferable` extension, so the token program itself refuses any
/// later transfer. The mint points at itself for metadata, which is registered
/// before the single unit is minted.
///
/// Returns the address of the new asset mint.
pub fn create_and_assign_asset(
    accounts: &AssetAccounts,
    transferable: bool,
    descriptor: &AssetDescriptor,
) -> Result<Pubkey> {
    let mint_space = asset_mint_space(transferable)?;
    let lamports = Rent::get()?.minimum_balance(mint_space + descriptor.metadata_space());

    system_program::create_account(
        CpiContext::new(
            accounts.system_program.key(),
            CreateAccount {
                from: accounts.payer.to_account_info(),
                to: accounts.asset_mint.to_account_info(),
            },
        ),
        lamports,
        mint_space as u64,
        accounts.token_program.key,
    )?;

    if !transferable {
        non_transferable_mint_initialize(CpiContext::new(
            accounts.token_program.key(),
            NonTransferableMintInitialize {
                token_program_id: accounts.token_program.to_account_info(),
                mint: accounts.asset_mint.to_account_info(),
            },
        ))?;
    }

    metadata_pointer_initialize(
        CpiContext::new(
            accounts.token_program.key(),
            MetadataPointerInitialize {
                token_program_id: accounts.token_program.to_account_info(),
                mint: accounts.asset_mint.to_account_info(),
            },
        ),
        Some(accounts.authority.key()),
        Some(accounts.asset_mint.key()),
    )?;

    token_2022::initialize_mint2(
        CpiContext::new(
            accounts.token_program.key(),
            InitializeMint2 {
                mint: accounts.asset_mint.to_account_info(),
            },
        ),
        ASSET_DECIMALS,
        accounts.authority.key,
        None,
    )?;

    register_metadata(accounts, descriptor)?;

    associated_token::create(CpiContext::new(
        accounts.associated_token_program.key(),
        Create {
            payer: accounts.payer.to_account_info(),
            associated_token: accounts.owner_asset_account.to_account_info(),
            authority: accounts.owner.to_account_info(),
            mint: accounts.asset_mint.to_account_info(),
            system_program: accounts.system_program.to_account_info(),
            token_program: accounts.token_program.to_account_info(),
        },
    ))?;

    token_2022::mint_to(
        CpiContext::new_with_signer(
            accounts.token_program.key(),
            MintTo {
                mint: accounts.asset_mint.to_account_info(),
                to: accounts.owner_asset_account.to_account_info(),
                authority: accounts.authority.to_account_info(),
            },
            accounts.authority_signer_seeds,
        ),
        1,
    )?;

    Ok(accounts.asset_mint.key())
}

/// Writes name, symbol and URI into the asset mint's token-metadata extension.
///
/// The config PDA signs as both mint authority and update authority, so only this
/// program can later rewrite the metadata (e.g. on reveal).
pub fn register_metadata(accounts: &AssetAccounts, descriptor: &AssetDescriptor) -> Result<()> {
    token_metadata_initialize(
        CpiContext::new_with_signer(
            accounts.token_program.key(),
            TokenMetadataInitialize {
                program_id: accounts.token_program.to_account_info(),
                mint: accounts.asset_mint.to_account_info(),
                metadata: accounts.asset_mint.to_account_info(),
                mint_authority: accounts.authority.to_account_info(),
                update_authority: accounts.authority.to_account_info(),
            },
            accounts.authority_signer_seeds,
        ),
        descriptor.name.clone(),
        descriptor.symbol.clone(),
        descriptor.uri.clone(),
    )
}
