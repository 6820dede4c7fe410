use crate::errors::PresaleErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

/// Moves `amount` lamports from the payer to the treasury.
///
/// Fails with `InsufficientPayment` before touching any account when the payer
/// cannot cover the amount; any later failure of the transfer itself aborts the
/// whole instruction.
pub fn settle_payment<'info>(
    system_program: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    treasury: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(
        payer.lamports() >= amount,
        PresaleErrorCode::InsufficientPayment
    );

    system_program::transfer(
        CpiContext::new(
            system_program.key(),
            Transfer {
                from: payer.to_account_info(),
                to: treasury.to_account_info(),
            },
        ),
        amount,
    )
}
