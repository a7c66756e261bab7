use anchor_lang::prelude::*;

use crate::constants::{DISPLAY_DECIMALS, LAMPORTS_PER_SOL};
use crate::errors::PaymentSplitterError;

pub fn current_timestamp() -> Result<i64> {
    Ok(Clock::get()?.unix_timestamp)
}

/// Render lamports as SOL rounded to `DISPLAY_DECIMALS` places, e.g. "1.5000 SOL".
/// Integer arithmetic only, so the output is exact on every target.
pub fn format_sol(lamports: u64) -> String {
    let step = LAMPORTS_PER_SOL / 10u64.pow(DISPLAY_DECIMALS as u32);
    let scale = LAMPORTS_PER_SOL / step;
    // u128 keeps the half-up rounding from overflowing near u64::MAX
    let scaled = (lamports as u128 + (step / 2) as u128) / step as u128;
    format!(
        "{}.{:0width$} SOL",
        scaled / scale as u128,
        scaled % scale as u128,
        width = DISPLAY_DECIMALS
    )
}

/// Lamports an account can give up while staying rent exempt.
pub fn settleable_lamports(balance: u64, rent_exempt_minimum: u64) -> u64 {
    balance.saturating_sub(rent_exempt_minimum)
}

/// Move lamports out of a program-owned account.
/// Only valid when `from` is owned by this program; the runtime rejects
/// debits from anything else.
pub fn move_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    **from.try_borrow_mut_lamports()? = from
        .lamports()
        .checked_sub(amount)
        .ok_or(PaymentSplitterError::InsufficientFunds)?;

    **to.try_borrow_mut_lamports()? = to
        .lamports()
        .checked_add(amount)
        .ok_or(PaymentSplitterError::ArithmeticOverflow)?;

    Ok(())
}
