use anchor_lang::prelude::*;

use crate::errors::PaymentSplitterError;
use crate::events::FundsSettled;
use crate::state::PaymentRequest;
use crate::utils::{current_timestamp, format_sol, move_lamports, settleable_lamports};

#[derive(Accounts)]
pub struct ClaimFunds<'info> {
    /// The request owner collecting the funds
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: Payment request PDA to drain down to its rent-exempt minimum.
    /// Loaded through `PaymentRequest::load`; the signer is checked against
    /// the stored owner in the handler.
    #[account(mut)]
    pub payment_request: UncheckedAccount<'info>,
}

/// Claim is allowed in either state and never touches `current_amount`
/// or `is_completed`.
pub fn handler(ctx: Context<ClaimFunds>) -> Result<()> {
    let request_info = ctx.accounts.payment_request.to_account_info();
    let mut request = PaymentRequest::load(&request_info)?;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        request.owner,
        PaymentSplitterError::Unauthorized
    );

    let rent_exempt = Rent::get()?.minimum_balance(request_info.data_len());
    let payout = settleable_lamports(request_info.lamports(), rent_exempt);
    require!(payout > 0, PaymentSplitterError::NothingToClaim);

    let now = current_timestamp()?;

    move_lamports(&request_info, &ctx.accounts.owner.to_account_info(), payout)?;
    request.record_settlement(payout, now)?;

    msg!(
        "Owner claimed {} from '{}' ({:?})",
        format_sol(payout),
        request.label,
        request.status()
    );

    emit!(FundsSettled {
        payment_request: request_info.key(),
        owner: request.owner,
        amount: payout,
        total_settled: request.total_settled,
        automatic: false,
    });

    request.store(&request_info)
}
