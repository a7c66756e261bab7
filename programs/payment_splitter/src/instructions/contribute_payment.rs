use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::PaymentSplitterError;
use crate::events::{ContributionReceived, FundsSettled};
use crate::state::{ContributeMode, PaymentRequest};
use crate::utils::{current_timestamp, format_sol, move_lamports, settleable_lamports};

#[derive(Accounts)]
pub struct ContributePayment<'info> {
    /// The wallet paying into the request
    #[account(mut)]
    pub contributor: Signer<'info>,

    /// CHECK: Payment request PDA receiving the contribution. Loaded through
    /// `PaymentRequest::load`, which checks program ownership and re-derives
    /// the address from the stored seeds.
    #[account(mut)]
    pub payment_request: UncheckedAccount<'info>,

    /// The request owner. Required with `ContributeMode::SettleOnCompletion`,
    /// ignored otherwise. Only receives lamports, so no signature is needed.
    #[account(mut)]
    pub owner: Option<SystemAccount<'info>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ContributePayment>, amount: u64, mode: ContributeMode) -> Result<()> {
    let request_info = ctx.accounts.payment_request.to_account_info();
    let mut request = PaymentRequest::load(&request_info)?;

    if let Some(owner) = ctx.accounts.owner.as_ref() {
        require_keys_eq!(owner.key(), request.owner, PaymentSplitterError::Unauthorized);
    }

    let completes = request.check_contribution(amount)?;

    require!(
        ctx.accounts.contributor.lamports() >= amount,
        PaymentSplitterError::InsufficientFunds
    );

    let settle_to = match mode {
        ContributeMode::AccumulateOnly => None,
        ContributeMode::SettleOnCompletion => Some(
            ctx.accounts
                .owner
                .as_ref()
                .ok_or(PaymentSplitterError::MissingOwnerAccount)?
                .to_account_info(),
        ),
    };

    let now = current_timestamp()?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.contributor.to_account_info(),
                to: request_info.clone(),
            },
        ),
        amount,
    )?;

    request.record_contribution(amount, now)?;

    msg!(
        "Received {} toward '{}' ({} / {}, {} remaining)",
        format_sol(amount),
        request.label,
        format_sol(request.current_amount),
        format_sol(request.target_amount),
        format_sol(request.remaining())
    );

    emit!(ContributionReceived {
        payment_request: request_info.key(),
        contributor: ctx.accounts.contributor.key(),
        amount,
        current_amount: request.current_amount,
        target_amount: request.target_amount,
        is_completed: request.is_completed,
    });

    if completes {
        msg!("Target reached, payment request '{}' is {:?}", request.label, request.status());
    }

    if let (true, Some(owner_info)) = (completes, settle_to) {
        let rent_exempt = Rent::get()?.minimum_balance(request_info.data_len());
        let payout = settleable_lamports(request_info.lamports(), rent_exempt);

        if payout > 0 {
            move_lamports(&request_info, &owner_info, payout)?;
            request.record_settlement(payout, now)?;

            msg!("Settled {} to owner {}", format_sol(payout), request.owner);

            emit!(FundsSettled {
                payment_request: request_info.key(),
                owner: request.owner,
                amount: payout,
                total_settled: request.total_settled,
                automatic: true,
            });
        }
    }

    request.store(&request_info)
}
