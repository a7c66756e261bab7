use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::PAYMENT_REQUEST_SEED;
use crate::errors::PaymentSplitterError;
use crate::events::PaymentRequestCreated;
use crate::state::PaymentRequest;
use crate::utils::{current_timestamp, format_sol};

#[derive(Accounts)]
pub struct CreatePaymentRequest<'info> {
    /// The wallet creating the request (pays for account creation)
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: Payment request PDA, seeds = ["payment_request", owner, label].
    /// The handler re-derives and compares the address and allocates the
    /// account itself, so label and amount errors surface before any derivation.
    #[account(mut)]
    pub payment_request: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreatePaymentRequest>, target_amount: u64, label: String) -> Result<()> {
    PaymentRequest::validate_target(target_amount)?;

    let owner_key = ctx.accounts.owner.key();
    let (address, bump) = PaymentRequest::derive_address(&owner_key, &label)?;
    require_keys_eq!(
        ctx.accounts.payment_request.key(),
        address,
        PaymentSplitterError::InvalidRecordAddress
    );

    let request_info = ctx.accounts.payment_request.to_account_info();
    require!(
        request_info.owner != &crate::ID && request_info.data_is_empty(),
        PaymentSplitterError::RecordAlreadyExists
    );

    let space = PaymentRequest::space(&label);
    let rent_exempt = Rent::get()?.minimum_balance(space);
    let shortfall = rent_exempt.saturating_sub(request_info.lamports());
    require!(
        ctx.accounts.owner.lamports() >= shortfall,
        PaymentSplitterError::InsufficientFunds
    );

    let now = current_timestamp()?;
    let request = PaymentRequest::new(owner_key, target_amount, label, bump, now)?;

    let bump_seed = [bump];
    let signer_seeds: &[&[&[u8]]] = &[&[
        PAYMENT_REQUEST_SEED,
        owner_key.as_ref(),
        request.label.as_bytes(),
        &bump_seed,
    ]];
    let system_info = ctx.accounts.system_program.to_account_info();
    let owner_info = ctx.accounts.owner.to_account_info();

    if request_info.lamports() == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system_info,
                system_program::CreateAccount {
                    from: owner_info,
                    to: request_info.clone(),
                },
                signer_seeds,
            ),
            rent_exempt,
            space as u64,
            &crate::ID,
        )?;
    } else {
        // Someone already sent lamports to the address: top up, then allocate and assign
        if shortfall > 0 {
            system_program::transfer(
                CpiContext::new(
                    system_info.clone(),
                    system_program::Transfer {
                        from: owner_info,
                        to: request_info.clone(),
                    },
                ),
                shortfall,
            )?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system_info.clone(),
                system_program::Allocate {
                    account_to_allocate: request_info.clone(),
                },
                signer_seeds,
            ),
            space as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system_info,
                system_program::Assign {
                    account_to_assign: request_info.clone(),
                },
                signer_seeds,
            ),
            &crate::ID,
        )?;
    }

    request.store(&request_info)?;

    msg!(
        "Payment request '{}' created by {} with target {}",
        request.label,
        owner_key,
        format_sol(target_amount)
    );

    emit!(PaymentRequestCreated {
        payment_request: address,
        owner: owner_key,
        target_amount,
        label: request.label,
        created_at: now,
    });

    Ok(())
}
