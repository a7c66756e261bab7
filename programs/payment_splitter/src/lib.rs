use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::ContributeMode;


declare_id!("77se4gcMSK7iKPFf9GFjrWDiqMqNhD55xHuvc8Bu3Ajm");

#[program]
pub mod payment_splitter {
    use super::*;

    /// Create a payment request owned by the signer.
    /// Allocates a PDA with seeds = ["payment_request", owner, label],
    /// funded by the owner up to the rent-exempt minimum.
    pub fn create_payment_request(
        ctx: Context<CreatePaymentRequest>,
        target_amount: u64,
        label: String,
    ) -> Result<()> {
        instructions::create_payment_request::handler(ctx, target_amount, label)
    }

    /// Contribute lamports to an open payment request.
    /// The contribution must not overshoot the target. With
    /// `ContributeMode::SettleOnCompletion` a contribution that completes the
    /// request also forwards the held balance to the owner.
    pub fn contribute_payment(
        ctx: Context<ContributePayment>,
        amount: u64,
        mode: ContributeMode,
    ) -> Result<()> {
        instructions::contribute_payment::handler(ctx, amount, mode)
    }

    /// Withdraw everything above the rent-exempt minimum to the owner.
    /// Only the request owner can claim; works before and after completion.
    pub fn claim_funds(ctx: Context<ClaimFunds>) -> Result<()> {
        instructions::claim_funds::handler(ctx)
    }
}
