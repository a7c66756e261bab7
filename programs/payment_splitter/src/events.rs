use anchor_lang::prelude::*;

#[event]
pub struct PaymentRequestCreated {
    pub payment_request: Pubkey,
    pub owner: Pubkey,
    pub target_amount: u64,
    pub label: String,
    pub created_at: i64,
}

#[event]
pub struct ContributionReceived {
    pub payment_request: Pubkey,
    pub contributor: Pubkey,
    pub amount: u64,
    pub current_amount: u64,
    pub target_amount: u64,
    pub is_completed: bool,
}

/// Emitted whenever held lamports leave the request for its owner.
/// `automatic` is true when settlement happened inside a contribution.
#[event]
pub struct FundsSettled {
    pub payment_request: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub total_settled: u64,
    pub automatic: bool,
}
