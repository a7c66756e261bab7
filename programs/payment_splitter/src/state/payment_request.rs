use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::PaymentSplitterError;

/// What a contribution does once it completes the request.
/// With `SettleOnCompletion` the owner account must accompany the instruction
/// and the whole settleable balance is forwarded to it in the same instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContributeMode {
    AccumulateOnly,
    SettleOnCompletion,
}

impl Default for ContributeMode {
    fn default() -> Self {
        ContributeMode::AccumulateOnly
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RequestStatus {
    Open,
    Completed,
}

/// Payment request PDA.
///
/// Seeds: ["payment_request", owner, label]
/// One request per (owner, label). Collects lamports until `current_amount`
/// reaches `target_amount`.
///
/// `current_amount` counts contributions received. It is never reduced by
/// claims, so after a partial claim it no longer matches the held balance;
/// `total_settled` records what has left the account for the owner.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Wallet entitled to claim the collected funds
    pub owner: Pubkey,

    /// Funding goal in lamports, fixed at creation
    pub target_amount: u64,

    /// Lamports contributed so far (cumulative)
    pub current_amount: u64,

    /// Free-form description, part of the PDA seeds
    pub label: String,

    /// Set once `current_amount == target_amount`
    pub is_completed: bool,

    /// PDA bump seed
    pub bump: u8,

    /// Lamports forwarded to the owner by claims and auto-settlement (cumulative)
    pub total_settled: u64,

    /// Unix timestamp when this request was created
    pub created_at: i64,

    /// Unix timestamp of the last contribution or settlement
    pub last_action_at: i64,
}

impl PaymentRequest {
    /// Account size for a given label (includes discriminator)
    pub fn space(label: &str) -> usize {
        DISCRIMINATOR_SIZE
            + PUBKEY_SIZE                       // owner
            + U64_SIZE                          // target_amount
            + U64_SIZE                          // current_amount
            + STRING_PREFIX_SIZE + label.len()  // label
            + BOOL_SIZE                         // is_completed
            + U8_SIZE                           // bump
            + U64_SIZE                          // total_settled
            + I64_SIZE                          // created_at
            + I64_SIZE                          // last_action_at
    }

    pub fn validate_label(label: &str) -> Result<()> {
        require!(!label.is_empty(), PaymentSplitterError::EmptyLabel);
        require!(label.len() <= MAX_LABEL_LEN, PaymentSplitterError::LabelTooLong);
        Ok(())
    }

    pub fn validate_target(target_amount: u64) -> Result<()> {
        require!(target_amount > 0, PaymentSplitterError::InvalidAmount);
        Ok(())
    }

    /// PDA and bump for (owner, label) under this program.
    pub fn derive_address(owner: &Pubkey, label: &str) -> Result<(Pubkey, u8)> {
        Self::derive_address_for(&crate::ID, owner, label)
    }

    /// PDA and bump for (owner, label) under an arbitrary program id.
    /// The bump is the first one, counting down from 255, whose address is off the curve.
    pub fn derive_address_for(
        program_id: &Pubkey,
        owner: &Pubkey,
        label: &str,
    ) -> Result<(Pubkey, u8)> {
        Self::validate_label(label)?;
        Pubkey::try_find_program_address(
            &[PAYMENT_REQUEST_SEED, owner.as_ref(), label.as_bytes()],
            program_id,
        )
        .ok_or_else(|| error!(PaymentSplitterError::AddressDerivationFailed))
    }

    pub fn new(
        owner: Pubkey,
        target_amount: u64,
        label: String,
        bump: u8,
        now: i64,
    ) -> Result<Self> {
        Self::validate_target(target_amount)?;
        Self::validate_label(&label)?;

        Ok(Self {
            owner,
            target_amount,
            current_amount: 0,
            label,
            is_completed: false,
            bump,
            total_settled: 0,
            created_at: now,
            last_action_at: now,
        })
    }

    /// Decode a fetched account. Missing or zeroed data means there is no request.
    pub fn from_account_data(data: &[u8]) -> Result<Self> {
        if data.len() < DISCRIMINATOR_SIZE || data[..DISCRIMINATOR_SIZE].iter().all(|&b| b == 0) {
            return err!(PaymentSplitterError::RecordNotFound);
        }
        let mut buf = data;
        Self::try_deserialize(&mut buf)
    }

    /// Load a request from its account, as handed to an instruction.
    /// Accounts not owned by this program, or without request data, are
    /// reported as `RecordNotFound`; the stored bump must re-derive the account's address.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.owner != &crate::ID {
            return err!(PaymentSplitterError::RecordNotFound);
        }
        let request = Self::from_account_data(&info.try_borrow_data()?[..])?;

        let address = Pubkey::create_program_address(
            &[
                PAYMENT_REQUEST_SEED,
                request.owner.as_ref(),
                request.label.as_bytes(),
                &[request.bump],
            ],
            &crate::ID,
        )
        .map_err(|_| error!(PaymentSplitterError::InvalidRecordAddress))?;
        require_keys_eq!(address, *info.key, PaymentSplitterError::InvalidRecordAddress);

        Ok(request)
    }

    /// Write the request back into its account. The label is immutable, so
    /// the encoding always fits the space allocated at creation.
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    pub fn status(&self) -> RequestStatus {
        if self.is_completed {
            RequestStatus::Completed
        } else {
            RequestStatus::Open
        }
    }

    /// Lamports still needed to reach the target
    pub fn remaining(&self) -> u64 {
        self.target_amount.saturating_sub(self.current_amount)
    }

    /// Validate a contribution without touching state.
    /// Returns true when `amount` closes the gap exactly.
    pub fn check_contribution(&self, amount: u64) -> Result<bool> {
        require!(!self.is_completed, PaymentSplitterError::RequestAlreadyCompleted);
        require!(amount > 0, PaymentSplitterError::InvalidAmount);

        // Anything past u64::MAX is past the target as well
        let next = self
            .current_amount
            .checked_add(amount)
            .ok_or(PaymentSplitterError::ContributionExceedsTarget)?;
        require!(
            next <= self.target_amount,
            PaymentSplitterError::ContributionExceedsTarget
        );

        Ok(next == self.target_amount)
    }

    /// Apply a contribution to the bookkeeping. Returns true if it completed the request.
    pub fn record_contribution(&mut self, amount: u64, now: i64) -> Result<bool> {
        let completes = self.check_contribution(amount)?;

        self.current_amount = self
            .current_amount
            .checked_add(amount)
            .ok_or(PaymentSplitterError::ArithmeticOverflow)?;
        self.is_completed = completes;
        self.last_action_at = now;

        Ok(completes)
    }

    pub fn record_settlement(&mut self, amount: u64, now: i64) -> Result<()> {
        self.total_settled = self
            .total_settled
            .checked_add(amount)
            .ok_or(PaymentSplitterError::ArithmeticOverflow)?;
        self.last_action_at = now;
        Ok(())
    }

    /// Invariants every committed state satisfies
    #[cfg(test)]
    pub fn is_consistent(&self) -> bool {
        self.target_amount > 0
            && self.current_amount <= self.target_amount
            && self.is_completed == (self.current_amount == self.target_amount)
    }
}
