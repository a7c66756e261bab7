use anchor_lang::prelude::*;

#[error_code]
pub enum PaymentSplitterError {
    /// Target or contribution amount must be greater than zero
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Label must not be empty")]
    EmptyLabel,

    /// Label is used as a PDA seed and cannot exceed 32 bytes
    #[msg("Label too long. Maximum 32 bytes.")]
    LabelTooLong,

    #[msg("A payment request already exists for this owner and label")]
    RecordAlreadyExists,

    #[msg("Payment request not found")]
    RecordNotFound,

    /// Supplied account does not match the address derived from owner + label
    #[msg("Account does not match the derived payment request address")]
    InvalidRecordAddress,

    #[msg("Payment request is already completed")]
    RequestAlreadyCompleted,

    /// Overshooting contributions are rejected, never partially accepted
    #[msg("Contribution would exceed the target amount")]
    ContributionExceedsTarget,

    #[msg("Unauthorized: signer is not the payment request owner")]
    Unauthorized,

    #[msg("Settle-on-completion requires the owner account")]
    MissingOwnerAccount,

    #[msg("Nothing to claim above the rent-exempt minimum")]
    NothingToClaim,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Cannot derive the payment request address")]
    AddressDerivationFailed,

    #[msg("Arithmetic overflow in amount calculation")]
    ArithmeticOverflow,
}
