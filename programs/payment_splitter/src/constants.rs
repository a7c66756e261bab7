/// Seed prefix for payment request PDAs: ["payment_request", owner, label]
pub const PAYMENT_REQUEST_SEED: &[u8] = b"payment_request";

/// Longest label accepted. A label is used verbatim as a PDA seed,
/// so it cannot exceed the runtime's per-seed limit.
pub const MAX_LABEL_LEN: usize = anchor_lang::solana_program::pubkey::MAX_SEED_LEN;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Decimal places used when rendering SOL amounts in logs
pub const DISPLAY_DECIMALS: usize = 4;

pub const DISCRIMINATOR_SIZE: usize = 8;
pub const PUBKEY_SIZE: usize = 32;
pub const U64_SIZE: usize = 8;
pub const I64_SIZE: usize = 8;
pub const BOOL_SIZE: usize = 1;
pub const U8_SIZE: usize = 1;
pub const STRING_PREFIX_SIZE: usize = 4;
