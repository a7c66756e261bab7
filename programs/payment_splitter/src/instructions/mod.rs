pub mod create_payment_request;
pub mod contribute_payment;
pub mod claim_funds;

pub use create_payment_request::*;
pub use contribute_payment::*;
pub use claim_funds::*;
