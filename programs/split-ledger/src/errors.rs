use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Recipient address cannot be zero")]
    InvalidRecipient,

    #[msg("Recipient is already registered for this holder")]
    DuplicateRecipient,

    #[msg("Recipient list is full (max 128)")]
    RecipientLimitExceeded,

    #[msg("Holder has no registered recipients")]
    NoRecipients,

    #[msg("Deposit must be at least the number of recipients")]
    InsufficientDeposit,

    #[msg("Amount exceeds credited allowance")]
    InsufficientAllowance,

    #[msg("Token transfer out of custody cannot complete")]
    TransferFailed,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,

    #[msg("Invalid vault account")]
    InvalidVault,

    #[msg("Mint does not match ledger")]
    InvalidMint,

    #[msg("Token account has wrong owner or mint")]
    InvalidTokenAccount,
}
