use anchor_lang::prelude::*;

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub payer: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RecipientRegistered {
    pub ledger: Pubkey,
    pub holder: Pubkey,
    pub recipient: Pubkey,
    pub recipient_count: u8,
    pub timestamp: i64,
}

#[event]
pub struct DepositSplit {
    pub ledger: Pubkey,
    pub holder: Pubkey,
    pub deposit: u64,
    pub share: u64,
    pub remainder: u64,
    pub recipient_count: u8,
    pub timestamp: i64,
}

/// Emitted for both recipient and remainder withdrawals.
/// Remainder withdrawals carry the ledger address as `grantor`.
#[event]
pub struct Withdrawal {
    pub ledger: Pubkey,
    pub grantor: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
