use anchor_lang::prelude::*;

use crate::{constants::MAX_RECIPIENTS, errors::ErrorCode, utils::calculate_split};

/// Per-mint ledger holding custody of a single vault
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct Ledger {
    /// Token mint all balances are denominated in
    pub mint: Pubkey,
    /// Vault address (PDA-owned ATA) holding custodied tokens
    pub vault: Pubkey,
    /// Total value in custody; equals the sum of every allowance and remainder owed
    pub balance: u64,
    /// Bump seed for PDA derivation (stored for CU optimization)
    pub bump: u8,
    pub _padding: [u8; 7],
}

impl Ledger {
    pub fn credit(&mut self, amount: u64) -> std::result::Result<(), ErrorCode> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> std::result::Result<(), ErrorCode> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(ErrorCode::MathUnderflow)?;
        Ok(())
    }
}

/// A holder's recipients and everything credited against them
///
/// Allocated at full capacity on the holder's first registration.
/// Entries are append-only: a recipient is never removed or reordered,
/// and an entry whose amount drops to zero stays registered.
#[account]
#[derive(Default)]
pub struct RecipientList {
    /// Ledger this list books against
    pub ledger: Pubkey,
    /// Holder that registered the recipients and funds the splits
    pub holder: Pubkey,
    /// Bump seed for PDA derivation
    pub bump: u8,
    /// Registered recipients in insertion order (at most MAX_RECIPIENTS)
    pub recipients: Vec<RecipientShare>,
    /// Split remainders credited back to the holder
    pub remainder_owed: u64,
}

/// Recipient entry: presence means registered, `amount` is the withdrawable allowance
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecipientShare {
    pub address: Pubkey,
    pub amount: u64,
}

/// Result of booking one deposit against a recipient list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitOutcome {
    pub share: u64,
    pub remainder: u64,
}

impl RecipientList {
    /// A freshly allocated list has a zeroed holder until the first registration fills it in
    pub fn is_initialized(&self) -> bool {
        self.holder != Pubkey::default()
    }

    pub fn recipient_count(&self) -> u8 {
        // Bounded by MAX_RECIPIENTS (128)
        self.recipients.len() as u8
    }

    /// Allowance credited to `beneficiary`, or None if it was never registered
    pub fn allowance_of(&self, beneficiary: &Pubkey) -> Option<u64> {
        self.recipients
            .iter()
            .find(|r| r.address == *beneficiary)
            .map(|r| r.amount)
    }

    /// Sum of every allowance plus the remainder owed to the holder
    pub fn total_owed(&self) -> Option<u64> {
        self.recipients
            .iter()
            .try_fold(self.remainder_owed, |acc, r| acc.checked_add(r.amount))
    }

    pub fn register(&mut self, recipient: Pubkey) -> std::result::Result<(), ErrorCode> {
        if recipient == Pubkey::default() {
            return Err(ErrorCode::InvalidRecipient);
        }
        if self.allowance_of(&recipient).is_some() {
            return Err(ErrorCode::DuplicateRecipient);
        }
        if self.recipients.len() >= MAX_RECIPIENTS {
            return Err(ErrorCode::RecipientLimitExceeded);
        }

        self.recipients.push(RecipientShare {
            address: recipient,
            amount: 0,
        });
        Ok(())
    }

    /// Divides `deposit` evenly across all recipients and credits the remainder to the holder.
    /// Leaves the list untouched on error.
    pub fn apply_split(&mut self, deposit: u64) -> std::result::Result<SplitOutcome, ErrorCode> {
        let count = self.recipients.len();
        if count == 0 {
            return Err(ErrorCode::NoRecipients);
        }
        if deposit < count as u64 {
            return Err(ErrorCode::InsufficientDeposit);
        }

        let (share, remainder) =
            calculate_split(deposit, count).ok_or(ErrorCode::MathOverflow)?;

        // Compute every new value before writing any of them
        let amounts = self
            .recipients
            .iter()
            .map(|r| r.amount.checked_add(share).ok_or(ErrorCode::MathOverflow))
            .collect::<std::result::Result<Vec<u64>, ErrorCode>>()?;
        let remainder_owed = self
            .remainder_owed
            .checked_add(remainder)
            .ok_or(ErrorCode::MathOverflow)?;

        for (recipient, amount) in self.recipients.iter_mut().zip(amounts) {
            recipient.amount = amount;
        }
        self.remainder_owed = remainder_owed;

        Ok(SplitOutcome { share, remainder })
    }

    /// Reduces `beneficiary`'s allowance by `amount`, returning what is left
    pub fn debit_allowance(
        &mut self,
        beneficiary: &Pubkey,
        amount: u64,
    ) -> std::result::Result<u64, ErrorCode> {
        if amount == 0 {
            return Err(ErrorCode::ZeroAmount);
        }

        let entry = self
            .recipients
            .iter_mut()
            .find(|r| r.address == *beneficiary)
            .ok_or(ErrorCode::InsufficientAllowance)?;

        entry.amount = entry
            .amount
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientAllowance)?;
        Ok(entry.amount)
    }

    /// Reduces the remainder owed to the holder by `amount`, returning what is left
    pub fn debit_remainder(&mut self, amount: u64) -> std::result::Result<u64, ErrorCode> {
        if amount == 0 {
            return Err(ErrorCode::ZeroAmount);
        }

        self.remainder_owed = self
            .remainder_owed
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientAllowance)?;
        Ok(self.remainder_owed)
    }
}

// Compile-time size assertion to catch accidental struct changes
// Ledger: see constants.rs = 88 (80 + 8 byte discriminator added by Anchor)
const _: () = assert!(std::mem::size_of::<Ledger>() == 80);
