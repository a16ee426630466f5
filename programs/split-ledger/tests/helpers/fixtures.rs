//! Shared ledger setup for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! Every fixture uses a fresh mint, so ledger and list PDAs never collide across tests.

use {
    super::{
        accounts::{get_rent, mint_account, program_account, system_account, token_account, derive_ata},
        instructions::{
            build_split, build_withdraw, build_withdraw_remainder, derive_ledger,
            derive_recipient_list, derive_vault, PROGRAM_ID,
        },
        serialization::{
            serialize_ledger, serialize_recipient_list, RecipientShareData, LEDGER_SIZE,
            RECIPIENT_LIST_SIZE,
        },
    },
    mollusk_svm::{
        result::{Check, InstructionResult},
        Mollusk,
    },
    solana_sdk::{account::Account, instruction::Instruction, pubkey::Pubkey, rent::Rent},
};

pub const MINT_DECIMALS: u8 = 6;
pub const MINT_SUPPLY: u64 = 1_000_000_000_000;

/// One ledger, one holder and the holder's recipient list
pub struct LedgerFixture {
    pub rent: Rent,
    pub mint: Pubkey,
    pub ledger: Pubkey,
    pub ledger_bump: u8,
    pub vault: Pubkey,
    pub holder: Pubkey,
    pub holder_ata: Pubkey,
    pub recipient_list: Pubkey,
    pub list_bump: u8,
}

impl LedgerFixture {
    pub fn new(mollusk: &Mollusk) -> Self {
        let mint = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let (ledger, ledger_bump) = derive_ledger(&mint);
        let (recipient_list, list_bump) = derive_recipient_list(&ledger, &holder);

        Self {
            rent: get_rent(mollusk),
            mint,
            ledger,
            ledger_bump,
            vault: derive_vault(&ledger, &mint),
            holder,
            holder_ata: derive_ata(&holder, &mint),
            recipient_list,
            list_bump,
        }
    }

    pub fn ledger_account(&self, balance: u64) -> (Pubkey, Account) {
        (
            self.ledger,
            program_account(
                self.rent.minimum_balance(LEDGER_SIZE),
                serialize_ledger(self.mint, self.vault, balance, self.ledger_bump),
                PROGRAM_ID,
            ),
        )
    }

    pub fn vault_account(&self, amount: u64) -> (Pubkey, Account) {
        (self.vault, token_account(self.mint, self.ledger, amount, &self.rent))
    }

    pub fn mint_account(&self) -> (Pubkey, Account) {
        (
            self.mint,
            mint_account(Some(Pubkey::new_unique()), MINT_DECIMALS, MINT_SUPPLY, &self.rent),
        )
    }

    /// Recipient list owned by the program with the given shares and remainder
    pub fn recipient_list_account(
        &self,
        shares: &[RecipientShareData],
        remainder_owed: u64,
    ) -> (Pubkey, Account) {
        (
            self.recipient_list,
            program_account(
                self.rent.minimum_balance(RECIPIENT_LIST_SIZE),
                serialize_recipient_list(
                    self.ledger,
                    self.holder,
                    self.list_bump,
                    shares,
                    remainder_owed,
                ),
                PROGRAM_ID,
            ),
        )
    }

    pub fn holder_account(&self) -> (Pubkey, Account) {
        (self.holder, system_account(10_000_000_000))
    }

    pub fn holder_ata_account(&self, amount: u64) -> (Pubkey, Account) {
        (self.holder_ata, token_account(self.mint, self.holder, amount, &self.rent))
    }

    pub fn split_ix(&self, deposit_amount: u64) -> Instruction {
        build_split(
            self.ledger,
            self.vault,
            self.mint,
            self.recipient_list,
            self.holder,
            self.holder_ata,
            deposit_amount,
        )
    }

    /// Withdraw by `beneficiary` from this fixture's holder
    pub fn withdraw_ix(&self, beneficiary: Pubkey, beneficiary_ata: Pubkey, amount: u64) -> Instruction {
        build_withdraw(
            self.ledger,
            self.vault,
            self.mint,
            self.recipient_list,
            beneficiary,
            beneficiary_ata,
            self.holder,
            amount,
        )
    }

    pub fn withdraw_remainder_ix(&self, amount: u64) -> Instruction {
        build_withdraw_remainder(
            self.ledger,
            self.vault,
            self.mint,
            self.recipient_list,
            self.holder,
            self.holder_ata,
            amount,
        )
    }
}

/// Shares with the given addresses and amounts
pub fn shares(entries: &[(Pubkey, u64)]) -> Vec<RecipientShareData> {
    entries
        .iter()
        .map(|(address, amount)| RecipientShareData {
            address: *address,
            amount: *amount,
        })
        .collect()
}

/// Runs `instruction` against accumulated account state and writes the results back
///
/// Accounts are picked from `store` in instruction order, so a sequence of
/// instructions can be chained the way a real ledger would see them.
pub fn process_in_place(
    mollusk: &Mollusk,
    instruction: &Instruction,
    store: &mut [(Pubkey, Account)],
    checks: &[Check],
) -> InstructionResult {
    let accounts: Vec<(Pubkey, Account)> = instruction
        .accounts
        .iter()
        .map(|meta| {
            store
                .iter()
                .find(|(key, _)| *key == meta.pubkey)
                .cloned()
                .unwrap_or_else(|| panic!("account {} missing from store", meta.pubkey))
        })
        .collect();

    let result = mollusk.process_and_validate_instruction(instruction, &accounts, checks);

    for (key, account) in &result.resulting_accounts {
        if let Some(slot) = store.iter_mut().find(|(k, _)| k == key) {
            slot.1 = account.clone();
        }
    }

    result
}
