use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
mod utils;

use instructions::*;

declare_id!("6QUihf3RnbtTZ4HrXamkDDDJrtogediE7eTp9LKeGymy");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Cascade Split Ledger",
    project_url: "https://cascade-protocol.xyz",
    contacts: "email:hello@cascade-protocol.xyz,link:https://github.com/cascade-protocol/splits/security",
    policy: "https://github.com/cascade-protocol/splits/blob/main/SECURITY.md",
    source_code: "https://github.com/cascade-protocol/splits",
    source_release: "v0.1.0"
}

#[program]
pub mod split_ledger {
    use super::*;

    /// Creates the ledger and custody vault for a mint
    /// Permissionless - payer covers rent
    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger::handler(ctx)
    }

    /// Registers a recipient for the calling holder
    /// Creates the holder's recipient list on first use
    pub fn register_recipient(ctx: Context<RegisterRecipient>, new_recipient: Pubkey) -> Result<()> {
        instructions::register_recipient::handler(ctx, new_recipient)
    }

    /// Returns the total value held in custody
    pub fn get_balance(ctx: Context<GetBalance>) -> Result<u64> {
        instructions::get_balance::handler(ctx)
    }

    /// Deposits tokens and splits them evenly across the holder's recipients
    /// Remainder is credited back to the holder
    pub fn split(ctx: Context<SplitDeposit>, deposit_amount: u64) -> Result<()> {
        instructions::split::handler(ctx, deposit_amount)
    }

    /// Withdraws from the allowance `grantor` credited to the caller
    pub fn withdraw(ctx: Context<Withdraw>, grantor: Pubkey, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, grantor, amount)
    }

    /// Withdraws split remainders owed to the calling holder
    pub fn withdraw_remainder(ctx: Context<WithdrawRemainder>, amount: u64) -> Result<()> {
        instructions::withdraw_remainder::handler(ctx, amount)
    }
}
