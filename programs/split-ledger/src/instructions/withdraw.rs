use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{LEDGER_SEED, RECIPIENTS_SEED},
    errors::ErrorCode,
    events::Withdrawal,
    state::{Ledger, RecipientList},
    utils::release_from_vault,
};

#[derive(Accounts)]
#[instruction(grantor: Pubkey)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.load()?.mint.as_ref()],
        bump = ledger.load()?.bump
    )]
    pub ledger: AccountLoader<'info, Ledger>,

    #[account(
        mut,
        constraint = vault.key() == ledger.load()?.vault @ ErrorCode::InvalidVault
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        constraint = mint.key() == ledger.load()?.mint @ ErrorCode::InvalidMint
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Grantor's recipient list holding the beneficiary's allowance
    #[account(
        mut,
        seeds = [RECIPIENTS_SEED, ledger.key().as_ref(), grantor.as_ref()],
        bump = recipient_list.bump
    )]
    pub recipient_list: Account<'info, RecipientList>,

    pub beneficiary: Signer<'info>,

    #[account(
        mut,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ ErrorCode::InvalidTokenAccount,
        constraint = beneficiary_token_account.mint == mint.key() @ ErrorCode::InvalidTokenAccount
    )]
    pub beneficiary_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Withdraws `amount` of the allowance `grantor` has credited to the caller
pub fn handler(ctx: Context<Withdraw>, grantor: Pubkey, amount: u64) -> Result<()> {
    let beneficiary = ctx.accounts.beneficiary.key();

    // Phase 1: debit allowance and custody before any value leaves the vault
    ctx.accounts
        .recipient_list
        .debit_allowance(&beneficiary, amount)?;

    let (mint_key, bump) = {
        let mut ledger = ctx.accounts.ledger.load_mut()?;
        ledger.debit(amount)?;
        (ledger.mint, ledger.bump)
    }; // ← Borrow DROPPED here

    // Persist the debit before handing control to the token program
    ctx.accounts.recipient_list.exit(&crate::ID)?;

    // Phase 2: transfer out of custody
    let seeds = &[LEDGER_SEED, mint_key.as_ref(), &[bump]];
    let signer_seeds = &[&seeds[..]];

    release_from_vault(
        &ctx.accounts.vault,
        &ctx.accounts.beneficiary_token_account,
        &ctx.accounts.mint,
        &ctx.accounts.ledger.to_account_info(),
        &ctx.accounts.token_program,
        signer_seeds,
        amount,
    )?;

    emit!(Withdrawal {
        ledger: ctx.accounts.ledger.key(),
        grantor,
        beneficiary,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
