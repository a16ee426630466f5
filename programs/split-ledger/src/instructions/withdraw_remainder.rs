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
pub struct WithdrawRemainder<'info> {
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

    #[account(
        mut,
        seeds = [RECIPIENTS_SEED, ledger.key().as_ref(), holder.key().as_ref()],
        bump = recipient_list.bump
    )]
    pub recipient_list: Account<'info, RecipientList>,

    pub holder: Signer<'info>,

    #[account(
        mut,
        constraint = holder_token_account.owner == holder.key() @ ErrorCode::InvalidTokenAccount,
        constraint = holder_token_account.mint == mint.key() @ ErrorCode::InvalidTokenAccount
    )]
    pub holder_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Withdraws split remainders credited back to the holder
pub fn handler(ctx: Context<WithdrawRemainder>, amount: u64) -> Result<()> {
    // Phase 1: debit remainder and custody before any value leaves the vault
    ctx.accounts.recipient_list.debit_remainder(amount)?;

    let (mint_key, bump) = {
        let mut ledger = ctx.accounts.ledger.load_mut()?;
        ledger.debit(amount)?;
        (ledger.mint, ledger.bump)
    }; // ← Borrow DROPPED here

    ctx.accounts.recipient_list.exit(&crate::ID)?;

    // Phase 2: transfer out of custody
    let seeds = &[LEDGER_SEED, mint_key.as_ref(), &[bump]];
    let signer_seeds = &[&seeds[..]];

    release_from_vault(
        &ctx.accounts.vault,
        &ctx.accounts.holder_token_account,
        &ctx.accounts.mint,
        &ctx.accounts.ledger.to_account_info(),
        &ctx.accounts.token_program,
        signer_seeds,
        amount,
    )?;

    // Remainders are owed by the ledger itself
    emit!(Withdrawal {
        ledger: ctx.accounts.ledger.key(),
        grantor: ctx.accounts.ledger.key(),
        beneficiary: ctx.accounts.holder.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
