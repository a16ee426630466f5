use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{LEDGER_SEED, RECIPIENTS_SEED},
    errors::ErrorCode,
    events::DepositSplit,
    state::{Ledger, RecipientList},
    utils::deposit_into_vault,
};

#[derive(Accounts)]
pub struct SplitDeposit<'info> {
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

/// Deposits `deposit_amount` and divides it evenly across the holder's recipients
pub fn handler(ctx: Context<SplitDeposit>, deposit_amount: u64) -> Result<()> {
    // Phase 1: book the deposit (validates recipient count and minimum deposit)
    let outcome = ctx.accounts.recipient_list.apply_split(deposit_amount)?;
    let recipient_count = ctx.accounts.recipient_list.recipient_count();

    {
        let mut ledger = ctx.accounts.ledger.load_mut()?;
        ledger.credit(deposit_amount)?;
    } // ← Borrow DROPPED here

    // Phase 2: pull the deposit into custody
    deposit_into_vault(
        &ctx.accounts.holder_token_account,
        &ctx.accounts.vault,
        &ctx.accounts.mint,
        &ctx.accounts.holder,
        &ctx.accounts.token_program,
        deposit_amount,
    )?;

    #[cfg(feature = "verbose")]
    msg!(
        "Split {} across {} recipients: share {}, remainder {}",
        deposit_amount,
        recipient_count,
        outcome.share,
        outcome.remainder
    );

    emit!(DepositSplit {
        ledger: ctx.accounts.ledger.key(),
        holder: ctx.accounts.holder.key(),
        deposit: deposit_amount,
        share: outcome.share,
        remainder: outcome.remainder,
        recipient_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
