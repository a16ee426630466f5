use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{LEDGER_SEED, LEDGER_SIZE},
    events::LedgerInitialized,
    state::Ledger,
};

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = payer,
        space = LEDGER_SIZE,
        seeds = [LEDGER_SEED, mint.key().as_ref()],
        bump
    )]
    pub ledger: AccountLoader<'info, Ledger>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = ledger,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Account paying rent for ledger and vault
    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Creates the ledger for a mint together with its custody vault
pub fn handler(ctx: Context<InitializeLedger>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger.load_init()?;

    ledger.mint = ctx.accounts.mint.key();
    ledger.vault = ctx.accounts.vault.key();
    ledger.balance = 0;
    ledger.bump = ctx.bumps.ledger;

    emit!(LedgerInitialized {
        ledger: ctx.accounts.ledger.key(),
        mint: ctx.accounts.mint.key(),
        vault: ctx.accounts.vault.key(),
        payer: ctx.accounts.payer.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
