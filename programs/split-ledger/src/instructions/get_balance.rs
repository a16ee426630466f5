use anchor_lang::prelude::*;

use crate::{constants::LEDGER_SEED, state::Ledger};

#[derive(Accounts)]
pub struct GetBalance<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.load()?.mint.as_ref()],
        bump = ledger.load()?.bump
    )]
    pub ledger: AccountLoader<'info, Ledger>,
}

/// Returns the total value in custody
pub fn handler(ctx: Context<GetBalance>) -> Result<u64> {
    Ok(ctx.accounts.ledger.load()?.balance)
}
