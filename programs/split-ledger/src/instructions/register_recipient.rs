use anchor_lang::prelude::*;

use crate::{
    constants::{LEDGER_SEED, RECIPIENTS_SEED, RECIPIENT_LIST_SIZE},
    events::RecipientRegistered,
    state::{Ledger, RecipientList},
};

#[derive(Accounts)]
pub struct RegisterRecipient<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.load()?.mint.as_ref()],
        bump = ledger.load()?.bump
    )]
    pub ledger: AccountLoader<'info, Ledger>,

    /// Created empty on the holder's first registration
    #[account(
        init_if_needed,
        payer = holder,
        space = RECIPIENT_LIST_SIZE,
        seeds = [RECIPIENTS_SEED, ledger.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub recipient_list: Account<'info, RecipientList>,

    #[account(mut)]
    pub holder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Appends a recipient to the holder's list
pub fn handler(ctx: Context<RegisterRecipient>, new_recipient: Pubkey) -> Result<()> {
    let ledger_key = ctx.accounts.ledger.key();
    let holder_key = ctx.accounts.holder.key();
    let recipient_list = &mut ctx.accounts.recipient_list;

    if !recipient_list.is_initialized() {
        recipient_list.ledger = ledger_key;
        recipient_list.holder = holder_key;
        recipient_list.bump = ctx.bumps.recipient_list;
    }

    recipient_list.register(new_recipient)?;

    #[cfg(feature = "verbose")]
    msg!(
        "Holder {} registered recipient {} ({} total)",
        holder_key,
        new_recipient,
        recipient_list.recipient_count()
    );

    emit!(RecipientRegistered {
        ledger: ledger_key,
        holder: holder_key,
        recipient: new_recipient,
        recipient_count: recipient_list.recipient_count(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
