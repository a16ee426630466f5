use anchor_lang::prelude::*;
use anchor_spl::{
    token_2022::spl_token_2022::state::AccountState,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::errors::ErrorCode;

/// Even split of `deposit` across `recipient_count` recipients
/// Returns (share, remainder), or None when there are no recipients
pub fn calculate_split(deposit: u64, recipient_count: usize) -> Option<(u64, u64)> {
    let count = u64::try_from(recipient_count).ok()?;
    let share = deposit.checked_div(count)?;
    let remainder = deposit.checked_sub(share.checked_mul(count)?)?;
    Some((share, remainder))
}

/// Check if token account is frozen
pub fn is_account_frozen(account: &InterfaceAccount<TokenAccount>) -> bool {
    account.state == AccountState::Frozen
}

/// Moves a holder's deposit into the ledger vault
pub fn deposit_into_vault<'info>(
    source: &InterfaceAccount<'info, TokenAccount>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    holder: &Signer<'info>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: source.to_account_info(),
        mint: mint.to_account_info(),
        to: vault.to_account_info(),
        authority: holder.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(token_program.to_account_info(), cpi_accounts);
    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)
}

/// Transfers `amount` out of custody, signed by the ledger PDA
///
/// Caller must have committed the matching allowance and balance debits first.
/// Conditions under which the token program would reject the transfer are
/// checked up front so they surface as TransferFailed.
pub fn release_from_vault<'info>(
    vault: &InterfaceAccount<'info, TokenAccount>,
    destination: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    ledger_info: &AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    require!(vault.amount >= amount, ErrorCode::TransferFailed);
    require!(!is_account_frozen(vault), ErrorCode::TransferFailed);
    require!(!is_account_frozen(destination), ErrorCode::TransferFailed);

    let cpi_accounts = TransferChecked {
        from: vault.to_account_info(),
        mint: mint.to_account_info(),
        to: destination.to_account_info(),
        authority: ledger_info.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)
}
