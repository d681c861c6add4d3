use anchor_lang::prelude::*;
use ledger_core::AuthorityError;

use crate::events::FragmentsBurned;
use crate::state::{burn_holdings, FragmentBalance, FragmentLedger};

#[derive(Accounts)]
#[instruction(holder: Pubkey, token_id: u64)]
pub struct BurnFragment<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [FragmentLedger::SEED],
        bump = ledger.bump,
        constraint = ledger.authority.is_held_by(&authority.key()) @ AuthorityError::Unauthorized,
    )]
    pub ledger: Account<'info, FragmentLedger>,

    /// CHECK: read through `FragmentBalance::load`; a missing holding is a zero balance
    #[account(
        mut,
        seeds = [FragmentBalance::SEED, holder.as_ref(), &token_id.to_le_bytes()],
        bump,
    )]
    pub balance: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<BurnFragment>, holder: Pubkey, token_id: u64, amount: u64) -> Result<()> {
    let balances = [ctx.accounts.balance.to_account_info()];
    let burned = burn_holdings(&balances, &holder, &[token_id], &[amount])?;

    ctx.accounts.ledger.record_burn(burned)?;

    emit!(FragmentsBurned {
        holder,
        token_ids: vec![token_id],
        amounts: vec![amount],
    });

    msg!("Burned {} of fragment {} from {}", amount, token_id, holder);

    Ok(())
}
