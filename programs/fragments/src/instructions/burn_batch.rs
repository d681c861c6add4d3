use anchor_lang::prelude::*;
use ledger_core::AuthorityError;

use crate::events::FragmentsBurned;
use crate::state::{burn_holdings, FragmentLedger};

#[derive(Accounts)]
pub struct BurnFragmentBatch<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [FragmentLedger::SEED],
        bump = ledger.bump,
        constraint = ledger.authority.is_held_by(&authority.key()) @ AuthorityError::Unauthorized,
    )]
    pub ledger: Account<'info, FragmentLedger>,
    // remaining accounts: one writable balance account per token id, same order
}

pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, BurnFragmentBatch<'info>>,
    holder: Pubkey,
    token_ids: Vec<u64>,
    amounts: Vec<u64>,
) -> Result<()> {
    let burned = burn_holdings(ctx.remaining_accounts, &holder, &token_ids, &amounts)?;

    ctx.accounts.ledger.record_burn(burned)?;

    msg!(
        "Burned {} fragment units across {} classes from {} ({} in circulation)",
        burned,
        token_ids.len(),
        holder,
        ctx.accounts.ledger.circulating()
    );

    emit!(FragmentsBurned {
        holder,
        token_ids,
        amounts,
    });

    Ok(())
}
