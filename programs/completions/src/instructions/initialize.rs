use anchor_lang::prelude::*;
use ledger_core::AuthoritySlot;

use crate::state::CompletionLedger;

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = CompletionLedger::SIZE,
        seeds = [CompletionLedger::SEED],
        bump,
    )]
    pub ledger: Account<'info, CompletionLedger>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeLedger>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.authority = AuthoritySlot::new(ctx.accounts.payer.key());
    ledger.next_token_id = 0;
    ledger.bump = ctx.bumps.ledger;

    msg!("Initialized completion ledger (authority: {})", ledger.authority.holder);

    Ok(())
}
