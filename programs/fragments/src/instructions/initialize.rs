use anchor_lang::prelude::*;
use ledger_core::AuthoritySlot;

use crate::errors::FragmentError;
use crate::state::{FragmentLedger, MAX_BASE_URI_LEN};

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = FragmentLedger::SIZE,
        seeds = [FragmentLedger::SEED],
        bump,
    )]
    pub ledger: Account<'info, FragmentLedger>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeLedger>, base_uri: String) -> Result<()> {
    require!(base_uri.len() <= MAX_BASE_URI_LEN, FragmentError::UriTooLong);

    let ledger = &mut ctx.accounts.ledger;
    ledger.authority = AuthoritySlot::new(ctx.accounts.payer.key());
    ledger.base_uri = base_uri;
    ledger.total_minted = 0;
    ledger.total_burned = 0;
    ledger.bump = ctx.bumps.ledger;

    msg!(
        "Initialized fragment ledger (authority: {}, base uri: {})",
        ledger.authority.holder,
        ledger.base_uri
    );

    Ok(())
}
