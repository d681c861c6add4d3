use anchor_lang::prelude::*;

use crate::state::FragmentLedger;

#[derive(Accounts)]
pub struct FragmentUri<'info> {
    #[account(seeds = [FragmentLedger::SEED], bump = ledger.bump)]
    pub ledger: Account<'info, FragmentLedger>,
}

pub fn handler(ctx: Context<FragmentUri>, token_id: u64) -> Result<String> {
    Ok(ctx.accounts.ledger.uri(token_id))
}
