use anchor_lang::prelude::*;
use ledger_core::load_record;

use crate::state::TokenBalance;

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct BalanceOf<'info> {
    /// CHECK: an unopened balance reads as zero
    #[account(
        seeds = [TokenBalance::SEED, owner.as_ref()],
        bump,
    )]
    pub balance: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<BalanceOf>, _owner: Pubkey) -> Result<u64> {
    let amount = load_record::<TokenBalance>(&ctx.accounts.balance)?
        .map(|b| b.amount)
        .unwrap_or(0);

    Ok(amount)
}
