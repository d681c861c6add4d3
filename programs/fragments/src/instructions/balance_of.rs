use anchor_lang::prelude::*;

use crate::state::FragmentBalance;

#[derive(Accounts)]
#[instruction(holder: Pubkey, token_id: u64)]
pub struct BalanceOf<'info> {
    /// CHECK: read through `FragmentBalance::load`
    #[account(
        seeds = [FragmentBalance::SEED, holder.as_ref(), &token_id.to_le_bytes()],
        bump,
    )]
    pub balance: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<BalanceOf>, holder: Pubkey, token_id: u64) -> Result<u64> {
    let amount = FragmentBalance::load(&ctx.accounts.balance, &holder, token_id)?
        .map(|b| b.amount)
        .unwrap_or(0);

    Ok(amount)
}
