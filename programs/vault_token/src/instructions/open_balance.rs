use anchor_lang::prelude::*;

use crate::state::TokenBalance;

#[derive(Accounts)]
pub struct OpenBalance<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = TokenBalance::SIZE,
        seeds = [TokenBalance::SEED, owner.key().as_ref()],
        bump,
    )]
    pub balance: Account<'info, TokenBalance>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<OpenBalance>) -> Result<()> {
    let balance = &mut ctx.accounts.balance;
    balance.owner = ctx.accounts.owner.key();
    balance.amount = 0;
    balance.bump = ctx.bumps.balance;

    msg!("Opened value token balance for {}", balance.owner);

    Ok(())
}
