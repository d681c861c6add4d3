use anchor_lang::prelude::*;

use crate::events::TokensTransferred;
use crate::state::{move_balance, TokenBalance};

#[derive(Accounts)]
pub struct TransferTokens<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [TokenBalance::SEED, owner.key().as_ref()],
        bump = from.bump,
    )]
    pub from: Account<'info, TokenBalance>,

    /// Recipient balance; must have been opened
    #[account(
        mut,
        seeds = [TokenBalance::SEED, to.owner.as_ref()],
        bump = to.bump,
    )]
    pub to: Account<'info, TokenBalance>,
}

pub fn handler(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
    let from = &mut ctx.accounts.from;
    let to = &mut ctx.accounts.to;

    move_balance(from, to, amount)?;

    emit!(TokensTransferred {
        from: from.owner,
        to: to.owner,
        amount,
    });

    msg!("Transferred {} value tokens from {} to {}", amount, from.owner, to.owner);

    Ok(())
}
