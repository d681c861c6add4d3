use anchor_lang::prelude::*;
use ledger_core::AuthoritySlot;

use crate::errors::TokenError;
use crate::state::{TokenBalance, ValueToken};

#[derive(Accounts)]
pub struct InitializeToken<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = ValueToken::SIZE,
        seeds = [ValueToken::SEED],
        bump,
    )]
    pub token: Account<'info, ValueToken>,

    #[account(
        init,
        payer = payer,
        space = TokenBalance::SIZE,
        seeds = [TokenBalance::SEED, payer.key().as_ref()],
        bump,
    )]
    pub payer_balance: Account<'info, TokenBalance>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeToken>, initial_supply: u64, decimals: u8) -> Result<()> {
    require!(initial_supply > 0, TokenError::ZeroAmount);

    let payer = ctx.accounts.payer.key();

    let token = &mut ctx.accounts.token;
    token.authority = AuthoritySlot::new(payer);
    token.total_supply = initial_supply;
    token.decimals = decimals;
    token.bump = ctx.bumps.token;

    let balance = &mut ctx.accounts.payer_balance;
    balance.owner = payer;
    balance.amount = initial_supply;
    balance.bump = ctx.bumps.payer_balance;

    msg!(
        "Initialized value token: supply {} ({} decimals) held by {}",
        initial_supply,
        decimals,
        payer
    );

    Ok(())
}
