use anchor_lang::prelude::*;
use ledger_core::AuthorityError;

use crate::errors::FragmentError;
use crate::events::FragmentsMinted;
use crate::state::{FragmentBalance, FragmentLedger};

#[derive(Accounts)]
#[instruction(recipient: Pubkey, token_id: u64)]
pub struct MintFragment<'info> {
    /// The minter (reward manager PDA once bootstrapped)
    pub authority: Signer<'info>,

    /// Pays rent for a first-time holding
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [FragmentLedger::SEED],
        bump = ledger.bump,
        constraint = ledger.authority.is_held_by(&authority.key()) @ AuthorityError::Unauthorized,
    )]
    pub ledger: Account<'info, FragmentLedger>,

    #[account(
        init_if_needed,
        payer = payer,
        space = FragmentBalance::SIZE,
        seeds = [FragmentBalance::SEED, recipient.as_ref(), &token_id.to_le_bytes()],
        bump,
    )]
    pub balance: Account<'info, FragmentBalance>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<MintFragment>,
    recipient: Pubkey,
    token_id: u64,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, FragmentError::ZeroAmount);

    let ledger = &mut ctx.accounts.ledger;
    let balance = &mut ctx.accounts.balance;

    // First holding of this class
    if balance.holder == Pubkey::default() {
        balance.holder = recipient;
        balance.token_id = token_id;
        balance.amount = 0;
        balance.bump = ctx.bumps.balance;
    }

    balance.credit(amount)?;
    ledger.record_mint(amount)?;

    emit!(FragmentsMinted {
        recipient,
        token_id,
        amount,
        balance: balance.amount,
    });

    msg!(
        "Minted {} of fragment {} to {} (balance: {})",
        amount,
        token_id,
        recipient,
        balance.amount
    );

    Ok(())
}
