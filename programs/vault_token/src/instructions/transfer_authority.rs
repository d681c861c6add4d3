use anchor_lang::prelude::*;
use ledger_core::AuthorityTransferred;

use crate::state::ValueToken;

#[derive(Accounts)]
pub struct TransferTokenAuthority<'info> {
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [ValueToken::SEED],
        bump = token.bump,
    )]
    pub token: Account<'info, ValueToken>,
}

pub fn handler(ctx: Context<TransferTokenAuthority>, new_holder: Pubkey) -> Result<()> {
    let token = &mut ctx.accounts.token;
    let previous = token
        .authority
        .transfer(&ctx.accounts.holder.key(), new_holder)?;

    emit!(AuthorityTransferred {
        ledger: token.key(),
        previous,
        new_holder,
    });

    msg!("Value token authority moved from {} to {}", previous, new_holder);

    Ok(())
}
