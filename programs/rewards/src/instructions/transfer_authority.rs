use anchor_lang::prelude::*;
use ledger_core::AuthorityTransferred;

use crate::state::RewardManager;

#[derive(Accounts)]
pub struct TransferManagerAuthority<'info> {
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [RewardManager::SEED],
        bump = manager.bump,
    )]
    pub manager: Account<'info, RewardManager>,
}

pub fn handler(ctx: Context<TransferManagerAuthority>, new_holder: Pubkey) -> Result<()> {
    let manager = &mut ctx.accounts.manager;
    let previous = manager
        .authority
        .transfer(&ctx.accounts.holder.key(), new_holder)?;

    emit!(AuthorityTransferred {
        ledger: manager.key(),
        previous,
        new_holder,
    });

    msg!("Reward manager authority moved from {} to {}", previous, new_holder);

    Ok(())
}
