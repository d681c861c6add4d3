use anchor_lang::prelude::*;
use ledger_core::AuthoritySlot;

use crate::state::RewardManager;

#[derive(Accounts)]
pub struct InitializeManager<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = RewardManager::SIZE,
        seeds = [RewardManager::SEED],
        bump,
    )]
    pub manager: Account<'info, RewardManager>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeManager>,
    fragment_ledger: Pubkey,
    completion_ledger: Pubkey,
    value_token: Pubkey,
) -> Result<()> {
    let manager = &mut ctx.accounts.manager;
    manager.authority = AuthoritySlot::new(ctx.accounts.payer.key());
    manager.fragment_ledger = fragment_ledger;
    manager.completion_ledger = completion_ledger;
    manager.value_token = value_token;
    manager.template_count = 0;
    manager.total_redemptions = 0;
    manager.bump = ctx.bumps.manager;

    msg!(
        "Initialized reward manager (fragments: {}, completions: {})",
        fragment_ledger,
        completion_ledger
    );

    Ok(())
}
