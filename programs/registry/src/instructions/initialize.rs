use anchor_lang::prelude::*;
use ledger_core::AuthoritySlot;

use crate::state::ModelRegistry;

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = ModelRegistry::SIZE,
        seeds = [ModelRegistry::SEED],
        bump,
    )]
    pub registry: Account<'info, ModelRegistry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeRegistry>,
    reward_manager: Pubkey,
    default_template_id: u64,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.authority = AuthoritySlot::new(ctx.accounts.payer.key());
    registry.reward_manager = reward_manager;
    registry.default_template_id = default_template_id;
    registry.model_count = 0;
    registry.total_sales = 0;
    registry.bump = ctx.bumps.registry;

    msg!(
        "Initialized model registry (reward manager: {}, default template: {})",
        reward_manager,
        default_template_id
    );

    Ok(())
}
