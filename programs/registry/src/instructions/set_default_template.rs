use anchor_lang::prelude::*;
use ledger_core::AuthorityError;

use crate::events::DefaultTemplateChanged;
use crate::state::ModelRegistry;

#[derive(Accounts)]
pub struct SetDefaultTemplate<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [ModelRegistry::SEED],
        bump = registry.bump,
        constraint = registry.authority.is_held_by(&authority.key()) @ AuthorityError::Unauthorized,
    )]
    pub registry: Account<'info, ModelRegistry>,
}

pub fn handler(ctx: Context<SetDefaultTemplate>, template_id: u64) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let previous = registry.default_template_id;
    registry.default_template_id = template_id;

    emit!(DefaultTemplateChanged {
        previous,
        template_id,
    });

    msg!("Default reward template changed from {} to {}", previous, template_id);

    Ok(())
}
