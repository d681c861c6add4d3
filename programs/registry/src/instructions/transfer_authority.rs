use anchor_lang::prelude::*;
use ledger_core::AuthorityTransferred;

use crate::state::ModelRegistry;

#[derive(Accounts)]
pub struct TransferRegistryAuthority<'info> {
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [ModelRegistry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, ModelRegistry>,
}

pub fn handler(ctx: Context<TransferRegistryAuthority>, new_holder: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let previous = registry
        .authority
        .transfer(&ctx.accounts.holder.key(), new_holder)?;

    emit!(AuthorityTransferred {
        ledger: registry.key(),
        previous,
        new_holder,
    });

    msg!("Registry authority moved from {} to {}", previous, new_holder);

    Ok(())
}
