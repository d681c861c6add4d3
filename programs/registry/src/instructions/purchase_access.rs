use anchor_lang::prelude::*;
use anchor_lang::system_program;
use ledger_core::load_record;

use crate::errors::RegistryError;
use crate::events::AccessPurchased;
use crate::state::{AccessGrant, Model, ModelRegistry};

// =============================================================================
// PURCHASE ACCESS INSTRUCTION
// =============================================================================
//
// Payment is in lamports and is forwarded in full to the uploader. The grant
// is written before the transfer so the only outgoing call happens after all
// state for this purchase is final.
// =============================================================================

#[derive(Accounts)]
#[instruction(model_id: u64)]
pub struct PurchaseAccess<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [ModelRegistry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, ModelRegistry>,

    /// CHECK: loaded by the handler so a missing model reads as NotFound
    #[account(
        seeds = [Model::SEED, &model_id.to_le_bytes()],
        bump,
    )]
    pub model: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = AccessGrant::SIZE,
        seeds = [AccessGrant::SEED, &model_id.to_le_bytes(), buyer.key().as_ref()],
        bump,
    )]
    pub grant: Account<'info, AccessGrant>,

    /// CHECK: must be the model's uploader, checked in the handler
    #[account(mut)]
    pub uploader: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PurchaseAccess>, model_id: u64, payment: u64) -> Result<()> {
    let model = load_record::<Model>(&ctx.accounts.model)?
        .ok_or_else(|| error!(RegistryError::NotFound))?;
    require_keys_eq!(
        ctx.accounts.uploader.key(),
        model.uploader,
        RegistryError::PayeeMismatch
    );

    let buyer = ctx.accounts.buyer.key();
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts
        .grant
        .purchase(&model, buyer, payment, now, ctx.bumps.grant)?;
    ctx.accounts.registry.record_sale()?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.uploader.to_account_info(),
            },
        ),
        payment,
    )?;

    emit!(AccessPurchased {
        model_id,
        buyer,
        payment,
    });

    msg!(
        "Access to model {} purchased by {} for {} lamports",
        model_id,
        buyer,
        payment
    );

    Ok(())
}
