use anchor_lang::prelude::*;
use ledger_core::{load_record, store_record};

use crate::errors::RegistryError;
use crate::events::ModelUpdated;
use crate::state::Model;

#[derive(Accounts)]
#[instruction(model_id: u64)]
pub struct UpdateModel<'info> {
    pub uploader: Signer<'info>,

    /// CHECK: loaded by the handler so a missing model reads as NotFound
    #[account(
        mut,
        seeds = [Model::SEED, &model_id.to_le_bytes()],
        bump,
    )]
    pub model: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<UpdateModel>, model_id: u64, new_content_ref: String) -> Result<()> {
    let model_info = ctx.accounts.model.to_account_info();
    let mut model = load_record::<Model>(&model_info)?
        .ok_or_else(|| error!(RegistryError::NotFound))?;

    let now = Clock::get()?.unix_timestamp;
    let new_version = model.apply_update(&ctx.accounts.uploader.key(), new_content_ref, now)?;

    store_record(&model_info, &model)?;

    emit!(ModelUpdated {
        model_id,
        new_version,
        new_content_ref: model.content_ref.clone(),
    });

    msg!("Model {} updated to version {}", model_id, new_version);

    Ok(())
}
