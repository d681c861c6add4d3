use anchor_lang::prelude::*;
use ledger_core::load_record;

use crate::errors::RegistryError;
use crate::state::{AccessGrant, Model, ModelView};

#[derive(Accounts)]
#[instruction(model_id: u64, identity: Pubkey)]
pub struct CheckAccess<'info> {
    /// CHECK: a missing grant reads as no access
    #[account(
        seeds = [AccessGrant::SEED, &model_id.to_le_bytes(), identity.as_ref()],
        bump,
    )]
    pub grant: UncheckedAccount<'info>,
}

pub fn check_access(ctx: Context<CheckAccess>, _model_id: u64, _identity: Pubkey) -> Result<bool> {
    let granted = load_record::<AccessGrant>(&ctx.accounts.grant)?
        .map(|g| g.granted)
        .unwrap_or(false);

    Ok(granted)
}

#[derive(Accounts)]
#[instruction(model_id: u64)]
pub struct ReadModel<'info> {
    /// CHECK: loaded by the handler so a missing model reads as NotFound
    #[account(
        seeds = [Model::SEED, &model_id.to_le_bytes()],
        bump,
    )]
    pub model: UncheckedAccount<'info>,
}

fn load(ctx: &Context<ReadModel>) -> Result<Model> {
    load_record::<Model>(&ctx.accounts.model)?
        .ok_or_else(|| error!(RegistryError::NotFound))
}

pub fn get_model(ctx: Context<ReadModel>, _model_id: u64) -> Result<ModelView> {
    Ok(load(&ctx)?.view())
}

pub fn get_version_history(ctx: Context<ReadModel>, _model_id: u64) -> Result<Vec<u32>> {
    Ok(load(&ctx)?.version_history)
}
