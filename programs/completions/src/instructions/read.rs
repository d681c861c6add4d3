use anchor_lang::prelude::*;
use ledger_core::load_record;

use crate::errors::CompletionError;
use crate::state::CompletionToken;

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct ReadCompletion<'info> {
    /// CHECK: loaded by the handler so a missing token reads as NotFound
    #[account(
        seeds = [CompletionToken::SEED, &token_id.to_le_bytes()],
        bump,
    )]
    pub token: UncheckedAccount<'info>,
}

fn load(ctx: &Context<ReadCompletion>) -> Result<CompletionToken> {
    load_record::<CompletionToken>(&ctx.accounts.token)?
        .ok_or_else(|| error!(CompletionError::NotFound))
}

pub fn owner_of(ctx: Context<ReadCompletion>, _token_id: u64) -> Result<Pubkey> {
    Ok(load(&ctx)?.owner)
}

pub fn token_uri(ctx: Context<ReadCompletion>, _token_id: u64) -> Result<String> {
    Ok(load(&ctx)?.uri)
}
