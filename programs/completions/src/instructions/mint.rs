use anchor_lang::prelude::*;
use ledger_core::AuthorityError;

use crate::errors::CompletionError;
use crate::events::CompletionMinted;
use crate::state::{CompletionLedger, CompletionToken, MAX_URI_LEN};

#[derive(Accounts)]
pub struct MintCompletion<'info> {
    /// The minter (reward manager PDA once bootstrapped)
    pub authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [CompletionLedger::SEED],
        bump = ledger.bump,
        constraint = ledger.authority.is_held_by(&authority.key()) @ AuthorityError::Unauthorized,
    )]
    pub ledger: Account<'info, CompletionLedger>,

    #[account(
        init,
        payer = payer,
        space = CompletionToken::SIZE,
        seeds = [CompletionToken::SEED, &ledger.next_token_id.to_le_bytes()],
        bump,
    )]
    pub token: Account<'info, CompletionToken>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintCompletion>, recipient: Pubkey, uri: String) -> Result<u64> {
    require!(uri.len() <= MAX_URI_LEN, CompletionError::UriTooLong);

    let ledger = &mut ctx.accounts.ledger;
    let token = &mut ctx.accounts.token;

    let token_id = ledger.issue_id()?;
    token.token_id = token_id;
    token.owner = recipient;
    token.uri = uri;
    token.minted_at = Clock::get()?.unix_timestamp;
    token.bump = ctx.bumps.token;

    emit!(CompletionMinted {
        token_id,
        owner: recipient,
        uri: token.uri.clone(),
    });

    msg!("Minted completion token {} to {} ({})", token_id, recipient, token.uri);

    Ok(token_id)
}
