use anchor_lang::prelude::*;
use completions::program::Completions;
use completions::CompletionLedger;
use fragments::program::Fragments;
use fragments::FragmentLedger;
use ledger_core::{load_record, store_record};

use crate::errors::RewardError;
use crate::events::Redeemed;
use crate::state::{check_holdings, RewardManager, RewardTemplate};

// =============================================================================
// REDEEM INSTRUCTION
// =============================================================================
//
// Burn one unit of every slot of a template, then mint one completion token.
//
// The full set and every balance are checked before the first burn. Both
// ledger calls run inside this transaction, so a failed mint also discards
// the burns.
// =============================================================================

#[derive(Accounts)]
#[instruction(template_id: u64)]
pub struct Redeem<'info> {
    #[account(mut)]
    pub redeemer: Signer<'info>,

    #[account(
        mut,
        seeds = [RewardManager::SEED],
        bump = manager.bump,
        has_one = fragment_ledger @ RewardError::LedgerMismatch,
        has_one = completion_ledger @ RewardError::LedgerMismatch,
    )]
    pub manager: Account<'info, RewardManager>,

    /// CHECK: loaded by the handler so a missing template reads as NotFound
    #[account(
        mut,
        seeds = [RewardTemplate::SEED, &template_id.to_le_bytes()],
        bump,
    )]
    pub template: UncheckedAccount<'info>,

    #[account(mut)]
    pub fragment_ledger: Account<'info, FragmentLedger>,

    #[account(mut)]
    pub completion_ledger: Account<'info, CompletionLedger>,

    /// CHECK: PDA of the completions program, created there
    #[account(mut)]
    pub completion_token: UncheckedAccount<'info>,

    pub fragments_program: Program<'info, Fragments>,
    pub completions_program: Program<'info, Completions>,
    pub system_program: Program<'info, System>,
    // remaining accounts: the redeemer's fragment balance accounts, in id order
}

pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, Redeem<'info>>,
    template_id: u64,
    fragment_token_ids: Vec<u64>,
    amounts: Vec<u64>,
) -> Result<()> {
    let redeemer = ctx.accounts.redeemer.key();

    // === Validate everything before touching either ledger ===

    let template_info = ctx.accounts.template.to_account_info();
    let mut template = load_record::<RewardTemplate>(&template_info)?
        .ok_or_else(|| error!(RewardError::NotFound))?;

    template.check_redemption(&fragment_token_ids, &amounts)?;
    check_holdings(ctx.remaining_accounts, &redeemer, &fragment_token_ids, &amounts)?;

    let final_ref = template.final_ref.clone();

    let bump = [ctx.accounts.manager.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[RewardManager::SEED, &bump]];

    // === Burn the full set ===

    let burn_accounts = fragments::cpi::accounts::BurnFragmentBatch {
        authority: ctx.accounts.manager.to_account_info(),
        ledger: ctx.accounts.fragment_ledger.to_account_info(),
    };
    fragments::cpi::burn_batch(
        CpiContext::new_with_signer(
            ctx.accounts.fragments_program.to_account_info(),
            burn_accounts,
            signer_seeds,
        )
        .with_remaining_accounts(ctx.remaining_accounts.to_vec()),
        redeemer,
        fragment_token_ids.clone(),
        amounts.clone(),
    )?;

    // === Mint the completion token ===

    let mint_accounts = completions::cpi::accounts::MintCompletion {
        authority: ctx.accounts.manager.to_account_info(),
        payer: ctx.accounts.redeemer.to_account_info(),
        ledger: ctx.accounts.completion_ledger.to_account_info(),
        token: ctx.accounts.completion_token.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
    };
    let completion_token_id = completions::cpi::mint(
        CpiContext::new_with_signer(
            ctx.accounts.completions_program.to_account_info(),
            mint_accounts,
            signer_seeds,
        ),
        redeemer,
        final_ref,
    )?
    .get();

    // === Commit local state ===

    template.record_redemption()?;
    store_record(&template_info, &template)?;
    ctx.accounts.manager.record_redemption()?;

    emit!(Redeemed {
        template_id,
        redeemer,
        completion_token_id,
    });

    msg!(
        "{} redeemed template {} ({} fragments) for completion token {}",
        redeemer,
        template_id,
        fragment_token_ids.len(),
        completion_token_id
    );

    Ok(())
}
