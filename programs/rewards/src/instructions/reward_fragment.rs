use anchor_lang::prelude::*;
use fragments::program::Fragments;
use fragments::FragmentLedger;
use ledger_core::{load_record, store_record, AuthorityError};

use crate::errors::RewardError;
use crate::events::FragmentRewarded;
use crate::state::{RewardManager, RewardTemplate};

// =============================================================================
// REWARD FRAGMENT INSTRUCTION
// =============================================================================
//
// Privileged: only the manager's authority holder (the model registry PDA
// after bootstrap) may issue. The manager PDA in turn signs the mint on the
// fragment ledger, whose minter slot it holds.
// =============================================================================

#[derive(Accounts)]
#[instruction(template_id: u64, recipient: Pubkey)]
pub struct RewardFragment<'info> {
    pub authority: Signer<'info>,

    /// Pays rent for the recipient's first holding of the slot
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [RewardManager::SEED],
        bump = manager.bump,
        constraint = manager.authority.is_held_by(&authority.key()) @ AuthorityError::Unauthorized,
        has_one = fragment_ledger @ RewardError::LedgerMismatch,
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

    /// CHECK: PDA of the fragments program, validated and created there
    #[account(mut)]
    pub recipient_balance: UncheckedAccount<'info>,

    pub fragments_program: Program<'info, Fragments>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RewardFragment>, template_id: u64, recipient: Pubkey) -> Result<()> {
    let template_info = ctx.accounts.template.to_account_info();
    let mut template = load_record::<RewardTemplate>(&template_info)?
        .ok_or_else(|| error!(RewardError::NotFound))?;

    let slot_index = template.next_slot();
    let token_id = template.next_token_id()?;
    template.record_issue()?;

    let bump = [ctx.accounts.manager.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[RewardManager::SEED, &bump]];

    let cpi_accounts = fragments::cpi::accounts::MintFragment {
        authority: ctx.accounts.manager.to_account_info(),
        payer: ctx.accounts.payer.to_account_info(),
        ledger: ctx.accounts.fragment_ledger.to_account_info(),
        balance: ctx.accounts.recipient_balance.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
    };
    fragments::cpi::mint(
        CpiContext::new_with_signer(
            ctx.accounts.fragments_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        recipient,
        token_id,
        1,
    )?;

    store_record(&template_info, &template)?;

    emit!(FragmentRewarded {
        template_id,
        slot_index,
        token_id,
        recipient,
    });

    msg!(
        "Rewarded fragment slot {} of template {} (token {}) to {}",
        slot_index,
        template_id,
        token_id,
        recipient
    );

    Ok(())
}
