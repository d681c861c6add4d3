use anchor_lang::prelude::*;
use rewards::program::Rewards;
use rewards::RewardManager;

use crate::errors::RegistryError;
use crate::events::ModelPublished;
use crate::state::{Model, ModelRegistry};

// =============================================================================
// PUBLISH INSTRUCTION
// =============================================================================
//
// Registers a model and rewards the uploader with one fragment from the
// registry's default template. The registry PDA signs the reward CPI as the
// reward manager's authority holder; if that call fails for any reason the
// whole transaction aborts and no model is registered.
//
// Reward accounts after the manager are passed through unchecked: the
// rewards and fragments programs derive and validate their own PDAs.
// =============================================================================

#[derive(Accounts)]
pub struct Publish<'info> {
    /// Becomes the model's uploader and receives the fragment
    #[account(mut)]
    pub uploader: Signer<'info>,

    #[account(
        mut,
        seeds = [ModelRegistry::SEED],
        bump = registry.bump,
        has_one = reward_manager @ RegistryError::RewardManagerMismatch,
    )]
    pub registry: Account<'info, ModelRegistry>,

    #[account(
        init,
        payer = uploader,
        space = Model::SIZE,
        seeds = [Model::SEED, &registry.next_model_id().to_le_bytes()],
        bump,
    )]
    pub model: Account<'info, Model>,

    pub reward_manager: Account<'info, RewardManager>,

    /// CHECK: the default template PDA, validated by the rewards program
    #[account(mut)]
    pub reward_template: UncheckedAccount<'info>,

    /// CHECK: validated by the rewards program against the manager
    #[account(mut)]
    pub fragment_ledger: UncheckedAccount<'info>,

    /// CHECK: uploader's fragment balance PDA, created by the fragments program
    #[account(mut)]
    pub recipient_balance: UncheckedAccount<'info>,

    /// CHECK: checked as the fragments program by the rewards program
    pub fragments_program: UncheckedAccount<'info>,

    pub rewards_program: Program<'info, Rewards>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Publish>, content_ref: String, price: u64) -> Result<u64> {
    let uploader = ctx.accounts.uploader.key();
    let model_id = ctx.accounts.registry.next_model_id();
    let template_id = ctx.accounts.registry.default_template_id;
    let now = Clock::get()?.unix_timestamp;

    let model = Model::publish(
        model_id,
        uploader,
        content_ref,
        price,
        now,
        ctx.bumps.model,
    )?;

    let bump = [ctx.accounts.registry.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[ModelRegistry::SEED, &bump]];

    let cpi_accounts = rewards::cpi::accounts::RewardFragment {
        authority: ctx.accounts.registry.to_account_info(),
        payer: ctx.accounts.uploader.to_account_info(),
        manager: ctx.accounts.reward_manager.to_account_info(),
        template: ctx.accounts.reward_template.to_account_info(),
        fragment_ledger: ctx.accounts.fragment_ledger.to_account_info(),
        recipient_balance: ctx.accounts.recipient_balance.to_account_info(),
        fragments_program: ctx.accounts.fragments_program.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
    };
    rewards::cpi::reward_fragment(
        CpiContext::new_with_signer(
            ctx.accounts.rewards_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        template_id,
        uploader,
    )?;

    ctx.accounts.registry.record_publish()?;

    emit!(ModelPublished {
        model_id,
        uploader,
        content_ref: model.content_ref.clone(),
        price,
    });

    msg!(
        "Published model {} by {} at price {} (rewarded from template {})",
        model_id,
        uploader,
        price,
        template_id
    );

    ctx.accounts.model.set_inner(model);

    Ok(model_id)
}
