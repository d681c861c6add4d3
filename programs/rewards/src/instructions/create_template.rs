use anchor_lang::prelude::*;

use crate::events::TemplateCreated;
use crate::state::{RewardManager, RewardTemplate};

// =============================================================================
// CREATE TEMPLATE INSTRUCTION
// =============================================================================
//
// Open to any signer: templates only define what can be issued, issuance
// itself stays behind the manager's authority slot.
// =============================================================================

#[derive(Accounts)]
#[instruction(final_ref: String, fragment_refs: Vec<String>)]
pub struct CreateTemplate<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [RewardManager::SEED],
        bump = manager.bump,
    )]
    pub manager: Account<'info, RewardManager>,

    #[account(
        init,
        payer = creator,
        space = RewardTemplate::space(&final_ref, &fragment_refs),
        seeds = [RewardTemplate::SEED, &manager.template_count.to_le_bytes()],
        bump,
    )]
    pub template: Account<'info, RewardTemplate>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateTemplate>,
    final_ref: String,
    fragment_refs: Vec<String>,
) -> Result<u64> {
    RewardTemplate::validate(&final_ref, &fragment_refs)?;

    let manager = &mut ctx.accounts.manager;
    let template = &mut ctx.accounts.template;

    let template_id = manager.next_template_id()?;
    template.template_id = template_id;
    template.creator = ctx.accounts.creator.key();
    template.final_ref = final_ref;
    template.fragment_count = fragment_refs.len() as u16;
    template.fragment_refs = fragment_refs;
    template.issued_count = 0;
    template.redeemed_count = 0;
    template.created_at = Clock::get()?.unix_timestamp;
    template.bump = ctx.bumps.template;

    emit!(TemplateCreated {
        template_id,
        creator: template.creator,
        final_ref: template.final_ref.clone(),
        fragment_count: template.fragment_count,
    });

    msg!(
        "Created reward template {} with {} fragments (final: {})",
        template_id,
        template.fragment_count,
        template.final_ref
    );

    Ok(template_id)
}
