use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

pub use state::*;

declare_id!("7f7tGRbzAUzFmZ92SniCZueFuFs76WZ8Es3NqzZxw8bW");

#[program]
pub mod rewards {
    use super::*;

    // === Setup ===

    /// Create the manager and link it to its two ledgers
    pub fn initialize(
        ctx: Context<InitializeManager>,
        fragment_ledger: Pubkey,
        completion_ledger: Pubkey,
        value_token: Pubkey,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, fragment_ledger, completion_ledger, value_token)
    }

    /// Hand the reward slot to a new holder (once); normally the model registry
    pub fn transfer_authority(
        ctx: Context<TransferManagerAuthority>,
        new_holder: Pubkey,
    ) -> Result<()> {
        instructions::transfer_authority::handler(ctx, new_holder)
    }

    // === Templates ===

    /// Register a fragment set and its completion reference
    pub fn create_template(
        ctx: Context<CreateTemplate>,
        final_ref: String,
        fragment_refs: Vec<String>,
    ) -> Result<u64> {
        instructions::create_template::handler(ctx, final_ref, fragment_refs)
    }

    // === Issuance & Redemption ===

    /// Issue the template's next fragment slot to `recipient` (authority only)
    pub fn reward_fragment(
        ctx: Context<RewardFragment>,
        template_id: u64,
        recipient: Pubkey,
    ) -> Result<()> {
        instructions::reward_fragment::handler(ctx, template_id, recipient)
    }

    /// Burn a full fragment set and mint one completion token to the signer.
    /// Fragment balance accounts are passed as remaining accounts, in id order.
    pub fn redeem<'info>(
        ctx: Context<'_, '_, '_, 'info, Redeem<'info>>,
        template_id: u64,
        fragment_token_ids: Vec<u64>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::redeem::handler(ctx, template_id, fragment_token_ids, amounts)
    }
}
