use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

pub use state::*;

declare_id!("6YiN24KhJUodgxDpFDkhcnYkC36Uai81qbYnvzhaofRJ");

#[program]
pub mod registry {
    use super::*;

    // === Setup ===

    /// Create the registry, pointing it at the reward manager and its default template
    pub fn initialize(
        ctx: Context<InitializeRegistry>,
        reward_manager: Pubkey,
        default_template_id: u64,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, reward_manager, default_template_id)
    }

    /// Change the template publishers are rewarded from (authority only)
    pub fn set_default_template(ctx: Context<SetDefaultTemplate>, template_id: u64) -> Result<()> {
        instructions::set_default_template::handler(ctx, template_id)
    }

    pub fn transfer_authority(
        ctx: Context<TransferRegistryAuthority>,
        new_holder: Pubkey,
    ) -> Result<()> {
        instructions::transfer_authority::handler(ctx, new_holder)
    }

    // === Models ===

    /// Register a model and reward its uploader with one fragment
    pub fn publish(ctx: Context<Publish>, content_ref: String, price: u64) -> Result<u64> {
        instructions::publish::handler(ctx, content_ref, price)
    }

    /// Point a model at new content, bumping its version (uploader only)
    pub fn update(ctx: Context<UpdateModel>, model_id: u64, new_content_ref: String) -> Result<()> {
        instructions::update::handler(ctx, model_id, new_content_ref)
    }

    // === Access ===

    /// Buy one-time access to a model; `payment` lamports go to the uploader
    pub fn purchase_access(
        ctx: Context<PurchaseAccess>,
        model_id: u64,
        payment: u64,
    ) -> Result<()> {
        instructions::purchase_access::handler(ctx, model_id, payment)
    }

    // === Reads ===

    pub fn check_access(ctx: Context<CheckAccess>, model_id: u64, identity: Pubkey) -> Result<bool> {
        instructions::read::check_access(ctx, model_id, identity)
    }

    pub fn get_model(ctx: Context<ReadModel>, model_id: u64) -> Result<ModelView> {
        instructions::read::get_model(ctx, model_id)
    }

    pub fn get_version_history(ctx: Context<ReadModel>, model_id: u64) -> Result<Vec<u32>> {
        instructions::read::get_version_history(ctx, model_id)
    }
}
