use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

pub use state::*;

declare_id!("GLiqEcSwFcnoc9kTpbCKwzopiZULrjoQiyTRmzuhQfcP");

#[program]
pub mod fragments {
    use super::*;

    // === Setup ===

    /// Create the ledger; the signer becomes its authority holder
    pub fn initialize(ctx: Context<InitializeLedger>, base_uri: String) -> Result<()> {
        instructions::initialize::handler(ctx, base_uri)
    }

    /// Hand the minter slot to a new holder (once)
    pub fn transfer_authority(
        ctx: Context<TransferLedgerAuthority>,
        new_holder: Pubkey,
    ) -> Result<()> {
        instructions::transfer_authority::handler(ctx, new_holder)
    }

    // === Privileged ===

    /// Mint `amount` units of `token_id` to `recipient`
    pub fn mint(
        ctx: Context<MintFragment>,
        recipient: Pubkey,
        token_id: u64,
        amount: u64,
    ) -> Result<()> {
        instructions::mint::handler(ctx, recipient, token_id, amount)
    }

    /// Burn `amount` units of `token_id` from `holder`
    pub fn burn(
        ctx: Context<BurnFragment>,
        holder: Pubkey,
        token_id: u64,
        amount: u64,
    ) -> Result<()> {
        instructions::burn::handler(ctx, holder, token_id, amount)
    }

    /// Burn several classes from `holder` in one step.
    /// Balance accounts are passed as remaining accounts, in `token_ids` order.
    pub fn burn_batch<'info>(
        ctx: Context<'_, '_, '_, 'info, BurnFragmentBatch<'info>>,
        holder: Pubkey,
        token_ids: Vec<u64>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::burn_batch::handler(ctx, holder, token_ids, amounts)
    }

    // === Reads ===

    pub fn balance_of(ctx: Context<BalanceOf>, holder: Pubkey, token_id: u64) -> Result<u64> {
        instructions::balance_of::handler(ctx, holder, token_id)
    }

    pub fn fragment_uri(ctx: Context<FragmentUri>, token_id: u64) -> Result<String> {
        instructions::fragment_uri::handler(ctx, token_id)
    }
}
