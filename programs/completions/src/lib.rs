use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

pub use state::*;

declare_id!("6t3AtoL5XDf6daGDwM7FwsJSfPkvu5UeJNJJKgfRk1Np");

#[program]
pub mod completions {
    use super::*;

    /// Create the ledger; the signer becomes its authority holder
    pub fn initialize(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Hand the minter slot to a new holder (once)
    pub fn transfer_authority(
        ctx: Context<TransferLedgerAuthority>,
        new_holder: Pubkey,
    ) -> Result<()> {
        instructions::transfer_authority::handler(ctx, new_holder)
    }

    /// Mint the next completion token to `recipient`, returning its id
    pub fn mint(ctx: Context<MintCompletion>, recipient: Pubkey, uri: String) -> Result<u64> {
        instructions::mint::handler(ctx, recipient, uri)
    }

    pub fn owner_of(ctx: Context<ReadCompletion>, token_id: u64) -> Result<Pubkey> {
        instructions::read::owner_of(ctx, token_id)
    }

    pub fn token_uri(ctx: Context<ReadCompletion>, token_id: u64) -> Result<String> {
        instructions::read::token_uri(ctx, token_id)
    }
}
