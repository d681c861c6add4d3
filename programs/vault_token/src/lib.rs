use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

pub use state::*;

declare_id!("71C6REsvgTukzxPbxs6X5kME2gm1TTQYqwT9Z1zKh8G6");

#[program]
pub mod vault_token {
    use super::*;

    /// Create the token; the signer receives the whole fixed supply
    pub fn initialize(ctx: Context<InitializeToken>, initial_supply: u64, decimals: u8) -> Result<()> {
        instructions::initialize::handler(ctx, initial_supply, decimals)
    }

    /// Open an empty balance for the signer so it can receive transfers
    pub fn open_balance(ctx: Context<OpenBalance>) -> Result<()> {
        instructions::open_balance::handler(ctx)
    }

    pub fn transfer(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
        instructions::transfer::handler(ctx, amount)
    }

    pub fn balance_of(ctx: Context<BalanceOf>, owner: Pubkey) -> Result<u64> {
        instructions::balance_of::handler(ctx, owner)
    }

    pub fn transfer_authority(
        ctx: Context<TransferTokenAuthority>,
        new_holder: Pubkey,
    ) -> Result<()> {
        instructions::transfer_authority::handler(ctx, new_holder)
    }
}
