use anchor_lang::prelude::*;

#[event]
pub struct CompletionMinted {
    pub token_id: u64,
    pub owner: Pubkey,
    pub uri: String,
}
