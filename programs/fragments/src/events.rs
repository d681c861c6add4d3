use anchor_lang::prelude::*;

#[event]
pub struct FragmentsMinted {
    pub recipient: Pubkey,
    pub token_id: u64,
    pub amount: u64,
    /// Holder balance after the mint
    pub balance: u64,
}

#[event]
pub struct FragmentsBurned {
    pub holder: Pubkey,
    pub token_ids: Vec<u64>,
    pub amounts: Vec<u64>,
}
