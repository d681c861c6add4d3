use anchor_lang::prelude::*;

#[event]
pub struct TemplateCreated {
    pub template_id: u64,
    pub creator: Pubkey,
    pub final_ref: String,
    pub fragment_count: u16,
}

#[event]
pub struct FragmentRewarded {
    pub template_id: u64,
    pub slot_index: u16,
    pub token_id: u64,
    pub recipient: Pubkey,
}

#[event]
pub struct Redeemed {
    pub template_id: u64,
    pub redeemer: Pubkey,
    pub completion_token_id: u64,
}
