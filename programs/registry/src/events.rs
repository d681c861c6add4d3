use anchor_lang::prelude::*;

#[event]
pub struct ModelPublished {
    pub model_id: u64,
    pub uploader: Pubkey,
    pub content_ref: String,
    pub price: u64,
}

#[event]
pub struct ModelUpdated {
    pub model_id: u64,
    pub new_version: u32,
    pub new_content_ref: String,
}

#[event]
pub struct AccessPurchased {
    pub model_id: u64,
    pub buyer: Pubkey,
    /// Lamports forwarded to the uploader
    pub payment: u64,
}

#[event]
pub struct DefaultTemplateChanged {
    pub previous: u64,
    pub template_id: u64,
}
