use anchor_lang::prelude::*;
use ledger_core::AuthoritySlot;

use crate::errors::RegistryError;

// =============================================================================
// MODEL REGISTRY STATE
// =============================================================================
//
// Models are addressed by sequential id (first model is 1). The registry's
// config PDA is also the identity it presents to the reward manager: after
// bootstrap it holds the manager's authority slot and signs reward CPIs.
// =============================================================================

/// Maximum content reference length in bytes
pub const MAX_CONTENT_REF_LEN: usize = 128;

/// Maximum entries in a model's version history
pub const MAX_VERSIONS: usize = 64;

#[account]
pub struct ModelRegistry {
    /// Admin slot (default template changes)
    pub authority: AuthoritySlot,
    /// Reward manager configuration account invoked on publish
    pub reward_manager: Pubkey,
    /// Template publishers are rewarded from
    pub default_template_id: u64,
    /// Models published so far; also the id of the latest model
    pub model_count: u64,
    /// Access grants sold across all models
    pub total_sales: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl ModelRegistry {
    pub const SEED: &'static [u8] = b"model_registry";

    pub const SIZE: usize = 8 +  // discriminator
        AuthoritySlot::SIZE +    // authority
        32 +                     // reward_manager
        8 +                      // default_template_id
        8 +                      // model_count
        8 +                      // total_sales
        1;                       // bump

    /// Id the next published model will receive
    pub fn next_model_id(&self) -> u64 {
        self.model_count.saturating_add(1)
    }

    pub fn record_publish(&mut self) -> Result<u64> {
        self.model_count = self
            .model_count
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        Ok(self.model_count)
    }

    pub fn record_sale(&mut self) -> Result<()> {
        self.total_sales = self
            .total_sales
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        Ok(())
    }
}

#[account]
#[derive(Debug)]
pub struct Model {
    pub model_id: u64,
    /// Fixed at publish
    pub uploader: Pubkey,
    /// Opaque content-addressed reference, never dereferenced here
    pub content_ref: String,
    /// Access price in lamports
    pub price: u64,
    pub version: u32,
    /// Every version number this model has had, oldest first
    pub version_history: Vec<u32>,
    pub exists: bool,
    pub created_at: i64,
    pub updated_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl Model {
    pub const SEED: &'static [u8] = b"model";

    pub const SIZE: usize = 8 +      // discriminator
        8 +                          // model_id
        32 +                         // uploader
        4 + MAX_CONTENT_REF_LEN +    // content_ref
        8 +                          // price
        4 +                          // version
        4 + MAX_VERSIONS * 4 +       // version_history
        1 +                          // exists
        8 +                          // created_at
        8 +                          // updated_at
        1;                           // bump

    fn check_content_ref(content_ref: &str) -> Result<()> {
        require!(!content_ref.is_empty(), RegistryError::EmptyContentRef);
        require!(
            content_ref.len() <= MAX_CONTENT_REF_LEN,
            RegistryError::ContentRefTooLong
        );
        Ok(())
    }

    /// Build the record for a freshly published model at version 1
    pub fn publish(
        model_id: u64,
        uploader: Pubkey,
        content_ref: String,
        price: u64,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(price > 0, RegistryError::InvalidPrice);
        Self::check_content_ref(&content_ref)?;

        Ok(Self {
            model_id,
            uploader,
            content_ref,
            price,
            version: 1,
            version_history: vec![1],
            exists: true,
            created_at: now,
            updated_at: now,
            bump,
        })
    }

    /// Replace the content reference and bump the version by one.
    ///
    /// All checks run before any field changes. Returns the new version.
    pub fn apply_update(&mut self, caller: &Pubkey, new_content_ref: String, now: i64) -> Result<u32> {
        require!(self.exists, RegistryError::NotFound);
        require!(self.uploader == *caller, RegistryError::NotOwner);
        Self::check_content_ref(&new_content_ref)?;
        require!(
            self.version_history.len() < MAX_VERSIONS,
            RegistryError::VersionLimitReached
        );
        let new_version = self
            .version
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;

        self.content_ref = new_content_ref;
        self.version = new_version;
        self.version_history.push(new_version);
        self.updated_at = now;

        Ok(new_version)
    }

    pub fn view(&self) -> ModelView {
        ModelView {
            model_id: self.model_id,
            uploader: self.uploader,
            content_ref: self.content_ref.clone(),
            price: self.price,
            version: self.version,
            exists: self.exists,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Read-side projection returned by `get_model`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModelView {
    pub model_id: u64,
    pub uploader: Pubkey,
    pub content_ref: String,
    pub price: u64,
    pub version: u32,
    pub exists: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// One buyer's access to one model. Once granted it is never reset.
#[account]
pub struct AccessGrant {
    pub model_id: u64,
    pub buyer: Pubkey,
    pub granted: bool,
    /// Lamports paid for the grant
    pub paid: u64,
    pub purchased_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl AccessGrant {
    pub const SEED: &'static [u8] = b"access_grant";

    pub const SIZE: usize = 8 + 8 + 32 + 1 + 8 + 8 + 1;

    /// Validate a purchase against the model, then record it.
    ///
    /// Checks in order: model exists, payment covers the price, not already granted.
    pub fn purchase(
        &mut self,
        model: &Model,
        buyer: Pubkey,
        payment: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(model.exists, RegistryError::NotFound);
        require!(payment >= model.price, RegistryError::InsufficientPayment);
        require!(!self.granted, RegistryError::AlreadyPurchased);

        self.model_id = model.model_id;
        self.buyer = buyer;
        self.granted = true;
        self.paid = payment;
        self.purchased_at = now;
        self.bump = bump;

        Ok(())
    }
}
