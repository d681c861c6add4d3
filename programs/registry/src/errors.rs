use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Price must be greater than 0")]
    InvalidPrice,

    #[msg("Content reference must not be empty")]
    EmptyContentRef,

    #[msg("Content reference too long")]
    ContentRefTooLong,

    #[msg("Model not found")]
    NotFound,

    #[msg("Not the model owner")]
    NotOwner,

    #[msg("Insufficient payment")]
    InsufficientPayment,

    #[msg("Already purchased")]
    AlreadyPurchased,

    #[msg("Payment recipient is not the model uploader")]
    PayeeMismatch,

    #[msg("Reward manager does not match the registry configuration")]
    RewardManagerMismatch,

    #[msg("Model has reached its maximum number of versions")]
    VersionLimitReached,

    #[msg("Arithmetic overflow")]
    Overflow,
}
