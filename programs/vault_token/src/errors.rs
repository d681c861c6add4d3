use anchor_lang::prelude::*;

#[error_code]
pub enum TokenError {
    #[msg("Amount must be greater than 0")]
    ZeroAmount,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Arithmetic overflow")]
    Overflow,
}
