use anchor_lang::prelude::*;

#[error_code]
pub enum CompletionError {
    #[msg("Token URI too long")]
    UriTooLong,

    #[msg("Completion token not found")]
    NotFound,

    #[msg("Arithmetic overflow")]
    Overflow,
}
