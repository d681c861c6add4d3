use anchor_lang::prelude::*;

#[error_code]
pub enum FragmentError {
    #[msg("Zero amount not allowed")]
    ZeroAmount,

    #[msg("Insufficient balance for burn")]
    InsufficientBalance,

    #[msg("Token ids, amounts and balance accounts must have the same length")]
    LengthMismatch,

    #[msg("Token id listed more than once in a batch")]
    DuplicateTokenId,

    #[msg("Balance account does not belong to this holder and token id")]
    BalanceMismatch,

    #[msg("Balance account must be writable")]
    BalanceNotWritable,

    #[msg("Base URI too long")]
    UriTooLong,

    #[msg("Arithmetic overflow")]
    Overflow,
}
