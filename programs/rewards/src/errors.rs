use anchor_lang::prelude::*;

#[error_code]
pub enum RewardError {
    #[msg("Template must have at least one fragment")]
    EmptyTemplate,

    #[msg("Template has more fragments than one redemption can carry")]
    TooManyFragments,

    #[msg("Content reference too long")]
    RefTooLong,

    #[msg("Template not found")]
    NotFound,

    #[msg("Redemption must list every fragment of the template exactly once with amount 1")]
    IncompleteSet,

    #[msg("Token ids, amounts and balance accounts differ in length")]
    LengthMismatch,

    #[msg("Redeemer does not hold the listed fragments")]
    InsufficientBalance,

    #[msg("Ledger account does not match the manager configuration")]
    LedgerMismatch,

    #[msg("Arithmetic overflow")]
    Overflow,
}
