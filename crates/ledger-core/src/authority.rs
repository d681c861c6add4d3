use anchor_lang::prelude::*;

// =============================================================================
// AUTHORITY SLOT
// =============================================================================
//
// One privileged caller per ledger. The slot is written once at initialize and
// may be handed over exactly once afterwards, only by the current holder.
// =============================================================================

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthoritySlot {
    /// The only identity allowed to invoke privileged instructions
    pub holder: Pubkey,
    /// Set once the slot has been handed to its final holder
    pub transferred: bool,
}

impl AuthoritySlot {
    pub const SIZE: usize = 32 + 1;

    pub fn new(holder: Pubkey) -> Self {
        Self {
            holder,
            transferred: false,
        }
    }

    pub fn is_held_by(&self, caller: &Pubkey) -> bool {
        self.holder == *caller
    }

    /// Fails with `Unauthorized` unless `caller` is the current holder
    pub fn require(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_held_by(caller), AuthorityError::Unauthorized);
        Ok(())
    }

    /// Hand the slot to `new_holder`, returning the previous holder.
    ///
    /// Nothing is mutated on failure.
    pub fn transfer(&mut self, caller: &Pubkey, new_holder: Pubkey) -> Result<Pubkey> {
        self.require(caller)?;
        require!(new_holder != Pubkey::default(), AuthorityError::InvalidAuthority);
        require!(!self.transferred, AuthorityError::AuthorityAlreadyTransferred);

        let previous = self.holder;
        self.holder = new_holder;
        self.transferred = true;
        Ok(previous)
    }
}

/// Emitted by every ledger when its authority slot changes hands
#[event]
pub struct AuthorityTransferred {
    /// The configuration account whose slot changed
    pub ledger: Pubkey,
    pub previous: Pubkey,
    pub new_holder: Pubkey,
}

#[error_code(offset = 7000)]
pub enum AuthorityError {
    #[msg("Unauthorized: caller is not the current authority holder")]
    Unauthorized,

    #[msg("Invalid authority: cannot set zero address as authority")]
    InvalidAuthority,

    #[msg("Authority has already been transferred once")]
    AuthorityAlreadyTransferred,
}
