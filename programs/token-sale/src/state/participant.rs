use anchor_lang::prelude::*;

/// Per-participant ledger entry, derived from `[b"participant", owner]`.
/// Created once by `init_participant` and closed by `claim`; closing the
/// account is what makes double settlement structurally impossible.
#[account]
#[derive(InitSpace, Default)]
pub struct Participant {
    pub owner: Pubkey,
    /// Net lamports attributed to this entry. Preserved on cancel, where it
    /// becomes the refund owed at settlement.
    pub amount: u64,
    pub contributed_at: u64,
    pub cancelled: bool,
    /// Set while the contribution is active and was made inside the open
    /// window; cleared on cancel.
    pub is_early_investor: bool,
    /// Latched when the cumulative position first reaches the threshold.
    /// Records a historical fact, so cancel never clears it.
    pub is_large_investor: bool,
}
