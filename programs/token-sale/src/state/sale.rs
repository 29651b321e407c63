use anchor_lang::prelude::*;

/// Singleton sale record, derived from the fixed `b"state"` seed so every
/// party can locate it without coordination.
#[account]
#[derive(InitSpace, Default)]
pub struct SaleState {
    pub initialized: bool,
    pub participation_active: bool,
    pub ended: bool,
    pub participation_end: u64,
    pub raise_cap: u64,
    /// Sum of currently-active (non-cancelled) contributions, in lamports.
    pub total_contributed: u64,
    /// Cancelled lamports still owed as refunds; decreases as refunds settle.
    pub total_cancelled: u64,
    /// Token pool available for pro-rata distribution.
    pub total_tokens: u64,
    /// Net lamports forwarded to the beneficiary so far.
    pub recipient_lamports: u64,
    pub token_provider: Pubkey,
    pub beneficiary: Pubkey,
    pub safeguard_account: Pubkey,
    /// Bound on first deposit; later deposits must use the same mint.
    pub token_mint: Pubkey,
    pub unique_investor_count: u64,
    pub large_investor_count: u64,
    pub active_early_investor_count: u64,
}
