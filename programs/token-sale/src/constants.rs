// ===== Seeds =====
pub const SALE_STATE_SEED: &[u8] = b"state";
pub const ESCROW_SEED: &[u8] = b"escrow";
pub const PARTICIPANT_SEED: &[u8] = b"participant";
pub const TOKEN_POOL_SEED: &[u8] = b"token_pool";

// ===== Sale parameters =====
/// Hard ceiling on active (non-cancelled) contributions: 5,000 SOL.
pub const RAISE_CAP: u64 = 5_000 * anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/// Per-participant contribution ceiling: 250 SOL.
pub const MAX_CONTRIBUTION: u64 = 250 * anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/// A cumulative position at or above 100 SOL classifies the entry as a large investor.
pub const LARGE_INVESTOR_THRESHOLD: u64 =
    100 * anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;
