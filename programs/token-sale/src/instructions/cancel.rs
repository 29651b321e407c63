use {
    crate::{
        constants::{PARTICIPANT_SEED, SALE_STATE_SEED},
        instructions::SaleError,
        state::{Participant, SaleState},
    },
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct Cancel<'info> {
    pub participant: Signer<'info>,

    #[account(mut, seeds = [SALE_STATE_SEED], bump)]
    pub state: Account<'info, SaleState>,

    #[account(
        mut,
        seeds = [PARTICIPANT_SEED, participant.key().as_ref()], bump,
        constraint = entry.owner == participant.key() @ SaleError::Unauthorized,
    )]
    pub entry: Account<'info, Participant>,
}

// No lamports move here; the cancelled amount stays in escrow as the refund
// owed at settlement.
pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
    apply_cancellation(&mut ctx.accounts.state, &mut ctx.accounts.entry)
}

pub(crate) fn apply_cancellation(state: &mut SaleState, entry: &mut Participant) -> Result<()> {
    require!(state.participation_active, SaleError::PhaseViolation);
    require!(!entry.cancelled, SaleError::AlreadyCancelled);
    require!(entry.amount > 0, SaleError::ZeroAmount);

    entry.cancelled = true;
    if entry.is_early_investor {
        entry.is_early_investor = false;
        state.active_early_investor_count = state.active_early_investor_count.saturating_sub(1);
    }
    // is_large_investor records a historical fact; the counter stays.

    state.total_contributed = state
        .total_contributed
        .checked_sub(entry.amount)
        .ok_or(SaleError::MathOverflow)?;
    state.total_cancelled = state
        .total_cancelled
        .checked_add(entry.amount)
        .ok_or(SaleError::MathOverflow)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::participate::apply_contribution;

    fn open_state() -> SaleState {
        SaleState {
            initialized: true,
            participation_active: true,
            participation_end: 10_000,
            raise_cap: u64::MAX,
            ..SaleState::default()
        }
    }

    #[test]
    fn cancel_moves_totals_and_preserves_amount() {
        let mut state = open_state();
        let mut entry = Participant::default();
        apply_contribution(&mut state, &mut entry, 500_000_000, 1_000).unwrap();

        apply_cancellation(&mut state, &mut entry).unwrap();

        assert!(entry.cancelled);
        assert_eq!(entry.amount, 500_000_000);
        assert!(!entry.is_early_investor);
        assert_eq!(state.total_contributed, 0);
        assert_eq!(state.total_cancelled, 500_000_000);
        assert_eq!(state.active_early_investor_count, 0);
    }

    #[test]
    fn cancel_keeps_large_investor_count() {
        let mut state = open_state();
        let mut entry = Participant::default();
        apply_contribution(&mut state, &mut entry, 150_000_000_000, 1_000).unwrap();
        assert_eq!(state.large_investor_count, 1);

        apply_cancellation(&mut state, &mut entry).unwrap();

        assert!(entry.is_large_investor);
        assert_eq!(state.large_investor_count, 1);
    }

    #[test]
    fn double_cancel_rejected() {
        let mut state = open_state();
        let mut entry = Participant::default();
        apply_contribution(&mut state, &mut entry, 1_000_000, 1_000).unwrap();

        apply_cancellation(&mut state, &mut entry).unwrap();
        let err = apply_cancellation(&mut state, &mut entry).unwrap_err();
        assert_eq!(err, SaleError::AlreadyCancelled.into());
    }

    #[test]
    fn cancel_without_contribution_rejected() {
        let mut state = open_state();
        let mut entry = Participant::default();

        let err = apply_cancellation(&mut state, &mut entry).unwrap_err();
        assert_eq!(err, SaleError::ZeroAmount.into());
    }

    #[test]
    fn cancel_after_finalize_rejected() {
        let mut state = open_state();
        let mut entry = Participant::default();
        apply_contribution(&mut state, &mut entry, 1_000_000, 1_000).unwrap();

        state.participation_active = false;
        state.ended = true;

        let err = apply_cancellation(&mut state, &mut entry).unwrap_err();
        assert_eq!(err, SaleError::PhaseViolation.into());
    }
}
