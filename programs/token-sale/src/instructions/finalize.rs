use {
    crate::{constants::SALE_STATE_SEED, instructions::SaleError, state::SaleState},
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct Finalize<'info> {
    pub token_provider: Signer<'info>,

    #[account(mut, seeds = [SALE_STATE_SEED], bump)]
    pub state: Account<'info, SaleState>,
}

// Flips the phase gate only; totals are untouched.
pub fn finalize(ctx: Context<Finalize>) -> Result<()> {
    let state = &mut ctx.accounts.state;
    require!(
        ctx.accounts.token_provider.key() == state.token_provider,
        SaleError::Unauthorized
    );
    apply_finalization(state)?;

    msg!(
        "participation closed; total contributed: {}, total cancelled: {}",
        state.total_contributed,
        state.total_cancelled
    );

    Ok(())
}

pub(crate) fn apply_finalization(state: &mut SaleState) -> Result<()> {
    require!(!state.ended, SaleError::PhaseViolation);

    state.ended = true;
    state.participation_active = false;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_closes_both_gates() {
        let mut state = SaleState {
            participation_active: true,
            participation_end: u64::MAX,
            total_contributed: 42,
            ..SaleState::default()
        };

        apply_finalization(&mut state).unwrap();

        assert!(state.ended);
        assert!(!state.participation_active);
        assert_eq!(state.total_contributed, 42);
    }

    #[test]
    fn finalize_twice_rejected() {
        let mut state = SaleState::default();

        apply_finalization(&mut state).unwrap();
        let err = apply_finalization(&mut state).unwrap_err();
        assert_eq!(err, SaleError::PhaseViolation.into());
    }
}
