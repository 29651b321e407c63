use {
    crate::{constants::SALE_STATE_SEED, instructions::SaleError, state::SaleState},
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct Activate<'info> {
    pub token_provider: Signer<'info>,

    #[account(mut, seeds = [SALE_STATE_SEED], bump)]
    pub state: Account<'info, SaleState>,
}

pub fn activate(ctx: Context<Activate>, duration_seconds: u64) -> Result<()> {
    let state = &mut ctx.accounts.state;
    require!(
        ctx.accounts.token_provider.key() == state.token_provider,
        SaleError::Unauthorized
    );

    let now = Clock::get()?.unix_timestamp as u64;
    apply_activation(state, now, duration_seconds)?;

    msg!(
        "participation window opened; ends at: {}",
        state.participation_end
    );

    Ok(())
}

pub(crate) fn apply_activation(state: &mut SaleState, now: u64, duration_seconds: u64) -> Result<()> {
    require!(!state.participation_active, SaleError::PhaseViolation);
    require!(!state.ended, SaleError::PhaseViolation);

    state.participation_active = true;
    state.participation_end = now
        .checked_add(duration_seconds)
        .ok_or(SaleError::MathOverflow)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_opens_window() {
        let mut state = SaleState::default();

        apply_activation(&mut state, 1_000, 3_600).unwrap();
        assert!(state.participation_active);
        assert_eq!(state.participation_end, 4_600);
    }

    #[test]
    fn second_activation_rejected() {
        let mut state = SaleState::default();

        apply_activation(&mut state, 1_000, 3_600).unwrap();
        let err = apply_activation(&mut state, 2_000, 3_600).unwrap_err();
        assert_eq!(err, SaleError::PhaseViolation.into());
    }

    #[test]
    fn activation_after_finalize_rejected() {
        let mut state = SaleState {
            ended: true,
            ..SaleState::default()
        };

        let err = apply_activation(&mut state, 1_000, 3_600).unwrap_err();
        assert_eq!(err, SaleError::PhaseViolation.into());
    }
}
