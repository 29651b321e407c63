use {
    crate::{constants::PARTICIPANT_SEED, state::Participant},
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct InitParticipant<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    // `init` rejects a second entry for the same identity.
    #[account(
        init,
        payer = participant,
        space = 8 + Participant::INIT_SPACE,
        seeds = [PARTICIPANT_SEED, participant.key().as_ref()], bump,
    )]
    pub entry: Account<'info, Participant>,

    pub system_program: Program<'info, System>,
}

pub fn init_participant(ctx: Context<InitParticipant>) -> Result<()> {
    let entry = &mut ctx.accounts.entry;
    entry.owner = ctx.accounts.participant.key();
    entry.amount = 0;
    entry.contributed_at = 0;
    entry.cancelled = false;
    entry.is_early_investor = false;
    entry.is_large_investor = false;

    Ok(())
}
