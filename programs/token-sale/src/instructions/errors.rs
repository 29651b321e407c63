use anchor_lang::prelude::*;

#[error_code]
pub enum SaleError {
    #[msg("Sale state has already been initialized")]
    AlreadyInitialized,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Operation is not legal in the current phase")]
    PhaseViolation,
    #[msg("Participation already cancelled")]
    AlreadyCancelled,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Escrow balance below the amount owed")]
    InsufficientEscrow,
    #[msg("Token mint does not match the bound mint")]
    MintMismatch,
    #[msg("Raise cap exceeded")]
    RaiseCapExceeded,
    #[msg("Maximum contribution per participant exceeded")]
    MaxContributionExceeded,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Division by zero")]
    DivisionByZero,
}
