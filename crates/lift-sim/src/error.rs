use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("environment configuration error: {0}")]
    Config(String),

    #[error("malformed action input: {0}")]
    Input(#[from] LiftError),

    #[error("batch of {expected} environments received {got} action inputs")]
    BatchSizeMismatch {
        expected: usize,
        got:      usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
