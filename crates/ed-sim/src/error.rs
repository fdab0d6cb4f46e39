use ed_core::EdError;
use ed_ward::WardError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] EdError),

    #[error("placement refused: {0}")]
    Ward(#[from] WardError),

    #[error("the run already completed its {hours}-hour cycle")]
    RunComplete { hours: u64 },

    #[error("batch sweep needs {what}")]
    EmptySweep { what: &'static str },
}

pub type SimResult<T> = Result<T, SimError>;
