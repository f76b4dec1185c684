use thiserror::Error;

use crate::domain::CommitteeError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Committee is full: capacity of {0} member(s) already reached")]
    CapacityExceeded(usize),

    #[error("No members in the committee")]
    EmptyRoster,

    #[error("Member name cannot be empty")]
    EmptyName,

    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<CommitteeError> for AppError {
    fn from(err: CommitteeError) -> Self {
        match err {
            CommitteeError::CapacityExceeded { capacity } => AppError::CapacityExceeded(capacity),
            CommitteeError::EmptyRoster => AppError::EmptyRoster,
        }
    }
}
