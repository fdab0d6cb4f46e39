use ed_core::{PatientId, RoomId, Tier};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WardError {
    #[error("room {0} does not exist")]
    UnknownRoom(RoomId),

    #[error("room {0} is already occupied")]
    RoomOccupied(RoomId),

    #[error("patient of type {patient} cannot be placed in room {room}")]
    Ineligible { patient: Tier, room: RoomId },

    #[error("{0} is not in the waiting room")]
    NotWaiting(PatientId),
}

pub type WardResult<T> = Result<T, WardError>;
