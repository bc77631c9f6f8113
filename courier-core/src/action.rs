use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Location, RequestId};

/// A single step of a carrier plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Travel to a neighbouring location.
    Move {
        /// Location reached by the move.
        to: Location,
    },
    /// Load a request at the current location.
    Pickup {
        /// Request being loaded.
        request: RequestId,
    },
    /// Unload a request at the current location.
    Deliver {
        /// Request being unloaded.
        request: RequestId,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move { to } => write!(f, "move to {to}"),
            Self::Pickup { request } => write!(f, "pick up {request}"),
            Self::Deliver { request } => write!(f, "deliver {request}"),
        }
    }
}
