use serde::{Deserialize, Serialize};

use crate::force::Force;
use crate::game::GameState;
use crate::rules::MoveInput;


#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ServerEvent {
    // Sent once, immediately after connect, to a participant that got a seat.
    RoleAssigned { force: Force },
    // Sent once, immediately after connect, to everybody who did not.
    SpectatorAssigned,
    // A legal move was made. Relayed to every connection together with `GameUpdated`: the
    // raw input carries intent detail the snapshot alone cannot reconstruct.
    MoveMade { mv: MoveInput },
    // Authoritative state after every legal move, and on connect so that a mid-game joiner
    // sees the true position rather than the initial one.
    GameUpdated { state: GameState },
    // The proposed move failed rules validation. Sent to the proposer only.
    MoveRejected { mv: MoveInput },
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ClientEvent {
    MakeMove { mv: MoveInput },
}
