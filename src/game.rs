use log::error;
use serde::{Deserialize, Serialize};

use crate::force::Force;
use crate::rules::{MoveInput, Position, RulesEngine, RulesError};
use crate::seating::Faction;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    // Checkmate, stalemate or another conclusion reported by the rules engine. Terminal:
    // no move is ever accepted afterwards.
    Over,
}

// The authoritative state, broadcast as a whole after every accepted move and to every new
// connection. `to_move` and `status` are derived from the move history; `position` is the
// engine's canonical snapshot.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub position: Position,
    pub to_move: Force,
    pub status: GameStatus,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveVerdict {
    // The proposer had no right to move. Dropped before the rules engine ever sees the
    // move and without notifying anyone, so turn handling leaks no legality information
    // to non-movers.
    Discarded,
    // The rules engine refused the move. Only the proposer learns.
    Rejected,
    // The move is in. Everyone gets the move and the new state.
    Applied,
}

pub struct Game {
    engine: Box<dyn RulesEngine>,
    state: GameState,
}

impl Game {
    pub fn new(engine: Box<dyn RulesEngine>) -> Self {
        let state = GameState {
            position: engine.initial_position(),
            to_move: Force::White,
            status: GameStatus::Active,
        };
        Game { engine, state }
    }

    pub fn state(&self) -> &GameState { &self.state }

    // The only place where the game state mutates. Authorization comes strictly first:
    // observers, the idle side and post-game proposals are discarded without evaluating
    // the move.
    pub fn try_move(&mut self, faction: Faction, mv: &MoveInput) -> MoveVerdict {
        let Faction::Player(force) = faction else {
            return MoveVerdict::Discarded;
        };
        if self.state.status != GameStatus::Active || force != self.state.to_move {
            return MoveVerdict::Discarded;
        }
        match self.engine.attempt(&self.state.position, mv) {
            Ok(outcome) => {
                self.state.position = outcome.position;
                self.state.to_move = force.opponent();
                if outcome.game_over {
                    self.state.status = GameStatus::Over;
                }
                MoveVerdict::Applied
            }
            Err(RulesError::Illegal) => MoveVerdict::Rejected,
            Err(RulesError::EngineFault(message)) => {
                error!("Rules engine failed on {:?}: {}", mv, message);
                MoveVerdict::Rejected
            }
        }
    }
}
