use serde::{Deserialize, Serialize};


// A state transition descriptor exactly as the client supplied it: coordinate notation
// ("e2e4", "e7e8q") or whatever else the engine accepts. Opaque to the server core and
// relayed verbatim on success, since the snapshot alone does not reconstruct intent
// unambiguously (e.g. underpromotion choice).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveInput(pub String);

// Canonical serialized snapshot of a position, sufficient to resume rendering and
// validation. FEN for the classic chess engine. Opaque to the server core.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Position(pub String);

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    pub position: Position,
    pub game_over: bool,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RulesError {
    // The move does not parse or is not legal in the given position.
    Illegal,
    // The engine itself failed, e.g. the stored position did not round-trip. Callers must
    // treat this as a rejection so that it never escapes into the broadcast path.
    EngineFault(String),
}

// The legality oracle. Stateless per call: it receives the authoritative position and the
// proposed move, and either produces the next position or refuses.
pub trait RulesEngine {
    fn initial_position(&self) -> Position;
    fn attempt(&self, position: &Position, mv: &MoveInput) -> Result<MoveOutcome, RulesError>;
}
