use crate::rules::{MoveInput, MoveOutcome, Position, RulesEngine, RulesError};


// Scripted stand-in for the rules engine. Accepts everything except "illegal", fails on
// "boom", declares the game over on "mate". The position accumulates the move history so
// tests can assert on exactly which moves got through.
pub struct ScriptedRules;

impl RulesEngine for ScriptedRules {
    fn initial_position(&self) -> Position { Position("start".to_owned()) }

    fn attempt(&self, position: &Position, mv: &MoveInput) -> Result<MoveOutcome, RulesError> {
        match mv.0.as_str() {
            "illegal" => Err(RulesError::Illegal),
            "boom" => Err(RulesError::EngineFault("scripted failure".to_owned())),
            _ => Ok(MoveOutcome {
                position: Position(format!("{} {}", position.0, mv.0)),
                game_over: mv.0 == "mate",
            }),
        }
    }
}
