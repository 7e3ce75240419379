use std::str::FromStr;

use chess::{Board, BoardStatus, ChessMove};

use crate::rules::{MoveInput, MoveOutcome, Position, RulesEngine, RulesError};


// Classic chess legality via the `chess` crate. Positions travel as FEN; moves are accepted
// in coordinate notation ("e2e4", "e7e8q") with SAN as a fallback ("Nf3", "O-O").
pub struct ClassicChess;

impl RulesEngine for ClassicChess {
    fn initial_position(&self) -> Position { Position(Board::default().to_string()) }

    fn attempt(&self, position: &Position, mv: &MoveInput) -> Result<MoveOutcome, RulesError> {
        let board = Board::from_str(&position.0).map_err(|err| {
            RulesError::EngineFault(format!("Bad stored position {:?}: {}", position.0, err))
        })?;
        let chess_move = ChessMove::from_str(&mv.0)
            .or_else(|_| ChessMove::from_san(&board, &mv.0))
            .map_err(|_| RulesError::Illegal)?;
        if !board.legal(chess_move) {
            return Err(RulesError::Illegal);
        }
        let next = board.make_move_new(chess_move);
        Ok(MoveOutcome {
            position: Position(next.to_string()),
            game_over: next.status() != BoardStatus::Ongoing,
        })
    }
}
