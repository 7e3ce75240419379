#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod chess_rules;
pub mod event;
pub mod force;
pub mod game;
pub mod network;
pub mod rules;
pub mod seating;
pub mod server;
pub mod server_main;
pub mod test_util;
