#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

use chess_duel::chess_rules::ClassicChess;
use chess_duel::network;
use chess_duel::server_main::{self, ServerConfig};
use clap::{Command, arg, value_parser};


fn main() {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Chess duel")
        .version(clap::crate_version!())
        .about("Authoritative two-seat chess game server")
        .arg(
            arg!(-p --port [port] "Port to listen on (default: 5000)")
                .value_parser(value_parser!(u16)),
        )
        .get_matches();

    let port = *matches.get_one::<u16>("port").unwrap_or(&network::DEFAULT_PORT);
    server_main::run(ServerConfig { port }, Box::new(ClassicChess));
}
