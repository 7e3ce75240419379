use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

use log::{info, warn};
use tungstenite::protocol::Role;

use crate::network::{self, CommunicationError};
use crate::rules::RulesEngine;
use crate::server::{Clients, IncomingEvent, ServerState};


pub struct ServerConfig {
    pub port: u16,
}

pub fn run(config: ServerConfig, engine: Box<dyn RulesEngine + Send>) {
    // Limited buffer for data streaming from clients into the server. When this is full
    // because ServerState::apply_event isn't coping with the load, we start putting back
    // pressure on client sockets.
    let (tx, rx) = mpsc::sync_channel(100000);
    let tx_terminate = tx.clone();
    ctrlc::set_handler(move || tx_terminate.send(IncomingEvent::Terminate).unwrap())
        .expect("Error setting Ctrl-C handler");

    let clients = Arc::new(Mutex::new(Clients::new()));
    let clients_view = Arc::clone(&clients);
    thread::spawn(move || {
        let mut server_state = ServerState::new(clients, engine);
        for event in rx {
            server_state.apply_event(event);
        }
        panic!("Unexpected end of events stream");
    });

    let listener = TcpListener::bind(("0.0.0.0", config.port)).unwrap();
    info!("Listening on {}...", listener.local_addr().unwrap());
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let tx = tx.clone();
                let clients = Arc::clone(&clients_view);
                thread::spawn(move || {
                    if let Err(err) = handle_connection(stream, tx, clients) {
                        warn!("Connection failed: {:?}", err);
                    }
                });
            }
            Err(err) => {
                warn!("Cannot establish connection: {}", err);
            }
        }
    }
    panic!("Unexpected end of TcpListener::incoming");
}

fn handle_connection(
    stream: TcpStream, tx: mpsc::SyncSender<IncomingEvent>, clients: Arc<Mutex<Clients>>,
) -> Result<(), CommunicationError> {
    let peer_addr = stream
        .peer_addr()
        .map_err(|err| CommunicationError::Socket(tungstenite::Error::Io(err)))?;
    let mut socket_in = tungstenite::accept(stream)
        .map_err(|err| CommunicationError::Protocol(format!("Handshake failed: {}", err)))?;
    let mut socket_out = network::clone_websocket(&socket_in, Role::Server)
        .map_err(|err| CommunicationError::Socket(tungstenite::Error::Io(err)))?;
    info!("Client connected: {}", peer_addr);

    let (client_tx, client_rx) = mpsc::channel();
    let client_id = clients.lock().unwrap().add_client(client_tx);
    // Queued from this thread before any reads, so the seat is assigned before the first
    // move proposal from this connection can reach the server.
    tx.send(IncomingEvent::Connect(client_id)).unwrap();

    // Server -> client.
    thread::spawn(move || {
        for event in client_rx {
            if network::write_obj(&mut socket_out, &event).is_err() {
                // The reader half notices the broken connection and cleans up.
                break;
            }
        }
    });

    // Client -> server, on this thread.
    loop {
        match network::read_obj(&mut socket_in) {
            Ok(event) => tx.send(IncomingEvent::Network(client_id, event)).unwrap(),
            Err(CommunicationError::ConnectionClosed) => {
                info!("Client {} disconnected", peer_addr);
                break;
            }
            Err(err) => {
                warn!("Client {} disconnected due to read error: {:?}", peer_addr, err);
                break;
            }
        }
    }
    clients.lock().unwrap().remove_client(client_id);
    tx.send(IncomingEvent::Disconnect(client_id)).unwrap();
    Ok(())
}
