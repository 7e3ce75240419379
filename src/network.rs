use std::io;
use std::net::TcpStream;

use serde::{Serialize, de};
use tungstenite::{Message, WebSocket, protocol::Role};


pub const DEFAULT_PORT: u16 = 5000;


#[derive(Debug)]
pub enum CommunicationError {
    ConnectionClosed,
    Socket(tungstenite::Error),
    Serde(serde_json::Error),
    Protocol(String),
}

pub fn write_obj<T, S>(socket: &mut WebSocket<S>, obj: &T) -> Result<(), CommunicationError>
where
    T: Serialize,
    S: io::Read + io::Write,
{
    let serialized = serde_json::to_string(obj).map_err(CommunicationError::Serde)?;
    socket.send(Message::text(serialized)).map_err(to_communication_error)
}

pub fn read_obj<T, S>(socket: &mut WebSocket<S>) -> Result<T, CommunicationError>
where
    T: de::DeserializeOwned,
    S: io::Read + io::Write,
{
    match socket.read().map_err(to_communication_error)? {
        Message::Text(msg) => serde_json::from_str(&msg).map_err(CommunicationError::Serde),
        Message::Close(_) => Err(CommunicationError::ConnectionClosed),
        msg => Err(CommunicationError::Protocol(format!("Expected text, got {:?}", msg))),
    }
}

fn to_communication_error(err: tungstenite::Error) -> CommunicationError {
    match err {
        tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed => {
            CommunicationError::ConnectionClosed
        }
        err => CommunicationError::Socket(err),
    }
}

// The socket is read and written from different threads, so the underlying stream is
// cloned. Writes and reads each stay single-threaded.
pub fn clone_websocket(
    socket: &WebSocket<TcpStream>, role: Role,
) -> io::Result<WebSocket<TcpStream>> {
    let stream = socket.get_ref().try_clone()?;
    let config = *socket.get_config();
    Ok(WebSocket::from_raw_socket(stream, role, Some(config)))
}
