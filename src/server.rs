use std::collections::{HashMap, hash_map};
use std::sync::{Arc, Mutex, mpsc};

use log::{error, info};

use crate::event::{ClientEvent, ServerEvent};
use crate::game::{Game, MoveVerdict};
use crate::rules::RulesEngine;
use crate::seating::{Faction, Seating};


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ClientId(pub(crate) u64);

pub struct Client {
    events_tx: mpsc::Sender<ServerEvent>,
}

impl Client {
    fn send(&self, event: ServerEvent) {
        // A send fails only when the receiving half is gone, i.e. the client is already
        // being torn down; the pending Disconnect event cleans up after it.
        let _ = self.events_tx.send(event);
    }
}

pub struct Clients {
    map: HashMap<ClientId, Client>,
}

impl Clients {
    pub fn new() -> Self { Clients { map: HashMap::new() } }

    pub fn add_client(&mut self, events_tx: mpsc::Sender<ServerEvent>) -> ClientId {
        let client = Client { events_tx };
        loop {
            let id = ClientId(rand::random());
            match self.map.entry(id) {
                hash_map::Entry::Occupied(_) => {}
                hash_map::Entry::Vacant(e) => {
                    e.insert(client);
                    return id;
                }
            }
        }
    }

    pub fn remove_client(&mut self, id: ClientId) { self.map.remove(&id); }

    fn send_to(&self, id: ClientId, event: ServerEvent) {
        if let Some(client) = self.map.get(&id) {
            client.send(event);
        }
    }

    fn broadcast(&self, event: &ServerEvent) {
        for client in self.map.values() {
            client.send(event.clone());
        }
    }
}

#[derive(Debug)]
pub enum IncomingEvent {
    Connect(ClientId),
    Disconnect(ClientId),
    Network(ClientId, ClientEvent),
    Terminate,
}

pub struct ServerState {
    clients: Arc<Mutex<Clients>>,
    seating: Seating,
    game: Game,
}

impl ServerState {
    pub fn new(clients: Arc<Mutex<Clients>>, engine: Box<dyn RulesEngine>) -> Self {
        ServerState {
            clients,
            seating: Seating::new(),
            game: Game::new(engine),
        }
    }

    // The single serialization point. Every connection lifecycle event and every move
    // proposal is applied here, one at a time, to completion, in arrival order. Seat
    // assignment and turn authorization are therefore atomic with respect to one another.
    pub fn apply_event(&mut self, event: IncomingEvent) {
        let clients = self.clients.lock().unwrap();
        match event {
            IncomingEvent::Connect(id) => {
                let faction = self.seating.seat(id);
                info!("Client {:?} joined as {:?}", id, faction);
                match faction {
                    Faction::Player(force) => {
                        clients.send_to(id, ServerEvent::RoleAssigned { force });
                    }
                    Faction::Observer => {
                        clients.send_to(id, ServerEvent::SpectatorAssigned);
                    }
                }
                clients.send_to(id, ServerEvent::GameUpdated { state: self.game.state().clone() });
            }
            IncomingEvent::Disconnect(id) => {
                info!("Client {:?} left", id);
                self.seating.unseat(id);
            }
            IncomingEvent::Network(id, ClientEvent::MakeMove { mv }) => {
                let faction = match self.seating.faction_of(id) {
                    Ok(faction) => faction,
                    Err(err) => {
                        // Should be impossible: every connection is seated before its
                        // reader thread starts forwarding events.
                        error!("Move from unregistered client: {:?}", err);
                        return;
                    }
                };
                match self.game.try_move(faction, &mv) {
                    MoveVerdict::Discarded => {}
                    MoveVerdict::Rejected => {
                        clients.send_to(id, ServerEvent::MoveRejected { mv });
                    }
                    MoveVerdict::Applied => {
                        let state = self.game.state().clone();
                        clients.broadcast(&ServerEvent::MoveMade { mv });
                        clients.broadcast(&ServerEvent::GameUpdated { state });
                    }
                }
            }
            IncomingEvent::Terminate => {
                info!("Shutting down");
                std::process::exit(0);
            }
        }
    }
}
