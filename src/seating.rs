use std::collections::HashSet;

use crate::force::Force;
use crate::server::ClientId;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Faction {
    Player(Force),
    Observer,
}

// Registry consistency fault: the id was never seated. Should not happen as long as seating
// stays coupled to connection lifecycle events.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UnknownParticipant(pub ClientId);

// Assigns seats to connections: the first connection takes White, the second takes Black,
// everybody else watches. A vacated seat goes to the next connection that arrives, never to
// an existing observer.
#[derive(Debug, Default)]
pub struct Seating {
    white: Option<ClientId>,
    black: Option<ClientId>,
    observers: HashSet<ClientId>,
}

impl Seating {
    pub fn new() -> Self { Self::default() }

    pub fn seat(&mut self, id: ClientId) -> Faction {
        if self.white.is_none() {
            self.white = Some(id);
            Faction::Player(Force::White)
        } else if self.black.is_none() {
            self.black = Some(id);
            Faction::Player(Force::Black)
        } else {
            self.observers.insert(id);
            Faction::Observer
        }
    }

    pub fn unseat(&mut self, id: ClientId) {
        if self.white == Some(id) {
            self.white = None;
        } else if self.black == Some(id) {
            self.black = None;
        } else {
            self.observers.remove(&id);
        }
    }

    pub fn faction_of(&self, id: ClientId) -> Result<Faction, UnknownParticipant> {
        if self.white == Some(id) {
            Ok(Faction::Player(Force::White))
        } else if self.black == Some(id) {
            Ok(Faction::Player(Force::Black))
        } else if self.observers.contains(&id) {
            Ok(Faction::Observer)
        } else {
            Err(UnknownParticipant(id))
        }
    }

    pub fn player(&self, force: Force) -> Option<ClientId> {
        match force {
            Force::White => self.white,
            Force::Black => self.black,
        }
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(n: u64) -> ClientId { ClientId(n) }

    #[test]
    fn first_two_connections_take_seats_in_order() {
        let mut seating = Seating::new();
        assert_eq!(seating.seat(id(1)), Faction::Player(Force::White));
        assert_eq!(seating.seat(id(2)), Faction::Player(Force::Black));
        assert_eq!(seating.seat(id(3)), Faction::Observer);
        assert_eq!(seating.seat(id(4)), Faction::Observer);
    }

    #[test]
    fn vacated_seat_goes_to_the_next_connection() {
        let mut seating = Seating::new();
        seating.seat(id(1));
        seating.seat(id(2));
        seating.seat(id(3));
        seating.unseat(id(1));
        // The observer keeps watching; the newcomer gets the free seat.
        assert_eq!(seating.faction_of(id(3)), Ok(Faction::Observer));
        assert_eq!(seating.seat(id(4)), Faction::Player(Force::White));
        assert_eq!(seating.faction_of(id(2)), Ok(Faction::Player(Force::Black)));
    }

    #[test]
    fn observer_disconnect_does_not_touch_seats() {
        let mut seating = Seating::new();
        seating.seat(id(1));
        seating.seat(id(2));
        seating.seat(id(3));
        seating.unseat(id(3));
        assert_eq!(seating.faction_of(id(1)), Ok(Faction::Player(Force::White)));
        assert_eq!(seating.faction_of(id(2)), Ok(Faction::Player(Force::Black)));
        assert_eq!(seating.faction_of(id(3)), Err(UnknownParticipant(id(3))));
    }

    #[test]
    fn unknown_id_is_a_lookup_error() {
        let seating = Seating::new();
        assert_eq!(seating.faction_of(id(7)), Err(UnknownParticipant(id(7))));
    }
}
