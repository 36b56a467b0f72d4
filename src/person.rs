use uuid::Uuid;

use crate::GeoPoint;

/// A passenger or driver heading to `finish_point`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Person {
    pub id: Uuid,
    pub finish_point: GeoPoint,
}

impl Person {
    pub fn new(id: Uuid, finish_point: GeoPoint) -> Person {
        Person { id, finish_point }
    }
}

/// The two disjoint groups of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Participants {
    pub passengers: Vec<Person>,
    pub drivers: Vec<Person>,
}
