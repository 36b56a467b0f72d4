use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::{GeoPoint, Participants, Person};
use crate::config::constant;
use crate::error::Error;

/// How many points become passengers and how many become drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSizes {
    pub passengers: usize,
    pub drivers: usize,
}

impl GroupSizes {
    /// Number of points needed to fill both groups.
    ///
    /// Saturates at `usize::MAX`, which no slice can satisfy.
    pub fn required(&self) -> usize {
        self.passengers.saturating_add(self.drivers)
    }
}

impl Default for GroupSizes {
    fn default() -> Self {
        GroupSizes {
            passengers: constant::PASSENGERS,
            drivers: constant::DRIVERS,
        }
    }
}

/// Puts `points` into a uniformly random order.
pub fn shuffle<R: Rng + ?Sized>(points: &mut [GeoPoint], rng: &mut R) {
    points.shuffle(rng);
    debug!("Shuffled {} points", points.len());
}

/// Splits `points` in their current order: the first `sizes.passengers`
/// become passengers, the following `sizes.drivers` become drivers and any
/// remaining points are left out.
///
/// Every person gets a fresh identifier from `next_id`.
pub fn partition<F>(points: &[GeoPoint], sizes: GroupSizes, mut next_id: F) -> Result<Participants, Error>
    where F: FnMut() -> Uuid
{
    let required = sizes.required();
    if points.len() < required {
        return Err(Error::InsufficientInput { required, available: points.len() });
    }

    let (passenger_points, rest) = points.split_at(sizes.passengers);
    let driver_points = &rest[..sizes.drivers];

    let passengers = passenger_points.iter()
        .map(|&point| Person::new(next_id(), point))
        .collect::<Vec<_>>();

    let drivers = driver_points.iter()
        .map(|&point| Person::new(next_id(), point))
        .collect::<Vec<_>>();

    debug!("Partitioned {} passengers and {} drivers out of {} points",
           passengers.len(), drivers.len(), points.len());

    Ok(Participants { passengers, drivers })
}
