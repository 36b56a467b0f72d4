use log::trace;
use ord_subset::OrdVar;

use crate::{Distance, Participants, Person};
use crate::parallel::map_in_order;

/// One passenger together with every driver, nearest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub passenger: Person,
    pub drivers: Vec<Person>,
}

/// Orders `drivers` by ascending distance between their finish point and the
/// finish point of `passenger`.
///
/// The sort is stable: equidistant drivers keep their input order. Drivers
/// whose distance is not a number end up last.
pub fn suggest_drivers(passenger: &Person, drivers: &[Person], distance: &dyn Distance) -> Vec<Person> {
    let mut ranked = drivers.to_vec();
    ranked.sort_by_key(|driver| {
        let key = OrdVar::new_checked(distance.distance(&passenger.finish_point, &driver.finish_point));
        (key.is_none(), key)
    });
    ranked
}

/// Ranks the full driver group for every passenger, in passenger order.
pub fn suggest_all(participants: &Participants, distance: &dyn Distance) -> Vec<Suggestion> {
    map_in_order(&participants.passengers, |passenger| {
        trace!("Ranking {} drivers for passenger {}", participants.drivers.len(), passenger.id);
        Suggestion {
            passenger: *passenger,
            drivers: suggest_drivers(passenger, &participants.drivers, distance),
        }
    })
}
