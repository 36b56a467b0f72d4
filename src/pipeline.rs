use std::io::Write;

use log::debug;
use rand::Rng;
use uuid::Uuid;

use crate::GeoPoint;
use crate::config::Config;
use crate::error::Error;
use crate::partition::{partition, shuffle};
use crate::rank::{suggest_all, Suggestion};
use crate::report::write_report;

/// Shuffles the loaded points, splits them into passengers and drivers and
/// ranks the drivers for every passenger.
pub fn suggest<R, F>(config: &Config, mut points: Vec<GeoPoint>, rng: &mut R, next_id: F) -> Result<Vec<Suggestion>, Error>
    where R: Rng + ?Sized, F: FnMut() -> Uuid
{
    shuffle(&mut points, rng);
    let participants = partition(&points, config.group_sizes, next_id)?;

    debug!("Ranking drivers by {} distance", config.distance);
    let distance = config.distance.strategy(&points);

    Ok(suggest_all(&participants, distance.as_ref()))
}

/// Runs [`suggest`] and writes the report to `out`.
///
/// Nothing is written unless every step before the report succeeded.
pub fn run<R, F, W>(config: &Config, points: Vec<GeoPoint>, rng: &mut R, next_id: F, out: W) -> Result<(), Error>
    where R: Rng + ?Sized, F: FnMut() -> Uuid, W: Write
{
    let suggestions = suggest(config, points, rng, next_id)?;
    write_report(out, &suggestions).map_err(Error::Output)
}
