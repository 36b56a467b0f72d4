use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::{GeoPoint, Point};
use crate::euclidean::euclidean_distance;
use crate::flat::FlatDistance;
use crate::haversine::haversine_distance;

/// A way of measuring how far apart two points are.
///
/// Implementations must be symmetric and return zero for identical points.
pub trait Distance: Sync {
    fn distance(&self, a: &dyn Point, b: &dyn Point) -> f32;
}

/// Great-circle distance in kilometers, see [`haversine_distance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl Distance for Haversine {
    fn distance(&self, a: &dyn Point, b: &dyn Point) -> f32 {
        haversine_distance(a, b)
    }
}

/// Planar distance in coordinate units, see [`euclidean_distance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Distance for Euclidean {
    fn distance(&self, a: &dyn Point, b: &dyn Point) -> f32 {
        euclidean_distance(a, b)
    }
}

/// Selects one of the built-in [`Distance`] implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistancePolicy {
    Haversine,
    Euclidean,
    Flat,
}

impl Default for DistancePolicy {
    fn default() -> Self {
        DistancePolicy::Haversine
    }
}

impl DistancePolicy {
    /// Builds the strategy. `points` is only consulted by the flat projection,
    /// which centers itself on them.
    pub fn strategy(self, points: &[GeoPoint]) -> Box<dyn Distance> {
        match self {
            DistancePolicy::Haversine => Box::new(Haversine),
            DistancePolicy::Euclidean => Box::new(Euclidean),
            DistancePolicy::Flat => {
                let flat = FlatDistance::for_points(points).unwrap_or_else(|| {
                    warn!("No points to center the flat projection on, using 0, 0");
                    FlatDistance::new(0., 0.)
                });
                Box::new(flat)
            }
        }
    }
}

impl FromStr for DistancePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "haversine" => Ok(DistancePolicy::Haversine),
            "euclidean" => Ok(DistancePolicy::Euclidean),
            "flat" => Ok(DistancePolicy::Flat),
            _ => Err(()),
        }
    }
}

impl fmt::Display for DistancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DistancePolicy::Haversine => "haversine",
            DistancePolicy::Euclidean => "euclidean",
            DistancePolicy::Flat => "flat",
        };
        f.write_str(name)
    }
}
