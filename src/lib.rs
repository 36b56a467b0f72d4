#[macro_use] extern crate cfg_if;

extern crate failure;
extern crate flat_projection;
extern crate ord_subset;

#[cfg(feature = "rayon")]
extern crate rayon;

pub mod config;
pub mod distance;
pub mod error;
pub mod euclidean;
pub mod flat;
pub mod haversine;
pub mod parse;
pub mod partition;
pub mod person;
pub mod pipeline;
pub mod point;
pub mod rank;
pub mod report;

mod parallel;

pub use crate::distance::{Distance, DistancePolicy};
pub use crate::error::Error;
pub use crate::person::{Participants, Person};
pub use crate::point::{GeoPoint, Point};
