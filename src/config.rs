use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::DistancePolicy;
use crate::error::Error;
use crate::partition::GroupSizes;

pub mod constant {
    pub const PASSENGERS: usize = 10;
    pub const DRIVERS: usize = 10;
    pub const POINTS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/latlons");
}

pub const POINTS_VAR: &str = "CARPOOL_POINTS";
pub const DISTANCE_VAR: &str = "CARPOOL_DISTANCE";
pub const SEED_VAR: &str = "CARPOOL_SEED";
pub const PASSENGERS_VAR: &str = "CARPOOL_PASSENGERS";
pub const DRIVERS_VAR: &str = "CARPOOL_DRIVERS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub points_path: PathBuf,
    pub distance: DistancePolicy,
    /// Seed for a reproducible shuffle; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    pub group_sizes: GroupSizes,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            points_path: PathBuf::from(constant::POINTS_PATH),
            distance: DistancePolicy::default(),
            seed: None,
            group_sizes: GroupSizes::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Config::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup, falling back to the
    /// defaults for anything unset.
    pub fn from_vars<F>(var: F) -> Result<Config, Error>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Config::default();

        let points_path = var(POINTS_VAR).map_or(defaults.points_path, PathBuf::from);
        let distance = parse_var(&var, DISTANCE_VAR)?.unwrap_or(defaults.distance);
        let seed = parse_var(&var, SEED_VAR)?;
        let group_sizes = GroupSizes {
            passengers: parse_var(&var, PASSENGERS_VAR)?.unwrap_or(defaults.group_sizes.passengers),
            drivers: parse_var(&var, DRIVERS_VAR)?.unwrap_or(defaults.group_sizes.drivers),
        };

        Ok(Config { points_path, distance, seed, group_sizes })
    }
}

fn parse_var<F, T>(var: &F, key: &'static str) -> Result<Option<T>, Error>
    where F: Fn(&str) -> Option<String>, T: FromStr
{
    match var(key) {
        None => Ok(None),
        Some(value) => value.trim().parse::<T>()
            .map(Some)
            .map_err(|_| Error::Config { key, value }),
    }
}
