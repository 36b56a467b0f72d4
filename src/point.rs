use std::fmt;
use std::str::FromStr;

use crate::error::ParseFailure;

pub trait Point: Sync {
    fn latitude(&self) -> f32;
    fn longitude(&self) -> f32;
}

/// An immutable latitude/longitude pair in degrees.
///
/// The text form is `"<latitude>, <longitude>"`, which is both what the input
/// resource contains and what the report prints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f32,
    pub longitude: f32,
}

impl GeoPoint {
    pub fn new(latitude: f32, longitude: f32) -> GeoPoint {
        GeoPoint { latitude, longitude }
    }
}

impl Point for GeoPoint {
    fn latitude(&self) -> f32 {
        self.latitude
    }
    fn longitude(&self) -> f32 {
        self.longitude
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}, {:?}", self.latitude, self.longitude)
    }
}

impl FromStr for GeoPoint {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split(',').map(str::trim).collect::<Vec<_>>();
        if tokens.len() != 2 {
            return Err(ParseFailure::TokenCount(tokens.len()));
        }

        let latitude = parse_coordinate(tokens[0])?;
        let longitude = parse_coordinate(tokens[1])?;

        Ok(GeoPoint { latitude, longitude })
    }
}

fn parse_coordinate(token: &str) -> Result<f32, ParseFailure> {
    token.parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseFailure::InvalidNumber(token.to_owned()))
}
