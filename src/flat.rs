use std::fmt;

use flat_projection::FlatProjection;
use ord_subset::OrdSubsetIterExt;

use crate::Point;
use crate::distance::Distance;

/// Distance on a flat surface tangent to the center of a point set.
///
/// Within a city the error against the great-circle distance is negligible and
/// each call avoids the trigonometry of the haversine formula.
pub struct FlatDistance {
    center: (f32, f32),
    proj: FlatProjection<f32>,
}

impl FlatDistance {
    pub fn new(center_lat: f32, center_lon: f32) -> FlatDistance {
        FlatDistance {
            center: (center_lat, center_lon),
            proj: FlatProjection::new(center_lon, center_lat),
        }
    }

    /// Centers the projection on the bounding box of `points`.
    ///
    /// Returns `None` for an empty slice.
    pub fn for_points<T: Point>(points: &[T]) -> Option<FlatDistance> {
        let center_lat = bounding_center(points.iter().map(|p| p.latitude()))?;
        let center_lon = bounding_center(points.iter().map(|p| p.longitude()))?;
        Some(FlatDistance::new(center_lat, center_lon))
    }

    #[cfg(test)]
    fn center(&self) -> (f32, f32) {
        self.center
    }
}

/// Midpoint between the smallest and largest coordinate.
fn bounding_center<I>(coordinates: I) -> Option<f32>
    where I: Iterator<Item = f32> + Clone
{
    let min = coordinates.clone().ord_subset_min()?;
    let max = coordinates.ord_subset_max()?;
    Some((min + max) / 2.)
}

impl Distance for FlatDistance {
    fn distance(&self, a: &dyn Point, b: &dyn Point) -> f32 {
        let a = self.proj.project(a.longitude(), a.latitude());
        let b = self.proj.project(b.longitude(), b.latitude());
        a.distance(&b)
    }
}

impl fmt::Debug for FlatDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatDistance").field("center", &self.center).finish()
    }
}
