use crate::Point;

/// Treats latitude and longitude as plain cartesian coordinates.
pub fn euclidean_distance(p1: &dyn Point, p2: &dyn Point) -> f32 {
    let dx = p2.latitude() - p1.latitude();
    let dy = p2.longitude() - p1.longitude();
    dx.hypot(dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoPoint;

    #[test]
    fn pythagorean_triple() {
        let origin = GeoPoint::new(0., 0.);
        assert_eq!(euclidean_distance(&origin, &GeoPoint::new(3., 4.)), 5.);
        assert_eq!(euclidean_distance(&origin, &GeoPoint::new(0., 3.)), 3.);
        assert_eq!(euclidean_distance(&origin, &GeoPoint::new(4., 0.)), 4.);
    }

    #[test]
    fn symmetric_and_zero_on_itself() {
        let a = GeoPoint::new(-1.5, 2.25);
        let b = GeoPoint::new(7., -3.);
        assert_eq!(euclidean_distance(&a, &b), euclidean_distance(&b, &a));
        assert_eq!(euclidean_distance(&a, &a), 0.);
    }
}
