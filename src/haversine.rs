use crate::Point;

/// Geocentric radius around Saint Petersburg, in kilometers.
pub const EARTH_RADIUS: f32 = 6360.;

pub fn haversine_distance(fix1: &dyn Point, fix2: &dyn Point) -> f32 {
    let phi1 = fix1.latitude().to_radians();
    let phi2 = fix2.latitude().to_radians();
    let delta_phi = (fix2.latitude() - fix1.latitude()).to_radians();
    let delta_rho = (fix2.longitude() - fix1.longitude()).to_radians();

    let a = (delta_phi / 2.).sin().powi(2) +
        phi1.cos() * phi2.cos() * (delta_rho / 2.).sin().powi(2);

    // rounding can push `a` a hair above 1 for antipodal points
    2. * EARTH_RADIUS * a.min(1.).sqrt().asin()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::GeoPoint;

    #[test]
    fn zero_for_identical_points() {
        let point = GeoPoint::new(59.9386, 30.3141);
        assert_eq!(haversine_distance(&point, &point), 0.);
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(59.9386, 30.3141);
        let b = GeoPoint::new(60.0026, 30.2954);
        assert_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a));
    }

    #[test]
    fn one_degree_along_a_meridian() {
        let a = GeoPoint::new(0., 0.);
        let b = GeoPoint::new(1., 0.);
        let expected = EARTH_RADIUS * 1f32.to_radians();
        assert_approx_eq!(haversine_distance(&a, &b), expected, 0.01);
    }

    #[test]
    fn across_saint_petersburg() {
        // Pulkovo airport to Lakhta Center
        let pulkovo = GeoPoint::new(59.8003, 30.2625);
        let lakhta = GeoPoint::new(59.9871, 30.1776);
        assert_approx_eq!(haversine_distance(&pulkovo, &lakhta), 21.2, 0.2);
    }

    #[test]
    fn antipodal_points_are_half_a_circumference_apart() {
        let a = GeoPoint::new(0., 0.);
        let b = GeoPoint::new(0., 180.);
        assert_approx_eq!(haversine_distance(&a, &b), std::f32::consts::PI * EARTH_RADIUS, 0.5);
    }
}
