use super::body::{Body, G};

/// Inverse-square gravitational acceleration at a given altitude above
/// the body's surface. Pure and total for all altitude >= 0.
pub fn gravity_at(body: &Body, altitude: f64) -> f64 {
    G * body.mass / (body.radius + altitude).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_everywhere() {
        let body = Body::kerbin();
        for alt in [0.0, 1.0, 70_000.0, 600_000.0, 86_000_000.0] {
            assert!(gravity_at(&body, alt) > 0.0);
        }
    }

    #[test]
    fn strictly_decreasing_with_altitude() {
        let body = Body::kerbin();
        let mut prev = gravity_at(&body, 0.0);
        for alt in [100.0, 10_000.0, 1_000_000.0, 50_000_000.0] {
            let g = gravity_at(&body, alt);
            assert!(g < prev, "gravity must fall with altitude, {g} >= {prev}");
            prev = g;
        }
    }

    #[test]
    fn quarter_strength_at_one_radius_up() {
        let body = Body::kerbin();
        let ratio = gravity_at(&body, body.radius) / gravity_at(&body, 0.0);
        assert!((ratio - 0.25).abs() < 1e-12);
    }
}
