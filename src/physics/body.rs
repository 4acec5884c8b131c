// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G: f64 = 6.67e-11; // gravitational constant, m^3 kg^-1 s^-2
pub const STANDARD_GRAVITY: f64 = 9.8; // rocket-equation reference, m/s^2

// ---------------------------------------------------------------------------
// Parent body parameters
// ---------------------------------------------------------------------------

/// Parameters of the body being launched from. Passed explicitly to the
/// gravity model and the simulator so other bodies need no code changes.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub radius: f64,            // m
    pub mass: f64,              // kg
    pub soi_exit_altitude: f64, // m — coasting past this counts as escape
}

impl Body {
    /// Kerbin, the reference body for qualification flights.
    pub fn kerbin() -> Self {
        Self {
            name: "Kerbin".into(),
            radius: 600_000.0,
            mass: 5.29e22,
            soi_exit_altitude: 86_000_000.0,
        }
    }

    /// Surface gravitational acceleration, m/s^2.
    pub fn surface_gravity(&self) -> f64 {
        super::gravity::gravity_at(self, 0.0)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::kerbin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kerbin_surface_gravity_near_9_8() {
        let g = Body::kerbin().surface_gravity();
        assert!((g - 9.8).abs() < 0.1, "Kerbin surface gravity was {g}");
    }
}
