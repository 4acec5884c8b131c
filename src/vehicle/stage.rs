use thiserror::Error;

use crate::physics::body::STANDARD_GRAVITY;

// ---------------------------------------------------------------------------
// Stage definition (one stage of a multi-stage rocket)
// ---------------------------------------------------------------------------

/// One stage of a staged vehicle. Masses are for the whole remaining
/// vehicle: `start_mass` includes this stage's propellant plus everything
/// that fires after it; `end_mass` is the same stack with this stage's
/// propellant spent.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub start_mass: f64, // kg, at ignition
    pub end_mass: f64,   // kg, after full burn
    pub thrust: f64,     // N, constant over the burn
    pub isp: f64,        // s, vacuum-reference specific impulse
    pub burn_time: f64,  // s, nominal full-burn duration
}

/// A stage parameter that violates the `start_mass > end_mass > 0`,
/// `thrust > 0`, `isp > 0`, `burn_time > 0` invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StageError {
    #[error("end mass {0} kg must be positive")]
    NonPositiveEndMass(f64),
    #[error("start mass {start} kg must exceed end mass {end} kg")]
    NoPropellant { start: f64, end: f64 },
    #[error("thrust {0} N must be positive")]
    NonPositiveThrust(f64),
    #[error("specific impulse {0} s must be positive")]
    NonPositiveIsp(f64),
    #[error("burn time {0} s must be positive")]
    NonPositiveBurnTime(f64),
}

impl Stage {
    /// Check the mass/thrust/isp/burn-time invariants before a stage is
    /// allowed anywhere near the integrator. Non-finite values trip the
    /// same checks.
    pub fn validate(&self) -> Result<(), StageError> {
        if !(self.end_mass > 0.0) {
            return Err(StageError::NonPositiveEndMass(self.end_mass));
        }
        if !(self.start_mass > self.end_mass) {
            return Err(StageError::NoPropellant {
                start: self.start_mass,
                end: self.end_mass,
            });
        }
        if !(self.thrust > 0.0) {
            return Err(StageError::NonPositiveThrust(self.thrust));
        }
        if !(self.isp > 0.0) {
            return Err(StageError::NonPositiveIsp(self.isp));
        }
        if !(self.burn_time > 0.0) {
            return Err(StageError::NonPositiveBurnTime(self.burn_time));
        }
        Ok(())
    }

    pub fn propellant_mass(&self) -> f64 {
        self.start_mass - self.end_mass
    }

    /// Thrust-to-weight ratio at ignition under the given local gravity.
    pub fn twr(&self, gravity: f64) -> f64 {
        self.thrust / (self.start_mass * gravity)
    }

    /// Ideal delta-v of the full burn (Tsiolkovsky rocket equation).
    pub fn full_delta_v(&self) -> f64 {
        delta_v(self.isp, self.start_mass, self.end_mass)
    }
}

/// Tsiolkovsky rocket equation: `isp * g0 * ln(wet / dry)`.
/// Uses the fixed standard-gravity reference, not the body's surface value.
pub fn delta_v(isp: f64, wet_mass: f64, dry_mass: f64) -> f64 {
    isp * STANDARD_GRAVITY * (wet_mass / dry_mass).ln()
}

// ---------------------------------------------------------------------------
// Stage builder
// ---------------------------------------------------------------------------

pub struct StageBuilder {
    start_mass: f64,
    end_mass: f64,
    thrust: f64,
    isp: f64,
    burn_time: f64,
}

impl StageBuilder {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            start_mass: 10_000.0,
            end_mass: 5_000.0,
            thrust: 200_000.0,
            isp: 300.0,
            burn_time: 60.0,
        }
    }

    pub fn start_mass(mut self, v: f64) -> Self { self.start_mass = v; self }
    pub fn end_mass(mut self, v: f64) -> Self { self.end_mass = v; self }
    pub fn thrust(mut self, v: f64) -> Self { self.thrust = v; self }
    pub fn isp(mut self, v: f64) -> Self { self.isp = v; self }
    pub fn burn_time(mut self, v: f64) -> Self { self.burn_time = v; self }

    pub fn build(self) -> Stage {
        Stage {
            start_mass: self.start_mass,
            end_mass: self.end_mass,
            thrust: self.thrust,
            isp: self.isp,
            burn_time: self.burn_time,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
