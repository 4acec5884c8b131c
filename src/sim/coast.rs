use crate::physics::body::Body;
use crate::physics::gravity::gravity_at;

// ---------------------------------------------------------------------------
// Coast feasibility oracle
// ---------------------------------------------------------------------------

/// Safety bound on coast iterations. Velocities just under the escape
/// threshold can coast for a very long (but finite) time; past this many
/// 1-second steps the coast is reported as a failure rather than looping on.
pub const DEFAULT_MAX_COAST_STEPS: u64 = 50_000_000;

/// Result of one ballistic coast simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct CoastOutcome {
    pub escaped: bool,
    pub final_altitude: f64, // m
    pub coast_time: f64,     // s (one unit per step)
}

/// Simulate an unpowered coast from the given velocity and altitude until
/// the vehicle either stalls (velocity drops to zero) or passes the body's
/// SOI-exit altitude.
///
/// Fixed 1-second steps; velocity is decremented by local gravity first and
/// the altitude update then uses the already-updated velocity. This ordering
/// defines the feasibility boundary and must not be changed independently of
/// the ascent integrator, which deliberately uses the opposite ordering.
pub fn reaches_exit(body: &Body, velocity: f64, altitude: f64, max_steps: u64) -> CoastOutcome {
    let mut vel = velocity;
    let mut alt = altitude;
    let mut steps: u64 = 0;

    while vel > 0.0 && alt < body.soi_exit_altitude && steps < max_steps {
        vel -= gravity_at(body, alt);
        alt += vel;
        steps += 1;
    }

    CoastOutcome {
        escaped: alt >= body.soi_exit_altitude,
        final_altitude: alt,
        coast_time: steps as f64,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_velocity_never_escapes() {
        let body = Body::kerbin();
        let out = reaches_exit(&body, 0.0, 0.0, DEFAULT_MAX_COAST_STEPS);
        assert!(!out.escaped);
        assert_eq!(out.coast_time, 0.0);
    }

    #[test]
    fn well_above_escape_velocity_exits() {
        let body = Body::kerbin();
        let out = reaches_exit(&body, 5_000.0, 0.0, DEFAULT_MAX_COAST_STEPS);
        assert!(out.escaped);
        assert!(out.final_altitude >= body.soi_exit_altitude);
        assert!(out.coast_time > 0.0);
    }

    #[test]
    fn modest_velocity_stalls_below_exit() {
        let body = Body::kerbin();
        let out = reaches_exit(&body, 1_000.0, 0.0, DEFAULT_MAX_COAST_STEPS);
        assert!(!out.escaped);
        assert!(out.final_altitude < body.soi_exit_altitude);
        // It still climbed before stalling
        assert!(out.final_altitude > 0.0);
    }

    #[test]
    fn monotonic_in_velocity() {
        let body = Body::kerbin();
        let slow = reaches_exit(&body, 3_600.0, 0.0, DEFAULT_MAX_COAST_STEPS);
        assert!(slow.escaped);
        // Anything faster from the same altitude must also escape
        let fast = reaches_exit(&body, 4_500.0, 0.0, DEFAULT_MAX_COAST_STEPS);
        assert!(fast.escaped);
        assert!(fast.coast_time <= slow.coast_time);
    }

    #[test]
    fn starting_above_exit_altitude_escapes_immediately() {
        let body = Body::kerbin();
        let out = reaches_exit(&body, 10.0, body.soi_exit_altitude + 1.0, 100);
        assert!(out.escaped);
        assert_eq!(out.coast_time, 0.0);
    }

    #[test]
    fn cap_exhaustion_reports_failure() {
        let body = Body::kerbin();
        let out = reaches_exit(&body, 4_000.0, 0.0, 10);
        assert!(!out.escaped);
        assert_eq!(out.coast_time, 10.0);
    }
}
