use thiserror::Error;

use crate::physics::body::Body;
use crate::physics::gravity::gravity_at;
use crate::vehicle::design::Design;
use crate::vehicle::stage::{delta_v, Stage, StageError};

use super::coast::{reaches_exit, DEFAULT_MAX_COAST_STEPS};

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub substeps_per_sec: u32, // burn integration granularity
    pub oracle_interval: u32,  // consult the coast oracle every N substeps
    pub max_coast_steps: u64,  // iteration cap for each coast simulation
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            substeps_per_sec: 10,
            oracle_interval: 10,
            max_coast_steps: DEFAULT_MAX_COAST_STEPS,
        }
    }
}

// ---------------------------------------------------------------------------
// Vehicle state
// ---------------------------------------------------------------------------

/// Mutable state of the vehicle during one simulation run. Owned by the run;
/// altitude and velocity carry across staging, mass resets at each ignition.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    pub altitude: f64, // m above surface
    pub velocity: f64, // m/s, radial
    pub mass: f64,     // kg, current total
}

// ---------------------------------------------------------------------------
// Outcome and errors
// ---------------------------------------------------------------------------

/// Terminal result of an ascent simulation. Failing to reach SOI-exit
/// velocity is an expected outcome, reported as data.
#[derive(Debug, Clone, PartialEq)]
pub enum SimOutcome {
    /// Exit velocity reached; `delta_v` is the propulsive capability left
    /// in the partially-burned current stage plus all unfired stages.
    Escaped { delta_v: f64 },
    /// Every stage burned out without reaching exit velocity. Carries the
    /// altitude and duration of the final diagnostic coast.
    Exhausted { final_altitude: f64, coast_time: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("stage {index}: {source}")]
    InvalidStage { index: usize, source: StageError },
    #[error("design has no stages")]
    NoStages,
    /// Wet mass at or below dry mass in the delta-v accountant. The stage
    /// invariants rule this out, so hitting it means the mass bookkeeping
    /// itself went wrong.
    #[error("delta-v bookkeeping fault: wet mass {wet} kg <= dry mass {dry} kg")]
    MassBookkeeping { wet: f64, dry: f64 },
}

// ---------------------------------------------------------------------------
// Observation seam
// ---------------------------------------------------------------------------

/// Passive hooks into a running simulation, for progress tables and
/// telemetry. All methods default to no-ops; the core never prints.
pub trait Observer {
    /// A stage (by firing-order index) is about to ignite.
    fn on_ignition(&mut self, _stage_idx: usize, _stage: &Stage, _state: &VehicleState) {}

    /// State after one integration substep. `time_in_stage` is seconds
    /// since this stage ignited; `twr` is thrust over current weight.
    fn on_step(
        &mut self,
        _stage_idx: usize,
        _substep: usize,
        _time_in_stage: f64,
        _state: &VehicleState,
        _twr: f64,
    ) {
    }

    /// The coast oracle confirmed SOI exit is reachable from here.
    fn on_escape(&mut self, _stage_idx: usize, _time_in_stage: f64, _state: &VehicleState) {}
}

/// Observer that ignores everything (used by [`simulate`]).
pub struct NullObserver;

impl Observer for NullObserver {}

// ---------------------------------------------------------------------------
// Delta-v accounting
// ---------------------------------------------------------------------------

/// Remaining delta-v at the moment of success: rocket equation over the
/// firing stage's current (partially burned) mass down to its dry mass,
/// plus the full contribution of every stage that has not ignited yet.
pub fn remaining_delta_v(
    firing: &Stage,
    current_mass: f64,
    unfired: &[Stage],
) -> Result<f64, SimError> {
    if current_mass <= firing.end_mass {
        return Err(SimError::MassBookkeeping {
            wet: current_mass,
            dry: firing.end_mass,
        });
    }
    let mut dv = delta_v(firing.isp, current_mass, firing.end_mass);
    for s in unfired {
        dv += s.full_delta_v();
    }
    Ok(dv)
}

// ---------------------------------------------------------------------------
// Stage ascent integrator
// ---------------------------------------------------------------------------

enum StageRun {
    Escaped { delta_v: f64 },
    Completed,
}

/// Integrate one stage's burn. Fixed substeps; per substep the altitude is
/// advanced with the previous velocity, then velocity with the net
/// thrust-minus-gravity acceleration, then mass by a constant decrement
/// (linear propellant depletion). The opposite update ordering from the
/// coast oracle, on purpose.
fn run_stage(
    body: &Body,
    config: &SimConfig,
    stage_idx: usize,
    stage: &Stage,
    unfired: &[Stage],
    state: &mut VehicleState,
    observer: &mut dyn Observer,
) -> Result<StageRun, SimError> {
    let substeps_per_sec = config.substeps_per_sec.max(1);
    let oracle_interval = (config.oracle_interval as usize).max(1);
    let dt = 1.0 / substeps_per_sec as f64;
    let total_substeps = ((stage.burn_time * substeps_per_sec as f64).round() as usize).max(1);
    let mass_step = stage.propellant_mass() / total_substeps as f64;

    // Mass resets at ignition: start_mass already excludes jettisoned stages.
    state.mass = stage.start_mass;
    observer.on_ignition(stage_idx, stage, state);

    for substep in 0..total_substeps {
        let g = gravity_at(body, state.altitude);

        state.altitude += state.velocity * dt;
        let accel = (stage.thrust - state.mass * g) / state.mass;
        state.velocity += accel * dt;
        let twr = stage.thrust / (state.mass * g);
        state.mass -= mass_step;

        observer.on_step(stage_idx, substep, substep as f64 * dt, state, twr);

        if substep % oracle_interval == 0 {
            let coast = reaches_exit(body, state.velocity, state.altitude, config.max_coast_steps);
            if coast.escaped {
                let dv = remaining_delta_v(stage, state.mass, unfired)?;
                observer.on_escape(stage_idx, substep as f64 * dt, state);
                return Ok(StageRun::Escaped { delta_v: dv });
            }
        }
    }

    Ok(StageRun::Completed)
}

// ---------------------------------------------------------------------------
// Ascent orchestrator
// ---------------------------------------------------------------------------

/// Simulate a full ascent with a custom observer. Stages run in firing
/// order (the reverse of the design's assembly order); altitude and
/// velocity carry over between stages.
pub fn simulate_with(
    body: &Body,
    design: &Design,
    config: &SimConfig,
    observer: &mut dyn Observer,
) -> Result<SimOutcome, SimError> {
    design
        .validate()
        .map_err(|(index, source)| SimError::InvalidStage { index, source })?;

    let order = design.firing_order();
    if order.is_empty() {
        return Err(SimError::NoStages);
    }

    let mut state = VehicleState {
        altitude: 0.0,
        velocity: 0.0,
        mass: order[0].start_mass,
    };

    for (sno, stage) in order.iter().enumerate() {
        let unfired = &order[sno + 1..];
        match run_stage(body, config, sno, stage, unfired, &mut state, observer)? {
            StageRun::Escaped { delta_v } => return Ok(SimOutcome::Escaped { delta_v }),
            StageRun::Completed => {}
        }
    }

    // All stages burned out short of exit velocity. One more coast gives
    // the diagnostic altitude and duration; the outcome stays Exhausted.
    let coast = reaches_exit(body, state.velocity, state.altitude, config.max_coast_steps);
    Ok(SimOutcome::Exhausted {
        final_altitude: coast.final_altitude,
        coast_time: coast.coast_time,
    })
}

/// Simulate without observation (convenience wrapper).
pub fn simulate(body: &Body, design: &Design, config: &SimConfig) -> Result<SimOutcome, SimError> {
    simulate_with(body, design, config, &mut NullObserver)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
