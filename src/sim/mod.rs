pub mod coast;
pub mod runner;

pub use coast::{reaches_exit, CoastOutcome, DEFAULT_MAX_COAST_STEPS};
pub use runner::{
    remaining_delta_v, simulate, simulate_with, NullObserver, Observer, SimConfig, SimError,
    SimOutcome, VehicleState,
};
