pub mod physics;
pub mod score;
pub mod sim;
pub mod vehicle;

// Flat re-exports for the common types
pub mod types {
    pub use crate::physics::body::{Body, G, STANDARD_GRAVITY};
    pub use crate::sim::{SimConfig, SimError, SimOutcome};
    pub use crate::vehicle::design::Design;
    pub use crate::vehicle::stage::{Stage, StageBuilder, StageError};
}
