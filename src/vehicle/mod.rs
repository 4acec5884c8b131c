pub mod design;
pub mod stage;

pub use design::{Design, DesignBuilder};
pub use stage::{delta_v, Stage, StageBuilder, StageError};
