pub mod body;
pub mod gravity;

pub use body::{Body, G, STANDARD_GRAVITY};
pub use gravity::gravity_at;
