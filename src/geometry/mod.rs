mod plane;
mod plucker;

pub use plane::Plane;
pub use plucker::Plucker;
