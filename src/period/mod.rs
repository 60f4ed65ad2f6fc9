//! Period measurement and theoretical period estimates

mod elliptic;
mod estimator;

pub use elliptic::*;
pub use estimator::*;
