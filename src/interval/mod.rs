//! Endpoints, intervals and canonical interval unions over `[0, 1]`.

mod endpoint;
#[allow(clippy::module_inception)]
mod interval;
mod interval_union;

pub use endpoint::Endpoint;
pub use interval::Interval;
pub use interval_union::IntervalUnion;
