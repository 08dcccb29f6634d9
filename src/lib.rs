//! borel - set algebra over the unit interval
//!
//! Builds set expressions over `[0, 1]` (complements, finite unions and
//! intersections of intervals), reduces them to a canonical sorted list of
//! disjoint intervals, and closes finite families of sets under complement
//! and union to obtain the sigma-algebra they generate.
//!
//! ```
//! use borel::interval::Interval;
//! use borel::sets::BorelSet;
//!
//! let set = !BorelSet::interval(Interval::closed(0.0, 0.5));
//! assert_eq!(set.to_string(), "Not{[0,0.5]}");
//! assert_eq!(set.to_intervals().unwrap().to_string(), "{(0.5,1]}");
//! ```

pub mod family;
pub mod interval;
pub mod sets;
pub mod sigma;

pub use family::Family;
pub use interval::{Endpoint, Interval, IntervalUnion};
pub use sets::{BorelError, BorelSet};
pub use sigma::{generate_sigma_algebra, ClosureConfig, ClosureError, SigmaAlgebraGenerator};
