//! Set expression trees and the normalizer that reduces them to canonical form.

pub mod error;
pub mod node;
pub mod operations;
pub mod tree;

pub use error::BorelError;
pub use node::BorelSet;
