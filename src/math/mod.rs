//! Mathematical utilities: design-matrix transforms and the normal-equations solve.

pub mod design;
pub mod solve;

pub use design::*;
pub use solve::*;
