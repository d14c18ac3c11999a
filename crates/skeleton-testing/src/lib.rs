//! Fixtures for testing skeleton screens: a preloaded template registry,
//! view tree builders, a fixed-size real adapter and a list host that lets a
//! test pretend to be in the middle of a layout pass.

pub mod fixtures;
pub mod list;

pub use fixtures::*;
pub use list::*;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::list::*;
}
