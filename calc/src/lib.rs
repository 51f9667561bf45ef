//! The calculator kernel and its registry.
//!
//! [`kernel::Calculator`] is the interface every number kind is built on:
//! arbitrary-precision arithmetic over canonical signed decimal digit
//! strings. [`portable::PortableCalculator`] implements it with pure-Rust
//! block arithmetic; [`native::NativeCalculator`] implements it with a
//! machine-word fast path that falls back to the portable implementation.
//! [`registry`] selects between them.

pub mod kernel;
pub mod native;
pub mod portable;
pub mod registry;

pub use kernel::{Calculator, Pair};
pub use native::NativeCalculator;
pub use portable::PortableCalculator;
pub use registry::{calculator, clear_override, set_calculator};
