//! Domain layer containing the form components and their shared types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (value objects, input parsing, errors)
//! - `styling` - Style cycler rotating a fixed palette over repeated lines
//! - `arithmetic` - Calculator for the four basic operations
//! - `greeting` - Greeter for a submitted name
//! - `classification` - Sign and magnitude classification of integers
//!
//! Every component is a pure, stateless function of its input. No ports are
//! needed since nothing here performs I/O.

pub mod arithmetic;
pub mod classification;
pub mod foundation;
pub mod greeting;
pub mod styling;
