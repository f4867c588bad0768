//! Application handlers.
//!
//! Command and query handlers that apply service policy and delegate to the
//! domain components.

pub mod classify_number;
pub mod compute_arithmetic;
pub mod cycle_styles;
pub mod greet;

pub use classify_number::{ClassifyNumberHandler, ClassifyNumberQuery};
pub use compute_arithmetic::{ComputeArithmeticCommand, ComputeArithmeticHandler};
pub use cycle_styles::{CycleStylesCommand, CycleStylesHandler, CycleStylesResult};
pub use greet::{GreetCommand, GreetHandler};
