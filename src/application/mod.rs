//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer sits between the HTTP adapters and the pure domain components.
//! Handlers enforce configured limits and log each operation.

pub mod handlers;

pub use handlers::{
    ClassifyNumberHandler, ClassifyNumberQuery, ComputeArithmeticCommand,
    ComputeArithmeticHandler, CycleStylesCommand, CycleStylesHandler, CycleStylesResult,
    GreetCommand, GreetHandler,
};
