//! Form Lab - classroom form exercises served over HTTP
//!
//! This crate exposes a style cycler, a calculator, a greeter and a number
//! classifier both as a server-rendered form page and as a JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
