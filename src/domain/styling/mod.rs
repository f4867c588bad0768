//! Styling Module - rotating a fixed palette across repeated lines.

mod cycler;
mod errors;
mod palette;

pub use cycler::{StyleCycler, StyledLine};
pub use errors::StyleError;
pub use palette::{StyleName, PALETTE, PALETTE_SIZE};
