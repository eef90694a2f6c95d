//! Host side of the contagion simulation: the driver loop, input handling and
//! the wiring between the engine and the terminal renderer.

pub mod app;

pub use app::{App, RunSummary};
