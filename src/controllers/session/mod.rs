//! The visualization session: coordinate inputs, the latest result and frame
//! presentation, driven by [`ExplorerEvent`](crate::controllers::interactive::ExplorerEvent)s.

pub mod coordinate_inputs;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
mod session;

pub use session::{READY_STATUS, VisualizationSession};
