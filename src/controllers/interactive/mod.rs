//! Pointer-driven view control.
//!
//! The controller consumes [`ExplorerEvent`]s and mutates the camera; it never
//! renders. The session decides what to do with the redraw flag it returns.

mod controller;
pub mod events;

pub use controller::InteractiveController;
pub use events::explorer_event::ExplorerEvent;
