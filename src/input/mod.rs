//! Input adapters for the raster explorer.
//!
//! Adapters here receive input from a source (currently only a desktop
//! window) and translate it into [`ExplorerEvent`](crate::controllers::interactive::ExplorerEvent)s.

#[cfg(feature = "gui")]
pub mod gui;
