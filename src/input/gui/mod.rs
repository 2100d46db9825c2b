//! GUI input adapter for interactive exploration.
//!
//! winit owns the window, pixels blits composed frames and egui draws the
//! control window on top.

pub mod app;
pub mod commands;
