//! Interfaces between the session and whatever shows its frames.

pub mod presenter;
