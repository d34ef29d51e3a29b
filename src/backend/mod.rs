//! Reference canvas backends.
//!
//! Real hosts implement [`crate::canvas::Canvas`] on their own drawing
//! surface; the backend shipped here records draw commands for tests, demos,
//! and headless use.

pub mod recording;
