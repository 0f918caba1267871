//! Captured errors and call-stack trace rendering
//!
//! A [`CapturedError`] is a read-only snapshot of a failure: a message plus
//! a finite chain of [`Frame`]s ordered innermost first. [`render`] turns
//! the chain into an aligned multi-line trace block for a log record.

mod captured;
mod frame;
mod render;

pub use captured::CapturedError;
pub use frame::Frame;
pub use render::render;
