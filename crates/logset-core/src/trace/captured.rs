//! Captured error with its frame chain

use std::path::PathBuf;

use super::frame::Frame;

/// A captured failure: a message plus its call-stack chain
///
/// Frames are ordered innermost first (the frame where the failure
/// occurred), outermost last. The chain is finite and walked front-to-back
/// once per log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
    message: String,
    frames: Vec<Frame>,
}

impl CapturedError {
    /// Create a captured error with an empty frame chain
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            frames: Vec::new(),
        }
    }

    /// Append a frame to the chain (innermost first)
    pub fn frame(mut self, line: u32, function: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        self.frames.push(Frame::new(line, function, file));
        self
    }

    /// Append an already-built frame to the chain
    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// The failure message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The frame chain, innermost first
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// Number of frames in the chain
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_keep_capture_order() {
        let err = CapturedError::new("boom")
            .frame(10, "inner", "src/a.rs")
            .frame(20, "outer", "src/b.rs");

        let functions: Vec<_> = err.frames().map(Frame::function).collect();
        assert_eq!(functions, ["inner", "outer"]);
        assert_eq!(err.frame_count(), 2);
    }

    #[test]
    fn test_push_frame_appends() {
        let mut err = CapturedError::new("boom");
        err.push_frame(Frame::new(1, "f", "a.rs"));
        assert_eq!(err.frame_count(), 1);
        assert_eq!(err.message(), "boom");
    }
}
