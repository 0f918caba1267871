//! Trace block rendering

use std::fmt::Write;

use super::captured::CapturedError;

/// Separator appended after every frame except the last
const FRAME_SEPARATOR: &str = " -->";

/// Render a captured error's frame chain as an aligned trace block.
///
/// The first line is the preamble `Original Error: {message} in:`; each
/// frame follows on its own line, indented by the preamble's length so the
/// stack dump lines up visually. Frames appear innermost to outermost. The
/// trailing ` -->` separator is trimmed from the last frame and the block
/// ends with exactly one newline.
///
/// ```text
/// Original Error: connection refused in:
///                                        - Line 42 at connect of file src/net.rs -->
///                                        - Line 17 at handle_request of file src/server.rs
/// ```
pub fn render(error: &CapturedError) -> String {
    let mut block = format!("Original Error: {} in:", error.message());
    let indent = " ".repeat(block.chars().count());

    for frame in error.frames() {
        let _ = write!(
            block,
            "\n{}- Line {} at {} of file {}{}",
            indent,
            frame.line(),
            frame.function(),
            frame.file().display(),
            FRAME_SEPARATOR,
        );
    }

    if block.ends_with(FRAME_SEPARATOR) {
        block.truncate(block.len() - FRAME_SEPARATOR.len());
    }
    block.push('\n');
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_frames_innermost_first() {
        let err = CapturedError::new("boom")
            .frame(10, "inner", "src/a.rs")
            .frame(20, "mid", "src/b.rs")
            .frame(30, "outer", "src/c.rs");

        let block = render(&err);
        let lines: Vec<_> = block.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Original Error: boom in:");
        assert!(lines[1].trim_start().starts_with("- Line 10 at inner of file src/a.rs"));
        assert!(lines[2].trim_start().starts_with("- Line 20 at mid of file src/b.rs"));
        assert!(lines[3].trim_start().starts_with("- Line 30 at outer of file src/c.rs"));
    }

    #[test]
    fn test_continuation_lines_align_with_preamble() {
        let err = CapturedError::new("boom").frame(1, "f", "a.rs").frame(2, "g", "b.rs");
        let block = render(&err);
        let preamble_len = "Original Error: boom in:".len();
        for line in block.lines().skip(1) {
            let indent = line.len() - line.trim_start().len();
            assert_eq!(indent, preamble_len);
        }
    }

    #[test]
    fn test_trailing_separator_trimmed() {
        let err = CapturedError::new("boom").frame(1, "f", "a.rs").frame(2, "g", "b.rs");
        let block = render(&err);
        let lines: Vec<_> = block.lines().collect();
        assert!(lines[1].ends_with(" -->"));
        assert!(!lines[2].ends_with(" -->"));
    }

    #[test]
    fn test_single_trailing_newline() {
        let err = CapturedError::new("boom").frame(1, "f", "a.rs");
        let block = render(&err);
        assert!(block.ends_with('\n'));
        assert!(!block.ends_with("\n\n"));
    }

    #[test]
    fn test_empty_chain_renders_preamble_only() {
        let block = render(&CapturedError::new("boom"));
        assert_eq!(block, "Original Error: boom in:\n");
    }
}
