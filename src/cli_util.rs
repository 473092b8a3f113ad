use std::io::{self, Write};

use crate::error::MachineError;
use crate::program::Program;

/// Pretty-print a structured [`MachineError`] with caret positioning.
/// If `program_name` is `Some("bfi")`, prefix messages with "bfi: ..." for
/// CLI run mode.
///
/// Error positions index the sanitized instruction sequence; they are mapped
/// back through `program` to char offsets in the raw source so the caret
/// lands on the original text, comments included.
pub fn print_machine_error(
    program_name: Option<&str>,
    src: &str,
    program: &Program,
    err: &MachineError,
) {
    let prefixed = |msg: &str| {
        if let Some(p) = program_name {
            format!("{p}: {msg}")
        } else {
            msg.to_string()
        }
    };
    let offset = |ip: usize| program.source_offset(ip).unwrap_or(0);

    match err {
        MachineError::UnbalancedBrackets { ip, kind } => {
            let msg = prefixed(&format!("Parse error: unmatched bracket {kind}"));
            print_error_with_context(&msg, src, offset(*ip));
        }
        MachineError::PointerOverflow { ip, ptr } => {
            let msg = prefixed(&format!("Runtime error: pointer overflow (ptr={ptr})"));
            print_error_with_context(&msg, src, offset(*ip));
        }
        MachineError::PointerUnderflow { ip } => {
            let msg = prefixed("Runtime error: pointer underflow");
            print_error_with_context(&msg, src, offset(*ip));
        }
        MachineError::EndOfInput { ip } => {
            let msg = prefixed("Runtime error: input closed");
            print_error_with_context(&msg, src, offset(*ip));
        }
        MachineError::Io { ip, source } => {
            let msg = prefixed(&format!("I/O error: {source}"));
            print_error_with_context(&msg, src, offset(*ip));
        }
        other => {
            // Abort signals carry no source position.
            eprintln!("{}", prefixed(&other.to_string()));
            let _ = io::stderr().flush();
        }
    }
}

/// Print a concise error with the source offset and a caret context window,
/// working with UTF-8 by slicing using char indices.
pub fn print_error_with_context(prefix: &str, src: &str, pos: usize) {
    eprintln!("{prefix} at source offset {pos}");

    // Show a short window around the position for context
    const WINDOW_CHARS: usize = 32;

    let total_chars = src.chars().count();
    let start_char = pos.saturating_sub(WINDOW_CHARS);
    let end_char = (pos + WINDOW_CHARS + 1).min(total_chars);

    let start_byte = char_to_byte_index(src, start_char);
    let end_byte = char_to_byte_index(src, end_char);
    let slice = &src[start_byte..end_byte];

    eprintln!("  {}", slice);

    // Caret under the exact position
    let caret_offset = pos.saturating_sub(start_char);
    eprintln!("  {}^", " ".repeat(caret_offset));
    let _ = io::stderr().flush();
}

/// Convert a char index into a byte index in the given UTF-8 string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_to_byte_index_handles_multibyte_text() {
        let s = "é+é";
        assert_eq!(char_to_byte_index(s, 0), 0);
        assert_eq!(char_to_byte_index(s, 1), 2);
        assert_eq!(char_to_byte_index(s, 2), 3);
        assert_eq!(char_to_byte_index(s, 3), 5);
        assert_eq!(char_to_byte_index(s, 99), 5);
    }
}
