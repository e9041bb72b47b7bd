//! VEVENT block extraction.

use super::scanner::scan_blocks;

/// Splits calendar text into VEVENT blocks.
///
/// Each block is its `BEGIN:VEVENT` line followed by the body lines, joined
/// with `\n`. The closing `END:VEVENT` is not part of the block.
#[must_use]
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn extract_blocks(input: &str) -> Vec<String> {
    let blocks = scan_blocks(input, str::to_string, |block: &mut String, line| {
        block.push('\n');
        block.push_str(line);
    });

    tracing::debug!(count = blocks.len(), "Extracted VEVENT blocks");

    blocks
}

/// Reduces calendar text to its VEVENT blocks joined with `\n`.
///
/// Everything outside VEVENT blocks (the VCALENDAR wrapper, VTIMEZONE and
/// other components) is dropped.
#[must_use]
pub fn strip_to_vevents(input: &str) -> String {
    extract_blocks(input).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(strip_to_vevents(""), "");
        assert!(extract_blocks("").is_empty());
    }

    #[test]
    fn no_vevent_markers() {
        let input = "BEGIN:VCALENDAR\nVERSION:2.0\nBEGIN:VTODO\nSUMMARY:x\nEND:VTODO\nEND:VCALENDAR";
        assert_eq!(strip_to_vevents(input), "");
    }

    #[test]
    fn header_only_block() {
        assert_eq!(extract_blocks("BEGIN:VEVENT\nEND:VEVENT"), ["BEGIN:VEVENT"]);
    }

    #[test]
    fn end_marker_is_stripped() {
        let input = "BEGIN:VEVENT\nUID:1\nSUMMARY:One\nEND:VEVENT";
        assert_eq!(strip_to_vevents(input), "BEGIN:VEVENT\nUID:1\nSUMMARY:One");
    }

    #[test]
    fn blocks_joined_with_newline() {
        let input = "BEGIN:VCALENDAR\nBEGIN:VEVENT\nUID:1\nEND:VEVENT\nBEGIN:VEVENT\nUID:2\nEND:VEVENT\nEND:VCALENDAR";
        assert_eq!(
            strip_to_vevents(input),
            "BEGIN:VEVENT\nUID:1\nBEGIN:VEVENT\nUID:2"
        );
    }

    #[test]
    fn crlf_lines_are_normalized() {
        let input = "BEGIN:VEVENT\r\nUID:1\r\nEND:VEVENT\r\n";
        assert_eq!(extract_blocks(input), ["BEGIN:VEVENT\nUID:1"]);
    }

    #[test]
    fn unterminated_block_is_kept_verbatim() {
        let input = "BEGIN:VEVENT\nUID:1\nSUMMARY:Dangling";
        assert_eq!(extract_blocks(input), [input]);
    }

    #[test]
    fn nested_begin_splits_blocks() {
        let input = "BEGIN:VEVENT\nUID:outer\nBEGIN:VEVENT\nUID:inner\nEND:VEVENT";
        assert_eq!(
            extract_blocks(input),
            ["BEGIN:VEVENT\nUID:outer", "BEGIN:VEVENT\nUID:inner"]
        );
    }
}
