//! Line scanner for VEVENT blocks.

use kunai_core::constants::{BEGIN_VEVENT, END_VEVENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Begin,
    End,
    Body,
}

impl LineKind {
    fn classify(line: &str) -> Self {
        if line.starts_with(BEGIN_VEVENT) {
            Self::Begin
        } else if line.starts_with(END_VEVENT) {
            Self::End
        } else {
            Self::Body
        }
    }
}

/// Walks `input` line by line and collects one accumulator per VEVENT block.
///
/// `open` builds the accumulator from the `BEGIN:VEVENT` line and `body` feeds
/// it every other line seen while the block is open. Lines outside a block are
/// dropped. Marker lines are never passed to `body`.
///
/// Recovery:
/// - `BEGIN:VEVENT` while a block is open flushes the open block as-is
/// - input ending while a block is open flushes it as-is
/// - `END:VEVENT` with no open block is ignored
pub fn scan_blocks<B>(
    input: &str,
    mut open: impl FnMut(&str) -> B,
    mut body: impl FnMut(&mut B, &str),
) -> Vec<B> {
    let mut blocks = Vec::new();
    let mut current: Option<B> = None;

    for (idx, line) in input.lines().enumerate() {
        match LineKind::classify(line) {
            LineKind::Begin => {
                if let Some(block) = current.take() {
                    tracing::warn!(line = idx + 1, "Nested BEGIN:VEVENT, flushing open block");
                    blocks.push(block);
                }
                current = Some(open(line));
            }
            LineKind::End => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
            }
            LineKind::Body => {
                if let Some(block) = current.as_mut() {
                    body(block, line);
                }
            }
        }
    }

    if let Some(block) = current {
        tracing::warn!("Input ended inside a VEVENT block, flushing it unterminated");
        blocks.push(block);
    }

    blocks
}
