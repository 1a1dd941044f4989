//! Line rendering.
//!
//! A line is `prefix ++ zero-padded decimal index ++ '\n'`. The digit width is
//! derived from the total number of lines, so every line of a run has the same
//! length and the largest index fits without truncation.

use std::sync::Arc;

use crate::pipeline::PipelineError;
use crate::prefix::Prefix;

/// Number of decimal digits needed to print every index in `[0, total)`.
///
/// Always at least 1, so `total == 0` and `total <= 10` both give width 1.
pub fn digit_width(total: u64) -> usize {
    let mut max = total.saturating_sub(1);
    let mut width = 1;
    while max >= 10 {
        max /= 10;
        width += 1;
    }
    width
}

/// Renders indices into fixed-width lines.
///
/// Cheap to clone; the prefix bytes are shared between clones so every worker
/// can hold its own renderer.
#[derive(Debug, Clone)]
pub struct LineRenderer {
    prefix: Arc<[u8]>,
    width: usize,
    total: u64,
}

impl LineRenderer {
    /// Create a renderer for indices in `[0, total)`
    pub fn new(prefix: &Prefix, total: u64) -> Self {
        Self {
            prefix: Arc::from(prefix.as_bytes()),
            width: digit_width(total),
            total,
        }
    }

    /// Digit width used for the numeric suffix
    pub fn width(&self) -> usize {
        self.width
    }

    /// Exclusive upper bound of renderable indices
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Length in bytes of every rendered line, newline included
    pub fn line_len(&self) -> usize {
        self.prefix.len() + self.width + 1
    }

    /// Append the line for `index` to `buf`.
    ///
    /// Only grows `buf`; when the caller reserves enough capacity up front no
    /// allocation happens here.
    #[inline]
    pub fn render_into(&self, index: u64, buf: &mut Vec<u8>) -> Result<(), PipelineError> {
        if index >= self.total {
            return Err(PipelineError::OutOfRange {
                index,
                total: self.total,
            });
        }

        buf.extend_from_slice(&self.prefix);

        let digits_start = buf.len();
        buf.resize(digits_start + self.width, b'0');
        let mut n = index;
        for slot in buf[digits_start..].iter_mut().rev() {
            *slot = b'0' + (n % 10) as u8;
            n /= 10;
        }

        buf.push(b'\n');
        Ok(())
    }

    /// Render a single line into a fresh buffer
    pub fn render_line(&self, index: u64) -> Result<Vec<u8>, PipelineError> {
        let mut buf = Vec::with_capacity(self.line_len());
        self.render_into(index, &mut buf)?;
        Ok(buf)
    }
}
