//! Property-based tests for rendering, partitioning, validation and the
//! pipeline output as a whole.

use proptest::prelude::*;
use wordlist::batch::partition;
use wordlist::pipeline::{Pipeline, PipelineConfig};
use wordlist::prefix::{Prefix, FORBIDDEN_CHARS, MAX_PREFIX_LEN};
use wordlist::render::{digit_width, LineRenderer};

/// Prefixes that always pass validation
fn valid_prefix() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9+_.-]{1,50}"
}

proptest! {
    /// Batches cover `[0, total)` exactly once, ascending and contiguous
    #[test]
    fn test_partition_covers_range(total in 0u64..5_000, batch_size in 1u64..700) {
        let batches: Vec<_> = partition(total, batch_size).collect();

        let mut expected_start = 0;
        for batch in &batches {
            prop_assert_eq!(batch.start, expected_start);
            prop_assert!(batch.end > batch.start);
            prop_assert!(batch.len() <= batch_size);
            prop_assert!(batch.validate(total).is_ok());
            expected_start = batch.end;
        }
        prop_assert_eq!(expected_start, total);
        prop_assert_eq!(batches.len() as u64, total.div_ceil(batch_size));
    }

    /// Every rendered line has the same length and parses back to its index
    #[test]
    fn test_render_fixed_width(prefix in valid_prefix(), total in 1u64..100_000_000, seed in any::<u64>()) {
        let prefix = Prefix::parse(&prefix).unwrap();
        let renderer = LineRenderer::new(&prefix, total);
        let index = seed % total;

        let line = renderer.render_line(index).unwrap();
        prop_assert_eq!(line.len(), prefix.len() + digit_width(total) + 1);
        prop_assert_eq!(line.last(), Some(&b'\n'));
        prop_assert!(line.starts_with(prefix.as_bytes()));

        let digits = std::str::from_utf8(&line[prefix.len()..line.len() - 1]).unwrap();
        prop_assert_eq!(digits.parse::<u64>().unwrap(), index);

        // Deterministic: a second renderer gives identical bytes
        let again = LineRenderer::new(&prefix, total).render_line(index).unwrap();
        prop_assert_eq!(line, again);
    }

    /// Indices at or past the total are rejected
    #[test]
    fn test_render_out_of_range(total in 0u64..1_000, extra in 0u64..1_000) {
        let renderer = LineRenderer::new(&Prefix::parse("x").unwrap(), total);
        prop_assert!(renderer.render_line(total + extra).is_err());
    }

    /// Any prefix containing a forbidden character is rejected
    #[test]
    fn test_forbidden_chars_rejected(
        head in "[a-z]{0,20}",
        tail in "[a-z]{0,20}",
        pick in 0usize..FORBIDDEN_CHARS.len(),
    ) {
        let raw = format!("{}{}{}", head, FORBIDDEN_CHARS[pick], tail);
        prop_assert!(Prefix::parse(&raw).is_err());
        // Same verdict every time
        prop_assert!(Prefix::parse(&raw).is_err());
    }

    /// Overlong prefixes are rejected regardless of content
    #[test]
    fn test_overlong_rejected(extra in 1usize..100) {
        let raw = "a".repeat(MAX_PREFIX_LEN + extra);
        prop_assert!(Prefix::parse(&raw).is_err());
    }

    /// Valid prefixes are accepted and kept verbatim
    #[test]
    fn test_valid_prefix_accepted(raw in valid_prefix()) {
        let prefix = Prefix::parse(&raw).unwrap();
        prop_assert_eq!(prefix.as_str(), raw.as_str());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// The pipeline output is a permutation of all lines, whatever the
    /// worker count and batch size
    #[test]
    fn test_pipeline_output_is_complete(
        total in 0u64..3_000,
        batch_size in 1u64..500,
        workers in 1usize..6,
    ) {
        let prefix = Prefix::parse("pp").unwrap();
        let config = PipelineConfig::default()
            .with_total(total)
            .with_batch_size(batch_size)
            .with_workers(workers);
        let pipeline = Pipeline::new(&prefix, config).unwrap();

        let output = pipeline.run(Vec::new()).unwrap();
        prop_assert_eq!(output.stats.lines_written, total);

        let line_len = pipeline.renderer().line_len();
        prop_assert_eq!(output.sink.len() as u64, total * line_len as u64);

        let mut lines: Vec<&[u8]> = output.sink.chunks(line_len).collect();
        lines.sort();
        let expected: Vec<Vec<u8>> = (0..total)
            .map(|i| pipeline.renderer().render_line(i).unwrap())
            .collect();
        let expected: Vec<&[u8]> = expected.iter().map(Vec::as_slice).collect();
        prop_assert_eq!(lines, expected);
    }
}
