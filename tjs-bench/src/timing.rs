//! Timing helpers for codec operations.

use std::time::{Duration, Instant};
use tjs_core::{DecodeOptions, EncodeOptions};
use tjs_schema::Document;

/// Times `iterations` decodes of `xml`.
///
/// Failed decodes are timed like successful ones.
pub fn benchmark_decode(iterations: u64, xml: &str, options: &DecodeOptions) -> Duration {
    let start = Instant::now();

    for _ in 0..iterations {
        let _ = std::hint::black_box(Document::from_xml_with(xml, options));
    }

    start.elapsed()
}

/// Times `iterations` encodes of `document`.
pub fn benchmark_encode(iterations: u64, document: &Document, options: &EncodeOptions) -> Duration {
    let start = Instant::now();

    for _ in 0..iterations {
        let _ = std::hint::black_box(document.to_xml_with(options));
    }

    start.elapsed()
}

/// Rows processed per second for a run over a document of `rows` rows.
#[must_use]
pub fn rows_per_second(rows: usize, iterations: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return 0.0;
    }
    (rows as f64 * iterations as f64) / secs
}
