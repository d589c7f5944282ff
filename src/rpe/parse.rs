//! Reading a chart document out of JSON text.

use thiserror::Error;
use tracing::trace;

use super::Chart;

/// Error on reading a chart from JSON text.
///
/// Malformed JSON, a missing `META` object, a non-numeric `RPEVersion`, a
/// judge line list of the wrong shape — every failure here means the
/// input is not something this crate can treat as an RPE chart. There is
/// no partial result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartParseError {
    /// The text failed to deserialize into a chart document. `path` is
    /// the JSON path at which deserialization gave up, e.g.
    /// `META.RPEVersion`.
    #[error("not an RPE chart (at {path}): {source}")]
    NotAChart {
        /// JSON path of the failing element.
        path: String,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
    /// Extra data followed the chart document.
    #[error("trailing data after the chart document: {0}")]
    TrailingData(#[source] serde_json::Error),
}

/// Parses a chart from JSON source text.
///
/// # Errors
///
/// Returns a [`ChartParseError`] when `source` is not a single
/// well-formed JSON document of the RPE chart shape. Unknown fields are
/// no error; they are carried through the model untouched.
pub fn parse_chart(source: &str) -> Result<Chart, ChartParseError> {
    let mut deserializer = serde_json::Deserializer::from_str(source);
    let chart: Chart =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            ChartParseError::NotAChart {
                path: err.path().to_string(),
                source: err.into_inner(),
            }
        })?;
    deserializer.end().map_err(ChartParseError::TrailingData)?;

    trace!(
        version = chart.meta.rpe_version.as_i64(),
        judge_lines = chart.judge_line_list.len(),
        "parsed chart"
    );
    Ok(chart)
}
