//! Serializing a downgraded chart and naming the output file.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{Chart, version::TargetVersion};

/// Serializes a chart the way RPE writes it: four-space indentation, or a
/// single compact line when `minify` is set.
///
/// # Errors
///
/// Forwards serde_json serialization failures. The chart model holds
/// plain JSON values throughout, so this does not fail in practice.
pub fn write_chart(chart: &Chart, minify: bool) -> serde_json::Result<String> {
    if minify {
        return serde_json::to_string(chart);
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    chart.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json writes valid UTF-8"))
}

/// Derives the output file name for a downgraded chart.
///
/// The last extension segment of `input_name` is dropped, then
/// `_v<target>` is appended, `_minified` when applicable, and a `.json`
/// extension: `song.chart.json` downgraded to 105 becomes
/// `song.chart_v105.json`. A name without any extension is kept whole.
#[must_use]
pub fn output_file_name(input_name: &str, target: TargetVersion, minify: bool) -> String {
    let stem = input_name
        .rsplit_once('.')
        .map_or(input_name, |(stem, _)| stem);
    let marker = if minify { "_minified" } else { "" };
    format!("{stem}_v{target}{marker}.json")
}

#[test]
fn output_file_name_edge_cases() {
    assert_eq!(
        output_file_name("chart", TargetVersion::V100, false),
        "chart_v100.json"
    );
    assert_eq!(
        output_file_name(".json", TargetVersion::V105, false),
        "_v105.json"
    );
    assert_eq!(
        output_file_name("a.b.c.json", TargetVersion::V113, true),
        "a.b.c_v113_minified.json"
    );
}
