//! Downgrading a chart to an older schema version.
//!
//! The transform steps down through the schema batches, newest first,
//! until the requested target is reached:
//!
//! 1. versions above 113 have the 113 schema, so the version number is
//!    folded down to 113 first;
//! 2. stepping below 113 removes the judge line control curves;
//! 3. stepping below 105 removes the extended judge line fields and the
//!    per-event easing overrides.
//!
//! Each step re-checks the version it just produced, so steps below the
//! target never run. Fields are removed by key from the passthrough
//! maps; everything else in the document, including fields unknown to
//! this crate, survives unchanged.

use thiserror::Error;
use tracing::debug;

use super::{
    Chart, JudgeLine,
    version::{RpeVersion, TargetVersion},
};

/// Judge line control curve keys, introduced with version 113.
const CONTROL_KEYS: [&str; 5] = [
    "alphaControl",
    "posControl",
    "sizeControl",
    "skewControl",
    "yControl",
];

/// Extended judge line keys, introduced with version 105.
const LINE_KEYS_105: [&str; 4] = ["bpmfactor", "extended", "father", "zOrder"];

/// Per-event easing override keys, introduced with version 105.
const EVENT_KEYS_105: [&str; 2] = ["easingLeft", "easingRight"];

/// Error on [`downgrade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum DowngradeError {
    /// The requested target version is newer than the chart's own
    /// version. Upgrading is outside the contract; the chart is left
    /// untouched.
    #[error("target version {target} is newer than chart version {chart}")]
    TargetNewerThanChart {
        /// Version the chart was saved with.
        chart: RpeVersion,
        /// Version that was requested.
        target: TargetVersion,
    },
}

/// Produces a copy of `chart` downgraded to `target`.
///
/// The input is never modified; the returned chart shares no data with
/// it. Judge line, layer, group and event order are preserved exactly,
/// and `META.RPEVersion` of the result is the step the walk stopped at —
/// the target itself, or the chart's own version when the two are equal.
///
/// # Errors
///
/// [`DowngradeError::TargetNewerThanChart`] when `target` is newer than
/// the chart; no transform is attempted in that case.
pub fn downgrade(chart: &Chart, target: TargetVersion) -> Result<Chart, DowngradeError> {
    let source = chart.meta.rpe_version;
    if target.number() > source.as_i64() {
        return Err(DowngradeError::TargetNewerThanChart {
            chart: source,
            target,
        });
    }

    let mut output = chart.clone();

    // Everything past 113 is schema-identical to 113.
    if target.version() < output.meta.rpe_version {
        output.meta.rpe_version = TargetVersion::V113.version();
    }

    if target.version() < output.meta.rpe_version {
        debug!(%source, %target, "removing judge line control curves");
        for line in &mut output.judge_line_list {
            strip_control_curves(line);
        }
        output.meta.rpe_version = TargetVersion::V105.version();
    }

    if target.version() < output.meta.rpe_version {
        debug!(%source, %target, "removing extended line fields and event easing overrides");
        for line in &mut output.judge_line_list {
            strip_line_extensions(line);
        }
        output.meta.rpe_version = TargetVersion::V100.version();
    }

    Ok(output)
}

fn strip_control_curves(line: &mut JudgeLine) {
    for key in CONTROL_KEYS {
        line.extra.shift_remove(key);
    }
}

fn strip_line_extensions(line: &mut JudgeLine) {
    for key in LINE_KEYS_105 {
        line.extra.shift_remove(key);
    }
    for layer in line.event_layers.iter_mut().flatten() {
        for events in layer.0.values_mut().flatten() {
            for event in events {
                for key in EVENT_KEYS_105 {
                    event.0.shift_remove(key);
                }
            }
        }
    }
}
