//! Prelude module for the RPE chart downgrader.
//!
//! `use rpe_downgrader::rpe::prelude::*;` pulls in the chart model and
//! the downgrade entry points at once.

pub use super::{
    Chart, Event, EventLayer, JudgeLine, Meta,
    downgrade::{DowngradeError, downgrade},
    export::{output_file_name, write_chart},
    parse::{ChartParseError, parse_chart},
    version::{EditorVersion, RpeVersion, TargetVersion, UnknownTargetVersion},
};
