//! The RPE chart format definition.
//!
//! RPE charts are JSON documents. The schema is versioned through
//! `META.RPEVersion`: new fields arrived in batches at version 105 (event
//! easing overrides, several judge line fields) and version 113 (judge
//! line control curves). Versions above 113 carry no further schema
//! additions.
//!
//! Only the parts the downgrade has to walk are modeled as typed fields.
//! Everything else — chart metadata, notes, BPM lists, fields added by
//! future versions — is kept as raw JSON and written back untouched. The
//! version-gated fields themselves also stay raw: [`downgrade`] removes
//! them by key, so a chart that never had one is never given one.
//!
//! [`downgrade`]: downgrade::downgrade

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use self::version::RpeVersion;

pub mod downgrade;
pub mod export;
pub mod parse;
pub mod prelude;
pub mod version;

/// Top-level object of an RPE chart file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Chart metadata. Its `RPEVersion` field decides which schema the
    /// rest of the document is expected to follow.
    #[serde(rename = "META")]
    pub meta: Meta,
    /// Judge lines, in the order the editor created them.
    #[serde(rename = "judgeLineList")]
    pub judge_line_list: Vec<JudgeLine>,
    /// Remaining top-level fields (`BPMList`, `judgeLineGroup` and so
    /// on), passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `META` object of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Schema version the chart was saved with.
    #[serde(rename = "RPEVersion")]
    pub rpe_version: RpeVersion,
    /// Title, composer, charter and the other display metadata, passed
    /// through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A judge line and everything attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeLine {
    /// Event layers of this line. RPE pads the list with `null` entries,
    /// so each slot is optional.
    #[serde(rename = "eventLayers")]
    pub event_layers: Vec<Option<EventLayer>>,
    /// All other per-line fields, passed through as-is. The version-gated
    /// fields (`alphaControl` and friends at 113, `bpmfactor`,
    /// `extended`, `father` and `zOrder` at 105) live here until a
    /// downgrade removes them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One event layer: event groups keyed by name (`moveXEvents`,
/// `alphaEvents`, ...). Group order is kept so a round trip does not
/// reshuffle the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLayer(pub IndexMap<String, Option<Vec<Event>>>);

/// A single timed event. Timing and value fields are the same across all
/// schema versions and are passed through as-is; only the easing override
/// keys are version-gated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(pub Map<String, Value>);
