//! Version downgrader for RPE (Re:PhiEdit) chart files.
//!
//! RPE saves rhythm game charts as JSON and bumps `META.RPEVersion`
//! whenever the schema grows new fields. Players and tools built against
//! an older schema refuse newer charts, so this crate removes the newer
//! field batches again:
//!
//! - version 113 introduced the judge line control curves
//!   (`alphaControl`, `posControl`, `sizeControl`, `skewControl`,
//!   `yControl`),
//! - version 105 introduced per-event easing overrides (`easingLeft`,
//!   `easingRight`) and the `bpmfactor`, `extended`, `father` and
//!   `zOrder` judge line fields,
//! - version 100 is the baseline.
//!
//! Downgrading only ever removes those known batches. Everything else in
//! the file, including fields this crate knows nothing about, is written
//! back unchanged.
//!
//! ```
//! use rpe_downgrader::rpe::prelude::*;
//!
//! let source = r#"{
//!     "META": { "RPEVersion": 113, "name": "Aurora", "charter": "kou" },
//!     "judgeLineList": [
//!         { "father": -1, "zOrder": 0, "eventLayers": [] }
//!     ]
//! }"#;
//! let chart = parse_chart(source)?;
//! assert_eq!(chart.meta.rpe_version.editor_version().to_string(), "v1.2 or newer");
//!
//! let downgraded = downgrade(&chart, TargetVersion::V100)?;
//! assert_eq!(downgraded.meta.rpe_version.as_i64(), 100);
//! assert!(!downgraded.judge_line_list[0].extra.contains_key("father"));
//!
//! let name = output_file_name("aurora.chart.json", TargetVersion::V100, false);
//! assert_eq!(name, "aurora.chart_v100.json");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod rpe;
