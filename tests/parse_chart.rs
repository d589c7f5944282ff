use rpe_downgrader::rpe::prelude::*;
use serde_json::Value;

#[test]
fn missing_meta_is_not_a_chart() {
    let err = parse_chart(r#"{"judgeLineList": []}"#).expect_err("META is required");
    assert!(matches!(err, ChartParseError::NotAChart { .. }));
    assert!(err.to_string().starts_with("not an RPE chart"));
}

#[test]
fn missing_version_is_not_a_chart() {
    let err = parse_chart(r#"{"META": {"name": "Aurora"}, "judgeLineList": []}"#)
        .expect_err("RPEVersion is required");
    assert!(matches!(err, ChartParseError::NotAChart { .. }));
}

#[test]
fn non_numeric_version_is_not_a_chart() {
    for source in [
        r#"{"META": {"RPEVersion": "latest"}, "judgeLineList": []}"#,
        r#"{"META": {"RPEVersion": true}, "judgeLineList": []}"#,
        r#"{"META": {"RPEVersion": null}, "judgeLineList": []}"#,
        r#"{"META": {"RPEVersion": [113]}, "judgeLineList": []}"#,
    ] {
        let err = parse_chart(source).expect_err("non-numeric version");
        assert!(matches!(err, ChartParseError::NotAChart { .. }), "{source}");
    }
}

#[test]
fn missing_judge_line_list_is_not_a_chart() {
    let err =
        parse_chart(r#"{"META": {"RPEVersion": 100}}"#).expect_err("judgeLineList is required");
    assert!(matches!(err, ChartParseError::NotAChart { .. }));
}

#[test]
fn malformed_json_is_not_a_chart() {
    let err = parse_chart(r#"{"META": {"RPEVersion": 113"#).expect_err("unterminated JSON");
    assert!(matches!(err, ChartParseError::NotAChart { .. }));
}

#[test]
fn trailing_data_is_rejected() {
    let err = parse_chart(r#"{"META": {"RPEVersion": 100}, "judgeLineList": []} []"#)
        .expect_err("two documents in one file");
    assert!(matches!(err, ChartParseError::TrailingData(_)));
}

#[test]
fn numeric_version_forms_are_accepted() {
    let number = parse_chart(r#"{"META": {"RPEVersion": 113}, "judgeLineList": []}"#)
        .expect("plain number");
    assert_eq!(number.meta.rpe_version, RpeVersion::new(113));

    let string = parse_chart(r#"{"META": {"RPEVersion": "105"}, "judgeLineList": []}"#)
        .expect("numeric string");
    assert_eq!(string.meta.rpe_version, RpeVersion::new(105));

    let padded = parse_chart(r#"{"META": {"RPEVersion": " 105 "}, "judgeLineList": []}"#)
        .expect("padded numeric string");
    assert_eq!(padded.meta.rpe_version, RpeVersion::new(105));

    let float = parse_chart(r#"{"META": {"RPEVersion": 113.0}, "judgeLineList": []}"#)
        .expect("float number");
    assert_eq!(float.meta.rpe_version, RpeVersion::new(113));
}

#[test]
fn version_is_always_written_back_as_a_number() {
    let chart = parse_chart(r#"{"META": {"RPEVersion": "113"}, "judgeLineList": []}"#)
        .expect("numeric string");
    let written = write_chart(&chart, true).expect("chart serializes");
    assert_eq!(written, r#"{"META":{"RPEVersion":113},"judgeLineList":[]}"#);
}

#[test]
fn unknown_fields_are_preserved() {
    let source = r#"{
        "BPMList": [ { "bpm": 174.0, "startTime": [0, 0, 1] } ],
        "META": { "RPEVersion": 113, "name": "Aurora", "futureMetaField": { "a": 1 } },
        "judgeLineGroup": ["Default"],
        "judgeLineList": [
            {
                "Name": "line0",
                "futureLineField": [1, 2, 3],
                "eventLayers": [ { "futureEvents": [ { "start": 0.0, "futureKey": true } ] } ]
            }
        ],
        "futureTopLevelField": "kept"
    }"#;

    let chart = parse_chart(source).expect("chart parses");
    assert!(chart.extra.contains_key("futureTopLevelField"));
    assert!(chart.meta.extra.contains_key("futureMetaField"));
    assert!(chart.judge_line_list[0].extra.contains_key("futureLineField"));

    assert_eq!(
        serde_json::to_value(&chart).expect("chart serializes"),
        serde_json::from_str::<Value>(source).expect("source is JSON")
    );
}
