#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use prostata_core::{AttributeValue, MetricKind};
use prostata_report::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
counters:
  - name: requests
    unitz: bytes # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "BAD_MANIFEST");
}

#[test]
fn ok_minimal_manifest() {
    let ok = "version: 1\n";
    let manifest = config::load_from_str(ok).expect("must parse");
    assert_eq!(manifest.version, 1);
    assert!(manifest.build().unwrap().is_empty());
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code(), "UNSUPPORTED_VERSION");
}

#[test]
fn duplicate_names_are_caught_before_building() {
    let dup = r#"
version: 1
timers:
  - name: shared
attributes:
  - name: shared
"#;
    let err = config::load_from_str(dup).expect_err("must fail");
    assert_eq!(err.code(), "BAD_MANIFEST");
    assert!(err.to_string().contains("shared"));
}

#[test]
fn full_manifest_builds_registry() {
    let yaml = r#"
version: 1
timers:
  - name: load_time
    label: Load time
counters:
  - name: hits
    value: 10
  - name: lookups
    value: 4
    unit: lookup
    label: Cache lookups
attributes:
  - name: host
    value: db01
  - name: port
    value: 5432
  - name: load
    value: 0.75
  - name: note
ratios:
  - name: hit_rate
    numerator: hits
    denominator: lookups
    label: Hit rate
"#;
    let manifest = config::load_from_str(yaml).unwrap();
    let reg = manifest.build().unwrap();

    assert_eq!(reg.timer_names(), ["load_time"]);
    assert_eq!(reg.label("load_time").unwrap(), "Load time");
    assert!(!reg.is_running("load_time").unwrap());

    let hits = reg.counter("hits").unwrap();
    assert_eq!((hits.value, hits.unit.as_str(), hits.label.as_str()), (10, "item", "hits"));
    assert_eq!(reg.counter_unit("lookups").unwrap(), "lookup");

    assert_eq!(reg.attribute_value("host").unwrap(), &AttributeValue::Text("db01".into()));
    assert_eq!(reg.attribute_value("port").unwrap(), &AttributeValue::Int(5432));
    assert_eq!(reg.attribute_value("load").unwrap(), &AttributeValue::Float(0.75));
    assert_eq!(reg.attribute_value("note").unwrap(), &AttributeValue::Text(String::new()));

    assert_eq!(reg.ratio_value("hit_rate").unwrap(), 2.5);
    assert_eq!(reg.kind_of("hit_rate"), Some(MetricKind::Ratio));
    assert_eq!(reg.len(), 8);
}

#[test]
fn registry_rules_surface_as_registry_errors() {
    let reserved = r#"
version: 1
timers:
  - name: timers
"#;
    let manifest = config::load_from_str(reserved).unwrap();
    let err = manifest.build().expect_err("reserved word accepted");
    assert_eq!(err.code(), "INVALID_NAME");

    let dangling = r#"
version: 1
counters:
  - name: num
ratios:
  - name: r
    numerator: num
    denominator: den
"#;
    let manifest = config::load_from_str(dangling).unwrap();
    let err = manifest.build().expect_err("dangling reference accepted");
    assert_eq!(err.code(), "NOT_FOUND");
}

#[test]
fn missing_file_is_a_read_error() {
    let err = config::load_from_file("/nonexistent/prostata.yaml").expect_err("must fail");
    assert_eq!(err.code(), "READ_FAILED");
}

#[test]
fn rejected_manifest_leaves_registry_untouched() {
    let mut reg = prostata_core::Registry::new();
    reg.create_counter("existing", 1, "item", None).unwrap();
    let before = reg.used_names();

    // each manifest fails on its last entry
    let cases = [
        (
            "INVALID_NAME",
            "version: 1\ntimers:\n  - name: ok_timer\nattributes:\n  - name: Bad-Name\n",
        ),
        (
            "ALREADY_EXISTS",
            "version: 1\ntimers:\n  - name: ok_timer\ncounters:\n  - name: existing\n",
        ),
        (
            "NOT_FOUND",
            "version: 1\ncounters:\n  - name: num\nratios:\n  - name: r\n    numerator: num\n    denominator: den\n",
        ),
    ];
    for (code, yaml) in cases {
        let manifest = config::load_from_str(yaml).unwrap();
        let err = manifest.apply(&mut reg).expect_err("manifest accepted");
        assert_eq!(err.code(), code, "{yaml}");
        assert_eq!(reg.used_names(), before, "{yaml}");
    }
}

#[test]
fn ratios_may_reference_registry_names_and_earlier_ratios() {
    let mut reg = prostata_core::Registry::new();
    reg.create_counter("den", 2, "item", None).unwrap();

    let yaml = r#"
version: 1
counters:
  - name: num
    value: 10
ratios:
  - name: r1
    numerator: num
    denominator: den
  - name: r2
    numerator: r1
    denominator: den
"#;
    let manifest = config::load_from_str(yaml).unwrap();
    manifest.check(&reg).unwrap();
    manifest.apply(&mut reg).unwrap();
    assert_eq!(reg.ratio_value("r1").unwrap(), 5.0);
    assert_eq!(reg.ratio_value("r2").unwrap_err().code().as_str(), "NOT_FOUND");
}
