use sw_project::*;

fn parse(yaml: &str) -> Project {
    serde_yaml::from_str(yaml).unwrap()
}

const COLUMN: &str = r#"
version: 1
name: t
cases:
  - column:
      name: c1
      light: benzene
      heavy: toluene
      x_feed: 0.5
      x_distillate: 0.95
      x_bottoms: 0.05
      feed: { q: 1.0 }
      reflux: { factor: 1.5 }
"#;

#[test]
fn minimal_column_case_is_valid() {
    let project = parse(COLUMN);
    validate_project(&project).unwrap();
    let CaseDef::Column(case) = &project.cases[0] else {
        panic!("expected column");
    };
    assert_eq!(case.pressure, "1 atm");
}

#[test]
fn rejects_future_version() {
    let project = parse(&COLUMN.replace("version: 1", "version: 7"));
    assert_eq!(
        validate_project(&project),
        Err(ValidationError::UnsupportedVersion { version: 7 })
    );
}

#[test]
fn rejects_unknown_substance() {
    let project = parse(&COLUMN.replace("heavy: toluene", "heavy: unobtainium"));
    assert!(matches!(
        validate_project(&project),
        Err(ValidationError::UnknownSubstance { .. })
    ));
}

#[test]
fn rejects_unordered_compositions() {
    let project = parse(&COLUMN.replace("x_bottoms: 0.05", "x_bottoms: 0.6"));
    let err = validate_project(&project).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "compositions"));
}

#[test]
fn rejects_feed_temperature_with_constant_alpha() {
    let yaml = COLUMN
        .replace("feed: { q: 1.0 }", "feed: { temperature: 25 C }")
        .replace("      reflux:", "      alpha: 2.5\n      reflux:");
    let err = validate_project(&parse(&yaml)).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "feed.temperature"));
}

#[test]
fn rejects_bad_pressure_text() {
    let yaml = COLUMN.replace("      x_feed:", "      pressure: 3 psi\n      x_feed:");
    let err = validate_project(&parse(&yaml)).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "pressure"));
}

#[test]
fn rejects_decreasing_reactor_conversions() {
    let yaml = r#"
version: 1
name: t
cases:
  - reactor:
      name: r1
      kinetics: first_order
      k: 1.0
      c_a0: 1.0
      reactors:
        - { kind: pfr, conversion: 0.6 }
        - { kind: cstr, conversion: 0.3 }
"#;
    let err = validate_project(&parse(yaml)).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "reactors"));
}
