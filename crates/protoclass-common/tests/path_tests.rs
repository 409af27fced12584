use super::*;

#[test]
fn test_parse_dotted_path() {
    let path = ClassPath::parse("my.awesome.Hero", TypeKind::Class).unwrap();

    assert_eq!(path.as_str(), "my.awesome.Hero");
    assert_eq!(path.name(), "Hero");
    assert_eq!(path.containers().collect::<Vec<_>>(), vec!["my", "awesome"]);
    assert_eq!(path.segments().as_slice(), &["my", "awesome", "Hero"]);
    assert_eq!(path.depth(), 3);
    assert_eq!(path.to_string(), "my.awesome.Hero");
}

#[test]
fn test_parse_single_segment() {
    let path = ClassPath::parse("Hero", TypeKind::Class).unwrap();

    assert_eq!(path.name(), "Hero");
    assert_eq!(path.containers().count(), 0);
    assert_eq!(path.depth(), 1);
}

#[test]
fn test_empty_path_is_missing_name() {
    let err = ClassPath::parse("", TypeKind::Class).unwrap_err();
    assert_eq!(err, ConfigurationError::missing_name(TypeKind::Class));
    assert!(err.message().contains("give your class a name"));

    let err = ClassPath::parse("   ", TypeKind::Interface).unwrap_err();
    assert!(err.message().contains("give your interface a name"));
}

#[test]
fn test_absent_path_is_missing_name() {
    let err = ClassPath::parse_optional(None, TypeKind::Interface).unwrap_err();
    assert_eq!(err, ConfigurationError::missing_name(TypeKind::Interface));

    let path = ClassPath::parse_optional(Some("demo.Runnable"), TypeKind::Interface).unwrap();
    assert_eq!(path.name(), "Runnable");
}

#[test]
fn test_empty_segments_rejected() {
    for bad in ["a..b", ".a", "a.", "."] {
        let err = ClassPath::parse(bad, TypeKind::Class).unwrap_err();
        assert!(
            err.message().contains("segments may not be empty"),
            "unexpected message for {bad:?}: {}",
            err.message()
        );
    }
}

#[test]
fn test_whitespace_segments_rejected() {
    let err = ClassPath::parse("my.awe some.Hero", TypeKind::Class).unwrap_err();
    assert!(err.message().contains("whitespace"));
    assert!(err.message().contains("my.awe some.Hero"));
}
