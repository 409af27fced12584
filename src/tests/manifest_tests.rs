use super::*;

use protoclass_runtime::TypeKind;

#[test]
fn parses_full_manifest() {
    let manifest = parse_manifest(
        r#"{
          "interfaces": [{ "path": "demo.Runnable", "methods": ["run"], "local": true }],
          "classes": [{
            "path": "demo.Task",
            "extends": "demo.Base",
            "implements": ["demo.Runnable"],
            "static": { "count": 1 },
            "members": { "name": "task" },
            "methods": { "run": true }
          }]
        }"#,
    )
    .unwrap();

    assert_eq!(manifest.interfaces.len(), 1);
    assert!(manifest.interfaces[0].local);
    let task = &manifest.classes[0];
    assert_eq!(task.path.as_deref(), Some("demo.Task"));
    assert_eq!(task.extends.as_deref(), Some("demo.Base"));
    assert_eq!(task.implements, vec!["demo.Runnable".to_string()]);
    assert_eq!(task.statics.len(), 1);
    assert!(!task.local);
}

#[test]
fn implements_accepts_single_path() {
    let manifest =
        parse_manifest(r#"{ "classes": [{ "path": "A", "implements": "T" }] }"#).unwrap();
    assert_eq!(manifest.classes[0].implements, vec!["T".to_string()]);
}

#[test]
fn rejects_unknown_fields() {
    let err = parse_manifest(r#"{ "classes": [{ "path": "A", "extend": "B" }] }"#).unwrap_err();
    assert!(format!("{err:#}").contains("unknown field"));
}

#[test]
fn builds_in_order_and_publishes() {
    let manifest = parse_manifest(
        r#"{
          "interfaces": [{ "path": "demo.Runnable", "methods": ["run"] }],
          "classes": [
            { "path": "demo.Base", "static": { "count": 1 }, "members": { "tags": ["a", "b"] } },
            { "path": "demo.Task", "extends": "demo.Base", "implements": "demo.Runnable",
              "methods": { "run": "done" } },
            { "path": "demo.Hidden", "local": true }
          ]
        }"#,
    )
    .unwrap();
    let registry = NamespaceRegistry::anchored();

    let loaded = manifest.build(&registry).unwrap();

    let paths: Vec<String> = loaded.types().map(|ty| ty.path().to_string()).collect();
    assert_eq!(paths, vec!["demo.Runnable", "demo.Base", "demo.Task", "demo.Hidden"]);
    assert_eq!(loaded.get("demo.Runnable").unwrap().kind(), TypeKind::Interface);

    let task = loaded.get("demo.Task").unwrap();
    assert_eq!(task.super_type().as_ref(), loaded.get("demo.Base"));
    assert_eq!(task.static_member("count"), Some(Value::from(1)));

    let instance = task.new_instance(&[]).unwrap();
    assert_eq!(instance.call("run", &[]).unwrap(), Value::from("done"));
    assert_eq!(
        instance.get("tags"),
        Some(Value::List(vec![Value::from("a"), Value::from("b")]))
    );

    assert!(registry.lookup_type("demo.Task").is_some());
    assert!(registry.lookup("demo.Hidden").is_none());
}

#[test]
fn unknown_reference_fails() {
    let manifest =
        parse_manifest(r#"{ "classes": [{ "path": "demo.Task", "extends": "demo.Base" }] }"#)
            .unwrap();

    let err = manifest.build(&NamespaceRegistry::detached()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("failed to build class 'demo.Task'"));
    assert!(message.contains("supertype 'demo.Base' is not declared earlier"));
}

#[test]
fn missing_path_is_a_configuration_error() {
    let manifest = parse_manifest(r#"{ "classes": [{ "members": { "a": 1 } }] }"#).unwrap();

    let err = manifest.build(&NamespaceRegistry::detached()).unwrap_err();
    let class_error = err.downcast_ref::<protoclass_runtime::ClassError>().unwrap();
    assert!(class_error.is_configuration());
}

#[test]
fn static_member_key_is_rejected() {
    let manifest =
        parse_manifest(r#"{ "classes": [{ "path": "A", "members": { "STATIC": {} } }] }"#)
            .unwrap();

    assert!(manifest.build(&NamespaceRegistry::detached()).is_err());
}

#[test]
fn load_manifest_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.json");
    std::fs::write(&path, r#"{ "classes": [{ "path": "App" }] }"#).unwrap();

    let manifest = load_manifest(&path).unwrap();
    assert_eq!(manifest.classes.len(), 1);

    std::fs::write(&path, "{ not json").unwrap();
    let err = load_manifest(&path).unwrap_err();
    assert!(err.to_string().contains("failed to load manifest"));
}

#[test]
fn converts_json_values() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{ "n": 2, "s": "x", "b": false, "z": null, "l": [1] }"#).unwrap();

    let Value::Map(map) = json_to_value(&value) else {
        panic!("expected a map");
    };
    assert_eq!(map.get("n"), Some(&Value::from(2)));
    assert_eq!(map.get("s"), Some(&Value::from("x")));
    assert_eq!(map.get("b"), Some(&Value::from(false)));
    assert_eq!(map.get("z"), Some(&Value::Null));
    assert_eq!(map.get("l"), Some(&Value::List(vec![Value::from(1)])));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["n", "s", "b", "z", "l"]);
}

#[test]
fn parses_cli_arguments() {
    assert_eq!(parse_arg("3"), Value::from(3));
    assert_eq!(parse_arg("\"quoted\""), Value::from("quoted"));
    assert_eq!(parse_arg("plain text"), Value::from("plain text"));
    assert_eq!(parse_arg("[true]"), Value::List(vec![Value::from(true)]));
}
