use super::*;
use crate::builder::ClassBuilder;
use crate::definition::ClassDefinition;

fn factory() -> InterfaceFactory {
    InterfaceFactory::new(&NamespaceRegistry::detached())
}

#[test]
fn test_stub_raises_implementation_missing() {
    let runnable = factory().design("demo.Runnable", ["run"]).unwrap();
    let instance = runnable.new_instance(&[]).unwrap();

    let err = instance.call("run", &[]).unwrap_err();

    assert!(err.is_implementation_missing());
    let missing = err.as_implementation_missing().unwrap();
    assert_eq!(missing.method, "run");
    assert_eq!(missing.interface, "demo.Runnable");
    assert_eq!(missing.name(), "ImplementationMissingError");
}

#[test]
fn test_message_names_receiver_method_and_interface() {
    let runnable = factory().design("demo.Runnable", ["run"]).unwrap();
    let instance = runnable.new_instance(&[]).unwrap();

    let err = instance.call("run", &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing implementation for <[object Runnable]::run> defined by interface demo.Runnable"
    );
}

#[test]
fn test_interface_is_a_stub_type() {
    let runnable = factory().design("demo.Runnable", ["run", "stop"]).unwrap();

    assert_eq!(runnable.kind(), TypeKind::Interface);
    assert_eq!(runnable.to_string(), "Runnable");
    assert!(runnable.super_type().is_none());
    assert_eq!(runnable.prototype().own_names(), vec!["run", "stop"]);
}

#[test]
fn test_implementer_with_own_method_succeeds() {
    let runnable = factory().design("demo.Runnable", ["run"]).unwrap();
    let task = ClassBuilder::new(&NamespaceRegistry::detached())
        .design(
            "demo.Task",
            ClassDefinition::new()
                .implements([&runnable])
                .method("run", |_this, _args| Ok(Value::from("ran"))),
        )
        .unwrap();

    let instance = task.new_instance(&[]).unwrap();
    assert_eq!(instance.call("run", &[]).unwrap(), Value::from("ran"));
}

#[test]
fn test_implementer_without_method_names_itself() {
    let runnable = factory().design("demo.Runnable", ["run"]).unwrap();
    let lazy = ClassBuilder::new(&NamespaceRegistry::detached())
        .design("demo.Lazy", ClassDefinition::new().implements([&runnable]))
        .unwrap();

    let err = lazy.new_instance(&[]).unwrap().call("run", &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing implementation for <demo.Lazy::run> defined by interface demo.Runnable"
    );
}

#[test]
fn test_missing_name_rejected() {
    let err = factory().design("", ["run"]).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("interface"));

    let err = factory()
        .design_optional(None, Vec::<String>::new())
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_published_unless_local() {
    let registry = NamespaceRegistry::anchored();
    let published = InterfaceFactory::new(&registry)
        .design("demo.Runnable", ["run"])
        .unwrap();
    InterfaceFactory::new(&registry)
        .local()
        .design("demo.Hidden", ["run"])
        .unwrap();

    assert_eq!(registry.lookup_type("demo.Runnable"), Some(published));
    assert!(registry.lookup("demo.Hidden").is_none());
}

#[test]
fn test_to_string_stub_does_not_recurse() {
    let printable = factory().design("demo.Printable", ["toString"]).unwrap();
    let instance = printable.new_instance(&[]).unwrap();

    let err = instance.call("toString", &[]).unwrap_err();
    assert!(err.to_string().contains("<[object Printable]::toString>"));
    assert_eq!(instance.to_string(), "[object Printable]");
}

#[test]
fn test_stub_on_non_instance_receiver() {
    let runnable = factory().design("demo.Runnable", ["run"]).unwrap();
    let run = runnable.prototype().get_own("run").unwrap();

    let err = run
        .as_function()
        .unwrap()
        .call(&Value::from("plain"), &[])
        .unwrap_err();
    assert!(err.to_string().contains("<plain::run>"));
}

#[test]
fn test_interface_nested_under_class() {
    let registry = NamespaceRegistry::anchored();
    let widget = ClassBuilder::new(&registry)
        .design("ui.Widget", ClassDefinition::new())
        .unwrap();
    let clickable = InterfaceFactory::new(&registry)
        .design("ui.Widget.Clickable", ["click"])
        .unwrap();

    assert_eq!(registry.lookup_type("ui.Widget.Clickable"), Some(clickable));
    assert_eq!(registry.lookup_type("ui.Widget"), Some(widget));
}

#[test]
fn test_interface_stub_shadows_inherited_method() {
    let builder = ClassBuilder::new(&NamespaceRegistry::detached());
    let runnable = factory().design("demo.Runnable", ["run"]).unwrap();
    let base = builder
        .design(
            "demo.Base",
            ClassDefinition::new().method("run", |_this, _args| Ok(Value::from("base"))),
        )
        .unwrap();
    let child = builder
        .design(
            "demo.Child",
            ClassDefinition::new().extends(&base).implements([&runnable]),
        )
        .unwrap();

    // Only own members block a mixed-in member, so the stub lands on the
    // child's prototype in front of the inherited `run`.
    assert!(child.prototype().has_own("run"));
    let err = child.new_instance(&[]).unwrap().call("run", &[]).unwrap_err();
    assert!(err.is_implementation_missing());
    assert_eq!(err.as_implementation_missing().unwrap().receiver, "demo.Child");
}
