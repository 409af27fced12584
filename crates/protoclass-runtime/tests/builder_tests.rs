use super::*;
use std::cell::RefCell;
use std::rc::Rc;

use protoclass_common::ClassError;

use crate::value::members;

fn builder() -> ClassBuilder {
    ClassBuilder::new(&NamespaceRegistry::detached())
}

fn name_method(label: &'static str) -> Function {
    Function::method(move |_this, _args| Ok(Value::from(label)))
}

#[test]
fn test_root_class_has_no_super() {
    let a = builder().design("A", ClassDefinition::new()).unwrap();

    assert!(a.super_type().is_none());
    assert_eq!(a.kind(), TypeKind::Class);
}

#[test]
fn test_inherited_method_resolves_to_super() {
    let a = builder()
        .design("A", ClassDefinition::new().with("speak", name_method("a")))
        .unwrap();
    let b = builder()
        .design("B", ClassDefinition::new().extends(&a))
        .unwrap();

    assert_eq!(b.super_type(), Some(a.clone()));
    let instance = b.new_instance(&[]).unwrap();
    assert_eq!(instance.call("speak", &[]).unwrap(), Value::from("a"));
}

#[test]
fn test_own_member_wins_over_super() {
    let a = builder()
        .design("A", ClassDefinition::new().with("m", name_method("a")))
        .unwrap();
    let b = builder()
        .design(
            "B",
            ClassDefinition::new().extends(&a).with("m", name_method("b")),
        )
        .unwrap();

    let instance = b.new_instance(&[]).unwrap();
    assert_eq!(instance.call("m", &[]).unwrap(), Value::from("b"));
    assert_eq!(a.new_instance(&[]).unwrap().call("m", &[]).unwrap(), Value::from("a"));
}

#[test]
fn test_empty_name_rejected() {
    for path in ["", "   "] {
        let err = builder().design(path, ClassDefinition::new()).unwrap_err();
        assert!(err.is_configuration(), "{path:?} should be rejected");
    }

    let err = builder()
        .design_optional(None, ClassDefinition::new())
        .unwrap_err();
    assert!(matches!(err, ClassError::Configuration(_)));
    assert!(err.to_string().contains("Please give your class a name"));
}

#[test]
fn test_rejected_build_publishes_nothing() {
    let registry = NamespaceRegistry::anchored();
    let builder = ClassBuilder::new(&registry);

    assert!(builder.design("a..B", ClassDefinition::new()).is_err());
    assert!(registry.bindings().is_empty());
    assert!(registry.root().unwrap().is_empty());
}

#[test]
fn test_directives_consumed() {
    let t = builder().design("T", ClassDefinition::new()).unwrap();
    let a = builder().design("A", ClassDefinition::new()).unwrap();
    let c = builder()
        .design(
            "C",
            ClassDefinition::new()
                .extends(&a)
                .implements([&t])
                .initialize(|_this, _args| Ok(Value::Undefined))
                .static_member("s", 1)
                .with("m", 2),
        )
        .unwrap();

    let own = c.prototype().own_names();
    assert_eq!(own, vec!["toString".to_string(), "m".to_string()]);
}

#[test]
fn test_explicit_initializer_receives_arguments() {
    let point = builder()
        .design(
            "geo.Point",
            ClassDefinition::new().initialize(|this, args| {
                this.set("x", args.first().cloned().unwrap_or_default());
                this.set("y", args.get(1).cloned().unwrap_or_default());
                Ok(Value::Undefined)
            }),
        )
        .unwrap();

    let p = point.new_instance(&[Value::from(3), Value::from(4)]).unwrap();
    assert_eq!(p.fields(), members([("x", 3), ("y", 4)]));
}

#[test]
fn test_forwarding_initializer_passes_same_receiver_and_arguments() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let base = builder()
        .design(
            "Base",
            ClassDefinition::new().initialize(move |this, args| {
                log.borrow_mut().push(this.class().name().to_string());
                this.set("arg", args.first().cloned().unwrap_or_default());
                Ok(Value::Undefined)
            }),
        )
        .unwrap();
    let derived = builder()
        .design("Derived", ClassDefinition::new().extends(&base))
        .unwrap();

    let d = derived.new_instance(&[Value::from("hi")]).unwrap();

    assert_eq!(*seen.borrow(), vec!["Derived".to_string()]);
    assert_eq!(d.get("arg"), Some(Value::from("hi")));
}

#[test]
fn test_explicit_initializer_replaces_forwarding() {
    let base = builder()
        .design(
            "Base",
            ClassDefinition::new().initialize(|this, _args| {
                this.set("base", true);
                Ok(Value::Undefined)
            }),
        )
        .unwrap();
    let derived = builder()
        .design(
            "Derived",
            ClassDefinition::new().extends(&base).initialize(|this, _args| {
                this.set("derived", true);
                Ok(Value::Undefined)
            }),
        )
        .unwrap();

    let d = derived.new_instance(&[]).unwrap();
    assert!(!d.has_own("base"));
    assert!(d.has_own("derived"));
}

#[test]
fn test_non_function_initialize_ignored() {
    let a = builder()
        .design("A", ClassDefinition::new().with("initialize", 42))
        .unwrap();

    assert!(a.new_instance(&[]).is_ok());
    assert!(!a.prototype().has_own("initialize"));
}

#[test]
fn test_non_type_extends_ignored() {
    let a = builder()
        .design("A", ClassDefinition::new().with("Extends", "Object"))
        .unwrap();

    assert!(a.super_type().is_none());
    assert!(!a.prototype().has_own("Extends"));
}

#[test]
fn test_textual_representation() {
    let hero = builder()
        .design("my.awesome.Hero", ClassDefinition::new())
        .unwrap();

    assert_eq!(hero.to_string(), "my.awesome.Hero");
    assert_eq!(hero.name(), "Hero");
    assert_eq!(hero.new_instance(&[]).unwrap().to_string(), "my.awesome.Hero");
}

#[test]
fn test_own_to_string_wins() {
    let hero = builder()
        .design(
            "Hero",
            ClassDefinition::new().method("toString", |this, _args| {
                Ok(Value::from(format!("hero #{}", this.get("id").unwrap_or_default())))
            }),
        )
        .unwrap();

    let h = hero.new_instance(&[]).unwrap();
    h.set("id", 1);
    assert_eq!(h.to_string(), "hero #1");
}

#[test]
fn test_published_unless_local() {
    let registry = NamespaceRegistry::anchored();
    let published = ClassBuilder::new(&registry)
        .design("app.Published", ClassDefinition::new())
        .unwrap();
    ClassBuilder::new(&registry)
        .local()
        .design("app.Hidden", ClassDefinition::new())
        .unwrap();

    assert_eq!(registry.lookup_type("app.Published"), Some(published));
    assert!(registry.lookup("app.Hidden").is_none());
}

#[test]
fn test_anonymous_never_published() {
    let registry = NamespaceRegistry::anchored();
    let anonymous = ClassBuilder::new(&registry)
        .design_anonymous(ClassDefinition::new().with("x", 1))
        .unwrap();

    assert_eq!(anonymous.to_string(), "AnonymousClass");
    assert!(registry.bindings().is_empty());
}

#[test]
fn test_extend_class_after_build() {
    let a = builder()
        .design("A", ClassDefinition::new().with("x", 1))
        .unwrap();
    let instance = a.new_instance(&[]).unwrap();

    let copied = extend_class(&a, ClassDefinition::new().with("x", 2).with("y", 3), false);

    assert_eq!(copied, 1);
    assert_eq!(instance.get("x"), Some(Value::from(1)));
    assert_eq!(instance.get("y"), Some(Value::from(3)));

    extend_class(&a, ClassDefinition::new().with("x", 2), true);
    assert_eq!(instance.get("x"), Some(Value::from(2)));
}

#[test]
fn test_own_methods_named_after_type() {
    let speak = name_method("a");
    builder()
        .design("zoo.Animal", ClassDefinition::new().with("speak", speak.clone()))
        .unwrap();

    assert_eq!(speak.display_name().as_deref(), Some("zoo.Animal::speak"));
}

#[test]
fn test_definition_from_iterator() {
    let definition: ClassDefinition = [("a", 1), ("b", 2)].into_iter().collect();
    let c = builder().design("C", definition).unwrap();

    assert_eq!(c.prototype().lookup("b"), Some(Value::from(2)));
}

#[derive(Clone, Default)]
struct Capture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_ignored_directives_are_logged() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let t = builder().design("T", ClassDefinition::new()).unwrap();
        builder()
            .design(
                "logged.C",
                ClassDefinition::new()
                    .with("Extends", 1)
                    .implements([&t])
                    .with("STATIC", "nope"),
            )
            .unwrap();
    });

    let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("ignoring non-type Extends"));
    assert!(output.contains("ignoring STATIC that is not a map"));
    assert!(output.contains("mixed in trait"));
    assert!(output.contains("designed class"));
}

#[test]
fn test_nested_class_reachable_under_enclosing_class() {
    let registry = NamespaceRegistry::anchored();
    let builder = ClassBuilder::new(&registry);
    let widget = builder.design("ui.Widget", ClassDefinition::new()).unwrap();
    let button = builder
        .design("ui.Widget.Button", ClassDefinition::new().extends(&widget))
        .unwrap();

    assert_eq!(registry.lookup_type("ui.Widget"), Some(widget.clone()));
    assert_eq!(registry.lookup_type("ui.Widget.Button"), Some(button.clone()));
    assert_eq!(widget.static_member("Button"), Some(Value::Type(button.clone())));
    assert_eq!(button.to_string(), "ui.Widget.Button");
}
