use colored::Colorize;

use protoclass_runtime::{
    Binding, ClassError, ClassType, Container, NamespaceRegistry, ResolvedMember, TypeKind, Value,
};

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// Render each type, separated by blank lines.
    pub fn render_types<'a>(&self, types: impl IntoIterator<Item = &'a ClassType>) -> String {
        types
            .into_iter()
            .map(|ty| self.format_type(ty))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Example:
    ///   class zoo.Dog extends zoo.Animal
    ///     static kingdom = "animalia"
    ///     speak() from zoo.Dog
    ///     legs = 4 from zoo.Animal
    pub fn format_type(&self, ty: &ClassType) -> String {
        let mut output = format!("{} {}", self.format_kind(ty.kind()), self.bold(&ty.label()));
        if let Some(super_type) = ty.super_type() {
            output.push_str(&format!(" extends {}", super_type.label()));
        }

        for (name, value) in &ty.statics() {
            output.push_str(&format!(
                "\n  {} {} = {}",
                self.dim("static"),
                name,
                format_data(value)
            ));
        }
        for member in ty.resolved_members() {
            output.push_str("\n  ");
            output.push_str(&self.format_member(&member));
        }
        output
    }

    fn format_member(&self, member: &ResolvedMember) -> String {
        let owner = member
            .owner
            .as_ref()
            .map_or_else(|| "Object".to_string(), ClassType::label);
        let declaration = match &member.value {
            Value::Function(_) => format!("{}()", member.name),
            other => format!("{} = {}", member.name, format_data(other)),
        };
        format!("{declaration} {}", self.dim(&format!("from {owner}")))
    }

    /// The namespace tree, two spaces per level.
    pub fn render_tree(&self, registry: &NamespaceRegistry) -> String {
        let mut lines = Vec::new();
        if let Some(root) = registry.root() {
            self.collect_tree(root, 0, &mut lines);
        }
        lines.join("\n")
    }

    fn collect_tree(&self, container: &Container, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        for (name, binding) in container.entries() {
            match binding {
                Binding::Container(child) => {
                    lines.push(format!("{indent}{}", self.bold(&name)));
                    self.collect_tree(&child, depth + 1, lines);
                }
                Binding::Value(Value::Type(ty)) => {
                    lines.push(format!("{indent}{name} ({})", self.format_kind(ty.kind())));
                }
                Binding::Value(value) => {
                    lines.push(format!("{indent}{name} = {}", format_data(&value)));
                }
            }
        }
    }

    pub fn format_error(&self, error: &ClassError) -> String {
        let label = match error {
            ClassError::ImplementationMissing(missing) => missing.name(),
            ClassError::Configuration(_) => "ConfigurationError",
            _ => "error",
        };
        let message = error.to_string();

        if !self.color {
            return format!("{label}: {message}");
        }

        let label = match error {
            ClassError::ImplementationMissing(_) => label.yellow().bold().to_string(),
            _ => label.red().bold().to_string(),
        };
        format!("{label}: {message}")
    }

    fn format_kind(&self, kind: TypeKind) -> String {
        let label = kind.as_str();
        if !self.color {
            return label.to_string();
        }

        match kind {
            TypeKind::Class => label.cyan().bold().to_string(),
            TypeKind::Interface => label.magenta().bold().to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Data values as they would be written in a manifest; strings are quoted.
pub fn format_data(value: &Value) -> String {
    match value {
        Value::Str(text) => format!("{text:?}"),
        Value::List(items) => {
            let items: Vec<String> = items.iter().map(format_data).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Map(members) => {
            let entries: Vec<String> = members
                .iter()
                .map(|(name, value)| format!("{name}: {}", format_data(value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        other => other.to_string(),
    }
}
