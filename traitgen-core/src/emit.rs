//! Source emission for generated units.
//!
//! The default [`PhpEmitter`] writes a complete PHP file:
//!
//! ```text
//! <?php
//!
//! namespace Generated;
//!
//! use App\Model\User;
//!
//! trait MailerTrait
//! {
//!     /**
//!      * @return User
//!      */
//!     abstract public function current();
//! }
//! ```

use crate::reflect::ParameterDescriptor;
use crate::unit::{GeneratedMethod, GeneratedUnit};

/// Capability contract: render a generated unit to source text.
pub trait Emitter {
    fn render(&self, unit: &GeneratedUnit) -> String;
}

/// Emits PHP trait source.
#[derive(Debug, Clone)]
pub struct PhpEmitter {
    indent: String,
}

impl Default for PhpEmitter {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }
}

impl PhpEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the member indentation (four spaces by default).
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    fn render_method(&self, method: &GeneratedMethod) -> String {
        let mut out = String::new();
        if let Some(doc) = &method.doc_block {
            out.push_str(&doc.render(&self.indent));
        }

        // PHP rejects `abstract final`; the abstract keyword wins
        let mut modifiers: Vec<&str> = Vec::new();
        if method.is_abstract {
            modifiers.push("abstract");
        } else if method.is_final {
            modifiers.push("final");
        }
        modifiers.push(method.visibility.as_str());
        if method.is_static {
            modifiers.push("static");
        }

        let parameters: Vec<String> = method.parameters.iter().map(render_parameter).collect();

        out.push_str(&format!(
            "{}{} function {}{}({})",
            self.indent,
            modifiers.join(" "),
            if method.returns_reference { "&" } else { "" },
            method.name,
            parameters.join(", ")
        ));
        if let Some(return_type) = &method.return_type {
            out.push_str(&format!(": {}", return_type));
        }
        out.push_str(";\n");
        out
    }
}

/// `[Type ][&][...]$name[ = default]`
pub fn render_parameter(parameter: &ParameterDescriptor) -> String {
    let mut out = String::new();
    if let Some(type_hint) = &parameter.type_hint {
        out.push_str(type_hint);
        out.push(' ');
    }
    if parameter.by_reference {
        out.push('&');
    }
    if parameter.variadic {
        out.push_str("...");
    }
    out.push('$');
    out.push_str(&parameter.name);
    if let Some(default) = &parameter.default_value {
        out.push_str(" = ");
        out.push_str(default);
    }
    out
}

impl Emitter for PhpEmitter {
    fn render(&self, unit: &GeneratedUnit) -> String {
        let mut out = String::from("<?php\n\n");

        if !unit.namespace().is_empty() {
            out.push_str(&format!("namespace {};\n\n", unit.namespace()));
        }

        if !unit.imports().is_empty() {
            for import in unit.imports().iter() {
                out.push_str(&format!("use {};\n", import));
            }
            out.push('\n');
        }

        out.push_str(&format!("trait {}\n{{\n", unit.name()));
        let methods: Vec<String> = unit.methods().iter().map(|m| self.render_method(m)).collect();
        out.push_str(&methods.join("\n"));
        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docblock::DocBlock;
    use crate::imports::ImportSet;
    use crate::reflect::Visibility;

    fn method(name: &str) -> GeneratedMethod {
        GeneratedMethod {
            name: name.to_string(),
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
            is_abstract: true,
            returns_reference: false,
            parameters: Vec::new(),
            return_type: None,
            doc_block: None,
        }
    }

    #[test]
    fn test_render_parameter_shapes() {
        let p = ParameterDescriptor::new("data").with_type("array").with_default("[]");
        assert_eq!(render_parameter(&p), "array $data = []");

        let p = ParameterDescriptor::new("args").with_type("int").by_reference().variadic();
        assert_eq!(render_parameter(&p), "int &...$args");

        assert_eq!(render_parameter(&ParameterDescriptor::new("x")), "$x");
    }

    #[test]
    fn test_render_unit() {
        let mut save = method("save");
        save.parameters.push(ParameterDescriptor::new("data"));
        save.doc_block = Some(DocBlock::parse("/** @param array $data */"));

        let mut load = method("load");
        load.visibility = Visibility::Protected;
        load.is_final = true;
        load.returns_reference = true;
        load.return_type = Some("?User".to_string());

        let mut imports = ImportSet::new();
        imports.insert("App\\Model\\User");

        let unit = GeneratedUnit::new(
            "MailerTrait".to_string(),
            "Generated".to_string(),
            "App\\Service\\Mailer".to_string(),
            vec![save, load],
            imports,
        );

        let expected = "<?php\n\
\n\
namespace Generated;\n\
\n\
use App\\Model\\User;\n\
\n\
trait MailerTrait\n\
{\n\
\x20   /**\n\
\x20    * @param array $data\n\
\x20    */\n\
\x20   abstract public function save($data);\n\
\n\
\x20   abstract protected function &load(): ?User;\n\
}\n";
        assert_eq!(PhpEmitter::new().render(&unit), expected);
    }

    #[test]
    fn test_render_empty_global_unit() {
        let unit = GeneratedUnit::new(
            "WidgetTrait".to_string(),
            String::new(),
            "Widget".to_string(),
            Vec::new(),
            ImportSet::new(),
        );
        assert_eq!(PhpEmitter::new().render(&unit), "<?php\n\ntrait WidgetTrait\n{\n}\n");
    }

    #[test]
    fn test_custom_indent() {
        let unit = GeneratedUnit::new(
            "WidgetTrait".to_string(),
            String::new(),
            "Widget".to_string(),
            vec![method("draw")],
            ImportSet::new(),
        );
        let out = PhpEmitter::new().with_indent("\t").render(&unit);
        assert!(out.contains("\tabstract public function draw();\n"));
    }
}
