//! Declaration reader over the PHP token stream.
//!
//! Recovers, per class/trait/interface declaration:
//! - the namespace-qualified name and kind
//! - the resolved `extends` parent and used traits
//! - every method with visibility, modifiers, parameters, return type,
//!   preceding doc comment and body text
//!
//! Resilient by construction: unexpected tokens are skipped, never fatal.

use std::collections::HashMap;

use super::lexer::{tokenize, Span, Token};
use crate::reflect::{MethodDescriptor, ParameterDescriptor, TypeKind, Visibility};

/// A type declaration found in one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    /// Fully-qualified name without a leading separator
    pub name: String,
    pub kind: TypeKind,
    /// Resolved fully-qualified parent name
    pub parent: Option<String>,
    /// Resolved fully-qualified names of traits pulled in with `use`
    pub traits: Vec<String>,
    /// Methods in declaration order
    pub methods: Vec<MethodDescriptor>,
}

/// Modifiers collected ahead of a class member.
#[derive(Debug, Default)]
struct Modifiers {
    visibility: Option<Visibility>,
    is_static: bool,
    is_final: bool,
}

struct Reader<'a> {
    source: &'a str,
    tokens: Vec<(Token, Span)>,
    pos: usize,
    namespace: String,
    /// Lowercase alias -> fully-qualified name, from file-level `use` imports
    imports: HashMap<String, String>,
    types: Vec<TypeDecl>,
}

/// Reads every type declaration in `source`.
///
/// Returns the declarations plus the number of characters the lexer could
/// not classify.
pub fn read_declarations(source: &str) -> (Vec<TypeDecl>, usize) {
    let (tokens, skipped) = tokenize(source);
    let mut reader = Reader {
        source,
        tokens,
        pos: 0,
        namespace: String::new(),
        imports: HashMap::new(),
        types: Vec::new(),
    };
    reader.read_file();
    (reader.types, skipped)
}

impl<'a> Reader<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|(t, _)| t)
    }

    fn previous(&self) -> Option<&Token> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|(t, _)| t)
    }

    fn span(&self, index: usize) -> Span {
        self.tokens[index].1.clone()
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn take_name(&mut self) -> Option<String> {
        match self.peek() {
            Some(Token::Name(n)) => {
                let n = n.clone();
                self.pos += 1;
                Some(n)
            }
            _ => None,
        }
    }

    /// Source text covering tokens `first..=last`.
    fn text(&self, first: usize, last: usize) -> String {
        self.source[self.span(first).start..self.span(last).end]
            .trim()
            .to_string()
    }

    fn read_file(&mut self) {
        while let Some(token) = self.peek() {
            let after_member_access = matches!(
                self.previous(),
                Some(Token::DoubleColon) | Some(Token::Arrow)
            );

            if token.is_keyword("namespace") && !after_member_access {
                self.pos += 1;
                self.read_namespace();
            } else if token.is_keyword("use")
                && !after_member_access
                && matches!(self.peek_at(1), Some(Token::Name(_)))
            {
                self.pos += 1;
                self.read_import();
            } else if let Some(kind) = declaration_kind(token) {
                let declares = !after_member_access
                    && !matches!(self.previous(), Some(p) if p.is_keyword("new") || p.is_keyword("function"))
                    && matches!(self.peek_at(1), Some(Token::Name(_)));
                self.pos += 1;
                if declares {
                    self.read_type(kind);
                }
            } else {
                self.pos += 1;
            }
        }
    }

    /// `namespace A\B;`, `namespace A\B { ... }` or `namespace { ... }`.
    fn read_namespace(&mut self) {
        self.namespace = self
            .take_name()
            .map(|n| n.trim_start_matches('\\').to_string())
            .unwrap_or_default();
        self.imports.clear();
        self.eat(&Token::Semicolon);
    }

    /// File-level `use` import, including group and aliased forms.
    fn read_import(&mut self) {
        if matches!(self.peek(), Some(t) if t.is_keyword("function") || t.is_keyword("const")) {
            self.skip_statement();
            return;
        }

        while let Some(name) = self.take_name() {
            if self.eat(&Token::LBrace) {
                // `use A\{B, C as D}`: the trailing separator before `{` is not lexed
                let prefix = name.trim_end_matches('\\').to_string();
                while let Some(token) = self.peek().cloned() {
                    self.pos += 1;
                    match token {
                        Token::RBrace => break,
                        Token::Name(kind) if kind.eq_ignore_ascii_case("function")
                            || kind.eq_ignore_ascii_case("const") =>
                        {
                            if matches!(self.peek(), Some(Token::Name(_))) {
                                self.pos += 1;
                            }
                        }
                        Token::Name(item) => {
                            let full = format!("{}\\{}", prefix, item);
                            self.register_import(&full);
                        }
                        _ => {}
                    }
                }
            } else {
                self.register_import(&name);
            }

            if !self.eat(&Token::Comma) {
                break;
            }
        }
        self.skip_statement();
    }

    fn register_import(&mut self, name: &str) {
        let full = name.trim_start_matches('\\').to_string();
        let alias = if matches!(self.peek(), Some(t) if t.is_keyword("as")) {
            self.pos += 1;
            self.take_name()
        } else {
            None
        };
        let alias = alias.unwrap_or_else(|| last_segment(&full).to_string());
        self.imports.insert(alias.to_ascii_lowercase(), full);
    }

    /// Resolves a referenced class name against imports and the namespace.
    fn resolve_name(&self, name: &str) -> String {
        if let Some(absolute) = name.strip_prefix('\\') {
            return absolute.to_string();
        }

        let (first, rest) = match name.split_once('\\') {
            Some((first, rest)) => (first, Some(rest)),
            None => (name, None),
        };

        if first.eq_ignore_ascii_case("namespace") {
            if let Some(rest) = rest {
                return self.qualify(rest);
            }
        }

        match (self.imports.get(&first.to_ascii_lowercase()), rest) {
            (Some(full), Some(rest)) => format!("{}\\{}", full, rest),
            (Some(full), None) => full.clone(),
            (None, _) => self.qualify(name),
        }
    }

    fn qualify(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}\\{}", self.namespace, name)
        }
    }

    /// `class Name [extends P] [implements I, J] { ... }` and friends.
    fn read_type(&mut self, kind: TypeKind) {
        let Some(short_name) = self.take_name() else {
            return;
        };

        let mut decl = TypeDecl {
            name: self.qualify(&short_name),
            kind,
            parent: None,
            traits: Vec::new(),
            methods: Vec::new(),
        };

        while let Some(token) = self.peek() {
            if *token == Token::LBrace {
                break;
            }
            if token.is_keyword("extends") {
                self.pos += 1;
                // Interfaces may extend several parents; none of them carry bodies
                if let Some(parent) = self.take_name() {
                    if kind == TypeKind::Class {
                        decl.parent = Some(self.resolve_name(&parent));
                    }
                }
                continue;
            }
            self.pos += 1;
        }

        if self.eat(&Token::LBrace) {
            self.read_members(&mut decl);
        }
        self.types.push(decl);
    }

    fn read_members(&mut self, decl: &mut TypeDecl) {
        let mut doc: Option<String> = None;
        let mut modifiers = Modifiers::default();

        while let Some(token) = self.peek().cloned() {
            self.pos += 1;
            match token {
                Token::RBrace => return,
                Token::Comment(_) => {
                    if let Some(text) = token.doc_comment() {
                        doc = Some(text.to_string());
                    }
                }
                Token::AttributeOpen => self.skip_balanced(1),
                Token::LBrace => self.skip_balanced(1),
                Token::Semicolon => {
                    doc = None;
                    modifiers = Modifiers::default();
                }
                Token::Variable(_) => {
                    // Property declaration
                    self.skip_statement();
                    doc = None;
                    modifiers = Modifiers::default();
                }
                Token::Name(word) => match word.to_ascii_lowercase().as_str() {
                    "public" => modifiers.visibility = Some(Visibility::Public),
                    "protected" => modifiers.visibility = Some(Visibility::Protected),
                    "private" => modifiers.visibility = Some(Visibility::Private),
                    "static" => modifiers.is_static = true,
                    "final" => modifiers.is_final = true,
                    "function" => {
                        let modifiers = std::mem::take(&mut modifiers);
                        if let Some(method) = self.read_method(doc.take(), modifiers) {
                            decl.methods.push(method);
                        }
                    }
                    "use" => {
                        self.read_trait_use(decl);
                        doc = None;
                        modifiers = Modifiers::default();
                    }
                    "const" | "case" => {
                        self.skip_statement();
                        doc = None;
                        modifiers = Modifiers::default();
                    }
                    // `abstract`, `var`, `readonly`, property types
                    _ => {}
                },
                _ => {}
            }
        }
    }

    /// `use A, B;` or `use A, B { A::x insteadof B; }` inside a class body.
    fn read_trait_use(&mut self, decl: &mut TypeDecl) {
        while let Some(token) = self.peek().cloned() {
            self.pos += 1;
            match token {
                Token::Name(name) => decl.traits.push(self.resolve_name(&name)),
                Token::Comma => {}
                Token::LBrace => {
                    self.skip_balanced(1);
                    return;
                }
                Token::Semicolon => return,
                _ => return,
            }
        }
    }

    /// Reads a method after its `function` keyword.
    fn read_method(&mut self, doc_comment: Option<String>, modifiers: Modifiers) -> Option<MethodDescriptor> {
        let returns_reference = self.eat(&Token::Amp);
        let name = self.take_name()?;
        if !self.eat(&Token::LParen) {
            return None;
        }
        let parameters = self.read_parameters();

        let return_type = if self.eat(&Token::Colon) {
            let first = self.pos;
            while !matches!(self.peek(), None | Some(Token::LBrace) | Some(Token::Semicolon)) {
                self.pos += 1;
            }
            (self.pos > first).then(|| self.qualify_type(&self.text(first, self.pos - 1)))
        } else {
            None
        };

        let body = match self.peek() {
            Some(Token::LBrace) => {
                let open = self.pos;
                self.pos += 1;
                self.skip_balanced(1);
                let close = self.pos - 1;
                let start = self.span(open).end;
                let end = self.span(close).start.max(start);
                Some(self.source[start..end].to_string())
            }
            Some(Token::Semicolon) => {
                self.pos += 1;
                None
            }
            _ => None,
        };

        Some(MethodDescriptor {
            name,
            visibility: modifiers.visibility.unwrap_or_default(),
            is_static: modifiers.is_static,
            is_final: modifiers.is_final,
            returns_reference,
            parameters,
            return_type,
            doc_comment,
            body,
        })
    }

    /// Reads parameters after `(` through the matching `)`.
    fn read_parameters(&mut self) -> Vec<ParameterDescriptor> {
        let mut parameters = Vec::new();
        let mut current: Vec<usize> = Vec::new();
        let mut depth = 0usize;

        while let Some(token) = self.peek().cloned() {
            let index = self.pos;
            self.pos += 1;
            match token {
                Token::AttributeOpen if depth == 0 => self.skip_balanced(1),
                Token::LParen | Token::LBracket | Token::LBrace | Token::AttributeOpen => {
                    depth += 1;
                    current.push(index);
                }
                Token::RParen if depth == 0 => break,
                Token::RParen | Token::RBracket | Token::RBrace => {
                    depth = depth.saturating_sub(1);
                    current.push(index);
                }
                Token::Comma if depth == 0 => {
                    parameters.extend(self.build_parameter(&current));
                    current.clear();
                }
                _ => current.push(index),
            }
        }

        parameters.extend(self.build_parameter(&current));
        parameters
    }

    /// `[modifiers] [Type] [&] [...] $name [= default]`
    fn build_parameter(&self, indices: &[usize]) -> Option<ParameterDescriptor> {
        let var_at = indices
            .iter()
            .position(|&i| matches!(self.tokens[i].0, Token::Variable(_)))?;
        let Token::Variable(name) = &self.tokens[indices[var_at]].0 else {
            return None;
        };

        let mut head = &indices[..var_at];
        let mut parameter = ParameterDescriptor::new(name.clone());

        if let Some((&last, rest)) = head.split_last() {
            if self.tokens[last].0 == Token::Ellipsis {
                parameter.variadic = true;
                head = rest;
            }
        }
        if let Some((&last, rest)) = head.split_last() {
            if self.tokens[last].0 == Token::Amp {
                parameter.by_reference = true;
                head = rest;
            }
        }

        // Promoted constructor properties carry member modifiers
        while let Some((&first, rest)) = head.split_first() {
            let is_modifier = ["public", "protected", "private", "readonly"]
                .iter()
                .any(|m| self.tokens[first].0.is_keyword(m));
            if !is_modifier {
                break;
            }
            head = rest;
        }

        if let (Some(&first), Some(&last)) = (head.first(), head.last()) {
            parameter.type_hint = Some(self.qualify_type(&self.text(first, last)));
        }

        let tail = &indices[var_at + 1..];
        if let Some((&assign, value)) = tail.split_first() {
            if self.tokens[assign].0 == Token::Assign {
                if let (Some(&first), Some(&last)) = (value.first(), value.last()) {
                    parameter.default_value = Some(self.qualify_default(&self.text(first, last)));
                }
            }
        }

        Some(parameter)
    }

    /// Rewrites every class name in a type expression as a rooted,
    /// fully-qualified name, so `?User|int` read under `use App\Model\User`
    /// becomes `?\App\Model\User|int` and means the same in any namespace.
    fn qualify_type(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find(is_name_start) {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            let end = name_end(tail);
            self.push_qualified(&mut out, &tail[..end], is_reserved_type);
            rest = &tail[end..];
        }
        out.push_str(rest);
        out
    }

    /// Qualifies the class part of `Foo::CONST` references in a default
    /// value. String literals are copied untouched.
    fn qualify_default(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find(|c: char| is_name_start(c) || c == '\'' || c == '"') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if tail.starts_with(['\'', '"']) {
                let end = string_literal_end(tail);
                out.push_str(&tail[..end]);
                rest = &tail[end..];
                continue;
            }

            let end = name_end(tail);
            let (name, after) = tail.split_at(end);
            if after.trim_start().starts_with("::") {
                self.push_qualified(&mut out, name, is_relative_scope);
            } else {
                out.push_str(name);
            }
            rest = after;
        }
        out.push_str(rest);
        out
    }

    fn push_qualified(&self, out: &mut String, name: &str, keep: fn(&str) -> bool) {
        if keep(name) || name.trim_start_matches('\\').is_empty() {
            out.push_str(name);
        } else {
            out.push('\\');
            out.push_str(&self.resolve_name(name));
        }
    }

    /// Skips to the token after the closer that balances `depth` open groups.
    fn skip_balanced(&mut self, mut depth: usize) {
        while let Some(token) = self.peek() {
            match token {
                Token::LBrace | Token::LParen | Token::LBracket | Token::AttributeOpen => depth += 1,
                Token::RBrace | Token::RParen | Token::RBracket => depth -= 1,
                _ => {}
            }
            self.pos += 1;
            if depth == 0 {
                return;
            }
        }
    }

    /// Skips past the next `;` at nesting level zero, stopping before an
    /// unbalanced `}` so the enclosing body still sees it.
    fn skip_statement(&mut self) {
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match token {
                Token::LParen | Token::LBracket | Token::LBrace | Token::AttributeOpen => depth += 1,
                Token::RParen | Token::RBracket => depth = depth.saturating_sub(1),
                Token::RBrace => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                Token::Semicolon if depth == 0 => {
                    self.pos += 1;
                    return;
                }
                _ => {}
            }
            self.pos += 1;
        }
    }
}

fn declaration_kind(token: &Token) -> Option<TypeKind> {
    if token.is_keyword("class") {
        Some(TypeKind::Class)
    } else if token.is_keyword("trait") {
        Some(TypeKind::Trait)
    } else if token.is_keyword("interface") {
        Some(TypeKind::Interface)
    } else {
        None
    }
}

/// Type keywords that are not class names and stay as written.
const RESERVED_TYPES: &[&str] = &[
    "array", "bool", "callable", "false", "float", "int", "iterable", "mixed", "never", "null",
    "object", "parent", "self", "static", "string", "true", "void",
];

fn is_reserved_type(name: &str) -> bool {
    RESERVED_TYPES.iter().any(|t| t.eq_ignore_ascii_case(name))
}

/// `self::`, `static::` and `parent::` resolve against the using class.
fn is_relative_scope(name: &str) -> bool {
    ["self", "static", "parent"].iter().any(|s| s.eq_ignore_ascii_case(name))
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '\\'
}

fn name_end(text: &str) -> usize {
    text.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '\\'))
        .unwrap_or(text.len())
}

/// Byte length of the quoted literal at the start of `text`, escapes included.
fn string_literal_end(text: &str) -> usize {
    let mut chars = text.char_indices();
    let Some((_, quote)) = chars.next() else {
        return 0;
    };
    let mut escaped = false;
    for (i, c) in chars {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return i + c.len_utf8();
        }
    }
    text.len()
}

fn last_segment(name: &str) -> &str {
    name.rsplit('\\').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(source: &str) -> Vec<TypeDecl> {
        read_declarations(source).0
    }

    #[test]
    fn test_reads_class_with_methods() {
        let types = read(
            r#"<?php
namespace App\Service;

use App\Model\User;

class Mailer
{
    private $transport;

    public function __construct($transport) { $this->transport = $transport; }

    /**
     * Sends a message.
     *
     * @param User $to
     */
    public function send(User $to, string $subject = 'Hi', array ...$extra): bool
    {
        return true;
    }

    protected static function util() { return 1; }

    final public function &ref(&$value) { return $value; }
}
"#,
        );

        assert_eq!(types.len(), 1);
        let mailer = &types[0];
        assert_eq!(mailer.name, "App\\Service\\Mailer");
        assert_eq!(mailer.kind, TypeKind::Class);

        let names: Vec<_> = mailer.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["__construct", "send", "util", "ref"]);

        let send = &mailer.methods[1];
        assert_eq!(send.visibility, Visibility::Public);
        assert_eq!(send.return_type.as_deref(), Some("bool"));
        assert!(send.doc_comment.as_deref().unwrap().contains("@param User $to"));
        assert!(send.has_body());
        assert_eq!(send.parameters.len(), 3);
        assert_eq!(send.parameters[0].type_hint.as_deref(), Some("\\App\\Model\\User"));
        assert_eq!(send.parameters[1].default_value.as_deref(), Some("'Hi'"));
        assert!(send.parameters[2].variadic);
        assert_eq!(send.parameters[2].type_hint.as_deref(), Some("array"));

        let util = &mailer.methods[2];
        assert!(util.is_static);
        assert_eq!(util.visibility, Visibility::Protected);
        assert!(util.doc_comment.is_none());

        let by_ref = &mailer.methods[3];
        assert!(by_ref.is_final);
        assert!(by_ref.returns_reference);
        assert!(by_ref.parameters[0].by_reference);
    }

    #[test]
    fn test_abstract_and_interface_methods_have_no_body() {
        let types = read(
            r#"<?php
abstract class Base { abstract protected function run(); public function empty() {} }
interface Runnable { public function go(int $x); }
"#,
        );
        assert_eq!(types.len(), 2);
        assert!(types[0].methods[0].body.is_none());
        assert!(!types[0].methods[1].has_body());
        assert_eq!(types[1].kind, TypeKind::Interface);
        assert!(!types[1].methods[0].has_body());
    }

    #[test]
    fn test_parent_and_trait_resolution() {
        let types = read(
            r#"<?php
namespace App\Http;

use Framework\Controller as BaseController;
use Framework\{Concerns\Logs, Concerns\Caches as Cache};

class Home extends BaseController
{
    use Logs, Cache;
    use \Other\Direct { Direct::x insteadof Logs; }
}

class Plain extends Support\Base {}
"#,
        );
        assert_eq!(types[0].parent.as_deref(), Some("Framework\\Controller"));
        assert_eq!(
            types[0].traits,
            vec![
                "Framework\\Concerns\\Logs".to_string(),
                "Framework\\Concerns\\Caches".to_string(),
                "Other\\Direct".to_string(),
            ]
        );
        assert_eq!(types[1].parent.as_deref(), Some("App\\Http\\Support\\Base"));
    }

    #[test]
    fn test_class_constant_and_anonymous_class_ignored() {
        let types = read(
            r#"<?php
$name = Foo::class;
$obj = new class extends Bar { public function x() { return 1; } };
"#,
        );
        assert!(types.is_empty());
    }

    #[test]
    fn test_members_do_not_leak_docs() {
        let types = read(
            r#"<?php
class Widget
{
    /** @var int */
    public int $count = 0;

    const SIZES = ['a' => 1, 'b' => 2];

    public function render() { return "<div>{$this->count}</div>"; }
}
"#,
        );
        let render = &types[0].methods[0];
        assert_eq!(render.name, "render");
        assert!(render.doc_comment.is_none());
        assert!(render.has_body());
    }

    #[test]
    fn test_default_values_keep_source_text() {
        let types = read(
            "<?php class A { public function f($a = [1, 2], $b = self::X, ?array $c = null, #[Sensitive] $d = array('x')) { return 0; } }",
        );
        let params = &types[0].methods[0].parameters;
        assert_eq!(params.len(), 4);
        assert_eq!(params[0].default_value.as_deref(), Some("[1, 2]"));
        assert_eq!(params[1].default_value.as_deref(), Some("self::X"));
        assert_eq!(params[2].type_hint.as_deref(), Some("?array"));
        assert_eq!(params[2].default_value.as_deref(), Some("null"));
        assert_eq!(params[3].type_hint, None);
        assert_eq!(params[3].default_value.as_deref(), Some("array('x')"));
    }

    #[test]
    fn test_promoted_constructor_properties() {
        let types = read("<?php class P { public function __construct(private readonly Clock $clock) {} }");
        let param = &types[0].methods[0].parameters[0];
        assert_eq!(param.name, "clock");
        assert_eq!(param.type_hint.as_deref(), Some("\\Clock"));
    }

    #[test]
    fn test_signature_class_names_are_rooted() {
        let types = read(
            r#"<?php
namespace App\Service;

use App\Model\User;
use App\Model as M;

class Mailer
{
    public function send(
        User $to,
        ?Transport $t = null,
        M\Status|\Stringable|int $status = Status::SENT,
        self $copy = null,
        string $label = 'User::NAME',
        array $map = [User::class => self::X],
    ): User|static {
        return $to;
    }
}
"#,
        );
        let send = &types[0].methods[0];
        let hints: Vec<_> = send.parameters.iter().map(|p| p.type_hint.as_deref().unwrap()).collect();
        assert_eq!(
            hints,
            vec![
                "\\App\\Model\\User",
                "?\\App\\Service\\Transport",
                "\\App\\Model\\Status|\\Stringable|int",
                "self",
                "string",
                "array",
            ]
        );
        let defaults: Vec<_> = send.parameters.iter().filter_map(|p| p.default_value.as_deref()).collect();
        assert_eq!(
            defaults,
            vec![
                "null",
                "\\App\\Service\\Status::SENT",
                "null",
                "'User::NAME'",
                "[\\App\\Model\\User::class => self::X]",
            ]
        );
        assert_eq!(send.return_type.as_deref(), Some("\\App\\Model\\User|static"));
    }

    #[test]
    fn test_braced_namespaces() {
        let types = read(
            r#"<?php
namespace One { class A {} }
namespace Two { class A {} }
namespace { class Root {} }
"#,
        );
        let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["One\\A", "Two\\A", "Root"]);
    }
}
