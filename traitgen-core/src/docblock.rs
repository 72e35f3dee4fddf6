//! Documentation block model: parse a raw `/** ... */` comment into a short
//! description, a long description and ordered `@tags`, and render it back.
//!
//! Tag content is kept as written, including the indentation of continuation
//! lines after the comment margin. Typed information (the type alternatives
//! of `@param`, `@return`, `@throws`, ...) is derived on demand so that the
//! text written out is what was read.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Tag kinds whose payload starts with a type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeableKind {
    Param,
    Return,
    Property,
    Var,
    Throws,
    /// `@method [static] [Type] name(...)`; the type is the return type
    Method,
}

impl TypeableKind {
    /// Classifies a tag name (without `@`), ignoring case.
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "param" => Some(Self::Param),
            "return" => Some(Self::Return),
            "property" | "property-read" | "property-write" => Some(Self::Property),
            "var" => Some(Self::Var),
            "throws" => Some(Self::Throws),
            "method" => Some(Self::Method),
            _ => None,
        }
    }
}

/// One `@name content` annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    /// Everything after the tag name; continuation lines joined with `\n`
    pub content: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn typeable_kind(&self) -> Option<TypeableKind> {
        TypeableKind::from_tag_name(&self.name)
    }

    /// Declared type alternatives of a typeable tag, in written order.
    ///
    /// The type expression is the first whitespace-delimited token of the
    /// content. Only its leading run of names, `[]` suffixes and `|` counts,
    /// so `?Entity` yields `Entity` and `Collection<int, User>` yields
    /// `Collection`. A leading `$variable` means no type was written.
    pub fn types(&self) -> Vec<&str> {
        let Some(kind) = self.typeable_kind() else {
            return Vec::new();
        };

        let mut tokens = self.content.split_whitespace().peekable();
        if kind == TypeableKind::Method {
            if tokens.peek().is_some_and(|t| t.eq_ignore_ascii_case("static")) {
                tokens.next();
            }
            // `@method name()` declares no return type
            if tokens.peek().is_some_and(|t| t.contains('(')) {
                return Vec::new();
            }
        }

        match tokens.next() {
            Some(first) if !first.starts_with('$') => type_regex()
                .find(first)
                .map(|m| m.as_str().split('|').filter(|t| !t.is_empty()).collect())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

/// Parsed documentation comment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DocBlock {
    pub short_description: String,
    pub long_description: String,
    pub tags: Vec<Tag>,
}

fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // SAFETY: This regex pattern is hardcoded and validated at compile-test time.
    REGEX.get_or_init(|| {
        Regex::new(r"^@([A-Za-z][\w:\\-]*)\s*(.*)$").expect("Hardcoded regex pattern is valid")
    })
}

fn type_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?:[\w\\]+(?:\[\])*\|?)+").expect("Hardcoded regex pattern is valid")
    })
}

impl DocBlock {
    /// Parses a raw doc comment. Malformed input never fails: whatever cannot
    /// be classified as a tag ends up in the descriptions.
    pub fn parse(raw: &str) -> Self {
        let inner = raw.trim();
        let inner = inner.strip_prefix("/**").unwrap_or(inner);
        let inner = inner.strip_suffix("*/").unwrap_or(inner);

        let mut description: Vec<&str> = Vec::new();
        let mut tags: Vec<Tag> = Vec::new();

        for line in inner.lines().map(strip_comment_margin) {
            if let Some(caps) = tag_regex().captures(line) {
                tags.push(Tag::new(&caps[1], caps[2].trim_end()));
            } else if let Some(tag) = tags.last_mut() {
                if !line.trim().is_empty() {
                    tag.content.push('\n');
                    tag.content.push_str(line.trim_end());
                }
            } else {
                description.push(line.trim_end());
            }
        }

        // Short description is the first paragraph, long is the rest
        let text = description.join("\n");
        let text = text.trim();
        let (short, long) = match text.find("\n\n") {
            Some(at) => (&text[..at], text[at..].trim()),
            None => (text, ""),
        };

        Self {
            short_description: short.trim().to_string(),
            long_description: long.to_string(),
            tags,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.short_description.is_empty() && self.long_description.is_empty() && self.tags.is_empty()
    }

    /// Tags that declare a type.
    pub fn typeable_tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter().filter(|t| t.typeable_kind().is_some())
    }

    /// Renders the block with every line prefixed by `indent`.
    pub fn render(&self, indent: &str) -> String {
        let mut body: Vec<String> = Vec::new();
        if !self.short_description.is_empty() {
            body.extend(self.short_description.lines().map(str::to_string));
        }
        if !self.long_description.is_empty() {
            if !body.is_empty() {
                body.push(String::new());
            }
            body.extend(self.long_description.lines().map(str::to_string));
        }
        if !self.tags.is_empty() && !body.is_empty() {
            body.push(String::new());
        }
        for tag in &self.tags {
            let mut lines = tag.content.lines();
            match lines.next() {
                Some(first) if !first.is_empty() => body.push(format!("@{} {}", tag.name, first)),
                _ => body.push(format!("@{}", tag.name)),
            }
            body.extend(lines.map(str::to_string));
        }

        let mut out = format!("{}/**\n", indent);
        for line in body {
            if line.is_empty() {
                out.push_str(&format!("{} *\n", indent));
            } else {
                out.push_str(&format!("{} * {}\n", indent, line));
            }
        }
        out.push_str(&format!("{} */\n", indent));
        out
    }
}

/// Strips leading whitespace, one `*` and one following space.
fn strip_comment_margin(line: &str) -> &str {
    let line = line.trim_start();
    let line = line.strip_prefix('*').unwrap_or(line);
    line.strip_prefix(' ').unwrap_or(line)
}
