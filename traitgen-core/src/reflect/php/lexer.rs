//! PHP lexer built on logos.
//!
//! Only the structure needed to recover declarations is tokenized: names,
//! variables, literals, comments and the handful of punctuation marks that
//! delimit members and parameter lists. Any other character (operators,
//! casts, sigils) is dropped, which keeps brace and paren matching intact
//! without modelling the full grammar.

use logos::{Lexer, Logos, Skip};
use std::ops::Range;

/// Byte range of a token in the source text.
pub type Span = Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    // Whitespace (skip)
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,

    // Line comments (skip); `#[` starts an attribute instead
    #[regex(r"//[^\n]*", logos::skip)]
    #[regex(r"#([^\[\n][^\n]*)?", logos::skip)]
    LineComment,

    /// Block or doc comment, full text including delimiters
    #[token("/*", lex_block_comment)]
    Comment(String),

    #[token("<?php", ignore(ascii_case))]
    OpenTag,

    #[token("?>", skip_inline_output)]
    CloseTag,

    #[regex(r"'([^'\\]|\\.)*'")]
    #[regex(r#""([^"\\]|\\.)*""#)]
    StringLiteral,

    #[token("<<<", lex_heredoc)]
    Heredoc,

    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9][0-9_]*)?")]
    Number,

    /// Variable name without the `$` sigil
    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice()[1..].to_string())]
    Variable(String),

    /// Identifier, keyword or (qualified) name such as `\App\Model\User`
    #[regex(r"\\?[A-Za-z_][A-Za-z0-9_]*(\\[A-Za-z_][A-Za-z0-9_]*)*", |lex| lex.slice().to_string())]
    Name(String),

    #[token("#[")]
    AttributeOpen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token("&")]
    Amp,

    #[token("?")]
    Question,

    #[token(":")]
    Colon,

    #[token("::")]
    DoubleColon,

    #[token("->")]
    Arrow,

    #[token("=")]
    Assign,

    #[token("|")]
    Pipe,

    #[token("...")]
    Ellipsis,
}

impl Token {
    /// Case-insensitive keyword check (PHP keywords ignore case).
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Name(n) if n.eq_ignore_ascii_case(keyword))
    }

    /// Whether this is a `/** ... */` documentation comment.
    pub fn doc_comment(&self) -> Option<&str> {
        match self {
            Token::Comment(text) if text.starts_with("/**") && text != "/**/" => Some(text),
            _ => None,
        }
    }
}

fn lex_block_comment(lex: &mut Lexer<Token>) -> String {
    // We've already consumed "/*", now find "*/"
    let remainder = lex.remainder();

    if let Some(end) = remainder.find("*/") {
        lex.bump(end + 2);
    } else {
        // Unterminated comment - consume to end
        lex.bump(remainder.len());
    }

    lex.slice().to_string()
}

/// Everything between `?>` and the next open tag is literal output.
fn skip_inline_output(lex: &mut Lexer<Token>) -> Skip {
    let remainder = lex.remainder();
    let end = find_open_tag(remainder).unwrap_or(remainder.len());
    lex.bump(end);
    Skip
}

/// Heredoc / nowdoc: `<<<LABEL`, `<<<"LABEL"` or `<<<'LABEL'` up to the closing label.
fn lex_heredoc(lex: &mut Lexer<Token>) -> bool {
    let remainder = lex.remainder();
    let Some(header_end) = remainder.find('\n') else {
        return false;
    };

    let label = remainder[..header_end]
        .trim()
        .trim_matches(|c| c == '"' || c == '\'');
    if label.is_empty() || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return false;
    }

    let mut offset = header_end + 1;
    for line in remainder[header_end + 1..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(label) {
            if !rest.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_') {
                lex.bump(offset + (line.len() - trimmed.len()) + label.len());
                return true;
            }
        }
        offset += line.len();
    }

    // Unterminated heredoc - consume to end
    lex.bump(remainder.len());
    true
}

/// Byte offset of the first `<?php` open tag, ignoring case.
pub fn find_open_tag(text: &str) -> Option<usize> {
    text.as_bytes()
        .windows(5)
        .position(|w| w.eq_ignore_ascii_case(b"<?php"))
}

/// Tokenizes PHP source, starting at the first open tag when one is present.
///
/// Characters the lexer does not model are dropped; the returned count lets
/// callers report how much was skipped.
pub fn tokenize(source: &str) -> (Vec<(Token, Span)>, usize) {
    let start = find_open_tag(source).unwrap_or(0);
    let mut tokens = Vec::new();
    let mut skipped = 0;

    for (result, span) in Token::lexer(&source[start..]).spanned() {
        match result {
            Ok(token) => tokens.push((token, span.start + start..span.end + start)),
            Err(_) => skipped += 1,
        }
    }

    (tokens, skipped)
}
