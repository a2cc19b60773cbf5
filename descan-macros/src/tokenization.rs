//! Compile-time tokenization of format strings.
//!
//! Runs the replacement-field grammar at macro-expansion time so that brace
//! balance, arg-id syntax, and indexing-mode errors are compile errors. The
//! runtime engine walks the same grammar again; this pass additionally
//! understands named capture (`{ident}`), which is macro-level sugar the
//! runtime never sees.

use syn::LitStr;

use crate::constants::{
    MAX_ARG_ID_LEN, MAX_FORMAT_STRING_LEN, MAX_TOKENS, TEXT_SEGMENT_CAPACITY,
    TOKENS_INITIAL_CAPACITY,
};

/// How one field designates its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// `{}`: takes the next explicit macro argument.
    Anonymous,
    /// `{0}`: takes the explicit macro argument at that position.
    Indexed(usize),
    /// `{ident}`: captures the in-scope variable of that name.
    Named(Box<str>),
}

/// One replacement field as written in the source format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldToken {
    pub placeholder: Placeholder,
    /// The opaque specifier after `:`, passed through to the runtime.
    pub spec: Option<Box<str>>,
}

/// Token type for compile-time tokenization: literal text (escapes already
/// unescaped) or a replacement field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatToken {
    Text(String),
    Field(FieldToken),
}

/// Keywords that cannot name a captured variable.
const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where",
    "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
];

fn is_valid_identifier(s: &str) -> bool {
    if s.is_empty() || RUST_KEYWORDS.contains(&s) {
        return false;
    }
    let mut chars = s.chars();
    let first = chars.next().unwrap(); // checked is_empty above
    if !first.is_alphabetic() && first != '_' {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Tokenize a format string into text runs and fields, handling `{{`/`}}`
/// escapes and enforcing the compile-time limits.
pub fn tokenize_format_string(
    format_str: &str,
    format_lit: &LitStr,
) -> Result<Vec<FormatToken>, syn::Error> {
    let fail = |message: String| syn::Error::new(format_lit.span(), message);

    if format_str.len() > MAX_FORMAT_STRING_LEN {
        return Err(fail(format!(
            "Format string too long ({} bytes). Maximum allowed: {} bytes.",
            format_str.len(),
            MAX_FORMAT_STRING_LEN
        )));
    }

    let mut tokens: Vec<FormatToken> = Vec::with_capacity(TOKENS_INITIAL_CAPACITY);
    let mut current_text = String::with_capacity(TEXT_SEGMENT_CAPACITY);
    let mut chars = format_str.chars().peekable();

    let push_token = |tokens: &mut Vec<FormatToken>, token: FormatToken| {
        if tokens.len() >= MAX_TOKENS {
            return Err(fail(format!(
                "Too many tokens in format string. Maximum allowed: {MAX_TOKENS}."
            )));
        }
        tokens.push(token);
        Ok(())
    };

    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    current_text.push('{');
                    continue;
                }

                if !current_text.is_empty() {
                    push_token(
                        &mut tokens,
                        FormatToken::Text(std::mem::take(&mut current_text)),
                    )?;
                    current_text = String::with_capacity(TEXT_SEGMENT_CAPACITY);
                }

                let mut content = String::new();
                let mut closed = false;
                for next in chars.by_ref() {
                    if next == '}' {
                        closed = true;
                        break;
                    }
                    if next == '{' {
                        return Err(fail(
                            "Unescaped '{' inside a replacement field. Use '{{' to escape it."
                                .into(),
                        ));
                    }
                    content.push(next);
                }
                if !closed {
                    return Err(fail(
                        "Unmatched '{' in format string. Use '{{' to escape it.".into(),
                    ));
                }

                push_token(&mut tokens, FormatToken::Field(parse_field(&content, &fail)?))?;
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    current_text.push('}');
                } else {
                    return Err(fail(
                        "Unmatched '}' in format string. Use '}}' to escape it.".into(),
                    ));
                }
            }
            other => current_text.push(other),
        }
    }

    if !current_text.is_empty() {
        push_token(&mut tokens, FormatToken::Text(current_text))?;
    }

    Ok(tokens)
}

fn parse_field(
    content: &str,
    fail: &impl Fn(String) -> syn::Error,
) -> Result<FieldToken, syn::Error> {
    let (arg_id, spec) = match content.split_once(':') {
        Some((head, spec)) => (head, Some(spec)),
        None => (content, None),
    };

    if arg_id.len() > MAX_ARG_ID_LEN {
        return Err(fail(format!(
            "Arg-id in replacement field too long (>{MAX_ARG_ID_LEN} characters)."
        )));
    }

    let placeholder = if arg_id.is_empty() {
        Placeholder::Anonymous
    } else if arg_id.bytes().all(|b| b.is_ascii_digit()) {
        Placeholder::Indexed(
            arg_id
                .parse::<usize>()
                .map_err(|_| fail(format!("Argument index '{arg_id}' is too large.")))?,
        )
    } else if is_valid_identifier(arg_id) {
        Placeholder::Named(arg_id.into())
    } else {
        return Err(fail(format!(
            "Invalid arg-id '{arg_id}' in replacement field. Use '{{}}' for anonymous fields, \
             '{{0}}' for positional fields, or a valid variable name for named capture."
        )));
    };

    Ok(FieldToken {
        placeholder,
        spec: spec.map(Into::into),
    })
}
