//! Cartfile line parser
//!
//! Recognizes:
//! - Comments: any line whose first non-whitespace character is `#`
//! - Declarations: `git|github|binary "<locator>" [<verb>] [<value>]`, optionally followed by a
//!   `# comment`
//!
//! Matching only extracts tokens; defaults and heuristics live in [`corrections`].

mod corrections;

pub use corrections::{apply_corrections, RawDeclaration, DEFAULT_BRANCH};

use crate::domain::{CartfileEntry, DependencyKind, VersionVerb};
use crate::error::LineError;
use regex::Regex;
use std::sync::LazyLock;

// Declaration head: keyword, one or more spaces, quoted locator, then the rest of the line
static DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?P<kind>git|github|binary)\s+"(?P<locator>[a-zA-Z0-9\-_~:/@.]+)"(?P<rest>.*)$"#)
        .unwrap()
});

// Version, branch or commit; quotes may appear anywhere in the token and are dropped
static VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^["a-zA-Z0-9\-_.]+$"#).unwrap());

/// Parses one non-blank Cartfile line
pub fn parse_line(line: &str) -> Result<CartfileEntry, LineError> {
    let trimmed = line.trim_start();

    if trimmed.starts_with('#') {
        return Ok(CartfileEntry::comment(line));
    }

    let raw = match_declaration(trimmed.trim_end())?;
    Ok(CartfileEntry::Dependency(apply_corrections(raw)))
}

/// Matches the declaration grammar without applying any defaults
pub fn match_declaration(line: &str) -> Result<RawDeclaration, LineError> {
    let caps = DECLARATION_RE.captures(line).ok_or(LineError::Malformed)?;

    let kind = DependencyKind::from_keyword(&caps["kind"]).ok_or(LineError::Malformed)?;
    let locator = caps["locator"].to_string();
    let rest = &caps["rest"];

    // The locator's closing quote must be followed by whitespace or the end of line
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return Err(LineError::Malformed);
    }

    let (verb, value) = parse_requirement(strip_comment(rest))?;

    Ok(RawDeclaration {
        kind,
        locator,
        verb,
        value,
    })
}

/// Splits the text after the locator into an optional verb and an optional value
fn parse_requirement(text: &str) -> Result<(Option<VersionVerb>, Option<String>), LineError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Ok((None, None)),
        [value] => Ok((None, Some(parse_value(value)?))),
        [verb, value] => {
            let verb =
                VersionVerb::from_token(verb).ok_or_else(|| LineError::UnknownVerb(verb.to_string()))?;
            Ok((Some(verb), Some(parse_value(value)?)))
        }
        [_, _, extra @ ..] => Err(LineError::TrailingTokens(extra.join(" "))),
    }
}

/// Extracts a value token, removing every `"`
fn parse_value(token: &str) -> Result<String, LineError> {
    if !VALUE_RE.is_match(token) {
        return Err(LineError::InvalidValue(token.to_string()));
    }

    let value = token.replace('"', "");
    if value.is_empty() {
        return Err(LineError::InvalidValue(token.to_string()));
    }

    Ok(value)
}

/// Drops a trailing `# ...` comment
fn strip_comment(text: &str) -> &str {
    match text.find('#') {
        Some(pos) => &text[..pos],
        None => text,
    }
}
