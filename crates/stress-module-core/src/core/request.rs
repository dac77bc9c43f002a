// crates/stress-module-core/src/core/request.rs
// ============================================================================
// Module: Item Requests
// Description: Item request model and key-string parser.
// Purpose: Split host key strings such as `stress.random[1,10]` into key and params.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Hosts address items with a single key string: the item key optionally
//! followed by a bracketed, comma-separated parameter list. Parameters may be
//! quoted to carry commas or brackets; inside quotes `\"` is an escaped quote.
//! Leading spaces before a parameter are skipped, trailing spaces of unquoted
//! parameters are kept.
//! Invariants:
//! - `key` without brackets has zero parameters; `key[]` has one empty parameter.
//! - Nothing may follow the closing bracket.
//! - Every [`ItemRequest`] renders to a key string that parses back to it. A
//!   parameter that needs quotes cannot end with `\`, since the closing quote
//!   would read as escaped; such requests are rejected at construction.
//!
//! Nested array parameters are not supported.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::ItemKey;
use crate::core::identifiers::is_valid_key_char;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Key-string parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestParseError {
    /// The key string has no key before the parameter list.
    #[error("item key is empty")]
    EmptyKey,
    /// A character outside the key alphabet appeared in the key.
    #[error("invalid character '{found}' in item key at position {position}")]
    InvalidKeyChar {
        /// Offending character.
        found: char,
        /// Byte offset of the character.
        position: usize,
    },
    /// The parameter list is missing its closing bracket.
    #[error("item parameters are not terminated by ']'")]
    UnterminatedParams,
    /// A quoted parameter is missing its closing quote.
    #[error("quoted item parameter is not terminated")]
    UnterminatedQuote,
    /// Something other than a comma or bracket followed a quoted parameter.
    #[error("unexpected character '{found}' after quoted parameter at position {position}")]
    UnexpectedAfterQuote {
        /// Offending character.
        found: char,
        /// Byte offset of the character.
        position: usize,
    },
    /// Characters follow the closing bracket.
    #[error("unexpected characters after ']' at position {position}")]
    TrailingCharacters {
        /// Byte offset of the first trailing character.
        position: usize,
    },
    /// A parameter needs quotes but ends with a backslash.
    #[error("item parameter {index} needs quotes but ends with '\\'")]
    UnquotableParam {
        /// Zero-based parameter index.
        index: usize,
    },
}

// ============================================================================
// SECTION: Request Model
// ============================================================================

/// Item request: key plus ordered parameters.
///
/// # Invariants
/// - Parameter count is caller-determined; no implicit defaults are added.
/// - The key is well formed and every parameter can be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRequest {
    /// Item key without parameters.
    key: ItemKey,
    /// Ordered item parameters.
    params: Vec<String>,
}

impl ItemRequest {
    /// Creates a request from a key and parameter list.
    ///
    /// # Errors
    ///
    /// Returns [`RequestParseError`] when the key is empty or uses characters
    /// outside the key alphabet, or a parameter cannot be rendered.
    pub fn new(key: impl Into<ItemKey>, params: Vec<String>) -> Result<Self, RequestParseError> {
        let key = key.into();
        if key.as_str().is_empty() {
            return Err(RequestParseError::EmptyKey);
        }
        if let Some((position, found)) =
            key.as_str().char_indices().find(|&(_, ch)| !is_valid_key_char(ch))
        {
            return Err(RequestParseError::InvalidKeyChar {
                found,
                position,
            });
        }
        if let Some(index) =
            params.iter().position(|param| needs_quotes(param) && param.ends_with('\\'))
        {
            return Err(RequestParseError::UnquotableParam {
                index,
            });
        }
        Ok(Self {
            key,
            params,
        })
    }

    /// Builds a request from already validated parts.
    fn from_parts(key: &str, params: Vec<String>) -> Self {
        Self {
            key: ItemKey::new(key),
            params,
        }
    }

    /// Parses a host key string such as `stress.random[1,1000]`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestParseError`] when the key is empty or malformed, or the
    /// parameter list is not well formed.
    pub fn parse(text: &str) -> Result<Self, RequestParseError> {
        let key_len = text.find(|ch: char| !is_valid_key_char(ch)).unwrap_or(text.len());
        let (key, rest) = text.split_at(key_len);
        let mut rest_chars = rest.chars();
        let first = rest_chars.next();
        if key.is_empty() {
            return match first {
                None | Some('[') => Err(RequestParseError::EmptyKey),
                Some(found) => Err(RequestParseError::InvalidKeyChar {
                    found,
                    position: 0,
                }),
            };
        }
        match first {
            None => Ok(Self::from_parts(key, Vec::new())),
            Some('[') => {
                let body_start = key_len + 1;
                let (params, consumed) = parse_params(rest_chars.as_str(), body_start)?;
                let end = body_start + consumed;
                if end < text.len() {
                    return Err(RequestParseError::TrailingCharacters {
                        position: end,
                    });
                }
                Ok(Self::from_parts(key, params))
            }
            Some(found) => Err(RequestParseError::InvalidKeyChar {
                found,
                position: key_len,
            }),
        }
    }

    /// Returns the item key.
    #[must_use]
    pub const fn key(&self) -> &ItemKey {
        &self.key
    }

    /// Returns the ordered parameters.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Returns the number of parameters.
    #[must_use]
    pub const fn nparam(&self) -> usize {
        self.params.len()
    }

    /// Returns the parameter at `index`, if present.
    #[must_use]
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }
}

impl fmt::Display for ItemRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)?;
        if self.params.is_empty() {
            return Ok(());
        }
        f.write_str("[")?;
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write_param(f, param)?;
        }
        f.write_str("]")
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses the parameter list following `[`.
///
/// Returns the parameters and the number of bytes consumed including the
/// closing bracket. `base` is the byte offset of `input` within the full key
/// string and is used for error positions.
fn parse_params(input: &str, base: usize) -> Result<(Vec<String>, usize), RequestParseError> {
    let mut params = Vec::new();
    let mut chars = input.char_indices().peekable();
    loop {
        skip_spaces(&mut chars);
        let Some(&(_, next)) = chars.peek() else {
            return Err(RequestParseError::UnterminatedParams);
        };
        if next == '"' {
            chars.next();
            params.push(read_quoted(&mut chars)?);
            skip_spaces(&mut chars);
            match chars.next() {
                Some((_, ',')) => {}
                Some((index, ']')) => return Ok((params, index + 1)),
                Some((index, found)) => {
                    return Err(RequestParseError::UnexpectedAfterQuote {
                        found,
                        position: base + index,
                    });
                }
                None => return Err(RequestParseError::UnterminatedParams),
            }
        } else {
            let mut value = String::new();
            loop {
                match chars.next() {
                    Some((_, ',')) => break,
                    Some((index, ']')) => {
                        params.push(value);
                        return Ok((params, index + 1));
                    }
                    Some((_, ch)) => value.push(ch),
                    None => return Err(RequestParseError::UnterminatedParams),
                }
            }
            params.push(value);
        }
    }
}

/// Reads a quoted parameter body after its opening quote.
fn read_quoted(chars: &mut Peekable<CharIndices<'_>>) -> Result<String, RequestParseError> {
    let mut value = String::new();
    while let Some((_, ch)) = chars.next() {
        match ch {
            '\\' if chars.next_if(|&(_, next)| next == '"').is_some() => value.push('"'),
            '"' => return Ok(value),
            other => value.push(other),
        }
    }
    Err(RequestParseError::UnterminatedQuote)
}

/// Advances past consecutive spaces.
fn skip_spaces(chars: &mut Peekable<CharIndices<'_>>) {
    while chars.next_if(|&(_, ch)| ch == ' ').is_some() {}
}

/// Returns true when a parameter would not survive re-parsing bare.
fn needs_quotes(param: &str) -> bool {
    param.starts_with(' ') || param.starts_with('"') || param.contains([',', ']'])
}

/// Writes a parameter, quoting it when it would not survive re-parsing bare.
fn write_param(f: &mut fmt::Formatter<'_>, param: &str) -> fmt::Result {
    if !needs_quotes(param) {
        return f.write_str(param);
    }
    f.write_str("\"")?;
    f.write_str(&param.replace('"', "\\\""))?;
    f.write_str("\"")
}
