use std::iter::Peekable;
use std::str::CharIndices;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WkxError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TokenKind {
    Keyword(GeometryType),
    Dimension(Dimension),
    Empty,
    Number(f64),
    LeftParen,
    RightParen,
    Comma,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Byte range of the token text
    pub start: usize,
    pub end: usize,
    /// Character offset of the first character
    pub position: usize,
}

impl Token {
    pub(crate) fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }
}

struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    position: usize,
}

/// Split WKT input into tokens. Whitespace between tokens is skipped.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer {
        input,
        chars: input.char_indices().peekable(),
        position: 0,
    };
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

impl<'a> Lexer<'a> {
    fn bump(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next();
        if next.is_some() {
            self.position += 1;
        }
        next
    }

    fn byte_offset(&mut self) -> usize {
        self.chars
            .peek()
            .map(|(offset, _)| *offset)
            .unwrap_or(self.input.len())
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {
            self.position += 1;
        }

        let position = self.position;
        let Some(&(start, c)) = self.chars.peek() else {
            return Ok(None);
        };

        let kind = match c {
            '(' | ')' | ',' => {
                self.bump();
                match c {
                    '(' => TokenKind::LeftParen,
                    ')' => TokenKind::RightParen,
                    _ => TokenKind::Comma,
                }
            }
            '0'..='9' | '-' | '+' | '.' => {
                self.scan_number();
                let text = &self.input[start..self.byte_offset()];
                TokenKind::Number(parse_number(text).ok_or_else(|| WkxError::WktParse {
                    message: "malformed number".to_string(),
                    token: text.to_string(),
                    position,
                })?)
            }
            c if c.is_alphabetic() => {
                self.scan_word();
                let text = &self.input[start..self.byte_offset()];
                classify_word(text).ok_or_else(|| WkxError::WktParse {
                    message: "unknown keyword".to_string(),
                    token: text.to_string(),
                    position,
                })?
            }
            _ => {
                return Err(WkxError::WktParse {
                    message: "unexpected character".to_string(),
                    token: c.to_string(),
                    position,
                });
            }
        };

        Ok(Some(Token {
            kind,
            start,
            end: self.byte_offset(),
            position,
        }))
    }

    /// Consume a numeric literal, including any letters glued to it so that malformed input
    /// such as `1.5x` is reported as one bad number.
    fn scan_number(&mut self) {
        let mut prev = None;
        if let Some((_, c)) = self.bump() {
            prev = Some(c);
        }
        while let Some(&(_, c)) = self.chars.peek() {
            let sign_after_exponent =
                matches!(c, '+' | '-') && matches!(prev, Some('e') | Some('E'));
            if c.is_alphanumeric() || c == '.' || sign_after_exponent {
                self.bump();
                prev = Some(c);
            } else {
                break;
            }
        }
    }

    fn scan_word(&mut self) {
        while self
            .chars
            .next_if(|(_, c)| c.is_alphanumeric() || *c == '_')
            .is_some()
        {
            self.position += 1;
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };
    if let Some(value) = special_value(unsigned) {
        return Some(sign * value);
    }
    // rejects a doubled sign and lexical's own spellings of special values
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    lexical_core::parse::<f64>(unsigned.as_bytes())
        .ok()
        .map(|value| sign * value)
}

fn special_value(word: &str) -> Option<f64> {
    if word.eq_ignore_ascii_case("nan") {
        Some(f64::NAN)
    } else if word.eq_ignore_ascii_case("inf") || word.eq_ignore_ascii_case("infinity") {
        Some(f64::INFINITY)
    } else {
        None
    }
}

fn classify_word(word: &str) -> Option<TokenKind> {
    if let Some(geometry_type) = GeometryType::from_wkt_keyword(word) {
        Some(TokenKind::Keyword(geometry_type))
    } else if let Some(dim) = Dimension::from_wkt_tag(word) {
        Some(TokenKind::Dimension(dim))
    } else if word.eq_ignore_ascii_case("empty") {
        Some(TokenKind::Empty)
    } else {
        special_value(word).map(TokenKind::Number)
    }
}
