use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{JoinOp, SignOp, Token, TokenKind};

/// Full identifier shape: optional leading `@`/`#`/`_`, then word
/// characters, `.` or `:`, ending in a word character.
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[@#_]?[\w.:]*\w+$").expect("identifier pattern compiles"));

/// Errors produced while tokenizing a filter string.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    /// A quote was opened but never closed before the input ended.
    ///
    /// Carries the partial text token (opening quote included) so the group
    /// scanner can reconstruct the surrounding context.
    UnterminatedText { token: Token },

    /// Unterminated text encountered inside a group; `token` holds the
    /// partial group literal accumulated so far.
    UnterminatedTextInGroup { text: String, token: Token },

    /// Parenthesis nesting never returned to zero before the input ended.
    UnbalancedGroup { missing: usize },

    /// Identifier run that does not match the identifier shape
    InvalidIdentifier(String),

    /// Number run that is empty, `.`-terminated, or not a finite float
    InvalidNumber(String),

    /// Sign run that is not one of the recognized comparison operators
    InvalidSign(String),

    /// Join run that is not exactly `&&` or `||`
    InvalidJoin(String),
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::UnterminatedText { token } => write!(f, "Invalid text: {}", token.literal),
            ScanError::UnterminatedTextInGroup { text, .. } => {
                write!(f, "Invalid text in group: {}", text)
            }
            ScanError::UnbalancedGroup { missing } => {
                write!(f, "Invalid group - missing {} closing bracket(s)", missing)
            }
            ScanError::InvalidIdentifier(literal) => write!(f, "Invalid identifier: {}", literal),
            ScanError::InvalidNumber(literal) => write!(f, "Invalid number: {}", literal),
            ScanError::InvalidSign(literal) => write!(f, "Invalid sign operator: {}", literal),
            ScanError::InvalidJoin(literal) => write!(f, "Invalid join operator: {}", literal),
        }
    }
}

impl std::error::Error for ScanError {}

/// Tokenizer over a single filter string.
///
/// [`Scanner::scan`] returns one token per call and advances an internal
/// cursor past the consumed input; it is callable repeatedly until an
/// [`TokenKind::Eof`] token comes back. Committed input is never rewound.
pub struct Scanner {
    input: Vec<char>,
    position: usize,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Scanner {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Consumes and returns a single character.
    pub fn read(&mut self) -> Option<char> {
        let ch = self.current_char();
        if ch.is_some() {
            self.advance();
        }
        ch
    }

    /// Scans the next token, dispatching on the next unread character.
    pub fn scan(&mut self) -> Result<Token, ScanError> {
        let Some(ch) = self.current_char() else {
            return Ok(Token::eof());
        };

        if ch.is_whitespace() {
            return Ok(self.scan_whitespace());
        }

        if ch == '(' {
            return self.scan_group();
        }

        if is_identifier_start(ch) {
            return self.scan_identifier();
        }

        if is_number_start(ch) {
            return self.scan_number();
        }

        if is_text_start(ch) {
            return self.scan_text();
        }

        if is_sign_start(ch) {
            return self.scan_sign();
        }

        if is_join_start(ch) {
            return self.scan_join();
        }

        self.advance();
        Ok(Token::new(TokenKind::Unexpected, ch.to_string()))
    }

    fn scan_whitespace(&mut self) -> Token {
        let mut literal = String::new();

        while let Some(ch) = self.current_char() {
            if !ch.is_whitespace() {
                break;
            }
            literal.push(ch);
            self.advance();
        }

        Token::new(TokenKind::Whitespace, literal)
    }

    fn scan_identifier(&mut self) -> Result<Token, ScanError> {
        let mut literal = String::new();

        while let Some(ch) = self.current_char() {
            if !is_identifier_start(ch) && !is_digit(ch) && ch != '.' && ch != ':' {
                break;
            }
            literal.push(ch);
            self.advance();
        }

        if !IDENTIFIER.is_match(&literal) {
            return Err(ScanError::InvalidIdentifier(literal));
        }

        Ok(Token::new(TokenKind::Identifier, literal))
    }

    fn scan_number(&mut self) -> Result<Token, ScanError> {
        let mut literal = String::new();

        // The first character is consumed unconditionally to cover an
        // optional leading minus.
        if let Some(ch) = self.read() {
            literal.push(ch);
        }

        while let Some(ch) = self.current_char() {
            if !is_digit(ch) && ch != '.' {
                break;
            }
            literal.push(ch);
            self.advance();
        }

        if literal.ends_with('.') || !literal.parse::<f64>().is_ok_and(f64::is_finite) {
            return Err(ScanError::InvalidNumber(literal));
        }

        Ok(Token::new(TokenKind::Number, literal))
    }

    fn scan_text(&mut self) -> Result<Token, ScanError> {
        let mut literal = String::new();

        let Some(quote) = self.read() else {
            return Err(ScanError::UnterminatedText {
                token: Token::new(TokenKind::Text, literal),
            });
        };
        literal.push(quote);

        let mut prev = quote;
        let mut closed = false;

        while let Some(ch) = self.read() {
            literal.push(ch);

            // The closing quote must not be preceded by a backslash.
            if ch == quote && prev != '\\' {
                closed = true;
                break;
            }
            prev = ch;
        }

        if !closed {
            return Err(ScanError::UnterminatedText {
                token: Token::new(TokenKind::Text, literal),
            });
        }

        // Strip the wrapping quotes and resolve escapes of the matching
        // quote character; the other quote character stays as-is.
        let inner = &literal[1..literal.len() - 1];
        let unescaped = inner.replace(&format!("\\{quote}"), &quote.to_string());

        Ok(Token::new(TokenKind::Text, unescaped))
    }

    fn scan_sign(&mut self) -> Result<Token, ScanError> {
        let mut literal = String::new();

        while let Some(ch) = self.current_char() {
            if !is_sign_start(ch) {
                break;
            }
            literal.push(ch);
            self.advance();
        }

        if SignOp::from_literal(&literal).is_none() {
            return Err(ScanError::InvalidSign(literal));
        }

        Ok(Token::new(TokenKind::Sign, literal))
    }

    fn scan_join(&mut self) -> Result<Token, ScanError> {
        let mut literal = String::new();

        while let Some(ch) = self.current_char() {
            if !is_join_start(ch) {
                break;
            }
            literal.push(ch);
            self.advance();
        }

        if JoinOp::from_literal(&literal).is_none() {
            return Err(ScanError::InvalidJoin(literal));
        }

        Ok(Token::new(TokenKind::Join, literal))
    }

    fn scan_group(&mut self) -> Result<Token, ScanError> {
        let mut buf = String::new();

        let Some(first) = self.read() else {
            return Err(ScanError::UnbalancedGroup { missing: 1 });
        };

        let mut open_groups: usize = 1;

        while let Some(ch) = self.current_char() {
            if ch == '(' {
                open_groups += 1;
                buf.push(ch);
                self.advance();
            } else if is_text_start(ch) {
                // Quoted runs are consumed atomically so parentheses inside
                // text never touch the nesting counter.
                match self.scan_text() {
                    Ok(token) => buf.push_str(&requote(&token.literal, ch)),
                    Err(ScanError::UnterminatedText { token }) => {
                        let text = token.literal;
                        buf.push_str(&text);
                        return Err(ScanError::UnterminatedTextInGroup {
                            text,
                            token: Token::new(TokenKind::Group, buf),
                        });
                    }
                    Err(err) => return Err(err),
                }
            } else if ch == ')' {
                self.advance();
                open_groups -= 1;
                if open_groups == 0 {
                    break;
                }
                buf.push(ch);
            } else {
                buf.push(ch);
                self.advance();
            }
        }

        if first != '(' || open_groups > 0 {
            return Err(ScanError::UnbalancedGroup {
                missing: open_groups,
            });
        }

        Ok(Token::new(TokenKind::Group, buf))
    }
}

// Checks if char is a letter, underscore, pound sign, or @
fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '#' || ch == '@'
}

// Checks if char is a valid number start (0-9, -)
fn is_number_start(ch: char) -> bool {
    ch == '-' || is_digit(ch)
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_text_start(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

fn is_sign_start(ch: char) -> bool {
    matches!(ch, '=' | '!' | '<' | '>' | '?' | '~')
}

fn is_join_start(ch: char) -> bool {
    ch == '&' || ch == '|'
}

/// Re-wraps unescaped text content in its original quote character,
/// escaping embedded occurrences of that character so the group literal
/// stays re-parseable.
fn requote(literal: &str, quote: char) -> String {
    let mut out = String::with_capacity(literal.len() + 2);
    out.push(quote);
    for ch in literal.chars() {
        if ch == quote {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push(quote);
    out
}

#[test]
fn test_read() {
    let mut scanner = Scanner::new("A = 'b'");
    assert_eq!(scanner.read(), Some('A'));
    assert_eq!(scanner.read(), Some(' '));
}

#[test]
fn test_scan_sequence() {
    let mut scanner = Scanner::new("a >= -1.5");
    assert_eq!(scanner.scan().unwrap(), Token::new(TokenKind::Identifier, "a"));
    assert_eq!(scanner.scan().unwrap().kind, TokenKind::Whitespace);
    assert_eq!(scanner.scan().unwrap(), Token::new(TokenKind::Sign, ">="));
    assert_eq!(scanner.scan().unwrap().kind, TokenKind::Whitespace);
    assert_eq!(scanner.scan().unwrap(), Token::new(TokenKind::Number, "-1.5"));
    assert_eq!(scanner.scan().unwrap(), Token::eof());
}
