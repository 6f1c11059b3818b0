//! Phase values and the restricted expression language they may be written in.
//!
//! Phases in variant data are either plain numbers or short arithmetic
//! expressions over the constant `pi`, such as `"pi/4"` or `"2*pi/3"`. Only
//! numeric literals, `pi`, `+ - * /` and parentheses are accepted.

use serde::Deserialize;
use std::f64::consts::PI;
use std::fmt;

/// Name of the constant recognised inside phase expressions.
pub const PI_TOKEN: &str = "pi";

/// Errors produced while resolving a phase expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhaseError {
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },
    #[error("unknown identifier '{name}' at position {position}")]
    UnknownIdentifier { name: String, position: usize },
    #[error("invalid number '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },
    #[error("unexpected '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("division by zero at position {position}")]
    DivisionByZero { position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Pi,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Pi => f.write_str(PI_TOKEN),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

/// Splits `source` into `(byte position, token)` pairs.
fn tokenize(source: &str) -> Result<Vec<(usize, Token)>, PhaseError> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        let token = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let end = number_end(source, position);
                let literal = &source[position..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| PhaseError::InvalidNumber {
                        literal: literal.to_string(),
                        position,
                    })?;
                while chars.peek().is_some_and(|&(next, _)| next < end) {
                    chars.next();
                }
                tokens.push((position, Token::Number(value)));
                continue;
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut end = position;
                while let Some(&(next, c)) = chars.peek() {
                    if !(c.is_alphanumeric() || c == '_') {
                        break;
                    }
                    end = next + c.len_utf8();
                    chars.next();
                }
                let name = &source[position..end];
                if name != PI_TOKEN {
                    return Err(PhaseError::UnknownIdentifier {
                        name: name.to_string(),
                        position,
                    });
                }
                tokens.push((position, Token::Pi));
                continue;
            }
            ch => return Err(PhaseError::UnexpectedChar { ch, position }),
        };
        chars.next();
        tokens.push((position, token));
    }

    Ok(tokens)
}

/// Byte offset just past the numeric literal starting at `start`.
///
/// Accepts digits with an optional fraction and an optional exponent.
fn number_end(source: &str, start: usize) -> usize {
    let bytes = source.as_bytes();
    let mut end = start;
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
        end += 1;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exponent = end + 1;
        if exponent < bytes.len() && (bytes[exponent] == b'+' || bytes[exponent] == b'-') {
            exponent += 1;
        }
        if exponent < bytes.len() && bytes[exponent].is_ascii_digit() {
            while exponent < bytes.len() && bytes[exponent].is_ascii_digit() {
                exponent += 1;
            }
            end = exponent;
        }
    }
    end
}

/// Recursive-descent evaluator over a token list.
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := ('+' | '-') factor | number | 'pi' | '(' expr ')'
/// ```
struct Parser {
    tokens: Vec<(usize, Token)>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).map(|&(_, token)| token)
    }

    fn next(&mut self) -> Option<(usize, Token)> {
        let next = self.tokens.get(self.cursor).copied();
        if next.is_some() {
            self.cursor += 1;
        }
        next
    }

    fn expr(&mut self) -> Result<f64, PhaseError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.cursor += 1;
            let rhs = self.term()?;
            if op == Token::Plus {
                value += rhs;
            } else {
                value -= rhs;
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, PhaseError> {
        let mut value = self.factor()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.cursor += 1;
            let position = self.tokens.get(self.cursor).map_or(0, |&(p, _)| p);
            let rhs = self.factor()?;
            if op == Token::Star {
                value *= rhs;
            } else if rhs == 0.0 {
                return Err(PhaseError::DivisionByZero { position });
            } else {
                value /= rhs;
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, PhaseError> {
        match self.next() {
            Some((_, Token::Plus)) => self.factor(),
            Some((_, Token::Minus)) => Ok(-self.factor()?),
            Some((_, Token::Number(value))) => Ok(value),
            Some((_, Token::Pi)) => Ok(PI),
            Some((_, Token::LParen)) => {
                let value = self.expr()?;
                match self.next() {
                    Some((_, Token::RParen)) => Ok(value),
                    Some((position, token)) => Err(PhaseError::UnexpectedToken {
                        token: token.to_string(),
                        position,
                    }),
                    None => Err(PhaseError::UnexpectedEnd),
                }
            }
            Some((position, token)) => Err(PhaseError::UnexpectedToken {
                token: token.to_string(),
                position,
            }),
            None => Err(PhaseError::UnexpectedEnd),
        }
    }
}

/// Resolves a phase expression to radians.
///
/// # Examples
///
/// ```
/// use polyharmonic::resolve_phase;
/// use std::f64::consts::PI;
///
/// assert_eq!(resolve_phase("pi/2").unwrap(), PI / 2.0);
/// assert_eq!(resolve_phase("2*pi").unwrap(), 2.0 * PI);
/// assert!(resolve_phase("__import__('os')").is_err());
/// ```
pub fn resolve_phase(expression: &str) -> Result<f64, PhaseError> {
    let mut parser = Parser {
        tokens: tokenize(expression)?,
        cursor: 0,
    };
    let value = parser.expr()?;
    match parser.next() {
        None => Ok(value),
        Some((position, token)) => Err(PhaseError::UnexpectedToken {
            token: token.to_string(),
            position,
        }),
    }
}

/// A phase as written in variant data: a number or an expression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PhaseSpec {
    Number(f64),
    Expression(String),
}

impl PhaseSpec {
    /// Resolves the phase to radians, keeping its source text for labels.
    pub fn resolve(&self) -> Result<Phase, PhaseError> {
        let radians = match self {
            PhaseSpec::Number(value) => *value,
            PhaseSpec::Expression(expression) => resolve_phase(expression)?,
        };
        Ok(Phase {
            radians,
            text: self.to_string(),
        })
    }
}

impl fmt::Display for PhaseSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseSpec::Number(value) => write!(f, "{value}"),
            PhaseSpec::Expression(expression) => f.write_str(expression),
        }
    }
}

/// A resolved phase together with the text it was written as.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    radians: f64,
    text: String,
}

impl Phase {
    /// A phase given directly in radians.
    pub fn from_radians(radians: f64) -> Self {
        Self {
            radians,
            text: radians.to_string(),
        }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// The text the phase was written as.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display form with `pi` rendered as `π`.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyharmonic::PhaseSpec;
    ///
    /// let phase = PhaseSpec::Expression("2*pi/3".into()).resolve().unwrap();
    /// assert_eq!(phase.label(), "2*π/3");
    /// ```
    pub fn label(&self) -> String {
        self.text.replace(PI_TOKEN, "π")
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn resolve(expression: &str) -> f64 {
        resolve_phase(expression).unwrap()
    }

    #[test]
    fn test_pi_forms() {
        assert!(approx_eq(resolve("pi"), PI));
        assert!(approx_eq(resolve("pi/2"), PI / 2.0));
        assert!(approx_eq(resolve("2*pi"), 2.0 * PI));
        assert!(approx_eq(resolve("0"), 0.0));
        assert!(approx_eq(resolve("2*pi/3"), 2.0 * PI / 3.0));
        assert!(approx_eq(resolve("3 * pi / 4"), 3.0 * PI / 4.0));
    }

    #[test]
    fn test_precedence_and_grouping() {
        assert!(approx_eq(resolve("1 + 2 * 3"), 7.0));
        assert!(approx_eq(resolve("(1 + 2) * 3"), 9.0));
        assert!(approx_eq(resolve("8 / 2 / 2"), 2.0));
        assert!(approx_eq(resolve("1 - 2 - 3"), -4.0));
        assert!(approx_eq(resolve("pi - pi/4"), 0.75 * PI));
    }

    #[test]
    fn test_unary_signs() {
        assert!(approx_eq(resolve("-pi/2"), -PI / 2.0));
        assert!(approx_eq(resolve("+1.5"), 1.5));
        assert!(approx_eq(resolve("2*-pi"), -2.0 * PI));
        assert!(approx_eq(resolve("--1"), 1.0));
    }

    #[test]
    fn test_number_literals() {
        assert!(approx_eq(resolve("0.25"), 0.25));
        assert!(approx_eq(resolve(".5"), 0.5));
        assert!(approx_eq(resolve("1e-3"), 0.001));
        assert!(approx_eq(resolve("2.5E2"), 250.0));
    }

    #[test]
    fn test_unknown_identifiers_are_rejected() {
        assert_eq!(
            resolve_phase("tau/2"),
            Err(PhaseError::UnknownIdentifier {
                name: "tau".into(),
                position: 0
            })
        );
        assert!(matches!(
            resolve_phase("pie"),
            Err(PhaseError::UnknownIdentifier { .. })
        ));
        assert!(matches!(
            resolve_phase("exit()"),
            Err(PhaseError::UnknownIdentifier { .. })
        ));
    }

    #[test]
    fn test_malformed_expressions() {
        assert_eq!(resolve_phase(""), Err(PhaseError::UnexpectedEnd));
        assert_eq!(resolve_phase("pi/"), Err(PhaseError::UnexpectedEnd));
        assert_eq!(resolve_phase("(pi"), Err(PhaseError::UnexpectedEnd));
        assert_eq!(
            resolve_phase("pi)"),
            Err(PhaseError::UnexpectedToken {
                token: ")".into(),
                position: 2
            })
        );
        assert_eq!(
            resolve_phase("2 pi"),
            Err(PhaseError::UnexpectedToken {
                token: "pi".into(),
                position: 2
            })
        );
        assert_eq!(
            resolve_phase("pi % 2"),
            Err(PhaseError::UnexpectedChar {
                ch: '%',
                position: 3
            })
        );
        assert!(matches!(
            resolve_phase("1.2.3"),
            Err(PhaseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            resolve_phase("pi / 0"),
            Err(PhaseError::DivisionByZero { position: 5 })
        );
    }

    #[test]
    fn test_spec_resolution_keeps_text() {
        let phase = PhaseSpec::Expression("pi/4".into()).resolve().unwrap();
        assert!(approx_eq(phase.radians(), PI / 4.0));
        assert_eq!(phase.text(), "pi/4");
        assert_eq!(phase.label(), "π/4");

        let phase = PhaseSpec::Number(0.0).resolve().unwrap();
        assert_eq!(phase.radians(), 0.0);
        assert_eq!(phase.label(), "0");
    }

    #[test]
    fn test_spec_deserializes_numbers_and_strings() {
        let specs: Vec<PhaseSpec> = serde_json::from_str(r#"[0, 1.5, "pi/2"]"#).unwrap();
        assert_eq!(
            specs,
            vec![
                PhaseSpec::Number(0.0),
                PhaseSpec::Number(1.5),
                PhaseSpec::Expression("pi/2".into()),
            ]
        );
    }
}
