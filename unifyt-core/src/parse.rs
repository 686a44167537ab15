//! Compound unit expressions.
//!
//! ```text
//! expression := product ( '/' product )*
//! product    := factor ( ( '*' | <whitespace> ) factor )*
//! factor     := atom ( ( '^' | '**' ) exponent )?
//! atom       := NAME | NUMBER
//! exponent   := ['+'|'-'] NUMBER | '(' ['+'|'-'] NUMBER [ '/' NUMBER ] ')'
//! ```
//!
//! Every factor after the first `/` is part of the denominator: `J / kg K`, `J / kg * K` and `J / kg / K` all mean
//! joule per kilogram per kelvin. Numbers standing in atom position are dimensionless factors, so `"220 yard"`
//! defines a furlong and `"1 / second"` a hertz. A bare exponent directly followed by `/ NUMBER` (`m^1/2`) is
//! rejected; rational exponents go in parentheses (`m^(1/2)`).

use crate::error::{UnitError, UnitResult};
use crate::table::UnitTable;
use crate::unit::Unit;

/// Characters that end a unit name.
const OPERATORS: &str = "*/^()+-";

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token<'a> {
    Name(&'a str),
    Number(f64),
    Star,
    Power,
    Slash,
    LParen,
    RParen,
    Plus,
    Minus,
}

impl Token<'_> {
    fn describe(&self) -> String {
        match self {
            Token::Name(name) => format!("unit name '{name}'"),
            Token::Number(n) => format!("number {n}"),
            Token::Star => "'*'".into(),
            Token::Power => "'^'".into(),
            Token::Slash => "'/'".into(),
            Token::LParen => "'('".into(),
            Token::RParen => "')'".into(),
            Token::Plus => "'+'".into(),
            Token::Minus => "'-'".into(),
        }
    }
}

/// Parses `expression` into a [`Unit`], resolving every name through `table`.
///
/// ```rust
/// use std::collections::HashMap;
/// use unifyt_core::{parse_compound, Dimension, UnitDef};
///
/// let mut table = HashMap::new();
/// table.insert("meter".to_string(), UnitDef::new(Dimension::LENGTH, 1.0));
/// table.insert("second".to_string(), UnitDef::new(Dimension::TIME, 1.0));
///
/// let accel = parse_compound("meter / second ^ 2", &table).unwrap();
/// assert_eq!(accel.dimension(), Dimension::LENGTH - Dimension::TIME * 2.0);
/// assert_eq!(accel.to_string(), "meter / second^2");
/// ```
pub fn parse_compound<T: UnitTable + ?Sized>(expression: &str, table: &T) -> UnitResult<Unit> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(UnitError::parse(expression, 0, "empty unit expression"));
    }
    let mut parser = Parser {
        input: expression,
        tokens,
        cursor: 0,
        table,
    };
    parser.expression()
}

struct Parser<'a, T: ?Sized> {
    input: &'a str,
    tokens: Vec<(usize, Token<'a>)>,
    cursor: usize,
    table: &'a T,
}

impl<'a, T: UnitTable + ?Sized> Parser<'a, T> {
    fn expression(&mut self) -> UnitResult<Unit> {
        let numerator = self.product()?;
        let mut denominator: Option<Unit> = None;
        while self.eat(Token::Slash) {
            let next = self.product()?;
            denominator = Some(match denominator {
                Some(den) => den.multiply(&next)?,
                None => next,
            });
        }
        if let Some((position, token)) = self.peek() {
            return Err(self.error_at(position, format!("unexpected {}", token.describe())));
        }
        match denominator {
            Some(den) => numerator.divide(&den),
            None => Ok(numerator),
        }
    }

    fn product(&mut self) -> UnitResult<Unit> {
        let mut unit = self.factor()?;
        loop {
            match self.peek() {
                Some((_, Token::Star)) => {
                    self.cursor += 1;
                    let rhs = self.factor()?;
                    unit = unit.multiply(&rhs)?;
                }
                Some((_, Token::Name(_) | Token::Number(_))) => {
                    let rhs = self.factor()?;
                    unit = unit.multiply(&rhs)?;
                }
                _ => return Ok(unit),
            }
        }
    }

    fn factor(&mut self) -> UnitResult<Unit> {
        let unit = self.atom()?;
        if self.eat(Token::Power) {
            let n = self.exponent()?;
            unit.pow(n)
        } else {
            Ok(unit)
        }
    }

    fn atom(&mut self) -> UnitResult<Unit> {
        match self.next() {
            Some((_, Token::Name(name))) => Unit::from_name(name, self.table),
            Some((position, Token::Number(value))) => {
                if !value.is_finite() || value <= 0.0 {
                    return Err(self.error_at(
                        position,
                        format!("numeric factor must be finite and positive, got {value}"),
                    ));
                }
                Unit::numeric(value)
            }
            Some((position, token)) => Err(self.error_at(
                position,
                format!("expected unit name or number, found {}", token.describe()),
            )),
            None => Err(self.error_at(self.input.len(), "expected unit name or number")),
        }
    }

    fn exponent(&mut self) -> UnitResult<f64> {
        if !self.eat(Token::LParen) {
            let value = self.signed_number()?;
            // `m^1/2` would otherwise read as `m^1` divided by 2.
            if let (Some((position, Token::Slash)), Some((_, Token::Number(_)))) =
                (self.peek(), self.tokens.get(self.cursor + 1).copied())
            {
                return Err(self.error_at(
                    position,
                    "ambiguous '/' after exponent; write a rational exponent as '^(p/q)'",
                ));
            }
            return Ok(value);
        }
        let numerator = self.signed_number()?;
        let value = if self.eat(Token::Slash) {
            let position = self.position();
            let denominator = self.signed_number()?;
            if denominator == 0.0 {
                return Err(self.error_at(position, "zero denominator in exponent"));
            }
            numerator / denominator
        } else {
            numerator
        };
        if !self.eat(Token::RParen) {
            return Err(self.error_at(self.position(), "expected ')'"));
        }
        Ok(value)
    }

    fn signed_number(&mut self) -> UnitResult<f64> {
        let sign = if self.eat(Token::Minus) {
            -1.0
        } else {
            self.eat(Token::Plus);
            1.0
        };
        match self.next() {
            Some((position, Token::Number(value))) => {
                if value.is_finite() {
                    Ok(sign * value)
                } else {
                    Err(self.error_at(position, "exponent must be finite"))
                }
            }
            Some((position, token)) => Err(self.error_at(
                position,
                format!("expected exponent, found {}", token.describe()),
            )),
            None => Err(self.error_at(self.input.len(), "expected exponent")),
        }
    }

    fn peek(&self) -> Option<(usize, Token<'a>)> {
        self.tokens.get(self.cursor).copied()
    }

    fn next(&mut self) -> Option<(usize, Token<'a>)> {
        let token = self.peek();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn eat(&mut self, expected: Token<'_>) -> bool {
        match self.peek() {
            Some((_, token)) if token == expected => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    /// Byte offset of the next token, or the end of input.
    fn position(&self) -> usize {
        self.peek()
            .map(|(position, _)| position)
            .unwrap_or(self.input.len())
    }

    fn error_at(&self, position: usize, reason: impl Into<String>) -> UnitError {
        UnitError::parse(self.input, position, reason)
    }
}

fn tokenize(input: &str) -> UnitResult<Vec<(usize, Token<'_>)>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while let Some(c) = input[i..].chars().next() {
        if c.is_whitespace() {
            i += c.len_utf8();
            continue;
        }
        let start = i;
        let token = match c {
            '*' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                Token::Power
            }
            '*' => {
                i += 1;
                Token::Star
            }
            '^' => {
                i += 1;
                Token::Power
            }
            '/' => {
                i += 1;
                Token::Slash
            }
            '(' => {
                i += 1;
                Token::LParen
            }
            ')' => {
                i += 1;
                Token::RParen
            }
            '+' => {
                i += 1;
                Token::Plus
            }
            '-' => {
                i += 1;
                Token::Minus
            }
            c if c.is_ascii_digit()
                || (c == '.' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)) =>
            {
                i = number_end(bytes, i);
                let text = &input[start..i];
                let value = text
                    .parse::<f64>()
                    .map_err(|_| UnitError::parse(input, start, format!("invalid number '{text}'")))?;
                Token::Number(value)
            }
            _ => {
                i = name_end(input, i);
                Token::Name(&input[start..i])
            }
        };
        tokens.push((start, token));
    }
    Ok(tokens)
}

fn number_end(bytes: &[u8], mut i: usize) -> usize {
    let digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };
    i = digits(i);
    if bytes.get(i) == Some(&b'.') {
        i = digits(i + 1);
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if bytes.get(j).is_some_and(u8::is_ascii_digit) {
            i = digits(j);
        }
    }
    i
}

fn name_end(input: &str, start: usize) -> usize {
    input[start..]
        .char_indices()
        .find(|(_, c)| c.is_whitespace() || OPERATORS.contains(*c))
        .map(|(offset, _)| start + offset)
        .unwrap_or(input.len())
}
