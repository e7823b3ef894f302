//! Free-form unit expression parser
//!
//! Grammar (left-associative, `/` binds looser than `·`):
//!
//! ```text
//! expr   := term ('/' term)*
//! term   := factor ('·' factor)*
//! factor := 'sqrt' '(' expr ')'
//!         | ('sq' | 'cu') factor
//!         | '(' expr ')' exponent?
//!         | name exponent?
//! ```
//!
//! Exponents are written as superscripts (`m³`), `^N` or `**N`, and
//! whitespace multiplies (`kg m/s^2`). Column shorthands like `inHg`
//! and `mmH₂O` are split into length·column products before lexing.

use crate::prefix;
use crate::registry::registry;
use crate::unit::{Unit, UnitKind};
use crate::UnitError;
use mensura_core::Number;

/// Render an integer exponent as a superscript suffix ("⁻²").
pub(crate) fn superscript(n: i32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    let mut out = String::new();
    if n < 0 {
        out.push('⁻');
    }
    for c in n.unsigned_abs().to_string().chars() {
        out.push(DIGITS[c.to_digit(10).unwrap() as usize]);
    }
    out
}

fn superscript_value(c: char) -> Option<u32> {
    "⁰¹²³⁴⁵⁶⁷⁸⁹".chars().position(|d| d == c).map(|p| p as u32)
}

/// Parse a full unit expression against the global registry.
pub fn parse_unit(expr: &str) -> Result<Unit, UnitError> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Err(UnitError::malformed(expr, "empty expression"));
    }
    let prepared = split_column_shorthands(trimmed);
    let tokens = tokenize(expr, &prepared)?;
    let mut parser = Parser { input: expr, tokens, pos: 0 };
    let unit = parser.expr()?;
    if parser.pos != parser.tokens.len() {
        return Err(UnitError::malformed(expr, "trailing input after expression"));
    }
    tracing::trace!(expr, unit = %unit, "parsed unit expression");
    Ok(unit)
}

/// Insert a '·' between a unit symbol and a directly appended column
/// base: "inHg" → "in·Hg", "mmH₂O" → "mm·H₂O", "ftAq" → "ft·Aq".
fn split_column_shorthands(input: &str) -> String {
    const COLUMNS: [&str; 6] = ["H₂O", "H2O", "Hg", "Aq", "O₂", "O2"];
    let mut out = String::with_capacity(input.len() + 2);
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if i > 0 && chars[i - 1].is_ascii_alphabetic() {
            let rest: String = chars[i..].iter().collect();
            if let Some(col) = COLUMNS.iter().find(|c| rest.starts_with(**c)) {
                let after = rest.chars().nth(col.chars().count());
                if !matches!(after, Some(c) if c.is_ascii_alphanumeric()) {
                    out.push('·');
                    out.push_str(col);
                    i += col.chars().count();
                    continue;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Name(String),
    Exp(i32),
    Dot,
    Slash,
    LParen,
    RParen,
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '°' | '′' | '″' | '%' | 'µ' | 'μ' | 'Å' | 'Ω')
}

fn is_name_continue(c: char) -> bool {
    // Digits continue a name for symbols like g0, H2O, O2
    is_name_start(c) || c.is_ascii_digit() || c == '₂'
}

/// Largest exponent the grammar accepts. Catalog dimensions never
/// exceed single digits; anything larger is a typo, and unbounded
/// values would overflow the dimension vector.
const MAX_EXPONENT: i32 = 9;

fn starts_factor(c: char) -> bool {
    is_name_start(c) || c == '('
}

fn tokenize(expr: &str, input: &str) -> Result<Vec<Token>, UnitError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            // A bare space multiplies, but only between two factors;
            // spaces hugging an operator are padding.
            let after_value = matches!(
                tokens.last(),
                Some(Token::Name(_)) | Some(Token::Exp(_)) | Some(Token::RParen)
            );
            if after_value && i < chars.len() && starts_factor(chars[i]) {
                tokens.push(Token::Dot);
            }
            continue;
        }

        match c {
            '·' | '⋅' | '×' => {
                tokens.push(Token::Dot);
                i += 1;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    let (exp, next) = read_caret_exponent(expr, &chars, i + 2)?;
                    tokens.push(Token::Exp(exp));
                    i = next;
                } else {
                    tokens.push(Token::Dot);
                    i += 1;
                }
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '^' => {
                let (exp, next) = read_caret_exponent(expr, &chars, i + 1)?;
                tokens.push(Token::Exp(exp));
                i = next;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            _ if c == '⁻' || superscript_value(c).is_some() => {
                let (exp, next) = read_superscript_exponent(expr, &chars, i)?;
                tokens.push(Token::Exp(exp));
                i = next;
            }
            _ if is_name_start(c) => {
                let start = i;
                while i < chars.len() && is_name_continue(chars[i]) {
                    i += 1;
                }
                tokens.push(Token::Name(chars[start..i].iter().collect()));
            }
            _ => {
                return Err(UnitError::malformed(
                    expr,
                    format!("unexpected character '{c}'"),
                ));
            }
        }
    }

    Ok(tokens)
}

fn read_caret_exponent(expr: &str, chars: &[char], mut i: usize) -> Result<(i32, usize), UnitError> {
    let mut negative = false;
    if matches!(chars.get(i), Some('-') | Some('+')) {
        negative = chars[i] == '-';
        i += 1;
    }
    let start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i == start {
        return Err(UnitError::malformed(expr, "exponent expects an integer"));
    }
    if chars.get(i) == Some(&'.') {
        return Err(UnitError::malformed(expr, "exponent must be an integer"));
    }
    let digits: String = chars[start..i].iter().collect();
    let magnitude: i32 = digits
        .parse()
        .ok()
        .filter(|m| *m <= MAX_EXPONENT)
        .ok_or_else(|| UnitError::malformed(expr, "exponent out of range"))?;
    Ok((if negative { -magnitude } else { magnitude }, i))
}

fn read_superscript_exponent(
    expr: &str,
    chars: &[char],
    mut i: usize,
) -> Result<(i32, usize), UnitError> {
    let mut negative = false;
    if chars.get(i) == Some(&'⁻') {
        negative = true;
        i += 1;
    }
    let mut magnitude: i64 = 0;
    let start = i;
    while let Some(d) = chars.get(i).copied().and_then(superscript_value) {
        magnitude = magnitude * 10 + d as i64;
        if magnitude > MAX_EXPONENT as i64 {
            return Err(UnitError::malformed(expr, "exponent out of range"));
        }
        i += 1;
    }
    if i == start {
        return Err(UnitError::malformed(expr, "exponent expects an integer"));
    }
    let magnitude = magnitude as i32;
    Ok((if negative { -magnitude } else { magnitude }, i))
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let t = self.tokens.get(self.pos).cloned();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn expect_rparen(&mut self) -> Result<(), UnitError> {
        match self.bump() {
            Some(Token::RParen) => Ok(()),
            _ => Err(UnitError::malformed(self.input, "unbalanced parentheses")),
        }
    }

    fn expr(&mut self) -> Result<Unit, UnitError> {
        let mut left = self.term()?;
        while self.peek() == Some(&Token::Slash) {
            self.bump();
            let right = self.term()?;
            left = divide(left, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Unit, UnitError> {
        let mut left = self.factor()?;
        while self.peek() == Some(&Token::Dot) {
            self.bump();
            let right = self.factor()?;
            left = multiply(left, right);
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Unit, UnitError> {
        match self.bump() {
            Some(Token::LParen) => {
                let inner = self.expr()?;
                self.expect_rparen()?;
                self.apply_exponent(inner)
            }
            Some(Token::Name(name)) if name == "sqrt" && self.peek() == Some(&Token::LParen) => {
                self.bump();
                let inner = self.expr()?;
                self.expect_rparen()?;
                let root = square_root(self.input, inner)?;
                self.apply_exponent(root)
            }
            Some(Token::Name(name)) if name == "sq" || name == "cu" => {
                // "sq ft", "cu in": the word squares/cubes what follows
                if self.peek() == Some(&Token::Dot) {
                    self.bump();
                }
                let inner = self.factor()?;
                Ok(inner.pow(if name == "sq" { 2 } else { 3 }))
            }
            Some(Token::Name(name)) => {
                let unit = self.resolve(&name)?;
                self.apply_exponent(unit)
            }
            _ => Err(UnitError::malformed(self.input, "expected a unit symbol")),
        }
    }

    fn apply_exponent(&mut self, unit: Unit) -> Result<Unit, UnitError> {
        if let Some(Token::Exp(exp)) = self.peek().cloned() {
            self.bump();
            return Ok(unit.pow(exp));
        }
        Ok(unit)
    }

    /// Direct catalog hit first; only a miss is tried as prefix+unit.
    fn resolve(&self, name: &str) -> Result<Unit, UnitError> {
        let reg = registry();
        if let Some(unit) = reg.get(name) {
            return Ok(unit.clone());
        }
        if let Some(unit) = prefix::resolve(name, reg) {
            return Ok(unit);
        }
        Err(UnitError::malformed(
            self.input,
            format!("unknown unit '{name}'"),
        ))
    }
}

/// Compound product u·v. Offsets never survive composition.
fn multiply(left: Unit, right: Unit) -> Unit {
    Unit {
        symbol: format!("{}·{}", left.symbol, right.symbol),
        name: format!("{} {}", left.name, right.name),
        kind: UnitKind::Other,
        dimension: left.dimension.multiply(&right.dimension),
        factor: left.factor.mul(&right.factor),
        offset: Number::zero(),
        exponent: 1,
    }
}

/// Compound quotient u/v. Unlike the `Div` operator on `Unit` values,
/// a parsed quotient is always a unit, even over equal vectors.
fn divide(left: Unit, right: Unit) -> Unit {
    let factor = left
        .factor
        .checked_div(&right.factor)
        .unwrap_or_else(|_| Number::zero());
    Unit {
        symbol: format!("{}/{}", left.symbol, right.symbol),
        name: format!("{} per {}", left.name, right.name),
        kind: UnitKind::Other,
        dimension: left.dimension.divide(&right.dimension),
        factor,
        offset: Number::zero(),
        exponent: 1,
    }
}

/// sqrt(u): every exponent of the vector must be even.
fn square_root(expr: &str, inner: Unit) -> Result<Unit, UnitError> {
    if !inner.dimension.is_even() {
        return Err(UnitError::malformed(
            expr,
            format!("sqrt of {} has fractional dimensions", inner.symbol),
        ));
    }
    let factor = inner.factor.sqrt()?;
    Ok(Unit {
        symbol: format!("sqrt({})", inner.symbol),
        name: format!("square root of {}", inner.name),
        kind: UnitKind::Other,
        dimension: inner.dimension.halve(),
        factor,
        offset: Number::zero(),
        exponent: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimension;

    #[test]
    fn superscript_rendering() {
        assert_eq!(superscript(2), "²");
        assert_eq!(superscript(-3), "⁻³");
        assert_eq!(superscript(12), "¹²");
    }

    #[test]
    fn single_symbol() {
        let m = parse_unit("m").unwrap();
        assert_eq!(m.symbol, "m");
        assert_eq!(m.dimension, Dimension::LENGTH);
    }

    #[test]
    fn aliases_and_prefixes() {
        assert_eq!(parse_unit("meter").unwrap().symbol, "m");
        let km = parse_unit("km").unwrap();
        assert_eq!(km.factor, Number::from_i64(1000));
        let umol = parse_unit("µmol").unwrap();
        assert_eq!(umol.dimension, Dimension::AMOUNT);
    }

    #[test]
    fn exponent_notations_agree() {
        let a = parse_unit("in³").unwrap();
        let b = parse_unit("in^3").unwrap();
        let c = parse_unit("in**3").unwrap();
        let d = parse_unit("cu in").unwrap();
        for u in [&b, &c, &d] {
            assert_eq!(a.dimension, u.dimension);
            assert_eq!(a.factor, u.factor);
        }
        assert_eq!(a.dimension, Dimension::VOLUME);
    }

    #[test]
    fn negative_exponent() {
        let s = parse_unit("s⁻¹").unwrap();
        assert_eq!(s.dimension, Dimension::FREQUENCY);
        assert_eq!(parse_unit("s^-1").unwrap().dimension, Dimension::FREQUENCY);
    }

    #[test]
    fn quotients_and_products() {
        let v = parse_unit("m/s").unwrap();
        assert_eq!(v.dimension, Dimension::VELOCITY);

        let f = parse_unit("kg m/s^2").unwrap();
        assert_eq!(f.dimension, Dimension::FORCE);

        let r = parse_unit("J/(mol·K)").unwrap();
        assert_eq!(
            r.dimension,
            Dimension::ENERGY
                .divide(&Dimension::AMOUNT)
                .divide(&Dimension::TEMPERATURE)
        );
    }

    #[test]
    fn slash_folds_left() {
        // kg/m/s reads as (kg/m)/s
        let u = parse_unit("kg/m/s").unwrap();
        assert_eq!(u.dimension, Dimension::new([-1, 1, -1, 0, 0, 0, 0]));
    }

    #[test]
    fn spaces_around_slash_are_padding() {
        let a = parse_unit("mi / h").unwrap();
        let b = parse_unit("mi/h").unwrap();
        assert_eq!(a.dimension, b.dimension);
        assert_eq!(a.factor, b.factor);
    }

    #[test]
    fn sq_word_squares() {
        let sqft = parse_unit("sq ft").unwrap();
        assert_eq!(sqft.dimension, Dimension::AREA);
        assert_eq!(sqft.factor, parse_unit("ft²").unwrap().factor);
    }

    #[test]
    fn column_shorthands_split() {
        let inhg = parse_unit("inHg").unwrap();
        assert_eq!(inhg.dimension, Dimension::PRESSURE);

        let mmh2o = parse_unit("mmH₂O").unwrap();
        assert_eq!(mmh2o.dimension, Dimension::PRESSURE);
        assert_eq!(mmh2o.factor, parse_unit("mmH2O").unwrap().factor);

        let ftaq = parse_unit("ftAq").unwrap();
        assert_eq!(ftaq.dimension, Dimension::PRESSURE);
    }

    #[test]
    fn sqrt_of_even_dimensions() {
        let u = parse_unit("sqrt(m²/s²)").unwrap();
        assert_eq!(u.dimension, Dimension::VELOCITY);

        let err = parse_unit("sqrt(m)").unwrap_err();
        assert!(matches!(err, UnitError::Malformed { .. }));
    }

    #[test]
    fn sqrt_takes_root_of_factor() {
        let u = parse_unit("sqrt(ha)").unwrap();
        assert_eq!(u.dimension, Dimension::LENGTH);
        let diff = u.factor.sub(&Number::from_i64(100)).abs();
        assert!(diff < Number::from_str("1e-40").unwrap());
    }

    #[test]
    fn parenthesized_group_exponent() {
        let u = parse_unit("(m/s)²").unwrap();
        assert_eq!(u.dimension, Dimension::VELOCITY.power(2));
    }

    #[test]
    fn affine_survives_only_alone() {
        let c = parse_unit("°C").unwrap();
        assert!(c.is_affine());

        let c2 = parse_unit("°C²").unwrap();
        assert!(!c2.is_affine());

        let per = parse_unit("J/°C").unwrap();
        assert!(!per.is_affine());
    }

    #[test]
    fn ascii_temperature_spellings() {
        assert_eq!(parse_unit("degC").unwrap().symbol, "°C");
        assert_eq!(parse_unit("degF").unwrap().symbol, "°F");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_unit(""), Err(UnitError::Malformed { .. })));
        assert!(matches!(parse_unit("   "), Err(UnitError::Malformed { .. })));
        assert!(matches!(parse_unit("xyzzy"), Err(UnitError::Malformed { .. })));
        assert!(matches!(parse_unit("m^1.5"), Err(UnitError::Malformed { .. })));
        assert!(matches!(parse_unit("m^"), Err(UnitError::Malformed { .. })));
        assert!(matches!(parse_unit("(m/s"), Err(UnitError::Malformed { .. })));
        assert!(matches!(parse_unit("m)"), Err(UnitError::Malformed { .. })));
        assert!(matches!(parse_unit("m//s"), Err(UnitError::Malformed { .. })));
        assert!(matches!(parse_unit("3m"), Err(UnitError::Malformed { .. })));
    }

    #[test]
    fn oversized_exponents_are_malformed() {
        assert!(matches!(parse_unit("m^2000000000"), Err(UnitError::Malformed { .. })));
        assert!(matches!(parse_unit("(m²)^2000000000"), Err(UnitError::Malformed { .. })));
        assert!(matches!(parse_unit("m¹²"), Err(UnitError::Malformed { .. })));
        assert!(matches!(parse_unit("m**10"), Err(UnitError::Malformed { .. })));
        assert!(parse_unit("m⁻⁹").is_ok());
        assert!(parse_unit("m^9").is_ok());
    }

    #[test]
    fn digit_bearing_symbols_resolve() {
        let g0 = parse_unit("g0").unwrap();
        assert_eq!(g0.dimension, Dimension::ACCELERATION);

        let o2 = parse_unit("O2").unwrap();
        assert_eq!(o2.dimension, Dimension::PRESSURE_GRADIENT);
    }
}
