use std::cmp::Ordering;
use std::fmt;

/// A primitive JavaScript value produced by static evaluation.
///
/// `Undefined` is a real value here; an expression that cannot be evaluated yields `None` from
/// [`crate::compute_static_expression`] instead.
#[derive(Clone, Debug, PartialEq)]
pub enum StaticValue {
  Undefined,
  Null,
  Bool(bool),
  Num(f64),
  Str(String),
}

use StaticValue::*;

impl StaticValue {
  // https://tc39.es/ecma262/multipage/abstract-operations.html#sec-toboolean
  pub fn to_boolean(&self) -> bool {
    match self {
      Undefined | Null => false,
      Bool(b) => *b,
      Num(n) => !n.is_nan() && *n != 0.0,
      Str(s) => !s.is_empty(),
    }
  }

  // https://tc39.es/ecma262/multipage/abstract-operations.html#sec-tonumber
  pub fn to_number(&self) -> f64 {
    match self {
      Undefined => f64::NAN,
      Null => 0.0,
      Bool(false) => 0.0,
      Bool(true) => 1.0,
      Num(n) => *n,
      Str(s) => coerce_str_to_num(s),
    }
  }

  pub fn is_nullish(&self) -> bool {
    matches!(self, Undefined | Null)
  }

  /// The result of `typeof` on this value.
  pub fn type_of(&self) -> &'static str {
    match self {
      Undefined => "undefined",
      Null => "object",
      Bool(_) => "boolean",
      Num(_) => "number",
      Str(_) => "string",
    }
  }
}

/// ECMAScript `ToString`.
impl fmt::Display for StaticValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Undefined => f.write_str("undefined"),
      Null => f.write_str("null"),
      Bool(b) => write!(f, "{b}"),
      Num(n) => f.write_str(&number_to_string(*n)),
      Str(s) => f.write_str(s),
    }
  }
}

fn is_js_whitespace(ch: char) -> bool {
  // `char::is_whitespace` covers WhiteSpace and LineTerminator except ZWNBSP, plus NEL which
  // ECMAScript does not treat as whitespace.
  ch == '\u{feff}' || (ch.is_whitespace() && ch != '\u{85}')
}

fn parse_int_digits(digits: &str, radix: u32) -> f64 {
  if digits.is_empty() {
    return f64::NAN;
  }
  digits
    .chars()
    .try_fold(0.0_f64, |acc, ch| {
      ch.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
    .unwrap_or(f64::NAN)
}

// https://tc39.es/ecma262/multipage/abstract-operations.html#sec-tonumber-applied-to-the-string-type
pub fn coerce_str_to_num(raw: &str) -> f64 {
  let raw = raw.trim_matches(is_js_whitespace);
  if raw.is_empty() {
    return 0.0;
  };
  for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
    if let Some(digits) = raw.strip_prefix(prefix) {
      return parse_int_digits(digits, radix);
    };
  }

  let (sign, body) = match raw.strip_prefix('-') {
    Some(rest) => (-1.0_f64, rest),
    None => (1.0_f64, raw.strip_prefix('+').unwrap_or(raw)),
  };
  if body == "Infinity" {
    return sign * f64::INFINITY;
  };

  let mut saw_digit_before_exp = false;
  let mut saw_dot = false;
  let mut saw_exp = false;
  let mut iter = body.chars().peekable();
  while let Some(ch) = iter.next() {
    match ch {
      '0'..='9' => {
        if !saw_exp {
          saw_digit_before_exp = true;
        }
      }
      '.' => {
        if saw_dot || saw_exp {
          return f64::NAN;
        }
        saw_dot = true;
      }
      'e' | 'E' => {
        if saw_exp || !saw_digit_before_exp {
          return f64::NAN;
        }
        saw_exp = true;
        if matches!(iter.peek(), Some('+' | '-')) {
          iter.next();
        }
        let mut exp_digits = 0;
        while matches!(iter.peek(), Some('0'..='9')) {
          exp_digits += 1;
          iter.next();
        }
        if exp_digits == 0 {
          return f64::NAN;
        }
      }
      _ => return f64::NAN,
    }
  }
  if !saw_digit_before_exp {
    return f64::NAN;
  }

  body.parse::<f64>().map(|v| sign * v).unwrap_or(f64::NAN)
}

// https://tc39.es/ecma262/multipage/ecmascript-data-types-and-values.html#sec-numeric-types-number-tostring
pub fn number_to_string(n: f64) -> String {
  if n.is_nan() {
    return "NaN".to_string();
  }
  if n == 0.0 {
    // Also covers -0.
    return "0".to_string();
  }
  if n.is_infinite() {
    return if n < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
  }

  // `ryu` gives the shortest round-tripping digits, which are the digits ECMAScript wants; only
  // the layout differs (`1e21` vs `1e+21`, `1e-6` vs `0.000001`).
  let mut buf = ryu::Buffer::new();
  let formatted = buf.format_finite(n.abs());
  let (mantissa, exp) = match formatted.split_once('e') {
    Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
    None => (formatted, 0),
  };
  let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
  let mut digits = format!("{int_part}{frac_part}");
  let mut int_len = int_part.len() as i32;
  let leading_zeros = digits.len() - digits.trim_start_matches('0').len();
  digits.drain(..leading_zeros);
  int_len -= leading_zeros as i32;
  digits.truncate(digits.trim_end_matches('0').len());

  // The value is 0.DIGITS * 10^n.
  let k = digits.len() as i32;
  let n_exp = int_len + exp;
  let mut out = String::new();
  if n < 0.0 {
    out.push('-');
  }
  if k <= n_exp && n_exp <= 21 {
    out.push_str(&digits);
    out.extend(std::iter::repeat('0').take((n_exp - k) as usize));
  } else if 0 < n_exp && n_exp <= 21 {
    let (int, frac) = digits.split_at(n_exp as usize);
    out.push_str(int);
    out.push('.');
    out.push_str(frac);
  } else if -6 < n_exp && n_exp <= 0 {
    out.push_str("0.");
    out.extend(std::iter::repeat('0').take((-n_exp) as usize));
    out.push_str(&digits);
  } else {
    let (first, rest) = digits.split_at(1);
    out.push_str(first);
    if !rest.is_empty() {
      out.push('.');
      out.push_str(rest);
    }
    out.push('e');
    out.push(if n_exp - 1 < 0 { '-' } else { '+' });
    out.push_str(&(n_exp - 1).abs().to_string());
  }
  out
}

// https://tc39.es/ecma262/multipage/abstract-operations.html#sec-touint32
pub fn to_uint32(n: f64) -> u32 {
  if !n.is_finite() || n == 0.0 {
    return 0;
  }
  n.trunc().rem_euclid(4294967296.0) as u32
}

// https://tc39.es/ecma262/multipage/abstract-operations.html#sec-toint32
pub fn to_int32(n: f64) -> i32 {
  to_uint32(n) as i32
}

/// `None` means every relational operator between `a` and `b` is false.
// https://tc39.es/ecma262/multipage/abstract-operations.html#sec-islessthan
pub fn js_cmp(a: &StaticValue, b: &StaticValue) -> Option<Ordering> {
  match (a, b) {
    (Str(a), Str(b)) => Some(a.encode_utf16().cmp(b.encode_utf16())),
    (a, b) => a.to_number().partial_cmp(&b.to_number()),
  }
}

pub fn js_strict_eq(a: &StaticValue, b: &StaticValue) -> bool {
  // f64 equality already makes NaN unequal to itself and 0 equal to -0.
  a == b
}

// https://tc39.es/ecma262/multipage/abstract-operations.html#sec-islooselyequal
pub fn js_loose_eq(a: &StaticValue, b: &StaticValue) -> bool {
  match (a, b) {
    (Undefined | Null, Undefined | Null) => true,
    (Undefined | Null, _) | (_, Undefined | Null) => false,
    (Num(l), Str(r)) => *l == coerce_str_to_num(r),
    (Str(l), Num(r)) => coerce_str_to_num(l) == *r,
    (Bool(l), r) => js_loose_eq(&Num(*l as u8 as f64), r),
    (l, Bool(r)) => js_loose_eq(l, &Num(*r as u8 as f64)),
    (l, r) => js_strict_eq(l, r),
  }
}

// https://tc39.es/ecma262/multipage/ecmascript-data-types-and-values.html#sec-numeric-types-number-exponentiate
pub fn js_exp(base: f64, exponent: f64) -> f64 {
  if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
    return f64::NAN;
  }
  base.powf(exponent)
}
