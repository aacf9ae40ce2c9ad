use serde::Deserialize;

use crate::ast::node::Node;

/// The JSON `value` of a [`Literal`].
///
/// Regex literals serialize their `RegExp` value as `{}` and some parsers emit bigint values as
/// strings or `null`; check [`Literal::regex`] and [`Literal::bigint`] before trusting `value`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LitValue {
  #[default]
  Null,
  Bool(bool),
  Num(f64),
  Str(String),
  Opaque(serde_json::Value),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RegexLit {
  pub pattern: String,
  #[serde(default)]
  pub flags: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Literal {
  #[serde(default)]
  pub value: LitValue,
  pub raw: Option<String>,
  pub regex: Option<RegexLit>,
  pub bigint: Option<String>,
}

impl Literal {
  /// Whether `value` holds the literal's primitive value (not a regex or bigint).
  pub fn is_primitive(&self) -> bool {
    self.regex.is_none() && self.bigint.is_none() && !matches!(self.value, LitValue::Opaque(_))
  }

  pub fn as_str(&self) -> Option<&str> {
    match (&self.value, self.is_primitive()) {
      (LitValue::Str(s), true) => Some(s),
      _ => None,
    }
  }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TemplateElementValue {
  pub raw: String,
  // `None` when the chunk has an invalid escape, which is only legal in tagged templates.
  pub cooked: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TemplateElement {
  pub value: TemplateElementValue,
  #[serde(default)]
  pub tail: bool,
}

// There is always one more quasi than there are expressions.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TemplateLiteral {
  #[serde(default)]
  pub quasis: Vec<TemplateElement>,
  #[serde(default)]
  pub expressions: Vec<Node>,
}
