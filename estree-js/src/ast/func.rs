use serde::Deserialize;

use super::node::Node;

// Shared by `FunctionDeclaration`, `FunctionExpression`, and `ArrowFunctionExpression`. For an
// arrow function with `expression` set, `body` is the returned expression instead of a block.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Function {
  pub id: Option<Box<Node>>,
  #[serde(default)]
  pub params: Vec<Node>,
  pub body: Box<Node>,
  #[serde(default, rename = "async")]
  pub is_async: bool,
  #[serde(default)]
  pub generator: bool,
  #[serde(default)]
  pub expression: bool,
}
