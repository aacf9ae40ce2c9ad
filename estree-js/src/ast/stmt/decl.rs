use serde::Deserialize;

use crate::ast::node::Node;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
pub enum VarDeclKind {
  #[serde(rename = "var")]
  Var,
  #[serde(rename = "let")]
  Let,
  #[serde(rename = "const")]
  Const,
  #[serde(rename = "using")]
  Using,
  #[serde(rename = "await using")]
  AwaitUsing,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct VarDecl {
  #[serde(default)]
  pub declarations: Vec<Node>,
  pub kind: VarDeclKind,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct VarDeclarator {
  // A binding pattern: identifier, object pattern, or array pattern.
  pub id: Box<Node>,
  pub init: Option<Box<Node>>,
}
