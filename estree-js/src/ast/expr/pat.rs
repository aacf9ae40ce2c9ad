use serde::Deserialize;

use crate::ast::node::Node;

// Members are `Property` nodes whose `value` is the target, plus at most one trailing
// `RestElement`. `{ a: { b = c } = d, ...e }` is possible.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ObjPat {
  #[serde(default)]
  pub properties: Vec<Node>,
}

// Unnamed elements (`[, a]`) are `null`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ArrPat {
  #[serde(default)]
  pub elements: Vec<Option<Node>>,
}

// `left = right` in a pattern or parameter list.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AssignPat {
  pub left: Box<Node>,
  pub right: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RestElement {
  pub argument: Box<Node>,
}
