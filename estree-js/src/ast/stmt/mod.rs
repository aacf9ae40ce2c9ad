use serde::Deserialize;

use super::node::Node;

pub mod decl;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
  #[default]
  Script,
  Module,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
  #[serde(default)]
  pub body: Vec<Node>,
  #[serde(default)]
  pub source_type: SourceType,
}

// Also the payload of `StaticBlock`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BlockStmt {
  #[serde(default)]
  pub body: Vec<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ExprStmt {
  pub expression: Box<Node>,
  // Raw text of a directive prologue entry like "use strict".
  pub directive: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ReturnStmt {
  pub argument: Option<Box<Node>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct IfStmt {
  pub test: Box<Node>,
  pub consequent: Box<Node>,
  pub alternate: Option<Box<Node>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LabeledStmt {
  pub label: Box<Node>,
  pub body: Box<Node>,
}

// `break` and `continue`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JumpStmt {
  pub label: Option<Box<Node>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WithStmt {
  pub object: Box<Node>,
  pub body: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SwitchStmt {
  pub discriminant: Box<Node>,
  #[serde(default)]
  pub cases: Vec<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SwitchCase {
  // None for `default:`.
  pub test: Option<Box<Node>>,
  #[serde(default)]
  pub consequent: Vec<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ThrowStmt {
  pub argument: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TryStmt {
  pub block: Box<Node>,
  pub handler: Option<Box<Node>>,
  pub finalizer: Option<Box<Node>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CatchClause {
  pub param: Option<Box<Node>>,
  pub body: Box<Node>,
}

// `while` and `do ... while`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WhileStmt {
  pub test: Box<Node>,
  pub body: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ForStmt {
  pub init: Option<Box<Node>>,
  pub test: Option<Box<Node>>,
  pub update: Option<Box<Node>>,
  pub body: Box<Node>,
}

// `for ... in` and `for ... of`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ForInOfStmt {
  pub left: Box<Node>,
  pub right: Box<Node>,
  pub body: Box<Node>,
  #[serde(default, rename = "await")]
  pub is_await: bool,
}
