pub mod jsx;
pub mod lit;
pub mod pat;

use serde::Deserialize;

use super::node::Node;
use crate::operator::AssignmentOperator;
use crate::operator::BinaryOperator;
use crate::operator::LogicalOperator;
use crate::operator::UnaryOperator;
use crate::operator::UpdateOperator;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Identifier {
  pub name: String,
}

// `#name` in `this.#name` or a class member key. Never a variable reference.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PrivateIdentifier {
  pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ArrExpr {
  // Holes (`[, a]`) are `null`.
  #[serde(default)]
  pub elements: Vec<Option<Node>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ObjExpr {
  #[serde(default)]
  pub properties: Vec<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SpreadElement {
  pub argument: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TaggedTemplateExpr {
  pub tag: Box<Node>,
  pub quasi: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SeqExpr {
  #[serde(default)]
  pub expressions: Vec<Node>,
}

// Shared by `CallExpression` and `NewExpression`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CallExpr {
  pub callee: Box<Node>,
  #[serde(default)]
  pub arguments: Vec<Node>,
  #[serde(default)]
  pub optional: bool,
}

// When `computed` is false, `property` is an Identifier (or PrivateIdentifier) naming the member,
// not a variable reference.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MemberExpr {
  pub object: Box<Node>,
  pub property: Box<Node>,
  #[serde(default)]
  pub computed: bool,
  #[serde(default)]
  pub optional: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChainExpr {
  pub expression: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ParenExpr {
  pub expression: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CondExpr {
  pub test: Box<Node>,
  pub consequent: Box<Node>,
  pub alternate: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BinaryExpr {
  pub operator: BinaryOperator,
  pub left: Box<Node>,
  pub right: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LogicalExpr {
  pub operator: LogicalOperator,
  pub left: Box<Node>,
  pub right: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AssignExpr {
  pub operator: AssignmentOperator,
  pub left: Box<Node>,
  pub right: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UnaryExpr {
  pub operator: UnaryOperator,
  pub argument: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateExpr {
  pub operator: UpdateOperator,
  pub argument: Box<Node>,
  #[serde(default)]
  pub prefix: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct YieldExpr {
  pub argument: Option<Box<Node>>,
  #[serde(default)]
  pub delegate: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AwaitExpr {
  pub argument: Box<Node>,
}

// `import(source)`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ImportExpr {
  pub source: Box<Node>,
}

// `new.target` and `import.meta`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MetaProperty {
  pub meta: Box<Node>,
  pub property: Box<Node>,
}
