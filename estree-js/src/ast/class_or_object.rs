use serde::Deserialize;

use super::node::Node;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
  #[default]
  Init,
  Get,
  Set,
}

// Used both in object literals and, as a member of `ObjectPattern`, in destructuring. In the
// pattern case `value` is the binding target.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Property {
  pub key: Box<Node>,
  pub value: Box<Node>,
  #[serde(default)]
  pub computed: bool,
  #[serde(default)]
  pub shorthand: bool,
  #[serde(default)]
  pub method: bool,
  #[serde(default)]
  pub kind: PropertyKind,
}

// Shared by `ClassDeclaration` and `ClassExpression`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Class {
  pub id: Option<Box<Node>>,
  pub super_class: Option<Box<Node>>,
  pub body: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ClassBody {
  #[serde(default)]
  pub body: Vec<Node>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
  Constructor,
  #[default]
  Method,
  Get,
  Set,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MethodDef {
  pub key: Box<Node>,
  // Always a `FunctionExpression`.
  pub value: Box<Node>,
  #[serde(default)]
  pub computed: bool,
  #[serde(default, rename = "static")]
  pub is_static: bool,
  #[serde(default)]
  pub kind: MethodKind,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PropertyDef {
  pub key: Box<Node>,
  pub value: Option<Box<Node>>,
  #[serde(default)]
  pub computed: bool,
  #[serde(default, rename = "static")]
  pub is_static: bool,
}
