use serde::Deserialize;

use super::node::Node;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ImportDecl {
  #[serde(default)]
  pub specifiers: Vec<Node>,
  pub source: Box<Node>,
}

// `{imported as local}`. `imported` names the export and is never a local binding.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ImportSpecifier {
  pub imported: Box<Node>,
  pub local: Box<Node>,
}

// Shared by `ImportDefaultSpecifier` and `ImportNamespaceSpecifier`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ImportBinding {
  pub local: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ExportNamedDecl {
  pub declaration: Option<Box<Node>>,
  #[serde(default)]
  pub specifiers: Vec<Node>,
  // With a source (`export {a} from 'mod'`), specifiers name the other module's exports.
  pub source: Option<Box<Node>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ExportSpecifier {
  pub local: Box<Node>,
  pub exported: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ExportDefaultDecl {
  pub declaration: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ExportAllDecl {
  pub source: Box<Node>,
  pub exported: Option<Box<Node>>,
}
