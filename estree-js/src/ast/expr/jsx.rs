use serde::Deserialize;

use crate::ast::node::Node;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JsxIdentifier {
  pub name: String,
}

// `<svg:rect>`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JsxNamespacedName {
  pub namespace: Box<Node>,
  pub name: Box<Node>,
}

// `<Foo.Bar>`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JsxMemberExpr {
  pub object: Box<Node>,
  pub property: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsxElem {
  pub opening_element: Box<Node>,
  pub closing_element: Option<Box<Node>>,
  #[serde(default)]
  pub children: Vec<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JsxFragment {
  #[serde(default)]
  pub children: Vec<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsxOpeningElem {
  pub name: Box<Node>,
  #[serde(default)]
  pub attributes: Vec<Node>,
  #[serde(default)]
  pub self_closing: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JsxClosingElem {
  pub name: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JsxAttr {
  pub name: Box<Node>,
  // `None` for a bare `<input disabled />`.
  pub value: Option<Box<Node>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JsxSpreadAttr {
  pub argument: Box<Node>,
}

// Shared by `JSXExpressionContainer` and `JSXSpreadChild`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JsxExprContainer {
  pub expression: Box<Node>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JsxText {
  pub value: String,
  pub raw: Option<String>,
}
