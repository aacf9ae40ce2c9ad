use ast::node::Node;
use error::LoadResult;
use std::io::Read;

pub mod ast;
pub mod error;
pub mod operator;

/// Loads an ESTree node from JSON text, such as the output of espree, acorn, or babel-eslint.
///
/// Node types that are not modelled load as [`Node::Unsupported`] instead of failing, so newer
/// syntax does not stop callers from inspecting the rest of the tree.
///
/// # Examples
///
/// ```
/// use estree_js::ast::node::Node;
///
/// let node = estree_js::from_str(r#"{"type": "Identifier", "name": "foo"}"#).unwrap();
/// assert!(matches!(node, Node::Identifier(id) if id.name == "foo"));
/// ```
pub fn from_str(json: &str) -> LoadResult<Node> {
  Ok(serde_json::from_str(json)?)
}

pub fn from_slice(json: &[u8]) -> LoadResult<Node> {
  let json = std::str::from_utf8(json)?;
  from_str(json)
}

pub fn from_reader<R: Read>(mut reader: R) -> LoadResult<Node> {
  let mut json = Vec::new();
  reader.read_to_end(&mut json)?;
  from_slice(&json)
}

pub fn from_value(value: serde_json::Value) -> LoadResult<Node> {
  Ok(serde_json::from_value(value)?)
}
