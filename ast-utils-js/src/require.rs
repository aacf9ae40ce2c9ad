use estree_js::ast::node::Node;

fn static_require_source(node: &Node) -> Option<&str> {
  let Node::CallExpression(call) = node else {
    return None;
  };
  if call.callee.as_identifier_name() != Some("require") {
    return None;
  }
  match call.arguments.as_slice() {
    [Node::Literal(lit)] => lit.as_str(),
    _ => None,
  }
}

/// Whether `node` is `require('<string>')`: a call of the plain identifier `require` with exactly
/// one string literal argument.
pub fn is_static_require<'a>(node: impl Into<Option<&'a Node>>) -> bool {
  node.into().and_then(static_require_source).is_some()
}

/// The module specifier of a static `require` call.
pub fn get_require_source<'a>(node: impl Into<Option<&'a Node>>) -> Option<&'a str> {
  node.into().and_then(static_require_source)
}
