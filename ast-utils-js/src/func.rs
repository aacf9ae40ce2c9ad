use estree_js::ast::node::Node;

/// Whether `node` is a function or arrow function expression. Declarations and calls of
/// function expressions do not count.
pub fn is_function_expression<'a>(node: impl Into<Option<&'a Node>>) -> bool {
  matches!(
    node.into(),
    Some(Node::FunctionExpression(_) | Node::ArrowFunctionExpression(_))
  )
}
