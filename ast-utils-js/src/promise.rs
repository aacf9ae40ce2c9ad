use crate::property::static_member_name;
use estree_js::ast::node::Node;

const PROTOTYPE_METHODS: &[&str] = &["then", "catch"];
// Static methods on `Promise` (including Bluebird's) that do not return a promise.
const NON_PROMISE_STATICS: &[&str] = &["is", "cancel", "promisify", "promisifyAll"];

/// Whether `node` evidently produces a promise: `x.then(...)`, `x.catch(...)`, a call of a
/// `Promise` static method, or `new Promise(...)`.
pub fn is_promise<'a>(node: impl Into<Option<&'a Node>>) -> bool {
  let Some(mut node) = node.into() else {
    return false;
  };
  if let Node::ChainExpression(chain) = node {
    node = &*chain.expression;
  };
  match node {
    Node::CallExpression(call) => {
      let Node::MemberExpression(callee) = &*call.callee else {
        return false;
      };
      let Some(method) = static_member_name(callee) else {
        return false;
      };
      PROTOTYPE_METHODS.contains(&method.as_str())
        || (callee.object.as_identifier_name() == Some("Promise")
          && !NON_PROMISE_STATICS.contains(&method.as_str()))
    }
    Node::NewExpression(call) => call.callee.as_identifier_name() == Some("Promise"),
    _ => false,
  }
}
