use crate::eval::compute_static_expression;
use crate::value::StaticValue;
use estree_js::ast::expr::MemberExpr;
use estree_js::ast::node::Node;

/// The literal name of the property accessed by a member expression: `bar` in `foo.bar`, `"bar"`
/// in `foo['bar']`, and `0` in `foo[0]`. Computed keys are not evaluated, so `foo[0 + 0]` and
/// `foo[bar]` have no name.
pub fn get_property_name<'a>(node: impl Into<Option<&'a Node>>) -> Option<StaticValue> {
  match node.into()? {
    Node::MemberExpression(member) => literal_property(member),
    _ => None,
  }
}

fn literal_property(member: &MemberExpr) -> Option<StaticValue> {
  match &*member.property {
    Node::Identifier(id) if !member.computed => Some(StaticValue::Str(id.name.clone())),
    Node::Literal(_) => compute_static_expression(&*member.property),
    _ => None,
  }
}

/// Like [`get_property_name`], but also folds computed keys (`foo['th' + 'en']`) and converts the
/// result to its property-key string.
pub(crate) fn static_member_name(member: &MemberExpr) -> Option<String> {
  if member.computed {
    compute_static_expression(&*member.property).map(|key| key.to_string())
  } else {
    member.property.as_identifier_name().map(str::to_string)
  }
}
