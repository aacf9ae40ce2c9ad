use crate::value::js_cmp;
use crate::value::js_exp;
use crate::value::js_loose_eq;
use crate::value::js_strict_eq;
use crate::value::to_int32;
use crate::value::to_uint32;
use crate::value::StaticValue;
use crate::value::StaticValue::*;
use estree_js::ast::expr::lit::LitValue;
use estree_js::ast::expr::lit::Literal;
use estree_js::ast::expr::lit::TemplateLiteral;
use estree_js::ast::node::Node;
use estree_js::operator::BinaryOperator;
use estree_js::operator::LogicalOperator;
use estree_js::operator::UnaryOperator;
use tracing::trace;

/// Computes the value of `node` without running any code, or `None` when it depends on anything
/// other than literals and operators over them.
///
/// ```
/// use ast_utils_js::compute_static_expression;
/// use ast_utils_js::StaticValue;
///
/// let node = estree_js::from_str(
///   r#"{"type": "BinaryExpression", "operator": "+",
///       "left": {"type": "Literal", "value": "a"},
///       "right": {"type": "Literal", "value": 1}}"#,
/// )
/// .unwrap();
/// assert_eq!(compute_static_expression(&node), Some(StaticValue::Str("a1".into())));
/// ```
pub fn compute_static_expression<'a>(node: impl Into<Option<&'a Node>>) -> Option<StaticValue> {
  eval(node.into()?)
}

fn eval(node: &Node) -> Option<StaticValue> {
  match node {
    Node::Literal(lit) => eval_literal(lit),
    Node::Identifier(id) if id.name == "undefined" => Some(Undefined),
    Node::TemplateLiteral(tpl) => eval_template(tpl),
    Node::UnaryExpression(unary) => eval_unary(unary.operator, &unary.argument),
    Node::BinaryExpression(bin) => {
      let left = eval(&bin.left)?;
      let right = eval(&bin.right)?;
      eval_binary(bin.operator, &left, &right)
    }
    Node::LogicalExpression(logical) => {
      let left = eval(&logical.left)?;
      let decided = match logical.operator {
        LogicalOperator::And => !left.to_boolean(),
        LogicalOperator::Or => left.to_boolean(),
        LogicalOperator::NullishCoalescing => !left.is_nullish(),
      };
      if decided {
        Some(left)
      } else {
        eval(&logical.right)
      }
    }
    Node::ConditionalExpression(cond) => {
      if eval(&cond.test)?.to_boolean() {
        eval(&cond.consequent)
      } else {
        eval(&cond.alternate)
      }
    }
    Node::ParenthesizedExpression(paren) => eval(&paren.expression),
    other => {
      trace!(
        target: "ast_utils_js::eval",
        node = other.type_name().unwrap_or("unsupported"),
        "not a static expression"
      );
      None
    }
  }
}

fn eval_literal(lit: &Literal) -> Option<StaticValue> {
  if !lit.is_primitive() {
    return None;
  }
  Some(match &lit.value {
    LitValue::Null => Null,
    LitValue::Bool(b) => Bool(*b),
    LitValue::Num(n) => Num(*n),
    LitValue::Str(s) => Str(s.clone()),
    LitValue::Opaque(_) => return None,
  })
}

fn eval_template(tpl: &TemplateLiteral) -> Option<StaticValue> {
  let mut out = String::new();
  for (i, quasi) in tpl.quasis.iter().enumerate() {
    out.push_str(quasi.value.cooked.as_deref()?);
    if let Some(expr) = tpl.expressions.get(i) {
      out.push_str(&eval(expr)?.to_string());
    };
  }
  Some(Str(out))
}

fn eval_unary(op: UnaryOperator, argument: &Node) -> Option<StaticValue> {
  if op == UnaryOperator::Void {
    // The operand may be anything, even an unknown reference.
    return Some(Undefined);
  };
  let arg = eval(argument)?;
  #[rustfmt::skip]
  let res = match op {
    UnaryOperator::Neg => Num(-arg.to_number()),
    UnaryOperator::Plus => Num(arg.to_number()),
    UnaryOperator::Not => Bool(!arg.to_boolean()),
    UnaryOperator::BitNot => Num((!to_int32(arg.to_number())) as f64),
    UnaryOperator::Typeof => Str(arg.type_of().to_string()),
    UnaryOperator::Void | UnaryOperator::Delete => return None,
  };
  Some(res)
}

fn eval_binary(op: BinaryOperator, a: &StaticValue, b: &StaticValue) -> Option<StaticValue> {
  use BinaryOperator::*;

  let num = |f: fn(f64, f64) -> f64| Num(f(a.to_number(), b.to_number()));
  let int = |f: fn(i32, i32) -> i32| {
    Num(f(to_int32(a.to_number()), to_int32(b.to_number())) as f64)
  };
  let shift = to_uint32(b.to_number()) & 0x1f;
  #[rustfmt::skip]
  let res = match op {
    Add => match (a, b) {
      (Str(_), _) | (_, Str(_)) => Str(format!("{a}{b}")),
      _ => num(|l, r| l + r),
    },
    Sub => num(|l, r| l - r),
    Mul => num(|l, r| l * r),
    Div => num(|l, r| l / r),
    // f64 `%` is the ECMAScript remainder: the result takes the dividend's sign.
    Mod => num(|l, r| l % r),
    Exp => num(js_exp),
    BitAnd => int(|l, r| l & r),
    BitOr => int(|l, r| l | r),
    BitXor => int(|l, r| l ^ r),
    Shl => Num(to_int32(a.to_number()).wrapping_shl(shift) as f64),
    Shr => Num(to_int32(a.to_number()).wrapping_shr(shift) as f64),
    UShr => Num(to_uint32(a.to_number()).wrapping_shr(shift) as f64),
    StrictEq => Bool(js_strict_eq(a, b)),
    NotStrictEq => Bool(!js_strict_eq(a, b)),
    LooseEq => Bool(js_loose_eq(a, b)),
    NotLooseEq => Bool(!js_loose_eq(a, b)),
    Lt => Bool(js_cmp(a, b).is_some_and(|c| c.is_lt())),
    Gt => Bool(js_cmp(a, b).is_some_and(|c| c.is_gt())),
    Leq => Bool(js_cmp(a, b).is_some_and(|c| c.is_le())),
    Geq => Bool(js_cmp(a, b).is_some_and(|c| c.is_ge())),
    In | Instanceof => return None,
  };
  Some(res)
}
