#![allow(dead_code)]

//! ESTree builders producing the JSON a parser like espree emits.

use estree_js::ast::node::Node;
use serde_json::json;
use serde_json::Value;

pub fn load(value: Value) -> Node {
  estree_js::from_value(value).unwrap()
}

pub fn id(name: &str) -> Value {
  json!({"type": "Identifier", "name": name})
}

pub fn str_lit(value: &str) -> Value {
  json!({"type": "Literal", "value": value, "raw": format!("'{value}'")})
}

pub fn num(value: f64) -> Value {
  json!({"type": "Literal", "value": value, "raw": value.to_string()})
}

pub fn bool_lit(value: bool) -> Value {
  json!({"type": "Literal", "value": value, "raw": value.to_string()})
}

pub fn null_lit() -> Value {
  json!({"type": "Literal", "value": null, "raw": "null"})
}

pub fn regex_lit(pattern: &str) -> Value {
  json!({
    "type": "Literal",
    "value": {},
    "raw": format!("/{pattern}/"),
    "regex": {"pattern": pattern, "flags": ""},
  })
}

pub fn this() -> Value {
  json!({"type": "ThisExpression"})
}

pub fn member(object: Value, property: &str) -> Value {
  json!({
    "type": "MemberExpression",
    "object": object,
    "property": id(property),
    "computed": false,
    "optional": false,
  })
}

pub fn index(object: Value, property: Value) -> Value {
  json!({
    "type": "MemberExpression",
    "object": object,
    "property": property,
    "computed": true,
    "optional": false,
  })
}

pub fn call(callee: Value, arguments: Vec<Value>) -> Value {
  json!({"type": "CallExpression", "callee": callee, "arguments": arguments, "optional": false})
}

pub fn new_(callee: Value, arguments: Vec<Value>) -> Value {
  json!({"type": "NewExpression", "callee": callee, "arguments": arguments})
}

pub fn chain(expression: Value) -> Value {
  json!({"type": "ChainExpression", "expression": expression})
}

pub fn bin(operator: &str, left: Value, right: Value) -> Value {
  json!({"type": "BinaryExpression", "operator": operator, "left": left, "right": right})
}

pub fn logical(operator: &str, left: Value, right: Value) -> Value {
  json!({"type": "LogicalExpression", "operator": operator, "left": left, "right": right})
}

pub fn assign(left: Value, right: Value) -> Value {
  json!({"type": "AssignmentExpression", "operator": "=", "left": left, "right": right})
}

pub fn unary(operator: &str, argument: Value) -> Value {
  json!({"type": "UnaryExpression", "operator": operator, "prefix": true, "argument": argument})
}

pub fn update(operator: &str, argument: Value, prefix: bool) -> Value {
  json!({"type": "UpdateExpression", "operator": operator, "prefix": prefix, "argument": argument})
}

pub fn cond(test: Value, consequent: Value, alternate: Value) -> Value {
  json!({
    "type": "ConditionalExpression",
    "test": test,
    "consequent": consequent,
    "alternate": alternate,
  })
}

pub fn seq(expressions: Vec<Value>) -> Value {
  json!({"type": "SequenceExpression", "expressions": expressions})
}

pub fn paren(expression: Value) -> Value {
  json!({"type": "ParenthesizedExpression", "expression": expression})
}

/// Use `Value::Null` for holes.
pub fn arr(elements: Vec<Value>) -> Value {
  json!({"type": "ArrayExpression", "elements": elements})
}

pub fn obj(properties: Vec<Value>) -> Value {
  json!({"type": "ObjectExpression", "properties": properties})
}

pub fn prop(key: Value, value: Value) -> Value {
  json!({
    "type": "Property",
    "key": key,
    "value": value,
    "computed": false,
    "shorthand": false,
    "method": false,
    "kind": "init",
  })
}

pub fn computed_prop(key: Value, value: Value) -> Value {
  let mut prop = prop(key, value);
  prop["computed"] = json!(true);
  prop
}

pub fn shorthand(name: &str) -> Value {
  let mut prop = prop(id(name), id(name));
  prop["shorthand"] = json!(true);
  prop
}

pub fn method_prop(key: &str, func: Value) -> Value {
  let mut prop = prop(id(key), func);
  prop["method"] = json!(true);
  prop
}

pub fn spread(argument: Value) -> Value {
  json!({"type": "SpreadElement", "argument": argument})
}

/// `quasis` holds the cooked text of each chunk, one more than `expressions`.
pub fn tpl(quasis: &[&str], expressions: Vec<Value>) -> Value {
  let last = quasis.len().saturating_sub(1);
  let quasis: Vec<Value> = quasis
    .iter()
    .enumerate()
    .map(|(i, chunk)| {
      json!({
        "type": "TemplateElement",
        "value": {"raw": chunk, "cooked": chunk},
        "tail": i == last,
      })
    })
    .collect();
  json!({"type": "TemplateLiteral", "quasis": quasis, "expressions": expressions})
}

pub fn tagged(tag: Value, quasi: Value) -> Value {
  json!({"type": "TaggedTemplateExpression", "tag": tag, "quasi": quasi})
}

pub fn expr_stmt(expression: Value) -> Value {
  json!({"type": "ExpressionStatement", "expression": expression})
}

pub fn block(body: Vec<Value>) -> Value {
  json!({"type": "BlockStatement", "body": body})
}

pub fn program(body: Vec<Value>) -> Value {
  json!({"type": "Program", "body": body, "sourceType": "module"})
}

pub fn declarator(id: Value, init: Value) -> Value {
  json!({"type": "VariableDeclarator", "id": id, "init": init})
}

/// `kind target = init;`, with `Value::Null` for no initializer.
pub fn var(kind: &str, target: Value, init: Value) -> Value {
  vars(kind, vec![declarator(target, init)])
}

pub fn vars(kind: &str, declarations: Vec<Value>) -> Value {
  json!({"type": "VariableDeclaration", "kind": kind, "declarations": declarations})
}

pub fn obj_pat(properties: Vec<Value>) -> Value {
  json!({"type": "ObjectPattern", "properties": properties})
}

pub fn arr_pat(elements: Vec<Value>) -> Value {
  json!({"type": "ArrayPattern", "elements": elements})
}

pub fn assign_pat(left: Value, right: Value) -> Value {
  json!({"type": "AssignmentPattern", "left": left, "right": right})
}

pub fn rest(argument: Value) -> Value {
  json!({"type": "RestElement", "argument": argument})
}

fn function(kind: &str, id: Value, params: Vec<Value>, body: Value) -> Value {
  json!({
    "type": kind,
    "id": id,
    "params": params,
    "body": body,
    "async": false,
    "generator": false,
    "expression": false,
  })
}

pub fn func_decl(name: &str, params: Vec<Value>, body: Vec<Value>) -> Value {
  function("FunctionDeclaration", id(name), params, block(body))
}

/// Use `Value::Null` for an anonymous function.
pub fn func_expr(id: Value, params: Vec<Value>, body: Vec<Value>) -> Value {
  function("FunctionExpression", id, params, block(body))
}

/// `body` is either a `BlockStatement` or the returned expression.
pub fn arrow(params: Vec<Value>, body: Value) -> Value {
  let expression = body["type"] != "BlockStatement";
  let mut func = function("ArrowFunctionExpression", Value::Null, params, body);
  func["expression"] = json!(expression);
  func
}

pub fn ret(argument: Value) -> Value {
  json!({"type": "ReturnStatement", "argument": argument})
}

pub fn if_(test: Value, consequent: Value, alternate: Value) -> Value {
  json!({"type": "IfStatement", "test": test, "consequent": consequent, "alternate": alternate})
}

pub fn for_(init: Value, test: Value, update: Value, body: Value) -> Value {
  json!({"type": "ForStatement", "init": init, "test": test, "update": update, "body": body})
}

pub fn for_in(left: Value, right: Value, body: Value) -> Value {
  json!({"type": "ForInStatement", "left": left, "right": right, "body": body})
}

pub fn for_of(left: Value, right: Value, body: Value) -> Value {
  json!({"type": "ForOfStatement", "left": left, "right": right, "body": body, "await": false})
}

pub fn while_(test: Value, body: Value) -> Value {
  json!({"type": "WhileStatement", "test": test, "body": body})
}

pub fn do_while(body: Value, test: Value) -> Value {
  json!({"type": "DoWhileStatement", "body": body, "test": test})
}

pub fn throw(argument: Value) -> Value {
  json!({"type": "ThrowStatement", "argument": argument})
}

/// `try { block } catch (param) { handler }`.
pub fn try_catch(block_body: Vec<Value>, param: Value, handler_body: Vec<Value>) -> Value {
  json!({
    "type": "TryStatement",
    "block": block(block_body),
    "handler": {"type": "CatchClause", "param": param, "body": block(handler_body)},
    "finalizer": null,
  })
}

pub fn switch_(discriminant: Value, cases: Vec<Value>) -> Value {
  json!({"type": "SwitchStatement", "discriminant": discriminant, "cases": cases})
}

/// Use `Value::Null` as the test for `default:`.
pub fn case(test: Value, consequent: Vec<Value>) -> Value {
  json!({"type": "SwitchCase", "test": test, "consequent": consequent})
}

pub fn break_(label: Value) -> Value {
  json!({"type": "BreakStatement", "label": label})
}

pub fn continue_(label: Value) -> Value {
  json!({"type": "ContinueStatement", "label": label})
}

pub fn labeled(label: &str, body: Value) -> Value {
  json!({"type": "LabeledStatement", "label": id(label), "body": body})
}

fn class(kind: &str, id: Value, super_class: Value, members: Vec<Value>) -> Value {
  json!({
    "type": kind,
    "id": id,
    "superClass": super_class,
    "body": {"type": "ClassBody", "body": members},
  })
}

pub fn class_decl(name: &str, super_class: Value, members: Vec<Value>) -> Value {
  class("ClassDeclaration", id(name), super_class, members)
}

pub fn class_expr(super_class: Value, members: Vec<Value>) -> Value {
  class("ClassExpression", Value::Null, super_class, members)
}

pub fn method(key: &str, is_static: bool, body: Vec<Value>) -> Value {
  json!({
    "type": "MethodDefinition",
    "key": id(key),
    "value": func_expr(Value::Null, vec![], body),
    "computed": false,
    "static": is_static,
    "kind": "method",
  })
}

pub fn import_decl(specifiers: Vec<Value>, source: &str) -> Value {
  json!({"type": "ImportDeclaration", "specifiers": specifiers, "source": str_lit(source)})
}

pub fn import_spec(imported: &str, local: &str) -> Value {
  json!({"type": "ImportSpecifier", "imported": id(imported), "local": id(local)})
}

pub fn import_default(local: &str) -> Value {
  json!({"type": "ImportDefaultSpecifier", "local": id(local)})
}

pub fn import_ns(local: &str) -> Value {
  json!({"type": "ImportNamespaceSpecifier", "local": id(local)})
}

pub fn export_named(declaration: Value, specifiers: Vec<Value>, source: Value) -> Value {
  json!({
    "type": "ExportNamedDeclaration",
    "declaration": declaration,
    "specifiers": specifiers,
    "source": source,
  })
}

pub fn export_spec(local: &str, exported: &str) -> Value {
  json!({"type": "ExportSpecifier", "local": id(local), "exported": id(exported)})
}

pub fn export_default(declaration: Value) -> Value {
  json!({"type": "ExportDefaultDeclaration", "declaration": declaration})
}

pub fn jsx_id(name: &str) -> Value {
  json!({"type": "JSXIdentifier", "name": name})
}

/// `<name attributes>children</name>`, self-closing when `children` is `None`.
pub fn jsx_elem(name: &str, attributes: Vec<Value>, children: Option<Vec<Value>>) -> Value {
  let self_closing = children.is_none();
  let closing = if self_closing {
    Value::Null
  } else {
    json!({"type": "JSXClosingElement", "name": jsx_id(name)})
  };
  json!({
    "type": "JSXElement",
    "openingElement": {
      "type": "JSXOpeningElement",
      "name": jsx_id(name),
      "attributes": attributes,
      "selfClosing": self_closing,
    },
    "closingElement": closing,
    "children": children.unwrap_or_default(),
  })
}

pub fn jsx_attr(name: &str, value: Value) -> Value {
  json!({"type": "JSXAttribute", "name": jsx_id(name), "value": value})
}

pub fn jsx_spread_attr(argument: Value) -> Value {
  json!({"type": "JSXSpreadAttribute", "argument": argument})
}

pub fn jsx_container(expression: Value) -> Value {
  json!({"type": "JSXExpressionContainer", "expression": expression})
}

pub fn jsx_text(value: &str) -> Value {
  json!({"type": "JSXText", "value": value, "raw": value})
}
