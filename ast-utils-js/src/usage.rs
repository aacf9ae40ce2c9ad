use crate::binding::introduces;
use estree_js::ast::func::Function;
use estree_js::ast::node::Node;
use tracing::debug;

/// Whether `name` is referenced anywhere in the subtree rooted at `node`.
///
/// References hidden by a binding of the same name inside the subtree are not counted: a block,
/// program, function, classic `for`, or `for-in/of` that declares `name` is skipped entirely.
/// Binding occurrences themselves (`let foo`, `function (foo) {}`) are not references, but
/// default values and computed keys inside patterns are.
///
/// ```
/// use ast_utils_js::contains_identifier;
///
/// let node = estree_js::from_str(r#"{"type": "Identifier", "name": "foo"}"#).unwrap();
/// assert!(contains_identifier("foo", &node));
/// assert!(!contains_identifier("foo", None));
/// ```
pub fn contains_identifier<'a>(name: &str, node: impl Into<Option<&'a Node>>) -> bool {
  node.into().is_some_and(|node| contains(name, node))
}

/// Whether any of `nodes` references `name`. An empty sequence, including `None`, contains
/// nothing.
pub fn some_contains_identifier<'a>(
  name: &str,
  nodes: impl IntoIterator<Item = &'a Node>,
) -> bool {
  nodes.into_iter().any(|node| contains(name, node))
}

fn opt(name: &str, node: Option<&Node>) -> bool {
  node.is_some_and(|node| contains(name, node))
}

// A plain identifier in a binding position declares rather than references.
fn binding_target(name: &str, target: &Node) -> bool {
  !target.is_identifier() && contains(name, target)
}

fn function_contains(name: &str, node: &Node, func: &Function) -> bool {
  func.params.iter().any(|param| binding_target(name, param))
    || (!introduces(name, node) && contains(name, &func.body))
}

fn contains(name: &str, node: &Node) -> bool {
  match node {
    Node::Program(program) => {
      !introduces(name, node) && some_contains_identifier(name, &program.body)
    }

    Node::Identifier(id) => id.name == name,
    Node::PrivateIdentifier(_) => false,
    Node::Literal(_) => false,
    Node::ThisExpression => false,
    Node::Super => false,

    Node::ArrayExpression(arr) => some_contains_identifier(name, arr.elements.iter().flatten()),
    Node::ObjectExpression(obj) => some_contains_identifier(name, &obj.properties),
    Node::Property(prop) => {
      (prop.computed && contains(name, &prop.key)) || contains(name, &prop.value)
    }
    Node::SpreadElement(spread) => contains(name, &spread.argument),
    Node::TemplateLiteral(tpl) => some_contains_identifier(name, &tpl.expressions),
    Node::TaggedTemplateExpression(tagged) => {
      contains(name, &tagged.tag) || contains(name, &tagged.quasi)
    }
    Node::SequenceExpression(seq) => some_contains_identifier(name, &seq.expressions),
    Node::CallExpression(call) | Node::NewExpression(call) => {
      contains(name, &call.callee) || some_contains_identifier(name, &call.arguments)
    }
    // `foo.bar` names the member `bar`; only `foo[bar]` reads the variable.
    Node::MemberExpression(member) => {
      (member.computed && contains(name, &member.property)) || contains(name, &member.object)
    }
    Node::ChainExpression(chain) => contains(name, &chain.expression),
    Node::ParenthesizedExpression(paren) => contains(name, &paren.expression),
    Node::ConditionalExpression(cond) => {
      contains(name, &cond.test)
        || contains(name, &cond.consequent)
        || contains(name, &cond.alternate)
    }
    Node::BinaryExpression(bin) => contains(name, &bin.left) || contains(name, &bin.right),
    Node::LogicalExpression(bin) => contains(name, &bin.left) || contains(name, &bin.right),
    Node::AssignmentExpression(assign) => {
      contains(name, &assign.left) || contains(name, &assign.right)
    }
    Node::UnaryExpression(unary) => contains(name, &unary.argument),
    Node::UpdateExpression(update) => contains(name, &update.argument),
    Node::YieldExpression(expr) => opt(name, expr.argument.as_deref()),
    Node::AwaitExpression(expr) => contains(name, &expr.argument),
    Node::ImportExpression(expr) => contains(name, &expr.source),
    Node::MetaProperty(_) => false,

    Node::FunctionDeclaration(func)
    | Node::FunctionExpression(func)
    | Node::ArrowFunctionExpression(func) => function_contains(name, node, func),
    Node::ClassDeclaration(class) | Node::ClassExpression(class) => {
      !class.id.as_deref().is_some_and(|id| introduces(name, id))
        && (opt(name, class.super_class.as_deref()) || contains(name, &class.body))
    }
    Node::ClassBody(body) => some_contains_identifier(name, &body.body),
    Node::MethodDefinition(method) => {
      (method.computed && contains(name, &method.key)) || contains(name, &method.value)
    }
    Node::PropertyDefinition(prop) => {
      (prop.computed && contains(name, &prop.key)) || opt(name, prop.value.as_deref())
    }
    Node::StaticBlock(block) => {
      !introduces(name, node) && some_contains_identifier(name, &block.body)
    }

    Node::ExpressionStatement(stmt) => contains(name, &stmt.expression),
    Node::BlockStatement(block) => {
      !introduces(name, node) && some_contains_identifier(name, &block.body)
    }
    Node::EmptyStatement => false,
    Node::DebuggerStatement => false,
    Node::ReturnStatement(stmt) => opt(name, stmt.argument.as_deref()),
    Node::IfStatement(stmt) => {
      contains(name, &stmt.test)
        || contains(name, &stmt.consequent)
        || opt(name, stmt.alternate.as_deref())
    }
    // Labels live in their own namespace.
    Node::LabeledStatement(stmt) => contains(name, &stmt.body),
    Node::BreakStatement(_) | Node::ContinueStatement(_) => false,
    Node::WithStatement(stmt) => contains(name, &stmt.object) || contains(name, &stmt.body),
    Node::SwitchStatement(stmt) => {
      contains(name, &stmt.discriminant) || some_contains_identifier(name, &stmt.cases)
    }
    Node::SwitchCase(case) => {
      opt(name, case.test.as_deref()) || some_contains_identifier(name, &case.consequent)
    }
    Node::ThrowStatement(stmt) => contains(name, &stmt.argument),
    Node::TryStatement(stmt) => {
      contains(name, &stmt.block)
        || opt(name, stmt.handler.as_deref())
        || opt(name, stmt.finalizer.as_deref())
    }
    Node::CatchClause(clause) => {
      clause
        .param
        .as_deref()
        .is_some_and(|param| binding_target(name, param))
        || (!introduces(name, node) && contains(name, &clause.body))
    }
    Node::WhileStatement(stmt) | Node::DoWhileStatement(stmt) => {
      contains(name, &stmt.test) || contains(name, &stmt.body)
    }
    Node::ForStatement(stmt) => {
      !introduces(name, node)
        && (opt(name, stmt.init.as_deref())
          || opt(name, stmt.test.as_deref())
          || opt(name, stmt.update.as_deref())
          || contains(name, &stmt.body))
    }
    Node::ForInStatement(stmt) | Node::ForOfStatement(stmt) => {
      !introduces(name, node)
        && (contains(name, &stmt.left) || contains(name, &stmt.right) || contains(name, &stmt.body))
    }

    Node::VariableDeclaration(decl) => some_contains_identifier(name, &decl.declarations),
    Node::VariableDeclarator(decl) => {
      binding_target(name, &decl.id) || opt(name, decl.init.as_deref())
    }
    Node::ObjectPattern(pat) => pat.properties.iter().any(|member| match member {
      Node::Property(prop) => {
        (prop.computed && contains(name, &prop.key)) || binding_target(name, &prop.value)
      }
      other => contains(name, other),
    }),
    Node::ArrayPattern(pat) => pat
      .elements
      .iter()
      .flatten()
      .any(|element| binding_target(name, element)),
    Node::AssignmentPattern(pat) => binding_target(name, &pat.left) || contains(name, &pat.right),
    Node::RestElement(rest) => binding_target(name, &rest.argument),

    Node::ImportDeclaration(_)
    | Node::ImportSpecifier(_)
    | Node::ImportDefaultSpecifier(_)
    | Node::ImportNamespaceSpecifier(_) => false,
    Node::ExportNamedDeclaration(export) => {
      opt(name, export.declaration.as_deref())
        || (export.source.is_none() && some_contains_identifier(name, &export.specifiers))
    }
    Node::ExportSpecifier(spec) => contains(name, &spec.local),
    Node::ExportDefaultDeclaration(export) => contains(name, &export.declaration),
    Node::ExportAllDeclaration(_) => false,

    Node::JsxIdentifier(id) => id.name == name,
    Node::JsxNamespacedName(_) => false,
    Node::JsxMemberExpression(member) => contains(name, &member.object),
    Node::JsxElement(elem) => {
      contains(name, &elem.opening_element) || some_contains_identifier(name, &elem.children)
    }
    Node::JsxFragment(frag) => some_contains_identifier(name, &frag.children),
    Node::JsxOpeningElement(elem) => {
      contains(name, &elem.name) || some_contains_identifier(name, &elem.attributes)
    }
    Node::JsxClosingElement(_) => false,
    Node::JsxAttribute(attr) => opt(name, attr.value.as_deref()),
    Node::JsxSpreadAttribute(attr) => contains(name, &attr.argument),
    Node::JsxExpressionContainer(container) | Node::JsxSpreadChild(container) => {
      contains(name, &container.expression)
    }
    Node::JsxEmptyExpression => false,
    Node::JsxText(_) => false,

    Node::Unsupported => {
      debug!(
        target: "ast_utils_js::usage",
        identifier = name,
        "unsupported node in identifier search"
      );
      false
    }
  }
}
