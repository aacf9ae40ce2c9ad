use estree_js::ast::node::Node;

fn any_introduces<'a>(name: &str, nodes: impl IntoIterator<Item = &'a Node>) -> bool {
  nodes.into_iter().any(|node| introduces(name, node))
}

fn opt_introduces(name: &str, node: Option<&Node>) -> bool {
  node.is_some_and(|node| introduces(name, node))
}

/// Whether the node's own declarative syntax binds `name`: parameters, declarator targets,
/// destructuring targets, and the direct statements of a block. Bodies are never entered, so an
/// inner function declaring `name` does not count for its enclosing block's other statements
/// unless it is itself one of those statements.
pub(crate) fn introduces(name: &str, node: &Node) -> bool {
  match node {
    Node::Identifier(id) => id.name == name,
    Node::FunctionDeclaration(func) => {
      opt_introduces(name, func.id.as_deref()) || any_introduces(name, &func.params)
    }
    // The name of a function expression is only visible inside it and is not checked.
    Node::FunctionExpression(func) | Node::ArrowFunctionExpression(func) => {
      any_introduces(name, &func.params)
    }
    Node::ClassDeclaration(class) => opt_introduces(name, class.id.as_deref()),
    Node::Program(program) => any_introduces(name, &program.body),
    Node::BlockStatement(block) | Node::StaticBlock(block) => any_introduces(name, &block.body),
    Node::VariableDeclaration(decl) => any_introduces(name, &decl.declarations),
    Node::VariableDeclarator(decl) => introduces(name, &decl.id),
    Node::ObjectPattern(pat) => any_introduces(name, &pat.properties),
    Node::ArrayPattern(pat) => any_introduces(name, pat.elements.iter().flatten()),
    Node::Property(prop) => introduces(name, &prop.value),
    Node::RestElement(rest) => introduces(name, &rest.argument),
    Node::AssignmentPattern(pat) => introduces(name, &pat.left),
    // `init` may also be a plain expression, which only references.
    Node::ForStatement(stmt) => stmt
      .init
      .as_deref()
      .is_some_and(|init| matches!(init, Node::VariableDeclaration(_)) && introduces(name, init)),
    // `for (foo of bar)` assigns to an outer `foo`; only a declaration binds.
    Node::ForInStatement(stmt) | Node::ForOfStatement(stmt) => {
      matches!(*stmt.left, Node::VariableDeclaration(_)) && introduces(name, &stmt.left)
    }
    Node::CatchClause(clause) => opt_introduces(name, clause.param.as_deref()),
    Node::ImportDeclaration(decl) => decl.specifiers.iter().any(|spec| match spec {
      Node::ImportSpecifier(spec) => introduces(name, &spec.local),
      Node::ImportDefaultSpecifier(spec) | Node::ImportNamespaceSpecifier(spec) => {
        introduces(name, &spec.local)
      }
      _ => false,
    }),
    _ => false,
  }
}
