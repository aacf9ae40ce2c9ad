use super::class_or_object::Class;
use super::class_or_object::ClassBody;
use super::class_or_object::MethodDef;
use super::class_or_object::PropertyDef;
use super::class_or_object::Property;
use super::expr::jsx::JsxAttr;
use super::expr::jsx::JsxClosingElem;
use super::expr::jsx::JsxElem;
use super::expr::jsx::JsxExprContainer;
use super::expr::jsx::JsxFragment;
use super::expr::jsx::JsxIdentifier;
use super::expr::jsx::JsxMemberExpr;
use super::expr::jsx::JsxNamespacedName;
use super::expr::jsx::JsxOpeningElem;
use super::expr::jsx::JsxSpreadAttr;
use super::expr::jsx::JsxText;
use super::expr::lit::Literal;
use super::expr::lit::TemplateLiteral;
use super::expr::pat::ArrPat;
use super::expr::pat::AssignPat;
use super::expr::pat::ObjPat;
use super::expr::pat::RestElement;
use super::expr::ArrExpr;
use super::expr::AssignExpr;
use super::expr::AwaitExpr;
use super::expr::BinaryExpr;
use super::expr::CallExpr;
use super::expr::ChainExpr;
use super::expr::CondExpr;
use super::expr::Identifier;
use super::expr::ImportExpr;
use super::expr::LogicalExpr;
use super::expr::MemberExpr;
use super::expr::MetaProperty;
use super::expr::ObjExpr;
use super::expr::ParenExpr;
use super::expr::PrivateIdentifier;
use super::expr::SeqExpr;
use super::expr::SpreadElement;
use super::expr::TaggedTemplateExpr;
use super::expr::UnaryExpr;
use super::expr::UpdateExpr;
use super::expr::YieldExpr;
use super::func::Function;
use super::import_export::ExportAllDecl;
use super::import_export::ExportDefaultDecl;
use super::import_export::ExportNamedDecl;
use super::import_export::ExportSpecifier;
use super::import_export::ImportBinding;
use super::import_export::ImportDecl;
use super::import_export::ImportSpecifier;
use super::stmt::decl::VarDecl;
use super::stmt::decl::VarDeclarator;
use super::stmt::BlockStmt;
use super::stmt::CatchClause;
use super::stmt::ExprStmt;
use super::stmt::ForInOfStmt;
use super::stmt::ForStmt;
use super::stmt::IfStmt;
use super::stmt::JumpStmt;
use super::stmt::LabeledStmt;
use super::stmt::Program;
use super::stmt::ReturnStmt;
use super::stmt::SwitchCase;
use super::stmt::SwitchStmt;
use super::stmt::ThrowStmt;
use super::stmt::TryStmt;
use super::stmt::WhileStmt;
use super::stmt::WithStmt;
use serde::Deserialize;

/// One ESTree node, discriminated by its `type` tag.
///
/// Every child slot is itself a `Node`: ESTree positions are heterogeneous (a `for-of` left side
/// can be a declaration or a pattern, a property value can be an expression or a pattern), so the
/// tree is modelled the way the JSON arrives rather than split into expression/statement/pattern
/// sorts.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Node {
  Program(Program),

  // Leaves.
  Identifier(Identifier),
  PrivateIdentifier(PrivateIdentifier),
  Literal(Literal),
  ThisExpression,
  Super,

  // Expressions.
  ArrayExpression(ArrExpr),
  ObjectExpression(ObjExpr),
  Property(Property),
  #[serde(alias = "ExperimentalSpreadProperty")]
  SpreadElement(SpreadElement),
  TemplateLiteral(TemplateLiteral),
  TaggedTemplateExpression(TaggedTemplateExpr),
  SequenceExpression(SeqExpr),
  CallExpression(CallExpr),
  NewExpression(CallExpr),
  MemberExpression(MemberExpr),
  ChainExpression(ChainExpr),
  ParenthesizedExpression(ParenExpr),
  ConditionalExpression(CondExpr),
  BinaryExpression(BinaryExpr),
  LogicalExpression(LogicalExpr),
  AssignmentExpression(AssignExpr),
  UnaryExpression(UnaryExpr),
  UpdateExpression(UpdateExpr),
  YieldExpression(YieldExpr),
  AwaitExpression(AwaitExpr),
  ImportExpression(ImportExpr),
  MetaProperty(MetaProperty),

  // Functions and classes.
  FunctionDeclaration(Function),
  FunctionExpression(Function),
  ArrowFunctionExpression(Function),
  ClassDeclaration(Class),
  ClassExpression(Class),
  ClassBody(ClassBody),
  MethodDefinition(MethodDef),
  PropertyDefinition(PropertyDef),
  StaticBlock(BlockStmt),

  // Statements.
  ExpressionStatement(ExprStmt),
  BlockStatement(BlockStmt),
  EmptyStatement,
  DebuggerStatement,
  ReturnStatement(ReturnStmt),
  IfStatement(IfStmt),
  LabeledStatement(LabeledStmt),
  BreakStatement(JumpStmt),
  ContinueStatement(JumpStmt),
  WithStatement(WithStmt),
  SwitchStatement(SwitchStmt),
  SwitchCase(SwitchCase),
  ThrowStatement(ThrowStmt),
  TryStatement(TryStmt),
  CatchClause(CatchClause),
  WhileStatement(WhileStmt),
  DoWhileStatement(WhileStmt),
  ForStatement(ForStmt),
  ForInStatement(ForInOfStmt),
  ForOfStatement(ForInOfStmt),

  // Declarations and patterns.
  VariableDeclaration(VarDecl),
  VariableDeclarator(VarDeclarator),
  ObjectPattern(ObjPat),
  ArrayPattern(ArrPat),
  AssignmentPattern(AssignPat),
  #[serde(alias = "ExperimentalRestProperty")]
  RestElement(RestElement),

  // Modules.
  ImportDeclaration(ImportDecl),
  ImportSpecifier(ImportSpecifier),
  ImportDefaultSpecifier(ImportBinding),
  ImportNamespaceSpecifier(ImportBinding),
  ExportNamedDeclaration(ExportNamedDecl),
  ExportSpecifier(ExportSpecifier),
  ExportDefaultDeclaration(ExportDefaultDecl),
  ExportAllDeclaration(ExportAllDecl),

  // JSX.
  #[serde(rename = "JSXIdentifier")]
  JsxIdentifier(JsxIdentifier),
  #[serde(rename = "JSXNamespacedName")]
  JsxNamespacedName(JsxNamespacedName),
  #[serde(rename = "JSXMemberExpression")]
  JsxMemberExpression(JsxMemberExpr),
  #[serde(rename = "JSXElement")]
  JsxElement(JsxElem),
  #[serde(rename = "JSXFragment")]
  JsxFragment(JsxFragment),
  #[serde(rename = "JSXOpeningElement")]
  JsxOpeningElement(JsxOpeningElem),
  #[serde(rename = "JSXClosingElement")]
  JsxClosingElement(JsxClosingElem),
  #[serde(rename = "JSXAttribute")]
  JsxAttribute(JsxAttr),
  #[serde(rename = "JSXSpreadAttribute")]
  JsxSpreadAttribute(JsxSpreadAttr),
  #[serde(rename = "JSXExpressionContainer")]
  JsxExpressionContainer(JsxExprContainer),
  #[serde(rename = "JSXEmptyExpression")]
  JsxEmptyExpression,
  #[serde(rename = "JSXSpreadChild")]
  JsxSpreadChild(JsxExprContainer),
  #[serde(rename = "JSXText")]
  JsxText(JsxText),

  /// Any `type` tag not listed above. Its fields are discarded.
  #[serde(other)]
  Unsupported,
}

impl Node {
  pub fn is_identifier(&self) -> bool {
    matches!(self, Node::Identifier(_))
  }

  /// The name of a plain [`Node::Identifier`].
  pub fn as_identifier_name(&self) -> Option<&str> {
    match self {
      Node::Identifier(id) => Some(&id.name),
      _ => None,
    }
  }

  /// The ESTree `type` tag this node was loaded from, or `None` for [`Node::Unsupported`].
  pub fn type_name(&self) -> Option<&'static str> {
    let name = match self {
      Node::Program(_) => "Program",
      Node::Identifier(_) => "Identifier",
      Node::PrivateIdentifier(_) => "PrivateIdentifier",
      Node::Literal(_) => "Literal",
      Node::ThisExpression => "ThisExpression",
      Node::Super => "Super",
      Node::ArrayExpression(_) => "ArrayExpression",
      Node::ObjectExpression(_) => "ObjectExpression",
      Node::Property(_) => "Property",
      Node::SpreadElement(_) => "SpreadElement",
      Node::TemplateLiteral(_) => "TemplateLiteral",
      Node::TaggedTemplateExpression(_) => "TaggedTemplateExpression",
      Node::SequenceExpression(_) => "SequenceExpression",
      Node::CallExpression(_) => "CallExpression",
      Node::NewExpression(_) => "NewExpression",
      Node::MemberExpression(_) => "MemberExpression",
      Node::ChainExpression(_) => "ChainExpression",
      Node::ParenthesizedExpression(_) => "ParenthesizedExpression",
      Node::ConditionalExpression(_) => "ConditionalExpression",
      Node::BinaryExpression(_) => "BinaryExpression",
      Node::LogicalExpression(_) => "LogicalExpression",
      Node::AssignmentExpression(_) => "AssignmentExpression",
      Node::UnaryExpression(_) => "UnaryExpression",
      Node::UpdateExpression(_) => "UpdateExpression",
      Node::YieldExpression(_) => "YieldExpression",
      Node::AwaitExpression(_) => "AwaitExpression",
      Node::ImportExpression(_) => "ImportExpression",
      Node::MetaProperty(_) => "MetaProperty",
      Node::FunctionDeclaration(_) => "FunctionDeclaration",
      Node::FunctionExpression(_) => "FunctionExpression",
      Node::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
      Node::ClassDeclaration(_) => "ClassDeclaration",
      Node::ClassExpression(_) => "ClassExpression",
      Node::ClassBody(_) => "ClassBody",
      Node::MethodDefinition(_) => "MethodDefinition",
      Node::PropertyDefinition(_) => "PropertyDefinition",
      Node::StaticBlock(_) => "StaticBlock",
      Node::ExpressionStatement(_) => "ExpressionStatement",
      Node::BlockStatement(_) => "BlockStatement",
      Node::EmptyStatement => "EmptyStatement",
      Node::DebuggerStatement => "DebuggerStatement",
      Node::ReturnStatement(_) => "ReturnStatement",
      Node::IfStatement(_) => "IfStatement",
      Node::LabeledStatement(_) => "LabeledStatement",
      Node::BreakStatement(_) => "BreakStatement",
      Node::ContinueStatement(_) => "ContinueStatement",
      Node::WithStatement(_) => "WithStatement",
      Node::SwitchStatement(_) => "SwitchStatement",
      Node::SwitchCase(_) => "SwitchCase",
      Node::ThrowStatement(_) => "ThrowStatement",
      Node::TryStatement(_) => "TryStatement",
      Node::CatchClause(_) => "CatchClause",
      Node::WhileStatement(_) => "WhileStatement",
      Node::DoWhileStatement(_) => "DoWhileStatement",
      Node::ForStatement(_) => "ForStatement",
      Node::ForInStatement(_) => "ForInStatement",
      Node::ForOfStatement(_) => "ForOfStatement",
      Node::VariableDeclaration(_) => "VariableDeclaration",
      Node::VariableDeclarator(_) => "VariableDeclarator",
      Node::ObjectPattern(_) => "ObjectPattern",
      Node::ArrayPattern(_) => "ArrayPattern",
      Node::AssignmentPattern(_) => "AssignmentPattern",
      Node::RestElement(_) => "RestElement",
      Node::ImportDeclaration(_) => "ImportDeclaration",
      Node::ImportSpecifier(_) => "ImportSpecifier",
      Node::ImportDefaultSpecifier(_) => "ImportDefaultSpecifier",
      Node::ImportNamespaceSpecifier(_) => "ImportNamespaceSpecifier",
      Node::ExportNamedDeclaration(_) => "ExportNamedDeclaration",
      Node::ExportSpecifier(_) => "ExportSpecifier",
      Node::ExportDefaultDeclaration(_) => "ExportDefaultDeclaration",
      Node::ExportAllDeclaration(_) => "ExportAllDeclaration",
      Node::JsxIdentifier(_) => "JSXIdentifier",
      Node::JsxNamespacedName(_) => "JSXNamespacedName",
      Node::JsxMemberExpression(_) => "JSXMemberExpression",
      Node::JsxElement(_) => "JSXElement",
      Node::JsxFragment(_) => "JSXFragment",
      Node::JsxOpeningElement(_) => "JSXOpeningElement",
      Node::JsxClosingElement(_) => "JSXClosingElement",
      Node::JsxAttribute(_) => "JSXAttribute",
      Node::JsxSpreadAttribute(_) => "JSXSpreadAttribute",
      Node::JsxExpressionContainer(_) => "JSXExpressionContainer",
      Node::JsxEmptyExpression => "JSXEmptyExpression",
      Node::JsxSpreadChild(_) => "JSXSpreadChild",
      Node::JsxText(_) => "JSXText",
      Node::Unsupported => return None,
    };
    Some(name)
  }
}
