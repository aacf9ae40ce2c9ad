use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
pub enum BinaryOperator {
  #[serde(rename = "==")]
  LooseEq,
  #[serde(rename = "!=")]
  NotLooseEq,
  #[serde(rename = "===")]
  StrictEq,
  #[serde(rename = "!==")]
  NotStrictEq,
  #[serde(rename = "<")]
  Lt,
  #[serde(rename = "<=")]
  Leq,
  #[serde(rename = ">")]
  Gt,
  #[serde(rename = ">=")]
  Geq,
  #[serde(rename = "<<")]
  Shl,
  #[serde(rename = ">>")]
  Shr,
  #[serde(rename = ">>>")]
  UShr,
  #[serde(rename = "+")]
  Add,
  #[serde(rename = "-")]
  Sub,
  #[serde(rename = "*")]
  Mul,
  #[serde(rename = "/")]
  Div,
  #[serde(rename = "%")]
  Mod,
  #[serde(rename = "**")]
  Exp,
  #[serde(rename = "|")]
  BitOr,
  #[serde(rename = "^")]
  BitXor,
  #[serde(rename = "&")]
  BitAnd,
  #[serde(rename = "in")]
  In,
  #[serde(rename = "instanceof")]
  Instanceof,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
pub enum LogicalOperator {
  #[serde(rename = "&&")]
  And,
  #[serde(rename = "||")]
  Or,
  #[serde(rename = "??")]
  NullishCoalescing,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
pub enum UnaryOperator {
  #[serde(rename = "-")]
  Neg,
  #[serde(rename = "+")]
  Plus,
  #[serde(rename = "!")]
  Not,
  #[serde(rename = "~")]
  BitNot,
  #[serde(rename = "typeof")]
  Typeof,
  #[serde(rename = "void")]
  Void,
  #[serde(rename = "delete")]
  Delete,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
pub enum UpdateOperator {
  #[serde(rename = "++")]
  Increment,
  #[serde(rename = "--")]
  Decrement,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
pub enum AssignmentOperator {
  #[serde(rename = "=")]
  Assign,
  #[serde(rename = "+=")]
  AddAssign,
  #[serde(rename = "-=")]
  SubAssign,
  #[serde(rename = "*=")]
  MulAssign,
  #[serde(rename = "/=")]
  DivAssign,
  #[serde(rename = "%=")]
  ModAssign,
  #[serde(rename = "**=")]
  ExpAssign,
  #[serde(rename = "<<=")]
  ShlAssign,
  #[serde(rename = ">>=")]
  ShrAssign,
  #[serde(rename = ">>>=")]
  UShrAssign,
  #[serde(rename = "|=")]
  BitOrAssign,
  #[serde(rename = "^=")]
  BitXorAssign,
  #[serde(rename = "&=")]
  BitAndAssign,
  #[serde(rename = "&&=")]
  AndAssign,
  #[serde(rename = "||=")]
  OrAssign,
  #[serde(rename = "??=")]
  NullishAssign,
}
