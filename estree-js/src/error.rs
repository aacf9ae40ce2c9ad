use core::fmt;
use core::fmt::Debug;
use core::fmt::Formatter;
use std::error::Error;
use std::fmt::Display;
use std::io;
use std::str::Utf8Error;

/// Failure to turn input bytes into a [`Node`](crate::ast::node::Node).
///
/// Diagnostic codes (prefix `EJ`) are assigned per variant and are stable:
/// - `EJ0001`: [`LoadError::Json`]
/// - `EJ0002`: [`LoadError::InvalidUtf8`]
/// - `EJ0003`: [`LoadError::Io`]
pub enum LoadError {
  Json(serde_json::Error),
  InvalidUtf8(Utf8Error),
  Io(io::Error),
}

impl LoadError {
  pub fn code(&self) -> &'static str {
    match self {
      LoadError::Json(_) => "EJ0001",
      LoadError::InvalidUtf8(_) => "EJ0002",
      LoadError::Io(_) => "EJ0003",
    }
  }

  pub fn message(&self) -> String {
    match self {
      LoadError::Json(err) => format!("input is not an ESTree node: {err}"),
      LoadError::InvalidUtf8(err) => format!("input is not valid UTF-8: {err}"),
      LoadError::Io(err) => format!("failed to read input: {err}"),
    }
  }
}

impl Debug for LoadError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.code(), self.message())
  }
}

impl Display for LoadError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "error[{}]: {}", self.code(), self.message())
  }
}

impl Error for LoadError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      LoadError::Json(err) => Some(err),
      LoadError::InvalidUtf8(err) => Some(err),
      LoadError::Io(err) => Some(err),
    }
  }
}

impl From<serde_json::Error> for LoadError {
  fn from(err: serde_json::Error) -> Self {
    LoadError::Json(err)
  }
}

impl From<Utf8Error> for LoadError {
  fn from(err: Utf8Error) -> Self {
    LoadError::InvalidUtf8(err)
  }
}

impl From<io::Error> for LoadError {
  fn from(err: io::Error) -> Self {
    LoadError::Io(err)
  }
}

pub type LoadResult<T> = Result<T, LoadError>;
