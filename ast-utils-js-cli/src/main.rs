use ast_utils_js::compute_static_expression;
use ast_utils_js::contains_identifier;
use ast_utils_js::get_property_name;
use ast_utils_js::get_require_source;
use ast_utils_js::is_function_expression;
use ast_utils_js::is_promise;
use ast_utils_js::is_static_require;
use ast_utils_js::StaticValue;
use clap::Parser;
use clap::Subcommand;
use estree_js::ast::node::Node;
use estree_js::error::LoadError;
use serde_json::json;
use serde_json::Value;
use std::fs::File;
use std::io::stdin;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing::Level;

// Load failures use the `EJ` codes of `estree_js::error::LoadError`.
const POINTER_MISS: &str = "AU0001";

#[derive(Parser)]
#[command(author, version, about = "Query ESTree JSON syntax trees")]
struct Cli {
  /// ESTree JSON file; omit for stdin.
  #[arg(short, long, global = true)]
  input: Option<PathBuf>,

  /// JSON pointer to the node to query (e.g. /body/0/expression); omit for the root.
  #[arg(long, global = true)]
  node: Option<String>,

  /// Print library diagnostics to stderr.
  #[arg(long, global = true)]
  trace: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Whether the node uses the identifier without declaring it first.
  Contains {
    /// Identifier name to look for.
    name: String,
  },
  /// Evaluate the node as a constant expression.
  Eval,
  /// Literal property name of a member expression.
  PropertyName,
  /// Module specifier of a `require('...')` call.
  RequireSource,
  /// Whether the node is a `require('...')` call.
  IsStaticRequire,
  /// Whether the node evidently produces a promise.
  IsPromise,
  /// Whether the node is a function or arrow function expression.
  IsFunctionExpression,
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.trace);

  let node = match load(cli.input.as_ref(), cli.node.as_deref()) {
    Ok(node) => node,
    Err(message) => {
      eprintln!("{message}");
      return ExitCode::FAILURE;
    }
  };
  debug!(node = node.type_name().unwrap_or("unsupported"), "loaded node");

  let output = match &cli.command {
    Commands::Contains { name } => json!(contains_identifier(name, &node)),
    Commands::Eval => static_value_json(compute_static_expression(&node)),
    Commands::PropertyName => static_value_json(get_property_name(&node)),
    Commands::RequireSource => json!(get_require_source(&node)),
    Commands::IsStaticRequire => json!(is_static_require(&node)),
    Commands::IsPromise => json!(is_promise(&node)),
    Commands::IsFunctionExpression => json!(is_function_expression(&node)),
  };
  println!("{output}");
  ExitCode::SUCCESS
}

fn load(input: Option<&PathBuf>, pointer: Option<&str>) -> Result<Node, String> {
  let mut source = Vec::new();
  let read = match input {
    Some(path) => File::open(path).and_then(|mut file| file.read_to_end(&mut source)),
    None => stdin().read_to_end(&mut source),
  };
  read.map_err(|err| LoadError::from(err).to_string())?;

  let Some(pointer) = pointer else {
    return estree_js::from_slice(&source).map_err(|err| err.to_string());
  };
  let text = std::str::from_utf8(&source).map_err(|err| LoadError::from(err).to_string())?;
  let mut document: Value =
    serde_json::from_str(text).map_err(|err| LoadError::from(err).to_string())?;
  let Some(selected) = document.pointer_mut(pointer) else {
    return Err(format!("error[{POINTER_MISS}]: no node at JSON pointer `{pointer}`"));
  };
  estree_js::from_value(selected.take()).map_err(|err| err.to_string())
}

// `typeof` disambiguates values JSON cannot carry, such as `NaN`, which is printed as its string.
fn static_value_json(value: Option<StaticValue>) -> Value {
  let Some(value) = value else {
    return json!({"known": false});
  };
  let mut output = json!({"known": true, "type": value.type_of()});
  let json = match &value {
    StaticValue::Undefined => return output,
    StaticValue::Null => Value::Null,
    StaticValue::Bool(b) => json!(b),
    StaticValue::Num(n) => serde_json::Number::from_f64(*n)
      .map(Value::Number)
      .unwrap_or_else(|| json!(value.to_string())),
    StaticValue::Str(s) => json!(s),
  };
  output["value"] = json;
  output
}

fn init_tracing(enabled: bool) {
  if !enabled {
    return;
  }
  let _ = tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_writer(std::io::stderr)
    .with_ansi(false)
    .try_init();
}
