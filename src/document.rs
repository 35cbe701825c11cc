//! Arity driver and document assembly.
//!
//! The document is a Rust source file meant to be written next to the archive
//! protocol module of a consuming crate. Every generated macro is
//! `#[macro_export]`ed, so the enclosing module only delimits the generated
//! region; its closing line is always the last non-blank line of the file.

use std::io::Write;

use tracing::{debug, trace};

use crate::render::{self, Config, Declaration, Definition, Style};
use crate::{Arity, Error};

const BANNER: &str = "// Serialization bindings for plain aggregate types.";
const GUARD_MODULE: &str = "serialize_macros";
const INDENT: &str = "    ";

const PROSE: &str = "\
// These macros make it easier to serialize and deserialize types that consist
// of a simple series of fields, each of which is serializable. Given
// `struct Point { x: i32, y: i32 }`, either write `make_serializable_2!(Point, x, y);`
// at module scope, or write `make_me_serializable_2!(x, y);` inside `impl Point { .. }`.
// The second form exists for types whose impls cannot be written generically
// from the outside.
//
// `make_serializable_N!` and `impl_serializable_N!` implement the archive
// `Serialize` and `Deserialize` traits. Their expansion ends with an unnamed
// `const _` item, which is a no-op at module scope but is rejected inside an
// impl block, so invoking them there fails to compile. Use the `make_me_` form
// inside impl blocks instead.
//
// `declare_serializable!(T)` asserts that `T` has the free-function bindings
// when they are written in another module with `impl_serializable_N!`.
// `declare_me_serializable!()` expands to the `MemberSerializable` signatures,
// which `impl_me_serializable_N!(T, ..)` implements out of line.
//
// Fields are serialized in the order they are listed; deserialization stops at
// the first field that fails and returns that failure.";

/// Render every (arity, style) block, arities ascending, styles in [`Style::ALL`] order.
pub fn definitions(config: &Config) -> Vec<Definition> {
  let mut out = Vec::with_capacity(config.max_arity() * Style::ALL.len());
  for n in 0..config.max_arity() {
    for style in Style::ALL {
      let def = render::render(Arity::new(n), style, config);
      trace!(arity = n, ?style, lines = def.lines().len(), "rendered bindings");
      out.push(def);
    }
  }
  out
}

/// The complete generated file.
#[derive(Clone, Debug)]
pub struct Document {
  invocation: Vec<String>,
  declarations: Vec<Definition>,
  bindings: Vec<Definition>,
}

impl Document {
  /// Assemble the document. `invocation` is the command line that produced it
  /// (program first) and is echoed into the header for provenance.
  pub fn assemble(config: &Config, invocation: Vec<String>) -> Self {
    let declarations: Vec<_> = Declaration::ALL.into_iter().map(|d| render::render_declaration(d, config)).collect();
    let bindings = definitions(config);
    debug!(arities = config.max_arity(), definitions = declarations.len() + bindings.len(), "assembled document");
    Self { invocation, declarations, bindings }
  }

  /// Every top-level definition, declarations first.
  pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
    self.declarations.iter().chain(&self.bindings)
  }

  fn header(&self) -> String {
    let program = self.invocation.first().map(String::as_str).unwrap_or(env!("CARGO_PKG_NAME"));
    let command = if self.invocation.is_empty() { program.to_string() } else { self.invocation.join(" ") };
    let mut out = String::new();
    out.push_str(BANNER);
    out.push_str("\n// @generated\n//\n");
    out.push_str(&format!("// This file is automatically generated by '{command}'.\n"));
    out.push_str(&format!("// Please modify '{program}' instead of modifying this file.\n\n"));
    out.push_str(&format!("pub mod {GUARD_MODULE} {{\n"));
    out
  }

  fn footer() -> String {
    format!("}} // mod {GUARD_MODULE}\n")
  }

  fn push_indented(out: &mut String, text: &str) {
    for line in text.lines() {
      if !line.is_empty() {
        out.push_str(INDENT);
      }
      out.push_str(line);
      out.push('\n');
    }
  }

  /// The full text, byte-for-byte deterministic for a given config and invocation.
  pub fn render(&self) -> String {
    let mut out = self.header();
    Self::push_indented(&mut out, PROSE);
    for def in self.definitions() {
      out.push('\n');
      Self::push_indented(&mut out, &def.to_string());
    }
    out.push_str(&Self::footer());
    out
  }

  /// Write the full text in a single write, after all generation has happened.
  pub fn write_to(&self, mut w: impl Write) -> Result<(), Error> {
    let text = self.render();
    w.write_all(text.as_bytes())?;
    w.flush()?;
    debug!(bytes = text.len(), "wrote document");
    Ok(())
  }
}
