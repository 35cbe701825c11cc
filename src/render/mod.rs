use proc_macro2::TokenStream as TokenStream2;

mod args;
mod fields;
mod generator;
mod printer;

pub use args::{Config, DEFAULT_MAX_ARITY, Declaration, FunctionAttr, Style};
pub use fields::Arity;

/// What a [`Definition`] was rendered from.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DefinitionKind {
  Binding { arity: Arity, style: Style },
  Declaration(Declaration),
}

/// One rendered definition block: the macros for a single (arity, style) pair,
/// or one declaration-only macro. Immutable once built.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Definition {
  kind: DefinitionKind,
  lines: Vec<String>,
}

impl Definition {
  fn from_tokens(kind: DefinitionKind, tokens: TokenStream2) -> Self {
    Self { kind, lines: printer::Printer::new().print(tokens) }
  }

  pub fn kind(&self) -> DefinitionKind {
    self.kind
  }

  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  /// Names of every macro this block defines, in emission order.
  pub fn macro_names(&self) -> Vec<&str> {
    self.lines.iter().filter_map(|l| l.strip_prefix("macro_rules! ")).filter_map(|l| l.strip_suffix(" {")).collect()
  }
}

impl core::fmt::Display for Definition {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for line in &self.lines {
      writeln!(f, "{line}")?;
    }
    Ok(())
  }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Render the bindings for one (arity, style) pair.
///
/// The free-function style yields three macros: `expand_serializable_N`, which
/// takes the function attribute explicitly, plus `make_serializable_N`
/// (`#[inline]`, for use next to the type) and `impl_serializable_N` (no
/// attribute, for use in a separate module). The member styles yield one macro
/// each. Rendering is pure: equal inputs give byte-identical output.
pub fn render(arity: Arity, style: Style, config: &Config) -> Definition {
  let archive = config.archive_tokens();
  let tokens = generator::Generator::new(arity, &archive).build(style);
  Definition::from_tokens(DefinitionKind::Binding { arity, style }, tokens)
}

/// Render one of the two arity-independent declaration-only forms.
pub fn render_declaration(decl: Declaration, config: &Config) -> Definition {
  let archive = config.archive_tokens();
  Definition::from_tokens(DefinitionKind::Declaration(decl), generator::declaration(decl, &archive))
}
