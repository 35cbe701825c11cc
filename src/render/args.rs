use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};

use crate::Error;

/// Default exclusive upper bound on generated arities (fields 0..=19).
pub const DEFAULT_MAX_ARITY: usize = 20;

/// Shape of the generated bindings for one arity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Style {
  /// Trait impls written at module scope next to the type.
  FreeFunction,
  /// Inherent methods written inside the type's own `impl` block.
  IntrusiveMember,
  /// Trait impl written out of line, pairing with `declare_me_serializable!`.
  OutOfLineMember,
}

impl Style {
  /// Emission order used by the arity driver.
  pub const ALL: [Style; 3] = [Style::FreeFunction, Style::IntrusiveMember, Style::OutOfLineMember];

  /// Name of the primary macro this style defines for `arity`.
  pub fn macro_name(self, arity: usize) -> String {
    match self {
      Style::FreeFunction => format!("expand_serializable_{arity}"),
      Style::IntrusiveMember => format!("make_me_serializable_{arity}"),
      Style::OutOfLineMember => format!("impl_me_serializable_{arity}"),
    }
  }
}

/// The arity-independent, declaration-only forms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Declaration {
  /// `declare_serializable!(T)`: asserts the free-function bindings exist elsewhere.
  Serializable,
  /// `declare_me_serializable!()`: the member signatures, for a trait body.
  MeSerializable,
}

impl Declaration {
  pub const ALL: [Declaration; 2] = [Declaration::Serializable, Declaration::MeSerializable];

  pub fn macro_name(self) -> &'static str {
    match self {
      Declaration::Serializable => "declare_serializable",
      Declaration::MeSerializable => "declare_me_serializable",
    }
  }
}

/// Qualifier threaded into the free-function items.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FunctionAttr {
  Inline,
  Plain,
}

impl FunctionAttr {
  pub(super) fn tokens(self) -> TokenStream2 {
    match self {
      FunctionAttr::Inline => quote!(#[inline]),
      FunctionAttr::Plain => quote!(),
    }
  }
}

/// Generation settings. `Default` reproduces the fixed configuration.
#[derive(Clone, Debug)]
pub struct Config {
  max_arity: usize,
  archive_path: Option<syn::Path>,
}

impl Default for Config {
  fn default() -> Self {
    Self { max_arity: DEFAULT_MAX_ARITY, archive_path: None }
  }
}

impl Config {
  /// Set the exclusive arity bound; arities `0..max_arity` are generated.
  pub fn with_max_arity(mut self, max_arity: usize) -> Result<Self, Error> {
    if max_arity == 0 {
      return Err(Error::EmptyArityRange(max_arity));
    }
    self.max_arity = max_arity;
    Ok(self)
  }

  /// Set the module path holding the archive protocol items, e.g. `::wire::archive`.
  pub fn with_archive_path(mut self, path: &str) -> Result<Self, Error> {
    let parsed = syn::parse_str::<syn::Path>(path)
      .map_err(|source| Error::InvalidArchivePath { path: path.to_string(), source })?;
    self.archive_path = Some(parsed);
    Ok(self)
  }

  pub fn max_arity(&self) -> usize {
    self.max_arity
  }

  // `$crate::archive` unless overridden; `$crate` cannot be expressed as a `syn::Path`.
  pub(super) fn archive_tokens(&self) -> TokenStream2 {
    match &self.archive_path {
      Some(path) => path.to_token_stream(),
      None => quote!($crate::archive),
    }
  }
}
