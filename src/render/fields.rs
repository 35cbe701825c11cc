use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};

/// Number of ordered fields a target type exposes to the bindings.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Arity(usize);

impl Arity {
  pub const fn new(n: usize) -> Self {
    Self(n)
  }

  pub const fn get(self) -> usize {
    self.0
  }

  /// Zero-arity bindings touch none of their parameters.
  pub const fn is_zero(self) -> bool {
    self.0 == 0
  }

  /// Macro parameter names `field1..fieldN`, in declaration order.
  pub(super) fn idents(self) -> Vec<Ident> {
    (1..=self.0).map(|i| format_ident!("field{}", i, span = Span::call_site())).collect()
  }

  // `$field1:tt, $field2:tt, ...`; a token tree binds named fields and tuple indices alike.
  pub(super) fn matchers(self) -> Vec<TokenStream2> {
    self.idents().into_iter().map(|f| quote!($#f:tt)).collect()
  }

  // Marks a parameter as deliberately unused when there is nothing to touch it.
  pub(super) fn unused_marker(self) -> TokenStream2 {
    if self.is_zero() { quote!(#[allow(unused_variables)]) } else { quote!() }
  }
}

impl core::fmt::Display for Arity {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.0)
  }
}
