use crate::render::args::{Declaration, FunctionAttr, Style};
use crate::render::fields::Arity;

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};

// Unnamed consts are module-scope only; this one rejects the free-function form inside an impl body.
const MISUSE_GUARD: &str = "dont_use_expand_serializable_within_an_impl_block";

pub(crate) struct Generator<'a> {
  arity: Arity,
  archive: &'a TokenStream,
}

impl<'a> Generator<'a> {
  pub(super) fn new(arity: Arity, archive: &'a TokenStream) -> Self {
    Self { arity, archive }
  }

  // One read step per field, each immediately followed by its short-circuit check.
  fn read_steps(&self, owner: &TokenStream) -> Vec<TokenStream> {
    let archive = self.archive;
    self
      .arity
      .idents()
      .into_iter()
      .map(|f| {
        quote! {
          let res = #archive::deserialize(s, &mut #owner.$#f);
          if !matches!(res, #archive::ArchiveResult::Success) {
            return res;
          }
        }
      })
      .collect()
  }

  fn appends(&self, owner: &TokenStream) -> Vec<TokenStream> {
    self.arity.idents().into_iter().map(|f| quote! { msg.append(&#owner.$#f); }).collect()
  }

  // `serialize`/`deserialize` over `self`, optionally prefixed with a visibility grant.
  fn member_fns(&self, grant: TokenStream) -> TokenStream {
    let archive = self.archive;
    let unused = self.arity.unused_marker();
    let owner = quote!(self);
    let appends = self.appends(&owner);
    let reads = self.read_steps(&owner);
    quote! {
      #grant fn serialize(&self, #unused msg: &mut #archive::WriteMessage) {
        #( #appends )*
      }
      #grant fn deserialize(&mut self, #unused s: &mut #archive::ReadStream) -> #archive::ArchiveResult {
        #( #reads )*
        #archive::ArchiveResult::Success
      }
    }
  }

  fn free_function(&self) -> TokenStream {
    let n = self.arity.get();
    let archive = self.archive;
    let unused = self.arity.unused_marker();
    let expand = Ident::new(&Style::FreeFunction.macro_name(n), Span::call_site());
    let fields = self.arity.matchers();
    let owner = quote!(thing);
    let appends = self.appends(&owner);
    let reads = self.read_steps(&owner);

    let mut out = quote! {
      #[macro_export]
      macro_rules! #expand {
        ($(#[$function_attr:meta])* $type_t:ty #( , #fields )*) => {
          impl #archive::Serialize for $type_t {
            $(#[$function_attr])*
            fn write_message<'a>(#unused msg: &'a mut #archive::WriteMessage, #unused thing: &Self) -> &'a mut #archive::WriteMessage {
              #( #appends )*
              msg
            }
          }
          impl #archive::Deserialize for $type_t {
            $(#[$function_attr])*
            fn deserialize(#unused s: &mut #archive::ReadStream, #unused thing: &mut Self) -> #archive::ArchiveResult {
              #( #reads )*
              #archive::ArchiveResult::Success
            }
          }
          const _: &str = #MISUSE_GUARD;
        };
      }
    };
    out.extend(self.forward(&format_ident!("make_serializable_{}", n), &expand, FunctionAttr::Inline));
    out.extend(self.forward(&format_ident!("impl_serializable_{}", n), &expand, FunctionAttr::Plain));
    out
  }

  // A definition that fixes the qualifier and hands everything else to `target`.
  fn forward(&self, name: &Ident, target: &Ident, attr: FunctionAttr) -> TokenStream {
    let attr = attr.tokens();
    quote! {
      #[macro_export]
      macro_rules! #name {
        ($($args:tt)*) => {
          $crate::#target!(#attr $($args)*);
        };
      }
    }
  }

  fn intrusive_member(&self) -> TokenStream {
    let name = Ident::new(&Style::IntrusiveMember.macro_name(self.arity.get()), Span::call_site());
    let fields = self.arity.matchers();
    let body = self.member_fns(quote!(pub));
    quote! {
      #[macro_export]
      macro_rules! #name {
        (#( #fields ),*) => {
          #body
        };
      }
    }
  }

  fn out_of_line_member(&self) -> TokenStream {
    let archive = self.archive;
    let name = Ident::new(&Style::OutOfLineMember.macro_name(self.arity.get()), Span::call_site());
    let fields = self.arity.matchers();
    let body = self.member_fns(quote!());
    quote! {
      #[macro_export]
      macro_rules! #name {
        ($typ:ty #( , #fields )*) => {
          impl #archive::MemberSerializable for $typ {
            #body
          }
        };
      }
    }
  }

  pub(super) fn build(&self, style: Style) -> TokenStream {
    match style {
      Style::FreeFunction => self.free_function(),
      Style::IntrusiveMember => self.intrusive_member(),
      Style::OutOfLineMember => self.out_of_line_member(),
    }
  }
}

pub(super) fn declaration(decl: Declaration, archive: &TokenStream) -> TokenStream {
  let name = Ident::new(decl.macro_name(), Span::call_site());
  match decl {
    Declaration::Serializable => quote! {
      #[macro_export]
      macro_rules! #name {
        ($type_t:ty) => {
          const _: fn() = || {
            fn assert_serializable<T: ?Sized + #archive::Serialize + #archive::Deserialize>() {}
            assert_serializable::<$type_t>();
          };
        };
      }
    },
    Declaration::MeSerializable => quote! {
      #[macro_export]
      macro_rules! #name {
        () => {
          fn serialize(&self, msg: &mut #archive::WriteMessage);
          fn deserialize(&mut self, s: &mut #archive::ReadStream) -> #archive::ArchiveResult;
        };
      }
    },
  }
}
