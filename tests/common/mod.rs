#![allow(dead_code)]

use std::collections::HashMap;

use proc_macro2::{Group, TokenStream, TokenTree};
use quote::ToTokens;

/// A single-arm `macro_rules!` definition split into its parts.
pub struct MacroRules {
  pub name: String,
  pub matcher: TokenStream,
  pub body: TokenStream,
}

/// Parse a rendered definition block back into its `macro_rules!` items.
pub fn macros(text: &str) -> Vec<MacroRules> {
  let file = syn::parse_file(text).unwrap_or_else(|e| panic!("definition does not parse: {e}\n{text}"));
  file
    .items
    .into_iter()
    .map(|item| match item {
      syn::Item::Macro(m) => {
        let name = m.ident.as_ref().expect("macro_rules! name").to_string();
        assert!(m.mac.path.is_ident("macro_rules"), "{name} is not a macro_rules! item");
        let (matcher, body) = single_arm(m.mac.tokens);
        MacroRules { name, matcher, body }
      }
      other => panic!("unexpected item: {}", other.to_token_stream()),
    })
    .collect()
}

fn single_arm(tokens: TokenStream) -> (TokenStream, TokenStream) {
  let tts: Vec<TokenTree> = tokens.into_iter().collect();
  match tts.as_slice() {
    [TokenTree::Group(m), TokenTree::Punct(eq), TokenTree::Punct(gt), TokenTree::Group(b), TokenTree::Punct(semi)]
      if eq.as_char() == '=' && gt.as_char() == '>' && semi.as_char() == ';' =>
    {
      (m.stream(), b.stream())
    }
    _ => panic!("expected a single `(..) => {{ .. }};` arm"),
  }
}

/// Metavariables referenced as `$name` anywhere in `tokens`.
pub fn metavars(tokens: &TokenStream) -> Vec<String> {
  let mut out = Vec::new();
  let mut prev_dollar = false;
  for tt in tokens.clone() {
    match &tt {
      TokenTree::Ident(id) if prev_dollar => out.push(id.to_string()),
      TokenTree::Group(g) => out.extend(metavars(&g.stream())),
      _ => {}
    }
    prev_dollar = matches!(&tt, TokenTree::Punct(p) if p.as_char() == '$');
  }
  out
}

/// Instantiate a macro body the way `macro_rules!` would: `$name` becomes its
/// binding, and a `$( .. )*` repetition expands once if all of its metavariables
/// are bound, otherwise zero times.
pub fn instantiate(body: TokenStream, bindings: &HashMap<&str, TokenStream>) -> TokenStream {
  let mut out = TokenStream::new();
  let mut iter = body.into_iter();
  while let Some(tt) = iter.next() {
    match tt {
      TokenTree::Punct(p) if p.as_char() == '$' => match iter.next() {
        Some(TokenTree::Ident(id)) => {
          let key = id.to_string();
          let bound = bindings.get(key.as_str()).unwrap_or_else(|| panic!("unbound metavariable ${key}"));
          out.extend(bound.clone());
        }
        Some(TokenTree::Group(rep)) => {
          let _op = iter.next();
          if metavars(&rep.stream()).iter().all(|v| bindings.contains_key(v.as_str())) {
            out.extend(instantiate(rep.stream(), bindings));
          }
        }
        other => panic!("unexpected token after `$`: {other:?}"),
      },
      TokenTree::Group(g) => {
        let mut group = Group::new(g.delimiter(), instantiate(g.stream(), bindings));
        group.set_span(g.span());
        out.extend([TokenTree::Group(group)]);
      }
      other => out.extend([other]),
    }
  }
  out
}

/// Bindings for `$crate` plus the given name/value pairs.
pub fn bind<'a>(pairs: &[(&'a str, &str)]) -> HashMap<&'a str, TokenStream> {
  let mut map: HashMap<&'a str, TokenStream> = HashMap::new();
  map.insert("crate", quote::quote!(crate));
  for (k, v) in pairs {
    map.insert(*k, v.parse().expect("binding tokens"));
  }
  map
}

/// Every `fieldK` index mentioned in `text`.
pub fn field_indices(text: &str) -> Vec<usize> {
  let mut out = Vec::new();
  let mut rest = text;
  while let Some(pos) = rest.find("field") {
    rest = &rest[pos + "field".len()..];
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if !digits.is_empty() {
      out.push(digits.parse().expect("field index"));
    }
  }
  out
}
