//! serialize-bindgen — `macro_rules!` bindings that make plain structs serializable
//!
//! Given a type with N ordered fields, the generated macros give it a "write to
//! message" operation and a "read from stream" operation that stops at the first
//! field that fails. The output is Rust source: a family of arity-indexed macros,
//! generated once and checked into the consuming crate.
//!
//! Binding styles (one definition block per arity and style)
//! - Free function: `make_serializable_N!(T, a, b, ..)` at module scope implements the archive
//!   `Serialize` and `Deserialize` traits for `T`. `impl_serializable_N!` does the same without
//!   `#[inline]`, for impls living in another module. Both forward to `expand_serializable_N!`,
//!   whose expansion ends with an unnamed `const _` that only compiles at module scope.
//! - Intrusive member: `make_me_serializable_N!(a, b, ..)` inside `impl T { .. }` adds
//!   `pub fn serialize(&self, ..)` and `pub fn deserialize(&mut self, ..)`.
//! - Out-of-line member: `impl_me_serializable_N!(T, a, b, ..)` implements the
//!   `MemberSerializable` trait for `T`, whose body is declared with `declare_me_serializable!()`.
//!
//! Fields are named the way field access spells them: `x` for a named field, `0` for a
//! tuple struct (`make_serializable_2!(Pixel, 0, 1)`).
//!
//! Declaration-only forms
//! - `declare_serializable!(T)` asserts that `T` has the free-function bindings.
//! - `declare_me_serializable!()` expands to the two member signatures.
//!
//! The archive protocol itself is not generated. Bindings refer to these items under
//! `$crate::archive` (configurable with [`Config::with_archive_path`]):
//! `WriteMessage` (with `append(&value)`), `ReadStream`, `ArchiveResult` (with a
//! `Success` variant), `deserialize(s, &mut out) -> ArchiveResult`, and the traits
//! `Serialize`, `Deserialize` and `MemberSerializable`.
//!
//! Example: render the two-field free-function bindings
//! ```
//! use serialize_bindgen::{Arity, Config, Style, render};
//!
//! let def = render(Arity::new(2), Style::FreeFunction, &Config::default());
//! assert_eq!(def.macro_names(), ["expand_serializable_2", "make_serializable_2", "impl_serializable_2"]);
//! assert!(def.to_string().contains("msg.append(&thing.$field1);"));
//! ```

mod document;
mod error;
mod render;

pub use document::{Document, definitions};
pub use error::Error;
pub use render::{
  Arity, Config, DEFAULT_MAX_ARITY, Declaration, Definition, DefinitionKind, FunctionAttr, Style, render,
  render_declaration,
};
