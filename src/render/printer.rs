//! Line layout for generated token streams.
//!
//! `TokenStream::to_string()` puts a whole definition on one line with a space
//! between every token. This printer walks the token tree instead:
//! - Brace groups open on the current line and close on their own line, one
//!   level of indentation per nesting depth.
//! - `;` ends a line; so does an outer attribute written at the start of a line.
//! - Inside parenthesized and bracketed groups everything stays on one line.
//! - Spacing follows rustfmt conventions for the handful of constructs the
//!   generator emits (paths, generics, lifetimes, `$name:frag` matchers, macro
//!   calls, references).

use proc_macro2::{Delimiter, Spacing, TokenStream, TokenTree};

const INDENT: &str = "    ";

// Identifiers after which `!` is a unary operator rather than a macro bang.
const KEYWORDS: &[&str] = &["if", "return", "let", "match", "while", "in", "mut", "impl", "for", "as", "where", "dyn"];

// Most recent token on the current line, reduced to what spacing decisions need.
#[derive(Copy, Clone, Debug)]
enum Tok {
  Ident { keyword: bool, after_dollar: bool },
  Literal,
  // `glued`: nothing may follow with a space (second colon of `::`, fragment colon, unary `!`).
  Punct { ch: char, joint: bool, glued: bool },
  Open,
  Close,
}

#[derive(Copy, Clone, Debug)]
enum Next {
  Ident,
  Literal,
  Punct(char),
  Group(Delimiter),
}

pub(super) struct Printer {
  lines: Vec<String>,
  line: String,
  depth: usize,
  // Nesting of `(..)`/`[..]` groups; line breaks are suppressed while > 0.
  inline: usize,
  last: Option<Tok>,
  // An outer attribute started this line and ends it once its brackets close.
  attr_line: bool,
  // A block just closed; the next token starts a new line unless it is `;` or `,`.
  after_block: bool,
}

impl Printer {
  pub(super) fn new() -> Self {
    Self { lines: Vec::new(), line: String::new(), depth: 0, inline: 0, last: None, attr_line: false, after_block: false }
  }

  pub(super) fn print(mut self, tokens: TokenStream) -> Vec<String> {
    self.stream(tokens);
    self.end_line();
    self.lines
  }

  fn end_line(&mut self) {
    if !self.line.trim().is_empty() {
      let mut out = INDENT.repeat(self.depth);
      out.push_str(self.line.trim_end());
      self.lines.push(out);
    }
    self.line.clear();
    self.last = None;
    self.attr_line = false;
  }

  fn gap(&self, next: Next) -> bool {
    let Some(last) = self.last else { return false };
    match last {
      Tok::Open => return false,
      Tok::Punct { joint: true, .. } | Tok::Punct { glued: true, .. } => return false,
      Tok::Punct { ch: '$' | '#' | '&' | '.' | '\'' | '<' | '?', .. } => return false,
      _ => {}
    }
    match next {
      Next::Punct(',' | ';' | '.' | '>') => false,
      Next::Punct(':') => !matches!(last, Tok::Ident { keyword: false, .. } | Tok::Close),
      Next::Punct('!' | '<') => !matches!(last, Tok::Ident { keyword: false, .. }),
      Next::Punct('*') => !matches!(last, Tok::Close),
      Next::Group(Delimiter::Parenthesis) => {
        !matches!(last, Tok::Ident { .. } | Tok::Punct { ch: '!' | '>', .. })
      }
      Next::Group(Delimiter::Bracket) => !matches!(last, Tok::Ident { .. }),
      _ => true,
    }
  }

  fn push(&mut self, next: Next, text: &str) {
    if self.after_block {
      self.after_block = false;
      if !matches!(next, Next::Punct(';' | ',')) {
        self.end_line();
      }
    }
    if self.gap(next) {
      self.line.push(' ');
    }
    self.line.push_str(text);
  }

  fn stream(&mut self, tokens: TokenStream) {
    for tt in tokens {
      match tt {
        TokenTree::Ident(ident) => {
          let text = ident.to_string();
          let after_dollar = matches!(self.last, Some(Tok::Punct { ch: '$', .. }));
          self.push(Next::Ident, &text);
          self.last = Some(Tok::Ident { keyword: KEYWORDS.contains(&text.as_str()), after_dollar });
        }
        TokenTree::Literal(lit) => {
          self.push(Next::Literal, &lit.to_string());
          self.last = Some(Tok::Literal);
        }
        TokenTree::Punct(p) => self.punct(p.as_char(), p.spacing() == Spacing::Joint),
        TokenTree::Group(g) => self.group(g.delimiter(), g.stream()),
      }
    }
  }

  fn punct(&mut self, ch: char, joint: bool) {
    let glued = match (ch, self.last) {
      (':', Some(Tok::Punct { ch: ':', joint: true, .. })) => true,
      (':', Some(Tok::Ident { after_dollar: true, .. })) => true,
      ('!', last) => !matches!(last, Some(Tok::Ident { keyword: false, .. })),
      _ => false,
    };
    let mut buf = [0u8; 4];
    self.push(Next::Punct(ch), ch.encode_utf8(&mut buf));
    self.last = Some(Tok::Punct { ch, joint, glued });
    let starts_line = self.line.trim() == "#";

    if self.inline > 0 {
      return;
    }
    match ch {
      ';' => self.end_line(),
      '#' if starts_line => self.attr_line = true,
      // `$(#[$attr])*` forwards attributes onto the item below it.
      '*' if self.line.trim_start().starts_with("$(#") => self.end_line(),
      _ => {}
    }
  }

  fn group(&mut self, delim: Delimiter, inner: TokenStream) {
    let (open, close) = match delim {
      Delimiter::Parenthesis => ('(', ')'),
      Delimiter::Bracket => ('[', ']'),
      Delimiter::Brace => ('{', '}'),
      Delimiter::None => {
        self.stream(inner);
        return;
      }
    };

    if delim == Delimiter::Brace && self.inline == 0 {
      self.block(inner);
      return;
    }

    let mut buf = [0u8; 4];
    self.push(Next::Group(delim), open.encode_utf8(&mut buf));
    self.last = Some(Tok::Open);
    self.inline += 1;
    let padded = delim == Delimiter::Brace && !inner.is_empty();
    if padded {
      self.line.push(' ');
    }
    self.stream(inner);
    if padded {
      self.line.push(' ');
    }
    self.inline -= 1;
    self.line.push(close);
    self.last = Some(Tok::Close);

    if delim == Delimiter::Bracket && self.attr_line && self.inline == 0 {
      self.end_line();
    }
  }

  fn block(&mut self, inner: TokenStream) {
    self.push(Next::Group(Delimiter::Brace), "{");
    if inner.is_empty() {
      self.line.push('}');
    } else {
      self.end_line();
      self.depth += 1;
      self.stream(inner);
      self.after_block = false;
      self.end_line();
      self.depth -= 1;
      self.line.push('}');
    }
    self.last = Some(Tok::Close);
    self.after_block = true;
  }
}
