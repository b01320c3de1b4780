//! Brace-scoped text emission.
//!
//! [`ScopeEmitter`] tracks how many `{` scopes are open and renders leading
//! indentation from that depth. Backends hold one emitter per output file and
//! interleave its scope calls with their own writes to the same sink.

use crate::config::EmitConfig;
use crate::error::{EmitError, EmitResult};
use log::{error, trace};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Text used for one level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    Spaces(usize),
    Tabs,
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(2)
    }
}

impl IndentStyle {
    pub fn unit(self) -> String {
        match self {
            IndentStyle::Spaces(width) => " ".repeat(width),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }

    pub fn render(self, depth: usize) -> String {
        self.unit().repeat(depth)
    }
}

#[derive(Debug, Default)]
pub struct ScopeEmitter {
    depth: usize,
    indent: IndentStyle,
}

impl ScopeEmitter {
    pub fn new(indent: IndentStyle) -> Self {
        Self { depth: 0, indent }
    }

    pub fn from_config(config: &EmitConfig) -> Self {
        Self::new(config.indent)
    }

    /// Number of scopes currently open.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn indent_style(&self) -> IndentStyle {
        self.indent
    }

    /// Leading whitespace for a line at the current depth.
    pub fn indent_str(&self) -> String {
        self.indent.render(self.depth)
    }

    /// Writes only the indentation; the caller finishes the line.
    pub fn indent<W: Write + ?Sized>(&self, out: &mut W) -> EmitResult<()> {
        out.write_all(self.indent_str().as_bytes())?;
        Ok(())
    }

    /// Writes `text` as a full line at the current depth.
    ///
    /// An empty `text` produces a bare newline without trailing whitespace.
    pub fn line<W: Write + ?Sized>(&self, out: &mut W, text: &str) -> EmitResult<()> {
        if !text.is_empty() {
            self.indent(out)?;
            out.write_all(text.as_bytes())?;
        }
        out.write_all(b"\n")?;
        Ok(())
    }

    /// Writes `{` at the current depth, then nests one level deeper.
    pub fn open_scope<W: Write + ?Sized>(&mut self, out: &mut W) -> EmitResult<()> {
        self.line(out, "{")?;
        self.depth += 1;
        trace!("opened scope, depth {}", self.depth);
        Ok(())
    }

    /// Like [`open_scope`](Self::open_scope) but with the brace trailing
    /// `head` on the same line, e.g. `class Foo {`.
    pub fn open_scope_with<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        head: &str,
    ) -> EmitResult<()> {
        if head.is_empty() {
            return self.open_scope(out);
        }

        self.line(out, &format!("{head} {{"))?;
        self.depth += 1;
        trace!("opened scope `{head}`, depth {}", self.depth);
        Ok(())
    }

    /// Steps out one level and writes `}` (or `};` when `terminate` is set).
    ///
    /// Closing with no open scope is an error; nothing is written and the
    /// depth stays at zero.
    pub fn close_scope<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        terminate: bool,
    ) -> EmitResult<()> {
        let Some(depth) = self.depth.checked_sub(1) else {
            error!("close_scope called with no open scope");
            return Err(EmitError::ScopeUnderflow);
        };

        self.depth = depth;
        self.line(out, if terminate { "};" } else { "}" })?;
        trace!("closed scope, depth {}", self.depth);
        Ok(())
    }

    /// Emits `body` inside a fresh scope.
    ///
    /// If `body` fails the scope is left open and the error is returned as is.
    pub fn with_scope<W, T, F>(&mut self, out: &mut W, terminate: bool, body: F) -> EmitResult<T>
    where
        W: Write + ?Sized,
        F: FnOnce(&mut Self, &mut W) -> EmitResult<T>,
    {
        self.open_scope(out)?;
        let value = body(self, out)?;
        self.close_scope(out, terminate)?;
        Ok(value)
    }

    /// Ends the session, failing if any scope is still open.
    pub fn finish(self) -> EmitResult<()> {
        match self.depth {
            0 => Ok(()),
            depth => Err(EmitError::UnclosedScopes { depth }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::OutputBuffer;
    use pretty_assertions::assert_eq;

    fn emitter() -> (ScopeEmitter, OutputBuffer) {
        (ScopeEmitter::default(), OutputBuffer::new())
    }

    #[test]
    fn nested_scopes_with_terminator() {
        let (mut e, mut out) = emitter();

        e.open_scope(&mut out).unwrap();
        e.line(&mut out, "x").unwrap();
        e.open_scope(&mut out).unwrap();
        e.line(&mut out, "y").unwrap();
        e.close_scope(&mut out, true).unwrap();
        e.close_scope(&mut out, false).unwrap();

        assert_eq!(out.as_str(), "{\n  x\n  {\n    y\n  };\n}\n");
        assert_eq!(e.depth(), 0);
    }

    #[test]
    fn close_at_depth_zero_is_rejected() {
        let (mut e, mut out) = emitter();

        let err = e.close_scope(&mut out, false).unwrap_err();

        assert!(matches!(err, EmitError::ScopeUnderflow));
        assert!(err.is_invariant_violation());
        assert_eq!(e.depth(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn underflow_after_balanced_pair() {
        let (mut e, mut out) = emitter();
        e.open_scope(&mut out).unwrap();
        e.close_scope(&mut out, false).unwrap();

        assert!(e.close_scope(&mut out, false).is_err());
        assert_eq!(out.as_str(), "{\n}\n");
    }

    #[test]
    fn open_scope_with_head() {
        let (mut e, mut out) = emitter();

        e.open_scope_with(&mut out, "class Foo").unwrap();
        e.open_scope_with(&mut out, "void bar()").unwrap();
        e.line(&mut out, "return;").unwrap();
        e.close_scope(&mut out, false).unwrap();
        e.close_scope(&mut out, true).unwrap();

        assert_eq!(
            out.as_str(),
            "class Foo {\n  void bar() {\n    return;\n  }\n};\n"
        );
    }

    #[test]
    fn open_scope_with_empty_head_is_plain_brace() {
        let (mut e, mut out) = emitter();
        e.open_scope_with(&mut out, "").unwrap();
        assert_eq!(out.as_str(), "{\n");
        assert_eq!(e.depth(), 1);
    }

    #[test]
    fn tabs_indent() {
        let mut e = ScopeEmitter::new(IndentStyle::Tabs);
        let mut out = OutputBuffer::new();

        e.open_scope(&mut out).unwrap();
        e.open_scope(&mut out).unwrap();
        e.line(&mut out, "z").unwrap();

        assert_eq!(out.as_str(), "{\n\t{\n\t\tz\n");
        assert_eq!(e.indent_str(), "\t\t");
    }

    #[test]
    fn wide_spaces_indent() {
        let mut e = ScopeEmitter::new(IndentStyle::Spaces(4));
        let mut out = OutputBuffer::new();

        e.open_scope(&mut out).unwrap();
        e.line(&mut out, "a").unwrap();

        assert_eq!(out.as_str(), "{\n    a\n");
    }

    #[test]
    fn empty_line_has_no_trailing_whitespace() {
        let (mut e, mut out) = emitter();
        e.open_scope(&mut out).unwrap();
        e.line(&mut out, "").unwrap();
        assert_eq!(out.as_str(), "{\n\n");
    }

    #[test]
    fn indent_leaves_line_open() {
        let (mut e, mut out) = emitter();
        e.open_scope(&mut out).unwrap();
        e.indent(&mut out).unwrap();
        write!(out, "int x = {};", 3).unwrap();
        assert_eq!(out.as_str(), "{\n  int x = 3;");
    }

    #[test]
    fn with_scope_balances() {
        let (mut e, mut out) = emitter();

        let n = e
            .with_scope(&mut out, true, |e, out| {
                e.line(out, "a = 1,")?;
                e.with_scope(out, false, |e, out| e.line(out, "b"))?;
                Ok(7)
            })
            .unwrap();

        assert_eq!(n, 7);
        assert_eq!(out.as_str(), "{\n  a = 1,\n  {\n    b\n  }\n};\n");
        assert!(e.finish().is_ok());
    }

    #[test]
    fn with_scope_keeps_scope_open_on_error() {
        let (mut e, mut out) = emitter();

        let result: EmitResult<()> = e.with_scope(&mut out, false, |_, _| {
            Err(EmitError::Io(std::io::Error::other("sink closed")))
        });

        assert!(matches!(result, Err(EmitError::Io(_))));
        assert_eq!(e.depth(), 1);
        assert_eq!(out.as_str(), "{\n");
    }

    #[test]
    fn finish_reports_open_scopes() {
        let (mut e, mut out) = emitter();
        e.open_scope(&mut out).unwrap();
        e.open_scope(&mut out).unwrap();

        let err = e.finish().unwrap_err();

        assert!(matches!(err, EmitError::UnclosedScopes { depth: 2 }));
        assert_eq!(err.to_string(), "2 scope(s) left open at end of emission");
    }

    #[test]
    fn from_config_uses_configured_indent() {
        let config = EmitConfig { indent: IndentStyle::Spaces(3), ..EmitConfig::default() };
        let e = ScopeEmitter::from_config(&config);
        assert_eq!(e.indent_style(), IndentStyle::Spaces(3));
        assert_eq!(e.depth(), 0);
    }
}
