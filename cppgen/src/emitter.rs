//! Indentation-aware emitter for C-family source code.

use std::{borrow::Cow, path::Path};

use cppgen_core::{Indent, write_file};
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    scope::{BlockStyle, Scope, ScopeKind},
};

/// Builds C/C++ source text with automatic indentation.
///
/// Blocks and labels write their bodies into a buffer of their own, which is
/// spliced into the enclosing buffer when the scope closes. Indentation is
/// deferred: it is inserted right before the first write following a line
/// break, using the depth in effect at that moment.
///
/// # Example
///
/// ```
/// use cppgen::Emitter;
///
/// let mut emitter = Emitter::default();
/// emitter.include("stdio.h");
/// emitter.with_block("int main(void)", |e| {
///     e.write_code("printf(\"hi\\n\"); return 0;");
/// });
///
/// assert_eq!(
///     emitter.value().unwrap(),
///     "#include <stdio.h>\nint main(void) {\n    printf(\"hi\\n\");\n    return 0;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Emitter {
    /// Outermost buffer, receives everything once all scopes are closed.
    root: String,
    /// Buffers of open blocks and labels, innermost last.
    nested: Vec<String>,
    indent_level: usize,
    unit: Cow<'static, str>,
    /// Indent the next write because we are at the start of a line.
    indent_next: bool,
}

impl Emitter {
    /// Create a new emitter with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            root: String::new(),
            nested: Vec::new(),
            indent_level: 0,
            unit: indent.unit(),
            indent_next: false,
        }
    }

    /// Create a new emitter indenting with `width` spaces per level.
    pub fn with_width(width: u8) -> Self {
        Self::new(Indent::Spaces(width))
    }

    /// Get the current indentation level.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Indentation for the current level.
    pub fn indentation(&self) -> String {
        self.unit.repeat(self.indent_level)
    }

    /// Number of blocks and labels that are still open.
    pub fn open_scopes(&self) -> usize {
        self.nested.len()
    }

    // =========================================================================
    // Raw writes
    // =========================================================================

    /// Write text as-is, indenting it first if it starts a new line.
    ///
    /// Empty text is ignored.
    pub fn write(&mut self, code: &str) -> &mut Self {
        if code.is_empty() {
            return self;
        }

        let indentation = if self.indent_next {
            self.indentation()
        } else {
            String::new()
        };
        let buffer = self.top();
        buffer.push_str(&indentation);
        buffer.push_str(code);

        // A write that leaves us at the start of a line always requests an
        // indent. Otherwise non-blank text claims a pending indent, and a write
        // that found no pending indent requests one for the next write.
        let at_line_start = code
            .rfind('\n')
            .is_some_and(|pos| code[pos..].trim().is_empty());
        self.indent_next = if at_line_start {
            true
        } else if self.indent_next {
            code.trim().is_empty()
        } else {
            true
        };
        self
    }

    /// Write text followed by a newline.
    pub fn write_line(&mut self, code: &str) -> &mut Self {
        self.write(&format!("{code}\n"))
    }

    /// Write an empty line.
    pub fn blank_line(&mut self) -> &mut Self {
        self.write_line("")
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level, stopping at zero.
    pub fn pop_indent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    // =========================================================================
    // Statements and one-liners
    // =========================================================================

    /// Write one or more `;`-separated statements, one per line.
    ///
    /// Each statement gets its terminating `;`. Empty statements are skipped.
    /// A statement spanning several lines keeps its first line flush and
    /// indents the remaining lines one extra level.
    ///
    /// ```
    /// use cppgen::Emitter;
    ///
    /// let mut emitter = Emitter::default();
    /// emitter.write_code("int x = 1; int y = foo(\nx,\n2)");
    ///
    /// assert_eq!(
    ///     emitter.value().unwrap(),
    ///     "int x = 1;\nint y = foo(\n    x,\n    2);\n"
    /// );
    /// ```
    pub fn write_code(&mut self, statements: &str) -> &mut Self {
        for statement in statements.split(';').map(str::trim) {
            if !statement.is_empty() {
                self.write_statement(statement);
            }
        }
        self
    }

    fn write_statement(&mut self, statement: &str) {
        let lines = split_lines(statement);
        match lines.as_slice() {
            [] => {}
            [line] => {
                self.write_line(&format!("{line};"));
            }
            [first, middle @ .., last] => {
                self.write_line(first.trim());
                let mut hanging = self.indent();
                for line in middle {
                    hanging.write_line(line);
                }
                hanging.write_line(&format!("{last};"));
            }
        }
    }

    /// Write a `//` comment line.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.write_line(&format!("// {text}"))
    }

    /// Write a system include: `#include <header>`.
    pub fn include(&mut self, header: &str) -> &mut Self {
        self.write_line(&format!("#include <{header}>"))
    }

    /// Write a local include: `#include "header"`.
    pub fn include_local(&mut self, header: &str) -> &mut Self {
        self.write_line(&format!("#include \"{header}\""))
    }

    // =========================================================================
    // Scopes
    // =========================================================================

    /// Indent everything written through the returned guard by one level.
    pub fn indent(&mut self) -> Scope<'_> {
        self.push_indent();
        Scope::new(self, ScopeKind::Indent)
    }

    /// Open a `header {` ... `}` block with the body on its own lines.
    pub fn block(&mut self, header: &str) -> Scope<'_> {
        self.block_with(header, BlockStyle::default())
    }

    /// Open a `header {` ... `}` block.
    ///
    /// ```
    /// use cppgen::{BlockStyle, Emitter};
    ///
    /// let mut emitter = Emitter::default();
    /// {
    ///     let mut body = emitter.block_with("if (ok)", BlockStyle::BLOCK.without_newline());
    ///     body.write_code("return 0");
    /// }
    /// emitter.with_block("else", |e| {
    ///     e.write_code("return 1");
    /// });
    ///
    /// assert_eq!(
    ///     emitter.value().unwrap(),
    ///     "if (ok) {\n    return 0;\n} else {\n    return 1;\n}\n"
    /// );
    /// ```
    pub fn block_with(&mut self, header: &str, style: BlockStyle) -> Scope<'_> {
        self.write(&format!("{header} {{"));
        if style.inline {
            self.write(" ");
        } else {
            self.write("\n");
            self.push_indent();
        }
        self.nested.push(String::new());
        trace!(header, inline = style.inline, depth = self.nested.len(), "enter block");
        Scope::new(self, ScopeKind::Block(style))
    }

    /// Open a `name:` label whose body is indented one level.
    pub fn label(&mut self, name: &str) -> Scope<'_> {
        self.label_with_end(name, "")
    }

    /// Open a `name:` label; `end` is written as the last statement of its body.
    pub fn label_with_end(&mut self, name: &str, end: &str) -> Scope<'_> {
        self.write_line(&format!("{name}:"));
        self.nested.push(String::new());
        self.push_indent();
        trace!(label = name, depth = self.nested.len(), "enter label");
        Scope::new(
            self,
            ScopeKind::Label {
                end: end.to_string(),
            },
        )
    }

    /// Open a `case` body shared by one or more labels.
    ///
    /// An empty label list opens a `default:` label instead.
    ///
    /// ```
    /// use cppgen::Emitter;
    ///
    /// let mut emitter = Emitter::default();
    /// emitter.with_case(&["1", "2"], "break", |e| {
    ///     e.write_code("small()");
    /// });
    ///
    /// assert_eq!(
    ///     emitter.value().unwrap(),
    ///     "case 1:\ncase 2:\n    small();\n    break;\n"
    /// );
    /// ```
    pub fn case(&mut self, labels: &[&str], end: &str) -> Scope<'_> {
        let Some((last, rest)) = labels.split_last() else {
            return self.default_case(end);
        };
        for label in rest {
            self.write_line(&format!("case {label}:"));
        }
        self.label_with_end(&format!("case {last}"), end)
    }

    /// Open the `default:` label of a switch.
    pub fn default_case(&mut self, end: &str) -> Scope<'_> {
        self.label_with_end("default", end)
    }

    /// Run `f` one indent level deeper.
    pub fn with_indent<R>(&mut self, f: impl FnOnce(&mut Emitter) -> R) -> R {
        let mut scope = self.indent();
        f(&mut scope)
    }

    /// Run `f` inside a `header {` ... `}` block.
    pub fn with_block<R>(&mut self, header: &str, f: impl FnOnce(&mut Emitter) -> R) -> R {
        self.with_block_style(header, BlockStyle::default(), f)
    }

    /// Run `f` inside a block with the given style.
    pub fn with_block_style<R>(
        &mut self,
        header: &str,
        style: BlockStyle,
        f: impl FnOnce(&mut Emitter) -> R,
    ) -> R {
        let mut scope = self.block_with(header, style);
        f(&mut scope)
    }

    /// Run `f` inside a `name:` label.
    pub fn with_label<R>(
        &mut self,
        name: &str,
        end: &str,
        f: impl FnOnce(&mut Emitter) -> R,
    ) -> R {
        let mut scope = self.label_with_end(name, end);
        f(&mut scope)
    }

    /// Run `f` inside a `case` body.
    pub fn with_case<R>(
        &mut self,
        labels: &[&str],
        end: &str,
        f: impl FnOnce(&mut Emitter) -> R,
    ) -> R {
        let mut scope = self.case(labels, end);
        f(&mut scope)
    }

    pub(crate) fn close_block(&mut self, style: BlockStyle) {
        let body = self.nested.pop().unwrap_or_default();
        trace!(inline = style.inline, depth = self.nested.len(), "exit block");

        if style.inline {
            let body = body.split_whitespace().collect::<Vec<_>>().join(" ");
            let parent = self.top();
            parent.push_str(&body);
            if style.newline {
                parent.push_str(" }\n");
            } else {
                self.indent_next = false;
                self.top().push_str(" } ");
            }
        } else {
            self.pop_indent();
            self.top().push_str(&body);
            if style.newline {
                self.write_line("}");
            } else {
                self.write("} ");
                self.indent_next = false;
            }
        }
    }

    pub(crate) fn close_label(&mut self, end: &str) {
        if !end.is_empty() {
            self.write_code(end);
        }
        let body = self.nested.pop().unwrap_or_default();
        self.pop_indent();
        trace!(depth = self.nested.len(), "exit label");
        self.top().push_str(&body);
    }

    fn top(&mut self) -> &mut String {
        match self.nested.last_mut() {
            Some(buffer) => buffer,
            None => &mut self.root,
        }
    }

    // =========================================================================
    // Output
    // =========================================================================

    fn ensure_closed(&self) -> Result<()> {
        match self.nested.len() {
            0 => Ok(()),
            open => Err(Error::UnclosedScopes { open }),
        }
    }

    /// The emitted text. Fails if any scope is still open.
    pub fn value(&self) -> Result<&str> {
        self.ensure_closed()?;
        Ok(&self.root)
    }

    /// Consume the emitter and return the emitted text.
    pub fn into_value(self) -> Result<String> {
        self.ensure_closed()?;
        Ok(self.root)
    }

    /// Write the emitted text to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> eyre::Result<()> {
        let path = path.as_ref();
        let content = self.value()?;
        debug!(path = %path.display(), bytes = content.len(), "saving emitted source");
        write_file(path, content)
    }
}

const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Break `text` into physical lines.
///
/// Recognizes every Unicode line boundary (`\r\n` counts as one), and a
/// trailing break does not produce an empty last line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((pos, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }
        lines.push(&text[start..pos]);
        start = pos + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
