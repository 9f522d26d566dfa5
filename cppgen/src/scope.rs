//! Scope guards that restore emitter state when they go out of scope.

use std::ops::{Deref, DerefMut};

use crate::Emitter;

/// Formatting options for [`Emitter::block_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStyle {
    /// Flatten the body onto the header line (`struct s { int a; int b; }`).
    pub inline: bool,
    /// End the closing brace with a newline. When false the brace is followed
    /// by a space so the caller can continue the line (`} else {`, `} while (x);`).
    pub newline: bool,
}

impl BlockStyle {
    /// Body on its own indented lines, closing brace on its own line.
    pub const BLOCK: Self = Self {
        inline: false,
        newline: true,
    };

    /// Body flattened onto the header line.
    pub const INLINE: Self = Self {
        inline: true,
        newline: true,
    };

    /// Keep the line open after the closing brace.
    pub fn without_newline(self) -> Self {
        Self {
            newline: false,
            ..self
        }
    }
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self::BLOCK
    }
}

#[derive(Debug)]
pub(crate) enum ScopeKind {
    Indent,
    Block(BlockStyle),
    Label { end: String },
}

/// An open scope on an [`Emitter`].
///
/// Writes go through the guard (it dereferences to the emitter) and land in
/// the scope's own buffer. Dropping the guard closes the scope: the buffer is
/// spliced into the parent, the indent level is restored and any closing
/// punctuation is written. This also happens while unwinding from a panic.
#[must_use = "the scope closes as soon as the guard is dropped"]
#[derive(Debug)]
pub struct Scope<'a> {
    emitter: &'a mut Emitter,
    kind: ScopeKind,
    /// Number of nested buffers right after this scope was entered.
    depth: usize,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(emitter: &'a mut Emitter, kind: ScopeKind) -> Self {
        let depth = emitter.open_scopes();
        Self {
            emitter,
            kind,
            depth,
        }
    }
}

impl Deref for Scope<'_> {
    type Target = Emitter;

    fn deref(&self) -> &Emitter {
        self.emitter
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Emitter {
        self.emitter
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        if let ScopeKind::Indent = self.kind {
            self.emitter.pop_indent();
            return;
        }

        let open = self.emitter.open_scopes();
        if open != self.depth {
            if std::thread::panicking() {
                tracing::error!(
                    expected = self.depth,
                    open,
                    "scope buffer is not on top of the stack, skipping splice"
                );
                return;
            }
            panic!(
                "scope closed with {open} open buffer(s), expected {}: an inner scope guard was leaked",
                self.depth
            );
        }

        match &mut self.kind {
            ScopeKind::Indent => {}
            ScopeKind::Block(style) => self.emitter.close_block(*style),
            ScopeKind::Label { end } => {
                let end = std::mem::take(end);
                self.emitter.close_label(&end);
            }
        }
    }
}
