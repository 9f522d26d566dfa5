//! Indentation configuration for emitted code.

use std::borrow::Cow;

/// Indentation unit repeated once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the emitter default.
    pub const CPP: Self = Self::Spaces(4);

    /// 2-space indentation (GNU style).
    pub const GNU: Self = Self::Spaces(2);

    /// Tab indentation (Linux kernel style).
    pub const TAB: Self = Self::Tab;

    /// String for one indent level.
    pub fn unit(&self) -> Cow<'static, str> {
        match self {
            Self::Spaces(2) => Cow::Borrowed("  "),
            Self::Spaces(4) => Cow::Borrowed("    "),
            Self::Spaces(8) => Cow::Borrowed("        "),
            Self::Spaces(n) => Cow::Owned(" ".repeat(usize::from(*n))),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CPP
    }
}
