//! Host editor contracts
//!
//! The engine never draws anything itself: it hands decoration
//! instructions to an [`EditorSurface`] and receives opaque handles
//! back. Hover support is negotiated through a [`HoverRegistrar`];
//! hosts without hover support return a no-op registration.

use std::fmt;

/// Identity of an open editor surface (URI or file path)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceId(String);

impl SurfaceId {
    /// Create a surface identity
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to a host-applied decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecorationHandle(u64);

impl DecorationHandle {
    /// Wrap a host-chosen raw value
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value chosen by the host
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// A position in a text buffer (zero-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// A range in a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Zero-width range at the start of a line
    pub fn line_start(line: u32) -> Self {
        let position = Position { line, column: 0 };
        Self {
            start: position,
            end: position,
        }
    }

    /// Range covering an entire line
    pub fn full_line(line: u32) -> Self {
        Self {
            start: Position { line, column: 0 },
            end: Position {
                line,
                column: u32::MAX,
            },
        }
    }
}

/// A decoration instruction for the host editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    /// Anchor range (zero-width at column 0 for gutter annotations)
    pub range: Range,
    /// Space-separated class list: base style first, then modifiers
    pub classes: String,
}

impl Decoration {
    /// Check whether the class list contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.split(' ').any(|c| c == class)
    }

    /// The first (base) class of the list
    pub fn base_class(&self) -> &str {
        self.classes.split(' ').next().unwrap_or("")
    }
}

/// Hover payload returned to the host; empty means "nothing to show"
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hover {
    /// Markdown contents
    pub contents: String,
    /// Anchor range, if any
    pub range: Option<Range>,
}

impl Hover {
    /// The empty hover
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether there is anything to show
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Editor surface collaborator
///
/// Decoration replacement is atomic: one call removes the old handles
/// and applies the new decorations, so old and new are never visible
/// together.
pub trait EditorSurface {
    /// Identity of this surface
    fn id(&self) -> &SurfaceId;

    /// Replace `old` decorations with `new`, returning handles for `new`
    fn apply_decorations(
        &mut self,
        old: Vec<DecorationHandle>,
        new: &[Decoration],
    ) -> Vec<DecorationHandle>;
}

/// Disposable hover registration
///
/// Holds the host-side cleanup for a registered hover capability.
/// Disposal runs the cleanup at most once.
pub struct HoverRegistration(Option<Box<dyn FnOnce()>>);

impl HoverRegistration {
    /// Registration with a cleanup action
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(dispose)))
    }

    /// No-op registration for hosts without hover support
    pub fn none() -> Self {
        Self(None)
    }

    /// Run the cleanup action, if any
    pub fn dispose(mut self) {
        if let Some(dispose) = self.0.take() {
            dispose();
        }
    }
}

impl fmt::Debug for HoverRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HoverRegistration")
            .field(&self.0.is_some())
            .finish()
    }
}

/// Hover capability collaborator
pub trait HoverRegistrar {
    /// Register hover resolution for a surface
    ///
    /// The returned registration is disposed when the surface's session
    /// is torn down.
    fn register(&mut self, surface: &SurfaceId) -> HoverRegistration;
}

/// Registrar for hosts without hover support
#[derive(Debug, Default)]
pub struct NoHover;

impl HoverRegistrar for NoHover {
    fn register(&mut self, _surface: &SurfaceId) -> HoverRegistration {
        HoverRegistration::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoration_class_queries() {
        let decoration = Decoration {
            range: Range::line_start(3),
            classes: "blame-abc1234 blame-highlight".to_string(),
        };
        assert_eq!(decoration.base_class(), "blame-abc1234");
        assert!(decoration.has_class("blame-highlight"));
        assert!(!decoration.has_class("blame-abc"));
    }

    #[test]
    fn test_ranges() {
        let zero = Range::line_start(5);
        assert_eq!(zero.start, zero.end);
        assert_eq!(zero.start.line, 5);

        let full = Range::full_line(5);
        assert_eq!(full.start.column, 0);
        assert_eq!(full.end.column, u32::MAX);
    }

    #[test]
    fn test_hover_registration_dispose_runs_once() {
        use std::cell::Cell;
        use std::rc::Rc;

        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let registration = HoverRegistration::new(move || counter.set(counter.get() + 1));
        registration.dispose();
        assert_eq!(count.get(), 1);

        // The no-op registration disposes silently
        HoverRegistration::none().dispose();
    }
}
