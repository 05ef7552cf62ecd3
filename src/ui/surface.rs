//! Terminal-backed editor surface
//!
//! Keeps the decorations the engine has applied so the gutter view can
//! render them. Handles are plain counters; replacement removes the old
//! handle set and records the new decorations in one call, so the view
//! never sees a mixed state.

use crate::engine::host::{Decoration, DecorationHandle, EditorSurface, SurfaceId};

/// An editor surface that records applied decorations
#[derive(Debug)]
pub struct TerminalSurface {
    id: SurfaceId,
    next_handle: u64,
    decorations: Vec<(DecorationHandle, Decoration)>,
}

impl TerminalSurface {
    /// Create a surface for a file identity
    pub fn new(id: SurfaceId) -> Self {
        Self {
            id,
            next_handle: 0,
            decorations: Vec::new(),
        }
    }

    /// The decoration applied at a line, if any
    pub fn decoration_at(&self, line: u32) -> Option<&Decoration> {
        self.decorations
            .iter()
            .find(|(_, decoration)| decoration.range.start.line == line)
            .map(|(_, decoration)| decoration)
    }

    /// Number of currently applied decorations
    pub fn decoration_count(&self) -> usize {
        self.decorations.len()
    }
}

impl EditorSurface for TerminalSurface {
    fn id(&self) -> &SurfaceId {
        &self.id
    }

    fn apply_decorations(
        &mut self,
        old: Vec<DecorationHandle>,
        new: &[Decoration],
    ) -> Vec<DecorationHandle> {
        self.decorations.retain(|(handle, _)| !old.contains(handle));
        let mut handles = Vec::with_capacity(new.len());
        for decoration in new {
            self.next_handle += 1;
            let handle = DecorationHandle::new(self.next_handle);
            self.decorations.push((handle, decoration.clone()));
            handles.push(handle);
        }
        handles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::host::Range;

    fn decoration(line: u32, classes: &str) -> Decoration {
        Decoration {
            range: Range::line_start(line),
            classes: classes.to_string(),
        }
    }

    #[test]
    fn test_apply_and_replace() {
        let mut surface = TerminalSurface::new(SurfaceId::new("file.rs"));

        let first = surface.apply_decorations(Vec::new(), &[decoration(0, "a"), decoration(1, "b")]);
        assert_eq!(first.len(), 2);
        assert_eq!(surface.decoration_count(), 2);
        assert_eq!(surface.decoration_at(0).unwrap().classes, "a");

        // Replacement drops the old handles and applies the new set
        let second = surface.apply_decorations(first, &[decoration(0, "c")]);
        assert_eq!(second.len(), 1);
        assert_eq!(surface.decoration_count(), 1);
        assert_eq!(surface.decoration_at(0).unwrap().classes, "c");
        assert!(surface.decoration_at(1).is_none());
    }

    #[test]
    fn test_clear_with_empty_new_set() {
        let mut surface = TerminalSurface::new(SurfaceId::new("file.rs"));
        let handles = surface.apply_decorations(Vec::new(), &[decoration(0, "a")]);
        surface.apply_decorations(handles, &[]);
        assert_eq!(surface.decoration_count(), 0);
    }
}
