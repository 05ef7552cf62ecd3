//! Per-surface decoration session state
//!
//! One session exists per open surface. It owns everything the engine
//! has applied there: the active blame result, the decoration handles
//! returned by the host, the style set, the highlighted revision, and
//! an ordered teardown list run in reverse registration order.

use std::collections::HashMap;
use std::fmt;
use std::mem;

use crate::model::BlameResult;
use crate::style::VisualStyle;

use super::host::{DecorationHandle, EditorSurface};

type TeardownAction = Box<dyn FnOnce(&mut dyn EditorSurface)>;

/// Ordered cleanup actions, run in reverse registration order
#[derive(Default)]
pub(crate) struct TeardownList {
    actions: Vec<TeardownAction>,
}

impl TeardownList {
    pub(crate) fn push(&mut self, action: impl FnOnce(&mut dyn EditorSurface) + 'static) {
        self.actions.push(Box::new(action));
    }

    /// Drain and run all actions, most recent first. Running twice is a
    /// no-op because each action is consumed.
    pub(crate) fn run(&mut self, surface: &mut dyn EditorSurface) {
        while let Some(action) = self.actions.pop() {
            action(surface);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.actions.len()
    }
}

/// State tracked for one open editor surface
pub struct DecorationSession {
    pub(crate) blame: Option<BlameResult>,
    pub(crate) handles: Vec<DecorationHandle>,
    pub(crate) styles: HashMap<String, VisualStyle>,
    pub(crate) highlighted: Option<String>,
    pub(crate) teardown: TeardownList,
}

impl DecorationSession {
    pub(crate) fn new() -> Self {
        Self {
            blame: None,
            handles: Vec::new(),
            styles: HashMap::new(),
            highlighted: None,
            teardown: TeardownList::default(),
        }
    }

    /// The blame result currently decorating the surface
    pub fn blame(&self) -> Option<&BlameResult> {
        self.blame.as_ref()
    }

    /// Styles applied with the current decorations, keyed by revision id
    pub fn styles(&self) -> &HashMap<String, VisualStyle> {
        &self.styles
    }

    /// Identifier of the currently highlighted revision
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    /// Handles of the currently applied decorations
    pub fn handles(&self) -> &[DecorationHandle] {
        &self.handles
    }

    /// Look up an applied style by its class name
    pub fn style_for_class(&self, class: &str) -> Option<&VisualStyle> {
        self.styles.values().find(|s| s.class_name() == class)
    }

    /// Release everything held for the surface
    ///
    /// Removes applied decorations in a single host call, then runs the
    /// teardown list. Idempotent: handles are taken and actions drained,
    /// so a second call releases nothing twice.
    pub(crate) fn dispose(&mut self, surface: &mut dyn EditorSurface) {
        let old = mem::take(&mut self.handles);
        if !old.is_empty() {
            surface.apply_decorations(old, &[]);
        }
        self.teardown.run(surface);
        self.styles.clear();
        self.blame = None;
        self.highlighted = None;
    }
}

impl fmt::Debug for DecorationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecorationSession")
            .field("blame_lines", &self.blame.as_ref().map(|b| b.len()))
            .field("handles", &self.handles.len())
            .field("styles", &self.styles.len())
            .field("highlighted", &self.highlighted)
            .finish()
    }
}
