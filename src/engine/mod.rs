//! Blame decoration engine
//!
//! Owns one [`DecorationSession`] per open editor surface and turns
//! blame results into decoration instructions for the host. Replacement
//! is atomic (old handles removed and new decorations applied in a
//! single host call), cursor movement inside the highlighted revision
//! short-circuits, and a fetch token guard discards blame results that
//! were superseded while in flight.

pub mod host;
mod hover;
mod planner;
mod session;

pub use planner::{DecorationPlan, plan};
pub use session::DecorationSession;

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::model::BlameResult;
use crate::style::HeatClassifier;

use host::{EditorSurface, Hover, HoverRegistrar, Range, SurfaceId};

/// Result of applying a blame result to a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Decorations were replaced on the surface
    Applied,
    /// The highlighted revision did not change; existing decorations kept
    Unchanged,
    /// A newer fetch superseded this one; the result was discarded
    Stale,
}

/// Token identifying one blame fetch for a surface
///
/// Obtained from [`BlameEngine::begin_fetch`] before fetching and handed
/// back to [`BlameEngine::apply_fetched`] with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// The blame decoration engine
///
/// The session registry is owned here, keyed by surface identity;
/// `&mut self` serializes every mutation, so a second apply for the
/// same surface can never interleave with a running one.
pub struct BlameEngine {
    sessions: HashMap<SurfaceId, DecorationSession>,
    fetch_seq: HashMap<SurfaceId, u64>,
    hover: Box<dyn HoverRegistrar>,
    classifier: HeatClassifier,
}

impl BlameEngine {
    /// Create an engine; the heat reference instant is captured once here
    pub fn new(hover: Box<dyn HoverRegistrar>) -> Self {
        Self::with_reference_time(hover, Utc::now())
    }

    /// Create an engine with an explicit heat reference instant
    pub fn with_reference_time(hover: Box<dyn HoverRegistrar>, now: DateTime<Utc>) -> Self {
        Self {
            sessions: HashMap::new(),
            fetch_seq: HashMap::new(),
            hover,
            classifier: HeatClassifier::new(now),
        }
    }

    /// The session for a surface, if one exists
    pub fn session(&self, id: &SurfaceId) -> Option<&DecorationSession> {
        self.sessions.get(id)
    }

    /// Number of open sessions
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Begin a blame fetch for a surface
    ///
    /// Each call supersedes earlier tokens for the same surface, so a
    /// slow fetch that completes after a newer one is discarded by
    /// [`apply_fetched`](Self::apply_fetched).
    pub fn begin_fetch(&mut self, id: &SurfaceId) -> FetchToken {
        let seq = self.fetch_seq.entry(id.clone()).or_insert(0);
        *seq += 1;
        FetchToken(*seq)
    }

    /// Apply a fetched blame result unless a newer fetch was begun since
    pub fn apply_fetched(
        &mut self,
        surface: &mut dyn EditorSurface,
        token: FetchToken,
        blame: BlameResult,
        highlighted_line: u32,
    ) -> ApplyOutcome {
        let latest = self.fetch_seq.get(surface.id()).copied().unwrap_or(0);
        if token.0 != latest {
            return ApplyOutcome::Stale;
        }
        self.apply_blame(surface, blame, highlighted_line)
    }

    /// Apply a blame result to a surface
    ///
    /// Lazily creates the surface's session; creation registers the
    /// hover capability and queues its disposal on the teardown list.
    pub fn apply_blame(
        &mut self,
        surface: &mut dyn EditorSurface,
        blame: BlameResult,
        highlighted_line: u32,
    ) -> ApplyOutcome {
        let id = surface.id().clone();
        if !self.sessions.contains_key(&id) {
            let registration = self.hover.register(&id);
            let mut session = DecorationSession::new();
            session.teardown.push(move |_| registration.dispose());
            self.sessions.insert(id.clone(), session);
        }
        let session = self
            .sessions
            .get_mut(&id)
            .expect("session exists after insertion");

        // Pure cursor movement inside the highlighted revision's lines
        // does not change what is rendered
        if session.blame.is_some() && session.highlighted.is_some() {
            let highlight = blame.revision_at(highlighted_line);
            if highlight == session.highlighted.as_deref() {
                return ApplyOutcome::Unchanged;
            }
        }

        let plan = planner::plan(&blame, highlighted_line, &self.classifier);
        // Previous style set is replaced wholesale
        session.styles = plan.styles;
        let old = std::mem::take(&mut session.handles);
        session.handles = surface.apply_decorations(old, &plan.decorations);
        session.blame = Some(blame);
        session.highlighted = plan.highlighted;
        ApplyOutcome::Applied
    }

    /// Resolve the hover for a position on a surface
    ///
    /// Missing session, missing blame, or an unattributed line all yield
    /// the empty hover.
    pub fn resolve_hover(&self, id: &SurfaceId, line: u32) -> Hover {
        let Some(session) = self.sessions.get(id) else {
            return Hover::empty();
        };
        let Some(blame) = session.blame() else {
            return Hover::empty();
        };
        let Some(revision_id) = blame.revision_at(line) else {
            return Hover::empty();
        };
        let Some(revision) = blame.revision(revision_id) else {
            debug_assert!(false, "attribution references unknown revision {revision_id}");
            return Hover::empty();
        };
        Hover {
            contents: hover::hover_message(revision),
            range: Some(Range::full_line(line)),
        }
    }

    /// Tear down a surface's session
    ///
    /// Removes applied decorations, runs the teardown list in reverse
    /// registration order, and drops the registry entry. Idempotent.
    pub fn dispose(&mut self, surface: &mut dyn EditorSurface) {
        if let Some(mut session) = self.sessions.remove(surface.id()) {
            session.dispose(surface);
        }
        self.fetch_seq.remove(surface.id());
    }
}
