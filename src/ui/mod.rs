//! Terminal host adapter
//!
//! Implements the engine's host contracts on top of ratatui: a surface
//! that records applied decorations and a gutter view that renders the
//! decorated file.

pub mod surface;
pub mod theme;
pub mod view;

pub use surface::TerminalSurface;
pub use view::GutterView;
