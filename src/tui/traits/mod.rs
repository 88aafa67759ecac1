//! Component traits for the TUI
//!
//! Panels own their state and declare capabilities through these traits.
//! App routes keys to the focused panel and falls back to global handlers
//! when the panel does not consume them.
//!
//! ```text
//!                 App (routes keys, owns the session)
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │ Gallery  │   │  Detail  │   │   Logs   │
//!        │  Panel   │   │  Panel   │   │  Panel   │
//!        └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! - [`Scrollable`] - panels with a `ScrollState`
//! - [`Interactive`] - panels that consume keyboard input

mod interactive;
mod scrollable;

pub use interactive::{Handled, Interactive, ScrollableInteractive};
pub use scrollable::Scrollable;
