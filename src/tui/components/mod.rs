// Components module - reusable UI building blocks
//
// Rendered in every frame:
// - Title bar: app name, card source, loading spinner
// - Search bar: the term being typed
// - Gallery: the card grid
// - Status bar: counter, page, load status
// - Logs panel: toggled with L
//
// The detail panel backs the card detail modal.

pub mod detail_panel;
pub mod gallery;
pub mod logs_panel;
pub mod scrollbar;
pub mod search_bar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
