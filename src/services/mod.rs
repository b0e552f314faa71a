// Panelscope Core Services

pub mod aggregation;
pub mod classify;
pub mod client;
pub mod lifecycle;
pub mod render;

pub use aggregation::aggregate;
pub use classify::{clamp_score, classify, to_display_entry};
pub use client::{derive_error_message, PanelClient, PanelError};
pub use lifecycle::{RequestLifecycle, RequestState};
pub use render::{display_entries, render_error, render_report, render_unified_summary};
