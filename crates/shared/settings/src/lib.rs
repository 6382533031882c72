//! Two-phase settings management and its CSS projection.
//!
//! [`SettingsStore`] keeps an `applied` record (in effect for the rendered
//! app) and a `pending` draft. Edits only touch the draft; `apply` commits
//! it, persists it, and notifies the synchronous observers that push the
//! applied record into the presentation layer. [`project`] turns an applied
//! record into the concrete CSS custom properties and the sidebar attribute.

pub mod projection;
pub mod store;

pub use projection::{CssProjection, SIDEBAR_ATTRIBUTE, project};
pub use store::SettingsStore;
