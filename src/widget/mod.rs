//! The list filter widget.
//!
//! [`Model`] ties the pieces together: a [`list`](crate::list) of titles, a
//! modal dialog ([`modal::State`](crate::modal::State)) holding a filter
//! [`textinput`](crate::textinput) and the scrollable list body, and a second
//! text input that mirrors the chosen title.
//!
//! ### Behaviour
//! - Opening the dialog shows it at once and focuses the filter field after
//!   [`Config::focus_delay`]. Closing it, or opening it again, cancels a
//!   focus that has not landed yet.
//! - Every edit of the filter re-runs the substring filter over all items.
//! - Choosing an item copies its text into the mirror field and closes the
//!   dialog.
//! - Losing focus from the filter field closes the dialog.
//! - A drag that starts on the header is reported back with
//!   `default_prevented` set.
//! - Scrolling the body never lets its content rest exactly at the bottom
//!   edge; see [`viewport::Model::clamp_overscroll`](crate::viewport::Model::clamp_overscroll).
//!
//! ### Standalone use
//!
//! ```rust,ignore
//! use bubbletea_listfilter::widget::Model;
//! use bubbletea_rs::{MouseMotion, Program};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let program = Program::<Model>::builder()
//!         .alt_screen(true)
//!         .mouse_motion(MouseMotion::Cell)
//!         .build()?;
//!     program.run().await?;
//!     Ok(())
//! }
//! ```

mod config;
mod keys;
mod model;
pub mod style;
mod update;
mod view;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use keys::KeyMap;
pub use model::Model;
pub use style::Styles;
pub use update::Dispatch;
