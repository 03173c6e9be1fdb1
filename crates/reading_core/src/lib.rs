//! Three-card tarot reading engine: deck loading, paced draws, navigation and
//! interpretation, driven through a single session controller.

use thiserror::Error;

pub mod catalog;
pub mod config;
pub mod draw;
pub mod interpretation;
pub mod session;

pub use catalog::{CatalogSource, HttpCatalog};
pub use config::{load_settings, load_settings_from, SessionSettings};
pub use session::{
    spawn_session, CommandOutcome, DeckStatus, IgnoreReason, ReadingHandle, SessionCommand,
    SessionController, SessionSnapshot, SwipeDirection,
};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("reading session controller has stopped")]
    ControllerClosed,
}
