pub mod config;
pub mod error;
pub mod presenter;
pub mod signals;
pub mod timer;

pub use config::ReaderConfig;
pub use error::RsvpError;
pub use presenter::{Outcome, Phase, Presenter};
pub use signals::{PendingSignals, ResizeWatcher, Wake};
pub use timer::{Pacer, PacingTimer};
