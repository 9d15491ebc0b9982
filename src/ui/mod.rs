pub mod frame;
pub mod terminal;
pub mod terminal_guard;

pub use frame::{render_frame, Geometry};
pub use terminal::{Console, TtyConsole};
pub use terminal_guard::TerminalGuard;
