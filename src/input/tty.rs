//! Controlling-terminal reader thread

use std::fs::File;
use std::io::{self, Read};
use std::sync::mpsc::Sender;

use crate::engine::error::RsvpError;
use crate::engine::signals::Wake;

pub const TTY_PATH: &str = "/dev/tty";

pub fn open_tty() -> Result<File, RsvpError> {
    File::open(TTY_PATH).map_err(RsvpError::io("opening /dev/tty"))
}

/// Forwards every byte read from `tty` as [`Wake::Byte`] until end of
/// input, a read failure, or the receiving side hanging up.
///
/// The thread is left detached: it is normally parked in `read` when the
/// session ends and goes away with the process.
pub fn spawn_reader<R>(tty: R, wake: Sender<Wake>)
where
    R: Read + Send + 'static,
{
    std::thread::spawn(move || forward_bytes(tty, &wake));
}

pub fn forward_bytes<R: Read>(mut tty: R, wake: &Sender<Wake>) {
    let mut byte = [0u8; 1];
    loop {
        let event = match tty.read(&mut byte) {
            Ok(0) => Wake::Eof,
            Ok(_) => Wake::Byte(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => Wake::Failed(e),
        };
        let last = !matches!(event, Wake::Byte(_));
        if wake.send(event).is_err() || last {
            return;
        }
    }
}
