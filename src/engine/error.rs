use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsvpError {
    /// Memory could not be obtained while loading or splitting the text.
    #[error("out of memory while {what}")]
    Resource { what: &'static str },

    #[error("{op}: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Invocation(String),
}

impl RsvpError {
    pub fn io(op: &'static str) -> impl FnOnce(io::Error) -> RsvpError {
        move |source| RsvpError::Io { op, source }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            RsvpError::Invocation(_) => 2,
            RsvpError::Resource { .. } | RsvpError::Io { .. } => 1,
        }
    }
}
