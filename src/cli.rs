//! Command-line parsing: `rq [--] [file]`

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::engine::error::RsvpError;
use crate::input::TextSource;

#[derive(Parser, Debug)]
#[command(name = "rq", about = "Rapid serial visual presentation reader for the terminal")]
pub struct Args {
    /// Text file to read; `-` or no operand reads standard input
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl Args {
    pub fn source(self) -> TextSource {
        match self.file {
            Some(path) if path.as_os_str() != "-" => TextSource::File(path),
            _ => TextSource::Stdin,
        }
    }
}

/// Parses the full argument list, program name first.
///
/// `--help` and `--version` print and exit the process; every other
/// rejection becomes an invocation error carrying clap's rendered usage.
pub fn parse_args<I, T>(args: I) -> Result<TextSource, RsvpError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Ok(args.source()),
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => Err(RsvpError::Invocation(
            err.render().to_string().trim_end().to_string(),
        )),
    }
}
