use std::process::ExitCode;

use rq::engine::ReaderConfig;

fn main() -> ExitCode {
    let source = match rq::cli::parse_args(std::env::args_os()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    if let Err(e) = rq::logging::init() {
        eprintln!("rq: {}", e);
        return ExitCode::from(e.exit_code());
    }

    let config = ReaderConfig::from_env();
    match rq::app::run(&source, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "session failed");
            eprintln!("rq: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
