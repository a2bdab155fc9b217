use std::io;
use std::process::ExitCode;
use tracing::{debug, info};

fn main() -> ExitCode {
    add_two::logging::init();
    info!("add-two starting");

    match add_two::run(io::stdin().lock(), io::stdout().lock()) {
        Ok(sum) => {
            info!(%sum, "add-two finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(kind = ?e.kind(), "pipeline failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
