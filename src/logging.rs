//! Logger setup
//!
//! Records go to the configured log file when there is one. Otherwise they
//! go to stderr, which is silenced by default under the full-screen UI so the
//! alternate screen is not overwritten. `RUST_LOG` always wins.

use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

pub fn init(log_file: Option<&Path>, full_screen: bool) -> io::Result<()> {
    let default_filter = match (log_file, full_screen) {
        (Some(_), _) => "info",
        (None, true) => "off",
        (None, false) => "warn",
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A second init (tests, embedding) keeps the first logger
    let _ = builder.try_init();
    Ok(())
}
