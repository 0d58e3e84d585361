//! `yaml-path`: print where a line sits in a YAML document (`foo.bar.baz`)
//! using indentation alone.

use colored::*;
use std::process;

mod cli;
mod tag;
mod yaml;

fn main() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    match cli::run() {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "Error".bright_red(), e);
            process::exit(127);
        }
    }
}
