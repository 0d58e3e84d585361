mod def;
mod output;
include!(concat!(env!("OUT_DIR"), "/rustc_version.rs"));
use clap::Parser;

use crate::yaml::{Buffer, Config, PathHooks, PathResolver, Point, QuoteStyle};
use output::OutputPolicy;

pub mod log;

impl From<crate::yaml::Error> for String {
    fn from(e: crate::yaml::Error) -> Self {
        e.to_string()
    }
}

/// Report a query that found nothing: quiet mode only fails the exit code.
fn no_result(quiet: bool, message: String) -> Result<bool, String> {
    if quiet {
        return Ok(false);
    }
    Err(message)
}

fn no_element(quiet: bool, line: usize) -> Result<bool, String> {
    no_result(quiet, format!("no YAML element at line {}", line))
}

pub fn run() -> Result<bool, String> {
    let cli = def::Args::parse();

    // Split log strings upon comma, trim them and flatten all in
    // `logs`, remove empty values
    let logs = cli.log.clone().unwrap_or_default();
    let logs = logs
        .iter()
        .flat_map(|log| log.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>();

    log::setup(cli.verbose, logs, cli.log_time)?;

    if cli.color && cli.no_color {
        return Err("Cannot use both --color and --no-color".to_string());
    }
    if cli.color {
        colored::control::set_override(true);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.version {
        println!("version: {}", env!("CARGO_PKG_VERSION"));
        println!("Rust: {}", RUSTC_VERSION);
        return Ok(true);
    }

    let action = match &cli.action {
        Some(action) => action,
        None => return Err("Missing action".to_string()),
    };

    let config = Config {
        separator: cli.separator.clone(),
        max_buffer_size: cli.max_size,
        quote: if cli.double_quotes {
            QuoteStyle::Double
        } else {
            QuoteStyle::Single
        },
        escape: cli.escape,
        tab_width: cli.tab_width,
    };
    config.validate()?;

    let document = crate::yaml::load_document(cli.file.as_deref(), config.tab_width)?;
    ::log::debug!(
        "loaded {} lines ({} bytes)",
        document.line_count(),
        document.size()
    );
    let mut buffer = Buffer::new(document);
    let resolver = PathResolver::new(&config);

    match action {
        def::Actions::GetPath { line } => {
            buffer.goto_line(*line)?;
            match resolver.get_path(&mut buffer) {
                Some(path) => println!("{}", path),
                None => return no_element(cli.quiet, *line),
            }
        }
        def::Actions::IndexExpr { line } => {
            buffer.goto_line(*line)?;
            match resolver.index_expression(&mut buffer) {
                Some(expr) => println!("{}", expr),
                None => return no_element(cli.quiet, *line),
            }
        }
        def::Actions::Chain { line } => {
            buffer.goto_line(*line)?;
            match resolver.chain(&mut buffer) {
                Some(chain) => print!("{}", output::format_chain(&chain)),
                None => return no_element(cli.quiet, *line),
            }
        }
        def::Actions::Paths { force } => {
            print_paths(&mut buffer, &config, *force, &OutputPolicy::newline())?;
        }
        def::Actions::Paths0 { force } => {
            print_paths(&mut buffer, &config, *force, &OutputPolicy::nul())?;
        }
        def::Actions::Locate { path } => {
            let found = resolver.locate(&mut buffer, path);
            if found.is_empty() {
                return no_result(cli.quiet, format!("no YAML element at path '{}'", path));
            }
            output::print_lines(found.iter().map(|p| p.number()));
        }
    }
    Ok(true)
}

/// Walk the point over every line, collecting paths through the hooks.
fn print_paths(
    buffer: &mut Buffer,
    config: &Config,
    force: bool,
    policy: &OutputPolicy,
) -> Result<(), String> {
    let mut config = config.clone();
    if !config.live_enabled(buffer.document()) {
        if !force {
            return Err(format!(
                "document is {} bytes, over the {} bytes limit (use --max-size or --force)",
                buffer.document().size(),
                config.max_buffer_size
            ));
        }
        ::log::info!("resolving oversized document on request");
        config.max_buffer_size = usize::MAX;
    }

    let mut entries: Vec<(usize, String)> = Vec::new();
    {
        let mut hooks = PathHooks::new(PathResolver::new(&config));
        hooks.register(|point: Point, path: Option<&str>| {
            if let Some(path) = path {
                entries.push((point.position.number(), path.to_string()));
            }
        });
        let positions: Vec<_> = buffer.document().positions().collect();
        for position in positions {
            buffer.goto(position);
            hooks.cursor_moved(buffer);
        }
    }
    print!(
        "{}",
        output::format_entries(entries.iter().map(|(l, p)| (*l, p.as_str())), policy)
    );
    Ok(())
}
