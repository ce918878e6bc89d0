//! ruchy-highlight - highlight Ruchy source from the command line
//!
//! Reads a file (or stdin) and writes it back highlighted: terminal colors
//! by default, or HTML markup with `--html`.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use ruchy_highlight::escape::{normalize_line_endings, sanitize_input, DEFAULT_MAX_INPUT_SIZE};
use ruchy_highlight::{Config, ReplHighlighter, Result, ThemeRegistry};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Nearest-color or 24-bit terminal output
    Repl,
    /// Basic 8-color terminal output
    Ansi,
    Html,
}

/// Parsed command line
#[derive(Debug)]
struct Args {
    mode: Mode,
    theme: Option<String>,
    line_numbers: bool,
    wrap: bool,
    basic_colors: bool,
    list_themes: bool,
    file: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let raw: Vec<String> = env::args().skip(1).collect();

    // Handle --help and --version
    if let Some(first) = raw.first() {
        match first.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            _ => {}
        }
    }

    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("ruchy-highlight: {message}");
            eprintln!("Try 'ruchy-highlight --help' for more information.");
            process::exit(2);
        }
    };
    debug!(?args, "parsed arguments");

    if args.list_themes {
        for name in ThemeRegistry::new().names() {
            println!("{name}");
        }
        return Ok(());
    }

    // Command-line flags override the config file
    let mut config = Config::load();
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    config.line_numbers |= args.line_numbers;
    config.wrap_lines |= args.wrap;
    if args.basic_colors {
        config.true_color = false;
    }

    let source = read_source(args.file.as_deref())?;
    let source = normalize_line_endings(&sanitize_input(&source, DEFAULT_MAX_INPUT_SIZE)?);

    let output = match args.mode {
        Mode::Html => {
            let mut highlighter = config.highlighter();
            highlighter.highlight(&source, &config.highlight_options()).html
        }
        Mode::Ansi => config
            .highlighter()
            .to_ansi(&source, &config.highlight_options()),
        Mode::Repl => ReplHighlighter::new(config.repl_options()).highlight(&source),
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn parse_args(raw: &[String]) -> std::result::Result<Args, String> {
    let mut args = Args {
        mode: Mode::Repl,
        theme: None,
        line_numbers: false,
        wrap: false,
        basic_colors: false,
        list_themes: false,
        file: None,
    };

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--html" => args.mode = Mode::Html,
            "--ansi" => args.mode = Mode::Ansi,
            "--theme" | "-t" => match iter.next() {
                Some(name) => args.theme = Some(name.clone()),
                None => return Err("--theme needs a theme name".to_string()),
            },
            "--line-numbers" | "-n" => args.line_numbers = true,
            "--wrap" => args.wrap = true,
            "--basic-colors" => args.basic_colors = true,
            "--list-themes" => args.list_themes = true,
            "-" => args.file = None,
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            path => {
                if args.file.is_some() {
                    return Err("only one input file may be given".to_string());
                }
                args.file = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_source(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn print_usage() {
    println!(
        "ruchy-highlight {} - syntax highlighter for Ruchy",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: ruchy-highlight [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin when omitted or '-') and prints it highlighted.");
    println!();
    println!("Options:");
    println!("  --html              Emit HTML markup");
    println!("  --ansi              Emit basic 8-color terminal output");
    println!("  -t, --theme NAME    Use theme NAME (see --list-themes)");
    println!("  -n, --line-numbers  Show line numbers");
    println!("  --wrap              Wrap each HTML line in its own element");
    println!("  --basic-colors      Use the 16-color palette instead of 24-bit color");
    println!("  --list-themes       List available themes and exit");
    println!("  -h, --help          Show this help message");
    println!("  -V, --version       Show version information");
    println!();
    println!("Settings are read from ~/.ruchy-highlight.toml; flags take precedence.");
    println!("Set RUST_LOG=debug to see diagnostics on stderr.");
}

fn print_version() {
    println!("ruchy-highlight {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> std::result::Result<Args, String> {
        let raw: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        parse_args(&raw)
    }

    #[test]
    fn test_defaults() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.mode, Mode::Repl);
        assert!(parsed.file.is_none());
        assert!(!parsed.line_numbers);
    }

    #[test]
    fn test_flags() {
        let parsed = args(&["--html", "--theme", "github", "-n", "--wrap", "main.ruchy"]).unwrap();
        assert_eq!(parsed.mode, Mode::Html);
        assert_eq!(parsed.theme.as_deref(), Some("github"));
        assert!(parsed.line_numbers);
        assert!(parsed.wrap);
        assert_eq!(parsed.file.as_deref(), Some("main.ruchy"));
    }

    #[test]
    fn test_errors() {
        assert!(args(&["--theme"]).is_err());
        assert!(args(&["--bogus"]).is_err());
        assert!(args(&["a.ruchy", "b.ruchy"]).is_err());
    }
}
