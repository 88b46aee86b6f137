//! Quad Illustrator CLI
//!
//! Usage:
//!   quad-illustrator [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --format <FORMAT>    Output format: svg (default) or json
//!   -s, --stylesheet <FILE>  Stylesheet file for colour palette (TOML format)
//!   -l, --lint               Report measurements the drawing does not honour
//!   -d, --debug              Verbose logging and debug marks in the SVG
//!   -e, --example            Print an annotated example document
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use quad_illustrator::{
    layout_json, render_with_lint, DegeneratePolicy, LayoutConfig, RenderConfig, Stylesheet,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// SVG drawing
    Svg,
    /// Resolved geometry as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "quad-illustrator")]
#[command(about = "Draw partially measured quadrilaterals")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Stylesheet file for colour palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Report measurements the drawing does not honour (to stderr)
    #[arg(short, long)]
    lint: bool,

    /// Debug logging, plus outline bounds and strategy in the SVG
    #[arg(short, long)]
    debug: bool,

    /// Fail instead of drawing the default shape when the solve collapses
    #[arg(long)]
    strict: bool,

    /// Canvas width
    #[arg(long, default_value_t = 700.0, value_parser = positive_length)]
    width: f64,

    /// Canvas height
    #[arg(long, default_value_t = 500.0, value_parser = positive_length)]
    height: f64,

    /// Padding around the drawing region
    #[arg(long, default_value_t = 80.0, value_parser = non_negative_length)]
    padding: f64,

    /// Print an annotated example document
    #[arg(short, long)]
    example: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.example {
        print!("{}", EXAMPLE);
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                process::exit(1);
            }
            (buffer, "<stdin>".to_string())
        }
    };

    let policy = if cli.strict {
        DegeneratePolicy::Error
    } else {
        DegeneratePolicy::Fallback
    };
    let layout = LayoutConfig::default()
        .with_canvas_size(cli.width, cli.height)
        .with_padding(cli.padding)
        .with_degenerate_policy(policy);

    let output = match cli.format {
        Format::Json => layout_json(&source, &layout),
        Format::Svg => {
            let config = RenderConfig::new()
                .with_layout(layout)
                .with_stylesheet(stylesheet)
                .with_lint(cli.lint)
                .with_debug(cli.debug);
            render_with_lint(&source, config).map(|(svg, warnings)| {
                for warning in &warnings {
                    eprintln!("{}", warning);
                }
                svg
            })
        }
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("{}", e.report(&source, &filename));
            process::exit(1);
        }
    }
}

fn parse_length(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("must be a finite number, got {}", s))
    }
}

fn positive_length(s: &str) -> Result<f64, String> {
    parse_length(s).and_then(|v| {
        if v > 0.0 {
            Ok(v)
        } else {
            Err(format!("must be greater than 0, got {}", s))
        }
    })
}

fn non_negative_length(s: &str) -> Result<f64, String> {
    parse_length(s).and_then(|v| {
        if v >= 0.0 {
            Ok(v)
        } else {
            Err(format!("must not be negative, got {}", s))
        }
    })
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_tracing(debug: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn print_intro() {
    println!(
        r#"Quad Illustrator - draw partially measured quadrilaterals

USAGE:
    quad-illustrator [OPTIONS] [FILE]
    cat shape.toml | quad-illustrator > shape.svg

OPTIONS:
    -f, --format       svg (default) or json
    -s, --stylesheet   Custom colour palette (TOML file)
    -l, --lint         Report measurements the drawing does not honour
    -d, --debug        Verbose logging and debug marks
    --strict           Fail on collapsed (collinear) solves
    -e, --example      Print an annotated example document
    -h, --help         Print help

Run --example for a starting document."#
    );
}

const EXAMPLE: &str = r#"# Vertex names, in order around the outline
vertices = ["A", "B", "C", "D"]

# Side i joins vertex i and vertex i+1: AB, BC, CD, DA.
# A side is known when it has a positive `length` or a label with a number.
[[sides]]
label = "6 m"
[[sides]]
length = 4
[[sides]]
label = "10 m"
[[sides]]
label = "x"

# Angle i is the interior angle at vertex i.
[[angles]]
[[angles]]
value = 100
[[angles]]
label = "80°"
[[angles]]
show_angle = false

[[diagonals]]
from = 1
to = 3
style = "dashed"

[display]
highlight_side = 3
caption = "Find $x$"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_arguments() {
        assert_eq!(positive_length("640"), Ok(640.0));
        assert!(positive_length("0").is_err());
        assert!(positive_length("inf").is_err());
        assert!(positive_length("wide").is_err());
        assert_eq!(non_negative_length("0"), Ok(0.0));
        assert!(non_negative_length("-5").is_err());
    }

    #[test]
    fn test_cli_rejects_negative_padding() {
        assert!(Cli::try_parse_from(["quad-illustrator", "--padding", "-5"]).is_err());
        let cli = Cli::try_parse_from(["quad-illustrator", "--width", "300"]).unwrap();
        assert_eq!(cli.width, 300.0);
        assert_eq!(cli.padding, 80.0);
    }

    #[test]
    fn test_example_document_parses() {
        assert!(quad_illustrator::parse(EXAMPLE).is_ok());
    }
}
