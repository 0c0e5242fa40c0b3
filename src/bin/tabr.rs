//! Tabrender CLI - Render a data file as an HTML or LaTeX table

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use tabrender::{
    loading::{load, DataFormat},
    Alignment, RenderOptions, RenderWarning, RuleStyle, Table,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tabr")]
#[command(version)]
#[command(about = "Tabrender - Render tables from data files as HTML or LaTeX", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Output markup
    #[arg(short = 't', long, value_enum, default_value_t = Target::Html)]
    to: Target,

    /// Input format (guessed from the file extension by default)
    #[arg(short = 'i', long, value_enum, default_value_t = InputFormat::Auto)]
    input_format: InputFormat,

    /// Treat the first row as data instead of a header (rows and CSV input)
    #[arg(long)]
    no_header: bool,

    /// Use booktabs rules instead of \hline
    #[arg(long)]
    booktabs: bool,

    /// Column alignment for the LaTeX column specifier
    #[arg(long, value_enum, default_value_t = Align::Left)]
    align: Align,

    /// Wrap LaTeX output in a compilable document
    #[arg(long)]
    standalone: bool,

    /// Strict mode: exit with error if any render warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Html,
    Latex,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    Auto,
    Json,
    Yaml,
    Toml,
    Csv,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Align {
    Left,
    Center,
    Right,
}

#[cfg(feature = "cli")]
impl From<Align> for Alignment {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => Alignment::Left,
            Align::Center => Alignment::Center,
            Align::Right => Alignment::Right,
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input = match &cli.input_file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let format = resolve_format(cli.input_format, cli.input_file.as_deref(), &input);
    log::debug!("reading input as {}", format.name());
    let table = load(&input, format, !cli.no_header)?;

    let options = RenderOptions {
        column_align: cli.align.into(),
        rule_style: if cli.booktabs {
            RuleStyle::Booktabs
        } else {
            RuleStyle::Hline
        },
        standalone: cli.standalone,
        ..Default::default()
    };

    let result = render(&table, cli.to, &options);

    if !cli.quiet && !result.warnings.is_empty() {
        print_warnings_to_stderr(&result.warnings);
    }

    if cli.strict && !result.warnings.is_empty() {
        eprintln!(
            "Error: {} render warning(s) in strict mode",
            result.warnings.len()
        );
        std::process::exit(1);
    }

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result.content)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result.content);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn render(table: &Table, target: Target, options: &RenderOptions) -> tabrender::RenderOutput {
    match target {
        Target::Html => table.render_html_with_diagnostics(),
        Target::Latex => table.render_latex_with_diagnostics(options),
    }
}

/// Pick the input format from the flag, the file extension, or the content
#[cfg(feature = "cli")]
fn resolve_format(flag: InputFormat, path: Option<&str>, input: &str) -> DataFormat {
    match flag {
        InputFormat::Json => DataFormat::Json,
        InputFormat::Yaml => DataFormat::Yaml,
        InputFormat::Toml => DataFormat::Toml,
        InputFormat::Csv => DataFormat::Csv,
        InputFormat::Auto => path
            .and_then(|p| DataFormat::from_path(Path::new(p)))
            .unwrap_or_else(|| sniff_format(input)),
    }
}

/// Heuristic for stdin input
#[cfg(feature = "cli")]
fn sniff_format(input: &str) -> DataFormat {
    let trimmed = input.trim_start();
    let first = trimmed
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))
        .unwrap_or("");

    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        DataFormat::Json
    } else if is_toml_key_line(first) {
        DataFormat::Toml
    } else if first.contains(':') {
        DataFormat::Yaml
    } else {
        DataFormat::Csv
    }
}

/// `key = value`, with a bare or quoted key
#[cfg(feature = "cli")]
fn is_toml_key_line(line: &str) -> bool {
    let Some((key, _)) = line.split_once('=') else {
        return false;
    };
    let key = key.trim();
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    let quoted = key.len() >= 2 && key.starts_with('"') && key.ends_with('"');
    bare || quoted
}

#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[RenderWarning]) {
    eprintln!();
    eprintln!("Render Warnings ({}):", warnings.len());
    eprintln!();
    for warning in warnings {
        eprintln!("  [{}] {}", warning.kind, warning);
    }
    eprintln!();
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_json() {
        assert_eq!(sniff_format("  {\"a\": [1]}"), DataFormat::Json);
        assert_eq!(sniff_format("[[1, 2]]"), DataFormat::Json);
    }

    #[test]
    fn test_sniff_toml() {
        assert_eq!(sniff_format("name = [\"ann\"]\n"), DataFormat::Toml);
        assert_eq!(
            sniff_format("# people\nurl = [\"http://x\"]\n"),
            DataFormat::Toml
        );
        assert_eq!(sniff_format("\"a b\" = [1]\n"), DataFormat::Toml);
    }

    #[test]
    fn test_sniff_yaml_and_csv() {
        assert_eq!(sniff_format("name: [ann, bob]\n"), DataFormat::Yaml);
        assert_eq!(sniff_format("a,b\n1,2\n"), DataFormat::Csv);
        assert_eq!(sniff_format("expr,value\nx=1,2\n"), DataFormat::Csv);
    }

    #[test]
    fn test_resolve_format_prefers_flag_then_extension() {
        assert_eq!(
            resolve_format(InputFormat::Csv, Some("t.json"), "{}"),
            DataFormat::Csv
        );
        assert_eq!(
            resolve_format(InputFormat::Auto, Some("t.toml"), "a: 1"),
            DataFormat::Toml
        );
        assert_eq!(
            resolve_format(InputFormat::Auto, None, "k = [1]"),
            DataFormat::Toml
        );
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabrender --features cli");
    eprintln!("  tabr [OPTIONS] [INPUT_FILE]");
}
