//! Tablecraft CLI - Spreadsheet paste to inline-styled HTML tables

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, IsTerminal, Read, Write};
#[cfg(feature = "cli")]
use tablecraft::{
    blank_table_html, detect_format,
    diagnostics::{check_paste, format_diagnostics},
    styles::{cell_style, CellVariant, Section, NAMED_STYLES},
    CapturedOutput, EditorConfig, EditorError, EditorResult, EditorSession, ImportWarning,
    StyleToggle,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tcraft")]
#[command(version)]
#[command(about = "Tablecraft - Convert spreadsheet data to CMS-safe HTML tables", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Input format
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,

    /// What to write
    #[arg(long, value_enum, default_value_t = Emit::Html)]
    emit: Emit,

    /// Render the first column of every body row in bold
    #[arg(short, long)]
    bold_first_column: bool,

    /// TOML file with editor settings
    #[arg(long)]
    config: Option<String>,

    /// Strict mode: exit with error if any import warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Colored diagnostics and warnings
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Generate an empty table
    Blank {
        /// Data rows (header excluded)
        #[arg(short, long, default_value_t = 3)]
        rows: usize,

        /// Columns
        #[arg(short, long, default_value_t = 3)]
        cols: usize,

        /// Render the first column in bold
        #[arg(short, long)]
        bold_first_column: bool,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check pasted text for potential import issues
    Check {
        /// Input file to check
        input: Option<String>,
    },

    /// List the inline style catalog
    Styles,

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// Decide by file extension, then by content
    Auto,
    /// Tab-separated (spreadsheet clipboard)
    Tsv,
    /// Comma-separated
    Csv,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// The exported HTML fragment
    Html,
    /// The table model as JSON
    Json,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

#[cfg(feature = "cli")]
impl ColorMode {
    /// Resolve against the stream the colored text goes to
    fn enabled(self, terminal: bool) -> bool {
        match self {
            ColorMode::Auto => terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(cmd) => handle_subcommand(cmd, cli.color),
        None => convert(&cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level
#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .init();
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Write `content` exactly as given; the fragment must stay newline-free
#[cfg(feature = "cli")]
fn emit<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    out.write_all(content.as_bytes())?;
    out.flush()
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str, warnings: usize) -> io::Result<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            emit(&mut file, content)?;
            if warnings == 0 {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!("⚠ Output written to: {} ({} warning(s))", path, warnings);
            }
        }
        None => {
            emit(&mut io::stdout().lock(), content)?;
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn resolve_format(format: InputFormat, filename: Option<&str>, content: &str) -> InputFormat {
    match format {
        InputFormat::Auto => {
            if let Some(name) = filename {
                if name.ends_with(".csv") {
                    return InputFormat::Csv;
                }
                if name.ends_with(".tsv") || name.ends_with(".tab") {
                    return InputFormat::Tsv;
                }
            }
            // Use content-based detection
            if detect_format(content) == "csv" {
                InputFormat::Csv
            } else {
                InputFormat::Tsv
            }
        }
        f => f,
    }
}

#[cfg(feature = "cli")]
fn convert(cli: &Cli) -> EditorResult<()> {
    let mut config = match cli.config {
        Some(ref path) => EditorConfig::from_toml_file(path)?,
        None => EditorConfig::default(),
    };
    if cli.bold_first_column {
        config.bold_first_column = true;
    }

    let input = read_input(cli.input_file.as_deref())?;
    let format = resolve_format(cli.format, cli.input_file.as_deref(), &input);

    let mut session = EditorSession::with_config(CapturedOutput::new(), config);
    let imported = match format {
        InputFormat::Csv => session.import_csv(&input)?,
        _ => session.import_paste(&input),
    };

    let use_color = cli.color.enabled(io::stderr().is_terminal());
    if !cli.quiet && imported.has_warnings() {
        print_warnings_to_stderr(&imported.warnings, use_color);
    }

    if cli.strict && imported.has_warnings() {
        return Err(EditorError::invalid(format!(
            "{} import warning(s) in strict mode",
            imported.warnings.len()
        )));
    }

    let result = match cli.emit {
        Emit::Html => session.html(),
        Emit::Json => serde_json::to_string_pretty(&imported.model)
            .map_err(|e| EditorError::internal(e.to_string()))?,
    };

    write_output(cli.output.as_deref(), &result, imported.warnings.len())?;
    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands, color: ColorMode) -> EditorResult<()> {
    match cmd {
        Commands::Blank {
            rows,
            cols,
            bold_first_column,
            output,
        } => {
            let html = blank_table_html(rows, cols, StyleToggle { bold_first_column });
            write_output(output.as_deref(), &html, 0)?;
        }

        Commands::Check { input } => {
            let content = read_input(input.as_deref())?;

            let result = check_paste(&content);
            let output = format_diagnostics(&result, color.enabled(io::stdout().is_terminal()));
            println!("{}", output);

            if result.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Styles => {
            let mut named: Vec<_> = NAMED_STYLES.entries().collect();
            named.sort_unstable_by_key(|(name, _)| **name);
            for (name, style) in named {
                println!("{}:", name);
                println!("  {}", style);
            }
            for variant in CellVariant::all() {
                println!("{}:", variant_name(variant));
                println!("  {}", cell_style(variant));
            }
        }

        Commands::Info => {
            println!("Tablecraft - Spreadsheet data to CMS-safe HTML tables");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ TSV import (spreadsheet clipboard)");
            println!("  ✓ CSV import");
            println!("  ✓ Inline !important styles, no whitespace between tags");
            println!("  ✓ Zebra rows and positional borders");
            println!("  ✓ Bold first column toggle");
            println!("  ✓ Paste diagnostics");
            println!();
            println!("Limits:");
            println!(
                "  - {} rows including the header",
                tablecraft::constants::MAX_SURFACE_ROWS
            );
            println!("  - {} columns", tablecraft::constants::MAX_COLS);
            println!();
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn variant_name(variant: CellVariant) -> String {
    let mut name = match variant.section {
        Section::Header => String::from("header-cell"),
        Section::Body => String::from("body-cell"),
    };
    if variant.last_column {
        name.push_str("-last-column");
    }
    if variant.section == Section::Body {
        if variant.last_row {
            name.push_str("-last-row");
        }
        if variant.bold {
            name.push_str("-bold");
        }
    }
    name
}

/// Print import warnings to stderr with optional color coding
#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[ImportWarning], use_color: bool) {
    let color = if use_color { "\x1b[33m" } else { "" };
    let reset = if use_color { "\x1b[0m" } else { "" };

    eprintln!();
    eprintln!("{}Import Warnings ({}):{}", color, warnings.len(), reset);
    eprintln!();
    for warning in warnings {
        eprintln!("  {}[warning]{} {}", color, reset, warning);
    }
    eprintln!();
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_emit_adds_no_newline() {
        let html = blank_table_html(1, 1, StyleToggle::default());
        let mut out = Vec::new();
        emit(&mut out, &html).unwrap();
        assert_eq!(out, html.as_bytes());
        assert!(!out.contains(&b'\n'));
    }

    #[test]
    fn test_color_is_global() {
        let cli = Cli::try_parse_from(["tcraft", "check", "--color", "never"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check { .. })));
        assert!(cli.color == ColorMode::Never);

        let cli = Cli::try_parse_from(["tcraft", "--color", "always", "data.tsv"]).unwrap();
        assert!(cli.color.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
    }

    #[test]
    fn test_check_rejects_no_color_flag() {
        assert!(Cli::try_parse_from(["tcraft", "check", "--no-color"]).is_err());
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tablecraft --features cli");
    eprintln!("  tcraft [OPTIONS] [INPUT_FILE]");
}
