//! Stat Patch CLI Application
//!
//! Command-line front end for the stat-patch library. Run without arguments it
//! prints the replacement patterns for `EnhancedStatList.java`. It adds:
//! - Output format selection (replacement, summary, JSON Lines)
//! - Entry filtering by array name
//! - Optional TOML configuration and output file

use anyhow::{Context, Result};
use clap::Parser;
use stat_patch::{EntryTable, Generator, OutputFormat};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

mod config;

/// Stat Patch - Print replacement snippets for the EnhancedStatList arrays
#[derive(Parser, Debug)]
#[command(name = "stat-patch-cli")]
#[command(about = "Print replacement snippets for the EnhancedStatList arrays", long_about = None)]
#[command(version)]
struct Args {
    /// Output format: replacement, summary or json
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Only generate the named array (can be repeated)
    #[arg(short, long, value_name = "NAME")]
    entry: Vec<String>,

    /// Output file for generated text (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List entry names and exit
    #[arg(short, long)]
    list: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Stat Patch CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using stat-patch library v{}", stat_patch::VERSION);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    run(&args, &mut stdout)?;

    Ok(())
}

/// Resolve config and flags, then generate into stdout or the output file
fn run<W: Write>(args: &Args, stdout: &mut W) -> Result<usize> {
    let mut app_config = match &args.config {
        Some(config_path) => {
            log::info!("Loading configuration from: {:?}", config_path);
            config::load_config(config_path)?
        }
        None => config::AppConfig::default(),
    };

    // Flags override the config file
    if let Some(format) = args.format {
        app_config.generator.format = format;
    }

    let mut table = app_config.entry_table()?;
    if !args.entry.is_empty() {
        table = table
            .filtered(&args.entry)
            .context("Unknown entry requested with --entry")?;
    }

    if args.list {
        return list_entries(&table, stdout);
    }

    let generator = Generator::new(app_config.generator);
    let output_path = args.output.as_ref().or(app_config.output.path.as_ref());

    let written = match output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            let mut writer = BufWriter::new(file);
            let written = generator.write_to(&table, &mut writer)?;
            log::info!("Wrote {} blocks to {:?}", written, path);
            written
        }
        None => generator.write_to(&table, stdout)?,
    };

    Ok(written)
}

/// Print one entry name per line
fn list_entries<W: Write>(table: &EntryTable, out: &mut W) -> Result<usize> {
    for name in table.names() {
        writeln!(out, "{}", name)?;
    }
    out.flush()?;
    Ok(table.len())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run_to_string(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_no_arguments_prints_replacement_patterns() {
        let output = run_to_string(&["stat-patch-cli"]).unwrap();
        assert!(output.starts_with("=== Replacement patterns for EnhancedStatList.java ===\n\n"));
        assert_eq!(output.matches("// For ").count(), 17);

        let mut expected = Vec::new();
        stat_patch::generate(&mut expected).unwrap();
        assert_eq!(output.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_format_and_entry_flags() {
        let output = run_to_string(&[
            "stat-patch-cli",
            "--format",
            "summary",
            "-e",
            "ENHANCED_MAXMAG",
            "-e",
            "ENHANCED_PUSH",
        ])
        .unwrap();

        let lines: Vec<&str> = output.lines().filter(|l| l.contains(" (add): ")).collect();
        assert_eq!(
            lines,
            vec![
                "ENHANCED_PUSH (add): 2, 3, 4, 2, 3",
                "ENHANCED_MAXMAG (add): 13500, 12500, 11500, 14000, 13000",
            ]
        );
    }

    #[test]
    fn test_unknown_entry_fails() {
        assert!(run_to_string(&["stat-patch-cli", "--entry", "ENHANCED_HANDB"]).is_err());
    }

    #[test]
    fn test_invalid_format_rejected_by_parser() {
        assert!(Args::try_parse_from(["stat-patch-cli", "--format", "html"]).is_err());
    }

    #[test]
    fn test_list_entries() {
        let output = run_to_string(&["stat-patch-cli", "--list"]).unwrap();
        let names: Vec<&str> = output.lines().collect();
        assert_eq!(names.len(), 17);
        assert_eq!(names[0], "ENHANCED_BOUNCE");
        assert_eq!(names[16], "ENHANCED_ENGINE");
    }

    #[test]
    fn test_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patches.txt");
        let path_str = path.to_str().unwrap();

        let stdout = run_to_string(&["stat-patch-cli", "-o", path_str, "-f", "json"]).unwrap();
        assert!(stdout.is_empty());

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 17);
    }

    #[test]
    fn test_config_file_with_flag_override() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
                [generator]
                format = "json"

                [[entries]]
                name = "ENHANCED_GRIP"
                old_fragment = "27.0F, 28.5F"
                new_fragment = "26.0F, 28.0F, 29.0F, 27.0F, 27.5F"
            "#,
        )
        .unwrap();

        let output = run_to_string(&[
            "stat-patch-cli",
            "--config",
            config_path.to_str().unwrap(),
            "--format",
            "replacement",
        ])
        .unwrap();

        assert!(output.starts_with("=== Replacement patterns for EnhancedStatList.java ===\n\n"));
        assert!(output.contains("// For ENHANCED_GRIP:\n"));
        assert!(output.contains("        27.0F, 28.5F,\n"));
        assert_eq!(output.matches("// For ").count(), 1);
    }
}
