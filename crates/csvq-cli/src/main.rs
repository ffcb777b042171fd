//! csvq CLI: run a pipeline of table steps over delimited files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use csvq_core::config::{parse_delimiter, EngineConfig, OutputFormat};
use csvq_core::table::Table;
use csvq_exec::{FileSource, Runner};
use csvq_io::{CsvWriter, JsonlWriter};
use csvq_planner::{parse_commands, parse_yaml_pipeline, Command, PipelineConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "csvq", version = csvq_core::VERSION)]
#[command(
    about = "Query delimited text tables: FROM, SELECT, TAKE, ORDERBY, JOIN, COUNTBY",
    long_about = None
)]
struct Cli {
    /// Path to a YAML pipeline file (instead of command tokens)
    #[arg(short, long, conflicts_with = "commands")]
    pipeline: Option<PathBuf>,

    /// Input field delimiter, e.g. ';' or 'tab' (overrides config)
    #[arg(long)]
    delimiter: Option<String>,

    /// Output field delimiter (overrides config)
    #[arg(long)]
    output_delimiter: Option<String>,

    /// Trim whitespace around input fields
    #[arg(long)]
    trim: bool,

    /// Output format: csv or jsonl (overrides config)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Print the parsed pipeline and exit without running it
    #[arg(long)]
    explain: bool,

    /// Pipeline steps, e.g. FROM people.csv SELECT name,age ORDERBY age TAKE 3
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    commands: Vec<String>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = run(cli).and_then(|out| {
        std::io::stdout().lock().write_all(&out)?;
        Ok(())
    });
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the pipeline and return the rendered output. Nothing reaches stdout
/// unless every step and the rendering succeed.
fn run(cli: Cli) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let (commands, pipeline_cfg, base_dir) = match &cli.pipeline {
        Some(path) => {
            let yaml_content = fs::read_to_string(path)
                .map_err(|e| format!("unable to read pipeline {}: {}", path.display(), e))?;
            let parsed = parse_yaml_pipeline(&yaml_content)?;
            (parsed.commands, parsed.config, path.parent().map(Path::to_path_buf))
        }
        None => {
            if cli.commands.is_empty() {
                return Err("no commands given (try: csvq FROM file.csv)".into());
            }
            (parse_commands(&cli.commands)?, PipelineConfig::default(), None)
        }
    };

    let mut config = EngineConfig::from_env();
    apply_pipeline_config(&mut config, &pipeline_cfg)?;
    apply_cli_overrides(&mut config, &cli)?;
    tracing::debug!(?config, steps = commands.len(), "configured");

    if cli.explain {
        return Ok(explain(&commands, &config).into_bytes());
    }

    let mut source = FileSource::new(&config);
    if let Some(dir) = base_dir {
        source = source.with_base_dir(dir);
    }
    let table = Runner::new(&source).run(&commands)?;
    Ok(render(&table, &config)?)
}

fn apply_pipeline_config(
    cfg: &mut EngineConfig,
    doc: &PipelineConfig,
) -> Result<(), csvq_core::Error> {
    if let Some(d) = &doc.delimiter {
        cfg.delimiter = parse_delimiter(d)?;
    }
    if let Some(d) = &doc.output_delimiter {
        cfg.output_delimiter = parse_delimiter(d)?;
    }
    if let Some(trim) = doc.trim {
        cfg.trim_fields = trim;
    }
    if let Some(format) = doc.format {
        cfg.output_format = format;
    }
    Ok(())
}

fn apply_cli_overrides(cfg: &mut EngineConfig, cli: &Cli) -> Result<(), csvq_core::Error> {
    if let Some(d) = &cli.delimiter {
        cfg.delimiter = parse_delimiter(d)?;
    }
    if let Some(d) = &cli.output_delimiter {
        cfg.output_delimiter = parse_delimiter(d)?;
    }
    if cli.trim {
        cfg.trim_fields = true;
    }
    if let Some(format) = cli.format {
        cfg.output_format = format;
    }
    Ok(())
}

fn render(table: &Table, cfg: &EngineConfig) -> Result<Vec<u8>, csvq_io::Error> {
    let mut buf = Vec::new();
    match cfg.output_format {
        OutputFormat::Csv => {
            CsvWriter::to_writer(&mut buf, cfg.output_delimiter).write_table(table)?
        }
        OutputFormat::Jsonl => JsonlWriter::to_writer(&mut buf).write_table(table)?,
    }
    Ok(buf)
}

fn explain(commands: &[Command], cfg: &EngineConfig) -> String {
    let mut out = String::new();
    out.push_str("Pipeline\n");
    out.push_str("========\n");
    for (i, cmd) in commands.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, cmd));
    }
    out.push('\n');
    out.push_str(&format!("Input delimiter: {:?}\n", char::from(cfg.delimiter)));
    out.push_str(&format!(
        "Output: {} (delimiter {:?})\n",
        cfg.output_format,
        char::from(cfg.output_delimiter)
    ));
    out.push_str(&format!("Trim fields: {}\n", cfg.trim_fields));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_config_overrides_env_defaults() {
        let mut config = EngineConfig::default();
        let pipeline = PipelineConfig {
            delimiter: Some("tab".into()),
            trim: Some(true),
            format: Some(OutputFormat::Jsonl),
            ..Default::default()
        };
        apply_pipeline_config(&mut config, &pipeline).unwrap();
        assert_eq!(config.delimiter, b'\t');
        assert_eq!(config.output_delimiter, b',');
        assert!(config.trim_fields);
        assert_eq!(config.output_format, OutputFormat::Jsonl);
    }

    #[test]
    fn cli_overrides_higher_priority_than_config() {
        let mut config = EngineConfig::default();
        let pipeline = PipelineConfig {
            delimiter: Some(";".into()),
            ..Default::default()
        };
        apply_pipeline_config(&mut config, &pipeline).unwrap();
        assert_eq!(config.delimiter, b';');

        let cli = Cli::parse_from(["csvq", "--delimiter", "|", "--format", "csv", "FROM", "a.csv"]);
        apply_cli_overrides(&mut config, &cli).unwrap();
        assert_eq!(config.delimiter, b'|');
        assert_eq!(config.output_format, OutputFormat::Csv);
    }

    #[test]
    fn bad_delimiter_in_pipeline_is_an_error() {
        let mut config = EngineConfig::default();
        let pipeline = PipelineConfig {
            output_delimiter: Some("::".into()),
            ..Default::default()
        };
        assert!(apply_pipeline_config(&mut config, &pipeline).is_err());
    }

    #[test]
    fn trailing_tokens_keep_hyphen_values() {
        let cli = Cli::parse_from(["csvq", "--trim", "FROM", "a.csv", "TAKE", "-1"]);
        assert!(cli.trim);
        assert_eq!(cli.commands, ["FROM", "a.csv", "TAKE", "-1"]);
    }

    #[test]
    fn render_csv_and_jsonl() {
        let table = Table::new(
            vec!["id".into(), "n".into()],
            vec![vec!["1".into(), "x".into()]],
        );
        let mut cfg = EngineConfig {
            output_delimiter: b';',
            ..Default::default()
        };
        assert_eq!(render(&table, &cfg).unwrap(), b"id;n\n1;x\n");

        cfg.output_format = OutputFormat::Jsonl;
        assert_eq!(render(&table, &cfg).unwrap(), b"{\"id\":\"1\",\"n\":\"x\"}\n");
    }

    fn temp_csv(tag: &str, body: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("csvq_cli_{}_{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("people.csv");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn run_renders_only_after_every_step_succeeds() {
        let path = temp_csv("ok", "name,age\nAnn,30\nBob,25\n");
        let file = path.to_string_lossy().to_string();
        let file = file.as_str();

        let cli = Cli::parse_from(["csvq", "FROM", file, "ORDERBY", "age", "SELECT", "name"]);
        assert_eq!(run(cli).unwrap(), b"name\nAnn\nBob\n");

        let cli = Cli::parse_from(["csvq", "FROM", file, "TAKE", "1", "SELECT", "email"]);
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("email"), "{err}");
    }

    #[test]
    fn run_fails_on_unreadable_source_and_bad_tokens() {
        let cli = Cli::parse_from(["csvq", "FROM", "/definitely/not/here.csv"]);
        assert!(run(cli).is_err());

        let cli = Cli::parse_from(["csvq", "FROM", "a.csv", "TAKE", "-1"]);
        assert!(run(cli).is_err());

        let cli = Cli::parse_from(["csvq"]);
        assert!(run(cli).is_err());
    }

    #[test]
    fn explain_lists_steps_in_order() {
        let cmds = parse_commands(&["FROM", "a.csv", "COUNTBY", "city"]).unwrap();
        let text = explain(&cmds, &EngineConfig::default());
        assert!(text.contains("  1. FROM a.csv\n"));
        assert!(text.contains("  2. COUNTBY city\n"));
    }
}
