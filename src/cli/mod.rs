use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use comfy_table::Cell;
use serde::Serialize;

use crate::config::{GeneratorConfig, resolve_config};
use crate::generate::{GeneratedOperation, generate_from_sdl};
use crate::operation::OperationKind;
use crate::output::{WriteReport, write_operations};

mod render;
use render::{TableRow, format_summary};

#[derive(Debug, Clone, Copy, ValueEnum, Serialize, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "better-gql-generator")]
#[command(about = "Generate GraphQL operations from a local SDL schema", version)]
pub struct Cli {
    /// Path to the GraphQL schema file (SDL).
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Output directory for generated files.
    #[arg(short, long, default_value = "generated-gql")]
    pub out: PathBuf,

    /// JSON config file (defaults to `gql-generator.json` when present).
    #[arg(long, env = "GQL_GENERATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip Query operations.
    #[arg(long)]
    pub no_queries: bool,

    /// Skip Mutation operations.
    #[arg(long)]
    pub no_mutations: bool,

    /// Generate Subscription operations.
    #[arg(long)]
    pub subscriptions: bool,

    /// Maximum nesting depth of generated selection sets (at most 10).
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Keep AWS AppSync directives instead of stripping them before parsing.
    #[arg(long)]
    pub no_strip_directives: bool,

    /// Print the operations instead of writing files.
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Suppress logs and the summary.
    #[arg(long, conflicts_with = "verbose")]
    pub silent: bool,

    /// Show debug output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Config file values with command-line flags applied on top.
    pub fn effective_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = resolve_config(self.config.as_deref())?;
        if self.no_queries {
            config.generate_queries = false;
        }
        if self.no_mutations {
            config.generate_mutations = false;
        }
        if self.subscriptions {
            config.generate_subscriptions = true;
        }
        if let Some(depth) = self.max_depth {
            config.max_recursion_depth = depth;
        }
        if self.no_strip_directives {
            config.strip_aws_directives = false;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.effective_config()?;

    tracing::info!("using schema from {}", cli.schema.display());
    if config.strip_aws_directives {
        tracing::info!("AWS AppSync directives will be stripped before parsing");
    }

    let sdl = fs::read_to_string(&cli.schema)
        .with_context(|| format!("failed to read schema {}", cli.schema.display()))?;
    let operations = generate_from_sdl(&sdl, &config)
        .with_context(|| format!("invalid schema {}", cli.schema.display()))?;

    if cli.dry_run {
        print!("{}", render_dry_run(&operations));
        return Ok(());
    }

    tracing::info!("output directory: {}", cli.out.display());
    let report = write_operations(&cli.out, &operations)?;
    if !report.failed.is_empty() {
        tracing::warn!(
            "{} of {} operations could not be written",
            report.failed.len(),
            operations.len()
        );
    }
    tracing::info!("generated {} operation files", report.written.len());

    if !cli.silent {
        print_report(&cli, &report)?;
    }
    Ok(())
}

/// Every operation preceded by a `# <dir>/<file>` header, separated by blank
/// lines.
pub fn render_dry_run(operations: &[GeneratedOperation]) -> String {
    let mut out = String::new();
    for (i, op) in operations.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("# {}\n{}\n", op.relative_path(), op.contents));
    }
    out
}

#[derive(Debug, Clone, Serialize)]
struct ReportRow {
    kind: OperationKind,
    field: String,
    path: String,
    status: String,
}

impl TableRow for ReportRow {
    const HEADERS: &'static [&'static str] = &["kind", "field", "path", "status"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::new(self.kind),
            Cell::new(&self.field),
            Cell::new(&self.path),
            Cell::new(&self.status),
        ]
    }
}

fn print_report(cli: &Cli, report: &WriteReport) -> anyhow::Result<()> {
    let written = report.written.iter().map(|w| ReportRow {
        kind: w.kind,
        field: w.field.clone(),
        path: w.path.display().to_string(),
        status: "written".to_string(),
    });
    let failed = report.failed.iter().map(|f| ReportRow {
        kind: f.kind,
        field: f.field.clone(),
        path: f.path.display().to_string(),
        status: format!("failed: {}", f.error),
    });
    let summary = format_summary(cli, written.chain(failed).collect())?;
    println!("{summary}");
    Ok(())
}

fn should_color(cli: &Cli) -> bool {
    match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("better-gql-generator").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn flags_override_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = tmp.path().join("c.json");
        fs::write(&cfg, "{}").unwrap();
        let cli = parse(&[
            "--schema",
            "s.graphql",
            "--config",
            cfg.to_str().unwrap(),
            "--no-mutations",
            "--subscriptions",
            "--max-depth",
            "1",
        ]);
        let config = cli.effective_config().unwrap();
        assert!(config.generate_queries);
        assert!(!config.generate_mutations);
        assert!(config.generate_subscriptions);
        assert_eq!(config.max_recursion_depth, 1);
        assert_eq!(cli.out, PathBuf::from("generated-gql"));
    }

    #[test]
    fn file_values_survive_without_flags() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = tmp.path().join("c.json");
        fs::write(&cfg, r#"{"generateQueries": false, "stripAwsDirectives": false}"#).unwrap();
        let cli = parse(&["-s", "s.graphql", "--config", cfg.to_str().unwrap()]);
        let config = cli.effective_config().unwrap();
        assert!(!config.generate_queries);
        assert!(!config.strip_aws_directives);
    }

    #[test]
    fn silent_and_verbose_conflict() {
        let res = Cli::try_parse_from(["x", "-s", "a", "--silent", "--verbose"]);
        assert!(res.is_err());
    }

    #[test]
    fn dry_run_separates_documents() {
        let ops = vec![
            GeneratedOperation {
                kind: OperationKind::Query,
                field_name: "a".into(),
                file_name: "a.graphql".into(),
                contents: "query A {\n  a\n}".into(),
            },
            GeneratedOperation {
                kind: OperationKind::Mutation,
                field_name: "b".into(),
                file_name: "b.graphql".into(),
                contents: "mutation B {\n  b\n}".into(),
            },
        ];
        assert_eq!(
            render_dry_run(&ops),
            "# queries/a.graphql\nquery A {\n  a\n}\n\n# mutations/b.graphql\nmutation B {\n  b\n}\n"
        );
    }
}
