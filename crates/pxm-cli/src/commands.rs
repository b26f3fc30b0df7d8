use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use tracing::debug;

use pxm_merge::{MergeConfig, MergeEvent, MergeReport, Merger};
use pxm_types::FileDescriptor;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Merge(args) => cmd_merge(args, cli.format),
        Command::Config(args) => cmd_config(args),
    }
}

fn cmd_merge(args: MergeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let active = load_descriptor(&args.active)?;
    let shadow = load_descriptor(&args.shadow)?;

    let outcome = Merger::new(config)
        .merge_file(&active, &shadow)
        .with_context(|| {
            format!(
                "merging {} with {}",
                args.active.display(),
                args.shadow.display()
            )
        })?;

    let json = outcome.merged.to_json_pretty()?;
    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("writing {}", path.display()))?;
            debug!(path = %path.display(), "wrote merged descriptor");
        }
        None => println!("{json}"),
    }

    if args.report {
        // Keep stdout clean for the descriptor when it goes there.
        let rendered = render_report(&outcome.report, format)?;
        if args.output.is_some() {
            print!("{rendered}");
        } else {
            eprint!("{rendered}");
        }
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MergeConfig> {
    let Some(path) = path else {
        return Ok(MergeConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn load_descriptor(path: &Path) -> anyhow::Result<FileDescriptor> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    FileDescriptor::from_json(&text)
        .with_context(|| format!("parsing descriptor {}", path.display()))
}

fn render_report(report: &MergeReport, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(report)?));
    }

    let mut out = Vec::new();
    for event in &report.events {
        let tag = match event {
            MergeEvent::Recovered { .. } => "recovered".green(),
            MergeEvent::RestoredChild { .. } => "restored".green(),
            MergeEvent::Renamed { .. } => "renamed".cyan(),
            MergeEvent::Dropped { .. } => "dropped".yellow(),
        };
        writeln!(out, "  {tag:>9} {event}")?;
    }
    writeln!(
        out,
        "{} {} recovered, {} restored, {} renamed, {} dropped",
        "✓".green().bold(),
        report.recovered().to_string().bold(),
        report.restored_children().to_string().bold(),
        report.renamed().to_string().bold(),
        report.dropped().to_string().bold(),
    )?;
    Ok(String::from_utf8(out)?)
}
