use clap::{Parser, Subcommand, ValueEnum};
use gstdoc::template_core::GstinChecksum;
use gstdoc::validation::validate_gstin_with;
use gstdoc::{
    InvoiceInput, InvoicePipeline, PaperSize, PipelineBuilder, PipelineError, TemplateSelector,
};
use itertools::Itertools;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Renders GST invoices into structured documents for a downstream renderer.
#[derive(Debug, Parser)]
#[command(name = "gstdoc", version)]
struct Cli {
    /// Extra template files (*.json) loaded on top of the built-in catalog.
    #[arg(long, global = true)]
    templates_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render an invoice JSON file and print the document tree.
    Render {
        /// Template id, or "default".
        #[arg(long, default_value = "default")]
        template: TemplateSelector,
        #[arg(long)]
        invoice: PathBuf,
        #[arg(long, value_parser = parse_paper)]
        paper: Option<PaperSize>,
        /// Report validation issues as warnings instead of failing.
        #[arg(long)]
        lenient: bool,
        #[arg(long)]
        pretty: bool,
    },
    /// List the template catalog.
    List,
    /// Check a GSTIN's structure and check character.
    ValidateGstin {
        gstin: String,
        #[arg(long, value_enum, default_value_t = Scheme::Iso7064)]
        scheme: Scheme,
    },
    /// Print the inheritance-free layout of a template.
    Resolve {
        #[arg(default_value = "default")]
        template: TemplateSelector,
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scheme {
    Iso7064,
    GstnMod36,
}

impl From<Scheme> for GstinChecksum {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Iso7064 => GstinChecksum::Iso7064Mod37_36,
            Scheme::GstnMod36 => GstinChecksum::GstnMod36,
        }
    }
}

fn parse_paper(s: &str) -> Result<PaperSize, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), PipelineError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

fn pipeline(templates_dir: Option<&PathBuf>, strict: bool) -> Result<InvoicePipeline, PipelineError> {
    let mut builder = PipelineBuilder::new()
        .with_builtin_templates()
        .with_strict_validation(strict);
    if let Some(dir) = templates_dir {
        builder = builder.with_template_dir(dir)?;
    }
    builder.build()
}

fn run(cli: Cli) -> Result<ExitCode, PipelineError> {
    let templates_dir = cli.templates_dir.as_ref();
    match cli.command {
        Command::Render { template, invoice, paper, lenient, pretty } => {
            let pipeline = pipeline(templates_dir, !lenient)?;
            let source = fs::read_to_string(&invoice)?;
            let input: InvoiceInput = serde_json::from_str(&source)?;
            let document = pipeline.render(&template, &input, paper)?;
            print_json(&document, pretty)?;
        }
        Command::List => {
            for entry in pipeline(templates_dir, true)?.list_templates() {
                let def = &entry.definition;
                println!(
                    "{} {:<22} {:<20} [{}] {}",
                    if entry.is_default { "*" } else { " " },
                    def.id,
                    def.requires.title,
                    def.layout.paper.sizes.iter().join(","),
                    def.name
                );
            }
        }
        Command::Resolve { template, pretty } => {
            let layout = pipeline(templates_dir, true)?.resolve(&template)?;
            print_json(&*layout, pretty)?;
        }
        Command::ValidateGstin { gstin, scheme } => {
            let gstin = gstin.trim();
            return Ok(match validate_gstin_with(gstin, scheme.into()) {
                Ok(()) => {
                    println!("{}: valid", gstin);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    println!("{}: {}", gstin, e);
                    ExitCode::FAILURE
                }
            });
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
