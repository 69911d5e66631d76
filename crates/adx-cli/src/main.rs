use adx_config::{Config, LanguageConfig};
use adx_engine::{
    ApiDocument, ClassDocument, DEFAULT_NAMESPACE_SEPARATOR, DocstringKind, Grammar, SourceFilter,
    combine_documents, extract_classes, io, normalize,
};
use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "adx")]
#[command(version)]
#[command(about = "Extracts API documentation from structured source comments", long_about = None)]
struct Cli {
    /// Source language, as named in the language configuration
    #[arg(long, required_unless_present = "list_languages")]
    lang: Option<String>,

    /// Source directory; repeat to read several, in order
    #[arg(long, default_value = ".")]
    src: Vec<PathBuf>,

    /// Language configuration file (defaults to ~/.config/adx/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Intermediate document to append before normalizing; repeatable
    #[arg(long)]
    combine: Vec<PathBuf>,

    /// Document title
    #[arg(long, default_value = "")]
    title: String,

    /// Output file; JSON goes to stdout when absent
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write the flat class list for a later --combine instead of the
    /// namespaced document
    #[arg(long)]
    intermediate: bool,

    /// Print the configured language names and exit
    #[arg(long)]
    list_languages: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    if cli.list_languages {
        for name in config.language_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let Some(lang) = cli.lang.as_deref() else {
        bail!("--lang is required");
    };
    let language = config.language(lang)?;
    let grammar = grammar_for(language)
        .with_context(|| format!("Invalid docstring configuration for {lang}"))?;
    let filter = SourceFilter::new(language.extensions.clone(), language.exclude_patterns()?);

    let sources = io::gather_sources(&cli.src, &filter)?;
    let classes = extract_classes(&sources.content, &grammar);
    log::info!("Extracted {} classes from {} files", classes.len(), sources.files.len());

    let stored = io::read_class_documents(&cli.combine)?;
    let classes = combine_documents(classes, stored);

    if cli.intermediate {
        return emit(&ClassDocument::new(classes), cli.out.as_deref());
    }

    let separator = language
        .namespace_separator
        .as_deref()
        .unwrap_or(DEFAULT_NAMESPACE_SEPARATOR);
    let document = ApiDocument {
        title: cli.title.clone(),
        namespaces: normalize(classes, separator),
    };
    log::info!(
        "{} classes in {} namespaces",
        document.namespaces.class_count(),
        document.namespaces.names().count()
    );
    emit(&document, cli.out.as_deref())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.to_path_buf()),
        None => Config::config_path(),
    };
    if explicit.is_some() && !path.exists() {
        bail!("Config file not found: {}", path.display());
    }
    log::debug!("Config path: {}", path.display());
    Ok(Config::load_or_builtin(&path)?)
}

fn grammar_for(language: &LanguageConfig) -> Result<Grammar> {
    let docstrings = &language.docstrings;
    let kind = match docstrings.kind {
        adx_config::DocstringKind::Block => DocstringKind::Block,
        adx_config::DocstringKind::Line => DocstringKind::Line,
    };
    Ok(Grammar::from_parts(
        kind,
        &docstrings.format,
        docstrings.parameter_pattern.as_deref(),
        docstrings.return_pattern.as_deref(),
    )?)
}

fn emit<T: Serialize>(document: &T, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            io::write_json(path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{}", io::to_json(document)?),
    }
    Ok(())
}
