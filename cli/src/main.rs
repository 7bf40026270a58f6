//! CLI entrypoint for petdesk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use petdesk_application::{
    AnswerCustomizer, AnswerPipeline, EvaluationProgress, IntentClassifier, NoProgress,
    NoTraceRecorder, PipelineOrchestrator, RunExperimentUseCase, TraceRecorder,
};
use petdesk_domain::{
    AnswerCatalog, ConfigIssue, IntentCatalog, OutputFormat, check_catalog_consistency,
    has_errors,
};
use petdesk_infrastructure::{
    CatalogLoader, ConfigLoader, FileConfig, JsonReportStore, JsonlTraceRecorder,
    LocalDatasetStore, OpenAiGateway,
};
use petdesk_presentation::{
    Cli, Command, ConsoleFormatter, ExperimentArgs, ProgressReporter, formatter_for,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    // .env must be in place before configuration reads the environment
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;
    if let Some(problem) = dotenv_problem(&dotenv) {
        warn!("Ignoring .env file: {}", problem);
    }
    info!("Starting petdesk");

    let Some(command) = cli.command else {
        bail!("No command given. Try `petdesk ask <QUESTION>` or `petdesk experiment`.");
    };

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .context("Failed to load configuration")?;

    if cli.strict_catalog {
        config.catalog.strict = true;
    }
    if let Command::Experiment(args) = &command {
        apply_experiment_overrides(&mut config, args);
    }

    let issues = config.validate();
    report_issues(&issues);
    if has_errors(&issues) {
        bail!("Invalid configuration");
    }

    let (intents, answers) = load_catalogs(&config)?;

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiGateway::from_config(&config.providers.openai)?);
    let params = config.generation_params();
    let trace_recorder = trace_recorder(&config);

    let orchestrator = Arc::new(
        PipelineOrchestrator::new(
            IntentClassifier::new(gateway.clone(), intents).with_params(params.clone()),
            AnswerCustomizer::new(gateway, answers).with_params(params),
        )
        .with_trace_recorder(trace_recorder),
    );

    match command {
        Command::Ask(args) => {
            let format = args.output.map(Into::into).unwrap_or(config.output.format);
            let outcome = orchestrator.run(&args.question).await;

            println!("{}", formatter_for(format).format_outcome(&outcome));
            Ok(if outcome.is_answered() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Experiment(args) => {
            let format = args.output.map(Into::into).unwrap_or(config.output.format);
            let (experiment, _) = config.experiment.to_params();

            let use_case = RunExperimentUseCase::new(
                orchestrator,
                Arc::new(LocalDatasetStore::new(&config.output.datasets_dir)),
                Arc::new(JsonReportStore::new(&config.output.results_dir)),
            );

            let progress: Box<dyn EvaluationProgress> =
                if cli.quiet || format == OutputFormat::Json {
                    Box::new(NoProgress)
                } else {
                    Box::new(ProgressReporter::new())
                };

            let summary = use_case.execute(&experiment, progress.as_ref()).await?;

            println!("{}", formatter_for(format).format_summary(&summary));
            Ok(ExitCode::from(summary.verdict().exit_code()))
        }
    }
}

/// A `.env` file that exists but could not be loaded; a missing one is fine
fn dotenv_problem(result: &dotenvy::Result<PathBuf>) -> Option<&dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

/// Initialize logging based on verbosity level, optionally mirrored to a file
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let (file, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, "petdesk.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new(level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .init();

    Ok(guard)
}

fn apply_experiment_overrides(config: &mut FileConfig, args: &ExperimentArgs) {
    if let Some(name) = &args.name {
        config.experiment.name = name.clone();
    }
    if let Some(dataset) = &args.dataset {
        config.experiment.dataset = dataset.clone();
    }
    if let Some(threshold) = args.threshold {
        config.experiment.success_threshold = threshold;
    }
    if let Some(concurrency) = args.concurrency {
        config.experiment.concurrency = concurrency;
    }
}

fn report_issues(issues: &[ConfigIssue]) {
    if !issues.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_issues(issues));
    }
}

fn load_catalogs(config: &FileConfig) -> Result<(Arc<IntentCatalog>, Arc<AnswerCatalog>)> {
    let intents = CatalogLoader::load_intents(&config.catalog.intents)?;
    let answers = CatalogLoader::load_answers(&config.catalog.answers)?;

    let mut issues = check_catalog_consistency(&intents, &answers);
    if config.catalog.strict {
        issues = issues.into_iter().map(|issue| issue.escalate()).collect();
    }
    report_issues(&issues);
    if has_errors(&issues) {
        bail!("Catalogs are inconsistent (strict mode)");
    }

    info!(
        "Loaded {} intents and {} prepared answers",
        intents.len(),
        answers.len()
    );
    Ok((Arc::new(intents), Arc::new(answers)))
}

fn trace_recorder(config: &FileConfig) -> Arc<dyn TraceRecorder> {
    if !config.output.record_traces {
        return Arc::new(NoTraceRecorder);
    }
    match JsonlTraceRecorder::new(&config.output.trace_log) {
        Some(recorder) => Arc::new(recorder),
        None => {
            warn!("Pipeline traces disabled");
            Arc::new(NoTraceRecorder)
        }
    }
}
