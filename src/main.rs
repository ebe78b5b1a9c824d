use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mcq_gen::{App, Config, DEFAULT_QUESTION_COUNT, GenerationRequest, McqGenerator, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Generate multiple-choice questions from text", long_about = None)]
struct Args {
    /// Text file to prefill the editor with ("-" reads stdin)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Number of questions to generate (1-10)
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_QUESTION_COUNT,
          value_parser = clap::value_parser!(u8).range(1..=10))]
    count: u8,

    /// Gemini model, overrides GEMINI_MODEL
    #[arg(long, global = true)]
    model: Option<String>,

    /// Request timeout in seconds, overrides MCQ_TIMEOUT_SECS
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Write logs to this file while the TUI is running
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate once without the TUI and print the questions
    Generate {
        /// Print the valid questions as a JSON array
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Generate { json }) => {
            init_stderr_logging();
            let config = load_config(&args)?;
            let source = read_source(args.input.as_deref())?
                .context("--input is required for generate")?;
            run_headless(&config, source, args.count, json).await
        }
        None => {
            if let Some(path) = &args.log_file {
                init_file_logging(path)?;
            }
            let config = load_config(&args)?;
            let source = read_source(args.input.as_deref())?.unwrap_or_default();
            let generator = McqGenerator::new(&config)?;

            tracing::info!(model = generator.model(), "starting TUI");
            Session::new(App::new(source, args.count), generator)
                .run()
                .await?;
            Ok(())
        }
    }
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if let Some(secs) = args.timeout {
        config.timeout = std::time::Duration::from_secs(secs);
    }
    Ok(config)
}

fn read_source(path: Option<&Path>) -> anyhow::Result<Option<String>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };
    Ok(Some(text))
}

async fn run_headless(config: &Config, source: String, count: u8, json: bool) -> anyhow::Result<()> {
    let request = GenerationRequest::new(source, count)?;
    let generator = McqGenerator::new(config)?;
    let batch = generator.generate(&request).await?;

    for line in mcq_gen::report::issue_lines(&batch) {
        eprintln!("{}", line);
    }
    if let Some(warning) = batch.warning() {
        anyhow::bail!(warning);
    }

    if json {
        println!("{}", mcq_gen::report::format_json(&batch)?);
    } else {
        print!("{}", mcq_gen::report::format_review(&batch));
    }

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mcq_gen=info"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

fn init_file_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
