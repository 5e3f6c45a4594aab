mod chart;
mod client;
mod relevance;
mod report;
mod trace;

use std::io::{IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::chart::{BarChart, ChartState};
use crate::client::{ClientError, DEFAULT_SERVER, PredictClient};
use crate::relevance::{DEFAULT_THRESHOLD, Gate, KeywordError, builtin_keywords, load_keywords};
use crate::report::{Outcome, ReportMode};

#[derive(Parser, Debug)]
#[command(name = "claimlens", version, about = "Keyword-gated COVID-19 claim classification client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one text and render the confidence chart
    Classify(ClassifyArgs),
    /// Interactive loop: one submission per line, `exit` quits
    Repl(ReplArgs),
    /// Probe the classification server's root banner
    Ping {
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Text to classify
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,
    /// Read the text from a file ("-" reads stdin; stdin is also the default)
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_SERVER)]
    server: String,
    /// Minimum relevance score required before the server is consulted
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f32,
    /// Newline-separated keyword list overriding the builtin set
    #[arg(long)]
    keywords: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ReportMode::Text)]
    mode: ReportMode,
    /// Disable per-category bar colors
    #[arg(long)]
    no_color: bool,
}

#[derive(Args, Debug)]
struct ReplArgs {
    #[arg(long, default_value = DEFAULT_SERVER)]
    server: String,
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f32,
    #[arg(long)]
    keywords: Option<PathBuf>,
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Error)]
enum SubmitError {
    #[error("no text provided")]
    EmptyInput,
    #[error(transparent)]
    Client(#[from] ClientError),
}

fn main() {
    trace::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Classify(args) => run_classify(args),
        Command::Repl(args) => run_repl(args),
        Command::Ping { server } => run_ping(server),
    }
}

fn run_classify(args: ClassifyArgs) -> Result<(), String> {
    let keywords = resolve_keywords(args.keywords.as_deref()).map_err(|e| e.to_string())?;
    let text = read_text(&args).map_err(|e| e.to_string())?;
    let client = PredictClient::new(args.server);
    let mut state = ChartState::new();
    let color = !args.no_color && std::io::stdout().is_terminal();

    match submit(&text, &keywords, args.threshold, &client, &mut state) {
        Ok(outcome) => {
            let rendered = match args.mode {
                ReportMode::Text => report::text::render_text(&outcome, &state, color),
                ReportMode::Json => {
                    let mut s = report::json::render_json(&outcome).map_err(|e| e.to_string())?;
                    s.push('\n');
                    s
                }
            };
            print!("{rendered}");
            Ok(())
        }
        Err(err) => {
            tracing::error!("classification failed: {err}");
            Err(user_message(&err).to_string())
        }
    }
}

fn run_repl(args: ReplArgs) -> Result<(), String> {
    let keywords = resolve_keywords(args.keywords.as_deref()).map_err(|e| e.to_string())?;
    let client = PredictClient::new(args.server);
    let mut state = ChartState::new();
    let color = !args.no_color && std::io::stdout().is_terminal();

    println!("claimlens interactive mode. One submission per line; 'exit' quits.");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush().map_err(|e| e.to_string())?;
        line.clear();
        let n = stdin.read_line(&mut line).map_err(|e| e.to_string())?;
        if n == 0 {
            break;
        }
        let text = line.trim_end_matches(['\r', '\n']);
        if text == "exit" {
            break;
        }
        // Every failure is recovered here; the loop always continues.
        match submit(text, &keywords, args.threshold, &client, &mut state) {
            Ok(outcome) => print!("{}", report::text::render_text(&outcome, &state, color)),
            Err(err) => {
                tracing::error!("submission failed: {err}");
                println!("{}", user_message(&err));
            }
        }
    }
    Ok(())
}

fn run_ping(server: String) -> Result<(), String> {
    let client = PredictClient::new(server);
    let banner = client.probe().map_err(|e| e.to_string())?;
    let pretty = serde_json::to_string_pretty(&banner).map_err(|e| e.to_string())?;
    println!("{pretty}");
    Ok(())
}

/// One submission: empty check, relevance gate, remote classification, chart
/// update. The chart ticket is issued before the request so a superseded
/// response can never overwrite a newer chart.
fn submit(
    text: &str,
    keywords: &[String],
    threshold: f32,
    client: &PredictClient,
    state: &mut ChartState,
) -> Result<Outcome, SubmitError> {
    if text.trim().is_empty() {
        return Err(SubmitError::EmptyInput);
    }
    tracing::debug!("entered text: {text}");

    match relevance::gate(text, keywords, threshold) {
        Gate::BelowThreshold(score) => {
            tracing::debug!("relevance score: {score}");
            state.hide();
            Ok(Outcome::Irrelevant { score })
        }
        Gate::Relevant(score) => {
            tracing::debug!("relevance score: {score}");
            let ticket = state.begin();
            let prediction = client.classify(text)?;
            state.apply(ticket, BarChart::from_probabilities(&prediction.probabilities));
            Ok(Outcome::Classified { score, prediction })
        }
    }
}

fn user_message(err: &SubmitError) -> &'static str {
    match err {
        SubmitError::EmptyInput => "No text provided. Paste some text to classify.",
        SubmitError::Client(ClientError::Transport(_)) => "Server error. Please try again later.",
        SubmitError::Client(ClientError::Malformed) => "Error: Unable to classify text.",
    }
}

fn resolve_keywords(path: Option<&Path>) -> Result<Vec<String>, KeywordError> {
    match path {
        Some(path) => {
            let keywords = load_keywords(path)?;
            tracing::info!("loaded {} keywords from {}", keywords.len(), path.display());
            Ok(keywords)
        }
        None => Ok(builtin_keywords()),
    }
}

fn read_text(args: &ClassifyArgs) -> Result<String, std::io::Error> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    match &args.input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
