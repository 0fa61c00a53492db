mod echo;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use summarify_core::{
    ArticleSource, FileSource, HttpSource, JsonConfig, JsonFormatter, OutputSurface, Pipeline, Report, SummarifyConfig,
    TextConfig, TextFormatter, render,
};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the rendered form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Fetch a web article, summarize it and score its sentiment
#[derive(Parser, Debug)]
#[command(name = "summarify")]
#[command(author = "Summarify Contributors")]
#[command(version)]
#[command(about = "Summarize web articles and score their sentiment", long_about = None)]
struct Args {
    /// Article URL; without it, URLs are read from stdin one per line
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Read the article from a local HTML file instead of downloading it
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Output file for a single request (default: stdout)
    #[arg(short, long, value_name = "FILE", requires = "url")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Maximum number of sentences in the summary
    #[arg(long, default_value = "5", value_name = "NUM")]
    sentences: usize,

    /// Wrap text output at this width (0 = no wrapping)
    #[arg(long, default_value = "0", value_name = "COLS")]
    width: usize,

    /// Underline field captions in text output
    #[arg(long)]
    underline: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Where article HTML comes from for this process
enum Source {
    Http(HttpSource),
    File(FileSource),
}

impl ArticleSource for Source {
    async fn download(&self, url: &str) -> summarify_core::Result<String> {
        match self {
            Source::Http(source) => source.download(url).await,
            Source::File(source) => source.download(url).await,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "summarify_core=debug,summarify=debug" } else { "warn" }));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

/// Formatter selected by `--format`
enum Formatter {
    Text(TextFormatter),
    Json(JsonFormatter),
}

impl Formatter {
    fn new(args: &Args) -> Self {
        match args.format {
            OutputFormat::Text => {
                Formatter::Text(TextFormatter::new(TextConfig { line_width: args.width, underline_labels: args.underline }))
            }
            OutputFormat::Json => Formatter::Json(JsonFormatter::new(JsonConfig { pretty: args.url.is_some() })),
        }
    }
}

struct App {
    args: Args,
    pipeline: Pipeline<Source>,
    surface: OutputSurface,
    formatter: Formatter,
}

impl App {
    fn new(args: Args) -> Self {
        let mut builder = SummarifyConfig::builder().timeout(args.timeout).max_sentences(args.sentences);
        if let Some(user_agent) = &args.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let config = builder.build();

        let source = match &args.file {
            Some(path) => Source::File(FileSource::new(path)),
            None => Source::Http(HttpSource::new(config.fetch.clone())),
        };

        let pipeline = Pipeline::with_config(source, config);
        let formatter = Formatter::new(&args);
        Self { args, pipeline, surface: OutputSurface::new(), formatter }
    }

    /// Run one request and return the formatted form.
    async fn request(&mut self, input: &str) -> anyhow::Result<String> {
        let start = Instant::now();
        if self.args.verbose {
            echo::print_step(1, 2, &format!("Summarizing {}", input.trim()));
        }

        let outcome = self.pipeline.run(input).await;
        tracing::debug!(ok = outcome.is_ok(), "request finished");

        if self.args.verbose {
            match &outcome {
                Ok(report) => {
                    echo::print_success("Article summarized");
                    echo::print_report_details(report);
                }
                Err(e) => echo::print_error(&e.to_string()),
            }
            echo::print_timing("Request", start.elapsed());
            echo::print_step(2, 2, "Rendering form");
        }

        render(&outcome, &mut self.surface).context("Failed to render the output form")?;
        self.format(&outcome)
    }

    fn format(&self, outcome: &summarify_core::Result<Report>) -> anyhow::Result<String> {
        match &self.formatter {
            Formatter::Text(formatter) => Ok(formatter.format(&self.surface)),
            Formatter::Json(formatter) => formatter.format(outcome).context("Failed to serialize report"),
        }
    }

    async fn run_once(&mut self, url: &str) -> anyhow::Result<()> {
        let output = self.request(url).await?;

        match &self.args.output {
            Some(path) => {
                fs::write(path, format!("{}\n", output))
                    .with_context(|| format!("Failed to write to file: {}", path.display()))?;
                echo::print_success(&format!("Output written to {}", path.display()));
            }
            None => println!("{}", output),
        }

        Ok(())
    }

    /// Read URLs from stdin until EOF. Slots not rewritten by a failed
    /// request keep the previous request's text.
    async fn run_interactive(&mut self) -> anyhow::Result<()> {
        if self.args.verbose {
            echo::print_info("Enter one article URL per line, Ctrl-D to quit");
        }

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut first = true;

        for line in stdin.lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            let output = self.request(&line).await?;

            if !first && self.args.format == OutputFormat::Text {
                writeln!(stdout, "\n{}\n", "-".repeat(40))?;
            }
            writeln!(stdout, "{}", output)?;
            stdout.flush()?;
            first = false;
        }

        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let url = args.url.clone();
    let mut app = App::new(args);

    match url {
        Some(url) => app.run_once(&url).await,
        None => app.run_interactive().await,
    }
}
