use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use tube_brief::{
    server::{self, AppState},
    tracing::init_tracing_subscriber,
    BriefPipelineBuilder, HfInferenceClient, SummarizerConfig, WhisperCli, YtDlpFetcher,
};
use ytdlp_fetch::YtDlp;

#[derive(Parser)]
#[command(name = "tube-brief", about = "Video audio -> transcript -> summary pipeline")]
struct Cli {
    /// Hugging Face API key
    #[arg(long, env = "HF_API_KEY")]
    hf_api_key: String,

    /// Summarization model identifier
    #[arg(long, env = "SUMMARIZER_MODEL", default_value = "facebook/bart-large-cnn")]
    model: String,

    /// Maximum transcript chunk size in characters
    #[arg(long, env = "CHUNK_SIZE", default_value = "1000")]
    chunk_size: usize,

    /// Path to yt-dlp cookies file
    #[arg(long, env = "YTDLP_COOKIES_PATH")]
    cookies_path: Option<PathBuf>,

    /// Working directory for stage artifacts
    #[arg(long, default_value = "/var/tmp/tube-brief")]
    workdir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the three-button web UI
    Serve {
        #[arg(long, env = "PORT", default_value = "8080")]
        port: u16,
    },
    /// Run the full pipeline once and print the summary
    Run { video_url: String },
}

fn build_pipeline(cli: &Cli) -> server::ProductionPipeline {
    let yt_dlp = YtDlp::new_with_cookies(cli.cookies_path.clone());
    let summarizer =
        HfInferenceClient::new(SummarizerConfig::new(&cli.hf_api_key).with_model(&cli.model));

    BriefPipelineBuilder::new(&cli.workdir)
        .fetcher(YtDlpFetcher(yt_dlp))
        .transcriber(WhisperCli::new(cli.workdir.join("whisper")))
        .summarizer(summarizer)
        .max_chunk_chars(cli.chunk_size)
        .build()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let pipeline = build_pipeline(&cli);

    match cli.command {
        Command::Serve { port } => {
            tracing::info!(port, "Starting web UI...");
            server::serve(
                AppState {
                    pipeline: Arc::new(pipeline),
                },
                port,
            )
            .await?;
        }
        Command::Run { video_url } => {
            tracing::info!(%video_url, "Running pipeline once...");
            let summary = pipeline.run(&video_url).await?;
            if summary.chunks_failed() > 0 || summary.chunks_skipped > 0 {
                tracing::warn!(
                    failed = summary.chunks_failed(),
                    skipped = summary.chunks_skipped,
                    total = summary.chunks_total,
                    "Some chunks contributed no summary"
                );
            }
            println!("{}", summary.text);
        }
    }

    Ok(())
}
