/// Loudcheck - flags loud audio before it reaches an audience
use clap::Parser;
use loudcheck_analysis::{analyze, AnalysisConfig};
use loudcheck_cli::{render, FfmpegDecoder};
use loudcheck_wave::WavAudio;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "loudcheck")]
#[command(about = "Checks audio for loudness anomalies: peaks, high average volume, sudden rises", long_about = None)]
struct Cli {
    /// Input path or URL, decoded through FFmpeg
    #[arg(short, long)]
    input: String,

    /// Peak detection threshold in dB
    #[arg(long, default_value_t = AnalysisConfig::DEFAULT_PEAK_THRESHOLD_DB, allow_negative_numbers = true)]
    peak: f64,

    /// Average volume threshold in dB
    #[arg(long, default_value_t = AnalysisConfig::DEFAULT_AVERAGE_THRESHOLD_DB, allow_negative_numbers = true)]
    average: f64,

    /// Sudden volume rise threshold in dB
    #[arg(long, default_value_t = AnalysisConfig::DEFAULT_SUDDEN_THRESHOLD_DB, allow_negative_numbers = true)]
    sudden: f64,

    /// Analysis window duration in milliseconds (1-1000)
    #[arg(long, default_value_t = AnalysisConfig::DEFAULT_WINDOW_MS)]
    window: u32,

    /// Disable peak volume detection
    #[arg(long)]
    disable_peak: bool,

    /// Disable average volume detection
    #[arg(long)]
    disable_average: bool,

    /// Disable sudden volume rise detection
    #[arg(long)]
    disable_sudden: bool,

    /// Print 1 if any detector flagged the input, 0 otherwise
    #[arg(long, conflicts_with = "json")]
    boolean: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// FFmpeg executable to decode with
    #[arg(long, env = "LOUDCHECK_FFMPEG", default_value = "ffmpeg")]
    ffmpeg: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loudcheck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AnalysisConfig {
        window_ms: cli.window,
        peak_threshold_db: cli.peak,
        average_threshold_db: cli.average,
        sudden_threshold_db: cli.sudden,
        peak_enabled: !cli.disable_peak,
        average_enabled: !cli.disable_average,
        sudden_enabled: !cli.disable_sudden,
    };
    tracing::debug!("Analysis configuration: {:?}", config);

    let decoder = FfmpegDecoder::new(cli.ffmpeg);
    let bytes = decoder.decode_to_wav(&cli.input).await?;

    let audio = WavAudio::parse(&bytes)?;
    tracing::info!(
        "Parsed {} Hz, {} channel(s), {:.2}s of audio",
        audio.format().sample_rate,
        audio.format().channels,
        audio.duration_secs()
    );

    let report = analyze(&audio, &config)?;

    if cli.boolean {
        println!("{}", render::render_boolean(&report));
    } else if cli.json {
        println!("{}", render::render_json(&report)?);
    } else {
        print!("{}", render::render_text(&report));
    }

    Ok(())
}
