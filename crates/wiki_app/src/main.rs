mod platform;

use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use wiki_core::PipelineTiming;
use wiki_logging::LogDestination;

#[derive(Parser, Debug)]
#[command(
    name = "channelwiki",
    about = "Turn a YouTube channel into a browsable encyclopaedia"
)]
struct Cli {
    /// Channel name or handle to process right away
    channel: Option<String>,

    /// Where log output is written
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    log: LogTarget,

    /// Most verbose level that gets logged
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Milliseconds between pipeline stage ticks
    #[arg(long, default_value_t = 1200)]
    tick_ms: u64,

    /// Milliseconds to linger on the finished pipeline before browsing
    #[arg(long, default_value_t = 800)]
    settle_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogTarget {
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    wiki_logging::initialize(cli.log.into(), cli.log_level);

    let timing = PipelineTiming {
        tick_interval: Duration::from_millis(cli.tick_ms.max(1)),
        settle_delay: Duration::from_millis(cli.settle_ms),
    };
    platform::run_app(platform::AppOptions {
        channel: cli.channel,
        timing,
    })
}
