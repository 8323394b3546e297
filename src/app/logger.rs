use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use super::args::{Args, LogFormat};

pub fn init_logging(args: &Args) {
    // RUST_LOG directives first, then our command line level (default: "info")
    let filter =
        EnvFilter::from_default_env().add_directive(LevelFilter::from_level(args.log_level).into());

    // stdout carries the rendered durations
    let trace_sub = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color);

    match args.log_format {
        LogFormat::Structured => trace_sub.json().init(),
        LogFormat::Debug => trace_sub.pretty().init(),
        LogFormat::Text => trace_sub.init(),
    };
}
