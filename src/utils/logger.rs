use std::io;
use tracing::Subscriber;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type StderrLayer<S> = fmt::Layer<S, DefaultFields, Format, fn() -> io::Stderr>;

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "program_catalogue=debug,info"
    } else {
        "program_catalogue=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

// Logs go to stderr so `--stdout` exports stay clean.
fn stderr_layer<S>() -> StderrLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(io::stderr as fn() -> io::Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// Installs the global subscriber: compact lines, or JSON lines when `json` is set.
pub fn init_cli_logger(verbose: bool, json: bool) {
    let registry = tracing_subscriber::registry().with(env_filter(verbose));

    if json {
        registry.with(stderr_layer().json()).init();
    } else {
        registry.with(stderr_layer().compact()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_defaults() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(env_filter(false).to_string().contains("program_catalogue=info"));
        assert!(env_filter(true).to_string().contains("program_catalogue=debug"));
    }
}
