use tracing::{Level, Subscriber};
use tracing_subscriber::{fmt::MakeWriter, util::SubscriberInitExt};

/// Formatting subscriber with the fixed INFO level, writing to `writer`.
pub fn subscriber<W>(writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(writer)
        .finish()
}

pub fn init_logging() {
    subscriber(std::io::stderr).init();
}
