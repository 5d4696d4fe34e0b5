//! Subscriber setup shared by the binaries.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {e}");
    }
}
