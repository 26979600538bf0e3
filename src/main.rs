use tracing_subscriber::EnvFilter;
use washlog::commands::Cli;
use washlog::msg_error;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = Cli::menu() {
        msg_error!(e);
        std::process::exit(1);
    }
}
