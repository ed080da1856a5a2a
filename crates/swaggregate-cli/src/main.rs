// Swaggregate CLI entry point

use clap::Parser;
use swaggregate_cli::{output, router};

fn main() {
    // Initialize tracing for logging; library-level detail stays below the
    // threshold so a successful run prints nothing but the result line
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cli = router::Cli::parse();
    if let Err(e) = router::run(&cli) {
        output::print_error(&e.user_message());
        std::process::exit(1);
    }

    output::print_success(&format!("Wrote {}", cli.out));
}
