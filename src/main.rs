//! Relayscout - sample live Tor relays from the Onionoo directory

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use relayscout::{Config, RelayService};

/// Reply shown when the directory cannot be fetched.
const UNAVAILABLE_MESSAGE: &str = "The list of relays is not available. Try later";

fn main() {
    let args = Args::parse();

    if args.version {
        println!("relayscout v{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let log_level = if config.debug {
        Level::DEBUG
    } else {
        Level::ERROR
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let max_count = args.count.unwrap_or(config.relays_number);
    let timeout_secs = args.timeout.unwrap_or(config.request_timeout_secs);

    info!(
        "relayscout v{} requesting {} relays",
        env!("CARGO_PKG_VERSION"),
        max_count
    );

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    let service = RelayService::new();
    match rt.block_on(service.fetch_and_select(max_count, timeout_secs)) {
        Ok(document) => println!("{}", document),
        Err(e) => {
            error!("relay selection failed: {}", e);
            eprintln!("{}", UNAVAILABLE_MESSAGE);
            std::process::exit(1);
        }
    }
}

/// Command line arguments
struct Args {
    count: Option<usize>,
    timeout: Option<u64>,
    version: bool,
}

impl Args {
    fn parse() -> Self {
        let argv: Vec<String> = std::env::args().collect();
        let mut count = None;
        let mut timeout = None;
        let mut version = false;

        let mut i = 1;
        while i < argv.len() {
            match argv[i].as_str() {
                "-n" | "--count" => {
                    if i + 1 < argv.len() {
                        count = argv[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "-t" | "--timeout" => {
                    if i + 1 < argv.len() {
                        timeout = argv[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "-V" | "--version" => version = true,
                "-h" | "--help" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Unknown argument: {}", other);
                    print_usage();
                    std::process::exit(1);
                }
            }
            i += 1;
        }

        Args {
            count,
            timeout,
            version,
        }
    }
}

fn print_usage() {
    println!("Usage: relayscout [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --count <N>    Number of relay entries to request");
    println!("  -t, --timeout <S>  Directory request timeout in seconds");
    println!("  -V, --version      Print version");
    println!("  -h, --help         Show this help");
}
