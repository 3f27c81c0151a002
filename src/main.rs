use kube_greeter::config::Config;
use kube_greeter::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kube_greeter=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env();
    print_banner(&config);

    if let Err(e) = server::start(&config).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn print_banner(config: &Config) {
    let build = env!("CARGO_PKG_VERSION");

    eprintln!();
    eprintln!("  \x1b[1;36mkube-greeter\x1b[0m \x1b[2mv{build}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mversion\x1b[0m      {}", config.version);
    eprintln!("  \x1b[2mport\x1b[0m         {}", config.port);
    eprintln!();
}
