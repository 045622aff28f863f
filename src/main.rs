use clap::Parser;
use std::process::ExitCode;
use torontotime_ws::{
    app::App,
    err::Error,
    init::{logging::init_logging, settings::Settings, setup::setup_database},
};

/// Toronto time webserver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Server address
    #[arg(short, long)]
    address: Option<String>,
    /// HTTP port
    #[arg(short, long)]
    port: Option<u16>,
    /// Database connection URL
    #[arg(short, long)]
    database_url: Option<String>,
    /// Log file path
    #[arg(short, long)]
    log_file: Option<String>,
    /// Config file path
    #[arg(short, long)]
    config_file: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match Settings::new(
        args.config_file,
        args.address,
        args.port,
        args.database_url,
        args.log_file,
    ) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&settings.log_file) {
        eprintln!("Error opening log file: {}", e);
        return ExitCode::FAILURE;
    }
    settings.print();

    match run(settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(settings: Settings) -> Result<(), Error> {
    let db = setup_database(&settings.database_url).await?;
    tracing::info!("Connected to database successfully");

    let server = App::new(db.clone());
    let result = server.serve(&settings.bind_address()).await;

    db.close().await;
    result?;

    Ok(())
}
