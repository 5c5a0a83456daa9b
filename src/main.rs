use clap::Parser;
use squad_rater::{
    args::Args,
    database::db::DbClient,
    error::ProcessorError,
    pipeline::{self, RunOptions}
};
use tracing::error;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    init_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        if let ProcessorError::Database(_) = e {
            error!("Ratings cannot be produced without a readable player database");
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ProcessorError> {
    let config = pipeline::load_config(args.config.as_deref())?;
    let mut client = DbClient::connect(&args.database)?;

    let options = RunOptions {
        input_table: args.input_table.clone(),
        output_table: args.output_table.clone(),
        explain: args.explain.clone(),
        top: args.top
    };

    let summary = pipeline::run(&mut client, &config, &options)?;

    for explanation in &summary.explanations {
        println!("{}", explanation);
    }

    Ok(())
}

fn init_logging(level: &str) {
    let indicatif_layer = IndicatifLayer::new();
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}
