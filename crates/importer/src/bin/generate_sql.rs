use gym_importer::{ChainConfig, SqlGenerator, load_gym_records, resolve_input_path};
use std::io::{IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Arguments are ignored: the chain and its input location are fixed.
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gym_sql=info,gym_importer=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    match run(&ChainConfig::ANYTIME_FITNESS) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(chain: &ChainConfig) -> Result<(), Box<dyn std::error::Error>> {
    let input = resolve_input_path(&std::env::current_dir()?, chain);

    tracing::info!("Generating SQL for {} from {}", chain.name, input.display());

    let records = load_gym_records(&input)?;
    let script = SqlGenerator::new(chain).generate(&records)?;
    script.log_warnings();

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(script.sql.as_bytes())?;
    stdout.flush()?;

    tracing::info!(
        "✓ Generated {} of {} gym row(s) ({} skipped)",
        script.inserted,
        script.total,
        script.skipped.len()
    );

    Ok(())
}
