use anyhow::{bail, Context, Result};
use tracing::info;
use translate_core::ClientConfig;

const USAGE: &str = "usage: translate <subject> [locale] | translate locales";

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translate_core=info".parse()?),
        )
        .init();

    let request = ClientConfig::from_env()
        .context("failed to load client configuration")?
        .into_request()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [command] if command == "locales" => {
            let response = request.get_locales().map_err(|failure| failure.error)?;
            for locale in &response.locales {
                println!("{}\t{}", locale.locale, locale.name);
            }
        }
        [subject] => {
            let response = request.get(subject).map_err(|failure| failure.error)?;
            println!("{response}");
        }
        [subject, locale] => {
            info!("translating into {locale}");
            let response = request
                .localise(subject, locale)
                .map_err(|failure| failure.error)?;
            println!("{response}");
        }
        _ => bail!(USAGE),
    }

    Ok(())
}
