use clap::Parser;

use sketchpad::{Config, backend};

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(about = "Line, shape and text sketching canvas for Wayland")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Any argument prints a usage hint instead of opening the window
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if !cli.args.is_empty() {
        log::debug!("Ignoring arguments {:?}", cli.args);
        println!("This is a gui application. Press h in the window to display controls.");
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config: {:#}. Using defaults.", e);
            Config::default()
        }
    };

    log::info!("Starting sketchpad...");
    backend::run_wayland(config)?;
    log::info!("Sketchpad closed.");

    Ok(())
}
