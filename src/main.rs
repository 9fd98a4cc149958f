use clap::{Parser, Subcommand};
use cd2n::{compose, logging, Settings};

mod tui;

#[derive(Parser)]
#[command(name = "cd2n")]
#[command(version, about = "Edit the CD2N docker-compose.yml", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the docker-compose.yml that would be written, without writing it
    Preview,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let settings = Settings::default();
    logging::init(&settings)?;

    match cli.command {
        None => tui::run(&settings),
        Some(Commands::Preview) => {
            let model = compose::load(&settings.compose_path);
            print!("{}", compose::render_to_string(&model)?);
            Ok(())
        }
    }
}
