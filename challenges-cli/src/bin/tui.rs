use challenges_cli::{
    infrastructure::{CliError, LogConfig, Result},
    presentation::tui::{self, App},
};
use challenges_core::{ChallengeEventLoop, ImageCatalog};
use clap::Parser;

#[derive(Parser)]
#[command(name = "challenges-tui")]
#[command(version, about = "Challenge board - interactive terminal interface")]
struct Cli {
    /// Seed the board from a replay script before starting
    #[arg(short, long)]
    script: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LogConfig::tui().init().map_err(CliError::InvalidConfig)?;

    let mut board = ChallengeEventLoop::with_catalog(ImageCatalog::default());
    if let Some(path) = cli.script {
        for command in challenges_cli::application::load_script(&path)? {
            board.handle_command(command);
        }
    }

    let mut terminal = tui::setup_terminal()?;
    let mut app = App::new(board);

    let result = tui::run(&mut terminal, &mut app);

    tui::restore_terminal(terminal)?;

    result
}
