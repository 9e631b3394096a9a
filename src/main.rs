use anyhow::Result;
use clap::Parser;
use lanterm_tictactoe::cli::Cli;
use lanterm_tictactoe::games::tictactoe::TicTacToeApp;
use lanterm_tictactoe::Engine;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_tracing()?;

    let app = TicTacToeApp::new(cli.build_controller());
    let terminal = ratatui::init();

    // Engine::run restores the terminal on every exit path
    let app = Engine::new(app).run(terminal).await?;

    let snapshot = app.controller().snapshot();
    info!(status = ?snapshot.status, turns = snapshot.turn_count, "Session ended");
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
