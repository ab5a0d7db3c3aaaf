#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{init_logging, parse_cell, render_board, run, status_line, Game};

#[cfg(feature = "std")]
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive two-player game in the terminal.
    Play {
        #[arg(
            long,
            help = "Replay a comma-separated move script (e.g., --moves 0,4,1,5,2) instead of reading stdin"
        )]
        moves: Option<String>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { moves: Some(script) } => {
            let mut game = Game::new();
            for token in script.split(',') {
                let token = token.trim();
                let index = parse_cell(token)
                    .ok_or_else(|| anyhow::anyhow!("invalid cell reference: {:?}", token))?;
                if let Err(err) = game.play(index) {
                    println!("Move {} rejected: {}", token, err);
                }
            }
            print!("{}", render_board(game.board()));
            println!("{}", status_line(&game));
        }
        Commands::Play { moves: None } => {
            let mut game = Game::new();
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run(&mut game, stdin.lock(), &mut stdout)?;
        }
    }
    Ok(())
}
