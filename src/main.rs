//! Command-line entry point: read a maze file, print it, try to escape.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use mazerunner::config::MazeConfig;
use mazerunner::sim::builder;
use mazerunner::sim::finder::{self, SolveOptions};
use mazerunner::ui::renderer::Renderer;

/// Find a way from start to end of a maze, collecting coins on the way.
#[derive(Parser, Debug)]
#[command(name = "mazerunner", version, about)]
struct Cli {
    /// Maze description file
    file: PathBuf,

    /// Print every stack operation and move decision
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Config file (default: search for mazerunner.toml)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    no_color: bool,

    /// Give up after this many steps (default: factor × width × height)
    #[arg(long = "step-limit")]
    step_limit: Option<usize>,
}

fn main() {
    if std::env::var("MAZERUNNER_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MAZERUNNER_LOG")
            .write_style("MAZERUNNER_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = MazeConfig::load(cli.config.as_deref())?;
    if cli.no_color || !io::stdout().is_terminal() {
        config.render.color = false;
    }
    if cli.debug {
        config.solver.verbose = true;
    }

    let text = fs::read_to_string(&cli.file)
        .map_err(|e| format!("cannot read '{}': {e}", cli.file.display()))?;
    let maze = builder::build_from_str(&text)?;

    let renderer = Renderer::new(config.render.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    renderer.header(&mut out, &maze.grid)?;
    renderer.rejected(&mut out, &maze.rejected)?;
    renderer.maze(&mut out, &maze.grid, &[])?;

    let options = SolveOptions {
        verbose: config.solver.verbose,
        step_limit: cli.step_limit.or_else(|| config.solver.step_limit(&maze.grid)),
    };
    let mut grid = maze.grid.clone();
    let solution = finder::solve(&mut grid, options)?;

    if options.verbose {
        renderer.trace(&mut out, &solution.trace)?;
    }
    renderer.result(&mut out, &solution.result)?;
    if config.render.show_path {
        if let Some(path) = solution.result.path() {
            writeln!(out)?;
            renderer.maze(&mut out, &maze.grid, path)?;
        }
    }

    out.flush()?;
    Ok(())
}
