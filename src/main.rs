// src/main.rs
//
// Terminal front-end: wires the application state and drives the view model
// from stdin commands.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use moviehub::application::{ErrorResponse, MoviesState, MoviesViewModel, SelectedMovieState};
use moviehub::config::{AppConfig, DEFAULT_API_URL, DEFAULT_HTTP_TIMEOUT_SECS};
use moviehub::db::get_database_path;
use moviehub::{AppState, Movie, MovieId};

#[derive(Parser)]
#[command(name = "moviehub")]
#[command(about = "Browse the movie catalogue and manage favorites", long_about = None)]
struct Cli {
    /// Base URL of the movie catalogue API
    #[arg(long, default_value = DEFAULT_API_URL, env = "MOVIES_API_URL")]
    api_url: String,

    /// Bearer token for the catalogue API
    #[arg(long, env = "MOVIES_API_TOKEN")]
    api_token: Option<String>,

    /// SQLite cache location (defaults to the user data directory)
    #[arg(long, env = "MOVIES_DB_PATH")]
    db_path: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_HTTP_TIMEOUT_SECS, env = "MOVIES_HTTP_TIMEOUT_SECS")]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", env = "LOG_LEVEL")]
    log_level: String,
}

enum Command {
    List,
    Like(MovieId),
    Open(MovieId),
    Close,
    Retry,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Result<Self, String> {
        let mut parts = input.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let mut movie_id = || -> Result<MovieId, String> {
            parts
                .next()
                .ok_or_else(|| format!("usage: {} <id>", name))?
                .parse()
                .map_err(|_| "movie id must be a number".to_string())
        };

        match name {
            "list" | "ls" => Ok(Command::List),
            "like" => Ok(Command::Like(movie_id()?)),
            "open" => Ok(Command::Open(movie_id()?)),
            "close" => Ok(Command::Close),
            "retry" => Ok(Command::Retry),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command: {}", other)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .parse_filters(&cli.log_level)
        .init();

    info!("Starting MovieHub v{}", env!("CARGO_PKG_VERSION"));

    let database_path = match cli.db_path {
        Some(path) => path,
        None => get_database_path().context("Could not resolve database location")?,
    };

    let config = AppConfig {
        api_url: cli.api_url,
        api_token: cli.api_token,
        database_path,
        http_timeout: Duration::from_secs(cli.timeout_secs),
    };

    let state = AppState::initialize(&config).context("Failed to initialize application")?;
    run(&state.view_model).await
}

async fn run(view_model: &MoviesViewModel) -> Result<()> {
    let mut movies_rx = view_model.movies_state();
    let mut selected_rx = view_model.selected_movie_state();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Commands: list | like <id> | open <id> | close | retry | quit");
    view_model.load_movies();

    loop {
        tokio::select! {
            changed = movies_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                render_movies(&movies_rx.borrow_and_update());
            }
            changed = selected_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                render_selection(&selected_rx.borrow_and_update());
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => execute(view_model, command).await,
                    Err(message) => println!("{}", message),
                }
            }
        }
    }

    info!("Bye");
    Ok(())
}

async fn execute(view_model: &MoviesViewModel, command: Command) {
    match command {
        Command::List => render_movies(&view_model.current_movies_state()),
        Command::Like(id) => match find_movie(view_model, id) {
            Some(movie) => view_model.toggle_like(&movie).await,
            None => println!("movie {} is not in the list", id),
        },
        Command::Open(id) => match find_movie(view_model, id) {
            Some(movie) => view_model.open_movie_details(&movie),
            None => println!("movie {} is not in the list", id),
        },
        Command::Close => view_model.close_movie_details(),
        Command::Retry => view_model.retry(),
        Command::Quit => {}
    }
}

fn find_movie(view_model: &MoviesViewModel, id: MovieId) -> Option<Movie> {
    view_model
        .current_movies_state()
        .movies()?
        .iter()
        .find(|movie| movie.id == id)
        .cloned()
}

fn render_movies(state: &MoviesState) {
    match state {
        MoviesState::Initial => {}
        MoviesState::Loading => println!("Loading movies..."),
        MoviesState::Loaded(movies) if movies.is_empty() => println!("No movies."),
        MoviesState::Loaded(movies) => {
            for movie in movies {
                let mark = if movie.liked { "*" } else { " " };
                println!("[{}] {:>5}  {}", mark, movie.id, movie.title);
            }
        }
        MoviesState::Error(error) => {
            let response = ErrorResponse::from_app_error(error);
            println!("{} (type 'retry')", response.message);
        }
    }
}

fn render_selection(state: &SelectedMovieState) {
    match state {
        SelectedMovieState::Closed => println!("(details closed)"),
        SelectedMovieState::Open(movie) => {
            println!("== {} ==", movie.title);
            println!("{}", movie.description);
            if let Some(poster) = &movie.poster_path {
                println!("poster: {}", poster);
            }
            println!("favorite: {}", if movie.liked { "yes" } else { "no" });
        }
    }
}
