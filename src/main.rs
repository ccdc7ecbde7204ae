use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use vibematch::{cli, config, error, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the relay server for the browser client
    Serve,

    /// Authorize with Spotify API
    Login,

    /// Clear the stored session
    Logout,

    /// Show the stored session state
    Status,

    /// Show the authenticated user's profile
    Profile,

    /// Top tracks and artists over a time range
    Top(TopOptions),

    /// Recently played tracks
    Recent(RecentOptions),

    #[clap(about = "Persona-tuned recommendations")]
    Recommend(RecommendOptions),

    /// List the persona roster
    Characters,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Top tracks and artists over a time range")]
pub struct TopOptions {
    /// Subcommands under `top` (`tracks` or `artists`)
    #[command(subcommand)]
    pub command: TopSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TopSubcommand {
    /// Most played tracks
    Tracks(TopQueryOpts),

    /// Most played artists
    Artists(TopQueryOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct TopQueryOpts {
    /// Time window: short_term, medium_term or long_term
    #[clap(
        long,
        default_value = "medium_term",
        value_parser = utils::parse_time_range
    )]
    pub time_range: utils::TimeRange,

    /// Number of entries (1-50)
    #[clap(long, default_value_t = 20)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct RecentOptions {
    /// Number of entries (1-50)
    #[clap(long, default_value_t = 20)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Persona to tune for (see `vibematch characters`)
    #[clap(long)]
    pub character: Option<String>,

    /// Genre taste: hiphop, electronic, rock, rnb or pop
    #[clap(long)]
    pub genre: Option<String>,

    /// Language taste from the quiz (e.g. korean, english)
    #[clap(long)]
    pub language: Option<String>,

    /// Era taste from the quiz (e.g. modern, classic)
    #[clap(long)]
    pub era: Option<String>,

    /// Seed track ID; can be repeated (first two are used)
    #[clap(long = "seed-track", action = ArgAction::Append, num_args = 1)]
    pub seed_tracks: Vec<String>,

    /// Seed artist ID; can be repeated (first two are used)
    #[clap(long = "seed-artist", action = ArgAction::Append, num_args = 1)]
    pub seed_artists: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve().await,
        Command::Login => cli::login().await,
        Command::Logout => cli::logout().await,
        Command::Status => cli::status().await,
        Command::Profile => cli::profile().await,

        Command::Top(opt) => match opt.command {
            TopSubcommand::Tracks(q) => cli::top_tracks(q.time_range, q.limit).await,
            TopSubcommand::Artists(q) => cli::top_artists(q.time_range, q.limit).await,
        },

        Command::Recent(opt) => cli::recent(opt.limit).await,
        Command::Recommend(opt) => {
            cli::recommend(
                opt.character,
                opt.genre,
                opt.language,
                opt.era,
                opt.seed_tracks,
                opt.seed_artists,
            )
            .await
        }
        Command::Characters => cli::characters(),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
