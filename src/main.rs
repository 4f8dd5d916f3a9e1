use roster::{
    client::PlayerClient,
    config::Config,
    error::Error,
    model::player::Player,
    service::{
        player::PlayerService,
        team::{TeamService, DEFAULT_TEAM_SIZE},
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), Error> {
    print_team("pokemon", PlayerClient::pokemon(config)?).await?;
    print_team("starwars", PlayerClient::star_wars(config)?).await?;

    Ok(())
}

/// Draft a team from the given source and print its roster and roles.
async fn print_team(label: &str, client: PlayerClient) -> Result<(), Error> {
    let mut teams = TeamService::new(PlayerService::new(client));
    let mut team = teams.create_team(DEFAULT_TEAM_SIZE).await?;

    println!("{} {} {}", "-".repeat(10), label, "-".repeat(10));
    println!("{team}");
    match team.goalie() {
        Some(goalie) => println!("goalie: {goalie}"),
        None => println!("goalie: none"),
    }
    println!("defense: {}", format_players(team.defense()));
    println!("offense: {}", format_players(team.offense()));

    Ok(())
}

fn format_players(players: &[Player]) -> String {
    let rendered: Vec<String> = players.iter().map(|p| p.to_string()).collect();

    format!("[{}]", rendered.join(", "))
}
