use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

mod config;
mod web;

use swingforge::SkillTier;

#[derive(Parser, Debug, Clone)]
#[command(name = "swingforge", about = "Synthetic golf swing generator")]
struct Config {
    /// Config file path (default: ~/.config/swingforge/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run the web server instead of one-shot generation
    #[arg(long)]
    serve: bool,

    /// Club code to generate for (DR, 3W, 5I, 7I, 9I, PW, SW)
    #[arg(long)]
    club: Option<String>,

    /// Skill tier to generate for
    #[arg(long, value_enum)]
    skill: Option<SkillTier>,

    /// Number of records to generate
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// Seed for deterministic output (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("swingforge=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Config::parse();

    // Load (or create) config file
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);
    let settings = config::load(&config_path);

    if cli.serve {
        let addr: std::net::SocketAddr = settings
            .server
            .bind
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address '{}': {e}", settings.server.bind))?;
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(web::serve(addr, settings));
    }

    // One-shot generation to stdout
    let club = cli.club.unwrap_or_else(|| settings.generator.club.clone());
    let skill = cli.skill.unwrap_or(settings.generator.skill);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::debug!("generating {} swing(s) for {club} ({skill})", cli.count);
    for _ in 0..cli.count {
        let record = swingforge::generate(&club, skill, &mut rng)?;
        let json = if cli.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        println!("{json}");
    }

    Ok(())
}
