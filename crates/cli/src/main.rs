//! CLI entry point for WeeWoolies.
//!
//! Inspects the app without a browser: placeholder login, role-filtered
//! menus, the route table, role resolution and the game catalog.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use core_types::{
    AppConfig, CategoryFilter, Credentials, LoginState, NavModule, Page, Role, RoleHolder,
    TransitionPayload, filter_by_category, landing_grid, resolve_role, shell_menu,
};

/// weewoolies: inspect the classroom app from the terminal
#[derive(Parser)]
#[command(name = "weewoolies")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file (missing fields keep their defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with any password and show the landing grid
    Login {
        /// Username; "teacher" or "parent" in it picks the role
        username: String,

        /// Password (never checked)
        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Show the navigation menu for a role
    Menu {
        /// Role (teacher, parent)
        #[arg(short, long)]
        role: String,
    },

    /// Show the landing page modules for a role
    Modules {
        /// Role (teacher, parent)
        #[arg(short, long)]
        role: String,
    },

    /// List games, optionally by category
    Games {
        /// Category (all, reading, math, cognitive)
        #[arg(short, long)]
        category: Option<String>,

        /// Load the catalog from a JSON file instead of the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Show descriptions and learning goals
        #[arg(short = 'l', long)]
        long: bool,
    },

    /// Show the route table
    Routes,

    /// Resolve the role a page renders for
    Resolve {
        /// Page name or path (e.g. teacher, /games)
        page: String,

        /// Role carried by the navigation payload
        #[arg(long)]
        payload_role: Option<String>,

        /// Role selected at login
        #[arg(long)]
        holder_role: Option<String>,
    },
}

fn parse_role(s: &str) -> Result<Role> {
    s.parse::<Role>()
        .with_context(|| format!("Unknown role: {s}"))
}

fn parse_page(s: &str) -> Result<Page> {
    s.parse::<Page>()
        .with_context(|| format!("Unknown page: {s}"))
}

fn parse_category(s: &str) -> Result<CategoryFilter> {
    s.parse::<CategoryFilter>()
        .with_context(|| format!("Unknown game category: {s}"))
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    AppConfig::from_json_str(&json)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("WEEWOOLIES_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Login { username, password } => {
            login(&config, &Credentials::new(username, password));
        }
        Commands::Menu { role } => {
            let role = parse_role(&role)?;
            print_modules(&shell_menu(role), role);
        }
        Commands::Modules { role } => {
            let role = parse_role(&role)?;
            print_modules(&landing_grid(role), role);
        }
        Commands::Games {
            category,
            catalog,
            long,
        } => {
            list_games(category.as_deref(), catalog.as_deref(), long)?;
        }
        Commands::Routes => {
            print_routes();
        }
        Commands::Resolve {
            page,
            payload_role,
            holder_role,
        } => {
            let role = resolve(
                &config,
                &page,
                payload_role.as_deref(),
                holder_role.as_deref(),
            )?;
            println!("{role}");
        }
    }

    Ok(())
}

fn login(config: &AppConfig, credentials: &Credentials) {
    let state = LoginState::login(credentials);
    println!("{}", state.welcome_title(&config.school_name));

    if let Some(role) = state.role() {
        println!();
        print_modules(&landing_grid(role), role);
    }
}

fn print_modules(modules: &[NavModule], role: Role) {
    for module in modules {
        println!(
            "  {:<12} {:<18} {}",
            module.target.path(),
            module.display_title(Some(role)),
            module.description
        );
    }
}

fn list_games(category: Option<&str>, catalog: Option<&Path>, long: bool) -> Result<()> {
    let games = match catalog {
        Some(path) => mock_data::load_games_from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => mock_data::load_games(),
    };

    let filter = match category {
        Some(category) => parse_category(category)?,
        None => CategoryFilter::All,
    };
    let games = filter_by_category(&games, filter);

    println!("{} ({} games):", filter.label(), games.len());
    for game in &games {
        if long {
            println!("{} [{}]", game.title, game.id);
            println!("  Category: {}", game.category.label());
            println!("  Difficulty: {}", game.difficulty.as_str());
            println!("  Path: {}", game.path);
            println!("  {}", game.description);
            for goal in &game.learning_goals {
                println!("    - {goal}");
            }
        } else {
            println!(
                "  {:<10} {:<13} {}",
                game.category.as_str(),
                game.difficulty.as_str(),
                game.title
            );
        }
    }

    Ok(())
}

fn print_routes() {
    for page in Page::ALL {
        let shell = if page.uses_shell() { "shell" } else { "" };
        println!(
            "  {:<12} {:<18} {:<8} {}",
            page.path(),
            page.title(),
            page.default_role().as_str(),
            shell
        );
    }
    println!("  {:<12} {}", "*", "not found");
}

fn resolve(
    config: &AppConfig,
    page: &str,
    payload_role: Option<&str>,
    holder_role: Option<&str>,
) -> Result<Role> {
    let page = parse_page(page)?;

    let payload = payload_role
        .map(parse_role)
        .transpose()?
        .map(TransitionPayload::with_role);

    let holder = holder_role
        .map(parse_role)
        .transpose()?
        .map(|role| {
            let mut holder = RoleHolder::new();
            holder.set_role(role);
            holder
        });

    Ok(resolve_role(
        payload.as_ref(),
        holder.as_ref(),
        page,
        config.role_resolution,
    ))
}
