use anyhow::{anyhow, Result};
use challenges_admin::{
    build_context, domain::Confirm, get_settings_with_cli, infra::badge_upload_from_file,
    setup_logger, AdminContext, ChallengeApi, ChallengeBoard, ChallengeEditor, CliSettings,
    Settings,
};
use challenges_core::{ChallengeCategory, ChallengeTemplate, ChallengeType, ListFilter, Preset};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use secrecy::SecretString;
use serde::Serialize;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Arc,
};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use uuid::Uuid;

#[derive(Parser, Clone)]
#[command(name = "challenges-admin")]
#[command(about = "Manage challenge definitions, badges and invites", long_about = None)]
struct Cli {
    /// Path to Settings.toml file holding configuration options
    #[arg(short, long)]
    config: Option<String>,

    /// Log level to run with (default: info)
    #[arg(short, long)]
    level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Store the admin bearer token
    Login {
        #[arg(long, env = "CHALLENGES_ADMIN_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Forget the stored token
    Logout,
    /// List challenges
    List(ListArgs),
    /// Print a challenge as JSON
    Show { id: Uuid },
    /// Create a challenge from an exported template
    Create {
        #[arg(long)]
        from: PathBuf,
    },
    /// Replace a challenge definition with a template
    Update {
        id: Uuid,
        #[arg(long)]
        from: PathBuf,
    },
    /// Delete a challenge
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Export a challenge as a shareable template
    Export {
        id: Uuid,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace the goal list of a collection challenge
    ImportGoals(ImportGoalsArgs),
    /// Add a single goal
    AddGoal {
        id: Uuid,
        #[arg(long)]
        goal_id: String,
        #[arg(long)]
        name: String,
    },
    /// Append a tier
    AddTier {
        id: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        threshold: f64,
    },
    /// Move a tier to a new position
    MoveTier {
        id: Uuid,
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
    /// Remove a tier by position
    RemoveTier {
        id: Uuid,
        #[arg(long)]
        index: usize,
    },
    /// Manage badge images
    #[command(subcommand)]
    Badges(BadgeCommands),
    /// Manage invite links
    #[command(subcommand)]
    Invites(InviteCommands),
}

#[derive(Args, Clone)]
struct ListArgs {
    #[arg(long)]
    category: Option<ChallengeCategory>,
    #[arg(long = "type")]
    challenge_type: Option<ChallengeType>,
    #[arg(long)]
    active: Option<bool>,
}

#[derive(Args, Clone)]
struct ImportGoalsArgs {
    id: Uuid,
    /// CSV file with id,name,category rows
    #[arg(long, required_unless_present = "preset", conflicts_with = "preset")]
    csv: Option<PathBuf>,
    /// Built-in goal list: us-states or dxcc
    #[arg(long)]
    preset: Option<Preset>,
}

#[derive(Subcommand, Clone)]
enum BadgeCommands {
    List {
        challenge_id: Uuid,
    },
    Upload {
        challenge_id: Uuid,
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long)]
        tier_id: Option<String>,
    },
    Delete {
        challenge_id: Uuid,
        badge_id: Uuid,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Clone)]
enum InviteCommands {
    List {
        challenge_id: Uuid,
    },
    Generate {
        challenge_id: Uuid,
        #[arg(long)]
        max_uses: Option<i32>,
        /// RFC 3339 timestamp, e.g. 2025-12-31T23:59:59Z
        #[arg(long)]
        expires_at: Option<String>,
    },
    Revoke {
        challenge_id: Uuid,
        token: String,
        #[arg(long)]
        yes: bool,
    },
}

impl From<Cli> for CliSettings {
    fn from(cli: Cli) -> Self {
        Self {
            config: cli.config,
            level: cli.level,
        }
    }
}

/// Confirms on stdin unless `--yes` was passed
struct Prompt {
    assume_yes: bool,
}

impl Confirm for Prompt {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings: Settings = get_settings_with_cli(cli.clone().into())
        .inspect_err(|e| eprintln!("Error reading config: {}", e))?;

    setup_logger(
        settings.level.clone(),
        vec![String::from("hyper"), String::from("reqwest")],
    )?;

    debug!("Settings: {:?}", settings);

    let context = build_context(settings)?;
    run(cli.command, &context).await
}

async fn run(command: Commands, context: &AdminContext) -> Result<()> {
    let api: Arc<dyn ChallengeApi> = context.api.clone();

    match command {
        Commands::Login { token } => {
            context.session.set_token(SecretString::from(token))?;
            info!("Token stored");
        }
        Commands::Logout => {
            context.session.clear()?;
            info!("Token cleared");
        }
        Commands::List(args) => {
            let filter = ListFilter {
                category: args.category,
                challenge_type: args.challenge_type,
                active: args.active,
            };
            let mut board = ChallengeBoard::with_filter(api, filter);
            board.refresh().await?;
            print_json(&board.challenges())?;
            info!("{} challenges in total", board.total());
        }
        Commands::Show { id } => {
            let challenge = api.get_challenge(&id).await?;
            print_json(&challenge)?;
        }
        Commands::Create { from } => {
            let template = read_template(&from)?;
            let mut editor = ChallengeEditor::from_template(api, &template);
            let challenge = editor.submit().await?;
            info!("Created challenge {}", challenge.id);
            println!("{}", challenge.id);
        }
        Commands::Update { id, from } => {
            let template = read_template(&from)?;
            let mut editor = ChallengeEditor::open(api, id).await?;
            editor.form_mut().apply_template(&template);
            let challenge = editor.submit().await?;
            info!(
                "Challenge {} now at version {}",
                challenge.id, challenge.version
            );
        }
        Commands::Delete { id, yes } => {
            let mut board = ChallengeBoard::new(api);
            board.refresh().await?;
            if board.delete(&id, &Prompt { assume_yes: yes }).await? {
                info!("Deleted challenge {}", id);
            }
        }
        Commands::Export { id, out } => {
            let editor = ChallengeEditor::open(api, id).await?;
            let json = editor.export_json()?;
            match out {
                Some(path) => {
                    fs::write(&path, json)
                        .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
                    info!("Exported to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        Commands::ImportGoals(args) => {
            let mut editor = ChallengeEditor::open(api, args.id).await?;
            let goals = &mut editor.form_mut().goals;
            match (args.csv, args.preset) {
                (Some(path), _) => {
                    let text = fs::read_to_string(&path)
                        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
                    let count = goals.import_csv(&text);
                    info!("Parsed {} goals from {}", count, path.display());
                }
                (None, Some(preset)) => {
                    goals.import_preset(preset);
                    info!("Loaded {} goals from {}", goals.len(), preset);
                }
                (None, None) => return Err(anyhow!("either --csv or --preset is required")),
            }
            editor.submit().await?;
        }
        Commands::AddGoal { id, goal_id, name } => {
            let mut editor = ChallengeEditor::open(api, id).await?;
            editor.form_mut().goals.add(&goal_id, &name)?;
            editor.submit().await?;
        }
        Commands::AddTier {
            id,
            name,
            threshold,
        } => {
            let mut editor = ChallengeEditor::open(api, id).await?;
            let tier_id = editor.form_mut().tiers.add(name, threshold).id.clone();
            editor.submit().await?;
            info!("Added tier {}", tier_id);
        }
        Commands::MoveTier { id, from, to } => {
            let mut editor = ChallengeEditor::open(api, id).await?;
            editor.form_mut().tiers.move_tier(from, to)?;
            editor.submit().await?;
        }
        Commands::RemoveTier { id, index } => {
            let mut editor = ChallengeEditor::open(api, id).await?;
            let removed = editor.form_mut().tiers.remove(index)?;
            editor.submit().await?;
            info!("Removed tier {}", removed.name);
        }
        Commands::Badges(command) => run_badges(command, api).await?,
        Commands::Invites(command) => run_invites(command, api).await?,
    }

    Ok(())
}

async fn run_badges(command: BadgeCommands, api: Arc<dyn ChallengeApi>) -> Result<()> {
    match command {
        BadgeCommands::List { challenge_id } => {
            let editor = ChallengeEditor::open(api, challenge_id).await?;
            let mut badges = editor.badges()?;
            print_json(&badges.load().await?)?;
        }
        BadgeCommands::Upload {
            challenge_id,
            file,
            name,
            tier_id,
        } => {
            let upload = badge_upload_from_file(&file, &name, tier_id)
                .map_err(|e| anyhow!("Failed to read {}: {}", file.display(), e))?;
            let editor = ChallengeEditor::open(api, challenge_id).await?;
            let mut badges = editor.badges()?;
            let badge = badges.upload(upload).await?;
            print_json(badge)?;
        }
        BadgeCommands::Delete {
            challenge_id,
            badge_id,
            yes,
        } => {
            let editor = ChallengeEditor::open(api, challenge_id).await?;
            let mut badges = editor.badges()?;
            badges.load().await?;
            if badges.delete(&badge_id, &Prompt { assume_yes: yes }).await? {
                info!("Deleted badge {}", badge_id);
            }
        }
    }
    Ok(())
}

async fn run_invites(command: InviteCommands, api: Arc<dyn ChallengeApi>) -> Result<()> {
    match command {
        InviteCommands::List { challenge_id } => {
            let editor = ChallengeEditor::open(api, challenge_id).await?;
            let mut invites = editor.invites()?;
            print_json(&invites.load().await?)?;
        }
        InviteCommands::Generate {
            challenge_id,
            max_uses,
            expires_at,
        } => {
            let expires_at = expires_at
                .map(|value| OffsetDateTime::parse(&value, &Rfc3339))
                .transpose()
                .map_err(|e| anyhow!("Invalid --expires-at: {}", e))?;
            let editor = ChallengeEditor::open(api, challenge_id).await?;
            let mut invites = editor.invites()?;
            let invite = invites.generate(max_uses, expires_at).await?;
            print_json(invite)?;
        }
        InviteCommands::Revoke {
            challenge_id,
            token,
            yes,
        } => {
            let editor = ChallengeEditor::open(api, challenge_id).await?;
            let mut invites = editor.invites()?;
            if invites.revoke(&token, &Prompt { assume_yes: yes }).await? {
                info!("Revoked invite");
            }
        }
    }
    Ok(())
}

fn read_template(path: &Path) -> Result<ChallengeTemplate> {
    let json = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
    Ok(ChallengeTemplate::from_json(&json)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
