//! `chaos-cli`: the chaos console from a terminal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Uses the same `console-core` API client, auth context, and route guard as
//! the browser app, over the `reqwest` transport and a token file. Every
//! command except `login` and `logout` restores the session first and is
//! refused unless the guard would let the signed-in role open the matching
//! screen. Results go to stdout as pretty JSON; logs go to stderr.

mod token_file;


use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use console_core::config::DEFAULT_API_URL;
use console_core::guard::{GuardState, evaluate, reachable_screens};
use console_core::leaderboard::{PerformanceRating, SortKey, sorted};
use console_core::model::punishment::with_status as punishments_with_status;
use console_core::model::report::with_status as reports_with_status;
use console_core::model::{
    Credentials, NewPunishment, NewReport, NewUser, PunishmentKind, PunishmentStatus, PunishmentUpdate,
    ReportKind, ReportStatus, UserStatus, UserUpdate,
};
use console_core::navigation::DashboardView;
use console_core::transport::ReqwestTransport;
use console_core::{ApiClient, ApiError, AuthContext, ClientConfig, Role, Screen, Session, SharedSession, TransportError};
use serde::Serialize;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use crate::token_file::{FileTokenStore, default_token_path};

type CliAuth = AuthContext<ReqwestTransport, FileTokenStore, SharedSession>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("cannot build HTTP client: {0}")]
    Transport(#[from] TransportError),
    #[error("not signed in; run `chaos-cli login` first")]
    NotSignedIn,
    #[error("{0}")]
    Forbidden(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "chaos-cli", about = "DevOps chaos console CLI")]
struct Cli {
    /// API root including the `/api` prefix.
    #[arg(long, env = "CHAOS_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Where the session token is kept between runs.
    #[arg(long, env = "CHAOS_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "CHAOS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    Whoami,
    Dashboard,
    Users(UsersCommand),
    Reports(ReportsCommand),
    Punishments(PunishmentsCommand),
    Leaderboard {
        #[arg(long, default_value = "points")]
        sort: SortKey,
    },
    Capture(CaptureCommand),
    /// Screens the signed-in role may open.
    Screens,
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List {
        #[arg(long)]
        role: Option<Role>,
    },
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        role: Role,
    },
    Update {
        id: u64,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<Role>,
        #[arg(long)]
        status: Option<UserStatus>,
    },
}

#[derive(Args, Debug)]
struct ReportsCommand {
    #[command(subcommand)]
    command: ReportsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ReportsSubcommand {
    List {
        #[arg(long)]
        status: Option<ReportStatus>,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Defaults to the kind filed by the signed-in role.
        #[arg(long)]
        kind: Option<ReportKind>,
    },
    Status {
        id: u64,
        status: ReportStatus,
    },
}

#[derive(Args, Debug)]
struct PunishmentsCommand {
    #[command(subcommand)]
    command: PunishmentsSubcommand,
}

#[derive(Subcommand, Debug)]
enum PunishmentsSubcommand {
    List {
        #[arg(long)]
        status: Option<PunishmentStatus>,
    },
    Show {
        id: u64,
    },
    Create {
        #[arg(long)]
        target: u64,
        #[arg(long)]
        kind: PunishmentKind,
        #[arg(long)]
        description: String,
        #[arg(long)]
        expires_at: Option<String>,
    },
    Update {
        id: u64,
        #[arg(long)]
        status: Option<PunishmentStatus>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        expires_at: Option<String>,
    },
}

#[derive(Args, Debug)]
struct CaptureCommand {
    #[command(subcommand)]
    command: CaptureSubcommand,
}

#[derive(Subcommand, Debug)]
enum CaptureSubcommand {
    Targets,
    Run { id: u64 },
}

impl Command {
    /// Screen whose guard decides whether the command may run.
    fn screen(&self) -> Screen {
        match self {
            Self::Login { .. } => Screen::Login,
            Self::Logout | Self::Whoami | Self::Dashboard | Self::Screens => Screen::Dashboard,
            Self::Users(_) => Screen::Users,
            Self::Reports(_) => Screen::Reports,
            Self::Punishments(_) => Screen::Punishments,
            Self::Leaderboard { .. } => Screen::Leaderboard,
            Self::Capture(_) => Screen::Capture,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let rendered = run(cli).await.and_then(|value| Ok(serde_json::to_string_pretty(&value)?));
    match rendered {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(CliError::Api(e)) => {
            eprintln!("error ({}): {e}", e.kind());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Value, CliError> {
    let config = ClientConfig::from_env().with_base_url(&cli.api_url);
    let tokens = FileTokenStore::new(cli.token_file.unwrap_or_else(default_token_path));
    let api = ApiClient::new(ReqwestTransport::new(&config)?, tokens);
    let auth: CliAuth = AuthContext::new(api, SharedSession::default());

    match cli.command {
        Command::Login { username, password } => {
            let user = auth.login(&Credentials::new(username, password)).await?;
            to_json(&user)
        }
        Command::Logout => {
            auth.logout();
            Ok(json!({ "logged_out": true }))
        }
        command => {
            let session = auth.bootstrap().await;
            admit(&session, command.screen())?;
            run_signed_in(&auth, &session, command).await
        }
    }
}

/// Apply the route guard for `screen` to a bootstrapped session.
fn admit(session: &Session, screen: Screen) -> Result<(), CliError> {
    match evaluate(session, screen.access()) {
        GuardState::Authorized => Ok(()),
        GuardState::Loading | GuardState::Unauthenticated => Err(CliError::NotSignedIn),
        denied @ GuardState::Forbidden { .. } => {
            let (role_line, clearance_line) = denied.denial_lines().unwrap_or_default();
            Err(CliError::Forbidden(format!("ACCESS DENIED. {role_line}. {clearance_line}")))
        }
    }
}

async fn run_signed_in(auth: &CliAuth, session: &Session, command: Command) -> Result<Value, CliError> {
    let api = auth.api();
    let Some(user) = session.user() else {
        return Err(CliError::NotSignedIn);
    };

    match command {
        Command::Login { .. } | Command::Logout => Err(CliError::NotSignedIn),
        Command::Whoami => to_json(user),
        Command::Screens => {
            let paths: Vec<&str> = reachable_screens(session).into_iter().map(Screen::path).collect();
            Ok(json!(paths))
        }
        Command::Dashboard => match DashboardView::for_role(user.role) {
            DashboardView::CommandCenter => to_json(&api.andrei_dashboard().await?),
            DashboardView::DaemonTerminal => to_json(&api.daemon_dashboard().await?),
            DashboardView::ResistanceHub => to_json(&api.resistance_overview().await?),
        },
        Command::Users(users) => match users.command {
            UsersSubcommand::List { role } => to_json(&api.users(role).await?),
            UsersSubcommand::Create { username, email, password, role } => {
                let user = NewUser { username, email, password, role };
                to_json(&api.register_user(&user).await?)
            }
            UsersSubcommand::Update { id, username, email, role, status } => {
                let update = UserUpdate { username, email, role, status };
                api.update_user(id, &update).await?;
                Ok(json!({ "updated": id }))
            }
        },
        Command::Reports(reports) => match reports.command {
            ReportsSubcommand::List { status } => {
                let all = api.reports().await?;
                to_json(&reports_with_status(&all, status))
            }
            ReportsSubcommand::Create { title, description, kind } => {
                let report = match kind {
                    Some(kind) => NewReport::new(title, description, kind),
                    None => NewReport::for_author(user.role, title, description),
                };
                to_json(&api.create_report(&report).await?)
            }
            ReportsSubcommand::Status { id, status } => {
                api.update_report_status(id, status).await?;
                Ok(json!({ "updated": id, "status": status }))
            }
        },
        Command::Punishments(punishments) => match punishments.command {
            PunishmentsSubcommand::List { status } => {
                let all = api.punishments().await?;
                to_json(&punishments_with_status(&all, status))
            }
            PunishmentsSubcommand::Show { id } => to_json(&api.punishment(id).await?),
            PunishmentsSubcommand::Create { target, kind, description, expires_at } => {
                let punishment = NewPunishment { target_id: target, kind, description, expires_at };
                to_json(&api.create_punishment(&punishment).await?)
            }
            PunishmentsSubcommand::Update { id, status, description, expires_at } => {
                let update = PunishmentUpdate { status, description, expires_at };
                api.update_punishment(id, &update).await?;
                Ok(json!({ "updated": id }))
            }
        },
        Command::Leaderboard { sort } => {
            let entries = api.leaderboard().await?;
            let rows = sorted(&entries, sort)
                .iter()
                .map(|entry| {
                    let mut row = serde_json::to_value(entry)?;
                    if let Value::Object(fields) = &mut row {
                        fields.insert("rating".to_owned(), json!(PerformanceRating::for_points(entry.points).label()));
                    }
                    Ok(row)
                })
                .collect::<Result<Vec<_>, serde_json::Error>>()?;
            Ok(Value::Array(rows))
        }
        Command::Capture(capture) => match capture.command {
            CaptureSubcommand::Targets => to_json(&api.capture_targets().await?),
            CaptureSubcommand::Run { id } => to_json(&api.capture(id).await?),
        },
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}
