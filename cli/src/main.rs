use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use client::net::api::{Api, ApiError};
use client::net::types::{LoginRequest, Role};
use client::net::{attendance, auth, coach, course, membership, payment};
use client::routes::{RouteDecision, RouteGuard};
use client::state::session::{SessionError, SessionStore};
use client::storage::{FileStorage, SessionStorage};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("not logged in; run `fitclub-cli login` first or pass --member-id")]
    NotLoggedIn,
    #[error("unknown role `{0}`; expected member, coach, or admin")]
    InvalidRole(String),
    #[error("login rejected: {0}")]
    LoginRejected(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "fitclub-cli", about = "Fitness club API command-line client")]
struct Cli {
    #[arg(long, env = "FITCLUB_BASE_URL", default_value = "http://127.0.0.1:8080/api")]
    base_url: String,

    #[arg(long, env = "FITCLUB_SESSION_FILE", default_value = ".fitclub-session.json")]
    session_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and persist the session.
    Login {
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        role: String,
    },
    /// Clear the persisted session.
    Logout,
    /// Show the restored session identity.
    Whoami,
    /// Evaluate the route guard.
    Route(RouteCommand),
    /// Call a backend resource endpoint.
    Api(ApiCommand),
}

#[derive(Args, Debug)]
struct RouteCommand {
    #[command(subcommand)]
    command: RouteSubcommand,
}

#[derive(Subcommand, Debug)]
enum RouteSubcommand {
    Check { path: String },
}

#[derive(Args, Debug)]
struct ApiCommand {
    #[command(subcommand)]
    command: ApiSubcommand,
}

#[derive(Subcommand, Debug)]
enum ApiSubcommand {
    Attendance(AttendanceCommand),
    Coach(CoachCommand),
    Course(CourseCommand),
    Membership(MembershipCommand),
    Payment(PaymentCommand),
}

#[derive(Args, Debug)]
struct AttendanceCommand {
    #[command(subcommand)]
    command: AttendanceSubcommand,
}

#[derive(Subcommand, Debug)]
enum AttendanceSubcommand {
    Checkin {
        #[arg(long)]
        member_id: Option<i64>,
        #[arg(long)]
        notes: Option<String>,
    },
    Checkout {
        id: i64,
    },
    History {
        #[arg(long)]
        member_id: Option<i64>,
    },
    Range {
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
    },
    Stats {
        #[arg(long)]
        member_id: Option<i64>,
    },
}

#[derive(Args, Debug)]
struct CoachCommand {
    #[command(subcommand)]
    command: CoachSubcommand,
}

#[derive(Subcommand, Debug)]
enum CoachSubcommand {
    List,
    Programs { coach_id: i64 },
    WorkData { coach_id: i64 },
}

#[derive(Args, Debug)]
struct CourseCommand {
    #[command(subcommand)]
    command: CourseSubcommand,
}

#[derive(Subcommand, Debug)]
enum CourseSubcommand {
    Programs,
    ProgramsByCoach {
        coach_id: i64,
    },
    AddProgram {
        #[arg(long)]
        data: String,
    },
    UpdateProgram {
        #[arg(long)]
        data: String,
    },
    DeleteProgram {
        id: i64,
    },
    Book {
        #[arg(long)]
        data: String,
    },
    Bookings {
        #[arg(long)]
        member_id: Option<i64>,
    },
    CoachBookings {
        coach_id: i64,
    },
    Cancel {
        id: i64,
        #[arg(long)]
        reason: Option<String>,
    },
    UpdateStatus {
        id: i64,
        #[arg(long)]
        status: i32,
    },
    Checkin {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct MembershipCommand {
    #[command(subcommand)]
    command: MembershipSubcommand,
}

#[derive(Subcommand, Debug)]
enum MembershipSubcommand {
    CardTypes,
    Cards {
        #[arg(long)]
        member_id: Option<i64>,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Pay {
        id: i64,
        #[arg(long)]
        amount: f64,
    },
}

#[derive(Args, Debug)]
struct PaymentCommand {
    #[command(subcommand)]
    command: PaymentSubcommand,
}

#[derive(Subcommand, Debug)]
enum PaymentSubcommand {
    Records {
        #[arg(long)]
        member_id: Option<i64>,
    },
    Total {
        #[arg(long)]
        member_id: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let storage: Arc<dyn SessionStorage> = Arc::new(FileStorage::open(&cli.session_file));
    let api = Api::new(cli.base_url.clone(), storage.clone())?;
    let mut store = SessionStore::new(storage.clone());
    store.restore();

    let result = run(cli.command, &api, &mut store, &storage).await;
    if matches!(&result, Err(CliError::Api(ApiError::Unauthorized))) {
        store.clear();
        tracing::warn!("backend rejected the session; local session cleared, log in again");
    }
    result
}

async fn run(
    command: Command,
    api: &Api,
    store: &mut SessionStore,
    storage: &Arc<dyn SessionStorage>,
) -> Result<(), CliError> {
    match command {
        Command::Login {
            username,
            password,
            role,
        } => run_login(api, store, username, password, &role).await,
        Command::Logout => {
            store.clear();
            println!("logged out");
            Ok(())
        }
        Command::Whoami => run_whoami(store),
        Command::Route(route) => run_route(storage, route),
        Command::Api(api_command) => run_api(api, store, api_command).await,
    }
}

async fn run_login(
    api: &Api,
    store: &mut SessionStore,
    username: String,
    password: String,
    role: &str,
) -> Result<(), CliError> {
    let role = Role::parse(role).ok_or_else(|| CliError::InvalidRole(role.to_owned()))?;
    let request = LoginRequest {
        username,
        password,
        role,
    };

    let envelope = auth::login(api, &request).await?;
    let Some(login) = envelope.data else {
        return Err(CliError::LoginRejected(envelope.message));
    };

    let identity = store.establish(&login)?;
    println!(
        "logged in as {} (id {}, role {})",
        identity.username.as_deref().unwrap_or("<unknown>"),
        identity.id,
        store.current_role().unwrap_or_default()
    );
    Ok(())
}

fn run_whoami(store: &SessionStore) -> Result<(), CliError> {
    match &store.session().identity {
        Some(identity) => print_payload(identity),
        None => {
            println!("not logged in");
            Ok(())
        }
    }
}

fn run_route(storage: &Arc<dyn SessionStorage>, route: RouteCommand) -> Result<(), CliError> {
    match route.command {
        RouteSubcommand::Check { path } => {
            let guard = RouteGuard::new(storage.clone());
            match guard.check(&path) {
                RouteDecision::Allowed => println!("allowed: {path}"),
                RouteDecision::Redirect(to) => println!("redirect: {path} -> {to}"),
            }
            Ok(())
        }
    }
}

async fn run_api(
    api: &Api,
    store: &SessionStore,
    api_command: ApiCommand,
) -> Result<(), CliError> {
    match api_command.command {
        ApiSubcommand::Attendance(command) => run_attendance(api, store, command).await,
        ApiSubcommand::Coach(command) => run_coach(api, command).await,
        ApiSubcommand::Course(command) => run_course(api, store, command).await,
        ApiSubcommand::Membership(command) => run_membership(api, store, command).await,
        ApiSubcommand::Payment(command) => run_payment(api, store, command).await,
    }
}

async fn run_attendance(
    api: &Api,
    store: &SessionStore,
    command: AttendanceCommand,
) -> Result<(), CliError> {
    match command.command {
        AttendanceSubcommand::Checkin { member_id, notes } => {
            let member_id = resolve_member_id(store, member_id)?;
            let record = attendance::check_in(api, member_id, notes.as_deref()).await?;
            print_payload(&record)
        }
        AttendanceSubcommand::Checkout { id } => {
            let record = attendance::check_out(api, id).await?;
            print_payload(&record)
        }
        AttendanceSubcommand::History { member_id } => {
            let member_id = resolve_member_id(store, member_id)?;
            let records = attendance::member_attendance(api, member_id).await?;
            print_payload(&records)
        }
        AttendanceSubcommand::Range {
            start_date,
            end_date,
        } => {
            let records =
                attendance::by_date_range(api, start_date.as_deref(), end_date.as_deref()).await?;
            print_payload(&records)
        }
        AttendanceSubcommand::Stats { member_id } => {
            let member_id = resolve_member_id(store, member_id)?;
            let stats = attendance::attendance_stats(api, member_id).await?;
            print_json(&stats)
        }
    }
}

async fn run_coach(api: &Api, command: CoachCommand) -> Result<(), CliError> {
    match command.command {
        CoachSubcommand::List => {
            let coaches = coach::all_coaches(api).await?;
            print_payload(&coaches)
        }
        CoachSubcommand::Programs { coach_id } => {
            let programs = coach::coach_programs(api, coach_id).await?;
            print_payload(&programs)
        }
        CoachSubcommand::WorkData { coach_id } => {
            let report = coach::coach_work_data(api, coach_id).await?;
            print_json(&report)
        }
    }
}

async fn run_course(
    api: &Api,
    store: &SessionStore,
    command: CourseCommand,
) -> Result<(), CliError> {
    match command.command {
        CourseSubcommand::Programs => {
            let programs = course::all_programs(api).await?;
            print_payload(&programs)
        }
        CourseSubcommand::ProgramsByCoach { coach_id } => {
            let programs = course::programs_by_coach(api, coach_id).await?;
            print_payload(&programs)
        }
        CourseSubcommand::AddProgram { data } => {
            let draft = serde_json::from_str::<Value>(&data)?;
            let program = course::add_program(api, &draft).await?;
            print_payload(&program)
        }
        CourseSubcommand::UpdateProgram { data } => {
            let draft = serde_json::from_str::<Value>(&data)?;
            let program = course::update_program(api, &draft).await?;
            print_payload(&program)
        }
        CourseSubcommand::DeleteProgram { id } => {
            let deleted = course::delete_program(api, id).await?;
            print_payload(&deleted)
        }
        CourseSubcommand::Book { data } => {
            let draft = serde_json::from_str::<Value>(&data)?;
            let booking = course::create_booking(api, &draft).await?;
            print_payload(&booking)
        }
        CourseSubcommand::Bookings { member_id } => {
            let member_id = resolve_member_id(store, member_id)?;
            let bookings = course::member_bookings(api, member_id).await?;
            print_payload(&bookings)
        }
        CourseSubcommand::CoachBookings { coach_id } => {
            let bookings = course::coach_bookings(api, coach_id).await?;
            print_payload(&bookings)
        }
        CourseSubcommand::Cancel { id, reason } => {
            let cancelled = course::cancel_booking(api, id, reason.as_deref()).await?;
            print_payload(&cancelled)
        }
        CourseSubcommand::UpdateStatus { id, status } => {
            let updated = course::update_booking_status(api, id, status).await?;
            print_payload(&updated)
        }
        CourseSubcommand::Checkin { id } => {
            let checked_in = course::booking_check_in(api, id).await?;
            print_payload(&checked_in)
        }
    }
}

async fn run_membership(
    api: &Api,
    store: &SessionStore,
    command: MembershipCommand,
) -> Result<(), CliError> {
    match command.command {
        MembershipSubcommand::CardTypes => {
            let card_types = membership::on_sale_card_types(api).await?;
            print_payload(&card_types)
        }
        MembershipSubcommand::Cards { member_id } => {
            let member_id = resolve_member_id(store, member_id)?;
            let cards = membership::member_cards(api, member_id).await?;
            print_payload(&cards)
        }
        MembershipSubcommand::Create { data } => {
            let draft = serde_json::from_str::<Value>(&data)?;
            let card = membership::create_member_card(api, &draft).await?;
            print_payload(&card)
        }
        MembershipSubcommand::Pay { id, amount } => {
            let paid = membership::pay_card(api, id, amount).await?;
            print_payload(&paid)
        }
    }
}

async fn run_payment(
    api: &Api,
    store: &SessionStore,
    command: PaymentCommand,
) -> Result<(), CliError> {
    match command.command {
        PaymentSubcommand::Records { member_id } => {
            let member_id = resolve_member_id(store, member_id)?;
            let records = payment::payment_records(api, member_id).await?;
            print_payload(&records)
        }
        PaymentSubcommand::Total { member_id } => {
            let member_id = resolve_member_id(store, member_id)?;
            let total = payment::total_consumption(api, member_id).await?;
            println!("{total}");
            Ok(())
        }
    }
}

fn resolve_member_id(store: &SessionStore, flag: Option<i64>) -> Result<i64, CliError> {
    if let Some(member_id) = flag {
        return Ok(member_id);
    }
    store
        .session()
        .identity
        .as_ref()
        .map(|identity| identity.id)
        .ok_or(CliError::NotLoggedIn)
}

fn print_payload<T: Serialize>(payload: &T) -> Result<(), CliError> {
    print_json(&serde_json::to_value(payload)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
