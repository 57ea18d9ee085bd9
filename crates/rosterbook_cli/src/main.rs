//! Command-line front-end for the roster engine.
//!
//! This binary is the engine's external collaborator: it owns form
//! validation (non-empty name, gpa range, course catalog membership, email
//! shape), gates roster commands behind the active session, and delivers
//! the CSV artifact to disk. The engine itself trusts this edge.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use once_cell::sync::Lazy;
use regex::Regex;
use rosterbook_core::{
    by_course, init_logging, load_theme, overview, roster_to_csv, run_query, save_theme,
    FilterOption, RosterConfig, RosterQuery, RosterService, SessionService, SortKey,
    SqliteKeyValueStore, Student, StudentDraft, StudentPatch, Theme, CSV_FILE_NAME,
};
use std::fs;
use std::path::PathBuf;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Parser)]
#[command(name = "rosterbook", version, about = "Student roster manager")]
struct Cli {
    /// Path to the roster store database.
    #[arg(long, env = "ROSTERBOOK_DB")]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files; file logging is off when
    /// unset.
    #[arg(long, env = "ROSTERBOOK_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "ROSTERBOOK_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account and log in.
    Register {
        name: String,
        email: String,
        password: String,
    },
    /// Log in with an existing account.
    Login { email: String, password: String },
    /// End the active session.
    Logout,
    /// Show the active session.
    Whoami,
    /// Add a student to the roster.
    Add {
        name: String,
        course: String,
        gpa: f64,
        /// Mark the student absent instead of the default present.
        #[arg(long)]
        absent: bool,
    },
    /// List students with search, filter, and sort applied.
    List {
        /// Case-insensitive substring matched against names.
        #[arg(long, default_value = "")]
        search: String,
        /// all | present | absent | <course name>
        #[arg(long, default_value = "all")]
        filter: String,
        /// name | gpa
        #[arg(long, default_value = "name")]
        sort: String,
    },
    /// Update fields of an existing student.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        gpa: Option<f64>,
    },
    /// Remove a student by id.
    Remove { id: i64 },
    /// Flip a student's attendance flag.
    Toggle { id: i64 },
    /// Show the roster overview statistics.
    Stats,
    /// Show the per-course breakdown.
    Courses,
    /// Write the current view as a CSV file.
    Export {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        filter: String,
        #[arg(long, default_value = "name")]
        sort: String,
        /// Output path; defaults to students.csv in the working directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Reset the roster to the seed data. Destructive.
    Reset {
        /// Confirm the reset; without this flag nothing happens.
        #[arg(long)]
        yes: bool,
    },
    /// Show or set the stored theme preference.
    Theme {
        /// light | dark
        value: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RosterConfig::default();
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config.log_dir = cli.log_dir.clone();

    if let Some(log_dir) = &config.log_dir {
        let dir = log_dir
            .to_str()
            .context("log directory path must be valid UTF-8")?;
        init_logging(&config.log_level, dir)
            .map_err(|message| anyhow::anyhow!(message))
            .context("failed to initialize logging")?;
    }

    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create data directory")?;
        }
    }

    let conn = rosterbook_core::open_store(&config.db_path).context("failed to open store")?;
    let kv = SqliteKeyValueStore::try_new(&conn).context("store is not initialized")?;
    let sessions = SessionService::new(&kv);

    match cli.command {
        Command::Register {
            name,
            email,
            password,
        } => {
            validate_account_form(&name, &email, &password)?;
            let session = sessions.register(&name, &email, &password)?;
            println!("Registered and logged in as {} <{}>", session.name, session.email);
        }
        Command::Login { email, password } => {
            let session = sessions.login(&email, &password)?;
            println!("Logged in as {} <{}>", session.name, session.email);
        }
        Command::Logout => {
            sessions.logout()?;
            println!("Logged out");
        }
        Command::Whoami => match sessions.current_user()? {
            Some(session) => println!("{} <{}>", session.name, session.email),
            None => println!("Not logged in"),
        },
        Command::Theme { value } => match value {
            Some(label) => {
                let Some(theme) = Theme::from_label(&label) else {
                    bail!("unknown theme `{label}`; expected light|dark");
                };
                save_theme(&kv, theme)?;
                println!("Theme set to {theme}");
            }
            None => println!("{}", load_theme(&kv)?),
        },
        roster_command => {
            // The dashboard is only reachable with an active session.
            if sessions.current_user()?.is_none() {
                bail!("not logged in; run `rosterbook login` first");
            }
            run_roster_command(roster_command, &config, &kv)?;
        }
    }

    Ok(())
}

fn run_roster_command(
    command: Command,
    config: &RosterConfig,
    kv: &SqliteKeyValueStore<'_>,
) -> Result<()> {
    let mut roster = RosterService::open(kv).context("failed to load roster")?;

    match command {
        Command::Add {
            name,
            course,
            gpa,
            absent,
        } => {
            validate_student_form(&name, &course, gpa, config)?;
            let mut draft = StudentDraft::new(name, course, gpa);
            draft.is_present = !absent;
            let added = roster.add(draft)?;
            println!("Added #{} {}", added.id, added.name);
        }
        Command::List {
            search,
            filter,
            sort,
        } => {
            let query = parse_query(search, &filter, &sort)?;
            let view = run_query(roster.students(), &query);
            if roster.students().is_empty() {
                println!("No students yet. Add your first student!");
            } else if view.is_empty() {
                println!("No results found. Try adjusting your search or filters.");
            } else {
                println!("Showing {} of {} students", view.len(), roster.students().len());
                for student in &view {
                    print_student(student);
                }
            }
        }
        Command::Edit {
            id,
            name,
            course,
            gpa,
        } => {
            if name.is_none() && course.is_none() && gpa.is_none() {
                bail!("nothing to update; pass at least one of --name, --course, --gpa");
            }
            if let Some(course) = &course {
                validate_course(course, config)?;
            }
            if let Some(gpa) = gpa {
                validate_gpa_input(gpa)?;
            }
            let patch = StudentPatch { name, course, gpa };
            if roster.edit(id, &patch)? {
                println!("Updated #{id}");
            } else {
                println!("No student with id {id}");
            }
        }
        Command::Remove { id } => {
            if roster.delete(id)? {
                println!("Removed #{id}");
            } else {
                println!("No student with id {id}");
            }
        }
        Command::Toggle { id } => {
            if roster.toggle_attendance(id)? {
                let student = roster
                    .students()
                    .iter()
                    .find(|s| s.id == id)
                    .context("toggled student should exist")?;
                println!(
                    "#{id} is now {}",
                    if student.is_present { "present" } else { "absent" }
                );
            } else {
                println!("No student with id {id}");
            }
        }
        Command::Stats => match overview(roster.students()) {
            Some(stats) => {
                println!("Total students:  {}", stats.total);
                println!("Average GPA:     {}", stats.average_gpa_display());
                println!("Attendance rate: {}%", stats.attendance_rate);
                println!("Top performers:  {}", stats.top_performers);
                println!("Highest GPA:     {}", stats.highest_gpa_display());
                println!("Lowest GPA:      {}", stats.lowest_gpa_display());
            }
            None => println!("No students yet."),
        },
        Command::Courses => {
            let breakdown = by_course(roster.students());
            if breakdown.is_empty() {
                println!("No students yet.");
            }
            for course in breakdown {
                println!(
                    "{}: {} student{}, avg GPA {}, attendance {}%",
                    course.course,
                    course.count,
                    if course.count == 1 { "" } else { "s" },
                    course.average_gpa_display(),
                    course.attendance_rate
                );
            }
        }
        Command::Export {
            search,
            filter,
            sort,
            out,
        } => {
            let query = parse_query(search, &filter, &sort)?;
            let view = run_query(roster.students(), &query);
            let csv = roster_to_csv(&view);
            let path = out.unwrap_or_else(|| PathBuf::from(CSV_FILE_NAME));
            fs::write(&path, csv).context("failed to write CSV file")?;
            println!("Exported {} students to {}", view.len(), path.display());
        }
        Command::Reset { yes } => {
            if !yes {
                bail!("this wipes all student data; pass --yes to confirm");
            }
            roster.reset_to_seed()?;
            println!("Roster reset to seed data");
        }
        // Session commands are handled before the auth gate.
        Command::Register { .. }
        | Command::Login { .. }
        | Command::Logout
        | Command::Whoami
        | Command::Theme { .. } => unreachable!("session commands are dispatched earlier"),
    }

    Ok(())
}

fn parse_query(search: String, filter: &str, sort: &str) -> Result<RosterQuery> {
    let Some(sort) = SortKey::from_label(sort) else {
        bail!("unknown sort `{sort}`; expected name|gpa");
    };
    Ok(RosterQuery {
        search_text: search,
        filter: FilterOption::from_label(filter),
        sort,
    })
}

fn print_student(student: &Student) {
    println!(
        "#{:<4} {:<24} {:<24} GPA {:<4} {}",
        student.id,
        student.name,
        student.course,
        student.gpa,
        if student.is_present { "Present" } else { "Absent" }
    );
}

fn validate_student_form(name: &str, course: &str, gpa: f64, config: &RosterConfig) -> Result<()> {
    if name.trim().is_empty() {
        bail!("name must not be blank");
    }
    validate_course(course, config)?;
    validate_gpa_input(gpa)?;
    Ok(())
}

fn validate_course(course: &str, config: &RosterConfig) -> Result<()> {
    if !config.has_course(course) {
        bail!(
            "unknown course `{course}`; available: {}",
            config.courses.join(", ")
        );
    }
    Ok(())
}

fn validate_gpa_input(gpa: f64) -> Result<()> {
    if !gpa.is_finite() || !(0.0..=4.0).contains(&gpa) {
        bail!("gpa must be between 0.0 and 4.0");
    }
    Ok(())
}

fn validate_account_form(name: &str, email: &str, password: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("name must not be blank");
    }
    if !EMAIL_PATTERN.is_match(email.trim()) {
        bail!("`{email}` does not look like an email address");
    }
    if password.is_empty() {
        bail!("password must not be empty");
    }
    Ok(())
}
