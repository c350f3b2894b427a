mod input;
mod logging;
mod model;
mod notify;
mod pipeline;
mod report;
mod service;
mod strategy;

use std::io::Read;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::input::InputError;
use crate::input::lines::decode_lines;
use crate::input::store::JsonFileStore;
use crate::model::results::TeamResult;
use crate::pipeline::score_teams;
use crate::report::json::render_leaderboard_json;
use crate::report::text::render_leaderboard_text;
use crate::service::{LeaderboardService, ServiceError};
use crate::strategy::{ScorerConfig, build_strategy};

#[derive(Debug, Parser)]
#[command(name = "lass-rank", version, about = "Leniency-adjusted scoring and ranking")]
struct Cli {
    /// Record file holding sections, teams and the last leaderboard.
    #[arg(long, global = true, default_value = "lass-data.json")]
    data: PathBuf,

    #[arg(long, global = true, value_enum, default_value_t = ScorerKind::InProcess)]
    scorer: ScorerKind,

    /// Program run by `--scorer external`.
    #[arg(long, global = true)]
    scorer_bin: Option<PathBuf>,

    #[arg(long = "scorer-arg", global = true, allow_hyphen_values = true)]
    scorer_args: Vec<String>,

    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScorerKind {
    InProcess,
    External,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage judging sections.
    Section {
        #[command(subcommand)]
        action: SectionAction,
    },
    /// Manage teams.
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },
    /// Set one role's grade for a team.
    Grade {
        #[command(subcommand)]
        action: GradeAction,
    },
    /// Apply a bulk grade string (`id:role:grade,...;section|team|nat:role:grade`).
    Upload { text: String },
    /// Recompute and print the leaderboard.
    Rank {
        #[arg(long)]
        json: bool,
    },
    /// Print the last stored leaderboard.
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Rank teams given in the line protocol on stdin; JSON on stdout.
    ScoreLines,
}

#[derive(Debug, Subcommand)]
enum SectionAction {
    Add { name: String },
    Delete { id: String },
    List,
}

#[derive(Debug, Subcommand)]
enum TeamAction {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        nationality: String,
        #[arg(long)]
        section: Option<String>,
    },
    Delete { id: String },
    List,
}

#[derive(Debug, Subcommand)]
enum GradeAction {
    Set {
        team_id: String,
        role: String,
        grade: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Config(String),
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);
    if let Err(err) = run(cli) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        data,
        scorer,
        scorer_bin,
        scorer_args,
        command,
        ..
    } = cli;
    let open = move || -> Result<LeaderboardService<JsonFileStore>, CliError> {
        let config = scorer_config(scorer, scorer_bin, scorer_args)?;
        Ok(LeaderboardService::open(JsonFileStore::new(data), build_strategy(&config))?)
    };

    match command {
        Command::ScoreLines => score_lines()?,
        Command::Section { action } => {
            let mut svc = open()?;
            match action {
                SectionAction::Add { name } => println!("{}", svc.add_section(&name)?),
                SectionAction::Delete { id } => svc.delete_section(&id)?,
                SectionAction::List => {
                    for s in svc.sections() {
                        println!("{}\t{}", s.id, s.name);
                    }
                }
            }
        }
        Command::Team { action } => {
            let mut svc = open()?;
            match action {
                TeamAction::Add {
                    name,
                    nationality,
                    section,
                } => println!("{}", svc.add_team(&name, &nationality, section.as_deref())?),
                TeamAction::Delete { id } => svc.delete_team(&id)?,
                TeamAction::List => {
                    for t in svc.teams() {
                        let grades: Vec<String> = t
                            .grades
                            .iter()
                            .map(|g| format!("{}:{}", g.role, g.token))
                            .collect();
                        println!(
                            "{}\t{}\t{}\t{}\t{}",
                            t.id,
                            t.name,
                            t.nationality,
                            t.section_id.as_deref().unwrap_or("-"),
                            grades.join(",")
                        );
                    }
                }
            }
        }
        Command::Grade {
            action: GradeAction::Set {
                team_id,
                role,
                grade,
            },
        } => open()?.set_grade(&team_id, &role, &grade)?,
        Command::Upload { text } => {
            let report = open()?.upload_bulk(&text)?;
            println!(
                "processed {} team(s), skipped {} entr{}",
                report.processed,
                report.issues.len(),
                if report.issues.len() == 1 { "y" } else { "ies" }
            );
        }
        Command::Rank { json } => print_leaderboard(&open()?.recompute()?, json)?,
        Command::Show { json } => print_leaderboard(&open()?.leaderboard()?, json)?,
    }
    Ok(())
}

fn scorer_config(
    kind: ScorerKind,
    program: Option<PathBuf>,
    args: Vec<String>,
) -> Result<ScorerConfig, CliError> {
    match kind {
        ScorerKind::InProcess => Ok(ScorerConfig::InProcess),
        ScorerKind::External => {
            let program = program.ok_or_else(|| {
                CliError::Config("--scorer external requires --scorer-bin".to_string())
            })?;
            Ok(ScorerConfig::External { program, args })
        }
    }
}

fn score_lines() -> Result<(), CliError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(InputError::from)?;
    let (teams, sections) = decode_lines(&text);
    tracing::debug!(teams = teams.len(), sections = sections.len(), "line protocol decoded");
    println!("{}", render_leaderboard_json(&score_teams(&teams, &sections))?);
    Ok(())
}

fn print_leaderboard(results: &[TeamResult], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", render_leaderboard_json(results)?);
    } else {
        print!("{}", render_leaderboard_text(results));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
