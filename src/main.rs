//! Command line front end for the 12-week tracker.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use twelve_week::adapters::{FileStateStorage, InMemoryStateStorage, SystemClock};
use twelve_week::application::{
    StartupStatus, Tracker, TrackerError, TrackerEvent, WeeklyView,
};
use twelve_week::config::{AppConfig, LoggingConfig, StorageBackend};
use twelve_week::domain::cycle::Countdown;
use twelve_week::domain::foundation::{CycleId, GoalId, TaskId};
use twelve_week::domain::state::View;
use twelve_week::ports::StateStorage;

#[derive(Parser)]
#[command(name = "twelve-week", version, about = "Plan and track 12-week cycles")]
struct Cli {
    /// Directory holding the saved document (overrides configuration)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, select, or list cycles
    Cycle {
        #[command(subcommand)]
        action: CycleAction,
    },
    /// Create, list, or delete goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },
    /// Toggle a sub goal's completion
    Toggle { id: String },
    /// Manage legacy weekly tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Switch the saved view selector
    View { name: String },
    /// Show the weekly dashboard
    Week,
    /// Show statistics and XP
    Stats,
    /// Show time left in the current week
    Countdown {
        /// Keep refreshing once per minute until interrupted
        #[arg(long)]
        follow: bool,
    },
}

#[derive(Subcommand)]
enum CycleAction {
    /// Start a new cycle (date as YYYY-MM-DD)
    New { title: String, start: String },
    /// Make a cycle current
    Select { id: String },
    /// List all cycles
    List,
}

#[derive(Subcommand)]
enum GoalAction {
    /// Add a main goal to the current cycle
    Main {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Weekly priority rank; 1-3 shows on the dashboard
        #[arg(long, default_value = "0")]
        priority: i32,
    },
    /// Add a sub goal under a main goal
    Sub {
        parent: String,
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List main goals of the current cycle with their sub goals
    List,
    /// Delete a goal
    Delete { id: String },
}

#[derive(Subcommand)]
enum TaskAction {
    /// Add a task to a goal for a given week
    New {
        goal: String,
        title: String,
        #[arg(long)]
        week: u8,
    },
    Toggle { id: String },
    Delete { id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            LoggingConfig::default().init();
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    config.logging.init();
    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    let storage: Arc<dyn StateStorage> = match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; nothing will be kept after exit");
            Arc::new(InMemoryStateStorage::new())
        }
        StorageBackend::File => {
            let data_dir = match cli.data_dir.clone().map_or_else(
                || config.storage.resolve_data_dir(),
                Ok,
            ) {
                Ok(dir) => dir,
                Err(e) => {
                    tracing::error!(error = %e, "No data directory");
                    return ExitCode::FAILURE;
                }
            };
            Arc::new(FileStateStorage::new(data_dir).with_file_name(&config.storage.file_name))
        }
    };

    let mut tracker = Tracker::open(storage, Arc::new(SystemClock)).await;
    if let StartupStatus::Recovered { reason } = tracker.startup_status() {
        println!("Saved data could not be read ({}); starting fresh.", reason);
    }

    match run(cli.command, &mut tracker).await {
        Ok(()) => {
            print_events(tracker.take_events());
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_events(tracker.take_events());
            tracing::error!(error = %e, applied = e.is_applied(), "Command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, tracker: &mut Tracker) -> Result<(), TrackerError> {
    match command {
        Commands::Cycle { action } => match action {
            CycleAction::New { title, start } => {
                let id = tracker.create_cycle(&title, &start).await?;
                println!("Created cycle {}", id);
            }
            CycleAction::Select { id } => {
                tracker.select_cycle(CycleId::from(id)).await?;
                println!("Current week: {}", tracker.state().current_week);
            }
            CycleAction::List => {
                for cycle in tracker.cycle_summaries() {
                    let marker = if cycle.active { "*" } else { " " };
                    println!("{} {}  {}  ({})", marker, cycle.cycle_id, cycle.title, cycle.date_range);
                }
            }
        },
        Commands::Goal { action } => match action {
            GoalAction::Main {
                title,
                description,
                priority,
            } => {
                let id = tracker.create_main_goal(&title, &description, priority).await?;
                println!("Created main goal {}", id);
            }
            GoalAction::Sub {
                parent,
                title,
                description,
            } => {
                let id = tracker
                    .create_sub_goal(&GoalId::from(parent), &title, &description)
                    .await?;
                println!("Created sub goal {}", id);
            }
            GoalAction::List => print_goals(tracker),
            GoalAction::Delete { id } => {
                let removed = tracker.delete_goal(&GoalId::from(id)).await?;
                println!("Deleted '{}'", removed.title());
            }
        },
        Commands::Toggle { id } => {
            let toggle = tracker.toggle_sub_goal(&GoalId::from(id)).await?;
            println!("{}", if toggle.completed { "Completed" } else { "Reopened" });
        }
        Commands::Task { action } => match action {
            TaskAction::New { goal, title, week } => {
                let id = tracker.create_task(&GoalId::from(goal), &title, week).await?;
                println!("Created task {}", id);
            }
            TaskAction::Toggle { id } => {
                let completed = tracker.toggle_task(&TaskId::from(id)).await?;
                println!("{}", if completed { "Completed" } else { "Reopened" });
            }
            TaskAction::Delete { id } => {
                tracker.delete_task(&TaskId::from(id)).await?;
                println!("Deleted task");
            }
        },
        Commands::View { name } => {
            tracker.switch_view(View::from(name)).await?;
        }
        Commands::Week => match tracker.weekly_view() {
            Some(view) => print_weekly(&view),
            None => println!("No active cycle. Create one with `cycle new`."),
        },
        Commands::Stats => {
            let stats = tracker.stats_view();
            println!("Level {}  ({} / {} XP, {})", stats.xp.level, stats.xp.xp, stats.xp.threshold, stats.xp.fill);
            println!("Lifetime XP: {}", tracker.state().user.total_xp);
            println!("Main goals: {}", stats.statistics.main_goals);
            println!(
                "Sub goals: {} / {} ({})",
                stats.statistics.completed_sub_goals,
                stats.statistics.sub_goals,
                stats.statistics.completion_rate
            );
            println!(
                "Cycle progress: {} / {} ({})",
                stats.overall.completed, stats.overall.total, stats.overall.percentage
            );
        }
        Commands::Countdown { follow } => {
            if follow {
                follow_countdown(tracker).await;
            } else {
                print_countdown(tracker);
            }
        }
    }
    Ok(())
}

/// Reprints the countdown every minute until Ctrl-C.
async fn follow_countdown(tracker: &mut Tracker) {
    let mut ticker = tokio::time::interval(Duration::from_secs(60));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                tracker.refresh();
                print_countdown(tracker);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!("Countdown interrupted");
                break;
            }
        }
    }
}

fn print_countdown(tracker: &Tracker) {
    match tracker.weekly_view().and_then(|view| view.countdown.map(|c| (view.week, c))) {
        Some((week, countdown)) => println!("Week {}: {}", week, describe_countdown(&countdown)),
        None => println!("No active cycle."),
    }
}

fn describe_countdown(countdown: &Countdown) -> String {
    if countdown.expired {
        "week ended".to_string()
    } else {
        format!(
            "{}d {}h {}m left",
            countdown.days, countdown.hours, countdown.minutes
        )
    }
}

fn print_weekly(view: &WeeklyView) {
    println!("{}: week {} of 12  ({})", view.cycle_title, view.week, view.date_range);
    if let Some(countdown) = &view.countdown {
        println!("  {}", describe_countdown(countdown));
    }
    println!(
        "  Progress: {} / {} ({})",
        view.progress.completed, view.progress.total, view.progress.percentage
    );

    println!("\nTop priorities");
    if view.priorities.is_empty() {
        println!("  (none ranked 1-3)");
    }
    for card in &view.priorities {
        println!("  #{} {}  {}  [{}]", card.priority, card.title, card.progress, card.goal_id);
    }

    println!("\nSub goals");
    for row in &view.sub_goals {
        let check = if row.completed { "x" } else { " " };
        println!("  [{}] {}  <- {}  [{}]", check, row.title, row.parent_title, row.goal_id);
    }

    println!("\nThis week");
    for day in &view.trend {
        println!("  {} {}  {}", day.weekday, day.date, "#".repeat(day.count as usize));
    }
}

fn print_goals(tracker: &Tracker) {
    let state = tracker.state();
    for goal in tracker.main_goal_summaries() {
        println!(
            "{}  {}  (priority {}, {}/{} done, {})",
            goal.goal_id,
            goal.title,
            goal.priority,
            goal.completed_sub_goals,
            goal.sub_goal_count,
            goal.progress
        );
        for sub in state.sub_goals_of(&goal.goal_id) {
            let check = if sub.completed { "x" } else { " " };
            println!("    [{}] {}  {}", check, sub.id, sub.title);
        }
    }
}

fn print_events(events: Vec<TrackerEvent>) {
    for event in events {
        match event {
            TrackerEvent::XpAwarded { amount, reason } => println!("{:+} XP  {}", amount, reason),
            TrackerEvent::LeveledUp {
                new_level,
                levels_gained,
            } => println!("Level up! Now level {} (+{})", new_level, levels_gained),
            other => tracing::debug!(event = other.event_type(), "Event"),
        }
    }
}
