// goal.rs — Goal subcommands: add, complete, restore, delete, list.

use std::fmt::Write as _;

use clap::{ArgGroup, Subcommand};
use longterm_goals::{Goal, GoalStore, KeyValueStorage};

use super::Context;

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a new goal to the top of the list.
    Add {
        /// Goal title (e.g., "Learn Rust"); words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Mark a goal completed.
    Complete {
        /// Goal ID.
        id: i64,
    },
    /// Move a completed goal back to the active list.
    Restore {
        /// Goal ID.
        id: i64,
    },
    /// Delete a goal.
    Delete {
        /// Goal ID.
        id: i64,
    },
    /// List goals, newest first.
    #[command(group(ArgGroup::new("filter").args(["active", "completed"])))]
    List {
        /// Only goals still in progress.
        #[arg(long)]
        active: bool,
        /// Only completed goals.
        #[arg(long)]
        completed: bool,
        /// Print the JSON array instead of a table.
        #[arg(long)]
        json: bool,
    },
}

/// Which part of the collection `list` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filter {
    All,
    Active,
    Completed,
}

pub fn execute(cmd: &GoalCommands, ctx: &Context) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;

    match cmd {
        GoalCommands::Add { title } => add_goal(&mut store, &title.join(" ")),
        GoalCommands::Complete { id } => complete_goal(&mut store, *id),
        GoalCommands::Restore { id } => restore_goal(&mut store, *id),
        GoalCommands::Delete { id } => delete_goal(&mut store, *id),
        GoalCommands::List {
            active,
            completed,
            json,
        } => {
            let filter = match (*active, *completed) {
                (true, _) => Filter::Active,
                (_, true) => Filter::Completed,
                _ => Filter::All,
            };
            let goals = select(&store, filter);
            if *json {
                println!("{}", serde_json::to_string_pretty(&goals)?);
            } else {
                print!("{}", render_table(&goals));
            }
            Ok(())
        }
    }
}

fn add_goal<S: KeyValueStorage>(store: &mut GoalStore<S>, title: &str) -> anyhow::Result<()> {
    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("Goal title must not be empty");
    }
    let goal = store.add(title)?;
    println!("Goal added: {}", goal.id);
    println!("  Title: {}", goal.title);
    Ok(())
}

fn complete_goal<S: KeyValueStorage>(store: &mut GoalStore<S>, id: i64) -> anyhow::Result<()> {
    if !store.complete(id)? {
        anyhow::bail!("Goal not found: {}", id);
    }
    println!("Completed goal {}", id);
    Ok(())
}

fn restore_goal<S: KeyValueStorage>(store: &mut GoalStore<S>, id: i64) -> anyhow::Result<()> {
    if !store.restore(id)? {
        anyhow::bail!("Goal not found: {}", id);
    }
    println!("Restored goal {}", id);
    Ok(())
}

fn delete_goal<S: KeyValueStorage>(store: &mut GoalStore<S>, id: i64) -> anyhow::Result<()> {
    match store.delete(id)? {
        0 => anyhow::bail!("Goal not found: {}", id),
        1 => println!("Deleted goal {}", id),
        n => println!("Deleted {} goals with id {}", n, id),
    }
    Ok(())
}

fn select<S: KeyValueStorage>(store: &GoalStore<S>, filter: Filter) -> Vec<&Goal> {
    match filter {
        Filter::All => store.goals().iter().collect(),
        Filter::Active => store.active_goals(),
        Filter::Completed => store.completed_goals(),
    }
}

fn render_table(goals: &[&Goal]) -> String {
    let mut out = String::new();
    if goals.is_empty() {
        out.push_str("No goals found.\n");
        return out;
    }

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{:<15} {:<32} {:<10} {:<20}",
        "ID", "TITLE", "STATUS", "CREATED"
    );
    let _ = writeln!(out, "{}", "-".repeat(80));
    for g in goals {
        let status = if g.completed { "done" } else { "active" };
        let _ = writeln!(
            out,
            "{:<15} {:<32} {:<10} {:<20}",
            g.id,
            truncate(&g.title, 30),
            status,
            g.created_at.format("%Y-%m-%d %H:%M"),
        );
    }
    let _ = writeln!(out, "\n{} goal(s) total.", goals.len());
    out
}

/// Shorten to at most `max` characters. Counts chars, not bytes, so CJK
/// titles are never cut mid-character.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}
