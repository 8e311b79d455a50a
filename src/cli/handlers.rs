use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::snapshot::StoreError;
use crate::model::Filter;
use crate::store::TaskStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = crate::io::resolve_data_dir(cli.data_dir.as_deref())?;

    match cli.command {
        // No subcommand is routed to the TUI in main.rs
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::Add(args) => cmd_add(&data_dir, args, json),
            Commands::List(args) => cmd_list(&data_dir, args, json),
            Commands::Toggle(args) => cmd_toggle(&data_dir, args, json),
            Commands::Edit(args) => cmd_edit(&data_dir, args),
            Commands::Rm(args) => cmd_rm(&data_dir, args),
            Commands::Stats => cmd_stats(&data_dir, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open_store(data_dir: &Path) -> Result<TaskStore, StoreError> {
    let store = TaskStore::open(data_dir)?;
    if let Some(aside) = store.salvaged() {
        eprintln!(
            "warning: tasks.json was unreadable; moved aside to {}",
            aside.display()
        );
    }
    Ok(store)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_add(data_dir: &Path, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(data_dir)?;
    let Some(id) = store.add(&args.name)? else {
        return Err("task name is empty".into());
    };

    if json {
        let out = TaskJson {
            id,
            name: args.name,
            completed: false,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("added {}: {}", id, args.name);
    }
    Ok(())
}

fn cmd_list(data_dir: &Path, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match args.filter.as_deref() {
        Some(s) => Filter::from_name(s)
            .ok_or_else(|| format!("unknown filter: {} (try all, active, completed)", s))?,
        None => Filter::All,
    };

    let store = open_store(data_dir)?;
    let visible = filter.apply(store.tasks());

    if json {
        let out = TaskListJson {
            filter,
            tasks: visible.iter().map(|t| task_to_json(t)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if visible.is_empty() {
        println!("no tasks");
    } else {
        for task in &visible {
            println!("{}", task_row(task));
        }
    }
    Ok(())
}

fn cmd_toggle(
    data_dir: &Path,
    args: ToggleArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(data_dir)?;
    if !store.toggle(args.id)? {
        return Err(format!("no task with id {}", args.id).into());
    }
    // toggle returned true, so the task is present
    let task = store.get(args.id).ok_or("task missing after toggle")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task_to_json(task))?);
    } else {
        let state = if task.completed { "completed" } else { "active" };
        println!("{} is now {}: {}", task.id, state, task.name);
    }
    Ok(())
}

fn cmd_edit(data_dir: &Path, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.name.trim().is_empty() {
        return Err("task name is empty".into());
    }
    let mut store = open_store(data_dir)?;
    if !store.edit(args.id, &args.name)? {
        return Err(format!("no task with id {}", args.id).into());
    }
    println!("edited {}: {}", args.id, args.name);
    Ok(())
}

fn cmd_rm(data_dir: &Path, args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(data_dir)?;
    if !store.remove(args.id)? {
        return Err(format!("no task with id {}", args.id).into());
    }
    println!("removed {}", args.id);
    Ok(())
}

fn cmd_stats(data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(data_dir)?;
    let total = store.tasks().len();
    let completed = store.tasks().iter().filter(|t| t.completed).count();
    let active = total - completed;

    if json {
        let out = StatsJson {
            total,
            active,
            completed,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} tasks: {} active, {} completed", total, active, completed);
    }
    Ok(())
}
