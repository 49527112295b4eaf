pub mod add;
pub mod delete;
pub mod done;
pub mod list;

use tally_service::TaskService;
use tally_store::Store;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
pub fn dispatch<S: Store>(
    command: Commands,
    service: &mut TaskService<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Add { description } => add::run(&description.join(" "), service, flags),
        Commands::List => list::run(service, flags),
        Commands::Done { id } => done::run(id, service, flags),
        Commands::Delete { id } => delete::run(id, service, flags),
    }
}

#[cfg(test)]
mod tests {
    use tally_core::TaskList;
    use tally_service::TaskService;
    use tally_store::{FileStore, Store};

    use super::dispatch;
    use crate::cli::{Commands, GlobalFlags, OutputFormat};

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            file: None,
            quiet: true,
            verbose: false,
        }
    }

    fn add(words: &[&str]) -> Commands {
        Commands::Add {
            description: words.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn full_command_flow_against_a_real_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tasks.json");
        let store = FileStore::new(&path);
        let mut service = TaskService::new(store).expect("fresh store loads");

        dispatch(add(&["buy", "groceries"]), &mut service, &flags()).expect("add");
        dispatch(add(&["water plants"]), &mut service, &flags()).expect("add");
        dispatch(Commands::Done { id: 1 }, &mut service, &flags()).expect("done");
        dispatch(Commands::Delete { id: 2 }, &mut service, &flags()).expect("delete");
        dispatch(Commands::List, &mut service, &flags()).expect("list");

        let persisted = FileStore::new(&path).load().expect("reload");
        let expected: Vec<(i64, &str, bool)> = vec![(1, "buy groceries", true)];
        let actual: Vec<(i64, &str, bool)> = persisted
            .tasks
            .iter()
            .map(|t| (t.id, t.description.as_str(), t.completed))
            .collect();
        assert_eq!(actual, expected);
        assert_eq!(persisted.next_id, 3);
    }

    #[test]
    fn business_errors_surface_through_dispatch() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("tasks.json"));
        let mut service = TaskService::new(store).expect("fresh store loads");

        let err = dispatch(Commands::Done { id: 1 }, &mut service, &flags())
            .expect_err("no such task");
        assert!(err.to_string().contains("task not found"));

        let err = dispatch(add(&["   "]), &mut service, &flags())
            .expect_err("blank description");
        assert!(err.to_string().contains("cannot be empty"));

        // Nothing was persisted for the failed calls.
        let persisted = FileStore::new(dir.path().join("tasks.json"))
            .load()
            .expect("reload");
        assert_eq!(persisted, TaskList::default());
    }
}
