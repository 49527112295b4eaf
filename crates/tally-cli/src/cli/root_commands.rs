use clap::Subcommand;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Add a task.
    Add {
        /// Task description; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },
    /// List all tasks in creation order.
    List,
    /// Mark a task completed.
    Done { id: i64 },
    /// Delete a task.
    Delete { id: i64 },
}
