use tally_core::Task;
use tally_service::TaskService;
use tally_store::Store;

use crate::cli::GlobalFlags;
use crate::output::output;

pub fn run<S: Store>(service: &TaskService<S>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tasks: Vec<Task> = service.tasks();
    output(&tasks, flags.format)
}
