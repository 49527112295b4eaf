use tally_service::TaskService;
use tally_store::Store;

use crate::cli::GlobalFlags;
use crate::output::output;

pub fn run<S: Store>(
    description: &str,
    service: &mut TaskService<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let task = service.add_task(description)?;
    output(&task, flags.format)
}
