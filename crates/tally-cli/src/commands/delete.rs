use tally_service::TaskService;
use tally_store::Store;

use crate::cli::GlobalFlags;
use crate::output::output;

pub fn run<S: Store>(
    id: i64,
    service: &mut TaskService<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let task = service.delete_task(id)?;
    output(&task, flags.format)
}
