//! `latch list`: show every lock record on disk.

use super::CommandEnv;
use crate::error::Result;
use crate::exit_codes;

pub(crate) fn cmd_list(env: &CommandEnv) -> Result<i32> {
    let records = env.store.list()?;

    if records.is_empty() {
        println!("No locks.");
        return Ok(exit_codes::SUCCESS);
    }

    let duration = env.config.lock_duration();
    for (resource_id, record) in records {
        let state = if record.is_live(duration) {
            "live"
        } else {
            "expired"
        };
        println!(
            "{}  owner: {}  locked {}  [{}]",
            resource_id,
            record.owner,
            record.time_since(),
            state
        );
    }

    Ok(exit_codes::SUCCESS)
}
