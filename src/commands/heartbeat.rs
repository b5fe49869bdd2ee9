//! `latch heartbeat`: keep an edit session's lock alive.

use super::CommandEnv;
use crate::cli::HeartbeatArgs;
use crate::error::Result;
use crate::events::{Event, EventAction};
use crate::exit_codes;
use crate::heartbeat::HeartbeatSession;
use crate::manager::{LockManager, RefreshResult};
use serde_json::json;

pub(crate) fn cmd_heartbeat(env: &CommandEnv, args: HeartbeatArgs) -> Result<i32> {
    let user = env.acting_user(&args.user);
    let manager = LockManager::new(&env.store, env.config.clone());
    let mut session =
        HeartbeatSession::new(&args.resource, &user, env.config.heartbeat_interval());

    // One beat unless --watch; --count caps a watch loop.
    let limit = if args.watch { args.count } else { Some(args.count.unwrap_or(1)) };
    let sleep = session
        .interval()
        .to_std()
        .unwrap_or(std::time::Duration::from_secs(15));

    let mut sent: u32 = 0;
    loop {
        match session.beat(&manager)? {
            RefreshResult::StillOwned => {
                println!("Lock on '{}' refreshed for '{}'.", args.resource, user);
                env.log_event(&Event::new(EventAction::Refreshed, &user, &args.resource));
            }
            RefreshResult::TakenOver(holder) => {
                println!(
                    "Lock on '{}' was taken over by '{}' (locked {}).",
                    args.resource,
                    holder.owner,
                    holder.time_since()
                );

                env.log_event(
                    &Event::new(EventAction::TakenOver, &user, &args.resource).with_details(
                        json!({
                            "held_by": holder.owner,
                            "age_secs": holder.age().num_seconds(),
                        }),
                    ),
                );
                return Ok(exit_codes::CONTENTION);
            }
        }

        sent += 1;
        if let Some(limit) = limit
            && sent >= limit
        {
            return Ok(exit_codes::SUCCESS);
        }

        std::thread::sleep(sleep);
    }
}
