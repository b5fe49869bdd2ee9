//! `latch acquire`: begin an edit session.

use super::CommandEnv;
use crate::auth::ConfigAuthorizer;
use crate::cli::AcquireArgs;
use crate::error::Result;
use crate::events::{Event, EventAction};
use crate::exit_codes;
use crate::gateway::{AccessGateway, EditAccess};
use crate::manager::LockManager;
use serde_json::json;

pub(crate) fn cmd_acquire(env: &CommandEnv, args: AcquireArgs) -> Result<i32> {
    let user = env.acting_user(&args.user);
    let manager = LockManager::new(&env.store, env.config.clone());
    let authorizer = ConfigAuthorizer::new(&env.config);
    let gateway = AccessGateway::new(&manager, &authorizer);

    match gateway.enter(&args.resource, &user)? {
        EditAccess::Granted { session } => {
            println!("Acquired lock on '{}' as '{}'.", args.resource, user);
            println!(
                "Keep it alive: latch heartbeat {} --watch  (every {}s; expires after {} minutes of silence)",
                args.resource,
                session.interval().num_seconds(),
                env.config.lock_duration_minutes
            );

            env.log_event(&Event::new(EventAction::Acquired, &user, &args.resource));
            Ok(exit_codes::SUCCESS)
        }
        EditAccess::Denied { holder, can_break } => {
            println!(
                "'{}' is locked by '{}' (locked {}).",
                args.resource,
                holder.owner,
                holder.time_since()
            );
            if can_break {
                println!(
                    "You may take it over: latch break {} --user {}",
                    args.resource, user
                );
            }

            env.log_event(
                &Event::new(EventAction::Denied, &user, &args.resource).with_details(json!({
                    "held_by": holder.owner,
                    "age_secs": holder.age().num_seconds(),
                    "can_break": can_break,
                })),
            );
            Ok(exit_codes::CONTENTION)
        }
    }
}
