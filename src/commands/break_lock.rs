//! `latch break`: forcibly take over a lock.

use super::CommandEnv;
use crate::auth::{AnyResource, ConfigAuthorizer};
use crate::breaker::{BreakLockService, BreakOutcome};
use crate::cli::BreakArgs;
use crate::error::{LatchError, Result};
use crate::events::{Event, EventAction};
use crate::exit_codes;
use crate::manager::LockManager;
use serde_json::json;

pub(crate) fn cmd_break(env: &CommandEnv, args: BreakArgs) -> Result<i32> {
    let user = env.acting_user(&args.user);
    let manager = LockManager::new(&env.store, env.config.clone());
    let authorizer = ConfigAuthorizer::new(&env.config);
    let service = BreakLockService::new(&manager, &authorizer, &AnyResource);

    match service.break_lock(&args.resource, &user)? {
        BreakOutcome::Broken { new_owner } => {
            println!(
                "Lock on '{}' broken; '{}' is now the owner.",
                args.resource, new_owner
            );
            println!("Resume editing: latch heartbeat {} --watch", args.resource);

            env.log_event(
                &Event::new(EventAction::LockBroken, &user, &args.resource)
                    .with_details(json!({ "new_owner": new_owner })),
            );
            Ok(exit_codes::SUCCESS)
        }
        BreakOutcome::Forbidden => {
            env.log_event(&Event::new(EventAction::BreakRefused, &user, &args.resource));
            Err(LatchError::Unauthorized(format!(
                "user '{}' may not break locks; add them to break_users in {}",
                user,
                env.ctx.config_path().display()
            )))
        }
        BreakOutcome::NotFound => Err(LatchError::UserError(format!(
            "unknown resource '{}'",
            args.resource
        ))),
    }
}
