//! `latch status`: inspect a resource's lock without touching it.

use super::CommandEnv;
use crate::cli::StatusArgs;
use crate::error::Result;
use crate::exit_codes;
use crate::manager::{LockManager, LockStatus};
use crate::record::format_time_since;
use chrono::Utc;

pub(crate) fn cmd_status(env: &CommandEnv, args: StatusArgs) -> Result<i32> {
    let user = env.acting_user(&args.user);
    let manager = LockManager::new(&env.store, env.config.clone());

    match manager.query_status(&args.resource, &user)? {
        LockStatus::Unlocked => {
            println!("'{}' is unlocked.", args.resource);
        }
        LockStatus::OwnedBySelf { since } => {
            println!(
                "'{}' is locked by you (locked {}).",
                args.resource,
                format_time_since(Utc::now().signed_duration_since(since))
            );
        }
        LockStatus::OwnedByOther(holder) => {
            println!(
                "'{}' is locked by '{}' (locked {}).",
                args.resource,
                holder.owner,
                holder.time_since()
            );
        }
    }

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::context::LockContext;
    use crate::store::{FileStore, LockStore};
    use crate::test_support::seed_aged_record;
    use chrono::Duration;
    use tempfile::TempDir;

    fn test_env(temp_dir: &TempDir) -> CommandEnv {
        let ctx = LockContext::at(temp_dir.path());
        let store = FileStore::new(&ctx.locks_dir);
        CommandEnv {
            ctx,
            config: Config::default(),
            store,
        }
    }

    fn status_args(resource: &str, user: &str) -> StatusArgs {
        StatusArgs {
            resource: resource.to_string(),
            user: Some(user.to_string()),
        }
    }

    #[test]
    fn status_succeeds_in_every_state() {
        let temp_dir = TempDir::new().unwrap();
        let env = test_env(&temp_dir);

        // Unlocked.
        assert_eq!(
            cmd_status(&env, status_args("page-1", "alice")).unwrap(),
            exit_codes::SUCCESS
        );

        // Owned by self / by other.
        seed_aged_record(&env.store, "page-1", "alice", Duration::seconds(30));
        assert_eq!(
            cmd_status(&env, status_args("page-1", "alice")).unwrap(),
            exit_codes::SUCCESS
        );
        assert_eq!(
            cmd_status(&env, status_args("page-1", "bob")).unwrap(),
            exit_codes::SUCCESS
        );
    }

    #[test]
    fn status_does_not_mutate_lock_state() {
        let temp_dir = TempDir::new().unwrap();
        let env = test_env(&temp_dir);

        seed_aged_record(&env.store, "page-1", "alice", Duration::minutes(5));
        let before = env.store.get("page-1").unwrap().unwrap();

        cmd_status(&env, status_args("page-1", "bob")).unwrap();

        assert_eq!(env.store.get("page-1").unwrap().unwrap(), before);
    }
}
