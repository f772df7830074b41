//! Implementations of `rsetup lock status` and `rsetup lock clear`.

use crate::cli::LockClearArgs;
use rsetup::locks::{SentinelState, format_age};
use rsetup::{PresetStore, Report, Result, RsetupError};

pub fn cmd_lock_status(store: &PresetStore) -> Result<Report> {
    let sentinel = store.sentinel();
    let message = format!(
        "Lock:   {}\nState:  {}\nTTL:    {}",
        sentinel.path().display(),
        sentinel.state(),
        format_age(sentinel.ttl())
    );
    Ok(Report::info(message))
}

pub fn cmd_lock_clear(store: &PresetStore, args: LockClearArgs) -> Result<Report> {
    if !args.force {
        return Err(RsetupError::InvalidArgument(
            "refusing to clear lock without --force flag.\n\n\
             Clearing the lock while another process is inside the store can \
             corrupt the setup document.\n\n\
             To clear the lock, run:\n  rsetup lock clear --force"
                .to_string(),
        ));
    }

    let sentinel = store.sentinel();
    let previous = sentinel.clear()?;
    if previous.is_held() {
        log::warn!("cleared a lock that was still held: {}", previous);
    }

    let message = match previous {
        SentinelState::Missing => format!("No lock file at {}.", sentinel.path().display()),
        previous => format!(
            "Cleared lock: {}\nPrevious state: {}",
            sentinel.path().display(),
            previous
        ),
    };
    Ok(Report::info(message))
}
