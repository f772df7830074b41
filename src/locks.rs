//! Locking subsystem for rsetup.
//!
//! Every read and write of the preset document happens under a cooperative,
//! self-expiring lock shared by all processes that use the same store.
//!
//! # Sentinel File
//!
//! The lock is a small text file next to the document (`rsetup.mutex`). It
//! holds either the acquisition time as decimal seconds since the Unix epoch,
//! or the literal `0` once released. The file is only ever overwritten, never
//! deleted.
//!
//! The lock counts as held iff the file exists, its content parses as a
//! number, and that timestamp lies within `ttl` of the current time, in
//! either direction.
//! A holder that dies without releasing therefore blocks others for at most
//! `ttl`. Mutual exclusion is probabilistic: two processes that both observe
//! a free lock in the same instant will both proceed.
//!
//! # RAII Guards
//!
//! [`SentinelLock::lock`] returns a guard that writes `0` when dropped, so the
//! lock is released on every exit path including panics. If the release write
//! fails during drop, a warning is logged but the program does not crash.

use crate::context::StoreContext;
use crate::error::{Result, RsetupError};
use chrono::Utc;
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Sentinel content written on release.
const RELEASED: &str = "0";

/// Observed state of a sentinel file.
#[derive(Debug, Clone, PartialEq)]
pub enum SentinelState {
    /// The sentinel file does not exist.
    Missing,
    /// The sentinel holds `0`.
    Released,
    /// The sentinel content is not a finite number (or could not be read).
    Unreadable(String),
    /// Timestamp within `ttl` of now.
    Held { timestamp: f64, age: Duration },
    /// Timestamp at least `ttl` in the past (never released), or more than
    /// `ttl` in the future.
    Stale { timestamp: f64, age: Duration },
}

impl SentinelState {
    /// Whether this state blocks other callers.
    pub fn is_held(&self) -> bool {
        matches!(self, SentinelState::Held { .. })
    }
}

impl fmt::Display for SentinelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentinelState::Missing => write!(f, "free (no sentinel file)"),
            SentinelState::Released => write!(f, "free (released)"),
            SentinelState::Unreadable(content) => write!(f, "free (unreadable: {:?})", content),
            SentinelState::Held { age, .. } => write!(f, "HELD (age: {})", format_age(*age)),
            SentinelState::Stale { age, .. } => {
                write!(f, "free (STALE, never released, age: {})", format_age(*age))
            }
        }
    }
}

/// Format a lock age as a short human-readable string.
pub fn format_age(age: Duration) -> String {
    let millis = age.as_millis();
    let seconds = age.as_secs();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else if seconds > 0 {
        format!("{}s", seconds)
    } else {
        format!("{}ms", millis)
    }
}

/// Current time as fractional seconds since the Unix epoch.
fn now_timestamp() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// Cooperative lock backed by a timestamp sentinel file.
#[derive(Debug, Clone)]
pub struct SentinelLock {
    path: PathBuf,
    ttl: Duration,
    poll_interval: Duration,
}

impl SentinelLock {
    pub fn new<P: Into<PathBuf>>(path: P, ttl: Duration, poll_interval: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
            poll_interval,
        }
    }

    /// The lock guarding the document of `ctx`, with its configured timings.
    pub fn for_store(ctx: &StoreContext) -> Self {
        Self::new(
            ctx.lock_path.clone(),
            ctx.config.lock_ttl(),
            ctx.config.poll_interval(),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Read and classify the sentinel file.
    pub fn state(&self) -> SentinelState {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return SentinelState::Missing,
            Err(e) => return SentinelState::Unreadable(e.to_string()),
        };

        let timestamp = match content.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => return SentinelState::Unreadable(content),
        };

        if timestamp == 0.0 {
            return SentinelState::Released;
        }

        // More than `ttl` ahead of the clock: no live holder wrote this.
        let elapsed = now_timestamp() - timestamp;
        let ttl = self.ttl.as_secs_f64();
        let age = Duration::try_from_secs_f64(elapsed.abs()).unwrap_or(Duration::MAX);
        if elapsed < ttl && elapsed > -ttl {
            SentinelState::Held { timestamp, age }
        } else {
            SentinelState::Stale { timestamp, age }
        }
    }

    /// Whether another caller currently holds the lock.
    pub fn is_locked(&self) -> bool {
        self.state().is_held()
    }

    /// Mark the lock as held from now on.
    pub fn acquire(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .map_err(|e| RsetupError::io("failed to create store directory", parent, e))?;
        }

        fs::write(&self.path, now_timestamp().to_string())
            .map_err(|e| RsetupError::io("failed to acquire lock", &self.path, e))
    }

    /// Mark the lock as free.
    pub fn release(&self) -> Result<()> {
        fs::write(&self.path, RELEASED)
            .map_err(|e| RsetupError::io("failed to release lock", &self.path, e))
    }

    /// Force the lock free, returning the state it was in.
    pub fn clear(&self) -> Result<SentinelState> {
        let previous = self.state();
        if previous != SentinelState::Missing {
            self.release()?;
        }
        Ok(previous)
    }

    /// Wait until the lock is free, then acquire it.
    ///
    /// Polls every `poll_interval` with no upper bound; an unreleased lock
    /// expires after `ttl`.
    pub fn lock(&self) -> Result<LockGuard<'_>> {
        let mut waiting = false;
        loop {
            match self.state() {
                SentinelState::Held { .. } => {
                    if !waiting {
                        debug!("waiting for lock '{}'", self.path.display());
                        waiting = true;
                    }
                    thread::sleep(self.poll_interval);
                }
                SentinelState::Stale { age, .. } => {
                    warn!(
                        "taking over stale lock '{}' (never released, age: {})",
                        self.path.display(),
                        format_age(age)
                    );
                    break;
                }
                _ => break,
            }
        }

        self.acquire()?;
        debug!("acquired lock '{}'", self.path.display());
        Ok(LockGuard::new(self))
    }

    /// Run `body` while holding the lock.
    ///
    /// The lock is released whether `body` succeeds, fails, or panics. When
    /// both `body` and the release fail, the error of `body` is returned.
    pub fn with_lock<T, F>(&self, body: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let guard = self.lock()?;
        let outcome = body();
        match (outcome, guard.release()) {
            (outcome, Ok(())) => outcome,
            (Ok(_), Err(release_err)) => Err(release_err),
            (Err(body_err), Err(release_err)) => {
                warn!("{}", release_err);
                Err(body_err)
            }
        }
    }
}

/// RAII guard for a held [`SentinelLock`].
///
/// When dropped, the sentinel is reset to `0`.
#[derive(Debug)]
pub struct LockGuard<'a> {
    lock: &'a SentinelLock,
    released: bool,
}

impl<'a> LockGuard<'a> {
    fn new(lock: &'a SentinelLock) -> Self {
        Self {
            lock,
            released: false,
        }
    }

    /// Release the lock now and report a failed write.
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        self.lock.release()?;
        debug!("released lock '{}'", self.lock.path.display());
        Ok(())
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        if !self.released
            && let Err(e) = self.lock.release()
        {
            warn!("{}", e);
        }
    }
}
