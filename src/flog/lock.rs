use dashmap::DashMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};

/// How far a logger's write lock reaches.
///
/// `Global` serializes every write of every logger in the process, even
/// loggers bound to different files. `PerPath` only serializes loggers that
/// share a destination path (compared as given, not canonicalized).
/// Path locks are never evicted: the registry keeps one entry per distinct
/// path for the life of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockScope {
    #[default]
    Global,
    PerPath,
}

static GLOBAL_LOCK: LazyLock<Arc<Mutex<()>>> = LazyLock::new(|| Arc::new(Mutex::new(())));

static PATH_LOCKS: LazyLock<DashMap<PathBuf, Arc<Mutex<()>>>> = LazyLock::new(DashMap::new);

/// Handle to a process-scoped write mutex. Created on first use and kept
/// for the life of the process.
#[derive(Debug, Clone)]
pub struct WriteLock {
    inner: Arc<Mutex<()>>,
}

impl WriteLock {
    pub fn global() -> Self {
        Self {
            inner: GLOBAL_LOCK.clone(),
        }
    }

    pub fn for_path(path: &Path) -> Self {
        let inner = PATH_LOCKS
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();
        Self { inner }
    }

    pub fn for_scope(scope: LockScope, path: &Path) -> Self {
        match scope {
            LockScope::Global => Self::global(),
            LockScope::PerPath => Self::for_path(path),
        }
    }

    /// Blocks until the lock is held. The mutex guards no data, so a
    /// poisoned lock is taken over as is.
    pub fn acquire(&self) -> MutexGuard<'_, ()> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn same_as(&self, other: &WriteLock) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
