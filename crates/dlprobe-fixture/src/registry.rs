//! Live-instance registry backing the object exports.
//!
//! Objects constructed through the fixture carry a registry-issued id:
//! a stable, instance-unique value their exported methods derive results
//! from. The registry also keeps created/destroyed/peak counters so a
//! harness can assert it released everything it constructed.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{LazyLock, Mutex};

/// Which object type an id was issued to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Plain,
    Nested,
}

#[derive(Debug, Default)]
struct RegistryStats {
    created: u64,
    destroyed: u64,
    peak_live: u64,
}

/// Registry of live fixture objects.
///
/// Ids start at 1; 0 is never issued and doubles as the null id.
pub struct InstanceRegistry {
    live: DashMap<u32, ObjectKind>,
    next_id: AtomicU32,
    stats: Mutex<RegistryStats>,
}

impl InstanceRegistry {
    fn new() -> Self {
        Self {
            live: DashMap::new(),
            next_id: AtomicU32::new(1),
            stats: Mutex::new(RegistryStats::default()),
        }
    }

    /// Issue a fresh id and record the instance as live.
    pub fn register(&self, kind: ObjectKind) -> u32 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.live.insert(id, kind);

        let mut stats = self.stats.lock().unwrap();
        stats.created += 1;
        let live_now = stats.created - stats.destroyed;
        if live_now > stats.peak_live {
            stats.peak_live = live_now;
        }
        id
    }

    /// Drop an id from the live set. Unknown ids are ignored.
    pub fn unregister(&self, id: u32) {
        if self.live.remove(&id).is_some() {
            let mut stats = self.stats.lock().unwrap();
            stats.destroyed += 1;
        }
    }

    pub fn is_live(&self, id: u32) -> bool {
        id != 0 && self.live.contains_key(&id)
    }

    pub fn kind_of(&self, id: u32) -> Option<ObjectKind> {
        self.live.get(&id).map(|entry| *entry.value())
    }

    /// `(created, destroyed, peak_live)` counters.
    pub fn stats(&self) -> (u64, u64, u64) {
        let stats = self.stats.lock().unwrap();
        (stats.created, stats.destroyed, stats.peak_live)
    }
}

/// Global registry shared by every object export.
pub fn registry() -> &'static InstanceRegistry {
    static REGISTRY: LazyLock<InstanceRegistry> = LazyLock::new(InstanceRegistry::new);
    &REGISTRY
}

/// Copy the registry counters into the caller's out parameters.
/// Any null out pointer makes this a no-op.
///
/// # Safety
///
/// Non-null pointers must be valid for writing a `u64`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dlfix_registry_stats(
    created: *mut u64,
    destroyed: *mut u64,
    peak_live: *mut u64,
) {
    if created.is_null() || destroyed.is_null() || peak_live.is_null() {
        return;
    }
    let (c, d, p) = registry().stats();
    unsafe {
        *created = c;
        *destroyed = d;
        *peak_live = p;
    }
}
