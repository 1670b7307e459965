use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// A named resource whose lifetime is bound to a scope.
///
/// The resource is active from [`acquire`](Self::acquire) until the guard is
/// dropped, whether the scope exits normally, early, or by panic. Release is
/// idempotent because it rides `Drop`, which runs exactly once.
///
/// # Example
/// ```rust
/// use roster_kernel::resource::ScopedResource;
///
/// let handle = {
///     let resource = ScopedResource::acquire("database");
///     assert!(resource.is_active());
///     resource.handle()
/// };
///
/// assert!(!handle.is_active());
/// ```
#[must_use = "Dropping this guard immediately marks the resource inactive."]
#[derive(Debug)]
pub struct ScopedResource {
    name: String,
    active: Arc<AtomicBool>,
}

impl ScopedResource {
    /// Acquires a resource and marks it active.
    pub fn acquire(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(resource = %name, "Acquiring resource");

        Self { name, active: Arc::new(AtomicBool::new(true)) }
    }

    /// Resource name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the resource is still held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Creates a detached handle that observes this resource's state after
    /// the guard itself is gone.
    #[must_use]
    pub fn handle(&self) -> ResourceHandle {
        ResourceHandle { name: self.name.clone(), active: Arc::clone(&self.active) }
    }

    /// Releases the resource explicitly.
    ///
    /// Equivalent to dropping the guard; useful when the release point should
    /// stand out in the flow.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for ScopedResource {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
        debug!(resource = %self.name, "Releasing resource");
    }
}

/// A passive observer of a [`ScopedResource`]'s state.
#[derive(Debug, Clone)]
pub struct ResourceHandle {
    name: String,
    active: Arc<AtomicBool>,
}

impl ResourceHandle {
    /// Resource name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the underlying resource is still held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}
