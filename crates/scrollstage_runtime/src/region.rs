//! Scroll region lifecycle
//!
//! A [`ScrollRegion`] owns one scheduler and makes the mount protocol
//! explicit: registration sites [`add`] their animations while the region is
//! being assembled, the root [`activate`]s exactly once when assembly is
//! done, and [`deactivate`] mirrors it on teardown. The commit performs a
//! single resolution pass over whatever is registered at that moment, so
//! every site must register before the root activates; the region's shape
//! makes that ordering the natural one instead of an unwritten rule.
//!
//! [`add`] returns a [`SiteRegistration`] guard that de-registers on drop,
//! pairing each mount-time `add` with its unmount-time `remove`
//! automatically. Guard drops and [`deactivate`] are safe in either order:
//! releasing the timeline only discards the engine resource, never the
//! registries.
//!
//! [`add`]: ScrollRegion::add
//! [`activate`]: ScrollRegion::activate
//! [`deactivate`]: ScrollRegion::deactivate

use std::sync::{Arc, Mutex, Weak};

use scrollstage_core::{ElementHandle, PhaseAnimations, PhaseCallbacks, PhaseSet};
use scrollstage_timeline::{
    RegistrationId, Result, Scheduler, ScrollTarget, ScrubConfig, TweenEngine,
};

/// A scrollable page region driving one phase timeline
///
/// Cheap to clone; clones share the same scheduler, which is how nested
/// registration sites reach the region they live in.
///
/// # Example
///
/// ```
/// use scrollstage_core::{AnimationGroup, PhaseAnimations, PhaseCallbacks, PhaseConfig, PhaseSet, PropertyMap};
/// use scrollstage_runtime::ScrollRegion;
/// use scrollstage_timeline::{RecordingEngine, ScrollTarget, ScrubConfig};
///
/// let mut phases = PhaseSet::new();
/// phases.add("intro", PhaseConfig::default()).unwrap();
///
/// let region = ScrollRegion::new(&phases, RecordingEngine::new(), ScrubConfig::default());
///
/// // Registration sites contribute while the region is assembling.
/// let mut group = AnimationGroup::new();
/// group.elems("title").to(PropertyMap::new().with("opacity", 1.0));
/// let mut animations = PhaseAnimations::new();
/// animations.insert("intro", group);
/// let registration = region.add(animations, PhaseCallbacks::new()).unwrap();
///
/// // The root activates once everything is registered.
/// region.activate(ScrollTarget::from_raw(1)).unwrap();
/// assert_eq!(region.required_height(), "200vh");
///
/// region.deactivate().unwrap();
/// drop(registration);
/// ```
pub struct ScrollRegion<E: TweenEngine> {
    scheduler: Arc<Mutex<Scheduler<E>>>,
    scrub: ScrubConfig,
}

impl<E: TweenEngine> Clone for ScrollRegion<E> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Arc::clone(&self.scheduler),
            scrub: self.scrub,
        }
    }
}

impl<E: TweenEngine> ScrollRegion<E> {
    /// Create a region from a phase skeleton, an engine, and the scroll
    /// binding configuration used at activation
    pub fn new(phases: &PhaseSet, engine: E, scrub: ScrubConfig) -> Self {
        Self {
            scheduler: Arc::new(Mutex::new(Scheduler::new(phases, engine))),
            scrub,
        }
    }

    /// Register a site's animations and callbacks
    ///
    /// The returned guard de-registers on drop. Registering while the
    /// region is already active is allowed but takes effect only on the
    /// next activation, which is usually a mount-ordering bug.
    pub fn add(
        &self,
        animations: PhaseAnimations,
        callbacks: PhaseCallbacks,
    ) -> Result<SiteRegistration<E>> {
        let mut scheduler = self.scheduler.lock().unwrap();
        if scheduler.is_committed() {
            tracing::warn!("registration after activation only applies to the next activation");
        }
        let id = scheduler.add(animations, callbacks)?;
        Ok(SiteRegistration {
            scheduler: Arc::downgrade(&self.scheduler),
            id: Some(id),
        })
    }

    /// Attach an element handle to every registered animation carrying one
    /// of `tags`; returns the number of animations matched
    pub fn bind_elements(&self, tags: &[&str], element: ElementHandle) -> usize {
        self.scheduler.lock().unwrap().bind_elements(tags, element)
    }

    /// Commit the timeline against the scrollable target
    ///
    /// Called exactly once by the root, after every registration site has
    /// added its content.
    pub fn activate(&self, target: ScrollTarget) -> Result<()> {
        self.scheduler.lock().unwrap().commit(target, &self.scrub)
    }

    /// Release the engine timeline; the mirror of [`activate`](Self::activate)
    pub fn deactivate(&self) -> Result<()> {
        self.scheduler.lock().unwrap().release()
    }

    pub fn is_active(&self) -> bool {
        self.scheduler.lock().unwrap().is_committed()
    }

    /// Total scroll-distance span of the phase skeleton
    pub fn total_span(&self) -> f32 {
        self.scheduler.lock().unwrap().total_span()
    }

    /// Rendered height the region must reserve: one viewport height per
    /// unit of span, plus one viewport for the pinned content itself
    pub fn required_height(&self) -> String {
        format!("{}vh", self.total_span() * 100.0 + 100.0)
    }

    /// Run `f` against the underlying scheduler
    pub fn with_scheduler<R>(&self, f: impl FnOnce(&mut Scheduler<E>) -> R) -> R {
        f(&mut self.scheduler.lock().unwrap())
    }
}

/// Guard pairing one site's `add` with its `remove`
///
/// Dropping the guard de-registers the site's animations and callbacks.
/// If the region is gone by then, the drop is a no-op.
pub struct SiteRegistration<E: TweenEngine> {
    scheduler: Weak<Mutex<Scheduler<E>>>,
    id: Option<RegistrationId>,
}

impl<E: TweenEngine> SiteRegistration<E> {
    /// The raw handle issued by the scheduler
    pub fn id(&self) -> RegistrationId {
        self.id.expect("registration id taken only on drop")
    }
}

impl<E: TweenEngine> Drop for SiteRegistration<E> {
    fn drop(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(scheduler) = self.scheduler.upgrade() {
            if let Err(err) = scheduler.lock().unwrap().remove(id) {
                tracing::warn!("failed to remove site registration: {err}");
            }
        }
    }
}
