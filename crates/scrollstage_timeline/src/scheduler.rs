//! The phase timeline scheduler
//!
//! A [`Scheduler`] snapshots a phase skeleton at construction and then
//! accumulates element animations and callbacks per phase as registration
//! sites come and go. Nothing touches the engine until [`commit`]: a single
//! resolution pass turns every phase-relative fraction into absolute
//! timeline coordinates and submits the finished plan. [`release`] tears the
//! engine timeline down again; the registries survive, so the scheduler can
//! be committed again later.
//!
//! Registrations are removed by the handle issued at [`add`] time, never by
//! value: two structurally identical registrations are always distinct.
//!
//! [`commit`]: Scheduler::commit
//! [`release`]: Scheduler::release
//! [`add`]: Scheduler::add

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};

use scrollstage_core::{
    CallbackEntry, ConfigurationError, ElementAnimation, ElementHandle, PhaseAnimations,
    PhaseCallbacks, PhaseConfig, PhaseSet,
};

use crate::config::ScrubConfig;
use crate::engine::{ScrollTarget, TweenEngine};
use crate::error::{Result, TimelineError};
use crate::plan::{ResolvedCall, ResolvedPhase, ResolvedTimeline, ResolvedTween, SnapLabel};

new_key_type! {
    /// Handle to one `add` call's worth of registered animations and callbacks
    pub struct RegistrationId;
}

/// Bookkeeping for one registration, kept for tracing and symmetry checks
#[derive(Clone, Copy, Debug, Default)]
struct RegistrationInfo {
    animations: usize,
    callbacks: usize,
}

/// Working state for one phase
struct PhaseState {
    config: PhaseConfig,
    animations: Vec<(RegistrationId, ElementAnimation)>,
    callbacks: Vec<(RegistrationId, CallbackEntry)>,
}

impl PhaseState {
    fn new(config: PhaseConfig) -> Self {
        Self {
            config,
            animations: Vec::new(),
            callbacks: Vec::new(),
        }
    }
}

/// A live engine timeline paired with the plan it was built from
struct ActiveTimeline<H> {
    handle: H,
    resolved: ResolvedTimeline,
}

/// Scroll timeline scheduler
///
/// # Example
///
/// ```
/// use scrollstage_core::{AnimationGroup, PhaseAnimations, PhaseCallbacks, PhaseConfig, PhaseSet, PropertyMap};
/// use scrollstage_timeline::{RecordingEngine, Scheduler, ScrollTarget, ScrubConfig};
///
/// let mut phases = PhaseSet::new();
/// phases.add("intro", PhaseConfig::default()).unwrap();
///
/// let mut scheduler = Scheduler::new(&phases, RecordingEngine::new());
///
/// let mut group = AnimationGroup::new();
/// group.elems("title").to(PropertyMap::new().with("opacity", 1.0));
/// let mut animations = PhaseAnimations::new();
/// animations.insert("intro", group);
///
/// let registration = scheduler.add(animations, PhaseCallbacks::new()).unwrap();
/// scheduler
///     .commit(ScrollTarget::from_raw(1), &ScrubConfig::default())
///     .unwrap();
/// scheduler.release().unwrap();
/// scheduler.remove(registration).unwrap();
/// ```
pub struct Scheduler<E: TweenEngine> {
    phases: IndexMap<String, PhaseState>,
    registrations: SlotMap<RegistrationId, RegistrationInfo>,
    engine: E,
    active: Option<ActiveTimeline<E::Handle>>,
}

impl<E: TweenEngine> Scheduler<E> {
    /// Snapshot a phase skeleton and take ownership of the engine
    pub fn new(phases: &PhaseSet, engine: E) -> Self {
        let phases = phases
            .iter()
            .map(|(id, config)| (id.to_string(), PhaseState::new(*config)))
            .collect();
        Self {
            phases,
            registrations: SlotMap::with_key(),
            engine,
            active: None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Whether a committed engine timeline is currently live
    pub fn is_committed(&self) -> bool {
        self.active.is_some()
    }

    /// The plan behind the live timeline, if committed
    pub fn resolved(&self) -> Option<&ResolvedTimeline> {
        self.active.as_ref().map(|active| &active.resolved)
    }

    // =========================================================================
    // Timeline arithmetic
    // =========================================================================

    /// Total scroll-distance span: `Σ(delay + duration)` over all phases
    ///
    /// Callers derive the scrollable region's rendered height from this;
    /// the sizing policy itself is not the scheduler's concern.
    pub fn total_span(&self) -> f32 {
        self.phases
            .values()
            .map(|state| state.config.delay + state.config.duration)
            .sum()
    }

    /// Absolute start of a phase's active window, after its entry delay
    pub fn start_time(&self, phase: &str) -> Result<f32> {
        let state = self.phase(phase)?;
        let mut start = state.config.delay;
        for (other, state) in &self.phases {
            if other == phase {
                break;
            }
            start += state.config.delay + state.config.duration;
        }
        Ok(start)
    }

    /// Absolute end of a phase's active window
    pub fn end_time(&self, phase: &str) -> Result<f32> {
        let state = self.phase(phase)?;
        Ok(self.start_time(phase)? + state.config.duration)
    }

    fn phase(&self, id: &str) -> Result<&PhaseState> {
        self.phases
            .get(id)
            .ok_or_else(|| ConfigurationError::UnknownPhase(id.to_string()).into())
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a site's animations and callbacks, returning a removal handle
    ///
    /// All entries are appended to their phase's lists in contribution
    /// order. The call is atomic: if any phase id is unknown or any fraction
    /// window is invalid, nothing is registered.
    pub fn add(
        &mut self,
        animations: PhaseAnimations,
        callbacks: PhaseCallbacks,
    ) -> Result<RegistrationId> {
        for (phase, group) in animations.iter() {
            self.phase(phase)?;
            for animation in group.iter() {
                animation.validate()?;
            }
        }
        for (phase, entry) in callbacks.iter() {
            self.phase(phase)?;
            entry.validate()?;
        }

        let mut info = RegistrationInfo::default();
        let id = self.registrations.insert(RegistrationInfo::default());

        for (phase, group) in animations {
            let state = self.phases.get_mut(&phase).unwrap();
            for animation in group {
                state.animations.push((id, animation));
                info.animations += 1;
            }
        }
        for (phase, entry) in callbacks {
            let state = self.phases.get_mut(&phase).unwrap();
            state.callbacks.push((id, entry));
            info.callbacks += 1;
        }
        self.registrations[id] = info;

        tracing::debug!(
            animations = info.animations,
            callbacks = info.callbacks,
            "registered animation site"
        );
        Ok(id)
    }

    /// Remove everything registered under `id`
    ///
    /// Untouched entries keep their content and relative order exactly.
    /// An unknown or already-removed handle is a hard error: an unbalanced
    /// register/remove pair is a lifecycle bug worth surfacing.
    pub fn remove(&mut self, id: RegistrationId) -> Result<()> {
        let info = self
            .registrations
            .remove(id)
            .ok_or(TimelineError::UnknownRegistration)?;

        for state in self.phases.values_mut() {
            state.animations.retain(|(owner, _)| *owner != id);
            state.callbacks.retain(|(owner, _)| *owner != id);
        }

        tracing::debug!(
            animations = info.animations,
            callbacks = info.callbacks,
            "removed animation site"
        );
        Ok(())
    }

    /// Attach an element handle to every registered animation whose tag is
    /// in `tags`, across all phases
    ///
    /// Called once per element as it becomes available; matching animations
    /// get the handle appended (no de-duplication). Returns the number of
    /// animations matched.
    pub fn bind_elements(&mut self, tags: &[&str], element: ElementHandle) -> usize {
        let tags: FxHashSet<&str> = tags.iter().copied().collect();
        let mut matched = 0;
        for state in self.phases.values_mut() {
            for (_, animation) in &mut state.animations {
                if tags.contains(animation.tag()) {
                    animation.bind(element);
                    matched += 1;
                }
            }
        }
        matched
    }

    // =========================================================================
    // Resolution and the commit protocol
    // =========================================================================

    /// Resolve the current registries into an absolute-time plan
    ///
    /// Pure with respect to the scheduler: fractions were validated at
    /// registration, so resolution cannot fail. A phase with zero duration
    /// collapses all of its work onto its start instant.
    pub fn resolve(&self) -> ResolvedTimeline {
        let mut labels = vec![SnapLabel {
            id: String::new(),
            time: 0.0,
        }];
        let mut phases = Vec::with_capacity(self.phases.len());
        let mut cursor = 0.0;

        for (id, state) in &self.phases {
            let start = cursor + state.config.delay;
            let duration = state.config.duration;

            if state.config.snap {
                labels.push(SnapLabel {
                    id: id.clone(),
                    time: start + duration,
                });
            }

            let tweens = state
                .animations
                .iter()
                .map(|(_, animation)| ResolvedTween {
                    elements: animation.elements().to_vec(),
                    to: animation.properties().clone(),
                    easing: animation.easing(),
                    start: start + animation.start_fraction() * duration,
                    duration: (animation.end_fraction() - animation.start_fraction()) * duration,
                })
                .collect();

            let calls = state
                .callbacks
                .iter()
                .map(|(_, entry)| ResolvedCall {
                    action: entry.action().clone(),
                    start: start + entry.time() * duration,
                })
                .collect();

            phases.push(ResolvedPhase {
                id: id.clone(),
                start,
                duration,
                tweens,
                calls,
            });
            cursor = start + duration;
        }

        ResolvedTimeline {
            total_span: self.total_span(),
            labels,
            phases,
        }
    }

    /// Build the plan and submit it to the engine
    ///
    /// Submission order is deterministic: timeline creation, total duration,
    /// snap labels in phase order, then all tweens phase by phase, then all
    /// calls phase by phase. Execution-time ordering of overlapping work is
    /// the engine's concern.
    pub fn commit(&mut self, target: ScrollTarget, scrub: &ScrubConfig) -> Result<()> {
        if self.active.is_some() {
            return Err(TimelineError::AlreadyCommitted);
        }

        let resolved = self.resolve();
        let mut handle = self.engine.create_timeline(target, scrub);
        self.engine.set_duration(&mut handle, resolved.total_span);

        for label in &resolved.labels {
            self.engine.add_label(&mut handle, &label.id, label.time);
        }
        for phase in &resolved.phases {
            for tween in &phase.tweens {
                self.engine.schedule_tween(
                    &mut handle,
                    &tween.elements,
                    &tween.to,
                    tween.duration,
                    tween.easing,
                    tween.start,
                );
            }
        }
        for phase in &resolved.phases {
            for call in &phase.calls {
                self.engine
                    .schedule_call(&mut handle, call.action.clone(), call.start);
            }
        }

        tracing::debug!(
            total_span = resolved.total_span,
            tweens = resolved.tween_count(),
            calls = resolved.call_count(),
            "committed timeline"
        );
        self.active = Some(ActiveTimeline { handle, resolved });
        Ok(())
    }

    /// Destroy the live engine timeline and its scroll binding
    ///
    /// The registries are untouched; the scheduler can be committed again.
    pub fn release(&mut self) -> Result<()> {
        let active = self.active.take().ok_or(TimelineError::NotCommitted)?;
        self.engine.destroy(active.handle);
        tracing::debug!("released timeline");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollstage_core::{AnimationGroup, Easing, PropertyMap};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::engine::{EngineEvent, RecordingEngine};

    fn three_phases() -> PhaseSet {
        let mut phases = PhaseSet::new();
        phases.add("a", PhaseConfig::default()).unwrap();
        phases
            .add("b", PhaseConfig::default().delay(1.0).duration(2.0).snap(false))
            .unwrap();
        phases.add("c", PhaseConfig::default()).unwrap();
        phases
    }

    fn scheduler(phases: &PhaseSet) -> Scheduler<RecordingEngine> {
        Scheduler::new(phases, RecordingEngine::new())
    }

    #[test]
    fn test_total_span_sums_delays_and_durations() {
        let scheduler = scheduler(&three_phases());
        assert_eq!(scheduler.total_span(), 5.0);
    }

    #[test]
    fn test_phase_windows_are_contiguous() {
        let scheduler = scheduler(&three_phases());

        assert_eq!(scheduler.start_time("a").unwrap(), 0.0);
        assert_eq!(scheduler.end_time("a").unwrap(), 1.0);
        // "b" starts where "a" ended, plus its own delay.
        assert_eq!(scheduler.start_time("b").unwrap(), 2.0);
        assert_eq!(scheduler.end_time("b").unwrap(), 4.0);
        assert_eq!(scheduler.start_time("c").unwrap(), 4.0);

        // The last phase closes exactly at the total span.
        assert_eq!(scheduler.end_time("c").unwrap(), scheduler.total_span());
    }

    #[test]
    fn test_unknown_phase_is_an_error() {
        let mut scheduler = scheduler(&three_phases());
        assert!(scheduler.start_time("missing").is_err());

        let mut animations = PhaseAnimations::new();
        animations.insert("missing", AnimationGroup::new());
        let err = scheduler.add(animations, PhaseCallbacks::new()).unwrap_err();
        assert_eq!(
            err,
            TimelineError::Config(ConfigurationError::UnknownPhase("missing".into()))
        );
    }

    #[test]
    fn test_add_is_atomic_on_invalid_fractions() {
        let mut scheduler = scheduler(&three_phases());

        let mut good = AnimationGroup::new();
        good.elems("ok");
        let mut bad = AnimationGroup::new();
        bad.elems("broken").start(0.9).end(0.1);

        let mut animations = PhaseAnimations::new();
        animations.insert("a", good);
        animations.insert("c", bad);

        assert!(scheduler.add(animations, PhaseCallbacks::new()).is_err());
        // Nothing from the failed call may linger.
        assert!(scheduler.resolve().phases.iter().all(|p| p.tweens.is_empty()));
    }

    #[test]
    fn test_full_window_animation_resolves_to_phase_window() {
        let mut phases = PhaseSet::new();
        phases.add("lead", PhaseConfig::default().duration(10.0)).unwrap();
        phases
            .add("main", PhaseConfig::default().duration(4.0))
            .unwrap();
        let mut scheduler = scheduler(&phases);

        let mut group = AnimationGroup::new();
        group.elems("hero").to(PropertyMap::new().with("opacity", 1.0));
        let mut animations = PhaseAnimations::new();
        animations.insert("main", group);
        scheduler.add(animations, PhaseCallbacks::new()).unwrap();

        let resolved = scheduler.resolve();
        let tween = &resolved.phases[1].tweens[0];
        assert_eq!(tween.start, 10.0);
        assert_eq!(tween.duration, 4.0);
    }

    #[test]
    fn test_callback_resolves_through_delay_and_fraction() {
        // A span-5 prefix, then a phase {delay: 2, duration: 10}: a callback
        // at fraction 0.5 lands at 5 + 2 + 5 = 12.
        let mut phases = PhaseSet::new();
        phases
            .add("prefix", PhaseConfig::default().duration(5.0))
            .unwrap();
        phases
            .add("main", PhaseConfig::default().delay(2.0).duration(10.0))
            .unwrap();
        let mut scheduler = scheduler(&phases);

        let mut callbacks = PhaseCallbacks::new();
        callbacks.add("main", 0.5, || {});
        scheduler.add(PhaseAnimations::new(), callbacks).unwrap();

        let resolved = scheduler.resolve();
        assert_eq!(resolved.phases[1].calls[0].start, 12.0);
    }

    #[test]
    fn test_snap_labels_cover_origin_and_snapping_phases() {
        let scheduler = scheduler(&three_phases());
        let resolved = scheduler.resolve();

        let labels: Vec<(&str, f32)> = resolved
            .labels
            .iter()
            .map(|label| (label.id.as_str(), label.time))
            .collect();
        assert_eq!(labels, [("", 0.0), ("a", 1.0), ("c", 5.0)]);
    }

    #[test]
    fn test_zero_duration_phase_collapses_to_an_instant() {
        let mut phases = PhaseSet::new();
        phases
            .add("before", PhaseConfig::default().duration(3.0))
            .unwrap();
        phases
            .add("pin", PhaseConfig::default().duration(0.0))
            .unwrap();
        let mut scheduler = scheduler(&phases);

        let mut group = AnimationGroup::new();
        group.elems("flash").start(0.25).end(0.75);
        let mut animations = PhaseAnimations::new();
        animations.insert("pin", group);
        let mut callbacks = PhaseCallbacks::new();
        callbacks.add("pin", 1.0, || {});
        scheduler.add(animations, callbacks).unwrap();

        let resolved = scheduler.resolve();
        let pin = &resolved.phases[1];
        assert_eq!(pin.tweens[0].start, 3.0);
        assert_eq!(pin.tweens[0].duration, 0.0);
        assert_eq!(pin.calls[0].start, 3.0);
    }

    #[test]
    fn test_add_then_remove_is_a_no_op() {
        let phases = three_phases();
        let mut scheduler = scheduler(&phases);

        let mut keep = AnimationGroup::new();
        keep.elems("keep-1");
        keep.elems("keep-2");
        let mut animations = PhaseAnimations::new();
        animations.insert("a", keep);
        scheduler.add(animations, PhaseCallbacks::new()).unwrap();

        let before = scheduler.resolve();

        let mut transient = AnimationGroup::new();
        transient.elems("transient");
        let mut animations = PhaseAnimations::new();
        animations.insert("a", transient);
        let mut callbacks = PhaseCallbacks::new();
        callbacks.add("c", 0.5, || {});
        let registration = scheduler.add(animations, callbacks).unwrap();
        scheduler.remove(registration).unwrap();

        let after = scheduler.resolve();
        assert_eq!(after.tween_count(), before.tween_count());
        assert_eq!(after.call_count(), 0);
        for (before, after) in before.phases.iter().zip(&after.phases) {
            assert_eq!(before.tweens, after.tweens);
        }
    }

    #[test]
    fn test_remove_preserves_order_of_untouched_entries() {
        let phases = three_phases();
        let mut scheduler = scheduler(&phases);

        let mut ids = Vec::new();
        for (index, name) in ["first", "middle", "last"].iter().enumerate() {
            let mut group = AnimationGroup::new();
            group
                .elems(*name)
                .to(PropertyMap::new().with("order", index as f32));
            let mut animations = PhaseAnimations::new();
            animations.insert("a", group);
            ids.push(scheduler.add(animations, PhaseCallbacks::new()).unwrap());
        }

        scheduler.remove(ids[1]).unwrap();

        let resolved = scheduler.resolve();
        let order: Vec<f32> = resolved.phases[0]
            .tweens
            .iter()
            .filter_map(|tween| match tween.to.get("order") {
                Some(scrollstage_core::PropertyValue::Number(n)) => Some(*n),
                _ => None,
            })
            .collect();
        assert_eq!(order, [0.0, 2.0]);

        // Identity, not value: an identical-looking registration elsewhere
        // must survive removal of its twin.
        let mut twin_a = AnimationGroup::new();
        twin_a.elems("twin");
        let mut animations = PhaseAnimations::new();
        animations.insert("c", twin_a);
        let twin_a_id = scheduler.add(animations, PhaseCallbacks::new()).unwrap();

        let mut twin_b = AnimationGroup::new();
        twin_b.elems("twin");
        let mut animations = PhaseAnimations::new();
        animations.insert("c", twin_b);
        scheduler.add(animations, PhaseCallbacks::new()).unwrap();

        scheduler.remove(twin_a_id).unwrap();
        assert_eq!(scheduler.resolve().phases[2].tweens.len(), 1);
    }

    #[test]
    fn test_remove_of_unknown_handle_is_a_hard_error() {
        let phases = three_phases();
        let mut scheduler = scheduler(&phases);

        let registration = scheduler
            .add(PhaseAnimations::new(), PhaseCallbacks::new())
            .unwrap();
        scheduler.remove(registration).unwrap();

        assert_eq!(
            scheduler.remove(registration),
            Err(TimelineError::UnknownRegistration)
        );
    }

    #[test]
    fn test_bind_elements_matches_tags_across_phases() {
        let phases = three_phases();
        let mut scheduler = scheduler(&phases);

        let mut intro = AnimationGroup::new();
        intro.elems("title");
        intro.elems("card");
        let mut outro = AnimationGroup::new();
        outro.elems("title");
        let mut animations = PhaseAnimations::new();
        animations.insert("a", intro);
        animations.insert("c", outro);
        scheduler.add(animations, PhaseCallbacks::new()).unwrap();

        let element = ElementHandle::from_raw(42);
        let matched = scheduler.bind_elements(&["title"], element);
        assert_eq!(matched, 2);

        let resolved = scheduler.resolve();
        assert_eq!(resolved.phases[0].tweens[0].elements, [element]);
        assert!(resolved.phases[0].tweens[1].elements.is_empty());
        assert_eq!(resolved.phases[2].tweens[0].elements, [element]);
    }

    #[test]
    fn test_commit_submits_in_deterministic_order() {
        let phases = three_phases();
        let mut scheduler = scheduler(&phases);

        let mut group = AnimationGroup::new();
        group
            .elems("title")
            .to(PropertyMap::new().with("opacity", 0.0))
            .ease(Easing::Power1InOut)
            .start(0.5);
        let mut animations = PhaseAnimations::new();
        animations.insert("b", group);
        let mut callbacks = PhaseCallbacks::new();
        callbacks.add("a", 1.0, || {});
        scheduler.add(animations, callbacks).unwrap();

        scheduler
            .commit(ScrollTarget::from_raw(9), &ScrubConfig::default())
            .unwrap();

        let events = scheduler.engine().events();
        assert!(matches!(events[0], EngineEvent::CreateTimeline { .. }));
        assert_eq!(events[1], EngineEvent::SetDuration(5.0));
        assert_eq!(
            events[2],
            EngineEvent::AddLabel {
                id: String::new(),
                time: 0.0
            }
        );
        assert_eq!(
            events[3],
            EngineEvent::AddLabel {
                id: "a".into(),
                time: 1.0
            }
        );
        assert_eq!(
            events[4],
            EngineEvent::AddLabel {
                id: "c".into(),
                time: 5.0
            }
        );
        // Tweens for all phases precede calls for all phases.
        assert!(matches!(
            events[5],
            EngineEvent::Tween {
                start,
                duration,
                ..
            } if start == 3.0 && duration == 1.0
        ));
        assert_eq!(events[6], EngineEvent::Call { start: 1.0 });
        assert_eq!(events.len(), 7);
    }

    #[test]
    fn test_commit_twice_without_release_is_an_error() {
        let phases = three_phases();
        let mut scheduler = scheduler(&phases);
        let target = ScrollTarget::from_raw(1);

        scheduler.commit(target, &ScrubConfig::default()).unwrap();
        assert_eq!(
            scheduler.commit(target, &ScrubConfig::default()),
            Err(TimelineError::AlreadyCommitted)
        );
    }

    #[test]
    fn test_release_protocol() {
        let phases = three_phases();
        let mut scheduler = scheduler(&phases);
        let target = ScrollTarget::from_raw(1);

        // Release before any commit is a protocol violation.
        assert_eq!(scheduler.release(), Err(TimelineError::NotCommitted));

        scheduler.commit(target, &ScrubConfig::default()).unwrap();
        assert!(scheduler.is_committed());
        scheduler.release().unwrap();
        assert!(!scheduler.is_committed());
        assert_eq!(scheduler.engine().live_timelines(), 0);

        // Double release is a protocol violation too.
        assert_eq!(scheduler.release(), Err(TimelineError::NotCommitted));

        // Commit after release rebuilds from the surviving registries.
        scheduler.commit(target, &ScrubConfig::default()).unwrap();
        assert!(scheduler.is_committed());
    }

    #[test]
    fn test_empty_scheduler_commits_an_empty_timeline() {
        let phases = PhaseSet::new();
        let mut scheduler = scheduler(&phases);

        assert_eq!(scheduler.total_span(), 0.0);
        scheduler
            .commit(ScrollTarget::from_raw(1), &ScrubConfig::default())
            .unwrap();

        let resolved = scheduler.resolved().unwrap();
        assert_eq!(resolved.total_span, 0.0);
        assert!(resolved.phases.is_empty());
        // Only the origin label exists.
        assert_eq!(resolved.labels.len(), 1);

        let events = scheduler.engine().events();
        assert_eq!(events[1], EngineEvent::SetDuration(0.0));
    }

    #[test]
    fn test_committed_actions_fire_when_engine_invokes_them() {
        let phases = three_phases();
        let mut scheduler = scheduler(&phases);

        let hits = Arc::new(AtomicUsize::new(0));
        let mut callbacks = PhaseCallbacks::new();
        {
            let hits = Arc::clone(&hits);
            callbacks.add("a", 0.5, move || {
                hits.fetch_add(1, Ordering::Relaxed);
            });
        }
        scheduler.add(PhaseAnimations::new(), callbacks).unwrap();
        scheduler
            .commit(ScrollTarget::from_raw(1), &ScrubConfig::default())
            .unwrap();

        for (_, action) in scheduler.engine().actions() {
            action();
        }
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }
}
