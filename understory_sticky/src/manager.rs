// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owner of all sticky controllers and dispatcher of page-level events.

use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::hash::Hash;

use hashbrown::HashMap;

use crate::{
    Arg, Method, MethodOutput, Observer, OptionsPatch, PollSchedule, StickyController,
    StickyError, StickyHost, StickyOptions, StickySignals,
};

/// Name of the pseudo-method that reads back an instance's options.
pub const OPTIONS_CALL: &str = "options";

/// A request passed to [`StickyManager::bind`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Binding<'a> {
    /// Create with these options, or merge them into an existing controller.
    Options(OptionsPatch),
    /// Invoke a named method (or [`OPTIONS_CALL`]) on an existing controller.
    Call(&'a str, Option<Arg<'a>>),
}

impl Default for Binding<'_> {
    fn default() -> Self {
        Self::Options(OptionsPatch::default())
    }
}

/// What a [`StickyManager::bind`] call produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BindOutcome {
    /// No value; the caller may keep chaining on its selection.
    Selection,
    /// Options of an existing controller (after any merge).
    Options(StickyOptions),
    /// Output of a named method.
    Output(MethodOutput),
}

/// Owns every [`StickyController`] and drives them from page-level events.
///
/// The registry is append-only: controllers live as long as the manager.
/// Hosts forward their events:
/// - window resize → [`StickyManager::on_resize`],
/// - window scroll → [`StickyManager::on_scroll`],
/// - timer ticks → [`StickyManager::on_timer`], and when that asks for a
///   frame, the frame callback → [`StickyManager::on_frame`].
pub struct StickyManager<K> {
    instances: Vec<StickyController<K>>,
    index: HashMap<K, usize>,
    observers: Vec<(StickySignals, Observer<K>)>,
    poll: PollSchedule,
}

impl<K> Debug for StickyManager<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyManager")
            .field("instances", &self.instances)
            .field("observers", &self.observers.len())
            .field("poll", &self.poll)
            .finish_non_exhaustive()
    }
}

impl<K> Default for StickyManager<K>
where
    K: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> StickyManager<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Creates an empty manager whose poll starts at time `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_poll(PollSchedule::default())
    }

    /// Creates an empty manager with a custom poll schedule.
    #[must_use]
    pub fn with_poll(poll: PollSchedule) -> Self {
        Self {
            instances: Vec::new(),
            index: HashMap::new(),
            observers: Vec::new(),
            poll,
        }
    }

    /// Number of registered controllers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if no controller is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Returns `true` if `element` has a controller.
    #[must_use]
    pub fn contains(&self, element: K) -> bool {
        self.index.contains_key(&element)
    }

    /// The controller of `element`, if any.
    #[must_use]
    pub fn get(&self, element: K) -> Option<&StickyController<K>> {
        self.index.get(&element).map(|&i| &self.instances[i])
    }

    /// Mutable access to the controller of `element`, if any.
    pub fn get_mut(&mut self, element: K) -> Option<&mut StickyController<K>> {
        self.index.get(&element).map(|&i| &mut self.instances[i])
    }

    /// Controllers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StickyController<K>> {
        self.instances.iter()
    }

    /// The poll schedule.
    #[must_use]
    pub fn poll(&self) -> &PollSchedule {
        &self.poll
    }

    /// Attaches `observer` to every controller registered from now on.
    ///
    /// Because it is attached before initialization, it also sees
    /// [`StickyEvent::Created`](crate::StickyEvent::Created).
    pub fn subscribe(&mut self, signals: StickySignals, observer: Observer<K>) {
        if !signals.is_empty() {
            self.observers.push((signals, observer));
        }
    }

    /// Registers and initializes a controller for `element`, using its
    /// immediate parent as the container.
    ///
    /// # Errors
    ///
    /// [`StickyError::AlreadyBound`] if `element` already has a controller,
    /// [`StickyError::NoParent`] if it has no parent.
    pub fn register<H>(
        &mut self,
        host: &mut H,
        element: K,
        options: StickyOptions,
    ) -> Result<&mut StickyController<K>, StickyError<K>>
    where
        H: StickyHost<Node = K>,
    {
        self.register_within(host, element, options, |_, _| true)
    }

    /// Like [`StickyManager::register`], but the container is the closest
    /// ancestor of `element` (starting at its parent) accepted by
    /// `is_container`.
    ///
    /// # Errors
    ///
    /// [`StickyError::AlreadyBound`] if `element` already has a controller,
    /// [`StickyError::NoParent`] if no ancestor is accepted.
    pub fn register_within<H, F>(
        &mut self,
        host: &mut H,
        element: K,
        options: StickyOptions,
        is_container: F,
    ) -> Result<&mut StickyController<K>, StickyError<K>>
    where
        H: StickyHost<Node = K>,
        F: Fn(&H, K) -> bool,
    {
        if self.contains(element) {
            return Err(StickyError::AlreadyBound { element });
        }
        let mut candidate = host.parent(element);
        let parent = loop {
            match candidate {
                Some(node) if is_container(&*host, node) => break node,
                Some(node) => candidate = host.parent(node),
                None => return Err(StickyError::NoParent { element }),
            }
        };

        let mut controller = StickyController::new(element, parent, options);
        for (signals, observer) in &self.observers {
            controller.subscribe(*signals, observer.clone());
        }
        controller.init(host);

        let slot = self.instances.len();
        self.instances.push(controller);
        self.index.insert(element, slot);
        Ok(&mut self.instances[slot])
    }

    /// Binds or controls each of `elements`.
    ///
    /// Unbound elements get a new controller (default options, with
    /// [`Binding::Options`] merged over them). For bound elements,
    /// [`Binding::Options`] merges and yields the merged options, a call to
    /// [`OPTIONS_CALL`] yields the current options, and a call to a known
    /// [`Method`] yields its output. Unknown names and elements without a
    /// parent are logged and skipped.
    ///
    /// When several bound elements are addressed, the last one decides the
    /// outcome.
    pub fn bind<H, I>(&mut self, host: &mut H, elements: I, binding: Binding<'_>) -> BindOutcome
    where
        H: StickyHost<Node = K>,
        I: IntoIterator<Item = K>,
    {
        let mut outcome = BindOutcome::Selection;
        for element in elements {
            let Some(controller) = self.get_mut(element) else {
                let options = match binding {
                    Binding::Options(patch) => StickyOptions::default().merged(&patch),
                    Binding::Call(..) => StickyOptions::default(),
                };
                if let Err(err) = self.register(host, element, options) {
                    log::error!("{err}");
                }
                continue;
            };
            match binding {
                Binding::Options(patch) => {
                    outcome = BindOutcome::Options(controller.merge_options(&patch));
                }
                Binding::Call(OPTIONS_CALL, _) => {
                    outcome = BindOutcome::Options(*controller.options());
                }
                Binding::Call(name, arg) => match Method::from_name::<K>(name) {
                    Ok(method) => {
                        outcome = match controller.invoke(host, method, arg) {
                            MethodOutput::Unit => BindOutcome::Selection,
                            output => BindOutcome::Output(output),
                        };
                    }
                    Err(err) => log::error!("{err}"),
                },
            }
        }
        outcome
    }

    /// Recomputes boundaries and repositions every controller.
    pub fn update_all<H: StickyHost<Node = K>>(&mut self, host: &mut H) {
        for controller in &mut self.instances {
            controller.update(host);
        }
    }

    /// Handles a window resize.
    pub fn on_resize<H: StickyHost<Node = K>>(&mut self, host: &mut H) {
        self.update_all(host);
    }

    /// Handles a page scroll: repositions every non-frozen controller.
    pub fn on_scroll<H: StickyHost<Node = K>>(&mut self, host: &mut H) {
        for controller in &mut self.instances {
            if !controller.is_frozen() {
                controller.move_it(host);
            }
        }
    }

    /// Advances the poll timer; returns `true` if the host should request a
    /// frame and then call [`StickyManager::on_frame`].
    pub fn on_timer(&mut self, now_ms: u64) -> bool {
        self.poll.on_timer(now_ms)
    }

    /// Handles a delivered frame, running the parent poll if one is pending.
    ///
    /// Returns the number of controllers that were updated.
    pub fn on_frame<H: StickyHost<Node = K>>(&mut self, host: &mut H) -> usize {
        if self.poll.take_frame() {
            self.poll_parents(host)
        } else {
            0
        }
    }

    /// Updates every controller whose parent's height changed since its
    /// boundaries were last computed; returns how many were updated.
    pub fn poll_parents<H: StickyHost<Node = K>>(&mut self, host: &mut H) -> usize {
        let mut updated = 0;
        for controller in &mut self.instances {
            if controller.parent_resized(&*host) {
                log::debug!(
                    "parent {:?} of sticky element {:?} resized",
                    controller.parent(),
                    controller.element()
                );
                controller.update(host);
                updated += 1;
            }
        }
        updated
    }
}
