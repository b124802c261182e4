//! Resize handling for responsive charts
//!
//! [`ResizeEvents`] stands in for the host's window-level resize signal.
//! Listeners are registered through [`ResizeEvents::subscribe`], which hands
//! back a [`Subscription`]; dropping it (or calling
//! [`Subscription::dispose`]) removes the listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::scene::Container;

type Listener = Rc<RefCell<dyn FnMut()>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Single-threaded resize signal source
#[derive(Default, Clone)]
pub struct ResizeEvents {
    registry: Rc<RefCell<Registry>>,
}

impl ResizeEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` to run on every [`ResizeEvents::emit`]
    pub fn subscribe(&self, listener: impl FnMut() + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Fire the signal, invoking every listener registered at this moment
    pub fn emit(&self) {
        let snapshot: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        trace!(listeners = snapshot.len(), "resize signal");
        for listener in snapshot {
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (&mut *callback)();
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Handle to a registered resize listener; the listener lives as long as
/// this handle
#[must_use = "dropping a Subscription removes its listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Remove the listener now
    pub fn dispose(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Square the container's surface to the smaller side of its content box.
///
/// Only the surface `width`/`height` change; the viewBox is left alone so
/// the content scales uniformly. Returns the applied side, or `None` when
/// the box is unavailable, has a zero or negative side, or no surface exists
/// yet. In that case nothing is touched.
pub fn fit_to_container(container: &mut Container) -> Option<f64> {
    let size = container.content_box()?;
    if !(size.width > 0.0 && size.height > 0.0) {
        debug!(width = size.width, height = size.height, "resize skipped");
        return None;
    }
    let side = size.width.min(size.height);
    let scene = container.scene_mut()?;
    scene.surface.set_number("width", side);
    scene.surface.set_number("height", side);
    debug!(side, "surface resized");
    Some(side)
}
