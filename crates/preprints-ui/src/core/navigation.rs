//! Leave guard for in-app navigation.
//!
//! # Design
//! - A mounted page may install one callback that receives every in-app
//!   navigation request instead of the router.
//! - Installs hand out tokens; a release with a stale token is ignored so a
//!   keyed remount cannot clear its successor's guard.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::Callback;

/// Handle returned by [`LeaveGuard::install`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardToken(u64);

struct Slot<R> {
    next_id: Cell<u64>,
    active: RefCell<Option<(GuardToken, Callback<R>)>>,
}

/// Shared slot holding the active page's navigation guard.
pub struct LeaveGuard<R> {
    slot: Rc<Slot<R>>,
}

impl<R> Default for LeaveGuard<R> {
    fn default() -> Self {
        Self {
            slot: Rc::new(Slot {
                next_id: Cell::new(0),
                active: RefCell::new(None),
            }),
        }
    }
}

impl<R> Clone for LeaveGuard<R> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<R> PartialEq for LeaveGuard<R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<R> LeaveGuard<R> {
    /// Route navigation requests through `guard` until released.
    pub fn install(&self, guard: Callback<R>) -> GuardToken {
        let token = GuardToken(self.slot.next_id.get());
        self.slot.next_id.set(token.0 + 1);
        *self.slot.active.borrow_mut() = Some((token, guard));
        token
    }

    /// Remove the guard installed with `token`, if it is still the active one.
    pub fn release(&self, token: GuardToken) {
        let mut active = self.slot.active.borrow_mut();
        if active.as_ref().is_some_and(|(current, _)| *current == token) {
            *active = None;
        }
    }

    /// Whether a page guard is installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.slot.active.borrow().is_some()
    }

    /// Hand `route` to the installed guard, or to `unguarded` when none is.
    ///
    /// Returns whether a guard received the request.
    pub fn navigate(&self, route: R, unguarded: impl FnOnce(R)) -> bool {
        let guard = self
            .slot
            .active
            .borrow()
            .as_ref()
            .map(|(_, guard)| guard.clone());
        match guard {
            Some(guard) => {
                guard.emit(route);
                true
            }
            None => {
                unguarded(route);
                false
            }
        }
    }
}
