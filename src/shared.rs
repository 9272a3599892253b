//! Navigator shared between event callbacks
//!
//! Browser listeners each hold a handle to the same navigator. Callbacks run
//! to completion on one thread, so a handle that is already borrowed means a
//! handler re-entered; that event is dropped instead of panicking.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::host::FeedHost;
use crate::navigator::FeedNavigator;

/// Navigator handle shared by every listener; `None` once torn down
pub type SharedNavigator<H> = Rc<RefCell<Option<FeedNavigator<H>>>>;

/// Run `f` against the navigator if it is still alive and not busy
pub fn with_navigator<H: FeedHost, R>(
    state: &SharedNavigator<H>,
    f: impl FnOnce(&mut FeedNavigator<H>) -> R,
) -> Option<R> {
    let Ok(mut guard) = state.try_borrow_mut() else {
        warn!("feed navigator busy, dropping event");
        return None;
    };
    guard.as_mut().map(f)
}
