//! Scoped loader state for the control panel

use rover_core::{Screen, ScreenHandle};

/// While alive, the loader shows and every button is disabled. Dropping it
/// restores the idle surface on every exit path, including cancellation.
#[must_use = "the loader clears as soon as the guard is dropped"]
#[derive(Debug)]
pub struct LoadingGuard {
    screen: ScreenHandle,
}

impl LoadingGuard {
    /// Enter the busy state unconditionally; guards nest
    pub fn acquire(screen: &ScreenHandle) -> Self {
        screen.update(Screen::begin_busy);
        Self {
            screen: screen.clone(),
        }
    }

    /// Enter the busy state only if the buttons are currently enabled
    pub fn try_acquire(screen: &ScreenHandle) -> Option<Self> {
        let acquired = screen.update(|s| {
            if s.buttons_enabled {
                s.begin_busy();
                true
            } else {
                false
            }
        });
        acquired.then(|| Self {
            screen: screen.clone(),
        })
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.screen.update(Screen::end_busy);
    }
}
