use indicatif::ProgressBar;
use std::cell::RefCell;
use std::time::Duration;

/// A stderr spinner that can be stopped and restarted with a new message.
///
/// Hidden automatically when stderr is not a terminal.
pub(crate) struct Spinner {
    bar: RefCell<Option<ProgressBar>>,
}

impl Spinner {
    pub(crate) fn new() -> Self {
        Self {
            bar: RefCell::new(None),
        }
    }

    pub(crate) fn start(&self, message: &'static str) {
        let bar = ProgressBar::new_spinner().with_message(message);
        bar.enable_steady_tick(Duration::from_millis(100));
        if let Some(previous) = self.bar.borrow_mut().replace(bar) {
            previous.finish_and_clear();
        }
    }

    pub(crate) fn stop(&self) {
        if let Some(bar) = self.bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}
