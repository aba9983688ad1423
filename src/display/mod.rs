//! Display targets the poller writes into.
//!
//! A display target is a single text-bearing surface addressed by a fixed
//! identifier. Every write replaces the previous content; the last write in
//! time wins.

mod memory;
mod terminal;

pub use memory::MemoryDisplay;
pub use terminal::TerminalDisplay;

use std::sync::{Arc, Mutex};

/// Identifier used when none is configured.
pub const DEFAULT_DISPLAY_ID: &str = "gptOutput";

/// A surface holding the most recently written text.
pub trait DisplayTarget: Send + Sync {
    /// Fixed identifier of this surface.
    fn id(&self) -> &str;

    /// Replace the surface content with `text`, verbatim.
    fn show(&self, text: &str);
}

/// Forwards every write to several targets.
///
/// The first target's id is reported as the tee's id. A write reaches every
/// target before the next write starts, so all targets agree on the last text.
pub struct TeeDisplay {
    targets: Vec<Arc<dyn DisplayTarget>>,
    write: Mutex<()>,
}

impl TeeDisplay {
    pub fn new(targets: Vec<Arc<dyn DisplayTarget>>) -> Self {
        Self {
            targets,
            write: Mutex::new(()),
        }
    }
}

impl DisplayTarget for TeeDisplay {
    fn id(&self) -> &str {
        self.targets
            .first()
            .map(|t| t.id())
            .unwrap_or(DEFAULT_DISPLAY_ID)
    }

    fn show(&self, text: &str) {
        let _guard = match self.write.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for target in &self.targets {
            target.show(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_tee_writes_every_target() {
        let a = MemoryDisplay::new("a");
        let b = MemoryDisplay::new("b");
        let tee = TeeDisplay::new(vec![Arc::new(a.clone()), Arc::new(b.clone())]);

        tee.show("hello");

        assert_eq!(a.content(), "hello");
        assert_eq!(b.content(), "hello");
        assert_eq!(tee.id(), "a");
    }

    /// Target that stalls after writing its first text.
    struct StallingDisplay {
        inner: MemoryDisplay,
        stall_on: &'static str,
    }

    impl DisplayTarget for StallingDisplay {
        fn id(&self) -> &str {
            self.inner.id()
        }

        fn show(&self, text: &str) {
            self.inner.show(text);
            if text == self.stall_on {
                std::thread::sleep(Duration::from_millis(200));
            }
        }
    }

    #[test]
    fn test_tee_concurrent_writes_keep_targets_in_step() {
        let terminal = MemoryDisplay::new("terminal");
        let mirror = MemoryDisplay::new("mirror");
        let tee = Arc::new(TeeDisplay::new(vec![
            Arc::new(StallingDisplay {
                inner: terminal.clone(),
                stall_on: "A",
            }),
            Arc::new(mirror.clone()),
        ]));

        let first = {
            let tee = Arc::clone(&tee);
            std::thread::spawn(move || tee.show("A"))
        };
        std::thread::sleep(Duration::from_millis(50));
        let second = {
            let tee = Arc::clone(&tee);
            std::thread::spawn(move || tee.show("B"))
        };
        first.join().unwrap();
        second.join().unwrap();

        assert_eq!(terminal.content(), "B");
        assert_eq!(mirror.content(), "B");
    }

    #[test]
    fn test_empty_tee_uses_default_id() {
        let tee = TeeDisplay::new(vec![]);
        tee.show("ignored");
        assert_eq!(tee.id(), DEFAULT_DISPLAY_ID);
    }
}
