use log::{debug, trace};
use std::process::{Command, Stdio};

/// Fire-and-forget delivery of a "round won" message.
///
/// Implementations must not block and must swallow their own failures.
pub trait Notifier {
    fn announce_win(&self, tries: u32);
}

pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn announce_win(&self, _tries: u32) {}
}

/// Posts a desktop notification through the host's `notify-send`.
pub struct DesktopNotifier {
    enabled: bool,
    program: String,
    leading_args: Vec<String>,
}

impl DesktopNotifier {
    pub fn new(enabled: bool) -> Self {
        Self::with_command(enabled, "notify-send", Vec::new())
    }

    /// Title and body are appended after `leading_args`.
    fn with_command(
        enabled: bool,
        program: impl Into<String>,
        leading_args: Vec<String>,
    ) -> Self {
        Self {
            enabled,
            program: program.into(),
            leading_args,
        }
    }

    pub fn title() -> &'static str {
        "You Won!"
    }

    pub fn body(tries: u32) -> String {
        format!("You guessed the number in {} tries.", tries)
    }
}

impl Notifier for DesktopNotifier {
    fn announce_win(&self, tries: u32) {
        if !self.enabled {
            trace!(target: "notifier", "Notifications disabled; skipping");
            return;
        }

        let spawned = Command::new(&self.program)
            .args(&self.leading_args)
            .arg(Self::title())
            .arg(Self::body(tries))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                // reap in the background so the caller never waits
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => debug!(target: "notifier", "Could not run {}: {}", self.program, e),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    /// Captures announcements for assertions.
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        pub announced: Rc<RefCell<Vec<u32>>>,
    }

    impl Notifier for RecordingNotifier {
        fn announce_win(&self, tries: u32) {
            self.announced.borrow_mut().push(tries);
        }
    }

    #[test]
    fn test_message_text() {
        assert_eq!(DesktopNotifier::title(), "You Won!");
        assert_eq!(
            DesktopNotifier::body(4),
            "You guessed the number in 4 tries."
        );
    }

    /// A notifier that runs `sh -c 'touch <marker>'` instead of notify-send.
    fn touching(enabled: bool, marker: &Path) -> DesktopNotifier {
        DesktopNotifier::with_command(
            enabled,
            "sh",
            vec!["-c".to_string(), format!("touch '{}'", marker.display())],
        )
    }

    fn wait_for(marker: &Path) -> bool {
        for _ in 0..100 {
            if marker.exists() {
                return true;
            }
            thread::sleep(Duration::from_millis(50));
        }
        false
    }

    #[test]
    fn test_enabled_notifier_runs_the_command() {
        let dir = tempdir().unwrap();
        let marker = dir.path().join("notified");

        touching(true, &marker).announce_win(3);
        assert!(wait_for(&marker));
    }

    #[test]
    fn test_disabled_notifier_runs_nothing() {
        let dir = tempdir().unwrap();
        let marker = dir.path().join("notified");

        touching(false, &marker).announce_win(3);
        thread::sleep(Duration::from_millis(300));
        assert!(!marker.exists());
    }

    #[test]
    fn test_missing_program_is_swallowed() {
        let notifier =
            DesktopNotifier::with_command(true, "definitely-not-a-real-notifier-binary", Vec::new());
        let result = std::panic::catch_unwind(|| notifier.announce_win(3));
        assert!(result.is_ok());
    }
}
