use std::env;
use std::process::Stdio;
use tokio::process::{Child, Command};

/// Text-to-speech commands probed in order. Each takes the utterance as its
/// only argument.
const CANDIDATES: &[&str] = &["say", "espeak-ng", "espeak", "spd-say"];

/// Speaks drawn numbers through a system text-to-speech command.
///
/// Fire-and-forget by contract: spawn failures and non-zero exits are
/// swallowed, and nothing awaits the child. A new utterance supersedes any
/// still-running one so announcements never overlap; [`stop`](Announcer::stop)
/// kills the in-flight child on reset and shutdown. With no usable command
/// (or `--mute`) the announcer is silent.
pub struct Announcer {
    command: Option<String>,
    in_flight: Option<Child>,
}

impl Announcer {
    /// Use the first candidate command found on `PATH`, if any.
    pub fn detect() -> Self {
        let command = CANDIDATES
            .iter()
            .find(|candidate| find_on_path(candidate))
            .map(|candidate| candidate.to_string());
        Self {
            command,
            in_flight: None,
        }
    }

    /// Use an explicit command, skipping detection.
    pub fn with_command(command: String) -> Self {
        Self {
            command: Some(command),
            in_flight: None,
        }
    }

    /// An announcer that says nothing.
    pub fn muted() -> Self {
        Self {
            command: None,
            in_flight: None,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.command.is_none()
    }

    /// Announce a number. Must be called from within a tokio runtime.
    pub fn speak(&mut self, number: u8) {
        let Some(command) = self.command.clone() else {
            return;
        };
        self.stop();
        self.in_flight = Command::new(command)
            .arg(number.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .ok();
    }

    /// Best-effort cancellation of the in-flight utterance.
    pub fn stop(&mut self) {
        if let Some(mut child) = self.in_flight.take() {
            child.start_kill().ok();
        }
    }
}

fn find_on_path(program: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| dir.join(program).is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muted_announcer_has_no_command() {
        let announcer = Announcer::muted();
        assert!(announcer.is_muted());
    }

    #[test]
    fn explicit_command_is_kept() {
        let announcer = Announcer::with_command("espeak".into());
        assert!(!announcer.is_muted());
    }

    #[test]
    fn missing_binary_is_not_found() {
        assert!(!find_on_path("definitely-not-a-tts-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn common_binary_is_found() {
        assert!(find_on_path("sh"));
    }

    #[tokio::test]
    async fn muted_speak_is_a_no_op() {
        let mut announcer = Announcer::muted();
        announcer.speak(42);
        announcer.stop();
    }

    #[tokio::test]
    async fn failed_spawn_is_unobservable() {
        let mut announcer = Announcer::with_command("definitely-not-a-tts-binary".into());
        announcer.speak(42);
        announcer.stop();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn speak_supersedes_and_stop_kills() {
        // `sleep` stands in for a long utterance.
        let mut announcer = Announcer::with_command("sleep".into());
        announcer.speak(30);
        announcer.speak(60);
        assert!(announcer.in_flight.is_some());
        announcer.stop();
        assert!(announcer.in_flight.is_none());
    }
}
