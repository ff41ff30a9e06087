//! Onboarding wizard gate
//!
//! Tracks whether the welcome wizard still needs to appear. The core
//! computations never read this; it exists for the shell, which may persist
//! the flag under [`WELCOME_STORAGE_KEY`] using the tri-state encoding on
//! [`WelcomeState`].

use shared::WelcomeState;

/// Key shells use when they persist the flag
pub const WELCOME_STORAGE_KEY: &str = "bloom-and-grow-welcome-completed";

#[derive(Debug, Default)]
pub struct OnboardingGate {
    state: WelcomeState,
}

impl OnboardingGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a gate from a previously persisted flag value
    pub fn from_stored(value: Option<&str>) -> Self {
        Self {
            state: WelcomeState::from_storage_value(value),
        }
    }

    pub fn state(&self) -> WelcomeState {
        self.state
    }

    /// The wizard appears only while the flag is unset
    pub fn should_show_wizard(&self) -> bool {
        self.state == WelcomeState::Unset
    }

    pub fn complete(&mut self) {
        self.state = WelcomeState::Completed;
    }

    pub fn skip(&mut self) {
        self.state = WelcomeState::Skipped;
    }

    /// Clear the flag so the wizard shows again (demo/testing affordance)
    pub fn reset(&mut self) {
        self.state = WelcomeState::Unset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_shows_until_completed_or_skipped() {
        let mut gate = OnboardingGate::new();
        assert!(gate.should_show_wizard());

        gate.complete();
        assert!(!gate.should_show_wizard());
        assert_eq!(gate.state(), WelcomeState::Completed);

        gate.reset();
        assert!(gate.should_show_wizard());

        gate.skip();
        assert!(!gate.should_show_wizard());
        assert_eq!(gate.state(), WelcomeState::Skipped);
    }

    #[test]
    fn test_from_stored() {
        assert!(OnboardingGate::from_stored(None).should_show_wizard());
        assert!(!OnboardingGate::from_stored(Some("true")).should_show_wizard());
        assert!(!OnboardingGate::from_stored(Some("skipped")).should_show_wizard());
    }
}
