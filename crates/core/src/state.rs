//! Client-side UI state models.
//!
//! The site ships as static HTML, so the browser behavior lives in small
//! generated scripts (see the generator crate). These types are the
//! reference model those scripts follow: the contact form's submission
//! cycle and the mobile navigation toggle.

/// How long the simulated submission takes. The form never contacts a
/// backend; the delay stands in for the round trip.
pub const SUBMIT_DELAY_MS: u64 = 1500;

/// Submit button label in the idle state
pub const SUBMIT_LABEL: &str = "Send Message";

/// Submit button label while the simulated submission is pending
pub const SENDING_LABEL: &str = "Sending...";

/// Heading of the confirmation panel
pub const SUCCESS_HEADING: &str = "Message Sent Successfully!";

/// Body text of the confirmation panel
pub const SUCCESS_BODY: &str =
    "Thank you for reaching out. We'll respond to your inquiry within 24-48 hours.";

/// Label of the action that returns the confirmation panel to the form
pub const RESET_LABEL: &str = "Send Another Message";

/// Contact form submission cycle: idle -> submitting -> submitted -> idle.
///
/// Each accessor consumes the phase and returns the next one, advancing
/// only from the single phase it is valid in. Off-cycle calls return the
/// phase unchanged, which gives the exactly-one-transition-per-submit
/// guarantee without any guard state. The submitting phase cannot be
/// cancelled and cannot fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl FormPhase {
    /// User pressed the submit control
    pub fn submit(self) -> FormPhase {
        match self {
            FormPhase::Idle => FormPhase::Submitting,
            other => other,
        }
    }

    /// The simulated delay elapsed
    pub fn complete(self) -> FormPhase {
        match self {
            FormPhase::Submitting => FormPhase::Submitted,
            other => other,
        }
    }

    /// User chose to send another message
    pub fn reset(self) -> FormPhase {
        match self {
            FormPhase::Submitted => FormPhase::Idle,
            other => other,
        }
    }

    /// Whether the submit control should be disabled
    pub fn is_busy(self) -> bool {
        self == FormPhase::Submitting
    }
}

/// Fixed inquiry categories offered by the contact form select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryType {
    General,
    SchoolRegistration,
    Sponsorship,
    Partnership,
    Volunteer,
    Media,
    Other,
}

impl InquiryType {
    pub const ALL: [InquiryType; 7] = [
        InquiryType::General,
        InquiryType::SchoolRegistration,
        InquiryType::Sponsorship,
        InquiryType::Partnership,
        InquiryType::Volunteer,
        InquiryType::Media,
        InquiryType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::SchoolRegistration => "School Registration",
            InquiryType::Sponsorship => "Sponsorship Opportunity",
            InquiryType::Partnership => "Partnership Proposal",
            InquiryType::Volunteer => "Volunteer Interest",
            InquiryType::Media => "Media/Press",
            InquiryType::Other => "Other",
        }
    }
}

/// Mobile navigation link list: a single open/closed boolean.
///
/// Selecting any link closes the menu, the second mutator of the same
/// state alongside the toggle button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(self) -> MenuState {
        MenuState { open: !self.open }
    }

    pub fn select_link(self) -> MenuState {
        MenuState { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_cycle_is_repeatable() {
        let phase = FormPhase::default();
        assert_eq!(phase, FormPhase::Idle);

        let phase = phase.submit();
        assert_eq!(phase, FormPhase::Submitting);
        assert!(phase.is_busy());

        let phase = phase.complete();
        assert_eq!(phase, FormPhase::Submitted);
        assert!(!phase.is_busy());

        let phase = phase.reset();
        assert_eq!(phase, FormPhase::Idle);

        // Second lap works the same way
        assert_eq!(phase.submit().complete(), FormPhase::Submitted);
    }

    #[test]
    fn exactly_one_transition_per_submit() {
        // Re-submitting while pending does not restart the cycle
        let pending = FormPhase::Idle.submit();
        assert_eq!(pending.submit(), FormPhase::Submitting);

        // Re-submitting after success does nothing until reset
        let done = pending.complete();
        assert_eq!(done.submit(), FormPhase::Submitted);
    }

    #[test]
    fn off_cycle_calls_are_no_ops() {
        assert_eq!(FormPhase::Idle.complete(), FormPhase::Idle);
        assert_eq!(FormPhase::Idle.reset(), FormPhase::Idle);
        assert_eq!(FormPhase::Submitting.reset(), FormPhase::Submitting);
        assert_eq!(FormPhase::Submitted.complete(), FormPhase::Submitted);
    }

    #[test]
    fn menu_double_toggle_returns_to_closed() {
        let menu = MenuState::default();
        assert!(!menu.open);
        assert!(menu.toggle().open);
        assert_eq!(menu.toggle().toggle(), menu);
    }

    #[test]
    fn selecting_a_link_closes_the_menu() {
        let open = MenuState::default().toggle();
        assert!(!open.select_link().open);
        // Closing an already-closed menu is harmless
        assert!(!MenuState::default().select_link().open);
    }

    #[test]
    fn inquiry_labels_are_unique_and_in_order() {
        let labels: Vec<&str> = InquiryType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0], "General Inquiry");
        assert_eq!(labels[6], "Other");
        let mut unique = labels.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), labels.len());
    }
}
