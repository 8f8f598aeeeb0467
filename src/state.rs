//! Pure UI state for the single-page portfolio.
//!
//! Every cross-component concern (active section, open project modal, contact
//! submission status, sound flag, toast) lives in one [`ViewState`] value that
//! only [`update`] may change. Rendering layers dispatch [`Msg`] values and
//! project the fields they care about; nothing in here touches the DOM, so the
//! whole state machine is testable on native targets.

use crate::portfolio;

/// The five scroll targets of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Blog,
        Section::Contact,
    ];

    /// The DOM id of the section element, doubling as the scroll anchor.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    /// Uppercase label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::About => "ABOUT",
            Section::Projects => "PROJECTS",
            Section::Blog => "BLOG",
            Section::Contact => "CONTACT",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// Where the most recent contact submission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification. At most one is on screen at a time; installing a
/// new one replaces the old.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: &'static str,
}

impl Toast {
    pub fn success(message: &'static str) -> Self {
        Toast { kind: ToastKind::Success, message }
    }

    pub fn error(message: &'static str) -> Self {
        Toast { kind: ToastKind::Error, message }
    }
}

pub const TRANSMIT_SUCCESS: &str = "MESSAGE.TRANSMITTED_SUCCESSFULLY";
pub const TRANSMIT_FAILURE: &str = "TRANSMISSION.FAILED - TRY.AGAIN";

/// How long a contact toast stays up before the form resets.
pub const CONTACT_RESET_MS: u64 = 3000;

/// The audio cues the interface can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueKind {
    Click,
    Hover,
    Success,
    Error,
}

impl CueKind {
    /// Oscillator frequency in Hz for this cue.
    pub fn frequency(self) -> f32 {
        match self {
            CueKind::Click => 800.0,
            CueKind::Hover => 600.0,
            CueKind::Success => 1000.0,
            CueKind::Error => 300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub active_section: Section,
    pub selected_project: Option<u32>,
    pub contact_status: ContactStatus,
    pub sound_enabled: bool,
    pub toast: Option<Toast>,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            active_section: Section::Home,
            selected_project: None,
            contact_status: ContactStatus::Idle,
            sound_enabled: true,
            toast: None,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// The scroll observer reported a section crossing the focus band.
    SectionEntered(Section),
    /// A nav link was clicked.
    NavigateTo(Section),
    OpenProject(u32),
    CloseProject,
    ToggleSound,
    SetSound(bool),
    /// The contact request finished, one way or the other.
    ContactSettled { ok: bool },
    /// Toast timer elapsed; put the form back in its idle state.
    ContactReset,
    DismissToast,
}

/// Applies one message to the state. Unknown project ids and out-of-order
/// contact settlements are ignored rather than rejected, so the UI can never
/// wedge itself on a stale event.
pub fn update(mut state: ViewState, msg: Msg) -> ViewState {
    match msg {
        Msg::SectionEntered(section) | Msg::NavigateTo(section) => {
            state.active_section = section;
        }
        Msg::OpenProject(id) => {
            if portfolio::project(id).is_some() {
                state.selected_project = Some(id);
            }
        }
        Msg::CloseProject => {
            state.selected_project = None;
        }
        Msg::ToggleSound => {
            state.sound_enabled = !state.sound_enabled;
        }
        Msg::SetSound(enabled) => {
            state.sound_enabled = enabled;
        }
        Msg::ContactSettled { ok } => {
            // Only the first settlement counts; a late duplicate must not
            // flip an already-reported outcome.
            if state.contact_status == ContactStatus::Idle {
                if ok {
                    state.contact_status = ContactStatus::Success;
                    state.toast = Some(Toast::success(TRANSMIT_SUCCESS));
                } else {
                    state.contact_status = ContactStatus::Error;
                    state.toast = Some(Toast::error(TRANSMIT_FAILURE));
                }
            }
        }
        Msg::ContactReset => {
            state.contact_status = ContactStatus::Idle;
            state.toast = None;
        }
        Msg::DismissToast => {
            state.toast = None;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(msgs: &[Msg]) -> ViewState {
        msgs.iter()
            .fold(ViewState::new(), |state, &msg| update(state, msg))
    }

    #[test]
    fn starts_on_home_with_defaults() {
        let state = ViewState::new();
        assert_eq!(state.active_section, Section::Home);
        assert_eq!(state.selected_project, None);
        assert_eq!(state.contact_status, ContactStatus::Idle);
        assert!(state.sound_enabled);
        assert_eq!(state.toast, None);
    }

    #[test]
    fn navigation_and_observer_both_move_the_active_section() {
        let state = after(&[Msg::NavigateTo(Section::Projects)]);
        assert_eq!(state.active_section, Section::Projects);

        let state = after(&[
            Msg::NavigateTo(Section::Projects),
            Msg::SectionEntered(Section::Contact),
        ]);
        assert_eq!(state.active_section, Section::Contact);
    }

    #[test]
    fn anchors_round_trip_for_every_section() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("mainframe"), None);
    }

    #[test]
    fn open_project_requires_a_known_id() {
        let state = after(&[Msg::OpenProject(2)]);
        assert_eq!(state.selected_project, Some(2));

        let state = after(&[Msg::OpenProject(99)]);
        assert_eq!(state.selected_project, None);
    }

    #[test]
    fn close_then_reopen_switches_the_modal_content() {
        let state = after(&[Msg::OpenProject(2), Msg::CloseProject, Msg::OpenProject(1)]);
        assert_eq!(state.selected_project, Some(1));
        let project = portfolio::project(1).unwrap();
        assert_eq!(project.id, 1);
    }

    #[test]
    fn sound_toggles_and_sets() {
        let state = after(&[Msg::ToggleSound]);
        assert!(!state.sound_enabled);

        let state = after(&[Msg::ToggleSound, Msg::ToggleSound]);
        assert!(state.sound_enabled);

        let state = after(&[Msg::SetSound(false)]);
        assert!(!state.sound_enabled);
    }

    #[test]
    fn successful_settlement_raises_a_success_toast() {
        let state = after(&[Msg::ContactSettled { ok: true }]);
        assert_eq!(state.contact_status, ContactStatus::Success);
        assert_eq!(state.toast, Some(Toast::success(TRANSMIT_SUCCESS)));
    }

    #[test]
    fn failed_settlement_raises_an_error_toast() {
        let state = after(&[Msg::ContactSettled { ok: false }]);
        assert_eq!(state.contact_status, ContactStatus::Error);
        assert_eq!(state.toast, Some(Toast::error(TRANSMIT_FAILURE)));
    }

    #[test]
    fn second_settlement_is_ignored_until_reset() {
        let state = after(&[
            Msg::ContactSettled { ok: true },
            Msg::ContactSettled { ok: false },
        ]);
        assert_eq!(state.contact_status, ContactStatus::Success);
        assert_eq!(state.toast, Some(Toast::success(TRANSMIT_SUCCESS)));
    }

    #[test]
    fn reset_returns_to_idle_and_clears_the_toast() {
        let state = after(&[Msg::ContactSettled { ok: false }, Msg::ContactReset]);
        assert_eq!(state.contact_status, ContactStatus::Idle);
        assert_eq!(state.toast, None);

        // A fresh submission can settle again after the reset.
        let state = update(state, Msg::ContactSettled { ok: true });
        assert_eq!(state.contact_status, ContactStatus::Success);
    }

    #[test]
    fn dismiss_clears_only_the_toast() {
        let state = after(&[Msg::ContactSettled { ok: true }, Msg::DismissToast]);
        assert_eq!(state.toast, None);
        assert_eq!(state.contact_status, ContactStatus::Success);
    }

    #[test]
    fn cue_frequencies_match_the_synth_design() {
        assert_eq!(CueKind::Click.frequency(), 800.0);
        assert_eq!(CueKind::Hover.frequency(), 600.0);
        assert_eq!(CueKind::Success.frequency(), 1000.0);
        assert_eq!(CueKind::Error.frequency(), 300.0);
    }
}
