//! Property-based tests for the page view state.
//!
//! Covers section selection and draft field updates across arbitrary input
//! sequences, including Unicode and empty text.

use portfolio::state::site::{ContactDraft, ContactField, Section, SiteState};
use proptest::prelude::*;

fn any_section() -> impl Strategy<Value = Section> {
    prop_oneof![Just(Section::About), Just(Section::Products), Just(Section::Contact)]
}

fn any_field() -> impl Strategy<Value = ContactField> {
    prop_oneof![Just(ContactField::Name), Just(ContactField::Email), Just(ContactField::Message)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn exactly_one_section_visible(sequence in prop::collection::vec(any_section(), 1..40)) {
        let mut state = SiteState::default();
        for section in sequence {
            state.select_section(section);
            let visible = Section::ALL.iter().filter(|s| state.is_visible(**s)).count();
            prop_assert_eq!(visible, 1);
            prop_assert_eq!(state.active_section, section);
        }
    }

    #[test]
    fn update_field_touches_only_its_field(
        name in "\\PC{0,40}",
        email in "\\PC{0,40}",
        message in "\\PC{0,80}",
        field in any_field(),
        value in "\\PC{0,60}",
    ) {
        let mut state = SiteState::default();
        state.update_field(ContactField::Name, name);
        state.update_field(ContactField::Email, email);
        state.update_field(ContactField::Message, message);
        let before = state.draft.clone();

        state.update_field(field, value.clone());

        for other in ContactField::ALL {
            if other == field {
                prop_assert_eq!(state.draft.get(other), value.as_str());
            } else {
                prop_assert_eq!(state.draft.get(other), before.get(other));
            }
        }
    }

    #[test]
    fn section_changes_never_touch_draft(
        message in "\\PC{0,80}",
        sequence in prop::collection::vec(any_section(), 0..20),
    ) {
        let mut state = SiteState::default();
        state.update_field(ContactField::Message, message.clone());
        for section in sequence {
            state.select_section(section);
        }
        prop_assert_eq!(
            state.draft,
            ContactDraft { message, ..ContactDraft::default() }
        );
    }
}
