//! Page-level view state: the active section and the contact form draft.
//!
//! DESIGN
//! ======
//! One `SiteState` value is created per mounted `App` and shared through a
//! `RwSignal` in Leptos context. All transitions are synchronous and happen
//! inside the event handler that triggered them.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use serde::Serialize;

use crate::net::contact::{ContactSink, SubmitError};

/// Content panel selected by the nav tabs and call-to-action buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    About,
    Products,
    Contact,
}

impl Section {
    /// All sections in nav order.
    pub const ALL: [Section; 3] = [Section::About, Section::Products, Section::Contact];

    /// Stable lowercase key, used for DOM ids and log fields.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Products => "products",
            Self::Contact => "contact",
        }
    }

    /// Nav tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "Hakkımda",
            Self::Products => "Ürünler",
            Self::Contact => "İletişim",
        }
    }
}

/// Editable field of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Form fields in display order.
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Form control name and id.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Form label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Adınız",
            Self::Email => "Email",
            Self::Message => "Mesajınız",
        }
    }

    /// `type` of the single-line input; `None` for the multi-line message.
    #[must_use]
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("text"),
            Self::Email => Some("email"),
            Self::Message => None,
        }
    }
}

/// Contact form draft. Fields are free text and never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Section opened by the hero call-to-action and the product buy buttons.
pub const CTA_TARGET: Section = Section::Contact;

/// View controller state for the landing page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteState {
    pub active_section: Section,
    pub draft: ContactDraft,
}

impl SiteState {
    /// Make `section` the only visible panel.
    pub fn select_section(&mut self, section: Section) {
        log::debug!("section selected: {}", section.key());
        self.active_section = section;
    }

    /// Transition shared by every call-to-action button.
    pub fn follow_cta(&mut self) {
        self.select_section(CTA_TARGET);
    }

    #[must_use]
    pub fn is_visible(&self, section: Section) -> bool {
        self.active_section == section
    }

    /// Merge one field into the draft, leaving the others untouched.
    pub fn update_field(&mut self, field: ContactField, value: String) {
        self.draft.set(field, value);
    }

    /// Hand the draft to `sink` and reset it.
    ///
    /// The draft is cleared before delivery and stays cleared even when the
    /// sink fails; the sink's result is only passed back to the caller.
    ///
    /// # Errors
    ///
    /// Returns whatever [`SubmitError`] the sink reported.
    pub fn submit(&mut self, sink: &dyn ContactSink) -> Result<(), SubmitError> {
        let draft = std::mem::take(&mut self.draft);
        if draft.is_empty() {
            log::debug!("submitting an empty contact draft");
        }
        sink.deliver(&draft)
    }
}
