//! Outbound collaborators of the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `images` builds read-only requests for the image provisioning service.
//! `contact` defines where a submitted contact draft goes. Neither performs
//! network I/O itself.

pub mod contact;
pub mod images;
