//! Static content model for the portfolio page.
//!
//! Everything here is fixed at compile time. The types are:
//!
//! - **Serializable** - project data can be exported as JSON via serde
//! - **Clone-friendly** - components take owned values without borrowing issues
//!
//! # Example
//!
//! ```rust
//! use portfolio_leptos::types::project_data;
//!
//! let projects = project_data();
//! assert_eq!(projects.len(), 3);
//! assert_eq!(projects[0].title, "E-Commerce Platform");
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One portfolio project shown as a card in the gallery.
///
/// `id` is unique within [`project_data`] and is only used as a rendering key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Stable identifier, unique within the list
    pub id: u32,
    /// Card title
    pub title: String,
    /// Short description shown under the title
    pub description: String,
    /// Technology tags, rendered in order
    #[serde(default)]
    pub tech: Vec<String>,
    /// Remote image URI for the card header
    pub image: String,
}

impl ProjectRecord {
    fn new(id: u32, title: &str, description: &str, tech: &[&str], image: &str) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            tech: tech.iter().map(|t| (*t).to_string()).collect(),
            image: image.into(),
        }
    }
}

/// The fixed, ordered project list rendered by the gallery.
pub fn project_data() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new(
            1,
            "E-Commerce Platform",
            "A full-featured store with payment gateway integration and real-time inventory.",
            &["React", "Bootstrap"],
            "https://images.unsplash.com/photo-1557821552-17105176677c?auto=format&fit=crop&q=80&w=600",
        ),
        ProjectRecord::new(
            2,
            "Task Management Tool",
            "A productivity app featuring drag-and-drop tasks and team collaboration suites.",
            &["Vite", "Firebase"],
            "https://images.unsplash.com/photo-1540350394557-8d14678e7f91?auto=format&fit=crop&q=80&w=600",
        ),
        ProjectRecord::new(
            3,
            "Weather Dashboard",
            "Visualizing real-time weather data with dynamic charts and geolocation support.",
            &["JavaScript", "API"],
            "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?auto=format&fit=crop&q=80&w=600",
        ),
    ]
}

/// Returns `true` when no two records share an `id`.
pub fn ids_are_unique(projects: &[ProjectRecord]) -> bool {
    let mut seen = HashSet::with_capacity(projects.len());
    projects.iter().all(|p| seen.insert(p.id))
}

/// A same-page anchor in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Visible link text
    pub label: &'static str,
    /// Fragment the link scrolls to
    pub href: &'static str,
}

/// Navigation anchors, in display order.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Home",
        href: "#home",
    },
    NavLink {
        label: "Projects",
        href: "#projects",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

/// Input control used by a contact field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Single-line email input
    Email,
    /// Multi-line textarea with the given row count
    TextArea {
        /// Visible rows
        rows: u8,
    },
}

impl FieldKind {
    /// Value of the `type` attribute for `<input>` kinds.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::TextArea { .. } => None,
        }
    }
}

/// Presentation descriptor for one contact form field.
///
/// Describes how the field looks; no value is ever captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactField {
    /// Label above the control
    pub label: &'static str,
    /// Control type
    pub kind: FieldKind,
    /// Placeholder text
    pub placeholder: &'static str,
}

/// Contact form fields, in display order.
pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField {
        label: "Full Name",
        kind: FieldKind::Text,
        placeholder: "Enter your name",
    },
    ContactField {
        label: "Email Address",
        kind: FieldKind::Email,
        placeholder: "name@example.com",
    },
    ContactField {
        label: "Your Message",
        kind: FieldKind::TextArea { rows: 4 },
        placeholder: "How can I help you?",
    },
];
