//! Mocked domain data: users, files, collaborators, and seed elements.
//!
//! Everything the surrounding application would normally fetch from a
//! backend lives here as in-memory seed values. The canvas core treats all
//! of it as opaque input.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use canvas::doc::{Element, ElementKind};

/// An application user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

/// Sharing permission level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    #[default]
    View,
    Edit,
}

impl Permission {
    /// Human-readable label for select controls.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::View => "Can view",
            Self::Edit => "Can edit",
        }
    }
}

/// A user with access to a shared file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub user: User,
    pub permission: Permission,
}

/// Whether a dashboard item is a file or a folder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Folder,
}

/// A design file or folder shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileItem {
    pub id: String,
    pub name: String,
    pub kind: FileKind,
    /// Last-modified timestamp, preformatted for display.
    pub last_modified: String,
    pub thumbnail_url: Option<String>,
}

/// The signed-in user every session starts with.
#[must_use]
pub fn mock_user() -> User {
    User {
        id: "user-zenith-001".to_owned(),
        name: "Alex Chen".to_owned(),
        email: "alex.chen@zenithdesign.io".to_owned(),
        avatar_url: Some("https://i.pravatar.cc/150?u=alexchen".to_owned()),
    }
}

/// The dashboard's seed file/folder grid.
#[must_use]
pub fn mock_files() -> Vec<FileItem> {
    vec![
        FileItem {
            id: "file-abc-123".to_owned(),
            name: "Zenith OS - UI Kit Design".to_owned(),
            kind: FileKind::File,
            last_modified: "Jul 28, 2024".to_owned(),
            thumbnail_url: Some("https://images.unsplash.com/photo-1581291518857-4e27b48ff24e?w=300&h=150".to_owned()),
        },
        FileItem {
            id: "folder-proj-xyz".to_owned(),
            name: "Project Phoenix".to_owned(),
            kind: FileKind::Folder,
            last_modified: "Jul 27, 2024".to_owned(),
            thumbnail_url: None,
        },
        FileItem {
            id: "file-def-456".to_owned(),
            name: "Mobile App Splash Screens V2".to_owned(),
            kind: FileKind::File,
            last_modified: "Jul 26, 2024".to_owned(),
            thumbnail_url: Some("https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=300&h=150".to_owned()),
        },
        FileItem {
            id: "file-ghi-789".to_owned(),
            name: "Brand Guidelines Update".to_owned(),
            kind: FileKind::File,
            last_modified: "Jul 25, 2024".to_owned(),
            thumbnail_url: Some("https://images.unsplash.com/photo-1522199755839-a2bacb67c546?w=300&h=150".to_owned()),
        },
        FileItem {
            id: "folder-team-alpha".to_owned(),
            name: "Team Alpha Assets".to_owned(),
            kind: FileKind::Folder,
            last_modified: "Jul 24, 2024".to_owned(),
            thumbnail_url: None,
        },
    ]
}

/// Seed collaborators for the sharing screen.
#[must_use]
pub fn mock_collaborators() -> Vec<Collaborator> {
    vec![
        Collaborator {
            user: User {
                id: "collab-1".to_owned(),
                name: "Alice Wonderland".to_owned(),
                email: "alice@example.com".to_owned(),
                avatar_url: Some("https://i.pravatar.cc/40?u=alice@example.com".to_owned()),
            },
            permission: Permission::Edit,
        },
        Collaborator {
            user: User {
                id: "collab-2".to_owned(),
                name: "Bob The Builder".to_owned(),
                email: "bob@example.com".to_owned(),
                avatar_url: Some("https://i.pravatar.cc/40?u=bob@example.com".to_owned()),
            },
            permission: Permission::View,
        },
    ]
}

/// Build a collaborator from an invited email address. The display name is
/// derived from the mailbox part.
#[must_use]
pub fn collaborator_from_email(email: &str, permission: Permission) -> Collaborator {
    let name = email.split('@').next().unwrap_or(email).to_owned();
    Collaborator {
        user: User {
            id: format!("collab-{}", Uuid::new_v4()),
            name,
            email: email.to_owned(),
            avatar_url: Some(format!("https://i.pravatar.cc/40?u={email}")),
        },
        permission,
    }
}

/// Mock shareable link for a file.
#[must_use]
pub fn shareable_link(file_id: &str) -> String {
    format!("https://app.zenith.design/file/{file_id}?token={}", Uuid::new_v4().simple())
}

/// Sample elements the editor opens with.
#[must_use]
pub fn sample_elements() -> Vec<Element> {
    vec![
        Element {
            id: Uuid::new_v4(),
            kind: ElementKind::Rectangle,
            x: 50.0,
            y: 50.0,
            width: 200.0,
            height: 120.0,
            fill: "rgba(59, 130, 246, 0.5)".to_owned(),
            stroke: Some("#3B82F6".to_owned()),
            text: None,
        },
        Element {
            id: Uuid::new_v4(),
            kind: ElementKind::Ellipse,
            x: 300.0,
            y: 100.0,
            width: 100.0,
            height: 100.0,
            fill: "rgba(16, 185, 129, 0.5)".to_owned(),
            stroke: Some("#10B981".to_owned()),
            text: None,
        },
        Element {
            id: Uuid::new_v4(),
            kind: ElementKind::Text,
            x: 80.0,
            y: 220.0,
            width: 150.0,
            height: 30.0,
            fill: "#1F2937".to_owned(),
            stroke: None,
            text: Some("Design Canvas".to_owned()),
        },
    ]
}

/// Elements for the read-only prototype preview: a light frame backdrop with
/// a button-like rectangle and a caption.
#[must_use]
pub fn prototype_elements() -> Vec<Element> {
    vec![
        Element {
            id: Uuid::new_v4(),
            kind: ElementKind::Rectangle,
            x: 40.0,
            y: 40.0,
            width: 420.0,
            height: 300.0,
            fill: "#E9ECEF".to_owned(),
            stroke: Some("#ADB5BD".to_owned()),
            text: None,
        },
        Element {
            id: Uuid::new_v4(),
            kind: ElementKind::Rectangle,
            x: 170.0,
            y: 230.0,
            width: 160.0,
            height: 48.0,
            fill: "#3B82F6".to_owned(),
            stroke: None,
            text: None,
        },
        Element {
            id: Uuid::new_v4(),
            kind: ElementKind::Text,
            x: 150.0,
            y: 100.0,
            width: 200.0,
            height: 40.0,
            fill: "#1F2937".to_owned(),
            stroke: None,
            text: Some("Welcome Screen".to_owned()),
        },
    ]
}
