//! File-system node types, id generation, and the fixed seed tree.

use serde::{Deserialize, Serialize};

/// Id of the single root folder. The root has no parent, is never deletable,
/// and is never renameable.
pub const ROOT_NODE_ID: &str = "root";

/// Default display size stamped on newly created files.
pub const DEFAULT_FILE_SIZE: &str = "0 KB";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Node kind. Immutable after creation.
pub enum NodeKind {
    /// A folder; may have children.
    Folder,
    /// A file; carries tags and display metadata.
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One file or folder entry in the virtual file-system tree.
///
/// Serializes to the legacy wire shape (`type`, `parentId`, optional
/// `tags`/`size`/`modified`) so snapshots written before envelope
/// versioning keep loading.
pub struct FileNode {
    /// Unique id, fixed at creation and never reused.
    pub id: String,
    /// Display name; non-empty after trimming.
    pub name: String,
    /// File or folder.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Parent folder id; `None` only for the root node.
    pub parent_id: Option<String>,
    /// Short label strings, files only. Display order is stable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Display size string, files only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Display modified-date string, files only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

impl FileNode {
    /// Creates a folder node.
    pub fn folder(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Folder,
            parent_id: parent_id.map(str::to_string),
            tags: Vec::new(),
            size: None,
            modified: None,
        }
    }

    /// Creates a file node with display metadata.
    pub fn file(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: &str,
        tags: &[&str],
        size: &str,
        modified: &str,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::File,
            parent_id: Some(parent_id.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            size: Some(size.to_string()),
            modified: Some(modified.to_string()),
        }
    }

    /// Returns `true` for folder nodes.
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Returns `true` for file nodes.
    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }
}

/// Generates a fresh opaque node id.
pub fn generate_node_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Returns today's date in the short display format used by file metadata
/// ("Feb 12").
pub fn modified_today() -> String {
    chrono::Local::now().format("%b %-d").to_string()
}

/// Fixed seed tree used when no valid snapshot exists: the root, six
/// top-level folders, and ten tagged sample files.
pub fn seed_nodes() -> Vec<FileNode> {
    vec![
        FileNode::folder(ROOT_NODE_ID, "Root", None),
        FileNode::folder("documents", "Documents", Some(ROOT_NODE_ID)),
        FileNode::folder("downloads", "Downloads", Some(ROOT_NODE_ID)),
        FileNode::folder("projects", "Projects", Some(ROOT_NODE_ID)),
        FileNode::folder("invoices", "Invoices", Some(ROOT_NODE_ID)),
        FileNode::folder("contracts", "Contracts", Some(ROOT_NODE_ID)),
        FileNode::folder("personal", "Personal", Some(ROOT_NODE_ID)),
        FileNode::file(
            "f1",
            "contract-nda-acme.pdf",
            "documents",
            &["NDA", "Legal"],
            "2.4 MB",
            "Feb 12",
        ),
        FileNode::file(
            "f2",
            "stripe-invoice-dec.pdf",
            "invoices",
            &["Invoice", "Stripe"],
            "148 KB",
            "Dec 18",
        ),
        FileNode::file(
            "f3",
            "project-brief-v3.docx",
            "projects",
            &["Brief", "Project"],
            "890 KB",
            "Jan 28",
        ),
        FileNode::file(
            "f4",
            "q4-financial-report.xlsx",
            "documents",
            &["Finance", "Q4"],
            "3.1 MB",
            "Jan 5",
        ),
        FileNode::file(
            "f5",
            "design-system-v2.fig",
            "projects",
            &["Design"],
            "12 MB",
            "Feb 8",
        ),
        FileNode::file(
            "f6",
            "meeting-notes-jan.md",
            "documents",
            &["Notes", "Meeting"],
            "24 KB",
            "Jan 30",
        ),
        FileNode::file(
            "f7",
            "family-photo.jpg",
            "personal",
            &["Photo"],
            "4.2 MB",
            "Mar 12",
        ),
        FileNode::file(
            "f8",
            "vacation-2025.png",
            "downloads",
            &["Photo"],
            "6.8 MB",
            "Jul 20",
        ),
        FileNode::file(
            "f9",
            "resume-2026.pdf",
            "personal",
            &["Resume"],
            "320 KB",
            "Feb 1",
        ),
        FileNode::file(
            "f10",
            "app-installer.dmg",
            "downloads",
            &["Installer"],
            "95 MB",
            "Feb 22",
        ),
    ]
}
