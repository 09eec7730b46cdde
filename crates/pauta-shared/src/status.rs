//! The post review workflow.
//!
//! The workflow is deliberately permissive: any status may be set to any
//! other status, including moving a published post back to draft.  The
//! only validation is membership in the enumeration, which the closed
//! enum enforces at compile time and [`PostStatus::from_str`] enforces at
//! the string boundary.

use serde::{Deserialize, Serialize};

/// Position of a post in the review/publish workflow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Creating,
    Approval,
    Adjust,
    Approved,
    Published,
}

impl PostStatus {
    /// All statuses in board column order.
    pub const ALL: [PostStatus; 6] = [
        PostStatus::Draft,
        PostStatus::Creating,
        PostStatus::Approval,
        PostStatus::Adjust,
        PostStatus::Approved,
        PostStatus::Published,
    ];

    /// Display label shown in the UI (pt-BR).
    pub fn label(self) -> &'static str {
        match self {
            PostStatus::Draft => "Rascunho",
            PostStatus::Creating => "Em Criação",
            PostStatus::Approval => "Em Aprovação",
            PostStatus::Adjust => "Precisa de Ajuste",
            PostStatus::Approved => "Aprovado",
            PostStatus::Published => "Publicado",
        }
    }

    /// Presentation class tokens for the status badge.
    pub fn color_class(self) -> &'static str {
        match self {
            PostStatus::Draft => "bg-slate-100 text-slate-600 border-slate-200",
            PostStatus::Creating => "bg-blue-50 text-blue-600 border-blue-200",
            PostStatus::Approval => "bg-amber-50 text-amber-600 border-amber-200",
            PostStatus::Adjust => "bg-red-50 text-red-600 border-red-200",
            PostStatus::Approved => "bg-emerald-50 text-emerald-600 border-emerald-200",
            PostStatus::Published => "bg-indigo-50 text-indigo-600 border-indigo-200",
        }
    }

    /// Wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Creating => "creating",
            PostStatus::Approval => "approval",
            PostStatus::Adjust => "adjust",
            PostStatus::Approved => "approved",
            PostStatus::Published => "published",
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "creating" => Ok(PostStatus::Creating),
            "approval" => Ok(PostStatus::Approval),
            "adjust" => Ok(PostStatus::Adjust),
            "approved" => Ok(PostStatus::Approved),
            "published" => Ok(PostStatus::Published),
            other => Err(crate::error::ValidationError::UnknownStatus(
                other.to_string(),
            )),
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
