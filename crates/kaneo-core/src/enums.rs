//! Enum types for the kaneo domain.
//!
//! The API treats statuses, priorities and resource types as free-form
//! strings. Each enum here has:
//! - Custom Serialize (as the wire string)
//! - Custom Deserialize (known variants + a catch-all `Custom(String)`)
//! - `as_str()`, `is_builtin()`, `Display` impl

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// Macro: defines an enum with known string variants + a Custom(String) fallback.
// ---------------------------------------------------------------------------
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident,
        variants: [
            $( ($variant:ident, $str:expr) ),+ $(,)?
        ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
            /// Any value the API sends that is not one of the known variants.
            Custom(String),
        }

        impl $name {
            /// Every built-in variant, in declaration order.
            pub const BUILTIN: &'static [$name] = &[ $( Self::$variant, )+ ];

            /// Returns the wire representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $str, )+
                    Self::Custom(s) => s.as_str(),
                }
            }

            /// Returns `true` if this is a built-in (non-custom) variant.
            pub fn is_builtin(&self) -> bool {
                !matches!(self, Self::Custom(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from(s))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $str => Self::$variant, )+
                    other => Self::Custom(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                // Check known variants first to avoid allocation in common case.
                match s.as_str() {
                    $( $str => Self::$variant, )+
                    _ => Self::Custom(s),
                }
            }
        }
    };
}

// ===========================================================================
// Status
// ===========================================================================

define_enum! {
    /// Workflow column a task sits in.
    ///
    /// Projects may define their own columns, so any identifier is accepted.
    Status, default = ToDo,
    variants: [
        (Backlog, "backlog"),
        (ToDo, "to-do"),
        (InProgress, "in-progress"),
        (InReview, "in-review"),
        (Done, "done"),
    ]
}

// ===========================================================================
// Priority
// ===========================================================================

define_enum! {
    /// Task priority. Absent or null priorities resolve to `NoPriority`.
    Priority, default = NoPriority,
    variants: [
        (NoPriority, "no-priority"),
        (Low, "low"),
        (Medium, "medium"),
        (High, "high"),
        (Urgent, "urgent"),
    ]
}

impl Priority {
    /// Sort rank: lower ranks come first.
    ///
    /// urgent < high < medium < low < no-priority < anything unrecognized.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Urgent => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
            Self::NoPriority => 4,
            Self::Custom(_) => 5,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Self::NoPriority => "No priority",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
            Self::Custom(s) => s.as_str(),
        }
    }
}

/// Deserializes a priority, mapping `null` and `""` to the default.
pub(crate) fn priority_or_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Priority, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        None | Some("") => Priority::default(),
        Some(s) => Priority::from(s),
    })
}

// ===========================================================================
// ResourceType
// ===========================================================================

define_enum! {
    /// Kind of resource a notification refers to.
    ResourceType, default = Task,
    variants: [
        (Task, "task"),
        (Project, "project"),
        (Organization, "organization"),
        (Workspace, "workspace"),
    ]
}

// ===========================================================================
// SortMode
// ===========================================================================

/// Ordering applied to tasks inside a column or a flat list.
///
/// Chosen once per session from configuration or a command-line override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Priority,
    DueDate,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::DueDate => "due-date",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(Self::Priority),
            "due-date" | "due_date" | "duedate" => Ok(Self::DueDate),
            other => Err(format!(
                "unknown sort mode '{other}' (expected 'priority' or 'due-date')"
            )),
        }
    }
}
