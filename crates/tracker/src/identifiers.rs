//! Newtype domain identifiers.
//!
//! Every concept with an identity is a distinct newtype wrapping a primitive,
//! so an [`IssueNumber`] can never be passed where a page number is expected
//! and an [`OwnerName`] can never be swapped with a [`RepositoryName`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers: tracker-assigned integers
// ---------------------------------------------------------------------------

/// An issue number, unique within its repository.
///
/// Assigned by the issue tracker when the issue is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IssueNumber(u64);

impl IssueNumber {
    /// Creates a new issue number from a raw integer.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifiers: UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single synchronisation run.
///
/// Generated fresh for every invocation and recorded on the root span so all
/// activity from one run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyncRunId(Uuid);

impl SyncRunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for SyncRunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifiers: String-backed (configuration / tracker names)
// ---------------------------------------------------------------------------

string_id! {
    /// A user or organization that owns repositories (e.g. `"acme"`).
    OwnerName
}

string_id! {
    /// A repository's short name, without its owner (e.g. `"widgets"`).
    RepositoryName
}

string_id! {
    /// The name of a label attached to issues (e.g. `"tracked"`).
    Label
}

string_id! {
    /// A user handle on the issue tracker, without a leading `@`.
    Login
}

string_id! {
    /// The exact title of the tracking issue.
    ///
    /// Used both to locate an existing tracking issue and to create a new one.
    IssueTitle
}

// ---------------------------------------------------------------------------

/// A fully qualified repository: owner plus short name.
///
/// Displays as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryId {
    owner: OwnerName,
    name: RepositoryName,
}

impl RepositoryId {
    /// Creates a repository identifier from its owner and short name.
    pub fn new(owner: OwnerName, name: RepositoryName) -> Self {
        Self { owner, name }
    }

    /// Parses an `owner/name` string.
    ///
    /// Returns `None` unless there is exactly one `/` with non-empty text on
    /// both sides.
    pub fn parse(value: &str) -> Option<Self> {
        let (owner, name) = value.split_once('/')?;
        if name.contains('/') {
            return None;
        }
        Some(Self::new(OwnerName::new(owner)?, RepositoryName::new(name)?))
    }

    /// Returns the owning user or organization.
    pub fn owner(&self) -> &OwnerName {
        &self.owner
    }

    /// Returns the repository's short name.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
#[path = "identifiers_tests.rs"]
mod tests;
