//! Job family shapes.
//!
//! A family arrives either as a flat list of role titles or already nested
//! into named sub-buckets. Grouping (in `fedip-taxonomy`) turns both into a
//! [`CanonicalFamily`].

use serde::{Deserialize, Serialize};

/// A job family as supplied by the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobFamily {
    /// Role titles still to be grouped by their parsed base.
    Flat(Vec<String>),
    /// Author-supplied sub-buckets, in the order they were given.
    Nested(Vec<(String, Vec<String>)>),
}

impl JobFamily {
    /// Number of role titles across all buckets, duplicates included.
    #[must_use]
    pub fn title_count(&self) -> usize {
        match self {
            Self::Flat(roles) => roles.len(),
            Self::Nested(buckets) => buckets.iter().map(|(_, roles)| roles.len()).sum(),
        }
    }

    #[must_use]
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }
}

/// One sub-bucket of a canonical family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubBucket {
    pub name: String,
    /// Role titles, de-duplicated and sorted by level rank then collation.
    pub roles: Vec<String>,
}

/// A job family normalised to sub-bucket → sorted role list.
///
/// Buckets are kept in collation order of their names; the ordering is
/// established by the grouper and never re-checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalFamily {
    pub buckets: Vec<SubBucket>,
}

impl CanonicalFamily {
    pub fn new(buckets: Vec<SubBucket>) -> Self {
        Self { buckets }
    }

    pub fn bucket_names(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.name.as_str()).collect()
    }

    pub fn bucket(&self, name: &str) -> Option<&SubBucket> {
        self.buckets.iter().find(|b| b.name == name)
    }

    /// Roles of a bucket; empty when the bucket does not exist.
    pub fn roles(&self, bucket: &str) -> &[String] {
        self.bucket(bucket)
            .map(|b| b.roles.as_slice())
            .unwrap_or_default()
    }

    /// The bucket name when the family has exactly one.
    pub fn sole_bucket(&self) -> Option<&str> {
        match self.buckets.as_slice() {
            [only] => Some(only.name.as_str()),
            _ => None,
        }
    }

    pub fn contains_bucket(&self, name: &str) -> bool {
        self.bucket(name).is_some()
    }

    pub fn contains_role(&self, bucket: &str, role: &str) -> bool {
        self.roles(bucket).iter().any(|r| r == role)
    }

    pub fn role_count(&self) -> usize {
        self.buckets.iter().map(|b| b.roles.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
