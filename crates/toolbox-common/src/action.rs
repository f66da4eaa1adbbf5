use serde::{Serialize, Serializer};
use std::fmt;

/// Opaque handle naming an action in the host's action framework.
///
/// Always non-empty. Resolving the name to a handler is the host's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionName(String);

impl ActionName {
    /// Returns `None` for an empty name.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ActionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ActionName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ActionName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for ActionName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_rejected() {
        assert!(ActionName::new("").is_none());
    }

    #[test]
    fn name_round_trips_as_str() {
        let name = ActionName::new("CreateClass").unwrap();
        assert_eq!(name.as_str(), "CreateClass");
        assert_eq!(name.as_bytes(), b"CreateClass");
        assert_eq!(name.to_string(), "CreateClass");
        assert_eq!(name, "CreateClass");
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = ActionName::new("Pointer").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Pointer\"");
    }
}
