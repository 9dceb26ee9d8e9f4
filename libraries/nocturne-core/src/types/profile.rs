/// Profile domain type
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two fixed identities the app personalizes content for.
///
/// Chosen once per session on the landing screen and cleared by
/// navigating back. The wire representation matches the display name
/// stored in the `target_profile` column of the content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    /// The right-zone identity
    Joha,

    /// The left-zone identity
    Princesa,
}

impl Profile {
    /// Display name as shown on the landing screen (and stored remotely)
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Joha => "Joha",
            Self::Princesa => "Princesa",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Profile::Joha.to_string(), "Joha");
        assert_eq!(Profile::Princesa.to_string(), "Princesa");
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Profile::Princesa).unwrap();
        assert_eq!(json, "\"Princesa\"");

        let profile: Profile = serde_json::from_str("\"Joha\"").unwrap();
        assert_eq!(profile, Profile::Joha);
    }
}
