//! Categories Data

use crate::domain::categories::records::CategoryUuid;

/// Longest category name accepted.
pub const MAX_CATEGORY_NAME_CHARS: usize = 150;

/// New Category Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: String,
}

impl NewCategory {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let chars = self.name.trim().chars().count();

        (1..=MAX_CATEGORY_NAME_CHARS).contains(&chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> NewCategory {
        NewCategory {
            uuid: CategoryUuid::new(),
            name: name.to_string(),
        }
    }

    #[test]
    fn blank_names_are_invalid() {
        assert!(!category("").is_valid());
        assert!(!category("   ").is_valid());
    }

    #[test]
    fn names_are_limited_to_150_characters() {
        assert!(category(&"a".repeat(150)).is_valid());
        assert!(!category(&"a".repeat(151)).is_valid());
    }
}
