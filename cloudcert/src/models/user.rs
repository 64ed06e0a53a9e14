use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }
}

/// One of the two fixed mock identities. Selecting a role at login
/// substitutes the whole record; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub points_earned: u32,
    pub points_target: u32,
    pub storage_used_gb: f64,
    pub storage_limit_gb: f64,
    pub avatar: String,
}

impl User {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect::<String>()
            .to_uppercase()
    }

    pub fn storage_used_percent(&self) -> f64 {
        if self.storage_limit_gb <= 0.0 {
            return 0.0;
        }
        self.storage_used_gb / self.storage_limit_gb * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn initials_come_from_the_display_name() {
        assert_eq!(seed::user_for(Role::Student).initials(), "AJ");
        assert_eq!(seed::user_for(Role::Teacher).initials(), "DSM");
    }

    #[test]
    fn teacher_storage_gauge_does_not_divide_by_zero() {
        let teacher = seed::user_for(Role::Teacher);
        assert_eq!(teacher.storage_used_percent(), 0.0);
    }
}
