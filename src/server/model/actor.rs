//! The authenticated caller of a request.

/// Role of a user, derived from the name of their rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    Moderator,
    Redactor,
    Blocked,
}

impl Role {
    /// Maps a rank name onto a role. Ranks with other names act as plain users.
    pub fn from_rank_name(name: &str) -> Self {
        match name {
            "Admin" => Self::Admin,
            "Moderator" => Self::Moderator,
            "Redactor" => Self::Redactor,
            "Blocked" => Self::Blocked,
            _ => Self::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
            Self::Moderator => "Moderator",
            Self::Redactor => "Redactor",
            Self::Blocked => "Blocked",
        }
    }
}

/// Identity and role of the user performing an operation.
///
/// Passed explicitly into repositories and authorization predicates so neither
/// depends on the HTTP request type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: i32,
    pub role: Role,
}

impl Actor {
    pub fn new(id: i32, role: Role) -> Self {
        Self { id, role }
    }
}
