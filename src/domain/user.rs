use serde::Deserialize;

labelled_enum! {
    pub enum UserRole {
        Resident => ("RESIDENT", "resident"),
        Officer => ("OFFICER", "officer"),
    }
}

impl UserRole {
    pub fn toggled(self) -> Self {
        match self {
            UserRole::Resident => UserRole::Officer,
            UserRole::Officer => UserRole::Resident,
        }
    }
}

/// The single session user. There is no login; the role can be flipped
/// from the sidebar for demo purposes.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub address: String,
}

impl User {
    pub fn is_officer(&self) -> bool {
        self.role == UserRole::Officer
    }

    /// First character of the name, used as the avatar placeholder.
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }
}

pub fn initial_of(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
