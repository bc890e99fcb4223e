use serde::Deserialize;

use super::user::initial_of;

#[derive(Debug, Clone, Deserialize)]
pub struct BoardMember {
    pub id: String,
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl BoardMember {
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }
}
