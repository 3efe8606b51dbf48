use derive_setters::Setters;
use serde::{Deserialize, Serialize};

use super::Perfil;

/// User record as returned by the API. The server copy is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize, Setters)]
pub struct User {
    pub id: u64,
    pub nome: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default)]
    pub departamento: Option<String>,
    #[serde(default)]
    pub perfil: Option<String>,
    #[serde(default)]
    pub ativo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Known profile of the record. Unknown or missing tiers are `None`.
    pub fn known_perfil(&self) -> Option<Perfil> {
        self.perfil.as_deref().and_then(|p| p.parse().ok())
    }
}
