use serde::{Deserialize, Serialize};

pub mod payload;
pub mod user;

/// Permission tier assigned to a user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Perfil {
    #[default]
    UsuarioPadrao,
    AdministradorGestor,
}

impl Perfil {
    pub fn label(&self) -> &'static str {
        match self {
            Self::UsuarioPadrao => "Usuário Padrão",
            Self::AdministradorGestor => "Administrador",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    #[default]
    Ativo,
    Inativo,
}

impl From<bool> for Status {
    fn from(active: bool) -> Self {
        if active {
            Self::Ativo
        } else {
            Self::Inativo
        }
    }
}

impl Status {
    pub fn is_active(&self) -> bool {
        *self == Self::Ativo
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ativo => "Ativo",
            Self::Inativo => "Inativo",
        }
    }
}
