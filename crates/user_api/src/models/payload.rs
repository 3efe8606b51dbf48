use serde::{Deserialize, Serialize};

use super::{Perfil, Status};

/// Body of `POST /api/usuarios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub nome: String,
    pub login: String,
    pub senha: String,
    pub perfil: Perfil,
    pub telefone: String,
    pub cargo: String,
    pub departamento: String,
    pub status: Status,
}

/// Body of `PUT /api/usuarios/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserPayload {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cargo: String,
    pub departamento: String,
    pub perfil: Perfil,
    pub ativo: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
