pub const UNAUTHENTICATED: &str = "Usuário não autenticado. Faça login novamente.";

pub const CREATE_REJECTED: &str = "Erro ao criar usuário.";
pub const CREATE_FAILED: &str = "Erro ao criar usuário";

pub const UPDATE_REJECTED: &str = "Erro ao atualizar usuário.";
pub const UPDATE_FAILED: &str = "Erro de conexão ao atualizar usuário";

pub const NAME_REQUIRED: &str = "Nome é obrigatório";
pub const EMAIL_REQUIRED: &str = "Email é obrigatório";
pub const EMAIL_INVALID: &str = "Email inválido";
pub const PHONE_REQUIRED: &str = "Telefone é obrigatório";
pub const JOB_TITLE_REQUIRED: &str = "Cargo é obrigatório";
pub const DEPARTMENT_REQUIRED: &str = "Departamento é obrigatório";
pub const PROFILE_REQUIRED: &str = "Perfil é obrigatório";
pub const STATUS_REQUIRED: &str = "Status é obrigatório";
pub const PASSWORD_REQUIRED: &str = "Senha é obrigatória";
pub const PASSWORD_TOO_SHORT: &str = "A senha deve ter pelo menos 6 caracteres";
pub const PASSWORD_MISMATCH: &str = "As senhas não coincidem";
pub const CONFIRMATION_REQUIRED: &str = "Confirmação de senha é obrigatória";
