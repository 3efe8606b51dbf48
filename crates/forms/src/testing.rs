use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use user_api::{
    errors::ApiError,
    models::{
        payload::{CreateUserPayload, UpdateUserPayload},
        user::User,
    },
    TokenProvider, UserApi,
};

use crate::draft::{CreateDraft, EditDraft};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Create(String, CreateUserPayload),
    Update(String, u64, UpdateUserPayload),
    List,
    Get(u64),
}

/// Records every request and answers each with the same canned result.
#[derive(Debug)]
pub(crate) struct MockApi {
    response: std::result::Result<User, ApiError>,
    calls: Mutex<Vec<Call>>,
    hang: bool,
}

impl MockApi {
    pub fn ok(user: User) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(user),
            calls: Mutex::new(Vec::new()),
            hang: false,
        })
    }

    /// Records writes and never answers them.
    pub fn hanging() -> Arc<Self> {
        Arc::new(Self {
            response: Ok(User::default()),
            calls: Mutex::new(Vec::new()),
            hang: true,
        })
    }

    pub fn err(err: ApiError) -> Arc<Self> {
        Arc::new(Self {
            response: Err(err),
            calls: Mutex::new(Vec::new()),
            hang: false,
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);

        if self.hang {
            std::future::pending::<()>().await;
        }
    }
}

#[async_trait]
impl UserApi for MockApi {
    async fn create_user(&self, token: &str, payload: &CreateUserPayload) -> user_api::Result<()> {
        self.record(Call::Create(token.to_string(), payload.clone())).await;
        self.response.clone().map(|_| ())
    }

    async fn update_user(
        &self,
        token: &str,
        id: u64,
        payload: &UpdateUserPayload,
    ) -> user_api::Result<User> {
        self.record(Call::Update(token.to_string(), id, payload.clone())).await;
        self.response.clone()
    }

    async fn list_users(&self, _token: &str) -> user_api::Result<Vec<User>> {
        self.record(Call::List).await;
        self.response.clone().map(|user| vec![user])
    }

    async fn get_user(&self, _token: &str, id: u64) -> user_api::Result<User> {
        self.record(Call::Get(id)).await;
        self.response.clone()
    }
}

pub(crate) struct StaticToken(pub Option<&'static str>);

impl StaticToken {
    pub fn some() -> Arc<Self> {
        Arc::new(Self(Some("token-123")))
    }

    pub fn none() -> Arc<Self> {
        Arc::new(Self(None))
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.map(String::from)
    }
}

pub(crate) fn valid_create_draft() -> CreateDraft {
    CreateDraft {
        name: "Ana Souza".into(),
        email: "ana@x.io".into(),
        phone: "(21) 99999-9999".into(),
        job_title: "Dev".into(),
        department: "TI".into(),
        password: "secret1".into(),
        password_confirmation: "secret1".into(),
        ..Default::default()
    }
}

pub(crate) fn stored_user() -> User {
    User {
        id: 42,
        nome: "Bia Lima".into(),
        login: "bia".into(),
        email: "bia@x.io".into(),
        telefone: Some("21 3333".into()),
        cargo: Some("Gerente".into()),
        departamento: None,
        perfil: Some("ADMINISTRADOR_GESTOR".into()),
        ativo: false,
        avatar: Some("https://cdn.example.com/bia.png".into()),
    }
}

pub(crate) fn valid_edit_draft() -> EditDraft {
    EditDraft::from(&stored_user())
}
