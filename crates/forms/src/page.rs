use std::sync::{Arc, Mutex, PoisonError};

use postage::watch;
use user_api::{models::user::User, TokenProvider, UserApi};

use crate::{create::CreateUserDialog, edit::EditUserDialog};

/// "Data changed" notification for the user list. The published value is a
/// counter bumped on every change.
#[derive(Clone)]
pub struct RefreshSignal {
    sender: Arc<Mutex<watch::Sender<u64>>>,
    receiver: watch::Receiver<u64>,
}

impl std::fmt::Debug for RefreshSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshSignal")
            .field("key", &self.current())
            .finish()
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        let (sender, receiver) = watch::channel();

        Self {
            sender: Arc::new(Mutex::new(sender)),
            receiver,
        }
    }
}

impl RefreshSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps the key and wakes every subscriber.
    pub fn notify(&self) -> u64 {
        let mut sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        let mut key = sender.borrow_mut();
        *key += 1;
        *key
    }

    pub fn current(&self) -> u64 {
        *self.receiver.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.receiver.clone()
    }
}

/// Users screen: owns the rows on display and the refresh signal the list
/// re-fetches on.
#[derive(Debug, Default)]
pub struct UsersPage {
    refresh: RefreshSignal,
    users: Vec<User>,
}

impl UsersPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh_key(&self) -> u64 {
        self.refresh.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.refresh.subscribe()
    }

    pub fn on_user_created(&self) -> u64 {
        let key = self.refresh.notify();
        tracing::debug!(key, "user list invalidated");

        key
    }

    /// Create dialog wired to bump this page's refresh key on success.
    pub fn create_dialog(
        &self,
        api: Arc<dyn UserApi>,
        tokens: Arc<dyn TokenProvider>,
    ) -> CreateUserDialog {
        let refresh = self.refresh.clone();

        CreateUserDialog::new(api, tokens).with_on_created(move || {
            refresh.notify();
        })
    }

    pub fn edit_dialog(&self, api: Arc<dyn UserApi>, tokens: Arc<dyn TokenProvider>) -> EditUserDialog {
        EditUserDialog::new(api, tokens)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    pub fn find(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Swaps the row for `user.id` in place. Returns `false` when the row is
    /// not on this page.
    pub fn on_user_updated(&mut self, user: User) -> bool {
        match self.users.iter_mut().find(|row| row.id == user.id) {
            Some(row) => {
                *row = user;
                true
            }
            None => false,
        }
    }
}
