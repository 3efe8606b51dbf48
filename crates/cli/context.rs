use std::sync::Arc;

use color_eyre::Result;
use config::Config;
use user_api::{Client, TokenProvider, UserApi};

#[derive(Debug, Clone)]
pub struct GlobalContext {
    pub config: Config,
    pub dry_run: bool,
    pub client: Client,
}

impl GlobalContext {
    pub fn new(config: Config, dry_run: bool) -> Result<Self> {
        let client = Client::new(&config.base_url())?;

        Ok(Self {
            config,
            dry_run,
            client,
        })
    }

    pub fn api(&self) -> Arc<dyn UserApi> {
        Arc::new(self.client.clone())
    }

    pub fn tokens(&self) -> Arc<dyn TokenProvider> {
        Arc::new(ConfigTokens(self.config.clone()))
    }
}

/// Bearer token source backed by the env and the config file.
#[derive(Debug, Clone)]
pub struct ConfigTokens(pub Config);

impl TokenProvider for ConfigTokens {
    fn token(&self) -> Option<String> {
        self.0.token()
    }
}
