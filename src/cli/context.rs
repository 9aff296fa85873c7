//! Per-invocation wiring: local store, session context and API client.

use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::SessionContext;
use crate::session::store::SqliteStore;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub struct AppContext {
    pub store: Arc<SqliteStore>,
    pub session: Arc<SessionContext>,
    pub api: ApiClient,
}

impl AppContext {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        if let Some(parent) = Path::new(&cfg.database).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let store = Arc::new(SqliteStore::open(&cfg.database)?);
        let session = Arc::new(SessionContext::new(store.clone()));
        let api = ApiClient::from_config(cfg, session.clone())?;

        if session.take_first_launch()? {
            info("Welcome to hrdesk! Sign in with `hrdesk login --email you@company.com`.");
        }

        Ok(Self {
            store,
            session,
            api,
        })
    }
}
