//! Explicit application wiring.
//!
//! Everything a command handler can touch hangs off [`AppContext`] — no
//! module-level state, no lazily initialized singletons. Construction is
//! synchronous and never touches the network.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use shopdesk_client::ApiClient;
use shopdesk_config::ShopdeskConfig;
use shopdesk_services::auth::AuthService;
use shopdesk_services::categories::CategoriesService;
use shopdesk_services::customers::CustomersService;
use shopdesk_services::feedback::FeedbackService;
use shopdesk_services::orders::OrdersService;
use shopdesk_services::products::ProductsService;
use shopdesk_services::session::SessionStore;
use shopdesk_services::shops::ShopsService;
use shopdesk_services::units::UnitsService;
use shopdesk_store::{CredentialStore, TenantContext};
use tokio::sync::watch;

pub struct AppContext {
    pub store: Arc<CredentialStore>,
    pub tenant: TenantContext,
    pub session: SessionStore,
    pub shops: ShopsService,
    pub products: ProductsService,
    pub orders: OrdersService,
    pub customers: CustomersService,
    pub categories: CategoriesService,
    pub units: UnitsService,
    pub feedback: FeedbackService,
    unauthorized: watch::Receiver<u64>,
}

impl AppContext {
    /// Wire every layer from config. `profile_override` replaces the
    /// default `~/.shopdesk` root (used by `--profile-dir` and tests).
    ///
    /// # Errors
    ///
    /// Fails if the home directory cannot be resolved (and no override was
    /// given) or the HTTP client cannot be built.
    pub fn init(config: &ShopdeskConfig, profile_override: Option<&str>) -> anyhow::Result<Self> {
        let root = match profile_override {
            Some(path) => PathBuf::from(path),
            None => shopdesk_store::default_profile_dir()?,
        };

        let store = Arc::new(CredentialStore::new(&root));
        let tenant = TenantContext::new(&root, config.tenant.default_shop_id.clone());
        let client = Arc::new(
            ApiClient::new(config, Arc::clone(&store), tenant.clone())
                .context("failed to build the HTTP client")?,
        );
        let unauthorized = client.subscribe_unauthorized();
        let auth = AuthService::new(Arc::clone(&client));
        let session = SessionStore::new(Arc::clone(&store), auth);

        Ok(Self {
            store,
            tenant,
            session,
            shops: ShopsService::new(Arc::clone(&client)),
            products: ProductsService::new(Arc::clone(&client)),
            orders: OrdersService::new(Arc::clone(&client)),
            customers: CustomersService::new(Arc::clone(&client)),
            categories: CategoriesService::new(Arc::clone(&client)),
            units: UnitsService::new(Arc::clone(&client)),
            feedback: FeedbackService::new(client),
            unauthorized,
        })
    }

    /// True when a request during this invocation got a 401 back and the
    /// client wiped the stored credentials.
    #[must_use]
    pub fn session_was_rejected(&self) -> bool {
        self.unauthorized.has_changed().unwrap_or(false)
    }
}
