use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::session::{CheckKind, Reaction, Session, SessionPhase, Transition};
use super::storage::{BrowserTokenStore, TokenStore};
use crate::shared::http::client::AppClient;
use crate::shared::http::{ApiClient, BrowserTransport, Transport};

/// Session state and mutators shared with the component tree.
///
/// Reads (`is_authenticated`, `is_admin`, `phase`) are tracked, so closures
/// calling them re-run on every transition. Mutators finish the follow-up
/// checks their transition asks for before returning.
pub struct SessionContext<T = BrowserTransport, S = BrowserTokenStore> {
    session: RwSignal<Session<S>, LocalStorage>,
    client: StoredValue<ApiClient<T, S>, LocalStorage>,
}

impl<T, S> Clone for SessionContext<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S> Copy for SessionContext<T, S> {}

impl SessionContext {
    pub fn new() -> Self {
        Self::with_client(AppClient::browser(), BrowserTokenStore)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> SessionContext<T, S>
where
    T: Transport + Clone + 'static,
    S: TokenStore + Clone + 'static,
{
    /// `store` must be the same slot `client` reads its bearer token from.
    pub fn with_client(client: ApiClient<T, S>, store: S) -> Self {
        Self {
            session: RwSignal::new_local(Session::init(store)),
            client: StoredValue::new_local(client),
        }
    }

    pub fn client(&self) -> ApiClient<T, S> {
        self.client.get_value()
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.with(|s| s.phase())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn is_admin(&self) -> bool {
        self.session.with(|s| s.is_admin())
    }

    /// Re-derive authentication from the stored token, no network call.
    pub async fn refresh_auth_status(&self) {
        if let Some(transition) = self.session.try_update(|s| s.refresh_from_store()) {
            self.follow_up(transition).await;
        }
    }

    pub async fn login(&self, token: &str) {
        if let Some(transition) = self.session.try_update(|s| s.login(token)) {
            self.follow_up(transition).await;
        }
    }

    /// Best-effort server logout, then local logout regardless of the reply.
    pub async fn logout(&self) {
        let client = self.client();
        if let Err(e) = api::logout(&client).await {
            log::warn!("server logout failed: {}", e);
        }
        self.session.try_update(|s| s.logout());
    }

    pub async fn check_auth_status(&self) {
        if let Some(transition) = self.run_check(CheckKind::Auth).await {
            self.follow_up(transition).await;
        }
    }

    pub async fn check_admin_status(&self) {
        self.run_check(CheckKind::Admin).await;
    }

    pub fn dispose(&self) {
        self.session.try_update_untracked(|s| s.dispose());
    }

    async fn run_check(&self, kind: CheckKind) -> Option<Transition> {
        let ticket = self.session.try_update_untracked(|s| s.begin_check(kind))?;
        let client = self.client();
        let outcome = api::check_status(&client, kind).await;
        self.session
            .try_update(|s| s.complete_check(ticket, outcome))
            .flatten()
    }

    async fn follow_up(&self, transition: Transition) {
        match transition.reaction() {
            Some(Reaction::CheckAdmin) => self.check_admin_status().await,
            None => {}
        }
    }
}

/// Owns the session for its subtree. Disposed when the provider unmounts.
///
/// The stored token is re-read on start and whenever another tab changes
/// `localStorage`.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = SessionContext::new();
    provide_context(ctx);
    spawn_local(async move { ctx.refresh_auth_status().await });

    let storage_listener = window_event_listener(leptos::ev::storage, move |_| {
        spawn_local(async move { ctx.refresh_auth_status().await });
    });
    on_cleanup(move || {
        storage_listener.remove();
        ctx.dispose();
    });

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::MockTransport;
    use crate::system::auth::storage::MemoryTokenStore;
    use futures::executor::block_on;

    type TestContext = SessionContext<MockTransport, MemoryTokenStore>;

    fn setup(store: MemoryTokenStore) -> (Owner, TestContext, MockTransport) {
        let owner = Owner::new();
        owner.set();
        let transport = MockTransport::new();
        let client = ApiClient::new("", transport.clone(), store.clone());
        (owner, SessionContext::with_client(client, store), transport)
    }

    fn urls(transport: &MockTransport) -> Vec<String> {
        transport.sent().into_iter().map(|r| r.url).collect()
    }

    #[test]
    fn test_logout_clears_local_state_when_server_unreachable() {
        let store = MemoryTokenStore::new();
        let (_owner, ctx, transport) = setup(store.clone());
        transport.reply(200, "");
        block_on(ctx.login("tok"));
        assert!(ctx.is_admin());

        transport.fail("offline");
        block_on(ctx.logout());

        assert!(store.load().is_none());
        assert!(!ctx.is_authenticated());
        assert!(!ctx.is_admin());
        let last = transport.last().unwrap();
        assert_eq!(last.url, "/v1/logout");
        assert_eq!(last.header("Authorization"), Some("Bearer tok"));
    }

    #[test]
    fn test_logout_clears_local_state_when_server_refuses() {
        let store = MemoryTokenStore::with_token("tok");
        let (_owner, ctx, transport) = setup(store.clone());
        transport.reply(500, "");
        block_on(ctx.logout());
        assert!(store.load().is_none());
        assert_eq!(ctx.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn test_login_runs_admin_check() {
        let (_owner, ctx, transport) = setup(MemoryTokenStore::new());
        transport.reply(200, "");

        block_on(ctx.login("tok"));

        assert_eq!(ctx.phase(), SessionPhase::Admin);
        assert_eq!(urls(&transport), vec!["/v1/admin/auth/check"]);
    }

    #[test]
    fn test_login_with_admin_refused_stays_authenticated() {
        let (_owner, ctx, transport) = setup(MemoryTokenStore::new());
        transport.reply(403, "");
        block_on(ctx.login("tok"));
        assert_eq!(ctx.phase(), SessionPhase::Authenticated);
    }

    #[test]
    fn test_blank_login_sends_nothing() {
        let (_owner, ctx, transport) = setup(MemoryTokenStore::new());
        block_on(ctx.login(""));
        assert_eq!(ctx.phase(), SessionPhase::Anonymous);
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn test_start_with_stored_token_checks_admin() {
        let (_owner, ctx, transport) = setup(MemoryTokenStore::with_token("stored"));
        assert!(ctx.is_authenticated());
        transport.reply(204, "");

        block_on(ctx.refresh_auth_status());

        assert!(ctx.is_admin());
        assert_eq!(urls(&transport), vec!["/v1/admin/auth/check"]);
    }

    #[test]
    fn test_start_without_token_stays_offline() {
        let (_owner, ctx, transport) = setup(MemoryTokenStore::new());
        block_on(ctx.refresh_auth_status());
        assert_eq!(ctx.phase(), SessionPhase::Anonymous);
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn test_refresh_sees_token_removed_by_another_tab() {
        let store = MemoryTokenStore::new();
        let (_owner, ctx, transport) = setup(store.clone());
        transport.reply(200, "");
        block_on(ctx.login("tok"));
        assert!(ctx.is_admin());

        store.clear();
        block_on(ctx.refresh_auth_status());

        assert_eq!(ctx.phase(), SessionPhase::Anonymous);
        assert_eq!(transport.sent().len(), 1);
    }

    #[test]
    fn test_auth_check_failure_keeps_stored_token() {
        let store = MemoryTokenStore::with_token("tok");
        let (_owner, ctx, transport) = setup(store.clone());
        transport.reply(500, "");

        block_on(ctx.check_auth_status());

        assert!(!ctx.is_authenticated());
        assert_eq!(store.load().as_deref(), Some("tok"));
        assert_eq!(urls(&transport), vec!["/v1/auth/check"]);
    }

    #[test]
    fn test_auth_check_revival_rechecks_admin() {
        let (_owner, ctx, transport) = setup(MemoryTokenStore::with_token("tok"));
        transport.reply(401, "").reply(200, "").reply(200, "");

        block_on(ctx.check_auth_status());
        assert_eq!(ctx.phase(), SessionPhase::Anonymous);

        block_on(ctx.check_auth_status());
        assert_eq!(ctx.phase(), SessionPhase::Admin);
        assert_eq!(
            urls(&transport),
            vec!["/v1/auth/check", "/v1/auth/check", "/v1/admin/auth/check"]
        );
    }

    #[test]
    fn test_disposed_context_ignores_check_replies() {
        let (_owner, ctx, transport) = setup(MemoryTokenStore::with_token("tok"));
        transport.reply(200, "");
        ctx.dispose();
        block_on(ctx.check_admin_status());
        assert!(!ctx.is_admin());
    }
}
