//! Session state machine.
//!
//! ```text
//!              login(token)                 admin check passes
//!  Anonymous ───────────────▶ Authenticated ───────────────────▶ Admin
//!      ▲                           ▲    ◀─────────────────────────┘
//!      │                           │        admin check fails
//!      └── logout() / auth check fails (from any phase)
//! ```
//!
//! [`Session::refresh_from_store`] re-derives authentication from the stored
//! token alone, which is how another tab's login or logout is picked up.
//!
//! The store behind `S` is the only place the token is persisted. A failed
//! status check demotes the session but leaves the stored token alone, so a
//! reload starts optimistic again.
//!
//! Status checks are two-phase: [`Session::begin_check`] hands out a ticket
//! before the request goes out and [`Session::complete_check`] applies the
//! outcome when it comes back. Tickets carry a per-kind sequence number and
//! the login generation; replies older than the newest applied reply of the
//! same kind, or issued before the latest login/logout, are dropped.

use crate::shared::http::{ApiError, ApiResponse};

use super::storage::TokenStore;

pub const AUTH_CHECK_ENDPOINT: &str = "/v1/auth/check";
pub const ADMIN_CHECK_ENDPOINT: &str = "/v1/admin/auth/check";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticated,
    Admin,
}

impl SessionPhase {
    pub fn is_authenticated(self) -> bool {
        !matches!(self, SessionPhase::Anonymous)
    }

    pub fn is_admin(self) -> bool {
        matches!(self, SessionPhase::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Auth,
    Admin,
}

impl CheckKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            CheckKind::Auth => AUTH_CHECK_ENDPOINT,
            CheckKind::Admin => ADMIN_CHECK_ENDPOINT,
        }
    }

    fn slot(self) -> usize {
        match self {
            CheckKind::Auth => 0,
            CheckKind::Admin => 1,
        }
    }
}

/// What a status check came back with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    /// Non-2xx status
    Rejected(u16),
    /// No response at all
    Unreachable,
}

impl CheckOutcome {
    pub fn from_result(result: &Result<ApiResponse, ApiError>) -> Self {
        match result {
            Ok(resp) if resp.ok() => CheckOutcome::Passed,
            Ok(resp) => CheckOutcome::Rejected(resp.status()),
            Err(_) => CheckOutcome::Unreachable,
        }
    }

    pub fn passed(self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }
}

/// How a failed auth check is folded into the session.
///
/// Only one policy exists: any rejection or network failure drops the session
/// to [`SessionPhase::Anonymous`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckFailurePolicy {
    #[default]
    TreatAsUnauthenticated,
}

/// Issued by [`Session::begin_check`], redeemed by [`Session::complete_check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket {
    pub kind: CheckKind,
    seq: u64,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Refresh,
    Login,
    Logout,
    AuthCheck,
    AdminCheck,
}

/// Follow-up work a transition asks the owner to schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    CheckAdmin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub event: SessionEvent,
    pub from: SessionPhase,
    pub to: SessionPhase,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// Admin status is re-checked after every refresh or login that leaves the
    /// session authenticated, and when an auth check revives a demoted session.
    pub fn reaction(&self) -> Option<Reaction> {
        match self.event {
            SessionEvent::Refresh | SessionEvent::Login if self.to.is_authenticated() => {
                Some(Reaction::CheckAdmin)
            }
            SessionEvent::AuthCheck
                if !self.from.is_authenticated() && self.to.is_authenticated() =>
            {
                Some(Reaction::CheckAdmin)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
    token: Option<String>,
    authenticated: bool,
    admin: bool,
    policy: CheckFailurePolicy,
    generation: u64,
    issued: [u64; 2],
    applied: [u64; 2],
    disposed: bool,
}

impl<S: TokenStore> Session<S> {
    /// Restore from the store. A stored token is trusted until a check says
    /// otherwise.
    pub fn init(store: S) -> Self {
        let token = store.load();
        let authenticated = token.is_some();
        log::debug!("session init: stored token present = {}", authenticated);
        Self {
            store,
            token,
            authenticated,
            admin: false,
            policy: CheckFailurePolicy::default(),
            generation: 0,
            issued: [0; 2],
            applied: [0; 2],
            disposed: false,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.authenticated, self.admin) {
            (true, true) => SessionPhase::Admin,
            (true, false) => SessionPhase::Authenticated,
            _ => SessionPhase::Anonymous,
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Persist `token` and become authenticated. Admin status starts unknown.
    ///
    /// A blank token is refused and leaves the session as it was.
    pub fn login(&mut self, token: &str) -> Transition {
        let from = self.phase();
        if self.disposed {
            log::warn!("login on a disposed session ignored");
            return self.transition(SessionEvent::Login, from);
        }
        if token.trim().is_empty() {
            log::warn!("login with an empty token ignored");
            return self.transition(SessionEvent::Login, from);
        }

        self.store.save(token);
        self.token = Some(token.to_string());
        self.authenticated = true;
        self.admin = false;
        self.generation += 1;
        let t = self.transition(SessionEvent::Login, from);
        log::info!("session {:?} -> {:?} (login)", t.from, t.to);
        t
    }

    /// Erase the stored token and drop every privilege.
    pub fn logout(&mut self) -> Transition {
        let from = self.phase();
        self.store.clear();
        self.token = None;
        self.authenticated = false;
        self.admin = false;
        self.generation += 1;
        let t = self.transition(SessionEvent::Logout, from);
        log::info!("session {:?} -> {:?} (logout)", t.from, t.to);
        t
    }

    /// Re-read the token from the store without asking the server.
    ///
    /// Authenticated iff a token is stored. Admin status survives only while
    /// the same token is still there. In-flight checks are invalidated.
    pub fn refresh_from_store(&mut self) -> Transition {
        let from = self.phase();
        if self.disposed {
            return self.transition(SessionEvent::Refresh, from);
        }

        let token = self.store.load();
        if token != self.token {
            self.admin = false;
        }
        self.authenticated = token.is_some();
        self.admin = self.admin && self.authenticated;
        self.token = token;
        self.generation += 1;
        let t = self.transition(SessionEvent::Refresh, from);
        if t.changed() {
            log::info!("session {:?} -> {:?} (refresh)", t.from, t.to);
        }
        t
    }

    pub fn begin_check(&mut self, kind: CheckKind) -> CheckTicket {
        let slot = kind.slot();
        self.issued[slot] += 1;
        CheckTicket {
            kind,
            seq: self.issued[slot],
            generation: self.generation,
        }
    }

    /// Apply a check result. Returns `None` when the reply is stale or the
    /// session has been disposed.
    pub fn complete_check(&mut self, ticket: CheckTicket, outcome: CheckOutcome) -> Option<Transition> {
        if self.disposed {
            return None;
        }
        let slot = ticket.kind.slot();
        if ticket.generation != self.generation || ticket.seq <= self.applied[slot] {
            log::debug!(
                "discarding stale {:?} check #{} ({:?})",
                ticket.kind,
                ticket.seq,
                outcome
            );
            return None;
        }
        self.applied[slot] = ticket.seq;

        let from = self.phase();
        let event = match ticket.kind {
            CheckKind::Auth => {
                if outcome.passed() {
                    // A bare cookie session without a token stays anonymous.
                    self.authenticated = self.token.is_some();
                } else {
                    self.apply_failure(outcome);
                }
                SessionEvent::AuthCheck
            }
            CheckKind::Admin => {
                self.admin = outcome.passed() && self.authenticated;
                SessionEvent::AdminCheck
            }
        };

        let t = self.transition(event, from);
        if t.changed() {
            log::info!("session {:?} -> {:?} ({:?})", t.from, t.to, outcome);
        }
        Some(t)
    }

    /// Stop accepting check replies. Login and logout still touch the store
    /// only when called explicitly.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    fn apply_failure(&mut self, outcome: CheckOutcome) {
        match self.policy {
            CheckFailurePolicy::TreatAsUnauthenticated => {
                if let CheckOutcome::Rejected(status) = outcome {
                    if status != 401 {
                        log::warn!("auth check returned {}, treating as unauthenticated", status);
                    }
                }
                self.authenticated = false;
                self.admin = false;
            }
        }
    }

    fn transition(&self, event: SessionEvent, from: SessionPhase) -> Transition {
        Transition {
            event,
            from,
            to: self.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemoryTokenStore;

    fn assert_invariants<S: TokenStore>(s: &Session<S>) {
        if s.is_admin() {
            assert!(s.is_authenticated(), "admin without authentication");
        }
        if s.token().is_none() {
            assert!(!s.is_authenticated() && !s.is_admin(), "privileges without a token");
        }
    }

    fn check<S: TokenStore>(s: &mut Session<S>, kind: CheckKind, outcome: CheckOutcome) -> Option<Transition> {
        let ticket = s.begin_check(kind);
        let t = s.complete_check(ticket, outcome);
        assert_invariants(s);
        t
    }

    #[test]
    fn test_init_without_token_is_anonymous() {
        let mut s = Session::init(MemoryTokenStore::new());
        assert_eq!(s.phase(), SessionPhase::Anonymous);
        assert_eq!(s.refresh_from_store().reaction(), None);
        assert_invariants(&s);
    }

    #[test]
    fn test_init_with_stored_token_is_optimistic() {
        let mut s = Session::init(MemoryTokenStore::with_token("stored"));
        assert!(s.is_authenticated());
        assert!(!s.is_admin());
        assert_eq!(s.token(), Some("stored"));
        assert_eq!(s.refresh_from_store().reaction(), Some(Reaction::CheckAdmin));
    }

    #[test]
    fn test_init_ignores_blank_stored_token() {
        let s = Session::init(MemoryTokenStore::with_token("  "));
        assert_eq!(s.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn test_login_persists_token() {
        let store = MemoryTokenStore::new();
        let mut s = Session::init(store.clone());
        let t = s.login("tok123");
        assert_eq!(store.load().as_deref(), Some("tok123"));
        assert_eq!(t.from, SessionPhase::Anonymous);
        assert_eq!(t.to, SessionPhase::Authenticated);
        assert_eq!(t.reaction(), Some(Reaction::CheckAdmin));
        assert_invariants(&s);
    }

    #[test]
    fn test_login_with_blank_token_is_refused() {
        let store = MemoryTokenStore::new();
        let mut s = Session::init(store.clone());
        let t = s.login("");
        assert!(!t.changed());
        assert!(store.load().is_none());
        assert_eq!(s.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn test_admin_check_promotes_and_demotes() {
        let mut s = Session::init(MemoryTokenStore::new());
        s.login("tok");

        let t = check(&mut s, CheckKind::Admin, CheckOutcome::Passed).unwrap();
        assert_eq!(t.to, SessionPhase::Admin);
        assert_eq!(t.reaction(), None);

        let t = check(&mut s, CheckKind::Admin, CheckOutcome::Rejected(403)).unwrap();
        assert_eq!(t.from, SessionPhase::Admin);
        assert_eq!(t.to, SessionPhase::Authenticated);
        assert!(s.is_authenticated());
    }

    #[test]
    fn test_admin_check_cannot_promote_anonymous() {
        let mut s = Session::init(MemoryTokenStore::new());
        let t = check(&mut s, CheckKind::Admin, CheckOutcome::Passed).unwrap();
        assert_eq!(t.to, SessionPhase::Anonymous);
        assert!(!s.is_admin());
    }

    #[test]
    fn test_auth_check_fails_closed_for_every_failure() {
        for outcome in [
            CheckOutcome::Rejected(401),
            CheckOutcome::Rejected(403),
            CheckOutcome::Rejected(500),
            CheckOutcome::Rejected(302),
            CheckOutcome::Unreachable,
        ] {
            let store = MemoryTokenStore::new();
            let mut s = Session::init(store.clone());
            s.login("tok");
            check(&mut s, CheckKind::Admin, CheckOutcome::Passed);

            let t = check(&mut s, CheckKind::Auth, outcome).unwrap();
            assert_eq!(t.to, SessionPhase::Anonymous, "outcome {:?}", outcome);
            assert!(!s.is_admin());
            // stale token stays in storage
            assert_eq!(store.load().as_deref(), Some("tok"));
        }
    }

    #[test]
    fn test_auth_check_pass_revives_stale_session() {
        let mut s = Session::init(MemoryTokenStore::with_token("tok"));
        check(&mut s, CheckKind::Auth, CheckOutcome::Rejected(401));
        assert!(!s.is_authenticated());

        let t = check(&mut s, CheckKind::Auth, CheckOutcome::Passed).unwrap();
        assert_eq!(t.to, SessionPhase::Authenticated);
        assert_eq!(t.reaction(), Some(Reaction::CheckAdmin));
    }

    #[test]
    fn test_auth_check_pass_without_token_stays_anonymous() {
        let mut s = Session::init(MemoryTokenStore::new());
        let t = check(&mut s, CheckKind::Auth, CheckOutcome::Passed).unwrap();
        assert_eq!(t.to, SessionPhase::Anonymous);
        assert_eq!(t.reaction(), None);
    }

    #[test]
    fn test_logout_clears_everything() {
        let store = MemoryTokenStore::new();
        let mut s = Session::init(store.clone());
        s.login("tok");
        check(&mut s, CheckKind::Admin, CheckOutcome::Passed);
        assert!(s.is_admin());

        let t = s.logout();
        assert_eq!(t.from, SessionPhase::Admin);
        assert_eq!(t.to, SessionPhase::Anonymous);
        assert!(store.load().is_none());
        assert!(s.token().is_none());
        assert_invariants(&s);
    }

    #[test]
    fn test_logout_from_anonymous_is_harmless() {
        let mut s = Session::init(MemoryTokenStore::new());
        let t = s.logout();
        assert!(!t.changed());
        assert_eq!(t.reaction(), None);
    }

    #[test]
    fn test_older_reply_after_newer_is_discarded() {
        let mut s = Session::init(MemoryTokenStore::new());
        s.login("tok");
        let first = s.begin_check(CheckKind::Admin);
        let second = s.begin_check(CheckKind::Admin);

        assert!(s.complete_check(second, CheckOutcome::Passed).is_some());
        assert!(s.complete_check(first, CheckOutcome::Rejected(403)).is_none());
        assert!(s.is_admin());
    }

    #[test]
    fn test_in_order_replies_both_apply() {
        let mut s = Session::init(MemoryTokenStore::new());
        s.login("tok");
        let first = s.begin_check(CheckKind::Admin);
        let second = s.begin_check(CheckKind::Admin);

        assert!(s.complete_check(first, CheckOutcome::Passed).is_some());
        assert!(s.is_admin());
        assert!(s.complete_check(second, CheckOutcome::Rejected(403)).is_some());
        assert!(!s.is_admin());
    }

    #[test]
    fn test_check_kinds_are_sequenced_independently() {
        let mut s = Session::init(MemoryTokenStore::new());
        s.login("tok");
        let auth = s.begin_check(CheckKind::Auth);
        let admin = s.begin_check(CheckKind::Admin);

        assert!(s.complete_check(admin, CheckOutcome::Passed).is_some());
        assert!(s.complete_check(auth, CheckOutcome::Passed).is_some());
        assert_eq!(s.phase(), SessionPhase::Admin);
    }

    #[test]
    fn test_reply_from_before_login_is_discarded() {
        let mut s = Session::init(MemoryTokenStore::with_token("old"));
        let ticket = s.begin_check(CheckKind::Auth);
        s.login("new");
        assert!(s.complete_check(ticket, CheckOutcome::Rejected(401)).is_none());
        assert!(s.is_authenticated());
    }

    #[test]
    fn test_reply_from_before_logout_is_discarded() {
        let mut s = Session::init(MemoryTokenStore::new());
        s.login("tok");
        let ticket = s.begin_check(CheckKind::Admin);
        s.logout();
        assert!(s.complete_check(ticket, CheckOutcome::Passed).is_none());
        assert!(!s.is_admin());
    }

    #[test]
    fn test_disposed_session_ignores_replies() {
        let mut s = Session::init(MemoryTokenStore::new());
        s.login("tok");
        let ticket = s.begin_check(CheckKind::Admin);
        s.dispose();
        assert!(s.complete_check(ticket, CheckOutcome::Passed).is_none());
        assert!(!s.login("other").changed());
        assert!(s.is_disposed());
    }

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(CheckOutcome::from_result(&Ok(ApiResponse::new(204, ""))), CheckOutcome::Passed);
        assert_eq!(
            CheckOutcome::from_result(&Ok(ApiResponse::new(401, ""))),
            CheckOutcome::Rejected(401)
        );
        assert_eq!(
            CheckOutcome::from_result(&Err(ApiError::Network("down".to_string()))),
            CheckOutcome::Unreachable
        );
    }

    #[test]
    fn test_refresh_after_token_removed_elsewhere() {
        let store = MemoryTokenStore::new();
        let mut s = Session::init(store.clone());
        s.login("tok");
        check(&mut s, CheckKind::Admin, CheckOutcome::Passed);
        assert!(s.is_admin());

        store.clear();
        let t = s.refresh_from_store();
        assert_eq!(t.from, SessionPhase::Admin);
        assert_eq!(t.to, SessionPhase::Anonymous);
        assert_eq!(t.reaction(), None);
        assert!(s.token().is_none());
        assert_invariants(&s);
    }

    #[test]
    fn test_refresh_picks_up_token_saved_elsewhere() {
        let store = MemoryTokenStore::new();
        let mut s = Session::init(store.clone());

        store.save("from-other-tab");
        let t = s.refresh_from_store();
        assert_eq!(t.to, SessionPhase::Authenticated);
        assert_eq!(t.reaction(), Some(Reaction::CheckAdmin));
        assert_eq!(s.token(), Some("from-other-tab"));
    }

    #[test]
    fn test_refresh_keeps_admin_for_same_token() {
        let store = MemoryTokenStore::new();
        let mut s = Session::init(store.clone());
        s.login("tok");
        check(&mut s, CheckKind::Admin, CheckOutcome::Passed);

        assert_eq!(s.refresh_from_store().to, SessionPhase::Admin);

        store.save("someone-else");
        assert_eq!(s.refresh_from_store().to, SessionPhase::Authenticated);
    }

    #[test]
    fn test_refresh_discards_in_flight_checks() {
        let mut s = Session::init(MemoryTokenStore::with_token("tok"));
        let ticket = s.begin_check(CheckKind::Auth);
        s.refresh_from_store();
        assert!(s.complete_check(ticket, CheckOutcome::Rejected(401)).is_none());
        assert!(s.is_authenticated());
    }

    #[test]
    fn test_admin_demotion_does_not_schedule_recheck() {
        let mut s = Session::init(MemoryTokenStore::new());
        s.login("tok");
        check(&mut s, CheckKind::Admin, CheckOutcome::Passed);
        let t = check(&mut s, CheckKind::Admin, CheckOutcome::Unreachable).unwrap();
        assert_eq!(t.reaction(), None);
    }
}
