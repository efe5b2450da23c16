use leptos::prelude::*;

use super::context::use_session;
use super::session::SessionPhase;

/// What a guarded subtree renders for the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Deny,
}

pub fn admin_gate(phase: SessionPhase) -> GuardDecision {
    if phase.is_admin() {
        GuardDecision::Render
    } else {
        GuardDecision::Deny
    }
}

#[component]
pub fn AccessDenied() -> impl IntoView {
    view! {
        <div class="access-denied">
            <h2>"アクセス権限がありません"</h2>
            <p>"管理者権限が必要です。"</p>
        </div>
    }
}

/// Component that requires admin privileges.
/// Shows the denial view otherwise; never redirects and never checks the server.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || admin_gate(session.phase()) == GuardDecision::Render
            fallback=|| view! { <AccessDenied /> }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_gate() {
        assert_eq!(admin_gate(SessionPhase::Anonymous), GuardDecision::Deny);
        assert_eq!(admin_gate(SessionPhase::Authenticated), GuardDecision::Deny);
        assert_eq!(admin_gate(SessionPhase::Admin), GuardDecision::Render);
    }
}
