//! Route guard wrapper for pages that need a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps guarded routes in `app`. The render decision comes from `AuthGuard`
//! alone; the backend session check runs afterwards and can only send the
//! user back to login.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::routes::AppRoute;
use crate::state::auth::{AuthGuard, GuardDecision};
use crate::util::storage::LocalTokenStore;

/// Render `children` when the guard admits `route`, otherwise redirect.
#[component]
pub fn RequireAuth(route: AppRoute, children: Children) -> impl IntoView {
    match AuthGuard::new(LocalTokenStore).can_activate(route) {
        GuardDecision::Deny { redirect } => view! { <Redirect path=redirect.href()/> }.into_any(),
        GuardDecision::Admit => {
            #[cfg(feature = "csr")]
            spawn_session_check();
            children().into_any()
        }
    }
}

#[cfg(feature = "csr")]
fn spawn_session_check() {
    use leptos_router::NavigateOptions;
    use leptos_router::hooks::use_navigate;

    use crate::net::api::HttpAuthApi;
    use crate::net::types::SessionStatus;
    use crate::state::auth::verify_session;

    let api = expect_context::<HttpAuthApi>();
    let navigate = use_navigate();
    leptos::task::spawn_local(async move {
        match verify_session(&api, &LocalTokenStore).await {
            Ok(SessionStatus::Active) => log::debug!("session active"),
            Ok(SessionStatus::Rejected) => navigate(AppRoute::Login.href(), NavigateOptions::default()),
            Err(e) => log::warn!("session check failed: {e}"),
        }
    });
}
