//! Profile page, shown only with a stored session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::auth::logout;
use crate::util::storage::LocalTokenStore;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let navigate = use_navigate();
    let on_logout = move |_| {
        let next = logout(&LocalTokenStore);
        navigate(next.href(), NavigateOptions::default());
    };

    view! {
        <div class="portal">
            <Sidebar/>
            <main class="portal__main">
                <h1>"Profile"</h1>
                <p>"You are signed in."</p>
                <button class="login-button" type="button" on:click=on_logout>
                    "Sign out"
                </button>
            </main>
        </div>
    }
}
