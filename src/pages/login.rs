//! Login page: student entry, teacher entry, and account registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Input signals are snapshotted into a `LoginForm` on each button press and
//! handed to `state::login`; this page only performs the navigation and shows
//! the resulting message.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::login::{self, LoginForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    let course_id = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let snapshot = move || LoginForm {
        course_id: course_id.get(),
        username: username.get(),
        password: password.get(),
        confirm_password: confirm_password.get(),
        first_name: first_name.get(),
        last_name: last_name.get(),
        email: email.get(),
    };

    let navigate_student = navigate.clone();
    let on_student = move |_| match login::student(&snapshot()) {
        Some(route) => navigate_student(route.href(), NavigateOptions::default()),
        None => info.set("Course ID not recognized.".to_owned()),
    };

    let navigate_teacher = navigate.clone();
    let on_teacher = move |_| match login::teacher(&snapshot()) {
        Some(route) => navigate_teacher(route.href(), NavigateOptions::default()),
        None => info.set("Username not recognized.".to_owned()),
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = snapshot();
        match login::begin_submit(busy.get(), &form) {
            Ok(()) => {}
            Err(login::SubmitBlocked::InFlight) => return,
            Err(blocked) => {
                info.set(blocked.to_string());
                return;
            }
        }
        busy.set(true);
        info.set("Registering...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api = expect_context::<crate::net::api::HttpAuthApi>();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let store = crate::util::storage::LocalTokenStore;
                match login::register(&form, &api, &store).await {
                    Ok(route) => navigate(route.href(), NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        info.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Course Portal"</h1>
                <form class="login-form" on:submit=on_register>
                    {text_field("Course ID", "text", course_id)}
                    {text_field("Username", "text", username)}
                    {text_field("Password", "password", password)}
                    {text_field("Confirm password", "password", confirm_password)}
                    <details class="login-extra">
                        <summary>"Account details"</summary>
                        {text_field("First name", "text", first_name)}
                        {text_field("Last name", "text", last_name)}
                        {text_field("Email", "email", email)}
                    </details>
                    <div class="login-actions">
                        <button class="login-button" type="button" on:click=on_student>
                            "Student"
                        </button>
                        <button class="login-button" type="button" on:click=on_teacher>
                            "Teacher"
                        </button>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Register"
                        </button>
                    </div>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

fn text_field(label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="login-field">
            <span>{label}</span>
            <input
                class="login-input"
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
