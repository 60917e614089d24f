//! Navigation sidebar shared by the portal views.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;

#[component]
pub fn Sidebar() -> impl IntoView {
    let links = AppRoute::ALL
        .into_iter()
        .filter(|route| *route != AppRoute::Login)
        .map(|route| {
            view! {
                <li class="sidebar__item">
                    <A href=route.href()>{route.label()}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">{links}</ul>
            <A href=AppRoute::Login.href()>"Sign in"</A>
        </nav>
    }
}
