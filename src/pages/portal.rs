//! Content views reachable from the sidebar.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;

/// Sidebar plus a titled main column.
#[component]
fn PortalLayout(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="portal">
            <Sidebar/>
            <main class="portal__main">
                <h1>{title}</h1>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PortalLayout title="Home">
            <p>"Pick a view from the sidebar."</p>
        </PortalLayout>
    }
}

#[component]
pub fn StudentViewPage() -> impl IntoView {
    view! {
        <PortalLayout title="Student">
            <p>"Your enrolled courses appear here."</p>
        </PortalLayout>
    }
}

#[component]
pub fn TeacherViewPage() -> impl IntoView {
    view! {
        <PortalLayout title="Teacher">
            <p>"Courses you teach appear here."</p>
        </PortalLayout>
    }
}

#[component]
pub fn CourseViewPage() -> impl IntoView {
    view! {
        <PortalLayout title="Courses">
            <p>"Course details appear here."</p>
        </PortalLayout>
    }
}

/// Fallback for unmatched paths. Paths that normalize onto a listed route
/// (extra slashes) are redirected there instead.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    use leptos_router::components::Redirect;
    use leptos_router::hooks::use_location;

    use crate::routes::{Resolution, resolve};

    let pathname = use_location().pathname.get_untracked();
    match resolve(&pathname) {
        Resolution::Show(route) | Resolution::Redirect(route) => {
            view! { <Redirect path=route.href()/> }.into_any()
        }
        Resolution::NotFound => {
            log::info!("no route for {pathname}");
            view! { <p class="not-found">"Page not found."</p> }.into_any()
        }
    }
}
