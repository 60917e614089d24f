//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::config::ApiConfig;
use crate::net::api::HttpAuthApi;
use crate::pages::login::LoginPage;
use crate::pages::portal::{CourseViewPage, HomePage, NotFoundPage, StudentViewPage, TeacherViewPage};
use crate::pages::profile::ProfilePage;
use crate::routes::AppRoute;

/// Root application component.
///
/// Provides the backend client as context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(HttpAuthApi::new(ApiConfig::from_build_env()));

    view! {
        <Title text="Course Portal"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=AppRoute::Login.href()/> }/>
                <Route path=StaticSegment(AppRoute::Login.path()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::Home.path()) view=HomePage/>
                <Route path=StaticSegment(AppRoute::StudentView.path()) view=StudentViewPage/>
                <Route path=StaticSegment(AppRoute::TeacherView.path()) view=TeacherViewPage/>
                <Route path=StaticSegment(AppRoute::CourseView.path()) view=CourseViewPage/>
                <Route
                    path=StaticSegment(AppRoute::Profile.path())
                    view=|| view! {
                        <RequireAuth route=AppRoute::Profile>
                            <ProfilePage/>
                        </RequireAuth>
                    }
                />
            </Routes>
        </Router>
    }
}
