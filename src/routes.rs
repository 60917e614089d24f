//! Static route table for the portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` declares one Leptos route per `AppRoute` using `path()`; the sidebar
//! walks `AppRoute::ALL`, and pages and the login flow name navigation
//! targets through `AppRoute` instead of raw strings.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A navigable view in the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Home,
    StudentView,
    TeacherView,
    CourseView,
    /// Guarded: entry requires a stored session token.
    Profile,
}

impl AppRoute {
    /// Every listed route, in table order.
    pub const ALL: [AppRoute; 6] = [
        AppRoute::Login,
        AppRoute::Home,
        AppRoute::StudentView,
        AppRoute::TeacherView,
        AppRoute::CourseView,
        AppRoute::Profile,
    ];

    /// Path segment without a leading slash.
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Login => "login",
            AppRoute::Home => "home",
            AppRoute::StudentView => "student-view",
            AppRoute::TeacherView => "teacher-view",
            AppRoute::CourseView => "course-view",
            AppRoute::Profile => "profile",
        }
    }

    /// Absolute href suitable for `use_navigate` and `<A>`.
    pub fn href(self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::Home => "/home",
            AppRoute::StudentView => "/student-view",
            AppRoute::TeacherView => "/teacher-view",
            AppRoute::CourseView => "/course-view",
            AppRoute::Profile => "/profile",
        }
    }

    /// Human label used by the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            AppRoute::Login => "Login",
            AppRoute::Home => "Home",
            AppRoute::StudentView => "Student",
            AppRoute::TeacherView => "Teacher",
            AppRoute::CourseView => "Courses",
            AppRoute::Profile => "Profile",
        }
    }

    pub fn requires_auth(self) -> bool {
        matches!(self, AppRoute::Profile)
    }

    /// Look up a route by its path segment.
    pub fn from_path(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == segment)
    }
}

/// Outcome of matching a URL path against the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Show(AppRoute),
    Redirect(AppRoute),
    NotFound,
}

/// Match a URL path. The empty path redirects to login.
pub fn resolve(path: &str) -> Resolution {
    let segment = path.trim_matches('/');
    if segment.is_empty() {
        return Resolution::Redirect(AppRoute::Login);
    }
    AppRoute::from_path(segment).map_or(Resolution::NotFound, Resolution::Show)
}
