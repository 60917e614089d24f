use super::*;

#[test]
fn empty_path_redirects_to_login() {
    assert_eq!(resolve(""), Resolution::Redirect(AppRoute::Login));
    assert_eq!(resolve("/"), Resolution::Redirect(AppRoute::Login));
}

#[test]
fn listed_paths_resolve_to_their_route() {
    for route in AppRoute::ALL {
        assert_eq!(resolve(route.href()), Resolution::Show(route));
        assert_eq!(resolve(route.path()), Resolution::Show(route));
    }
}

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(resolve("/profile/"), Resolution::Show(AppRoute::Profile));
}

#[test]
fn unlisted_paths_are_not_found() {
    assert_eq!(resolve("/admin"), Resolution::NotFound);
    assert_eq!(resolve("/profile/edit"), Resolution::NotFound);
}

#[test]
fn only_profile_requires_auth() {
    let guarded: Vec<_> = AppRoute::ALL.into_iter().filter(|r| r.requires_auth()).collect();
    assert_eq!(guarded, vec![AppRoute::Profile]);
}

#[test]
fn href_is_slash_prefixed_path() {
    for route in AppRoute::ALL {
        assert_eq!(route.href(), format!("/{}", route.path()));
    }
}
