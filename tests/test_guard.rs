mod common;

use tiltcheck::application::guard::GuardDecision;
use tiltcheck::domain::ports::unauthorized::UnauthorizedHandler;

#[test]
fn anonymous_navigation_redirects_and_preserves_the_path() {
    let tc = common::setup();
    assert_eq!(
        tc.guard_route("/dashboard/edges"),
        GuardDecision::Redirect {
            to: "/activate".into(),
            from: "/dashboard/edges".into(),
        }
    );
}

#[test]
fn demo_session_passes_the_guard() {
    let tc = common::setup();
    tc.enter_demo().unwrap();
    assert_eq!(tc.guard_route("/dashboard"), GuardDecision::Allow);
}

#[test]
fn live_session_passes_the_guard() {
    let tc = common::setup();
    tc.session().store_token("tok-live").unwrap();
    assert_eq!(tc.guard_route("/dashboard/alerts"), GuardDecision::Allow);
}

#[test]
fn guard_reevaluates_after_logout() {
    let tc = common::setup();
    tc.session().store_token("tok-live").unwrap();
    assert_eq!(tc.guard_route("/dashboard"), GuardDecision::Allow);

    tc.logout().unwrap();
    assert!(matches!(
        tc.guard_route("/dashboard"),
        GuardDecision::Redirect { .. }
    ));
}

#[test]
fn guard_reevaluates_after_forced_teardown() {
    let tc = common::setup();
    tc.session().store_token("tok-live").unwrap();
    assert_eq!(tc.guard_route("/dashboard"), GuardDecision::Allow);

    tc.session().on_unauthorized();
    assert_eq!(
        tc.guard_route("/dashboard"),
        GuardDecision::Redirect {
            to: "/activate".into(),
            from: "/dashboard".into(),
        }
    );
}
