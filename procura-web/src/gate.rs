//! The router/layout gate.
//!
//! Decides which top-level view is visible from two independent signals,
//! the session and the current path. [`GateState::evaluate`] is the whole
//! transition table; [`Gate`] re-runs it whenever either signal changes.

use std::{
    cell::Cell,
    fmt,
    rc::{Rc, Weak},
};

use crate::location::Location;
use crate::observable::{Observable, Subscription};
use crate::routes::AppRoute;
use crate::session::{Session, SessionContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Startup probe still in flight.
    CheckingSession,
    Unauthenticated,
    /// Signed in but sitting on `/` or `/login`.
    AuthenticatedRedirecting,
    AuthenticatedShell,
}

/// The one thing on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateView {
    Loading,
    Login,
    Shell { active: AppRoute },
}

impl GateState {
    pub fn evaluate(session: &Session, path: &str) -> Self {
        if session.is_loading {
            Self::CheckingSession
        } else if !session.is_authenticated() {
            Self::Unauthenticated
        } else if AppRoute::resolve(path).is_entry() {
            Self::AuthenticatedRedirecting
        } else {
            Self::AuthenticatedShell
        }
    }

    pub fn view(self, path: &str) -> GateView {
        match self {
            Self::CheckingSession => GateView::Loading,
            Self::Unauthenticated => GateView::Login,
            Self::AuthenticatedRedirecting => GateView::Shell {
                active: AppRoute::Dashboard,
            },
            Self::AuthenticatedShell => GateView::Shell {
                active: AppRoute::resolve(path),
            },
        }
    }

    #[cfg(test)]
    pub const fn is_authenticated(self) -> bool {
        matches!(
            self,
            Self::AuthenticatedRedirecting | Self::AuthenticatedShell
        )
    }
}

struct GateInner {
    session: SessionContext,
    location: Location,
    state: Observable<GateState>,
    evaluations: Cell<usize>,
}

impl GateInner {
    fn reevaluate(&self) {
        self.evaluations.set(self.evaluations.get() + 1);
        let next = GateState::evaluate(&self.session.current(), &self.location.current());
        let previous = self.state.get();
        if previous != next {
            log::info!("gate: {previous:?} -> {next:?}");
        }
        self.state.set(next);
    }
}

/// Live gate bound to a session and a location.
pub struct Gate {
    inner: Rc<GateInner>,
    _session_subscription: Subscription,
    _location_subscription: Subscription,
}

impl Gate {
    pub fn new(session: SessionContext, location: Location) -> Self {
        let initial = GateState::evaluate(&session.current(), &location.current());
        let inner = Rc::new(GateInner {
            session,
            location,
            state: Observable::new(initial),
            evaluations: Cell::new(0),
        });

        let weak = Rc::downgrade(&inner);
        let session_subscription = inner.session.subscribe(reevaluate_with(weak.clone()));
        let location_subscription = inner.location.subscribe(reevaluate_with(weak));

        Self {
            inner,
            _session_subscription: session_subscription,
            _location_subscription: location_subscription,
        }
    }

    pub fn state(&self) -> GateState {
        self.inner.state.get()
    }

    pub fn view(&self) -> GateView {
        self.state().view(&self.inner.location.current())
    }

    /// How many times a signal change has re-run the transition table.
    pub fn evaluations(&self) -> usize {
        self.inner.evaluations.get()
    }

    #[cfg(test)]
    pub fn subscribe(&self, listener: impl Fn(&GateState) + 'static) -> Subscription {
        self.inner.state.subscribe(listener)
    }

    pub fn location(&self) -> &Location {
        &self.inner.location
    }
}

fn reevaluate_with<T: 'static>(weak: Weak<GateInner>) -> impl Fn(&T) + 'static {
    move |_: &T| {
        if let Some(inner) = weak.upgrade() {
            inner.reevaluate();
        }
    }
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gate")
            .field("state", &self.state())
            .field("path", &self.inner.location.current())
            .field("evaluations", &self.evaluations())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::session::testing::{FakeApi, context, user};
    use futures::executor::block_on;
    use test_case::test_case;

    fn session(user_id: Option<u64>, is_loading: bool) -> Session {
        Session {
            current_user: user_id.map(user),
            is_loading,
        }
    }

    #[test_case(None, true, "/orders", GateView::Loading; "checking on deep link")]
    #[test_case(None, true, "/", GateView::Loading; "checking on root")]
    #[test_case(Some(1), true, "/orders", GateView::Loading; "loading wins over user")]
    #[test_case(None, false, "/orders", GateView::Login; "signed out deep link")]
    #[test_case(None, false, "/vendors/42", GateView::Login; "signed out detail")]
    #[test_case(None, false, "/nowhere", GateView::Login; "signed out unknown path")]
    #[test_case(Some(1), false, "/", GateView::Shell { active: AppRoute::Dashboard }; "root goes to dashboard")]
    #[test_case(Some(1), false, "/login", GateView::Shell { active: AppRoute::Dashboard }; "login goes to dashboard")]
    #[test_case(Some(1), false, "/vendors/42", GateView::Shell { active: AppRoute::VendorDetail { id: 42 } }; "vendor detail")]
    #[test_case(Some(1), false, "/nowhere", GateView::Shell { active: AppRoute::NotFound }; "unknown path stays signed in")]
    fn renders_expected_view(user_id: Option<u64>, is_loading: bool, path: &str, expected: GateView) {
        let state = GateState::evaluate(&session(user_id, is_loading), path);
        assert_eq!(state.view(path), expected);
    }

    #[test_case("/", GateState::AuthenticatedRedirecting)]
    #[test_case("/login", GateState::AuthenticatedRedirecting)]
    #[test_case("/dashboard", GateState::AuthenticatedShell)]
    #[test_case("/orders/new", GateState::AuthenticatedShell)]
    fn authenticated_state_depends_on_path(path: &str, expected: GateState) {
        assert_eq!(GateState::evaluate(&session(Some(1), false), path), expected);
    }

    #[test]
    fn shell_shown_iff_signed_in_and_not_checking() {
        let paths = ["/", "/login", "/orders", "/vendors/42", "/nowhere"];
        for path in paths {
            for (user_id, loading) in [(None, true), (None, false), (Some(1), true), (Some(1), false)] {
                let view = GateState::evaluate(&session(user_id, loading), path).view(path);
                let is_shell = matches!(view, GateView::Shell { .. });
                assert_eq!(is_shell, user_id.is_some() && !loading, "{path} {user_id:?} {loading}");
            }
        }
    }

    #[test]
    fn probe_resolution_moves_gate_out_of_checking() {
        let api = FakeApi::default();
        *api.probe.borrow_mut() = Ok(Some(user(1)));
        let (ctx, _) = context(api);
        let gate = Gate::new(ctx.clone(), Location::new("/orders"));
        assert_eq!(gate.state(), GateState::CheckingSession);
        assert_eq!(gate.view(), GateView::Loading);

        block_on(ctx.initialize());
        assert_eq!(gate.state(), GateState::AuthenticatedShell);
        assert_eq!(gate.view(), GateView::Shell { active: AppRoute::Orders });
    }

    #[test]
    fn failed_probe_shows_login() {
        let api = FakeApi::default();
        *api.probe.borrow_mut() = Err(ApiError::Network("offline".to_string()));
        let (ctx, _) = context(api);
        let gate = Gate::new(ctx.clone(), Location::new("/orders"));

        block_on(ctx.initialize());
        assert_eq!(gate.view(), GateView::Login);
    }

    #[test]
    fn login_causes_exactly_one_reevaluation() {
        let (ctx, _) = context(FakeApi::default());
        let gate = Gate::new(ctx.clone(), Location::new("/login"));
        block_on(ctx.initialize());
        assert_eq!(gate.state(), GateState::Unauthenticated);
        let before = gate.evaluations();

        block_on(ctx.login("user1@example.com", "pw")).unwrap();

        assert_eq!(gate.evaluations(), before + 1);
        assert_eq!(gate.state(), GateState::AuthenticatedRedirecting);
        assert_eq!(gate.view(), GateView::Shell { active: AppRoute::Dashboard });
    }

    #[test]
    fn rejected_login_does_not_reevaluate() {
        let (ctx, _) = context(FakeApi::default());
        let gate = Gate::new(ctx.clone(), Location::new("/login"));
        block_on(ctx.initialize());
        let before = gate.evaluations();

        assert!(block_on(ctx.login("bad", "pw")).is_err());

        assert_eq!(gate.evaluations(), before);
        assert_eq!(gate.view(), GateView::Login);
    }

    #[test]
    fn path_change_alone_reevaluates() {
        let api = FakeApi::default();
        *api.probe.borrow_mut() = Ok(Some(user(1)));
        let (ctx, _) = context(api);
        let location = Location::new("/");
        let gate = Gate::new(ctx.clone(), location.clone());
        block_on(ctx.initialize());
        assert_eq!(gate.state(), GateState::AuthenticatedRedirecting);

        location.navigate("/dashboard");
        assert_eq!(gate.state(), GateState::AuthenticatedShell);

        location.navigate("/vendors/42");
        assert_eq!(gate.view(), GateView::Shell { active: AppRoute::VendorDetail { id: 42 } });
    }

    #[test]
    fn logout_from_any_state_shows_login() {
        for path in ["/", "/orders", "/vendors/42", "/nowhere"] {
            let api = FakeApi::default();
            *api.probe.borrow_mut() = Ok(Some(user(1)));
            let (ctx, _) = context(api);
            let gate = Gate::new(ctx.clone(), Location::new(path));
            block_on(ctx.initialize());
            assert!(gate.state().is_authenticated());

            block_on(ctx.logout());
            assert_eq!(gate.view(), GateView::Login, "{path}");
        }
    }

    #[test]
    fn invalidation_shows_login_and_keeps_path() {
        let api = FakeApi::default();
        *api.probe.borrow_mut() = Ok(Some(user(1)));
        let (ctx, _) = context(api);
        let gate = Gate::new(ctx.clone(), Location::new("/orders/5"));
        block_on(ctx.initialize());

        ctx.invalidate();

        assert_eq!(gate.state(), GateState::Unauthenticated);
        assert_eq!(gate.location().current(), "/orders/5");
    }

    #[test]
    fn subscribers_hear_every_reevaluation() {
        let (ctx, _) = context(FakeApi::default());
        let location = Location::new("/");
        let gate = Gate::new(ctx.clone(), location.clone());
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = gate.subscribe(move |state| sink.borrow_mut().push(*state));

        block_on(ctx.initialize());
        block_on(ctx.login("user1@example.com", "pw")).unwrap();
        location.navigate("/reports");

        assert_eq!(
            *seen.borrow(),
            vec![
                GateState::Unauthenticated,
                GateState::AuthenticatedRedirecting,
                GateState::AuthenticatedShell,
            ]
        );
    }

    #[test]
    fn dropping_gate_releases_subscriptions() {
        let (ctx, _) = context(FakeApi::default());
        let gate = Gate::new(ctx.clone(), Location::new("/"));
        drop(gate);
        block_on(ctx.initialize());
        assert!(!ctx.current().is_loading);
    }
}
