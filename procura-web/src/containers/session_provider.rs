//! Owns the API client and the session for the component tree.

use std::rc::Rc;

use shared::models::AuthenticatedUser;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ProcuraClient;
use crate::observable::Subscription;
use crate::session::{Session, SessionContext};

/// Snapshot of the session handed to components through context.
///
/// Equality includes the snapshot so consumers re-render on every change.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub session: Session,
    handle: SessionContext,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle && self.session == other.session
    }
}

impl AuthContext {
    pub const fn handle(&self) -> &SessionContext {
        &self.handle
    }

    pub const fn user(&self) -> Option<&AuthenticatedUser> {
        self.session.current_user.as_ref()
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub client: ProcuraClient,
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let handle = use_memo(props.client.clone(), |client| {
        SessionContext::new(Rc::new(client.clone()))
    });
    let snapshot = use_state_eq(|| handle.current());

    {
        let snapshot = snapshot.clone();
        use_effect_with(handle.clone(), move |handle| {
            let subscription = mirror(handle, move |session| snapshot.set(session));
            let probe = (**handle).clone();
            spawn_local(async move { probe.initialize().await });
            move || drop(subscription)
        });
    }

    let auth = AuthContext {
        session: (*snapshot).clone(),
        handle: (*handle).clone(),
    };

    html! {
        <ContextProvider<ProcuraClient> context={props.client.clone()}>
            <ContextProvider<AuthContext> context={auth}>
                { props.children.clone() }
            </ContextProvider<AuthContext>>
        </ContextProvider<ProcuraClient>>
    }
}

/// Push the current session into `sink`, then every later change.
fn mirror(handle: &SessionContext, sink: impl Fn(Session) + 'static) -> Subscription {
    sink(handle.current());
    handle.subscribe(move |session| sink(session.clone()))
}

/// The session as seen by the calling component.
#[hook]
pub fn use_session() -> AuthContext {
    use_context::<AuthContext>().expect("use_session called outside SessionProvider")
}

#[hook]
pub fn use_client() -> ProcuraClient {
    use_context::<ProcuraClient>().expect("use_client called outside SessionProvider")
}
