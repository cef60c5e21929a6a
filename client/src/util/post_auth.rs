//! Post-authentication sequencing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and registration forms hand the authenticated [`User`] to
//! [`PostAuthCoordinator`] once the backend has accepted the credentials. The
//! coordinator then, in this order:
//!
//! 1. commits the identity into shared session state,
//! 2. takes the remembered destination from [`RedirectMemory`],
//! 3. schedules navigation to it after a short delay.
//!
//! TRADE-OFFS
//! ==========
//! Step 1 is synchronous, so the commit always precedes navigation no matter
//! what the delay is. The delay only exists because Leptos effects run on the
//! async executor: views gated on `AuthState` need a tick to see the new user
//! before the route changes underneath them. Scheduled navigations cannot be
//! cancelled and repeated calls are not de-duplicated.

#[cfg(test)]
#[path = "post_auth_test.rs"]
mod post_auth_test;

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::RedirectConfig;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::redirect::RedirectMemory;
use crate::util::storage::{BrowserSessionStore, SessionStore};

/// Shared session state that accepts a newly authenticated identity.
pub trait SessionSink {
    fn login(&self, identity: User);
}

impl SessionSink for RwSignal<AuthState> {
    fn login(&self, identity: User) {
        self.update(|auth| auth.login(identity));
    }
}

/// Route-changing service.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, path: &str) {
        self(path);
    }
}

/// Deferred execution of a one-shot task.
pub trait Scheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Runs tasks on a browser `setTimeout`.
#[cfg(feature = "hydrate")]
pub struct TimeoutScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}

/// Runs tasks inline, ignoring the delay. Used where there is no event loop
/// to defer onto (server rendering).
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn defer(&self, _delay: Duration, task: Box<dyn FnOnce()>) {
        task();
    }
}

/// Sequences session commit, redirect lookup and navigation after sign-in.
pub struct PostAuthCoordinator<S: SessionStore> {
    session: Rc<dyn SessionSink>,
    redirect: Rc<RedirectMemory<S>>,
    navigator: Rc<dyn Navigator>,
    scheduler: Rc<dyn Scheduler>,
    delay: Duration,
}

impl<S: SessionStore> Clone for PostAuthCoordinator<S> {
    fn clone(&self) -> Self {
        Self {
            session: Rc::clone(&self.session),
            redirect: Rc::clone(&self.redirect),
            navigator: Rc::clone(&self.navigator),
            scheduler: Rc::clone(&self.scheduler),
            delay: self.delay,
        }
    }
}

impl<S: SessionStore> PostAuthCoordinator<S> {
    pub fn new(
        session: Rc<dyn SessionSink>,
        redirect: Rc<RedirectMemory<S>>,
        navigator: Rc<dyn Navigator>,
        scheduler: Rc<dyn Scheduler>,
        delay: Duration,
    ) -> Self {
        Self { session, redirect, navigator, scheduler, delay }
    }

    /// Finish a successful login.
    pub fn on_authenticated(&self, identity: User) {
        self.session.login(identity);
        let target = self.redirect.consume();
        log::debug!("post-auth: navigating to {target} in {}ms", self.delay.as_millis());
        let navigator = Rc::clone(&self.navigator);
        self.scheduler.defer(self.delay, Box::new(move || navigator.navigate_to(&target)));
    }

    /// Finish a successful registration. Registration signs the user in, so
    /// this is the same sequence as [`on_authenticated`](Self::on_authenticated).
    pub fn on_registered(&self, identity: User) {
        self.on_authenticated(identity);
    }
}

/// Build a coordinator wired to the app's auth signal, router and
/// `sessionStorage`.
///
/// Must be called from a component body inside `<Router>`.
pub fn use_post_auth() -> PostAuthCoordinator<BrowserSessionStore> {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = use_context::<RedirectConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let redirect = RedirectMemory::new(BrowserSessionStore::new(), &config);
    let navigator = move |path: &str| navigate(path, NavigateOptions::default());

    #[cfg(feature = "hydrate")]
    let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler);
    #[cfg(not(feature = "hydrate"))]
    let scheduler: Rc<dyn Scheduler> = Rc::new(ImmediateScheduler);

    PostAuthCoordinator::new(
        Rc::new(auth),
        Rc::new(redirect),
        Rc::new(navigator),
        scheduler,
        config.navigate_delay,
    )
}
