//! Authentication state and the page-load guard.
//!
//! The reactive `AuthContext` mirrors the persisted session for the UI and
//! the router; `require_auth` is the only place that distinguishes "looks
//! logged in" (token present in storage) from "is logged in" (token
//! accepted by the server).

use leptos::prelude::*;

use enrollview_shared::Session;

use crate::api::ApiClient;
use crate::log_info;
use crate::request::HttpClient;
use crate::session::{SessionBackend, SessionStore};
use crate::web::route::AppRoute;


// =========================================================
// Reactive auth state
// =========================================================

#[derive(Clone, Default)]
pub struct AuthState {
    /// Mirror of the persisted session. `Some` means "looks logged in";
    /// the guard may still demote it after talking to the server.
    pub session: Option<Session>,
    /// True until the initial load has read the session store.
    pub is_loading: bool,
    /// Verification-failure message carried across the redirect to login.
    /// Clearing the session unmounts the page that detected the failure,
    /// so the message has to outlive that page's own signals.
    pub auth_error: Option<String>,
}

/// Read/write signal pair shared through Context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            session: None,
            is_loading: true,
            auth_error: None,
        });
        Self { state, set_state }
    }

    /// Derived signal for the router guard.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().session.is_some())
    }

    /// Drops the session and stashes the failure message. The resulting
    /// auth-state change redirects to login, which picks the message up
    /// via `take_error`.
    pub fn fail_session(&self, message: String) {
        self.set_state.update(|state| {
            state.session = None;
            state.is_loading = false;
            state.auth_error = Some(message);
        });
    }

    /// Removes and returns the stashed failure message, so it is shown
    /// exactly once.
    pub fn take_error(&self) -> Option<String> {
        let message = self.state.get_untracked().auth_error;
        if message.is_some() {
            self.set_state.update(|state| state.auth_error = None);
        }
        message
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided at the app root")
}

/// Loads the persisted session into the reactive state. Storage is the
/// source of truth; this only seeds the mirror.
pub fn init_auth<B: SessionBackend>(ctx: &AuthContext, store: &SessionStore<B>) {
    let session = store.get();
    ctx.set_state.update(|state| {
        state.session = session;
        state.is_loading = false;
    });
}

// =========================================================
// Page-load guard
// =========================================================

/// Outcome of the protected-page guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The server accepted the stored token.
    Authenticated,
    /// No stored session; redirect without a network call.
    MissingToken,
    /// The server rejected the token (or the call failed). The session
    /// store has already been cleared; the message is shown to the user.
    Rejected(String),
}

/// Fails closed. No token means no network round trip at all; a present
/// token is re-verified against the server, and any failure — expired or
/// invalid token, network error — clears the store.
pub async fn require_auth<C: HttpClient, B: SessionBackend>(
    api: &ApiClient<C, B>,
) -> AuthOutcome {
    if api.session().get().is_none() {
        log_info!("[auth] no stored session, redirecting to login");
        return AuthOutcome::MissingToken;
    }

    match api.verify_auth().await {
        Ok(_) => AuthOutcome::Authenticated,
        Err(e) => {
            api.session().clear();
            log_info!("[auth] verification failed, session cleared: {}", e);
            AuthOutcome::Rejected(e.message().to_string())
        }
    }
}

/// Routes a session to its landing page: dashboard for either recognized
/// role, login otherwise. An unrecognized role never produces a `Session`
/// in the first place, so it lands on login like any unauthenticated user.
pub fn redirect_by_role(session: Option<&Session>) -> AppRoute {
    match session {
        Some(_) => AppRoute::Dashboard,
        None => AppRoute::Login,
    }
}
