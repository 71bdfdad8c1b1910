//! Authentication context and hooks for the UI.
//!
//! The identity cache (`token`/`user`/`role` in browser storage) is read
//! once when the provider mounts and exposed to every page through a
//! context signal. Pages never touch storage directly; they call
//! [`sign_in`]/[`sign_out`] which write through the cache and update the
//! signal in one step.

use dioxus::prelude::*;
use store::{platform_store, Session};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the cache has been read once.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap the app with this component above the router.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Read the cached identity once on mount
    use_effect(move || {
        let session = Session::load(&platform_store());
        auth_state.set(AuthState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Persist a fresh session and publish it to the app.
pub fn sign_in(mut auth_state: Signal<AuthState>, session: Session) {
    tracing::info!("signed in as user {}", session.user_id);
    session.save(&platform_store());
    auth_state.set(AuthState {
        session: Some(session),
        loading: false,
    });
}

/// Drop the cached identity and send the user back to the login page.
pub fn sign_out(mut auth_state: Signal<AuthState>) {
    tracing::info!("signing out");
    Session::clear(&platform_store());
    auth_state.set(AuthState {
        session: None,
        loading: false,
    });
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
