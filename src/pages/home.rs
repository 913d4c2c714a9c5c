//! Login page embedding the Google Identity Services button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

const BUTTON_CONTAINER_ID: &str = "google-signin";

/// Entry screen. A successful credential exchange routes first-time users to
/// profile setup and everyone else to the main page.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let info = RwSignal::new(String::new());
    // Set once a credential exchange starts, so the skip-login redirect
    // below cannot override the first-login route to profile setup.
    let exchanging = RwSignal::new(false);
    let navigate = use_navigate();

    // Already signed in: skip the login screen.
    let navigate_session = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !exchanging.get_untracked() && !state.loading && state.user.is_some() {
            navigate_session("/principal", NavigateOptions::default());
        }
    });

    let navigate_login = navigate.clone();
    Effect::new(move || {
        let navigate_login = navigate_login.clone();
        crate::util::google_identity::mount_button(BUTTON_CONTAINER_ID, move |credential| {
            exchanging.set(true);
            #[cfg(feature = "csr")]
            {
                let navigate_login = navigate_login.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::login_google(&credential).await {
                        Ok(login) => {
                            let first_login = login.first_login;
                            session.update(|state| {
                                state.user = Some(login.user);
                                state.loading = false;
                            });
                            let target = if first_login { "/mi-perfil" } else { "/principal" };
                            navigate_login(target, NavigateOptions::default());
                        }
                        Err(e) => {
                            exchanging.set(false);
                            info.set(format!("No se pudo iniciar sesión: {e}"));
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (&credential, &navigate_login);
        });
    });

    view! {
        <div class="home-page">
            <div class="home-card">
                <h1 class="home-card__title">"Sunity"</h1>
                <p class="home-card__subtitle">"Organiza y únete a eventos deportivos"</p>
                <div class="home-card__google" id=BUTTON_CONTAINER_ID></div>
                <Show when=move || !info.get().is_empty()>
                    <p class="home-card__message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
