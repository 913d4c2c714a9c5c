//! Hamburger side menu with the session identity and app-wide navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::format::avatar_initial;

const ENTRIES: &[(&str, &str)] = &[
    ("👤 Mi perfil", "/mi-perfil"),
    ("🤝 Amigos", "/amigos"),
    ("💬 Chat", "/chat"),
    ("📣 Chat de eventos", "/chat-eventos"),
    ("ℹ️ Información", "/informacion"),
];

/// Slide-in menu toggled by a hamburger button in the page header.
#[component]
pub fn SideMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let open = RwSignal::new(false);
    let navigate = use_navigate();

    let display_name = move || {
        session
            .get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };
    let email = move || {
        session
            .get()
            .user
            .map(|user| user.email)
            .unwrap_or_default()
    };
    let initial = move || {
        let value = session
            .get()
            .user
            .map(|user| avatar_initial(&user.name))
            .unwrap_or_default();
        if value.is_empty() { "?".to_owned() } else { value }
    };

    let on_logout = move |_| {
        open.set(false);
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                crate::util::browser::clear_session_artifacts();
                session.update(|state| {
                    state.user = None;
                    state.loading = false;
                });
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/home");
                }
            });
        }
    };

    view! {
        <div class="side-menu">
            <button
                class="side-menu__burger"
                on:click=move |_| open.update(|value| *value = !*value)
                aria-label="Abrir menú"
            >
                "☰"
            </button>
            <div
                class="side-menu__backdrop"
                class:side-menu__backdrop--open=move || open.get()
                on:click=move |_| open.set(false)
            ></div>
            <aside class="side-menu__panel" class:side-menu__panel--open=move || open.get()>
                <div class="side-menu__identity">
                    <span class="side-menu__avatar">{initial}</span>
                    <div class="side-menu__who">
                        <span class="side-menu__name">{display_name}</span>
                        <span class="side-menu__email">{email}</span>
                    </div>
                </div>
                <nav class="side-menu__entries">
                    {ENTRIES
                        .iter()
                        .map(|(label, path)| {
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    class="side-menu__entry"
                                    on:click=move |_| {
                                        open.set(false);
                                        navigate(path, NavigateOptions::default());
                                    }
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <button class="side-menu__entry side-menu__entry--logout" on:click=on_logout>
                    "🚪 Cerrar sesión"
                </button>
            </aside>
        </div>
    }
}
