//! Friendship panel: confirmed friends plus received and sent requests.
//!
//! DESIGN
//! ======
//! All three lists reload together after every action so tab counters and
//! rows never drift from the server. Rows link to the public profile view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::side_menu::SideMenu;
use crate::state::friends::{FriendsState, FriendsTab};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{avatar_initial, date_only};

/// Friends page behind `/amigos`.
#[component]
pub fn AmigosPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let friends = RwSignal::new(FriendsState::default());

    let load_all = move || {
        friends.update(|state| {
            state.loading = true;
            state.error = None;
        });
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let amigos = crate::net::api::fetch_friends().await;
            let recibidas = crate::net::api::fetch_friend_requests().await;
            let enviadas = crate::net::api::fetch_sent_requests().await;
            friends.update(|state| {
                state.loading = false;
                match (amigos, recibidas, enviadas) {
                    (Ok(amigos), Ok(recibidas), Ok(enviadas)) => {
                        state.amigos = amigos;
                        state.recibidas = recibidas;
                        state.enviadas = enviadas;
                    }
                    (amigos, recibidas, enviadas) => {
                        state.error = amigos.err().or(recibidas.err()).or(enviadas.err());
                    }
                }
            });
        });
    };
    load_all();

    let respond = move |request_id: i64, accept: bool| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::respond_friend_request(request_id, accept).await {
                crate::util::browser::alert(&e);
            }
            load_all();
        });
        #[cfg(not(feature = "csr"))]
        let _ = (request_id, accept);
    };

    let cancel = move |destinatario_id: String| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::cancel_friend_request(&destinatario_id).await {
                crate::util::browser::alert(&e);
            }
            load_all();
        });
        #[cfg(not(feature = "csr"))]
        let _ = destinatario_id;
    };

    let remove = move |google_id: String| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::remove_friend(&google_id).await {
                crate::util::browser::alert(&e);
            }
            load_all();
        });
        #[cfg(not(feature = "csr"))]
        let _ = google_id;
    };

    let tab_button = move |tab: FriendsTab, label: &'static str| {
        let count = move || match tab {
            FriendsTab::Amigos => friends.get().amigos.len(),
            FriendsTab::Recibidas => friends.get().recibidas.len(),
            FriendsTab::Enviadas => friends.get().enviadas.len(),
        };
        view! {
            <button
                class="amigos-page__tab"
                class:amigos-page__tab--active=move || friends.get().tab == tab
                on:click=move |_| friends.update(|state| state.tab = tab)
            >
                {move || format!("{label} ({})", count())}
            </button>
        }
    };

    let navigate_rows = navigate.clone();
    view! {
        <div class="amigos-page">
            <header class="page-header">
                <SideMenu />
                <h1 class="page-header__title">"Amigos"</h1>
            </header>
            <div class="amigos-page__tabs">
                {tab_button(FriendsTab::Amigos, "Amigos")}
                {tab_button(FriendsTab::Recibidas, "Recibidas")}
                {tab_button(FriendsTab::Enviadas, "Enviadas")}
            </div>
            <div class="amigos-page__list">
                {move || {
                    let state = friends.get();
                    if state.loading {
                        return view! {
                            <div class="amigos-page__status">"Cargando..."</div>
                        }
                            .into_any();
                    }
                    if let Some(error) = state.error {
                        return view! {
                            <div class="amigos-page__status amigos-page__status--error">
                                {error}
                            </div>
                        }
                            .into_any();
                    }

                    match state.tab {
                        FriendsTab::Amigos => {
                            if state.amigos.is_empty() {
                                return view! {
                                    <div class="amigos-page__status">"Aún no tienes amigos"</div>
                                }
                                    .into_any();
                            }
                            state
                                .amigos
                                .iter()
                                .map(|friend| {
                                    let profile_id = friend.google_id.clone();
                                    let remove_id = friend.google_id.clone();
                                    let nombre = friend.nombre.clone();
                                    let navigate = navigate_rows.clone();
                                    view! {
                                        <div class="friend-row">
                                            {avatar(friend.foto_perfil.clone(), &friend.nombre)}
                                            <button
                                                class="friend-row__name"
                                                on:click=move |_| {
                                                    navigate(
                                                        &format!("/ver-perfil/{profile_id}"),
                                                        NavigateOptions::default(),
                                                    );
                                                }
                                            >
                                                {nombre}
                                            </button>
                                            <button
                                                class="friend-row__action friend-row__action--danger"
                                                on:click=move |_| remove(remove_id.clone())
                                            >
                                                "❌ Eliminar"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                        FriendsTab::Recibidas => {
                            if state.recibidas.is_empty() {
                                return view! {
                                    <div class="amigos-page__status">
                                        "No tienes solicitudes pendientes"
                                    </div>
                                }
                                    .into_any();
                            }
                            state
                                .recibidas
                                .iter()
                                .map(|request| {
                                    let request_id = request.id;
                                    let profile_id = request.solicitante_id.clone();
                                    let nombre = request
                                        .nombre_solicitante
                                        .clone()
                                        .unwrap_or_else(|| request.solicitante_id.clone());
                                    let fecha = date_only(&request.fecha_solicitud);
                                    let navigate = navigate_rows.clone();
                                    view! {
                                        <div class="friend-row">
                                            {avatar(request.foto_solicitante.clone(), &nombre)}
                                            <button
                                                class="friend-row__name"
                                                on:click=move |_| {
                                                    navigate(
                                                        &format!("/ver-perfil/{profile_id}"),
                                                        NavigateOptions::default(),
                                                    );
                                                }
                                            >
                                                {nombre}
                                            </button>
                                            <span class="friend-row__date">{fecha}</span>
                                            <button
                                                class="friend-row__action"
                                                on:click=move |_| respond(request_id, true)
                                            >
                                                "✅ Aceptar"
                                            </button>
                                            <button
                                                class="friend-row__action friend-row__action--danger"
                                                on:click=move |_| respond(request_id, false)
                                            >
                                                "❌ Rechazar"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                        FriendsTab::Enviadas => {
                            if state.enviadas.is_empty() {
                                return view! {
                                    <div class="amigos-page__status">"No has enviado solicitudes"</div>
                                }
                                    .into_any();
                            }
                            state
                                .enviadas
                                .iter()
                                .map(|request| {
                                    let profile_id = request.destinatario_id.clone();
                                    let cancel_id = request.destinatario_id.clone();
                                    let nombre = request
                                        .nombre_destinatario
                                        .clone()
                                        .unwrap_or_else(|| request.destinatario_id.clone());
                                    let fecha = date_only(&request.fecha_solicitud);
                                    let navigate = navigate_rows.clone();
                                    view! {
                                        <div class="friend-row">
                                            {avatar(request.foto_destinatario.clone(), &nombre)}
                                            <button
                                                class="friend-row__name"
                                                on:click=move |_| {
                                                    navigate(
                                                        &format!("/ver-perfil/{profile_id}"),
                                                        NavigateOptions::default(),
                                                    );
                                                }
                                            >
                                                {nombre}
                                            </button>
                                            <span class="friend-row__date">{fecha}</span>
                                            <button
                                                class="friend-row__action friend-row__action--danger"
                                                on:click=move |_| cancel(cancel_id.clone())
                                            >
                                                "❌ Cancelar"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }
                }}
            </div>
        </div>
    }
}

/// Photo avatar when a URL is present, initial placeholder otherwise.
fn avatar(foto_perfil: Option<String>, nombre: &str) -> impl IntoView + use<> {
    match foto_perfil {
        Some(url) => view! { <img class="friend-row__avatar" src=url alt="" /> }.into_any(),
        None => {
            view! {
                <span class="friend-row__avatar friend-row__avatar--initial">
                    {avatar_initial(nombre)}
                </span>
            }
                .into_any()
        }
    }
}
