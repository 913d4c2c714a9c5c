//! Public profile viewer with the friendship action button.
//!
//! ARCHITECTURE
//! ============
//! The route carries the viewed user's id. Profile, relationship state, and
//! ratings load per id; route changes do not unmount this component, so the
//! loader keys on the previous id and drops responses that arrive for an id
//! the user has already navigated away from.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::side_menu::SideMenu;
use crate::net::types::{PublicProfile, RatingsSummary};
use crate::state::friends::FriendshipStatus;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{avatar_initial, date_only};

/// Profile viewer behind `/ver-perfil/:id`.
#[component]
pub fn VerPerfilPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let params = use_params_map();
    let profile_id = move || params.read().get("id").unwrap_or_default();

    let last_loaded_id = RwSignal::new(None::<String>);
    let profile = RwSignal::new(None::<PublicProfile>);
    let status = RwSignal::new(None::<FriendshipStatus>);
    let ratings = RwSignal::new(None::<RatingsSummary>);
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);

    // Reload everything when the route id changes.
    Effect::new(move || {
        let next_id = profile_id();
        if next_id.is_empty() {
            return;
        }
        if last_loaded_id.get_untracked().as_deref() == Some(next_id.as_str()) {
            return;
        }
        last_loaded_id.set(Some(next_id.clone()));
        profile.set(None);
        status.set(None);
        ratings.set(None);
        loading.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let still_current = {
                let next_id = next_id.clone();
                move || last_loaded_id.get_untracked().as_deref() == Some(next_id.as_str())
            };

            let fetched = crate::net::api::fetch_public_profile(&next_id).await;
            if !still_current() {
                return;
            }
            loading.set(false);
            profile.set(fetched);

            if let Some(estado) = crate::net::api::fetch_friendship_state(&next_id).await {
                if still_current() {
                    status.set(FriendshipStatus::from_estado(&estado));
                }
            }
            if let Some(summary) = crate::net::api::fetch_ratings(&next_id).await {
                if still_current() {
                    ratings.set(Some(summary));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = next_id;
    });

    let on_action = move |_| {
        let Some(current) = status.get_untracked() else {
            return;
        };
        if !current.action_enabled() || busy.get_untracked() {
            return;
        }
        let Some(target_id) = last_loaded_id.get_untracked() else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = match current {
                FriendshipStatus::None => {
                    crate::net::api::send_friend_request(&target_id).await
                }
                FriendshipStatus::RequestSent => {
                    crate::net::api::cancel_friend_request(&target_id).await
                }
                FriendshipStatus::RequestReceived => {
                    crate::net::api::accept_friend_request_from(&target_id).await
                }
                FriendshipStatus::Friends => Ok(()),
            };
            busy.set(false);
            match result {
                Ok(()) => status.set(Some(current.after_action())),
                Err(e) => crate::util::browser::alert(&e),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = target_id;
            busy.set(false);
        }
    };

    let navigate_back = navigate.clone();
    let on_back = move |_| navigate_back("/amigos", NavigateOptions::default());

    view! {
        <div class="ver-perfil-page">
            <header class="page-header">
                <SideMenu />
                <h1 class="page-header__title">"Perfil"</h1>
            </header>
            <main class="ver-perfil-page__card">
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="ver-perfil-page__status">"Cargando perfil..."</div>
                        }
                            .into_any();
                    }
                    let Some(user) = profile.get() else {
                        return view! {
                            <div class="ver-perfil-page__status">
                                "No se encontró el usuario"
                            </div>
                        }
                            .into_any();
                    };

                    let photo_view = match user.foto_perfil.clone() {
                        Some(url) => {
                            view! { <img class="ver-perfil-page__photo" src=url alt="" /> }
                                .into_any()
                        }
                        None => {
                            view! {
                                <span class="ver-perfil-page__photo ver-perfil-page__photo--initial">
                                    {avatar_initial(&user.nombre)}
                                </span>
                            }
                                .into_any()
                        }
                    };
                    let lugar = match (user.region.clone(), user.comuna.clone()) {
                        (Some(region), Some(comuna)) => Some(format!("{comuna}, {region}")),
                        (Some(region), None) => Some(region),
                        (None, Some(comuna)) => Some(comuna),
                        (None, None) => None,
                    };
                    let registro = user
                        .fecha_registro
                        .as_deref()
                        .map(|fecha| format!("Miembro desde {}", date_only(fecha)));
                    let estudios = match (
                        user.universidad_o_instituto.clone(),
                        user.carrera.clone(),
                    ) {
                        (Some(lugar), Some(carrera)) => Some(format!("{carrera}, {lugar}")),
                        (Some(lugar), None) => Some(lugar),
                        (None, Some(carrera)) => Some(carrera),
                        (None, None) => None,
                    };

                    view! {
                        <div class="ver-perfil-page__identity">
                            {photo_view}
                            <div class="ver-perfil-page__who">
                                <span class="ver-perfil-page__name">{user.nombre.clone()}</span>
                                <span class="ver-perfil-page__email">{user.email.clone()}</span>
                            </div>
                        </div>
                        <ul class="ver-perfil-page__facts">
                            {lugar
                                .map(|text| view! { <li>"📍 " {text}</li> })}
                            {user
                                .edad
                                .map(|edad| view! { <li>"🎂 " {edad} " años"</li> })}
                            {user
                                .deporte_favorito
                                .clone()
                                .map(|deporte| view! { <li>"🏅 " {deporte}</li> })}
                            {estudios.map(|text| view! { <li>"🎓 " {text}</li> })}
                            {registro.map(|text| view! { <li>"🗓️ " {text}</li> })}
                        </ul>
                        {user
                            .descripcion
                            .clone()
                            .map(|texto| {
                                view! { <p class="ver-perfil-page__description">{texto}</p> }
                            })}
                    }
                        .into_any()
                }}

                {move || {
                    status
                        .get()
                        .map(|current| {
                            view! {
                                <button
                                    class="ver-perfil-page__action"
                                    on:click=on_action
                                    disabled=move || busy.get() || !current.action_enabled()
                                >
                                    {current.action_label()}
                                </button>
                            }
                        })
                }}

                <section class="ver-perfil-page__ratings">
                    <h2>"Calificaciones"</h2>
                    {move || {
                        let Some(summary) = ratings.get() else {
                            return view! {
                                <div class="ver-perfil-page__status">"Sin calificaciones"</div>
                            }
                                .into_any();
                        };
                        if summary.total_calificaciones == 0 {
                            return view! {
                                <div class="ver-perfil-page__status">"Sin calificaciones"</div>
                            }
                                .into_any();
                        }

                        let promedio = format!("{:.1}", summary.promedio);
                        let total = summary.total_calificaciones;
                        view! {
                            <div class="ver-perfil-page__ratings-summary">
                                "⭐ " {promedio} " · " {total} " calificaciones"
                            </div>
                            <ul class="ver-perfil-page__rating-list">
                                {summary
                                    .calificaciones
                                    .iter()
                                    .map(|rating| {
                                        let stars = "⭐"
                                            .repeat(usize::try_from(rating.estrellas).unwrap_or(0));
                                        let evaluador = rating.evaluador_nombre.clone();
                                        let fecha = date_only(&rating.fecha_calificacion);
                                        let comentario = rating.comentario.clone();
                                        view! {
                                            <li class="ver-perfil-page__rating">
                                                <span class="ver-perfil-page__rating-stars">
                                                    {stars}
                                                </span>
                                                <span class="ver-perfil-page__rating-author">
                                                    {evaluador} " · " {fecha}
                                                </span>
                                                {comentario
                                                    .map(|texto| {
                                                        view! {
                                                            <p class="ver-perfil-page__rating-comment">
                                                                {texto}
                                                            </p>
                                                        }
                                                    })}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }}
                </section>

                <button class="ver-perfil-page__back" on:click=on_back>
                    "Volver"
                </button>
            </main>
        </div>
    }
}
