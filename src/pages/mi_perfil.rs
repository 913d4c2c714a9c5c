//! Profile editor for the signed-in user.
//!
//! The account identity (name, email) comes from the session and is
//! read-only here; phone, region, comuna, and the photo are stored
//! per-field on the server and prefill the form on mount.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::side_menu::SideMenu;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::avatar_initial;
use crate::util::regions::{comunas_for, region_names};

/// Profile page behind `/mi-perfil`.
#[component]
pub fn MiPerfilPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let telefono = RwSignal::new(String::new());
    let region = RwSignal::new(String::new());
    let comuna = RwSignal::new(String::new());
    let photo = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    // Stored profile fields prefill the form once on mount. Region lands
    // before comuna so the dependent select has its options ready.
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            if let Some(url) = crate::net::api::fetch_profile_photo().await {
                photo.set(Some(url));
            }
            if let Some(value) = crate::net::api::fetch_profile_phone().await {
                telefono.set(value);
            }
            if let Some(value) = crate::net::api::fetch_profile_region().await {
                region.set(value);
            }
            if let Some(value) = crate::net::api::fetch_profile_comuna().await {
                comuna.set(value);
            }
        });
    }

    let on_region_change = move |ev| {
        region.set(event_target_value(&ev));
        // Comunas belong to one region; a region switch invalidates the pick.
        comuna.set(String::new());
    };

    let on_photo_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_profile_photo(&file).await {
                    Ok(Some(url)) => photo.set(Some(url)),
                    Ok(None) => {
                        // Some responses omit the URL; the stored photo is
                        // authoritative either way.
                        if let Some(url) = crate::net::api::fetch_profile_photo().await {
                            photo.set(Some(url));
                        }
                    }
                    Err(e) => crate::util::browser::alert(&e),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let navigate_save = navigate.clone();
    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        #[cfg(feature = "csr")]
        {
            let navigate_save = navigate_save.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::update_profile(
                    &telefono.get_untracked(),
                    &region.get_untracked(),
                    &comuna.get_untracked(),
                )
                .await;
                saving.set(false);
                match result {
                    Ok(()) => {
                        crate::util::browser::alert("Perfil actualizado");
                        navigate_save("/principal", NavigateOptions::default());
                    }
                    Err(e) => crate::util::browser::alert(&e),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = &navigate_save;
    };

    let navigate_back = navigate.clone();
    let on_back = move |_| navigate_back("/principal", NavigateOptions::default());

    let display_photo = move || {
        photo
            .get()
            .or_else(|| session.get().user.and_then(|user| user.picture))
    };
    let display_name = move || {
        session
            .get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };
    let display_email = move || {
        session
            .get()
            .user
            .map(|user| user.email)
            .unwrap_or_default()
    };

    view! {
        <div class="perfil-page">
            <header class="page-header">
                <SideMenu />
                <h1 class="page-header__title">"Mi perfil"</h1>
            </header>
            <main class="perfil-page__card">
                <div class="perfil-page__identity">
                    {move || match display_photo() {
                        Some(url) => {
                            view! { <img class="perfil-page__photo" src=url alt="" /> }
                                .into_any()
                        }
                        None => {
                            view! {
                                <span class="perfil-page__photo perfil-page__photo--initial">
                                    {avatar_initial(&display_name())}
                                </span>
                            }
                                .into_any()
                        }
                    }}
                    <div class="perfil-page__who">
                        <span class="perfil-page__name">{display_name}</span>
                        <span class="perfil-page__email">{display_email}</span>
                    </div>
                </div>

                <label class="perfil-page__field">
                    <span>"Foto de perfil"</span>
                    <input type="file" accept="image/*" on:change=on_photo_change />
                </label>

                <label class="perfil-page__field">
                    <span>"Teléfono"</span>
                    <input
                        type="tel"
                        placeholder="+56 9 1234 5678"
                        prop:value=move || telefono.get()
                        on:input=move |ev| telefono.set(event_target_value(&ev))
                    />
                </label>

                <label class="perfil-page__field">
                    <span>"Región"</span>
                    <select prop:value=move || region.get() on:change=on_region_change>
                        <option value="">"Selecciona una región"</option>
                        {region_names()
                            .into_iter()
                            .map(|name| view! { <option value=name>{name}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="perfil-page__field">
                    <span>"Comuna"</span>
                    <select
                        prop:value=move || comuna.get()
                        on:change=move |ev| comuna.set(event_target_value(&ev))
                        disabled=move || region.get().is_empty()
                    >
                        <option value="">"Selecciona una comuna"</option>
                        {move || {
                            comunas_for(&region.get())
                                .iter()
                                .map(|name| view! { <option value=*name>{*name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>

                <div class="perfil-page__actions">
                    <button
                        class="perfil-page__save"
                        on:click=on_save
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Guardando..." } else { "Guardar cambios" }}
                    </button>
                    <button class="perfil-page__back" on:click=on_back>
                        "Volver"
                    </button>
                </div>
            </main>
        </div>
    }
}
