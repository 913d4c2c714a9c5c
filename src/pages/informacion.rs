//! Static information page about the application.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::side_menu::SideMenu;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Information page behind `/informacion`.
#[component]
pub fn InformacionPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let navigate_back = navigate.clone();
    let on_back = move |_| navigate_back("/principal", NavigateOptions::default());

    view! {
        <div class="informacion-page">
            <header class="page-header">
                <SideMenu />
                <h1 class="page-header__title">"Información"</h1>
            </header>
            <main class="informacion-page__card">
                <h2>"¿Qué es Sunity?"</h2>
                <p>
                    "Sunity es una plataforma para organizar y unirse a eventos "
                    "deportivos. Explora los grupos por deporte, revisa los eventos "
                    "próximos y súmate a los que te interesen."
                </p>
                <h2>"Eventos"</h2>
                <p>
                    "Cualquier persona puede crear un evento: elige el deporte, el "
                    "lugar y la fecha, define el precio y el cupo, y aparecerá en el "
                    "grupo correspondiente. Los eventos en los que participas se "
                    "muestran en tu calendario."
                </p>
                <h2>"Amigos y chat"</h2>
                <p>
                    "Envía solicitudes de amistad desde el perfil de otros usuarios. "
                    "Con tus amigos puedes conversar por chat directo, y cada evento "
                    "tiene su propia sala para coordinar a los participantes."
                </p>
                <h2>"Calificaciones"</h2>
                <p>
                    "Después de cada evento los participantes pueden calificarse "
                    "entre sí. Las calificaciones aparecen en el perfil público de "
                    "cada usuario."
                </p>
                <button class="informacion-page__back" on:click=on_back>
                    "Volver"
                </button>
            </main>
        </div>
    }
}
