//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    amigos::AmigosPage, chat::ChatPage, chat_eventos::ChatEventosPage, home::HomePage,
    informacion::InformacionPage, mi_perfil::MiPerfilPage, principal::PrincipalPage,
    ver_perfil::VerPerfilPage,
};
use crate::state::session::SessionState;

/// Root application component.
///
/// Provides the session context, runs the bootstrap profile fetch, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // One profile fetch decides the session for every page; route guards
    // wait on `loading` before redirecting.
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_profile().await;
            session.update(|state| {
                state.user = user;
                state.loading = false;
            });
        });
    }

    view! {
        <Title text="Sunity"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=PrincipalPage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("principal") view=PrincipalPage/>
                <Route path=StaticSegment("amigos") view=AmigosPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
                <Route path=StaticSegment("chat-eventos") view=ChatEventosPage/>
                <Route path=StaticSegment("mi-perfil") view=MiPerfilPage/>
                <Route path=(StaticSegment("ver-perfil"), ParamSegment("id")) view=VerPerfilPage/>
                <Route path=StaticSegment("informacion") view=InformacionPage/>
            </Routes>
        </Router>
    }
}
