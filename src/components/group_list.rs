//! Card list for the sport group catalog.

use leptos::prelude::*;

use crate::net::types::Group;
use crate::state::groups::{GroupsState, sport_emoji};

/// Clickable group cards with loading, error, and empty states.
#[component]
pub fn GroupList(groups: RwSignal<GroupsState>, on_select: Callback<Group>) -> impl IntoView {
    view! {
        <div class="group-list">
            {move || {
                let state = groups.get();
                if state.loading {
                    return view! {
                        <div class="group-list__status">"Cargando grupos..."</div>
                    }
                        .into_any();
                }
                if let Some(error) = state.error {
                    return view! {
                        <div class="group-list__status group-list__status--error">{error}</div>
                    }
                        .into_any();
                }
                if state.groups.is_empty() {
                    return view! {
                        <div class="group-list__status">"No hay grupos disponibles"</div>
                    }
                        .into_any();
                }

                state
                    .groups
                    .iter()
                    .map(|group| {
                        let group = group.clone();
                        let emoji = sport_emoji(&group.nombre);
                        let nombre = group.nombre.clone();
                        let descripcion = group.descripcion.clone();
                        view! {
                            <button
                                class="group-list__card"
                                on:click=move |_| on_select.run(group.clone())
                            >
                                <span class="group-list__emoji">{emoji}</span>
                                <span class="group-list__text">
                                    <span class="group-list__name">{nombre}</span>
                                    <span class="group-list__description">{descripcion}</span>
                                </span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
