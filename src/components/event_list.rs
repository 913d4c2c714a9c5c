//! Event cards for the selected group, with a detail modal and join action.

use leptos::prelude::*;

use crate::net::types::GroupEvent;
use crate::state::events::{EventsState, split_participants};
use crate::util::format::{date_line, price_label};

/// Upcoming events of the selected group.
///
/// Each card opens a modal with the full description, the participant list,
/// and a join button. The enrolled count starts from the comma-joined name
/// string and is patched from the join/refresh responses afterwards.
#[component]
pub fn EventList(events: RwSignal<EventsState>) -> impl IntoView {
    let detail = RwSignal::new(None::<GroupEvent>);
    let participants = RwSignal::new(Vec::<String>::new());
    let enrolled = RwSignal::new(0_i64);

    let open_detail = Callback::new(move |event: GroupEvent| {
        let names = split_participants(&event.participantes);
        enrolled.set(i64::try_from(names.len()).unwrap_or_default());
        participants.set(names);
        detail.set(Some(event));
    });

    let close_detail = move |_| detail.set(None);

    let refresh_participants = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(event) = detail.get_untracked() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_event_participants(event.evento_id).await {
                    Ok(list) => {
                        enrolled.set(i64::try_from(list.len()).unwrap_or_default());
                        participants.set(list.into_iter().map(|p| p.nombre).collect());
                    }
                    Err(e) => leptos::logging::warn!("participant refresh failed: {e}"),
                }
            });
        }
    };

    let join = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(event) = detail.get_untracked() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::join_event(event.evento_id).await {
                    Ok(outcome) => {
                        enrolled.set(outcome.participantes_actuales);
                        crate::util::browser::alert(&outcome.message);
                    }
                    Err(e) => crate::util::browser::alert(&e),
                }
            });
        }
    };

    view! {
        <div class="event-list">
            <h2 class="event-list__title">
                {move || {
                    let state = events.get();
                    if state.group_id.is_some() {
                        format!("Eventos de {}", state.group_name)
                    } else {
                        "Eventos".to_owned()
                    }
                }}
            </h2>
            {move || {
                let state = events.get();
                if state.group_id.is_none() {
                    return view! {
                        <div class="event-list__status">
                            "Selecciona un grupo para ver sus eventos"
                        </div>
                    }
                        .into_any();
                }
                if state.loading {
                    return view! {
                        <div class="event-list__status">"Cargando eventos..."</div>
                    }
                        .into_any();
                }
                if let Some(error) = state.error {
                    return view! {
                        <div class="event-list__status event-list__status--error">{error}</div>
                    }
                        .into_any();
                }
                if state.events.is_empty() {
                    return view! {
                        <div class="event-list__status">"No hay eventos próximos en este grupo"</div>
                    }
                        .into_any();
                }

                state
                    .events
                    .iter()
                    .map(|event| {
                        let event = event.clone();
                        let nombre = event.nombre.clone();
                        let fecha = date_line(&event.fecha_hora);
                        let lugar = event.lugar.clone();
                        let precio = price_label(event.precio);
                        view! {
                            <button
                                class="event-list__card"
                                on:click=move |_| open_detail.run(event.clone())
                            >
                                <span class="event-list__name">{nombre}</span>
                                <span class="event-list__date">{fecha}</span>
                                <span class="event-list__place">{format!("📍 {lugar}")}</span>
                                <span class="event-list__price">{precio}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
            {move || {
                let Some(event) = detail.get() else {
                    return ().into_any();
                };
                let nombre = event.nombre.clone();
                let fecha = date_line(&event.fecha_hora);
                let lugar = event.lugar.clone();
                let precio = price_label(event.precio);
                let descripcion = event.descripcion.clone();
                let coords = format!("{:.4}, {:.4}", event.latitud, event.longitud);
                view! {
                    <div class="event-modal__backdrop" on:click=close_detail>
                        <div class="event-modal" on:click=move |ev| ev.stop_propagation()>
                            <div class="event-modal__header">
                                <h3>{nombre}</h3>
                                <button
                                    class="event-modal__close"
                                    on:click=close_detail
                                    title="Cerrar"
                                >
                                    "✕"
                                </button>
                            </div>
                            <p class="event-modal__date">{fecha}</p>
                            <p class="event-modal__place">{format!("📍 {lugar}")}</p>
                            <p class="event-modal__price">{precio}</p>
                            <p class="event-modal__description">{descripcion}</p>
                            <p class="event-modal__coords">{format!("🗺️ {coords}")}</p>
                            <div class="event-modal__participants">
                                <div class="event-modal__participants-header">
                                    <span>
                                        {move || format!("Participantes ({})", enrolled.get())}
                                    </span>
                                    <button
                                        class="event-modal__refresh"
                                        on:click=refresh_participants
                                        title="Actualizar participantes"
                                    >
                                        "🔄"
                                    </button>
                                </div>
                                <ul class="event-modal__participant-list">
                                    {move || {
                                        participants
                                            .get()
                                            .into_iter()
                                            .map(|name| view! { <li>{name}</li> })
                                            .collect_view()
                                    }}
                                </ul>
                            </div>
                            <button class="event-modal__join" on:click=join>
                                "Unirme al evento"
                            </button>
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
