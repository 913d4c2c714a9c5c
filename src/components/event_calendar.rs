//! Month-grid calendar over the session user's events.
//!
//! DESIGN
//! ======
//! Six fixed Monday-first rows per month; cells outside the displayed month
//! render muted. Host and participant entries get distinct styling. The
//! detail modal joins through the same endpoint as the group browser and
//! patches occupancy in the grid and the open modal.

use chrono::Datelike;
use leptos::prelude::*;

use crate::net::types::MyEvent;
use crate::state::calendar::{CalendarState, is_host};
use crate::util::calendar_grid::{in_month, month_grid, next_month, prev_month};
use crate::util::format::{date_only, month_title, occupancy_label, price_label, time_hhmm};

const WEEKDAY_HEADERS: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

/// Calendar tab of the main page.
#[component]
pub fn EventCalendar(calendar: RwSignal<CalendarState>) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let view_month = RwSignal::new((today.year(), today.month()));
    let selected = RwSignal::new(None::<MyEvent>);

    let on_prev = move |_| view_month.update(|value| *value = prev_month(value.0, value.1));
    let on_next = move |_| view_month.update(|value| *value = next_month(value.0, value.1));
    let on_today = move |_| view_month.set((today.year(), today.month()));

    let join = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(event) = selected.get_untracked() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::join_event(event.evento_id).await {
                    Ok(outcome) => {
                        calendar.update(|state| {
                            state.patch_occupancy(
                                event.evento_id,
                                outcome.participantes_actuales,
                                outcome.max_participantes,
                            );
                        });
                        selected.update(|current| {
                            if let Some(current) = current.as_mut() {
                                if current.evento_id == event.evento_id {
                                    current.inscritos = outcome.participantes_actuales;
                                    current.max_participantes = outcome.max_participantes;
                                }
                            }
                        });
                        crate::util::browser::alert(&outcome.message);
                    }
                    Err(e) => crate::util::browser::alert(&e),
                }
            });
        }
    };

    view! {
        <div class="event-calendar">
            <div class="event-calendar__toolbar">
                <button class="event-calendar__nav" on:click=on_prev title="Mes anterior">
                    "‹"
                </button>
                <span class="event-calendar__month">
                    {move || {
                        let (year, month) = view_month.get();
                        month_title(year, month)
                    }}
                </span>
                <button class="event-calendar__nav" on:click=on_next title="Mes siguiente">
                    "›"
                </button>
                <button class="event-calendar__today" on:click=on_today>
                    "Hoy"
                </button>
            </div>
            <div class="event-calendar__weekdays">
                {WEEKDAY_HEADERS
                    .iter()
                    .map(|day| view! { <span>{*day}</span> })
                    .collect_view()}
            </div>
            <div class="event-calendar__grid">
                {move || {
                    let (year, month) = view_month.get();
                    let state = calendar.get();
                    if state.loading {
                        return view! {
                            <div class="event-calendar__status">"Cargando calendario..."</div>
                        }
                            .into_any();
                    }
                    if let Some(error) = state.error {
                        return view! {
                            <div class="event-calendar__status event-calendar__status--error">
                                {error}
                            </div>
                        }
                            .into_any();
                    }

                    month_grid(year, month)
                        .into_iter()
                        .map(|day| {
                            let muted = !in_month(day, year, month);
                            let is_today = day == today;
                            let day_events = state.events_on_day(day);
                            view! {
                                <div
                                    class="event-calendar__cell"
                                    class:event-calendar__cell--muted=muted
                                    class:event-calendar__cell--today=is_today
                                >
                                    <span class="event-calendar__day">{day.day()}</span>
                                    {day_events
                                        .into_iter()
                                        .map(|event| {
                                            let host = is_host(&event);
                                            let nombre = event.nombre.clone();
                                            let hora = time_hhmm(&event.fecha_hora);
                                            view! {
                                                <button
                                                    class="event-calendar__event"
                                                    class:event-calendar__event--host=host
                                                    title=nombre.clone()
                                                    on:click=move |_| selected.set(Some(event.clone()))
                                                >
                                                    {format!("{hora} {nombre}")}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
            {move || {
                let Some(event) = selected.get() else {
                    return ().into_any();
                };
                let nombre = event.nombre.clone();
                let fecha = date_only(&event.fecha_hora);
                let hora = time_hhmm(&event.fecha_hora);
                let lugar = event.lugar.clone();
                let precio = price_label(event.precio);
                let ocupacion = occupancy_label(event.inscritos, event.max_participantes);
                let descripcion = event.descripcion.clone();
                let coords = format!("{:.4}, {:.4}", event.latitud, event.longitud);
                let rol = if is_host(&event) { "Anfitrión" } else { "Participante" };
                view! {
                    <div class="event-modal__backdrop" on:click=move |_| selected.set(None)>
                        <div class="event-modal" on:click=move |ev| ev.stop_propagation()>
                            <div class="event-modal__header">
                                <h3>{nombre}</h3>
                                <button
                                    class="event-modal__close"
                                    on:click=move |_| selected.set(None)
                                    title="Cerrar"
                                >
                                    "✕"
                                </button>
                            </div>
                            <span class="event-modal__role">{rol}</span>
                            <p class="event-modal__date">{format!("{fecha}, {hora}")}</p>
                            <p class="event-modal__place">{format!("📍 {lugar}")}</p>
                            <p class="event-modal__price">{precio}</p>
                            <p class="event-modal__occupancy">
                                {format!("Inscritos: {ocupacion}")}
                            </p>
                            <p class="event-modal__description">{descripcion}</p>
                            <p class="event-modal__coords">{format!("🗺️ {coords}")}</p>
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
