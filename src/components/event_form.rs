//! Event creation form with client-side validation and status banners.
//!
//! DESIGN
//! ======
//! Validation failures render an inline warning banner instead of an alert;
//! the server's rejection message lands in an error banner. Banners clear on
//! their own after a few seconds unless a newer one replaced them.

#[cfg(test)]
#[path = "event_form_test.rs"]
mod event_form_test;

use chrono::NaiveDateTime;
use leptos::prelude::*;

use crate::net::types::NewEvent;

/// Static group catalog backing the group selector.
const GROUP_OPTIONS: &[(i64, &str)] = &[
    (1, "Básquetbol"),
    (2, "Fútbol"),
    (3, "Padel"),
    (4, "Running"),
    (5, "Tenis"),
    (6, "Voleibol"),
];

const MIN_LEAD_HOURS: i64 = 4;
const MAX_PRICE: i64 = 10_000;
const BANNER_SECS: u64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BannerKind {
    Success,
    Warning,
    Error,
}

/// Parse the coordinate pair entered for the venue.
fn validate_coordinates(latitud: &str, longitud: &str) -> Result<(f64, f64), String> {
    let parsed_lat = latitud.trim().parse::<f64>();
    let parsed_lng = longitud.trim().parse::<f64>();
    match (parsed_lat, parsed_lng) {
        (Ok(lat), Ok(lng)) => Ok((lat, lng)),
        _ => Err("Ingresa las coordenadas del lugar".to_owned()),
    }
}

fn validate_price(precio: i64) -> Result<(), String> {
    if (0..=MAX_PRICE).contains(&precio) {
        Ok(())
    } else {
        Err(format!("El precio debe estar entre $0 y ${MAX_PRICE}"))
    }
}

/// Require the start to sit at least the lead window past `now`.
fn validate_start_time(value: &str, now: NaiveDateTime) -> Result<(), String> {
    let Some(start) = crate::util::format::parse_timestamp(value) else {
        return Err("Ingresa la fecha y hora del evento".to_owned());
    };
    let threshold = now.checked_add_signed(chrono::Duration::hours(MIN_LEAD_HOURS));
    match threshold {
        Some(threshold) if start >= threshold => Ok(()),
        _ => Err(format!(
            "El evento debe crearse con al menos {MIN_LEAD_HOURS} horas de anticipación"
        )),
    }
}

fn clamp_max_participants(value: i64) -> i64 {
    value.clamp(1, 100)
}

/// Form for `POST /eventos`, hosted by the main page's create tab.
#[component]
pub fn EventForm() -> impl IntoView {
    let nombre = RwSignal::new(String::new());
    let descripcion = RwSignal::new(String::new());
    let fecha_hora = RwSignal::new(String::new());
    let lugar = RwSignal::new(String::new());
    let max_participantes = RwSignal::new("10".to_owned());
    let grupo_id = RwSignal::new("1".to_owned());
    let precio = RwSignal::new("0".to_owned());
    let latitud = RwSignal::new(String::new());
    let longitud = RwSignal::new(String::new());

    let banner = RwSignal::new(None::<(BannerKind, String)>);
    let banner_generation = RwSignal::new(0_u32);

    let show_banner = move |kind: BannerKind, text: String| {
        let generation = banner_generation.get_untracked().wrapping_add(1);
        banner_generation.set(generation);
        banner.set(Some((kind, text)));
        // Auto-clear, unless a newer banner took over in the meantime.
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(BANNER_SECS)).await;
            if banner_generation.get_untracked() == generation {
                banner.set(None);
            }
        });
    };

    let reset = move || {
        nombre.set(String::new());
        descripcion.set(String::new());
        fecha_hora.set(String::new());
        lugar.set(String::new());
        max_participantes.set("10".to_owned());
        grupo_id.set("1".to_owned());
        precio.set("0".to_owned());
        latitud.set(String::new());
        longitud.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let nombre_value = nombre.get().trim().to_owned();
        let lugar_value = lugar.get().trim().to_owned();
        if nombre_value.is_empty() || lugar_value.is_empty() {
            show_banner(
                BannerKind::Warning,
                "Completa el nombre y el lugar del evento".to_owned(),
            );
            return;
        }
        let (lat, lng) = match validate_coordinates(&latitud.get(), &longitud.get()) {
            Ok(coords) => coords,
            Err(message) => {
                show_banner(BannerKind::Warning, message);
                return;
            }
        };
        let precio_value = precio.get().trim().parse::<i64>().unwrap_or(0);
        if let Err(message) = validate_price(precio_value) {
            show_banner(BannerKind::Warning, message);
            return;
        }
        let fecha_value = fecha_hora.get();
        if let Err(message) = validate_start_time(&fecha_value, chrono::Local::now().naive_local())
        {
            show_banner(BannerKind::Warning, message);
            return;
        }

        let event = NewEvent {
            nombre: nombre_value,
            descripcion: descripcion.get().trim().to_owned(),
            fecha_hora: fecha_value,
            lugar: lugar_value,
            max_participantes: clamp_max_participants(
                max_participantes.get().trim().parse().unwrap_or(10),
            ),
            grupo_id: grupo_id.get().parse().unwrap_or(1),
            precio: precio_value,
            latitud: lat,
            longitud: lng,
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_event(&event).await {
                Ok(()) => {
                    reset();
                    show_banner(BannerKind::Success, "Evento creado con éxito".to_owned());
                }
                Err(e) => show_banner(BannerKind::Error, e),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = event;
    };

    view! {
        <form class="event-form" on:submit=on_submit>
            <h2 class="event-form__title">"Crear evento"</h2>
            <Show when=move || banner.get().is_some()>
                <div
                    class="event-form__banner"
                    class:event-form__banner--success=move || {
                        matches!(banner.get(), Some((BannerKind::Success, _)))
                    }
                    class:event-form__banner--warning=move || {
                        matches!(banner.get(), Some((BannerKind::Warning, _)))
                    }
                    class:event-form__banner--error=move || {
                        matches!(banner.get(), Some((BannerKind::Error, _)))
                    }
                >
                    {move || banner.get().map(|(_, text)| text).unwrap_or_default()}
                </div>
            </Show>
            <label class="event-form__field">
                "Nombre"
                <input
                    class="event-form__input"
                    type="text"
                    required
                    prop:value=move || nombre.get()
                    on:input=move |ev| nombre.set(event_target_value(&ev))
                />
            </label>
            <label class="event-form__field">
                "Descripción"
                <textarea
                    class="event-form__input"
                    prop:value=move || descripcion.get()
                    on:input=move |ev| descripcion.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="event-form__field">
                "Fecha y hora"
                <input
                    class="event-form__input"
                    type="datetime-local"
                    required
                    prop:value=move || fecha_hora.get()
                    on:input=move |ev| fecha_hora.set(event_target_value(&ev))
                />
            </label>
            <label class="event-form__field">
                "Lugar"
                <input
                    class="event-form__input"
                    type="text"
                    required
                    prop:value=move || lugar.get()
                    on:input=move |ev| lugar.set(event_target_value(&ev))
                />
            </label>
            <label class="event-form__field">
                "Grupo"
                <select
                    class="event-form__input"
                    prop:value=move || grupo_id.get()
                    on:change=move |ev| grupo_id.set(event_target_value(&ev))
                >
                    {GROUP_OPTIONS
                        .iter()
                        .map(|(id, name)| {
                            view! { <option value=id.to_string()>{*name}</option> }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="event-form__field">
                "Máximo de participantes"
                <input
                    class="event-form__input"
                    type="number"
                    min="1"
                    max="100"
                    prop:value=move || max_participantes.get()
                    on:input=move |ev| max_participantes.set(event_target_value(&ev))
                />
            </label>
            <label class="event-form__field">
                "Precio"
                <input
                    class="event-form__input"
                    type="number"
                    min="0"
                    max="10000"
                    step="100"
                    prop:value=move || precio.get()
                    on:input=move |ev| precio.set(event_target_value(&ev))
                />
            </label>
            <div class="event-form__coords">
                <label class="event-form__field">
                    "Latitud"
                    <input
                        class="event-form__input"
                        type="text"
                        placeholder="-33.4489"
                        prop:value=move || latitud.get()
                        on:input=move |ev| latitud.set(event_target_value(&ev))
                    />
                </label>
                <label class="event-form__field">
                    "Longitud"
                    <input
                        class="event-form__input"
                        type="text"
                        placeholder="-70.6693"
                        prop:value=move || longitud.get()
                        on:input=move |ev| longitud.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <div class="event-form__actions">
                <button class="event-form__submit" type="submit">
                    "Crear evento"
                </button>
                <button class="event-form__clear" type="button" on:click=move |_| reset()>
                    "Limpiar formulario"
                </button>
            </div>
        </form>
    }
}
