//! Event chat page: one live socket per selected event.
//!
//! DESIGN
//! ======
//! Selecting an event loads its history over HTTP and opens a WebSocket for
//! live frames. The previous event's socket is closed before the next one
//! opens, and the page closes the open socket on unmount. Sender display
//! names resolve lazily through the profile endpoint and are cached for the
//! page lifetime.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::side_menu::SideMenu;
use crate::net::event_ws::EventSocket;
use crate::state::event_chat::EventChatState;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{date_only, time_hhmm};

/// Live event chat page behind `/chat-eventos`.
#[component]
pub fn ChatEventosPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let chat = RwSignal::new(EventChatState::default());
    let composer = RwSignal::new(String::new());
    let socket = RwSignal::new(None::<EventSocket>);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Event sidebar loads once on mount.
    #[cfg(feature = "csr")]
    {
        chat.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_events().await {
                Ok(list) => chat.update(|state| {
                    state.events = list;
                    state.loading = false;
                }),
                Err(e) => chat.update(|state| {
                    state.loading = false;
                    state.error = Some(e);
                }),
            }
        });
    }

    on_cleanup(move || {
        if let Some(handle) = socket.try_get_untracked().flatten() {
            handle.close();
        }
    });

    let select_event = Callback::new(move |event_id: i64| {
        if let Some(previous) = socket.get_untracked() {
            previous.close();
        }
        socket.set(None);
        chat.update(|state| {
            state.selected = Some(event_id);
            state.messages.clear();
        });
        composer.set(String::new());

        #[cfg(feature = "csr")]
        {
            // Seed the cache with the raw id so a sender is fetched at most
            // once; the profile response overwrites it.
            let resolve_senders = move || {
                let own = session
                    .get_untracked()
                    .user
                    .map(|user| user.id)
                    .unwrap_or_default();
                for sender_id in chat.get_untracked().unresolved_senders(&own) {
                    chat.update(|state| state.cache_sender(&sender_id, &sender_id));
                    leptos::task::spawn_local(async move {
                        if let Some(profile) =
                            crate::net::api::fetch_public_profile(&sender_id).await
                        {
                            chat.update(|state| {
                                state.cache_sender(&sender_id, &profile.nombre);
                            });
                        }
                    });
                }
            };

            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_event_chat_history(event_id).await {
                    Ok(history) => {
                        chat.update(|state| {
                            if state.selected == Some(event_id) {
                                state.messages = history;
                            }
                        });
                        resolve_senders();
                    }
                    Err(e) => leptos::logging::warn!("event chat history failed: {e}"),
                }
            });

            // Frames from a socket whose event is no longer selected are
            // dropped; the old connection may still be winding down.
            let handle = EventSocket::open(event_id, move |message| {
                chat.update(|state| {
                    if state.selected == Some(event_id) {
                        state.messages.push(message);
                    }
                });
                resolve_senders();
            });
            socket.set(Some(handle));
        }
    });

    let do_send = move || {
        let text = composer.get().trim().to_owned();
        if text.is_empty() {
            return;
        }
        let Some(handle) = socket.get_untracked() else {
            return;
        };
        if handle.send_text(&text) {
            composer.set(String::new());
        } else {
            crate::util::browser::alert("No se pudo enviar el mensaje");
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    // Stick to the bottom as messages land.
    Effect::new(move || {
        let _ = chat.get().messages.len();
        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let own_id = move || {
        session
            .get()
            .user
            .map(|user| user.id)
            .unwrap_or_default()
    };

    let can_send =
        move || !composer.get().trim().is_empty() && chat.get().selected.is_some();

    view! {
        <div class="chat-eventos-page">
            <header class="page-header">
                <SideMenu />
                <h1 class="page-header__title">"Chat de eventos"</h1>
            </header>
            <div class="chat-eventos-page__layout">
                <aside class="chat-eventos-page__sidebar">
                    {move || {
                        let state = chat.get();
                        if state.loading {
                            return view! {
                                <div class="chat-eventos-page__status">"Cargando eventos..."</div>
                            }
                                .into_any();
                        }
                        if let Some(error) = state.error {
                            return view! {
                                <div class="chat-eventos-page__status chat-eventos-page__status--error">
                                    {error}
                                </div>
                            }
                                .into_any();
                        }
                        if state.events.is_empty() {
                            return view! {
                                <div class="chat-eventos-page__status">
                                    "No participas en ningún evento"
                                </div>
                            }
                                .into_any();
                        }

                        state
                            .events
                            .iter()
                            .map(|event| {
                                let event_id = event.evento_id;
                                let active = state.selected == Some(event_id);
                                let is_host = event.tipo == "anfitrion";
                                let nombre = event.nombre.clone();
                                let fecha = date_only(&event.fecha_hora);
                                view! {
                                    <button
                                        class="chat-eventos-page__event"
                                        class:chat-eventos-page__event--active=active
                                        on:click=move |_| select_event.run(event_id)
                                    >
                                        <span class="chat-eventos-page__event-name">{nombre}</span>
                                        <span class="chat-eventos-page__event-date">{fecha}</span>
                                        <span
                                            class="chat-eventos-page__event-tag"
                                            class:chat-eventos-page__event-tag--host=is_host
                                        >
                                            {if is_host { "Anfitrión" } else { "Participante" }}
                                        </span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </aside>
                <section class="chat-eventos-page__conversation">
                    <div class="chat-eventos-page__conversation-header">
                        {move || {
                            chat.get()
                                .selected_event()
                                .map(|event| event.nombre.clone())
                                .unwrap_or_else(|| "Chat de eventos".to_owned())
                        }}
                    </div>
                    <div class="chat-eventos-page__messages" node_ref=messages_ref>
                        {move || {
                            let state = chat.get();
                            let own = own_id();
                            if state.selected.is_none() {
                                return view! {
                                    <div class="chat-eventos-page__status">
                                        "Selecciona un evento para abrir su chat"
                                    </div>
                                }
                                    .into_any();
                            }
                            if state.messages.is_empty() {
                                return view! {
                                    <div class="chat-eventos-page__status">
                                        "No hay mensajes todavía"
                                    </div>
                                }
                                    .into_any();
                            }

                            state
                                .messages
                                .iter()
                                .map(|message| {
                                    let own_message = message.remitente_id == own;
                                    let sender = (!own_message).then(|| {
                                        state
                                            .sender_name(&message.remitente_id)
                                            .unwrap_or(message.remitente_id.as_str())
                                            .to_owned()
                                    });
                                    let texto = message.mensaje.clone();
                                    let hora = time_hhmm(&message.fecha_envio);
                                    view! {
                                        <div
                                            class="chat-bubble"
                                            class:chat-bubble--own=own_message
                                        >
                                            {sender
                                                .map(|name| {
                                                    view! {
                                                        <span class="chat-bubble__sender">{name}</span>
                                                    }
                                                })}
                                            <span class="chat-bubble__text">{texto}</span>
                                            <span class="chat-bubble__time">{hora}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </div>
                    <div class="chat-eventos-page__composer">
                        <input
                            class="chat-eventos-page__input"
                            type="text"
                            placeholder="Escribe un mensaje..."
                            prop:value=move || composer.get()
                            on:input=move |ev| composer.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="chat-eventos-page__send"
                            on:click=move |_| do_send()
                            disabled=move || !can_send()
                        >
                            "Enviar"
                        </button>
                    </div>
                </section>
            </div>
        </div>
    }
}
