//! Friend chat page with a polled conversation view.
//!
//! ARCHITECTURE
//! ============
//! One poll loop runs for the page lifetime; each tick refetches the open
//! conversation's history unless the user is typing. The fetched list only
//! replaces the displayed one when it differs, and a response for a
//! conversation that is no longer selected is dropped.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::side_menu::SideMenu;
use crate::net::types::Friend;
use crate::state::chat::{FriendChatState, is_own_message};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{avatar_initial, time_hhmm};

const POLL_MILLIS: u64 = 2000;

/// Direct-message page behind `/chat`.
#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let chat = RwSignal::new(FriendChatState::default());
    let composer = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Conversation sidebar loads once on mount.
    #[cfg(feature = "csr")]
    {
        chat.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_friends().await {
                Ok(list) => chat.update(|state| {
                    state.friends = list;
                    state.loading = false;
                }),
                Err(e) => chat.update(|state| {
                    state.loading = false;
                    state.error = Some(e);
                }),
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_MILLIS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let state = chat.get_untracked();
                if state.composing {
                    continue;
                }
                let Some(otro_id) = state.selected_id().map(ToOwned::to_owned) else {
                    continue;
                };
                if let Ok(fetched) = crate::net::api::fetch_chat_history(&otro_id).await {
                    chat.update(|state| {
                        if state.selected_id() == Some(otro_id.as_str()) {
                            state.apply_history(fetched);
                        }
                    });
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let select_friend = Callback::new(move |friend: Friend| {
        let otro_id = friend.google_id.clone();
        chat.update(|state| {
            state.selected = Some(friend);
            state.messages.clear();
            state.composing = false;
        });
        composer.set(String::new());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_chat_history(&otro_id).await {
                Ok(fetched) => chat.update(|state| {
                    if state.selected_id() == Some(otro_id.as_str()) {
                        state.apply_history(fetched);
                    }
                }),
                Err(e) => leptos::logging::warn!("chat history failed: {e}"),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = otro_id;
    });

    let do_send = move || {
        let text = composer.get().trim().to_owned();
        if text.is_empty() {
            return;
        }
        let Some(otro_id) = chat.get_untracked().selected_id().map(ToOwned::to_owned) else {
            return;
        };
        composer.set(String::new());
        chat.update(|state| state.composing = false);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::send_friend_message(&otro_id, &text).await {
                crate::util::browser::alert(&e);
                return;
            }
            // Refetch right away so the sent message shows without waiting
            // for the next tick.
            if let Ok(fetched) = crate::net::api::fetch_chat_history(&otro_id).await {
                chat.update(|state| {
                    if state.selected_id() == Some(otro_id.as_str()) {
                        state.apply_history(fetched);
                    }
                });
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (otro_id, text);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        chat.update(|state| state.composing = !value.trim().is_empty());
        composer.set(value);
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
        <div class="chat-page">
            <header class="page-header">
                <SideMenu />
                <h1 class="page-header__title">"Chat"</h1>
            </header>
            <div class="chat-page__layout">
                <aside class="chat-page__sidebar">
                    {move || {
                        let state = chat.get();
                        if state.loading {
                            return view! {
                                <div class="chat-page__status">"Cargando amigos..."</div>
                            }
                                .into_any();
                        }
                        if let Some(error) = state.error {
                            return view! {
                                <div class="chat-page__status chat-page__status--error">
                                    {error}
                                </div>
                            }
                                .into_any();
                        }
                        if state.friends.is_empty() {
                            return view! {
                                <div class="chat-page__status">"Aún no tienes amigos"</div>
                            }
                                .into_any();
                        }

                        state
                            .friends
                            .iter()
                            .map(|friend| {
                                let active =
                                    state.selected_id() == Some(friend.google_id.as_str());
                                let avatar_view = match friend.foto_perfil.clone() {
                                    Some(url) => {
                                        view! {
                                            <img class="chat-page__avatar" src=url alt="" />
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! {
                                            <span class="chat-page__avatar chat-page__avatar--initial">
                                                {avatar_initial(&friend.nombre)}
                                            </span>
                                        }
                                            .into_any()
                                    }
                                };
                                let friend = friend.clone();
                                let nombre = friend.nombre.clone();
                                view! {
                                    <button
                                        class="chat-page__friend"
                                        class:chat-page__friend--active=active
                                        on:click=move |_| select_friend.run(friend.clone())
                                    >
                                        {avatar_view}
                                        <span class="chat-page__friend-name">{nombre}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </aside>
                <section class="chat-page__conversation">
                    <div class="chat-page__conversation-header">
                        {move || {
                            chat.get()
                                .selected
                                .map(|friend| friend.nombre)
                                .unwrap_or_else(|| "Chat".to_owned())
                        }}
                    </div>
                    <div class="chat-page__messages" node_ref=messages_ref>
                        {move || {
                            let state = chat.get();
                            let own = own_id();
                            if state.selected.is_none() {
                                return view! {
                                    <div class="chat-page__status">
                                        "Selecciona un amigo para chatear"
                                    </div>
                                }
                                    .into_any();
                            }
                            if state.messages.is_empty() {
                                return view! {
                                    <div class="chat-page__status">"No hay mensajes todavía"</div>
                                }
                                    .into_any();
                            }

                            state
                                .messages
                                .iter()
                                .map(|message| {
                                    let own_message = is_own_message(&own, message);
                                    let texto = message.mensaje.clone();
                                    let hora = time_hhmm(&message.fecha_envio);
                                    view! {
                                        <div
                                            class="chat-bubble"
                                            class:chat-bubble--own=own_message
                                        >
                                            <span class="chat-bubble__text">{texto}</span>
                                            <span class="chat-bubble__time">{hora}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </div>
                    <div class="chat-page__composer">
                        <input
                            class="chat-page__input"
                            type="text"
                            placeholder="Escribe un mensaje..."
                            prop:value=move || composer.get()
                            on:input=on_input
                            on:keydown=on_keydown
                        />
                        <button
                            class="chat-page__send"
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
