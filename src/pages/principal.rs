//! Main page: group browser, event creation, and calendar tabs.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::event_calendar::EventCalendar;
use crate::components::event_form::EventForm;
use crate::components::event_list::EventList;
use crate::components::group_list::GroupList;
use crate::components::nav_bar::{MainTab, NavBar};
use crate::components::side_menu::SideMenu;
use crate::net::types::Group;
use crate::state::calendar::CalendarState;
use crate::state::events::EventsState;
use crate::state::groups::GroupsState;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Landing page behind login. Owns the tab state and the per-tab data.
#[component]
pub fn PrincipalPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let tab = RwSignal::new(MainTab::default());
    let groups = RwSignal::new(GroupsState::default());
    let events = RwSignal::new(EventsState::default());
    let calendar = RwSignal::new(CalendarState::default());

    // Group catalog loads once on mount.
    #[cfg(feature = "csr")]
    {
        groups.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_groups().await {
                Ok(list) => groups.update(|state| {
                    state.groups = list;
                    state.loading = false;
                    state.error = None;
                }),
                Err(e) => groups.update(|state| {
                    state.loading = false;
                    state.error = Some(e);
                }),
            }
        });
    }

    // The calendar list loads lazily the first time its tab opens.
    let calendar_loaded = RwSignal::new(false);
    Effect::new(move || {
        if tab.get() != MainTab::Calendar || calendar_loaded.get() {
            return;
        }
        calendar_loaded.set(true);
        calendar.update(|state| state.loading = true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_events().await {
                Ok(list) => calendar.update(|state| {
                    state.events = list;
                    state.loading = false;
                    state.error = None;
                }),
                Err(e) => calendar.update(|state| {
                    state.loading = false;
                    state.error = Some(e);
                }),
            }
        });
    });

    let on_select_group = Callback::new(move |group: Group| {
        let group_id = group.id;
        events.update(|state| {
            state.group_id = Some(group_id);
            state.group_name = group.nombre;
            state.events.clear();
            state.loading = true;
            state.error = None;
        });
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_group_events(group_id).await;
            events.update(|state| {
                // A slow response for an earlier selection must not clobber
                // the current one.
                if state.group_id != Some(group_id) {
                    return;
                }
                match result {
                    Ok(envelope) => {
                        if !envelope.grupo_nombre.is_empty() {
                            state.group_name = envelope.grupo_nombre;
                        }
                        state.events = envelope.eventos;
                        state.loading = false;
                    }
                    Err(e) => {
                        state.loading = false;
                        state.error = Some(e);
                    }
                }
            });
        });
    });

    view! {
        <div class="principal-page">
            <header class="page-header">
                <SideMenu />
                <h1 class="page-header__title">"Sunity"</h1>
            </header>
            <NavBar tab=tab />
            <main class="principal-page__content">
                {move || match tab.get() {
                    MainTab::Groups => {
                        view! {
                            <div class="principal-page__groups">
                                <GroupList groups=groups on_select=on_select_group />
                                <EventList events=events />
                            </div>
                        }
                            .into_any()
                    }
                    MainTab::Create => view! { <EventForm /> }.into_any(),
                    MainTab::Calendar => view! { <EventCalendar calendar=calendar /> }.into_any(),
                }}
            </main>
        </div>
    }
}
