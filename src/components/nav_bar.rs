//! Tab bar for the main page.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

/// Tabs of the main page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MainTab {
    /// Group catalog plus the selected group's events.
    #[default]
    Groups,
    /// Event creation form.
    Create,
    /// Month calendar of the session user's events.
    Calendar,
}

impl MainTab {
    /// Label shown on the tab button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Groups => "👥 Grupos",
            Self::Create => "➕ Crear evento",
            Self::Calendar => "📅 Calendario",
        }
    }
}

/// Tab switcher owned by the main page.
#[component]
pub fn NavBar(tab: RwSignal<MainTab>) -> impl IntoView {
    let tabs = [MainTab::Groups, MainTab::Create, MainTab::Calendar];

    view! {
        <nav class="nav-bar">
            {tabs
                .into_iter()
                .map(|entry| {
                    view! {
                        <button
                            class="nav-bar__tab"
                            class:nav-bar__tab--active=move || tab.get() == entry
                            on:click=move |_| tab.set(entry)
                        >
                            {entry.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
