//! Site header with brand link and the hamburger navigation toggle.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::util::year::BRAND_NAME;

/// Read the toggle's current `aria-expanded`, so the DOM attribute stays the
/// source of truth for the flag.
#[cfg(feature = "hydrate")]
fn aria_state(ev: &leptos::ev::MouseEvent) -> Option<NavState> {
    use wasm_bindgen::JsCast;

    ev.current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.get_attribute("aria-expanded"))
        .map(|value| NavState::from_aria(&value))
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        let current = aria_state(&ev);
        #[cfg(not(feature = "hydrate"))]
        let current = {
            let _ = ev;
            None::<NavState>
        };
        nav.update(|state| {
            if let Some(current) = current {
                *state = current;
            }
            state.toggle();
        });
    };

    view! {
        <header class="site-header">
            <a class="brand" href="#inicio">{BRAND_NAME}</a>
            <button
                id="hamburger"
                class="hamburger"
                type="button"
                aria-controls="main-nav"
                aria-label="Abrir menú"
                aria-expanded=move || nav.get().aria_expanded()
                on:click=on_toggle
            >
                <span class="hamburger__bar"></span>
                <span class="hamburger__bar"></span>
                <span class="hamburger__bar"></span>
            </button>
            <nav id="main-nav" class="main-nav" style:display=move || nav.get().menu_display()>
                <ul>
                    <li><a href="#inicio">"Inicio"</a></li>
                    <li><a href="#productos">"Productos"</a></li>
                    <li><a href="#contacto">"Contacto"</a></li>
                </ul>
            </nav>
        </header>
    }
}
