//! Page footer with the copyright year.

use leptos::prelude::*;

use crate::util::year::{copyright_line, current_year};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p id="year">{copyright_line(current_year())}</p>
        </footer>
    }
}
