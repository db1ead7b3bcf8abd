//! Storefront landing page: hero carousel, featured products, contact form.
//!
//! EVENT WIRING
//! ============
//! | UI event                       | handler                                   |
//! |--------------------------------|-------------------------------------------|
//! | `#hamburger` click             | `NavState::toggle`                        |
//! | `.carousel-btn.prev` click     | `CarouselController::manual_prev`         |
//! | `.carousel-btn.next` click     | `CarouselController::manual_next`         |
//! | `.dot` click                   | `CarouselController::manual_go_to`        |
//! | `#carousel` mouseenter         | `CarouselController::pause`               |
//! | `#carousel` mouseleave         | `CarouselController::resume`              |
//! | autoplay interval              | `CarouselController::tick`                |
//! | carousel `img` error           | `SlideImage::on_load_error`               |
//! | `#contact-form` submit         | `ContactForm::submit` (default prevented) |
//! | input/textarea blur            | `ContactForm::blur`                       |
//! | `.product-card` enter/leave    | `hovered` class on/off                    |
//! | carousel mount                 | `CarouselController::start`               |
//!
//! Manual carousel navigation moves first and resets the timer before the
//! handler returns, so a pending autoplay fire can never land right after a
//! click.

use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::contact_form::ContactFormSection;
use crate::components::product_grid::ProductGrid;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::content::{PRODUCTS, SLIDES};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SiteHeader/>
        <main>
            <section id="inicio" class="hero">
                <Carousel slides=SLIDES/>
            </section>
            <section id="productos" class="section">
                <h2>"Productos destacados"</h2>
                <ProductGrid products=PRODUCTS/>
            </section>
            <section id="contacto" class="section">
                <h2>"Contáctanos"</h2>
                <p>"¿Tienes dudas sobre un pedido o quieres un diseño personalizado? Escríbenos."</p>
                <ContactFormSection/>
            </section>
        </main>
        <SiteFooter/>
    }
}
