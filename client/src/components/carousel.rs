//! Hero carousel with autoplay, prev/next buttons, dot indicators, hover pause,
//! and image fallback.
//!
//! ARCHITECTURE
//! ============
//! `CarouselController` is authoritative for the index and the autoplay
//! schedule; it lives in an `Rc<RefCell<_>>` because its `IntervalTimer` holds
//! a browser interval. After every operation the controller's `CarouselState`
//! is published into a signal that drives slide/dot classes and
//! `aria-selected`. The interval callback holds only a `Weak` back-reference,
//! so unmounting the component drops the controller and clears the interval.
//!
//! On the server the markup renders with slide 0 active and no controller.

use std::num::NonZeroUsize;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::content::SlideContent;
use crate::state::carousel::CarouselState;
use crate::state::slide_image::{SlideImage, apply_load_error};

#[cfg(feature = "hydrate")]
use crate::state::carousel::CarouselController;
#[cfg(feature = "hydrate")]
use crate::util::autoplay::AutoplayConfig;
#[cfg(feature = "hydrate")]
use crate::util::interval::IntervalTimer;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::{Rc, Weak};

#[cfg(feature = "hydrate")]
type SharedController = Rc<RefCell<CarouselController<IntervalTimer>>>;

#[cfg(feature = "hydrate")]
fn publish(controller: &SharedController, view_state: RwSignal<CarouselState>) {
    let state = controller.borrow().state().clone();
    view_state.set(state);
}

#[component]
pub fn Carousel(slides: &'static [SlideContent]) -> impl IntoView {
    let Some(count) = NonZeroUsize::new(slides.len()) else {
        leptos::logging::warn!("carousel rendered without slides");
        return ().into_any();
    };

    let view_state = RwSignal::new(CarouselState::new(count));
    let images = RwSignal::new(
        slides
            .iter()
            .map(|slide| SlideImage::new(slide.src, slide.alt))
            .collect::<Vec<_>>(),
    );

    #[cfg(feature = "hydrate")]
    let controller: SharedController = Rc::new_cyclic(|weak: &Weak<RefCell<CarouselController<IntervalTimer>>>| {
        let weak = weak.clone();
        let timer = IntervalTimer::new(move || {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            controller.borrow_mut().tick();
            publish(&controller, view_state);
        });
        RefCell::new(CarouselController::new(count, timer, AutoplayConfig::default()))
    });

    #[cfg(feature = "hydrate")]
    {
        let controller = Rc::clone(&controller);
        Effect::new(move || {
            controller.borrow_mut().start();
            log::debug!("carousel autoplay started ({count} slides)");
            publish(&controller, view_state);
        });
    }

    let on_prev = {
        #[cfg(feature = "hydrate")]
        {
            let controller = Rc::clone(&controller);
            move |_ev: leptos::ev::MouseEvent| {
                controller.borrow_mut().manual_prev();
                publish(&controller, view_state);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_next = {
        #[cfg(feature = "hydrate")]
        {
            let controller = Rc::clone(&controller);
            move |_ev: leptos::ev::MouseEvent| {
                controller.borrow_mut().manual_next();
                publish(&controller, view_state);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_dot = {
        #[cfg(feature = "hydrate")]
        {
            let controller = Rc::clone(&controller);
            move |index: usize| {
                let result = controller.borrow_mut().manual_go_to(index);
                match result {
                    Ok(_) => publish(&controller, view_state),
                    Err(err) => leptos::logging::warn!("dot navigation ignored: {err}"),
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_index: usize| {}
        }
    };

    let on_pointer_enter = {
        #[cfg(feature = "hydrate")]
        {
            let controller = Rc::clone(&controller);
            move |_ev: leptos::ev::MouseEvent| controller.borrow_mut().pause()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let controller = Rc::clone(&controller);
            move |_ev: leptos::ev::MouseEvent| controller.borrow_mut().resume()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let slide_views = slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let on_image_error = move || {
                let pending = images.with_untracked(|imgs| imgs.get(i).is_some_and(|img| !img.is_placeholder()));
                if pending {
                    leptos::logging::log!("carousel image {i} failed to load; using placeholder");
                    images.update(|imgs| {
                        apply_load_error(imgs, i);
                    });
                }
            };
            view! {
                <figure class=move || view_state.with(|s| s.slide_class(i)) aria-hidden=move || {
                    view_state.with(|s| if s.is_active(i) { "false" } else { "true" })
                }>
                    <img
                        src=move || images.with(|imgs| imgs.get(i).map(|img| img.src.clone()).unwrap_or_default())
                        alt=slide.alt
                        loading=if i == 0 { "eager" } else { "lazy" }
                        on:error=move |_| on_image_error()
                    />
                    <figcaption class="slide-caption">
                        <h2>{slide.title}</h2>
                        <p>{slide.caption}</p>
                    </figcaption>
                </figure>
            }
        })
        .collect_view();

    let dot_views = (0..count.get())
        .map(|i| {
            let on_dot = on_dot.clone();
            view! {
                <button
                    class=move || view_state.with(|s| s.dot_class(i))
                    type="button"
                    role="tab"
                    data-slide=i.to_string()
                    aria-selected=move || view_state.with(|s| s.aria_selected(i))
                    aria-label=format!("Ir a la diapositiva {}", i + 1)
                    on:click=move |_| on_dot(i)
                ></button>
            }
        })
        .collect_view();

    view! {
        <div
            id="carousel"
            class="carousel"
            aria-roledescription="carousel"
            on:mouseenter=on_pointer_enter
            on:mouseleave=on_pointer_leave
        >
            <div class="slides">{slide_views}</div>
            <button class="carousel-btn prev" type="button" aria-label="Anterior" on:click=on_prev>
                "‹"
            </button>
            <button class="carousel-btn next" type="button" aria-label="Siguiente" on:click=on_next>
                "›"
            </button>
            <div class="dots" role="tablist">{dot_views}</div>
        </div>
    }
    .into_any()
}
