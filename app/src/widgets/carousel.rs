//! Testimonial carousels.
//!
//! The rotation logic lives in [`Carousel`] and [`MultiCarousel`] so it can be exercised without a
//! browser; the components only wire it to timers and pointer events.

use std::time::Duration;

use leptos::either::Either;
use leptos::prelude::*;

use crate::components::{ComingSoon, Stars};
use crate::content::Testimonial;
use crate::widgets::autoplay;

pub const SINGLE_INTERVAL: Duration = Duration::from_secs(5);
pub const MULTI_INTERVAL: Duration = Duration::from_secs(3);

pub const VISIBLE_CARDS: usize = 3;
pub const CARD_WIDTH_PX: f64 = 320.0;
pub const CARD_GAP_PX: f64 = 24.0;

/// One testimonial at a time, auto-advancing unless hovered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    hovering: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Arrows and dots only make sense with something to rotate to.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn is_autoplaying(&self) -> bool {
        self.has_controls() && !self.hovering
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Timer callback, returns whether the carousel moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_autoplaying() {
            return false;
        }
        self.next();
        true
    }
}

/// Several cards side by side, scrolling one set of [`VISIBLE_CARDS`] at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MultiCarousel {
    len: usize,
    visible: usize,
    current_set: usize,
}

impl MultiCarousel {
    pub fn new(len: usize) -> Self {
        Self::with_visible(len, VISIBLE_CARDS)
    }

    pub fn with_visible(len: usize, visible: usize) -> Self {
        Self {
            len,
            visible: visible.max(1),
            current_set: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_set(&self) -> usize {
        self.current_set
    }

    pub fn set_count(&self) -> usize {
        self.len.div_ceil(self.visible).max(1)
    }

    pub fn has_dots(&self) -> bool {
        self.len > self.visible
    }

    pub fn tick(&mut self) -> bool {
        if self.len <= 1 {
            return false;
        }
        self.current_set = (self.current_set + 1) % self.set_count();
        true
    }

    pub fn go_to(&mut self, set: usize) {
        if set < self.set_count() {
            self.current_set = set;
        }
    }

    /// Horizontal translation of the card strip for the current set, in pixels.
    pub fn offset_px(&self, card_width: f64, gap: f64) -> f64 {
        let cards_before = (self.current_set * self.visible) as f64;
        -(cards_before * (card_width + gap))
    }
}

#[component]
pub fn TestimonialsCarousel(testimonials: Vec<Testimonial>) -> impl IntoView {
    if testimonials.is_empty() {
        return Either::Left(view! { <ComingSoon/> });
    }

    let state = RwSignal::new(Carousel::new(testimonials.len()));
    autoplay(SINGLE_INTERVAL, move || {
        state.update(|carousel| {
            carousel.tick();
        })
    });

    let dots = (testimonials.len() > 1).then(|| {
        (0..testimonials.len())
            .map(|index| {
                let class = move || {
                    if state.get().current() == index {
                        "carousel-dot active"
                    } else {
                        "carousel-dot"
                    }
                };
                view! {
                    <button
                        class=class
                        aria-label=format!("Show testimonial {}", index + 1)
                        on:click=move |_| state.update(|carousel| carousel.go_to(index))
                    ></button>
                }
            })
            .collect_view()
    });
    let testimonials = StoredValue::new(testimonials);
    let current = move || testimonials.with_value(|list| list[state.get().current()].clone());

    Either::Right(view! {
        <div
            class="carousel"
            on:mouseenter=move |_| state.update(|carousel| carousel.set_hovering(true))
            on:mouseleave=move |_| state.update(|carousel| carousel.set_hovering(false))
        >
            <div class="carousel-slide">
                {move || {
                    let testimonial = current();
                    view! {
                        <Stars filled=testimonial.stars()/>
                        <blockquote>"\u{201c}" {testimonial.testimonial.clone()} "\u{201d}"</blockquote>
                        <p class="client-name">{testimonial.client_name.clone()}</p>
                        <p class="client-byline">{testimonial.byline()}</p>
                    }
                }}
            </div>
            <Show when=move || state.get().has_controls()>
                <button
                    class="carousel-arrow prev"
                    aria-label="Previous testimonial"
                    on:click=move |_| state.update(Carousel::prev)
                >"\u{2190}"</button>
                <button
                    class="carousel-arrow next"
                    aria-label="Next testimonial"
                    on:click=move |_| state.update(Carousel::next)
                >"\u{2192}"</button>
            </Show>
            <div class="carousel-dots">{dots}</div>
        </div>
    })
}

#[component]
pub fn TestimonialsMultiCarousel(testimonials: Vec<Testimonial>) -> impl IntoView {
    if testimonials.is_empty() {
        return Either::Left(view! { <ComingSoon/> });
    }

    let state = RwSignal::new(MultiCarousel::new(testimonials.len()));
    autoplay(MULTI_INTERVAL, move || {
        state.update(|carousel| {
            carousel.tick();
        })
    });

    let strip_style = move || {
        format!(
            "transform: translateX({}px)",
            state.get().offset_px(CARD_WIDTH_PX, CARD_GAP_PX)
        )
    };
    let dots = move || {
        let carousel = state.get();
        if !carousel.has_dots() {
            return None;
        }
        Some(
            (0..carousel.set_count())
                .map(|set| {
                    let class = if carousel.current_set() == set {
                        "carousel-dot active"
                    } else {
                        "carousel-dot"
                    };
                    view! {
                        <button
                            class=class
                            aria-label=format!("Show testimonials set {}", set + 1)
                            on:click=move |_| state.update(|carousel| carousel.go_to(set))
                        ></button>
                    }
                })
                .collect_view(),
        )
    };
    let cards = testimonials
        .into_iter()
        .map(|testimonial| {
            view! {
                <div class="testimonial-card">
                    <Stars filled=testimonial.stars()/>
                    <p class="testimonial-text">"\u{201c}" {testimonial.testimonial.clone()} "\u{201d}"</p>
                    <p class="client-name">{testimonial.client_name.clone()}</p>
                    <p class="client-byline">{testimonial.byline()}</p>
                </div>
            }
        })
        .collect_view();

    Either::Right(view! {
        <div class="multi-carousel">
            <div class="multi-carousel-strip" style=strip_style>{cards}</div>
            <div class="carousel-dots">{dots}</div>
        </div>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carousel_has_no_controls() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert!(!carousel.has_controls());
        assert!(!carousel.tick());
        carousel.next();
        carousel.prev();
        assert_eq!(0, carousel.current());
    }

    #[test]
    fn single_item_does_not_rotate() {
        let mut carousel = Carousel::new(1);
        assert!(!carousel.has_controls());
        assert!(!carousel.tick());
        assert_eq!(0, carousel.current());
    }

    #[test]
    fn autoplay_wraps_around() {
        let mut carousel = Carousel::new(3);
        let visited: Vec<usize> = (0..4)
            .map(|_| {
                assert!(carousel.tick());
                carousel.current()
            })
            .collect();
        assert_eq!(vec![1, 2, 0, 1], visited);
    }

    #[test]
    fn manual_navigation_wraps_both_ways() {
        let mut carousel = Carousel::new(4);
        carousel.prev();
        assert_eq!(3, carousel.current());
        carousel.next();
        assert_eq!(0, carousel.current());
        carousel.go_to(2);
        assert_eq!(2, carousel.current());
        carousel.go_to(9);
        assert_eq!(2, carousel.current());
    }

    #[test]
    fn hovering_pauses_autoplay() {
        let mut carousel = Carousel::new(2);
        carousel.set_hovering(true);
        assert!(!carousel.tick());
        assert_eq!(0, carousel.current());
        carousel.set_hovering(false);
        assert!(carousel.tick());
        assert_eq!(1, carousel.current());
    }

    #[test]
    fn sets_are_rounded_up() {
        assert_eq!(1, MultiCarousel::new(0).set_count());
        assert_eq!(1, MultiCarousel::new(3).set_count());
        assert_eq!(2, MultiCarousel::new(4).set_count());
        assert_eq!(4, MultiCarousel::new(10).set_count());
    }

    #[test]
    fn multi_carousel_rotates_through_every_set() {
        let mut carousel = MultiCarousel::new(10);
        let visited: Vec<usize> = (0..5)
            .map(|_| {
                carousel.tick();
                carousel.current_set()
            })
            .collect();
        assert_eq!(vec![1, 2, 3, 0, 1], visited);
    }

    #[test]
    fn offset_follows_card_geometry_past_three_sets() {
        let mut carousel = MultiCarousel::new(12);
        carousel.go_to(3);
        assert_eq!(-(9.0 * 344.0), carousel.offset_px(CARD_WIDTH_PX, CARD_GAP_PX));
        assert_eq!(-(9.0 * 210.0), carousel.offset_px(200.0, 10.0));
        carousel.go_to(0);
        assert_eq!(0.0, carousel.offset_px(CARD_WIDTH_PX, CARD_GAP_PX));
    }

    #[test]
    fn dots_only_when_more_than_one_set() {
        assert!(!MultiCarousel::new(3).has_dots());
        assert!(MultiCarousel::new(4).has_dots());
    }
}
