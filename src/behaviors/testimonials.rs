use super::*;

/// Testimonial slider state: the current card, the autoplay interval and the
/// pending resize debounce.
#[derive(Debug, Default)]
pub(crate) struct TestimonialCarousel {
    pub(crate) track: Option<NodeId>,
    pub(crate) cards: Vec<NodeId>,
    pub(crate) index: usize,
    pub(crate) autoplay: Option<i64>,
    pub(crate) resize_timer: Option<i64>,
}

/// Wraps `index` into `[0, count)`; below zero lands on the last card and past
/// the end on the first.
pub(crate) fn wrap_index(index: i64, count: usize) -> Option<usize> {
    let count_i = i64::try_from(count).ok()?;
    if count_i == 0 {
        return None;
    }
    if index < 0 {
        return Some(count - 1);
    }
    if index >= count_i {
        return Some(0);
    }
    usize::try_from(index).ok()
}

/// Horizontal offset of the track for a given card.
pub(crate) fn track_offset(index: usize, slider_width: f64, gap: f64) -> f64 {
    index as f64 * (slider_width + gap)
}

impl Page {
    pub(crate) fn init_testimonials(&mut self) -> Result<()> {
        let track = self.dom.by_id("testimonialsTrack");
        let cards = self.dom.query_selector_all(".testimonial-card")?;

        if let Some(dots) = self.dom.by_id("testimonialsDots") {
            for index in 0..cards.len() {
                let mut attrs = HashMap::new();
                let class = if index == 0 {
                    "testimonial-dot active"
                } else {
                    "testimonial-dot"
                };
                attrs.insert("class".to_string(), class.to_string());
                let dot = self.dom.create_element(dots, "div".into(), attrs);
                self.on(dot, EventType::Click, Handler::TestimonialDot { index });
            }
        }
        if let Some(prev) = self.dom.by_id("testimonialPrev") {
            self.on(prev, EventType::Click, Handler::TestimonialPrev);
        }
        if let Some(next) = self.dom.by_id("testimonialNext") {
            self.on(next, EventType::Click, Handler::TestimonialNext);
        }

        let has_cards = !cards.is_empty();
        self.controllers.testimonials = TestimonialCarousel {
            track,
            cards,
            ..TestimonialCarousel::default()
        };

        let slider = self.dom.query_selector(".testimonials-slider")?;
        if let (Some(slider), true) = (slider, has_cards) {
            self.on(slider, EventType::MouseEnter, Handler::SliderEnter);
            self.on(slider, EventType::MouseLeave, Handler::SliderLeave);
            self.update_testimonials()?;
            self.start_autoplay();
        }
        Ok(())
    }

    pub(crate) fn update_testimonials(&mut self) -> Result<()> {
        let carousel = &self.controllers.testimonials;
        let Some(track) = carousel.track else {
            return Ok(());
        };
        if carousel.cards.is_empty() {
            return Ok(());
        }
        let index = carousel.index;

        if let Some(slider) = self.dom.parent_element(track) {
            let carousel_config = &self.config.carousel;
            let gap = if self.viewport.width > carousel_config.wide_breakpoint {
                carousel_config.wide_gap
            } else {
                carousel_config.narrow_gap
            };
            let offset = track_offset(index, self.dom.offset_width(slider), gap);
            self.dom.style_set(
                track,
                "transform",
                &format!("translateX(-{}px)", format_number(offset)),
            )?;
        }

        for (position, dot) in self
            .dom
            .query_selector_all(".testimonial-dot")?
            .into_iter()
            .enumerate()
        {
            self.dom.class_set(dot, "active", position == index)?;
        }
        Ok(())
    }

    /// Shows the card at `index`, wrapping out-of-range values. Does nothing
    /// without cards.
    pub fn go_to_testimonial(&mut self, index: i64) -> Result<()> {
        let count = self.controllers.testimonials.cards.len();
        let Some(index) = wrap_index(index, count) else {
            return Ok(());
        };
        self.controllers.testimonials.index = index;
        self.update_testimonials()
    }

    pub fn next_testimonial(&mut self) -> Result<()> {
        let current = self.current_testimonial_i64();
        self.go_to_testimonial(current + 1)
    }

    pub fn previous_testimonial(&mut self) -> Result<()> {
        let current = self.current_testimonial_i64();
        self.go_to_testimonial(current - 1)
    }

    fn current_testimonial_i64(&self) -> i64 {
        i64::try_from(self.controllers.testimonials.index).unwrap_or_default()
    }

    pub fn testimonial_index(&self) -> usize {
        self.controllers.testimonials.index
    }

    pub fn testimonial_count(&self) -> usize {
        self.controllers.testimonials.cards.len()
    }

    /// Whether the autoplay interval is running.
    pub fn testimonial_autoplay_active(&self) -> bool {
        self.controllers.testimonials.autoplay.is_some()
    }

    pub(crate) fn start_autoplay(&mut self) {
        if self.controllers.testimonials.cards.is_empty() {
            return;
        }
        // a second start replaces the running interval
        self.stop_autoplay();
        let id = self.set_interval(TimerTask::CarouselAutoplay, self.config.carousel.autoplay_ms);
        self.controllers.testimonials.autoplay = Some(id);
    }

    pub(crate) fn stop_autoplay(&mut self) {
        if let Some(id) = self.controllers.testimonials.autoplay.take() {
            self.clear_timeout(id);
        }
    }

    pub(crate) fn autoplay_tick(&mut self) -> Result<()> {
        self.next_testimonial()
    }

    pub(crate) fn schedule_carousel_resize(&mut self) {
        if let Some(id) = self.controllers.testimonials.resize_timer.take() {
            self.clear_timeout(id);
        }
        let id = self.set_timeout(
            TimerTask::CarouselResize,
            self.config.carousel.resize_debounce_ms,
        );
        self.controllers.testimonials.resize_timer = Some(id);
    }

    pub(crate) fn carousel_resize_settled(&mut self) -> Result<()> {
        self.controllers.testimonials.resize_timer = None;
        self.update_testimonials()
    }
}
