use super::*;

const REVEAL_SELECTOR: &str = ".service-card, .package-card, .feature-card, .contact-card, .offer-card, .why-card, .gallery-item, .tip-card";

/// Leading-integer parse of a counter target: optional whitespace, sign and
/// `0x` prefix, then as many digits as are present. No digits is NaN.
pub(crate) fn parse_int(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value = 0.0f64;
    let mut seen = false;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            break;
        };
        value = value * f64::from(radix) + f64::from(digit);
        seen = true;
    }
    match (seen, negative) {
        (false, _) => f64::NAN,
        (true, true) => -value,
        (true, false) => value,
    }
}

impl Page {
    pub(crate) fn init_stat_counters(&mut self) -> Result<()> {
        let stats = self.dom.query_selector_all(".stat-number")?;
        if stats.is_empty() {
            return Ok(());
        }
        self.intersections.register(
            ObserverKind::StatCounter,
            self.config.animation.counter_threshold,
        );
        for stat in stats {
            self.intersections.observe(ObserverKind::StatCounter, stat);
        }
        Ok(())
    }

    pub(crate) fn on_stat_visible(&mut self, stat: NodeId) -> Result<()> {
        if self.dom.class_contains(stat, "animated") {
            return Ok(());
        }
        self.dom.class_add(stat, "animated")?;

        let target = parse_int(&self.dom.attr(stat, "data-target").unwrap_or_default());
        let animation = &self.config.animation;
        let frames = animation.counter_duration_ms as f64 / animation.frame_interval_ms as f64;
        tracing::debug!(target_value = target, "counter animation started");
        self.counter_step(stat, 0.0, target, target / frames)
    }

    /// One animation frame: advance, then either show the floored value and
    /// ask for another frame or land exactly on the target.
    pub(crate) fn counter_step(
        &mut self,
        node: NodeId,
        current: f64,
        target: f64,
        increment: f64,
    ) -> Result<()> {
        let current = current + increment;
        if current < target {
            self.dom.set_text_content(node, &format_number(current.floor()))?;
            self.request_animation_frame(TimerTask::CounterFrame {
                node,
                current,
                target,
                increment,
            });
        } else {
            self.dom.set_text_content(node, &format_number(target))?;
        }
        Ok(())
    }

    pub(crate) fn init_reveal(&mut self) -> Result<()> {
        self.controllers.reveal = self.dom.query_selector_all(REVEAL_SELECTOR)?;
        self.on_window(EventType::Scroll, Handler::RevealScroll);
        self.reveal_cards_in_view()
    }

    pub(crate) fn reveal_cards_in_view(&mut self) -> Result<()> {
        let limit = self.viewport.height * self.config.animation.reveal_fraction;
        for card in self.controllers.reveal.clone() {
            let rect = self.dom.bounding_client_rect(card, self.viewport.scroll_y);
            if rect.top <= limit {
                self.dom.class_add(card, "fade-in")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_reads_the_leading_integer() {
        assert_eq!(parse_int("15000"), 15000.0);
        assert_eq!(parse_int("  42px"), 42.0);
        assert_eq!(parse_int("-7"), -7.0);
        assert_eq!(parse_int("0x1F"), 31.0);
        assert_eq!(parse_int("12.9"), 12.0);
        assert!(parse_int("").is_nan());
        assert!(parse_int("abc").is_nan());
        assert!(parse_int("-").is_nan());
    }
}
