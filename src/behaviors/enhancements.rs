use super::*;

const COUNTER_WARN_COLOR: &str = "#ef4444";

impl Page {
    pub(crate) fn init_date_inputs(&mut self) -> Result<()> {
        let today = self.today.format("%Y-%m-%d").to_string();
        for input in self.dom.query_selector_all(r#"input[type="date"]"#)? {
            self.dom.set_attr(input, "min", &today)?;
        }
        Ok(())
    }

    pub(crate) fn init_package_cards(&mut self) -> Result<()> {
        for card in self.dom.query_selector_all(".package-card")? {
            if let Some(button) = self.dom.query_selector_from(card, ".btn-outline")? {
                self.on(button, EventType::Click, Handler::PackageView { card });
            }
        }
        Ok(())
    }

    pub(crate) fn on_package_view(&mut self, card: NodeId, event: &mut EventState) -> Result<()> {
        event.stop_propagation();
        let Some(location) = self.dom.query_selector_from(card, ".package-location span")? else {
            return Ok(());
        };
        let location = self.dom.text_content(location);
        self.show_notification(
            &format!("Exploring packages for {location}..."),
            ToastKind::Info,
        )
    }

    pub(crate) fn init_social_links(&mut self) -> Result<()> {
        for link in self.dom.query_selector_all(".social-link")? {
            self.on(link, EventType::MouseEnter, Handler::SocialEnter);
            self.on(link, EventType::MouseLeave, Handler::SocialLeave);
        }
        Ok(())
    }

    pub(crate) fn on_social_hover(&mut self, event: &EventState, entering: bool) -> Result<()> {
        let link = event.current_node()?;
        let transform = if entering {
            "translateY(-5px) scale(1.1)"
        } else {
            "translateY(0) scale(1)"
        };
        self.dom.style_set(link, "transform", transform)
    }

    pub(crate) fn init_shortcuts(&mut self) {
        let document = self.dom.root;
        self.on(document, EventType::KeyDown, Handler::Shortcuts);
    }

    /// Escape closes the mobile menu; Ctrl/Cmd+K jumps to the booking panel.
    pub(crate) fn on_shortcut(&mut self, event: &mut EventState) -> Result<()> {
        let Some(key) = event.key.clone() else {
            return Ok(());
        };
        if key.key == "Escape" && self.nav_menu_open() {
            self.close_nav_menu()?;
        }
        if (key.ctrl || key.meta) && key.key == "k" {
            event.prevent_default();
            if let Some(booking) = self.dom.by_id("booking") {
                let top = self.dom.offset_top(booking);
                self.scroll_window_to(top);
                self.set_timeout(
                    TimerTask::FocusFirstInput(booking),
                    self.config.forms.booking_focus_delay_ms,
                );
            }
        }
        Ok(())
    }

    pub(crate) fn focus_first_input(&mut self, section: NodeId) -> Result<()> {
        match self.dom.query_selector_from(section, "input")? {
            Some(input) => self.focus_node(input),
            None => Ok(()),
        }
    }

    pub(crate) fn init_input_enhancements(&mut self) -> Result<()> {
        for input in self.dom.query_selector_all("input, textarea")? {
            self.on(input, EventType::Focus, Handler::InputFocus);
            self.on(input, EventType::Blur, Handler::InputBlur);

            if !self.dom.is_tag(input, "textarea") {
                continue;
            }
            let Some(max_length) = self.dom.attr(input, "maxlength") else {
                continue;
            };
            let Some(parent) = self.dom.parent_element(input) else {
                continue;
            };
            let mut attrs = HashMap::new();
            attrs.insert("class".to_string(), "char-counter".to_string());
            let counter = self.dom.create_element(parent, "div".into(), attrs);
            self.dom
                .create_text(counter, format!("0 / {max_length}"));
            self.on(
                input,
                EventType::Input,
                Handler::CharCounter {
                    counter,
                    max_length,
                },
            );
        }
        Ok(())
    }

    pub(crate) fn on_input_focus(&mut self, event: &EventState) -> Result<()> {
        let input = event.current_node()?;
        match self.dom.parent_element(input) {
            Some(parent) => self.dom.class_add(parent, "focused"),
            None => Ok(()),
        }
    }

    /// Keeps `focused` on the wrapper while the field still holds a value.
    pub(crate) fn on_input_blur(&mut self, event: &EventState) -> Result<()> {
        let input = event.current_node()?;
        if !self.dom.value(input)?.is_empty() {
            return Ok(());
        }
        match self.dom.parent_element(input) {
            Some(parent) => self.dom.class_remove(parent, "focused"),
            None => Ok(()),
        }
    }

    /// Shows `length / max` and warns past the configured share of the limit.
    pub(crate) fn update_char_counter(
        &mut self,
        event: &EventState,
        counter: NodeId,
        max_length: &str,
    ) -> Result<()> {
        let input = event.current_node()?;
        let length = self.dom.value(input)?.encode_utf16().count();
        self.dom
            .set_text_content(counter, &format!("{length} / {max_length}"))?;

        let limit = match max_length.trim() {
            "" => 0.0,
            raw => raw.parse::<f64>().unwrap_or(f64::NAN),
        };
        let warn = (length as f64) > limit * self.config.forms.char_warn_ratio;
        self.dom
            .style_set(counter, "color", if warn { COUNTER_WARN_COLOR } else { "" })
    }
}
