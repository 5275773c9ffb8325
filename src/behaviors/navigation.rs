use super::*;

impl Page {
    pub(crate) fn init_navigation(&mut self) -> Result<()> {
        let nav = NavigationController {
            toggle: self.dom.by_id("navToggle"),
            menu: self.dom.by_id("navMenu"),
            navbar: self.dom.by_id("navbar"),
            back_to_top: self.dom.by_id("backToTop"),
            links: self.dom.query_selector_all(".nav-link")?,
        };

        if let (Some(toggle), Some(_)) = (nav.toggle, nav.menu) {
            self.on(toggle, EventType::Click, Handler::NavToggle);
        }
        for link in &nav.links {
            self.on(*link, EventType::Click, Handler::NavLink);
        }
        self.on_window(EventType::Scroll, Handler::NavScroll);

        self.controllers.navigation = nav;
        Ok(())
    }

    pub(crate) fn init_smooth_scroll(&mut self) -> Result<()> {
        for anchor in self.dom.query_selector_all(r##"a[href^="#"]"##)? {
            self.on(anchor, EventType::Click, Handler::SmoothScroll);
        }
        Ok(())
    }

    pub(crate) fn init_back_to_top(&mut self) {
        if let Some(button) = self.controllers.navigation.back_to_top {
            self.on(button, EventType::Click, Handler::BackToTop);
        }
    }

    pub(crate) fn on_nav_toggle(&mut self) -> Result<()> {
        let (Some(toggle), Some(menu)) =
            (self.controllers.navigation.toggle, self.controllers.navigation.menu)
        else {
            return Ok(());
        };
        self.dom.class_toggle(toggle, "active")?;
        let open = self.dom.class_toggle(menu, "active")?;
        self.set_body_overflow(if open { "hidden" } else { "" })
    }

    pub(crate) fn close_nav_menu(&mut self) -> Result<()> {
        if let Some(toggle) = self.controllers.navigation.toggle {
            self.dom.class_remove(toggle, "active")?;
        }
        if let Some(menu) = self.controllers.navigation.menu {
            self.dom.class_remove(menu, "active")?;
        }
        self.set_body_overflow("")
    }

    pub(crate) fn nav_menu_open(&self) -> bool {
        self.controllers
            .navigation
            .menu
            .is_some_and(|menu| self.dom.class_contains(menu, "active"))
    }

    fn set_body_overflow(&mut self, value: &str) -> Result<()> {
        match self.dom.body() {
            Some(body) => self.dom.style_set(body, "overflow", value),
            None => Ok(()),
        }
    }

    pub(crate) fn on_nav_link(&mut self, event: &EventState) -> Result<()> {
        let link = event.current_node()?;
        self.close_nav_menu()?;
        for other in self.controllers.navigation.links.clone() {
            self.dom.class_remove(other, "active")?;
        }
        self.dom.class_add(link, "active")
    }

    pub(crate) fn on_nav_scroll(&mut self) -> Result<()> {
        let scroll_y = self.viewport.scroll_y;
        let nav = &self.controllers.navigation;
        let (navbar, back_to_top) = (nav.navbar, nav.back_to_top);

        if let Some(navbar) = navbar {
            let scrolled = scroll_y > self.config.navigation.scrolled_offset;
            self.dom.class_set(navbar, "scrolled", scrolled)?;
        }
        if let Some(button) = back_to_top {
            let visible = scroll_y > self.config.navigation.back_to_top_offset;
            self.dom.class_set(button, "visible", visible)?;
        }
        self.update_active_nav_link()
    }

    /// Highlights the link of the section under the scroll position. Later
    /// sections win when several match.
    fn update_active_nav_link(&mut self) -> Result<()> {
        let scroll_y = self.viewport.scroll_y;
        let lookahead = self.config.navigation.section_lookahead;
        let links = self.controllers.navigation.links.clone();

        for section in self.dom.query_selector_all("section[id]")? {
            let top = self.dom.offset_top(section) - lookahead;
            let height = self.dom.offset_height(section);
            if !(scroll_y >= top && scroll_y < top + height) {
                continue;
            }
            let href = format!("#{}", self.dom.attr(section, "id").unwrap_or_default());
            for link in &links {
                self.dom.class_remove(*link, "active")?;
                if self.dom.attr(*link, "href").as_deref() == Some(href.as_str()) {
                    self.dom.class_add(*link, "active")?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn on_anchor_click(&mut self, event: &mut EventState) -> Result<()> {
        event.prevent_default();
        let anchor = event.current_node()?;
        let href = self.dom.attr(anchor, "href").unwrap_or_default();
        // `href="#"` is not a valid selector and surfaces as an error
        let Some(target) = self.dom.query_selector(&href)? else {
            return Ok(());
        };
        let top = self.dom.offset_top(target) - self.config.navigation.anchor_offset;
        self.scroll_window_to(top);
        Ok(())
    }

    pub(crate) fn on_back_to_top(&mut self, event: &EventState) -> Result<()> {
        let button = event.current_node()?;
        self.create_ripple(button, event.pointer)?;
        self.scroll_window_to(0.0);
        Ok(())
    }

    /// The nav link currently marked active, if any.
    pub fn active_nav_link(&self) -> Option<String> {
        self.controllers
            .navigation
            .links
            .iter()
            .find(|link| self.dom.class_contains(**link, "active"))
            .and_then(|link| self.dom.attr(*link, "href"))
    }
}
