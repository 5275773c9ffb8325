use super::*;
use chrono::NaiveDate;

pub(crate) const USER_ACTION_STACK_SIZE: usize = 32 * 1024 * 1024;

/// A loaded landing page with every behavior wired.
///
/// Construction runs the bootstrap and ready phases; the window `load` phase
/// (loader overlay, hero entrance) runs when the host calls [`Page::load`].
#[derive(Debug)]
pub struct Page {
    pub(crate) dom: Dom,
    pub(crate) config: SiteConfig,
    pub(crate) viewport: Viewport,
    pub(crate) storage: LocalStorage,
    pub(crate) media: MediaQueryMocks,
    pub(crate) listeners: ListenerStore,
    pub(crate) scheduler: SchedulerState,
    pub(crate) intersections: IntersectionState,
    pub(crate) trace_state: TraceState,
    pub(crate) controllers: Controllers,
    pub(crate) active_element: Option<NodeId>,
    hovered: Vec<NodeId>,
    pub(crate) uncaught_errors: Vec<String>,
    pub(crate) today: NaiveDate,
    reporting_error: bool,
    loaded: bool,
}

impl Page {
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_with_options(html, PageOptions::default())
    }

    pub fn from_html_with_local_storage(html: &str, initial: &[(&str, &str)]) -> Result<Self> {
        let options = PageOptions::default()
            .with_local_storage(LocalStorage::from_pairs(initial.iter().copied()));
        Self::from_html_with_options(html, options)
    }

    pub fn from_html_with_options(html: &str, options: PageOptions) -> Result<Self> {
        options.config.validate()?;
        stacker::grow(USER_ACTION_STACK_SIZE, || Self::from_html_impl(html, options))
    }

    fn from_html_impl(html: &str, options: PageOptions) -> Result<Self> {
        let mut dom = parse_html(html)?;
        for (selector, layout) in &options.layout {
            for node in dom.query_selector_all(selector)? {
                dom.set_layout(node, *layout)?;
            }
        }

        let mut page = Self {
            dom,
            config: options.config,
            viewport: options.viewport,
            storage: options.local_storage,
            media: MediaQueryMocks {
                matches: options.match_media,
                calls: Vec::new(),
                default_matches: options.default_match_media,
            },
            listeners: ListenerStore::default(),
            scheduler: SchedulerState::default(),
            intersections: IntersectionState::default(),
            trace_state: TraceState::default(),
            controllers: Controllers::default(),
            active_element: None,
            hovered: Vec::new(),
            uncaught_errors: Vec::new(),
            today: options.today,
            reporting_error: false,
            loaded: false,
        };

        page.bootstrap()?;
        page.ready()?;
        page.process_intersections();
        Ok(page)
    }

    /// Work done while the page script is evaluated, before the document is
    /// ready.
    fn bootstrap(&mut self) -> Result<()> {
        self.apply_initial_theme()?;
        self.on_window(EventType::Load, Handler::PageLoad);
        self.on_window(EventType::Scroll, Handler::Parallax);
        self.observe_lazy_images()?;
        tracing::info!("Welcome to our travel website!");
        self.on_window(EventType::Error, Handler::ErrorLog);
        Ok(())
    }

    fn ready(&mut self) -> Result<()> {
        tracing::info!("travel website loaded");
        self.sync_theme_icon()?;
        self.init_theme_toggle();
        self.init_navigation()?;
        self.init_smooth_scroll()?;
        self.init_booking_tabs()?;
        self.init_stat_counters()?;
        self.init_forms()?;
        self.init_back_to_top();
        self.init_ripples()?;
        self.init_reveal()?;
        self.init_date_inputs()?;
        self.init_package_cards()?;
        self.init_social_links()?;
        self.init_shortcuts();
        self.init_input_enhancements()?;
        self.init_testimonials()?;
        self.init_faq()?;
        self.apply_dark_preference()?;
        self.on_window(EventType::Resize, Handler::CarouselResize);
        if let Some(body) = self.dom.body() {
            self.dom.class_add(body, "loaded")?;
        }
        Ok(())
    }

    /// Fires the window `load` event. Later calls do nothing.
    pub fn load(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }
        self.loaded = true;
        stacker::grow(USER_ACTION_STACK_SIZE, || {
            self.dispatch(EventState::new(EventType::Load, EventTarget::Window));
        });
        Ok(())
    }

    pub(crate) fn on(&mut self, node: NodeId, event_type: EventType, handler: Handler) {
        self.listeners
            .add(EventTarget::Node(node), event_type, handler);
    }

    pub(crate) fn on_window(&mut self, event_type: EventType, handler: Handler) {
        self.listeners.add(EventTarget::Window, event_type, handler);
    }

    fn propagation_path(&self, event: &EventState) -> Vec<EventTarget> {
        let EventTarget::Node(node) = event.target else {
            return vec![EventTarget::Window];
        };
        if !event.bubbles {
            return vec![event.target];
        }
        let mut path = Vec::new();
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            path.push(EventTarget::Node(current));
            cursor = self.dom.parent(current);
        }
        if self.dom.is_connected(node) {
            path.push(EventTarget::Window);
        }
        path
    }

    /// Runs the listeners along the propagation path. A failing listener is
    /// reported to the window `error` listeners and the others still run.
    pub(crate) fn dispatch(&mut self, mut event: EventState) -> EventState {
        let path = self.propagation_path(&event);
        for current in path {
            let handlers = self.listeners.get(current, event.event_type);
            if handlers.is_empty() {
                continue;
            }
            event.current_target = current;
            for handler in handlers {
                self.trace_event_line(format!(
                    "[event] {} target={} current={} handler={handler:?}",
                    event.event_type.as_str(),
                    self.describe_target(event.target),
                    self.describe_target(current),
                ));
                if let Err(err) = self.run_handler(handler, &mut event) {
                    self.report_error(err);
                }
            }
            if event.propagation_stopped {
                break;
            }
        }
        self.trace_event_line(format!(
            "[event] done {} target={} default_prevented={}",
            event.event_type.as_str(),
            self.describe_target(event.target),
            event.default_prevented
        ));
        event
    }

    fn run_handler(&mut self, handler: Handler, event: &mut EventState) -> Result<()> {
        match handler {
            Handler::ThemeToggle => self.on_theme_toggle(event),
            Handler::NavToggle => self.on_nav_toggle(),
            Handler::NavLink => self.on_nav_link(event),
            Handler::NavScroll => self.on_nav_scroll(),
            Handler::SmoothScroll => self.on_anchor_click(event),
            Handler::BackToTop => self.on_back_to_top(event),
            Handler::BookingTab => self.on_booking_tab(event),
            Handler::BookingSubmit => self.on_booking_submit(event),
            Handler::ContactSubmit => self.on_contact_submit(event),
            Handler::NewsletterSubmit => self.on_newsletter_submit(event),
            Handler::RevealScroll => self.reveal_cards_in_view(),
            Handler::Ripple => {
                let node = event.current_node()?;
                self.create_ripple(node, event.pointer)
            }
            Handler::PackageView { card } => self.on_package_view(card, event),
            Handler::SocialEnter => self.on_social_hover(event, true),
            Handler::SocialLeave => self.on_social_hover(event, false),
            Handler::Shortcuts => self.on_shortcut(event),
            Handler::InputFocus => self.on_input_focus(event),
            Handler::InputBlur => self.on_input_blur(event),
            Handler::CharCounter {
                counter,
                max_length,
            } => self.update_char_counter(event, counter, &max_length),
            Handler::TestimonialDot { index } => {
                self.go_to_testimonial(i64::try_from(index).unwrap_or(i64::MAX))
            }
            Handler::TestimonialPrev => self.previous_testimonial(),
            Handler::TestimonialNext => self.next_testimonial(),
            Handler::SliderEnter => {
                self.stop_autoplay();
                Ok(())
            }
            Handler::SliderLeave => {
                self.start_autoplay();
                Ok(())
            }
            Handler::CarouselResize => {
                self.schedule_carousel_resize();
                Ok(())
            }
            Handler::FaqQuestion { item } => self.on_faq_question(item),
            Handler::FaqKey => self.on_faq_key(event),
            Handler::PageLoad => self.on_page_load(),
            Handler::Parallax => self.apply_parallax(),
            Handler::ErrorLog => {
                self.log_uncaught_error(event);
                Ok(())
            }
        }
    }

    /// Routes an error to the window `error` listeners.
    pub(crate) fn report_error(&mut self, err: Error) {
        if self.reporting_error {
            tracing::error!(error = %err, "error raised while reporting an error");
            return;
        }
        self.reporting_error = true;
        let event = EventState::new(EventType::Error, EventTarget::Window)
            .with_message(err.to_string());
        self.dispatch(event);
        self.reporting_error = false;
    }

    fn log_uncaught_error(&mut self, event: &EventState) {
        let message = event.message.clone().unwrap_or_default();
        tracing::error!(error = %message, "An error occurred");
        self.uncaught_errors.push(message);
    }

    pub(crate) fn process_intersections(&mut self) {
        let entries = self.intersections.take_entries(&self.dom, &self.viewport);
        for (kind, node) in entries {
            let result = match kind {
                ObserverKind::StatCounter => self.on_stat_visible(node),
                ObserverKind::LazyImage => self.on_lazy_image_visible(node),
            };
            if let Err(err) = result {
                self.report_error(err);
            }
        }
    }

    /// Moves the window and fires `scroll` when the position changed.
    pub(crate) fn scroll_window_to(&mut self, y: f64) {
        let y = if y.is_finite() { y.max(0.0) } else { 0.0 };
        if y == self.viewport.scroll_y {
            return;
        }
        self.viewport.scroll_y = y;
        self.dispatch(EventState::new(EventType::Scroll, EventTarget::Window));
        self.process_intersections();
    }

    pub(crate) fn focus_node(&mut self, node: NodeId) -> Result<()> {
        if self.active_element == Some(node) {
            return Ok(());
        }
        if let Some(previous) = self.active_element {
            self.blur_node(previous)?;
        }
        self.active_element = Some(node);
        self.dispatch(EventState::new(EventType::Focus, EventTarget::Node(node)));
        Ok(())
    }

    pub(crate) fn blur_node(&mut self, node: NodeId) -> Result<()> {
        if self.active_element != Some(node) {
            return Ok(());
        }
        self.active_element = None;
        self.dispatch(EventState::new(EventType::Blur, EventTarget::Node(node)));
        Ok(())
    }

    fn is_text_control(&self, node: NodeId) -> bool {
        self.dom.is_tag(node, "input") || self.dom.is_tag(node, "textarea")
    }

    fn is_submit_button(&self, node: NodeId) -> bool {
        let kind = self
            .dom
            .attr(node, "type")
            .unwrap_or_default()
            .to_ascii_lowercase();
        if self.dom.is_tag(node, "button") {
            return kind.is_empty() || kind == "submit";
        }
        self.dom.is_tag(node, "input") && kind == "submit"
    }

    pub(crate) fn click_node(&mut self, node: NodeId, pointer: Option<(f64, f64)>) -> Result<()> {
        if self.is_text_control(node) || self.dom.is_tag(node, "select") {
            self.focus_node(node)?;
        }
        let mut event = EventState::new(EventType::Click, EventTarget::Node(node));
        event.pointer = pointer;
        let outcome = self.dispatch(event);
        if outcome.default_prevented {
            return Ok(());
        }
        if self.is_submit_button(node) {
            if let Some(form) = self.dom.closest(node, "form")? {
                self.submit_form(form);
            }
        }
        Ok(())
    }

    pub(crate) fn submit_form(&mut self, form: NodeId) {
        self.dispatch(EventState::new(EventType::Submit, EventTarget::Node(form)));
    }

    fn pointer_at_center(&self, node: NodeId) -> (f64, f64) {
        let rect = self.dom.bounding_client_rect(node, self.viewport.scroll_y);
        (rect.left + rect.width / 2.0, rect.top + rect.height / 2.0)
    }

    pub fn click(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let pointer = self.pointer_at_center(target);
        stacker::grow(USER_ACTION_STACK_SIZE, || {
            self.click_node(target, Some(pointer))
        })
    }

    /// Clicks with the pointer at the given viewport coordinates.
    pub fn click_at(&mut self, selector: &str, client_x: f64, client_y: f64) -> Result<()> {
        let target = self.select_one(selector)?;
        stacker::grow(USER_ACTION_STACK_SIZE, || {
            self.click_node(target, Some((client_x, client_y)))
        })
    }

    /// Replaces the value of an input or textarea, honoring `maxlength`, and
    /// fires `input`.
    pub fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let tag = self.dom.tag_name(target).unwrap_or_default().to_string();
        if tag != "input" && tag != "textarea" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: tag,
            });
        }

        let value = match self
            .dom
            .attr(target, "maxlength")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
        {
            Some(max) => truncate_utf16(text, max),
            None => text.to_string(),
        };

        stacker::grow(USER_ACTION_STACK_SIZE, || {
            self.dom.set_value(target, &value)?;
            self.dispatch(EventState::new(EventType::Input, EventTarget::Node(target)));
            Ok(())
        })
    }

    pub fn set_select_value(&mut self, selector: &str, value: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if !self.dom.is_tag(target, "select") {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "select".into(),
                actual: self.dom.tag_name(target).unwrap_or_default().to_string(),
            });
        }
        let options = self.dom.query_selector_all_from(target, "option")?;
        if !options
            .iter()
            .any(|option| self.dom.option_value(*option) == value)
        {
            return Err(Error::Dom(format!(
                "{selector} has no option with value {value:?}"
            )));
        }
        stacker::grow(USER_ACTION_STACK_SIZE, || {
            self.dom.set_value(target, value)?;
            self.dispatch(EventState::new(EventType::Input, EventTarget::Node(target)));
            Ok(())
        })
    }

    /// Submits the form matched by `selector`, or the form containing it.
    pub fn submit(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let Some(form) = self.dom.closest(target, "form")? else {
            return Ok(());
        };
        stacker::grow(USER_ACTION_STACK_SIZE, || self.submit_form(form));
        Ok(())
    }

    pub fn focus(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        stacker::grow(USER_ACTION_STACK_SIZE, || self.focus_node(target))
    }

    pub fn blur(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        stacker::grow(USER_ACTION_STACK_SIZE, || self.blur_node(target))
    }

    pub fn press_key(&mut self, selector: &str, key: KeyPress) -> Result<()> {
        let target = self.select_one(selector)?;
        stacker::grow(USER_ACTION_STACK_SIZE, || self.press_key_on(target, key));
        Ok(())
    }

    /// Presses a key on the focused element, or on `<body>` when nothing is
    /// focused.
    pub fn press_key_on_page(&mut self, key: KeyPress) -> Result<()> {
        let target = self
            .active_element
            .filter(|node| self.dom.is_connected(*node))
            .or_else(|| self.dom.body())
            .ok_or_else(|| Error::SelectorNotFound("body".into()))?;
        stacker::grow(USER_ACTION_STACK_SIZE, || self.press_key_on(target, key));
        Ok(())
    }

    fn press_key_on(&mut self, target: NodeId, key: KeyPress) {
        let is_space = key.key == " ";
        let event =
            EventState::new(EventType::KeyDown, EventTarget::Node(target)).with_key(key);
        let outcome = self.dispatch(event);
        if is_space && !outcome.default_prevented && !self.is_text_control(target) {
            let next = self.viewport.scroll_y + self.viewport.height;
            self.scroll_window_to(next);
        }
    }

    /// Moves the pointer onto `selector`. Ancestors the pointer was not
    /// already over get `mouseenter`, outermost first; elements it left get
    /// `mouseleave`, innermost first.
    pub fn pointer_enter(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let pointer = self.pointer_at_center(target);
        let chain = self.hover_chain(target);
        stacker::grow(USER_ACTION_STACK_SIZE, || self.move_pointer(chain, Some(pointer)));
        Ok(())
    }

    /// Moves the pointer off `selector` onto its parent. No-op when the
    /// pointer is not over it.
    pub fn pointer_leave(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let Some(position) = self.hovered.iter().position(|node| *node == target) else {
            return Ok(());
        };
        let chain = self.hovered[..position].to_vec();
        stacker::grow(USER_ACTION_STACK_SIZE, || self.move_pointer(chain, None));
        Ok(())
    }

    fn hover_chain(&self, target: NodeId) -> Vec<NodeId> {
        let mut chain = vec![target];
        let mut current = target;
        while let Some(parent) = self.dom.parent_element(current) {
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        chain
    }

    fn move_pointer(&mut self, chain: Vec<NodeId>, pointer: Option<(f64, f64)>) {
        let shared = self
            .hovered
            .iter()
            .zip(&chain)
            .take_while(|(before, after)| before == after)
            .count();
        let exited = self.hovered.split_off(shared);
        let entered = chain[shared..].to_vec();
        self.hovered = chain;

        for node in exited.into_iter().rev() {
            self.dispatch(EventState::new(EventType::MouseLeave, EventTarget::Node(node)));
        }
        for node in entered {
            let mut event = EventState::new(EventType::MouseEnter, EventTarget::Node(node));
            if let Some((x, y)) = pointer {
                event = event.with_pointer(x, y);
            }
            self.dispatch(event);
        }
    }

    pub fn scroll_to(&mut self, y: f64) -> Result<()> {
        if !y.is_finite() {
            return Err(Error::Dom(format!("scroll position must be finite, got {y}")));
        }
        stacker::grow(USER_ACTION_STACK_SIZE, || self.scroll_window_to(y));
        Ok(())
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(Error::Dom(format!(
                "viewport size must be non-negative, got {width}x{height}"
            )));
        }
        self.viewport.width = width;
        self.viewport.height = height;
        stacker::grow(USER_ACTION_STACK_SIZE, || {
            self.dispatch(EventState::new(EventType::Resize, EventTarget::Window));
            self.process_intersections();
        });
        Ok(())
    }

    /// Lays out every element matching `selector` and re-evaluates
    /// intersection observers.
    pub fn set_layout(&mut self, selector: &str, layout: LayoutBox) -> Result<()> {
        let targets = self.dom.query_selector_all(selector)?;
        if targets.is_empty() {
            return Err(Error::SelectorNotFound(selector.to_string()));
        }
        for target in targets {
            self.dom.set_layout(target, layout)?;
        }
        stacker::grow(USER_ACTION_STACK_SIZE, || self.process_intersections());
        Ok(())
    }

    pub fn take_match_media_calls(&mut self) -> Vec<String> {
        std::mem::take(&mut self.media.calls)
    }

    pub fn scroll_y(&self) -> f64 {
        self.viewport.scroll_y
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn local_storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Messages recorded by the window error listener, oldest first.
    pub fn uncaught_errors(&self) -> &[String] {
        &self.uncaught_errors
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn text(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.text_content(target))
    }

    pub fn value(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        self.dom.value(target)
    }

    pub fn attr(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let target = self.select_one(selector)?;
        Ok(self.dom.attr(target, name))
    }

    pub fn has_class(&self, selector: &str, class_name: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        Ok(self.dom.class_contains(target, class_name))
    }

    /// Inline style value of one property; empty when unset.
    pub fn style(&self, selector: &str, property: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.style_get(target, property))
    }

    pub fn exists(&self, selector: &str) -> Result<bool> {
        Ok(self.dom.query_selector(selector)?.is_some())
    }

    pub fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.dom.query_selector_all(selector)?.len())
    }

    /// Whether the focused element matches `selector`.
    pub fn is_focused(&self, selector: &str) -> Result<bool> {
        let Some(active) = self.active_element else {
            return Ok(false);
        };
        self.dom.matches_selector(active, selector)
    }

    pub fn dump_dom(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.dump_node(target))
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.text_content(target);
        self.check(selector, target, expected, actual)
    }

    pub fn assert_value(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.value(target)?;
        self.check(selector, target, expected, actual)
    }

    pub fn assert_class(&self, selector: &str, class_name: &str, expected: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.class_contains(target, class_name);
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: format!("class {class_name} present={expected}"),
                actual: format!("class {class_name} present={actual}"),
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    /// `expected` of `None` asserts the attribute is absent.
    pub fn assert_attr(&self, selector: &str, name: &str, expected: Option<&str>) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.attr(target, name);
        if actual.as_deref() != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: format!("{name}={expected:?}"),
                actual: format!("{name}={actual:?}"),
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_style(&self, selector: &str, property: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.style_get(target, property);
        self.check(selector, target, expected, actual)
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        let _ = self.select_one(selector)?;
        Ok(())
    }

    pub fn assert_count(&self, selector: &str, expected: usize) -> Result<()> {
        let actual = self.dom.query_selector_all(selector)?.len();
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
                dom_snippet: String::new(),
            });
        }
        Ok(())
    }

    fn check(&self, selector: &str, target: NodeId, expected: &str, actual: String) -> Result<()> {
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub(crate) fn select_one(&self, selector: &str) -> Result<NodeId> {
        self.dom
            .query_selector(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    pub(crate) fn node_snippet(&self, node_id: NodeId) -> String {
        truncate_chars(&self.dom.dump_node(node_id), 200)
    }

    fn describe_target(&self, target: EventTarget) -> String {
        match target {
            EventTarget::Window => "window".into(),
            EventTarget::Node(node) if node == self.dom.root => "document".into(),
            EventTarget::Node(node) => {
                let tag = self.dom.tag_name(node).unwrap_or("#text");
                match self.dom.attr(node, "id") {
                    Some(id) => format!("{tag}#{id}"),
                    None => tag.to_string(),
                }
            }
        }
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace_state.enabled = enabled;
    }

    pub fn set_trace_events(&mut self, enabled: bool) {
        self.trace_state.events = enabled;
    }

    pub fn set_trace_timers(&mut self, enabled: bool) {
        self.trace_state.timers = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::Config(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace_state.log_limit = max_entries;
        while self.trace_state.logs.len() > self.trace_state.log_limit {
            self.trace_state.logs.pop_front();
        }
        Ok(())
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.trace_state.logs.drain(..).collect()
    }

    pub(crate) fn trace_event_line(&mut self, line: String) {
        if self.trace_state.events {
            self.trace_state.push(line);
        }
    }

    pub(crate) fn trace_timer_line(&mut self, line: String) {
        if self.trace_state.timers {
            self.trace_state.push(line);
        }
    }
}

/// Keeps at most `max` UTF-16 code units, the unit `maxlength` counts in.
fn truncate_utf16(text: &str, max: usize) -> String {
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        used += ch.len_utf16();
        if used > max {
            break;
        }
        out.push(ch);
    }
    out
}
