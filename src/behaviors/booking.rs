use super::*;
use fancy_regex::Regex;
use std::sync::OnceLock;

const REQUIRED_FIELDS: &str = "input[required], select[required], textarea[required]";
const INVALID_BORDER: &str = "#ef4444";
const VALID_BORDER: &str = "#10b981";

/// The `valid e-mail address` production of HTML forms.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL_REGEX: OnceLock<std::result::Result<Regex, String>> = OnceLock::new();

pub(crate) fn is_valid_email(value: &str) -> Result<bool> {
    let regex = EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).map_err(|err| err.to_string()))
        .as_ref()
        .map_err(|err| Error::Dom(format!("invalid email pattern: {err}")))?;
    regex
        .is_match(value)
        .map_err(|err| Error::Dom(format!("email match failed: {err}")))
}

impl Page {
    pub(crate) fn init_booking_tabs(&mut self) -> Result<()> {
        let tabs = self.dom.query_selector_all(".tab-btn")?;
        let forms = self.dom.query_selector_all(".booking-form")?;
        for tab in &tabs {
            self.on(*tab, EventType::Click, Handler::BookingTab);
        }
        self.controllers.booking = BookingController { tabs, forms };
        Ok(())
    }

    pub(crate) fn init_forms(&mut self) -> Result<()> {
        for form in self.controllers.booking.forms.clone() {
            self.on(form, EventType::Submit, Handler::BookingSubmit);
        }
        if let Some(form) = self.dom.by_id("contactForm") {
            self.on(form, EventType::Submit, Handler::ContactSubmit);
        }
        if let Some(form) = self.dom.by_id("newsletterForm") {
            self.on(form, EventType::Submit, Handler::NewsletterSubmit);
        }
        Ok(())
    }

    pub(crate) fn on_booking_tab(&mut self, event: &EventState) -> Result<()> {
        let tab = event.current_node()?;
        let panel_id = format!("{}Form", self.dom.attr(tab, "data-tab").unwrap_or_default());

        let BookingController { tabs, forms } = &self.controllers.booking;
        let (tabs, forms) = (tabs.clone(), forms.clone());
        for other in tabs {
            self.dom.class_remove(other, "active")?;
        }
        self.dom.class_add(tab, "active")?;
        for form in forms {
            self.dom.class_remove(form, "active")?;
            if self.dom.attr(form, "id").as_deref() == Some(panel_id.as_str()) {
                self.dom.class_add(form, "active")?;
            }
        }

        self.create_ripple(tab, event.pointer)
    }

    /// Marks every required control of the form and reports whether all of
    /// them hold a non-blank value. A missing form is invalid.
    pub fn validate_form(&mut self, selector: &str) -> Result<bool> {
        match self.dom.query_selector(selector)? {
            Some(form) => self.validate_form_node(form),
            None => Ok(false),
        }
    }

    pub(crate) fn validate_form_node(&mut self, form: NodeId) -> Result<bool> {
        let mut valid = true;
        for field in self.dom.query_selector_all_from(form, REQUIRED_FIELDS)? {
            if self.dom.value(field)?.trim().is_empty() {
                valid = false;
                self.dom.style_set(field, "border-color", INVALID_BORDER)?;
                self.set_timeout(
                    TimerTask::ClearBorderColor(field),
                    self.config.forms.validation_reset_ms,
                );
            } else {
                self.dom.style_set(field, "border-color", VALID_BORDER)?;
            }
        }
        Ok(valid)
    }

    pub(crate) fn on_booking_submit(&mut self, event: &mut EventState) -> Result<()> {
        event.prevent_default();
        let form = event.current_node()?;
        if self.validate_form_node(form)? {
            self.show_notification("Searching for best deals...", ToastKind::Info)?;
            self.set_timeout(
                TimerTask::BookingResult,
                self.config.forms.booking_result_delay_ms,
            );
        } else {
            self.show_notification("Please fill all required fields", ToastKind::Error)?;
        }
        Ok(())
    }

    pub(crate) fn on_contact_submit(&mut self, event: &mut EventState) -> Result<()> {
        event.prevent_default();
        let form = event.current_node()?;
        if self.validate_form_node(form)? {
            self.show_notification(
                "Message sent successfully! We'll get back to you soon.",
                ToastKind::Success,
            )?;
            self.dom.reset_form(form)?;
        } else {
            self.show_notification("Please fill all required fields", ToastKind::Error)?;
        }
        Ok(())
    }

    pub(crate) fn on_newsletter_submit(&mut self, event: &mut EventState) -> Result<()> {
        event.prevent_default();
        let form = event.current_node()?;
        let email = self.dom.query_selector_from(form, r#"input[type="email"]"#)?;
        let valid = match email {
            Some(input) => {
                let value = self.dom.value(input)?;
                let value = value.trim();
                !value.is_empty() && is_valid_email(value)?
            }
            None => false,
        };

        if valid {
            self.show_notification(
                "Successfully subscribed to our newsletter!",
                ToastKind::Success,
            )?;
            self.dom.reset_form(form)?;
        } else {
            self.show_notification("Please enter a valid email address", ToastKind::Error)?;
        }
        Ok(())
    }

    /// Name of the booking tab currently marked active.
    pub fn active_booking_tab(&self) -> Option<String> {
        self.controllers
            .booking
            .tabs
            .iter()
            .find(|tab| self.dom.class_contains(**tab, "active"))
            .and_then(|tab| self.dom.attr(*tab, "data-tab"))
    }
}
