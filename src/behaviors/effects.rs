use super::*;

const RIPPLE_TARGETS: &str = ".btn, .tab-btn, .service-link, .back-to-top";
const RIPPLE_STYLES_ID: &str = "ripple-styles";

const RIPPLE_CSS: &str = r#"
.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.6);
    transform: scale(0);
    animation: ripple-animation 0.6s ease-out;
    pointer-events: none;
}
@keyframes ripple-animation {
    to {
        transform: scale(4);
        opacity: 0;
    }
}
"#;

impl Page {
    pub(crate) fn init_ripples(&mut self) -> Result<()> {
        for target in self.dom.query_selector_all(RIPPLE_TARGETS)? {
            self.on(target, EventType::Click, Handler::Ripple);
        }
        Ok(())
    }

    /// Adds a `<style id=..>` to `<head>` unless one with that id exists.
    pub(crate) fn ensure_stylesheet(&mut self, id: &str, css: &str) -> Result<()> {
        if self.dom.by_id(id).is_some() {
            return Ok(());
        }
        let Some(head) = self.dom.head() else {
            return Ok(());
        };
        let mut attrs = HashMap::new();
        attrs.insert("id".to_string(), id.to_string());
        let style = self.dom.create_element(head, "style".into(), attrs);
        self.dom.create_text(style, css.to_string());
        Ok(())
    }

    /// Appends a short-lived `span.ripple` sized to the element's larger side.
    /// With a pointer the ripple centers on it; without one its corner sits at
    /// half the size.
    pub(crate) fn create_ripple(&mut self, element: NodeId, pointer: Option<(f64, f64)>) -> Result<()> {
        let rect = self.dom.bounding_client_rect(element, self.viewport.scroll_y);
        let size = rect.width.max(rect.height);
        let (x, y) = match pointer {
            Some((client_x, client_y)) => (
                client_x - rect.left - size / 2.0,
                client_y - rect.top - size / 2.0,
            ),
            None => (size / 2.0, size / 2.0),
        };

        let ripple = self.dom.create_detached_element("span");
        let size_px = format!("{}px", format_number(size));
        self.dom.style_set(ripple, "width", &size_px)?;
        self.dom.style_set(ripple, "height", &size_px)?;
        self.dom.style_set(ripple, "left", &format!("{}px", format_number(x)))?;
        self.dom.style_set(ripple, "top", &format!("{}px", format_number(y)))?;
        self.dom.class_add(ripple, "ripple")?;

        self.ensure_stylesheet(RIPPLE_STYLES_ID, RIPPLE_CSS)?;

        self.dom.style_set(element, "position", "relative")?;
        self.dom.style_set(element, "overflow", "hidden")?;
        self.dom.append_child(element, ripple)?;
        self.set_timeout(TimerTask::RemoveNode(ripple), self.config.effects.ripple_ms);
        Ok(())
    }
}
