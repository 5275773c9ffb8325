use super::*;

const NOTIFICATION_STYLES_ID: &str = "notification-styles";

const NOTIFICATION_CSS: &str = r#"
.notification {
    position: fixed;
    top: 100px;
    right: 20px;
    background: white;
    padding: 1rem 1.5rem;
    border-radius: 12px;
    box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);
    z-index: 10000;
    animation: slideInRight 0.3s ease;
    max-width: 400px;
}
[data-theme="dark"] .notification {
    background: #1f2937;
    color: white;
}
.notification-success { border-left: 4px solid #10b981; }
.notification-error { border-left: 4px solid #ef4444; }
.notification-info { border-left: 4px solid #6366f1; }
.notification-content {
    display: flex;
    align-items: center;
    gap: 1rem;
}
.notification-content i { font-size: 1.5rem; }
.notification-success .notification-content i { color: #10b981; }
.notification-error .notification-content i { color: #ef4444; }
.notification-info .notification-content i { color: #6366f1; }
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
"#;

/// Flavor of a toast; picks its accent class and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Info => "fa-info-circle",
        }
    }
}

impl Page {
    /// Replaces any visible toast with a new one that dismisses itself.
    ///
    /// The previous toast is detached at once; its pending exit timers still
    /// fire later against the detached node and change nothing visible.
    pub fn show_notification(&mut self, message: &str, kind: ToastKind) -> Result<()> {
        if let Some(existing) = self.dom.query_selector(".notification")? {
            self.dom.remove_node(existing)?;
        }

        let toast = self.dom.create_detached_element("div");
        self.dom
            .set_class_name(toast, &format!("notification notification-{}", kind.as_str()))?;
        let mut content_attrs = HashMap::new();
        content_attrs.insert("class".to_string(), "notification-content".to_string());
        let content = self.dom.create_element(toast, "div".into(), content_attrs);
        let mut icon_attrs = HashMap::new();
        icon_attrs.insert("class".to_string(), format!("fas {}", kind.icon()));
        self.dom.create_element(content, "i".into(), icon_attrs);
        let span = self.dom.create_element(content, "span".into(), HashMap::new());
        self.dom.create_text(span, message.to_string());

        self.ensure_stylesheet(NOTIFICATION_STYLES_ID, NOTIFICATION_CSS)?;
        let Some(body) = self.dom.body() else {
            return Ok(());
        };
        self.dom.append_child(body, toast)?;
        tracing::debug!(kind = kind.as_str(), message, "notification shown");

        self.set_timeout(TimerTask::ToastExit(toast), self.config.notifications.visible_ms);
        Ok(())
    }

    pub(crate) fn toast_exit(&mut self, toast: NodeId) -> Result<()> {
        self.dom
            .style_set(toast, "animation", "slideInRight 0.3s ease reverse")?;
        self.set_timeout(TimerTask::RemoveNode(toast), self.config.notifications.exit_ms);
        Ok(())
    }
}
