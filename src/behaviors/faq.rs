use super::*;

impl Page {
    pub(crate) fn init_faq(&mut self) -> Result<()> {
        let items = self.dom.query_selector_all(".faq-item")?;
        for item in &items {
            let Some(question) = self.dom.query_selector_from(*item, ".faq-question")? else {
                continue;
            };
            self.on(question, EventType::Click, Handler::FaqQuestion { item: *item });
            self.dom.set_attr(question, "tabindex", "0")?;
            self.on(question, EventType::KeyDown, Handler::FaqKey);
        }
        self.controllers.faq_items = items;
        Ok(())
    }

    /// Collapses every item, then reopens the clicked one unless it was
    /// already open.
    pub(crate) fn on_faq_question(&mut self, item: NodeId) -> Result<()> {
        let was_open = self.dom.class_contains(item, "active");
        for other in self.controllers.faq_items.clone() {
            self.dom.class_remove(other, "active")?;
        }
        if !was_open {
            self.dom.class_add(item, "active")?;
        }
        Ok(())
    }

    pub(crate) fn on_faq_key(&mut self, event: &mut EventState) -> Result<()> {
        if !(event.key_is("Enter") || event.key_is(" ")) {
            return Ok(());
        }
        event.prevent_default();
        let question = event.current_node()?;
        self.click_node(question, None)
    }

    /// Number of expanded FAQ items.
    pub fn open_faq_count(&self) -> usize {
        self.controllers
            .faq_items
            .iter()
            .filter(|item| self.dom.class_contains(**item, "active"))
            .count()
    }
}
