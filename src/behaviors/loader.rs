use super::*;

const HERO_ELEMENTS: &str = ".hero-badge, .hero-title, .hero-description, .hero-buttons";

impl Page {
    /// Window `load`: schedules the loader fade-out and the hero entrance.
    pub(crate) fn on_page_load(&mut self) -> Result<()> {
        tracing::info!("page load complete");
        if let Some(loader) = self.dom.by_id("loader") {
            self.set_timeout(TimerTask::LoaderHide(loader), self.config.loader.hide_ms);
        }
        let stagger = self.config.loader.hero_stagger_ms;
        for (index, element) in self
            .dom
            .query_selector_all(HERO_ELEMENTS)?
            .into_iter()
            .enumerate()
        {
            let delay = i64::try_from(index).unwrap_or(i64::MAX).saturating_mul(stagger);
            self.set_timeout(TimerTask::HeroPrepare(element), delay);
        }
        Ok(())
    }

    pub(crate) fn hide_loader(&mut self, loader: NodeId) -> Result<()> {
        self.dom.class_add(loader, "hidden")?;
        self.set_timeout(TimerTask::LoaderDetach(loader), self.config.loader.detach_ms);
        Ok(())
    }

    pub(crate) fn prepare_hero_element(&mut self, element: NodeId) -> Result<()> {
        self.dom.style_set(element, "opacity", "0")?;
        self.dom.style_set(element, "transform", "translateY(30px)")?;
        self.dom.style_set(element, "transition", "all 0.8s ease")?;
        self.set_timeout(TimerTask::HeroSettle(element), self.config.loader.hero_settle_ms);
        Ok(())
    }

    pub(crate) fn settle_hero_element(&mut self, element: NodeId) -> Result<()> {
        self.dom.style_set(element, "opacity", "1")?;
        self.dom.style_set(element, "transform", "translateY(0)")
    }

    pub(crate) fn apply_parallax(&mut self) -> Result<()> {
        let Some(hero) = self.dom.query_selector(".hero")? else {
            return Ok(());
        };
        let rate = self.viewport.scroll_y * self.config.animation.parallax_rate;
        self.dom
            .style_set(hero, "transform", &format!("translateY({}px)", format_number(rate)))
    }

    pub(crate) fn observe_lazy_images(&mut self) -> Result<()> {
        self.intersections.register(ObserverKind::LazyImage, 0.0);
        for image in self.dom.query_selector_all("img[data-src]")? {
            self.intersections.observe(ObserverKind::LazyImage, image);
        }
        Ok(())
    }

    pub(crate) fn on_lazy_image_visible(&mut self, image: NodeId) -> Result<()> {
        let Some(source) = self.dom.attr(image, "data-src").filter(|src| !src.is_empty()) else {
            return Ok(());
        };
        self.dom.set_attr(image, "src", &source)?;
        self.dom.remove_attr(image, "data-src")?;
        self.intersections.unobserve(ObserverKind::LazyImage, image);
        Ok(())
    }
}
