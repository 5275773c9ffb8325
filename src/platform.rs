use super::*;

/// Window metrics: `innerWidth`, `innerHeight` and `scrollY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            scroll_y: 0.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }
}

/// Client key-value storage.
///
/// A read-only store rejects every write, the way a browser does when storage
/// is disabled or over quota.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalStorage {
    items: BTreeMap<String, String>,
    read_only: bool,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            read_only: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::Dom(format!(
                "localStorage.setItem({key}) rejected: storage is read-only"
            )));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Default)]
pub(crate) struct MediaQueryMocks {
    pub(crate) matches: HashMap<String, bool>,
    pub(crate) calls: Vec<String>,
    pub(crate) default_matches: bool,
}

impl MediaQueryMocks {
    pub(crate) fn evaluate(&mut self, query: &str) -> bool {
        self.calls.push(query.to_string());
        self.matches
            .get(query)
            .copied()
            .unwrap_or(self.default_matches)
    }
}

#[derive(Debug)]
pub(crate) struct TraceState {
    pub(crate) enabled: bool,
    pub(crate) events: bool,
    pub(crate) timers: bool,
    pub(crate) logs: VecDeque<String>,
    pub(crate) log_limit: usize,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            enabled: false,
            events: true,
            timers: true,
            logs: VecDeque::new(),
            log_limit: 10_000,
        }
    }
}

impl TraceState {
    pub(crate) fn push(&mut self, line: String) {
        if !self.enabled {
            return;
        }
        tracing::debug!(target: "travel_page::trace", "{line}");
        if self.logs.len() >= self.log_limit {
            self.logs.pop_front();
        }
        self.logs.push_back(line);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ObserverKind {
    StatCounter,
    LazyImage,
}

#[derive(Debug, Clone)]
struct Observation {
    target: NodeId,
    was_intersecting: Option<bool>,
}

#[derive(Debug, Clone)]
struct Observer {
    kind: ObserverKind,
    threshold: f64,
    observations: Vec<Observation>,
}

/// Observed targets per observer, with the last reported intersection state.
#[derive(Debug, Default)]
pub(crate) struct IntersectionState {
    observers: Vec<Observer>,
}

impl IntersectionState {
    pub(crate) fn register(&mut self, kind: ObserverKind, threshold: f64) {
        if self.observers.iter().any(|observer| observer.kind == kind) {
            return;
        }
        self.observers.push(Observer {
            kind,
            threshold,
            observations: Vec::new(),
        });
    }

    pub(crate) fn observe(&mut self, kind: ObserverKind, target: NodeId) {
        let Some(observer) = self.observers.iter_mut().find(|o| o.kind == kind) else {
            return;
        };
        if observer.observations.iter().any(|o| o.target == target) {
            return;
        }
        observer.observations.push(Observation {
            target,
            was_intersecting: None,
        });
    }

    pub(crate) fn unobserve(&mut self, kind: ObserverKind, target: NodeId) {
        if let Some(observer) = self.observers.iter_mut().find(|o| o.kind == kind) {
            observer.observations.retain(|o| o.target != target);
        }
    }

    /// Recomputes every observation and returns the targets that just started
    /// intersecting, in observer then observation order.
    pub(crate) fn take_entries(
        &mut self,
        dom: &Dom,
        viewport: &Viewport,
    ) -> Vec<(ObserverKind, NodeId)> {
        let mut entries = Vec::new();
        for observer in &mut self.observers {
            for observation in &mut observer.observations {
                if !dom.is_connected(observation.target) {
                    continue;
                }
                let rect = dom.bounding_client_rect(observation.target, viewport.scroll_y);
                let ratio = intersection_ratio(&rect, viewport.height);
                let intersecting = if observer.threshold <= 0.0 {
                    ratio > 0.0
                } else {
                    ratio >= observer.threshold
                };
                let previous = observation.was_intersecting.replace(intersecting);
                if intersecting && previous != Some(true) {
                    entries.push((observer.kind, observation.target));
                }
            }
        }
        entries
    }
}

/// Visible fraction of `rect` inside a viewport of the given height. A box
/// without height counts as fully visible while its top edge is on screen.
pub(crate) fn intersection_ratio(rect: &ClientRect, viewport_height: f64) -> f64 {
    if rect.height <= 0.0 {
        return if rect.top >= 0.0 && rect.top <= viewport_height {
            1.0
        } else {
            0.0
        };
    }
    let bottom = rect.top + rect.height;
    let overlap = bottom.min(viewport_height) - rect.top.max(0.0);
    (overlap.max(0.0) / rect.height).clamp(0.0, 1.0)
}
