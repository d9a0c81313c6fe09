use std::sync::{Arc, Mutex};

/// Source of the four filter inputs, read once per search.
///
/// The setter pair is used when a rendered row's service or version is
/// clicked to re-filter the feed.
pub trait FilterSource {
    fn service_text(&self) -> String;
    fn version_text(&self) -> String;
    fn start_text(&self) -> String;
    fn end_text(&self) -> String;

    fn set_service_text(&mut self, value: &str);
    fn set_version_text(&mut self, value: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub service: String,
    pub version: String,
    pub start: String,
    pub end: String,
}

impl FilterSource for FilterForm {
    fn service_text(&self) -> String {
        self.service.clone()
    }

    fn version_text(&self) -> String {
        self.version.clone()
    }

    fn start_text(&self) -> String {
        self.start.clone()
    }

    fn end_text(&self) -> String {
        self.end.clone()
    }

    fn set_service_text(&mut self, value: &str) {
        self.service = value.to_string();
    }

    fn set_version_text(&mut self, value: &str) {
        self.version = value.to_string();
    }
}

/// A form edited from one place (an input loop) and read by the viewer.
#[derive(Debug, Clone, Default)]
pub struct SharedForm(Arc<Mutex<FilterForm>>);

impl SharedForm {
    pub fn new(form: FilterForm) -> Self {
        SharedForm(Arc::new(Mutex::new(form)))
    }

    pub fn update(&self, f: impl FnOnce(&mut FilterForm)) {
        let mut guard = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard);
    }

    pub fn snapshot(&self) -> FilterForm {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl FilterSource for SharedForm {
    fn service_text(&self) -> String {
        self.snapshot().service
    }

    fn version_text(&self) -> String {
        self.snapshot().version
    }

    fn start_text(&self) -> String {
        self.snapshot().start
    }

    fn end_text(&self) -> String {
        self.snapshot().end
    }

    fn set_service_text(&mut self, value: &str) {
        self.update(|form| form.service = value.to_string());
    }

    fn set_version_text(&mut self, value: &str) {
        self.update(|form| form.version = value.to_string());
    }
}
