use dioxus::prelude::*;
use gloo_console::error as console_error;
use serde::{Deserialize, Serialize};

use crate::common::storage::{get_local_storage, set_local_storage};

// light/dark template
//
// one flag for the whole document.  it lives in a context created by
// TemplateProvider at the root of the app, is persisted to local storage, and
// is mirrored onto <html data-template="..."> so that the stylesheet can key
// off it without going through the component tree

pub const TEMPLATE_KEY: &str = "papirmania-template";
pub const TEMPLATE_ATTRIBUTE: &str = "data-template";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Light,
    #[default]
    Dark,
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Light => "light",
            Template::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Template::Light),
            "dark" => Some(Template::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Template::Light => Template::Dark,
            Template::Dark => Template::Light,
        }
    }
}

pub trait TemplateStore {
    fn load(&self) -> Option<String>;

    fn save(&mut self, value: &str);
}

pub struct LocalTemplateStore;

impl TemplateStore for LocalTemplateStore {
    fn load(&self) -> Option<String> {
        get_local_storage(TEMPLATE_KEY).ok().flatten()
    }

    fn save(&mut self, value: &str) {
        set_local_storage(TEMPLATE_KEY, value)
    }
}

// the flag plus where it is persisted; the store holds the bare word, and
// anything that is not exactly "light" or "dark" is ignored
pub struct TemplateState<S: TemplateStore> {
    template: Template,
    store: S,
}

impl<S: TemplateStore> TemplateState<S> {
    pub fn load(store: S) -> Self {
        let template = store
            .load()
            .and_then(|value| Template::parse(&value))
            .unwrap_or_default();

        TemplateState { template, store }
    }

    pub fn template(&self) -> Template {
        self.template
    }

    pub fn set(&mut self, template: Template) -> Template {
        self.template = template;
        self.store.save(template.as_str());
        template
    }

    pub fn toggle(&mut self) -> Template {
        self.set(self.template.toggled())
    }
}

#[derive(Clone, Copy)]
pub struct TemplateContext {
    state: Signal<TemplateState<LocalTemplateStore>>,
}

impl TemplateContext {
    pub fn template(&self) -> Template {
        self.state.read().template()
    }

    pub fn is_light(&self) -> bool {
        self.template() == Template::Light
    }

    pub fn toggle(&mut self) {
        self.state.write().toggle();
    }
}

#[component]
pub fn TemplateProvider(children: Element) -> Element {
    let state = use_signal(|| TemplateState::load(LocalTemplateStore));
    let context = use_context_provider(|| TemplateContext { state });

    // reruns on every change, since template() subscribes to the signal
    use_effect(move || mirror_to_document(context.template()));

    rsx! {
        {children}
    }
}

// a component rendered outside the provider is a wiring bug, not something
// to paper over with a default
pub fn use_template() -> TemplateContext {
    match try_use_context::<TemplateContext>() {
        Some(context) => context,
        None => panic!("use_template must be used within TemplateProvider"),
    }
}

fn mirror_to_document(template: Template) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    if let Err(err) = root.set_attribute(TEMPLATE_ATTRIBUTE, template.as_str()) {
        console_error!(format!("Failed to set {TEMPLATE_ATTRIBUTE}: {err:?}"));
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    struct MemoryStore(Rc<RefCell<Option<String>>>);

    impl MemoryStore {
        fn with(value: &str) -> Self {
            MemoryStore(Rc::new(RefCell::new(Some(value.to_owned()))))
        }

        fn value(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    impl TemplateStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value()
        }

        fn save(&mut self, value: &str) {
            *self.0.borrow_mut() = Some(value.to_owned());
        }
    }

    #[test]
    fn defaults_to_dark() {
        assert_eq!(TemplateState::load(MemoryStore::default()).template(), Template::Dark);
    }

    #[test]
    fn unrecognized_stored_values_are_ignored() {
        for stored in ["blue", "Light", "", " light", "\"light\""] {
            let state = TemplateState::load(MemoryStore::with(stored));
            assert_eq!(state.template(), Template::Dark, "stored {stored:?}");
        }

        let state = TemplateState::load(MemoryStore::with("light"));
        assert_eq!(state.template(), Template::Light);
    }

    #[test]
    fn saves_the_bare_word_that_load_reads_back() {
        let store = MemoryStore::default();
        let mut state = TemplateState::load(store.clone());
        state.set(Template::Light);

        assert_eq!(store.value().as_deref(), Some("light"));
        assert_eq!(TemplateState::load(store).template(), Template::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let store = MemoryStore::default();
        let mut state = TemplateState::load(store.clone());

        assert_eq!(state.toggle(), Template::Light);
        assert_eq!(store.value().as_deref(), Some("light"));

        assert_eq!(state.toggle(), Template::Dark);
        assert_eq!(store.value().as_deref(), Some("dark"));
        assert_eq!(state.template(), Template::Dark);
    }
}
