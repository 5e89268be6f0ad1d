use log::{debug, info};

use crate::i18n::binding::{write_text, BindingIndex, BoundNode};
use crate::i18n::language::Language;
use crate::i18n::storage::LanguageStore;
use crate::i18n::table::TranslationTable;

pub type ObserverId = usize;

/// Swaps bound document text between languages.
///
/// Missing keys and unsupported codes leave the page untouched; a partially
/// translated label is always preferred over a blank one.
pub struct Localizer<N> {
    table: TranslationTable,
    index: BindingIndex<N>,
    store: Box<dyn LanguageStore>,
    default: Language,
    observers: Vec<(ObserverId, Box<dyn Fn(Language)>)>,
    next_observer: ObserverId,
    started: bool,
}

impl<N: BoundNode> Localizer<N> {
    pub fn new(
        table: TranslationTable,
        index: BindingIndex<N>,
        store: Box<dyn LanguageStore>,
        default: Language,
    ) -> Self {
        Self {
            table,
            index,
            store,
            default,
            observers: Vec::new(),
            next_observer: 0,
            started: false,
        }
    }

    /// Registers a listener run after every successful switch, in
    /// registration order.
    pub fn subscribe(&mut self, observer: impl Fn(Language) + 'static) -> ObserverId {
        let id = self.next_observer;
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.retain(|(existing, _)| *existing != id);
    }

    /// Persisted language if it is one this page supports, otherwise the default.
    pub fn active_language(&self) -> Language {
        self.store
            .load()
            .as_deref()
            .and_then(Language::from_code)
            .filter(|lang| self.table.supports(*lang))
            .unwrap_or(self.default)
    }

    pub fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        self.table.lookup(lang, key)
    }

    /// Applies the active language once. Later calls do nothing.
    pub fn start(&mut self) -> Option<Language> {
        if self.started {
            return None;
        }
        self.started = true;
        let lang = self.active_language();
        self.set_language(lang.code())
    }

    pub fn set_language(&mut self, code: &str) -> Option<Language> {
        let lang = match Language::from_code(code) {
            Some(lang) if self.table.supports(lang) => lang,
            _ => {
                debug!("ignoring unsupported language {:?}", code);
                return None;
            }
        };

        let mut texts = 0;
        for (key, node) in self.index.text_nodes() {
            if let Some(value) = self.table.lookup(lang, key) {
                write_text(node, value);
                texts += 1;
            }
        }

        let mut placeholders = 0;
        for (key, node) in self.index.placeholder_nodes() {
            if let Some(value) = self.table.lookup(lang, key) {
                node.set_placeholder(value);
                placeholders += 1;
            }
        }

        self.store.save(lang.code());
        for (_, observer) in &self.observers {
            observer(lang);
        }

        info!(
            "language {} applied ({} texts, {} placeholders)",
            lang, texts, placeholders
        );
        Some(lang)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rstest::rstest;

    use super::*;
    use crate::i18n::binding::fake::FakeNode;
    use crate::i18n::storage::memory::MemoryStore;
    use crate::i18n::table::Dictionary;

    struct Page {
        title: FakeNode,
        hero: FakeNode,
        hero_copy: FakeNode,
        untranslated: FakeNode,
        email: FakeNode,
    }

    impl Page {
        fn new() -> Self {
            Self {
                title: FakeNode::with_text("About"),
                hero: FakeNode::with_text("Next<br>Gen"),
                hero_copy: FakeNode::with_text("Next<br>Gen"),
                untranslated: FakeNode::with_text("Keep me"),
                email: FakeNode::with_placeholder("Your email"),
            }
        }

        fn index(&self) -> BindingIndex<FakeNode> {
            let mut index = BindingIndex::new();
            index.bind_text("nav-about", self.title.clone());
            index.bind_text("hero-title", self.hero.clone());
            index.bind_text("hero-title", self.hero_copy.clone());
            index.bind_text("only-in-ru", self.untranslated.clone());
            index.bind_placeholder("form-ph", self.email.clone());
            index
        }

        fn snapshot(&self) -> Vec<String> {
            vec![
                self.title.content(),
                self.hero.content(),
                self.hero_copy.content(),
                self.untranslated.content(),
                self.email.placeholder(),
            ]
        }
    }

    fn table() -> TranslationTable {
        let mut table = TranslationTable::default();
        table.insert(Language::Ru, "nav-about", "О проекте");
        table.insert(Language::Ru, "hero-title", "Городская<br>аэромобильность");
        table.insert(Language::Ru, "only-in-ru", "Только по-русски");
        table.insert(Language::Ru, "form-ph", "Ваш email");
        table.insert(Language::En, "nav-about", "About");
        table.insert(Language::En, "hero-title", "Urban<br>Air Mobility");
        table.insert(Language::En, "form-ph", "Your email");
        table
    }

    fn engine(page: &Page, store: &MemoryStore) -> Localizer<FakeNode> {
        Localizer::new(table(), page.index(), Box::new(store.clone()), Language::Ru)
    }

    #[test]
    fn switches_every_bound_node() {
        let page = Page::new();
        let store = MemoryStore::default();
        let mut engine = engine(&page, &store);

        assert_eq!(engine.set_language("RU"), Some(Language::Ru));
        assert_eq!(page.title.content(), "О проекте");
        assert_eq!(page.hero.content(), "Городская<br>аэромобильность");
        assert_eq!(page.hero_copy.content(), "Городская<br>аэромобильность");
        assert_eq!(page.email.placeholder(), "Ваш email");
    }

    #[test]
    fn missing_keys_keep_previous_text() {
        let page = Page::new();
        let store = MemoryStore::default();
        let mut engine = engine(&page, &store);

        engine.set_language("RU");
        engine.set_language("EN");
        assert_eq!(page.untranslated.content(), "Только по-русски");
        assert_eq!(page.title.content(), "About");
    }

    #[test]
    fn repeated_switch_is_idempotent() {
        let page = Page::new();
        let store = MemoryStore::default();
        let mut engine = engine(&page, &store);

        engine.set_language("EN");
        let once = page.snapshot();
        engine.set_language("EN");
        assert_eq!(page.snapshot(), once);
        assert_eq!(store.value().as_deref(), Some("EN"));
    }

    #[rstest]
    #[case("XX")]
    #[case("KK")]
    #[case("")]
    fn unsupported_codes_change_nothing(#[case] code: &str) {
        let page = Page::new();
        let store = MemoryStore::holding("EN");
        let mut engine = engine(&page, &store);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        engine.subscribe(move |lang| sink.borrow_mut().push(lang));

        let before = page.snapshot();
        assert_eq!(engine.set_language(code), None);
        assert_eq!(page.snapshot(), before);
        assert_eq!(store.value().as_deref(), Some("EN"));
        assert_eq!(*store.writes.borrow(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn empty_translations_keep_previous_text() {
        let page = Page::new();
        let store = MemoryStore::default();
        let mut table = TranslationTable::default();
        table.insert(Language::En, "only-in-ru", "");
        table.insert(Language::En, "form-ph", "");
        let mut engine = Localizer::new(table, page.index(), Box::new(store.clone()), Language::Ru);

        assert_eq!(engine.set_language("EN"), Some(Language::En));
        assert_eq!(page.untranslated.content(), "Keep me");
        assert_eq!(page.email.placeholder(), "Your email");
        assert_eq!(page.untranslated.0.borrow().text_writes, 0);
        assert_eq!(page.untranslated.0.borrow().markup_writes, 0);
    }

    #[test]
    fn selection_survives_a_fresh_engine() {
        let page = Page::new();
        let store = MemoryStore::default();
        engine(&page, &store).set_language("EN");

        let reloaded = Page::new();
        let mut fresh = engine(&reloaded, &store);
        assert_eq!(fresh.active_language(), Language::En);
        fresh.start();
        assert_eq!(reloaded.title.content(), "About");
    }

    #[test]
    fn active_language_falls_back_to_default() {
        let page = Page::new();
        assert_eq!(engine(&page, &MemoryStore::default()).active_language(), Language::Ru);
        assert_eq!(engine(&page, &MemoryStore::holding("XX")).active_language(), Language::Ru);
        // Valid code, but this table has no Kazakh block.
        assert_eq!(engine(&page, &MemoryStore::holding("KK")).active_language(), Language::Ru);
    }

    #[test]
    fn active_language_is_a_pure_read() {
        let page = Page::new();
        let store = MemoryStore::default();
        let engine = engine(&page, &store);
        let before = page.snapshot();
        engine.active_language();
        assert_eq!(page.snapshot(), before);
        assert_eq!(store.value(), None);
    }

    #[test]
    fn start_applies_once() {
        let page = Page::new();
        let store = MemoryStore::default();
        let mut engine = engine(&page, &store);

        assert_eq!(engine.start(), Some(Language::Ru));
        assert_eq!(page.title.content(), "О проекте");

        page.title.set_text("edited");
        assert_eq!(engine.start(), None);
        assert_eq!(page.title.content(), "edited");
    }

    #[test]
    fn observers_run_in_order_and_can_leave() {
        let page = Page::new();
        let store = MemoryStore::default();
        let mut engine = engine(&page, &store);
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = log.clone();
        let id = engine.subscribe(move |lang| first.borrow_mut().push(format!("label:{lang}")));
        let second = log.clone();
        engine.subscribe(move |lang| second.borrow_mut().push(format!("event:{lang}")));

        engine.set_language("EN");
        engine.unsubscribe(id);
        engine.set_language("RU");

        assert_eq!(*log.borrow(), vec!["label:EN", "event:EN", "event:RU"]);
    }

    #[test]
    fn default_then_user_choice_then_reload() {
        let dictionary = TranslationTable::load(Dictionary::Home).unwrap();
        let store = MemoryStore::default();
        let nav = FakeNode::with_text("");
        let search = FakeNode::with_placeholder("");
        let build = |nav: &FakeNode, search: &FakeNode| {
            let mut index = BindingIndex::new();
            index.bind_text("nav-about", nav.clone());
            index.bind_placeholder("search-ph", search.clone());
            Localizer::new(dictionary.clone(), index, Box::new(store.clone()), Language::Ru)
        };

        let mut engine = build(&nav, &search);
        engine.start();
        assert_eq!(nav.content(), "О проекте");
        assert_eq!(search.placeholder(), "Поиск...");

        engine.set_language("EN");
        assert_eq!(nav.content(), "About");
        assert_eq!(search.placeholder(), "Search...");

        let nav_again = FakeNode::with_text("");
        let search_again = FakeNode::with_placeholder("");
        build(&nav_again, &search_again).start();
        assert_eq!(nav_again.content(), "About");
        assert_eq!(search_again.placeholder(), "Search...");
    }
}
