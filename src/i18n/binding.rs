use std::collections::HashMap;

use crate::i18n::markup::{self, Rendered};

/// A document node whose text or placeholder is owned by the localizer.
pub trait BoundNode {
    fn markup(&self) -> String;
    fn set_text(&self, text: &str);
    fn set_markup(&self, markup: &str);
    fn set_placeholder(&self, text: &str);
}

/// Nodes grouped by the key they are bound to, built once at startup.
#[derive(Debug)]
pub struct BindingIndex<N> {
    text: HashMap<String, Vec<N>>,
    placeholder: HashMap<String, Vec<N>>,
}

impl<N> Default for BindingIndex<N> {
    fn default() -> Self {
        Self {
            text: HashMap::new(),
            placeholder: HashMap::new(),
        }
    }
}

impl<N: BoundNode> BindingIndex<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_text(&mut self, key: impl Into<String>, node: N) {
        self.text.entry(key.into()).or_default().push(node);
    }

    pub fn bind_placeholder(&mut self, key: impl Into<String>, node: N) {
        self.placeholder.entry(key.into()).or_default().push(node);
    }

    pub fn text_nodes(&self) -> impl Iterator<Item = (&str, &N)> {
        flatten(&self.text)
    }

    pub fn placeholder_nodes(&self) -> impl Iterator<Item = (&str, &N)> {
        flatten(&self.placeholder)
    }

    /// Indexes `node` under each key it carries; a node with both a text and
    /// a placeholder key appears in both maps.
    pub fn bind(&mut self, text_key: Option<String>, placeholder_key: Option<String>, node: N)
    where
        N: Clone,
    {
        match (text_key, placeholder_key) {
            (Some(text), Some(placeholder)) => {
                self.bind_text(text, node.clone());
                self.bind_placeholder(placeholder, node);
            }
            (Some(text), None) => self.bind_text(text, node),
            (None, Some(placeholder)) => self.bind_placeholder(placeholder, node),
            (None, None) => {}
        }
    }

    /// Number of (key, node) bindings, counting a doubly bound node twice.
    pub fn len(&self) -> usize {
        self.text.values().chain(self.placeholder.values()).map(Vec::len).sum()
    }
}

fn flatten<N>(map: &HashMap<String, Vec<N>>) -> impl Iterator<Item = (&str, &N)> {
    map.iter()
        .flat_map(|(key, nodes)| nodes.iter().map(move |node| (key.as_str(), node)))
}

/// Writes `target` into the node content, picking text or markup.
pub fn write_text<N: BoundNode>(node: &N, target: &str) {
    match markup::render(&node.markup(), target) {
        Rendered::Text(text) => node.set_text(&text),
        Rendered::Markup(html) => node.set_markup(&html),
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::BoundNode;

    #[derive(Debug, Default)]
    pub struct NodeState {
        pub markup: String,
        pub placeholder: String,
        pub markup_writes: usize,
        pub text_writes: usize,
    }

    /// Shared handle so tests can inspect a node after handing it to an index.
    #[derive(Debug, Clone, Default)]
    pub struct FakeNode(pub Rc<RefCell<NodeState>>);

    impl FakeNode {
        pub fn with_text(text: &str) -> Self {
            let node = Self::default();
            node.0.borrow_mut().markup = text.to_string();
            node
        }

        pub fn with_placeholder(text: &str) -> Self {
            let node = Self::default();
            node.0.borrow_mut().placeholder = text.to_string();
            node
        }

        pub fn content(&self) -> String {
            self.0.borrow().markup.clone()
        }

        pub fn placeholder(&self) -> String {
            self.0.borrow().placeholder.clone()
        }
    }

    impl BoundNode for FakeNode {
        fn markup(&self) -> String {
            self.0.borrow().markup.clone()
        }

        fn set_text(&self, text: &str) {
            let mut state = self.0.borrow_mut();
            state.markup = text
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;");
            state.text_writes += 1;
        }

        fn set_markup(&self, markup: &str) {
            let mut state = self.0.borrow_mut();
            state.markup = markup.to_string();
            state.markup_writes += 1;
        }

        fn set_placeholder(&self, text: &str) {
            self.0.borrow_mut().placeholder = text.to_string();
        }
    }
}
