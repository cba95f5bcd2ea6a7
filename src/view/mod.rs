//! Declarative views.
//!
//! Render functions build a [`Node`] tree instead of touching a document.
//! Nodes that react to the user carry an [`Intent`]; the application's
//! dispatcher decides what each intent does. A render always produces the
//! complete content of the mount, never a patch.

pub mod detail;
pub mod form;
pub mod render;
pub mod roster;

use crate::cli::types::PlayerId;

pub use detail::render_detail;
pub use form::{CreationForm, FormInput, TeamDirectory, TeamSelection};
pub use render::{to_html, to_text};
pub use roster::{render_roster, NO_PLAYERS_MESSAGE};

/// A user action a view node can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Show the detail view of one player.
    SelectPlayer(PlayerId),
    /// Return to the roster.
    Back,
    /// Delete a player, then return to the roster.
    RemovePlayer(PlayerId),
    /// Submit the creation form.
    SubmitForm,
}

/// One node of a view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
    pub intent: Option<Intent>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            intent: None,
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn on(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl Node {
    /// All text beneath this node, concatenated in document order.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.clone(),
            Node::Element(e) => e.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Depth-first search for elements with the given tag.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    fn collect_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if let Node::Element(e) = self {
            if e.tag == tag {
                found.push(e);
            }
            for c in &e.children {
                c.collect_tag(tag, found);
            }
        }
    }

    /// Find the element with the given `id` attribute.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Element(e) => {
                if e.get_attr("id") == Some(id) {
                    return Some(e);
                }
                e.children.iter().find_map(|c| c.find_by_id(id))
            }
        }
    }

    /// Every intent attached anywhere in the tree, in document order.
    pub fn intents(&self) -> Vec<&Intent> {
        match self {
            Node::Text(_) => Vec::new(),
            Node::Element(e) => e
                .intent
                .iter()
                .chain(e.children.iter().flat_map(Node::intents))
                .collect(),
        }
    }
}
