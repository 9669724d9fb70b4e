//! Selector AST: SimpleSelector, CompoundSelector, Selector.

/// A single simple selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// Type selector: matches the tag name, ASCII case-insensitively (e.g. `a`).
    Type(String),
    /// Universal selector: `*`.
    Universal,
    /// ID selector: `#id`.
    Id(String),
    /// Class selector: `.classname`.
    Class(String),
    /// Attribute presence `[name]` or exact match `[name="value"]`.
    Attribute { name: String, value: Option<String> },
}

/// A combinator between compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (whitespace): `A B`.
    Descendant,
    /// Child combinator: `A > B`.
    Child,
}

/// A sequence of simple selectors with no combinator between them.
///
/// `a.nav-link[href="#home"]` is one compound with three components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    pub components: Vec<SimpleSelector>,
}

impl CompoundSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, component: SimpleSelector) {
        self.components.push(component);
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// One element in a selector chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorPart {
    Compound(CompoundSelector),
    Combinator(Combinator),
}

/// A full selector: compound selectors joined by combinators.
///
/// `parts` alternates compound and combinator and always starts and ends with
/// a compound when produced by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub parts: Vec<SelectorPart>,
}

impl Selector {
    /// Shorthand for `#id`.
    pub fn id(id: impl Into<String>) -> Self {
        Self::single(SimpleSelector::Id(id.into()))
    }

    /// Shorthand for `.class`.
    pub fn class(class: impl Into<String>) -> Self {
        Self::single(SimpleSelector::Class(class.into()))
    }

    /// Shorthand for `a[href="<href>"]`.
    pub fn link_to(href: impl Into<String>) -> Self {
        let mut compound = CompoundSelector::new();
        compound.push(SimpleSelector::Type("a".into()));
        compound.push(SimpleSelector::Attribute {
            name: "href".into(),
            value: Some(href.into()),
        });
        Self {
            parts: vec![SelectorPart::Compound(compound)],
        }
    }

    fn single(component: SimpleSelector) -> Self {
        let mut compound = CompoundSelector::new();
        compound.push(component);
        Self {
            parts: vec![SelectorPart::Compound(compound)],
        }
    }
}
