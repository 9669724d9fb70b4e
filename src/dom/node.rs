//! Node types: NodeId, NodeData, LayoutBox.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a DOM node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Vertical layout box of an element, in CSS pixels relative to the document.
///
/// Mirrors `offsetTop` / `offsetHeight`. The arena does not compute layout;
/// whoever builds the page supplies these values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutBox {
    pub offset_top: i32,
    pub offset_height: i32,
}

impl LayoutBox {
    pub fn new(offset_top: i32, offset_height: i32) -> Self {
        Self {
            offset_top,
            offset_height,
        }
    }

    /// Whether `y` falls in `[offset_top, offset_top + offset_height)`.
    pub fn contains_y(&self, y: i32) -> bool {
        y >= self.offset_top && y < self.offset_top.saturating_add(self.offset_height)
    }
}

/// Data associated with a single DOM element.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Lowercase tag name (e.g. "button", "a", "section").
    pub tag: String,
    /// Optional unique id (CSS #id selector).
    pub id: Option<String>,
    /// CSS classes, in insertion order.
    pub classes: Vec<String>,
    /// Other attributes (`href`, `name`, `type`, ...), in insertion order.
    pub attributes: Vec<(String, String)>,
    /// Own text content. Children keep their own text.
    pub text: String,
    /// Current value of a form control.
    pub value: String,
    /// Inline `style.width`, if set.
    pub width: Option<String>,
    /// Whether the element is disabled.
    pub disabled: bool,
    pub layout: LayoutBox,
}

impl NodeData {
    /// Create a new `NodeData` with the given tag and sensible defaults.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            text: String::new(),
            value: String::new(),
            width: None,
            disabled: false,
            layout: LayoutBox::default(),
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single CSS class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add multiple CSS classes (builder).
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            let class = class.into();
            if !self.classes.contains(&class) {
                self.classes.push(class);
            }
        }
        self
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(&name.into(), value);
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the form-control value (builder).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the layout box (builder).
    pub fn with_layout(mut self, offset_top: i32, offset_height: i32) -> Self {
        self.layout = LayoutBox::new(offset_top, offset_height);
        self
    }

    /// Set whether this element is disabled (builder).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Check whether this node has a given CSS class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a CSS class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a CSS class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Replace the whole class list, like assigning `className`.
    pub fn set_class_name(&mut self, class_name: &str) {
        self.classes.clear();
        for class in class_name.split_whitespace() {
            self.add_class(class);
        }
    }

    /// The class list joined with single spaces.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_owned(), value)),
        }
    }

    /// The `href` attribute, if any.
    pub fn href(&self) -> Option<&str> {
        self.attr("href")
    }

    /// The `name` attribute of a form control, if any.
    pub fn control_name(&self) -> Option<&str> {
        self.attr("name")
    }
}
