use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Behavior bound to a click on an element. Exactly one binding per element;
/// the engine dispatches on it (single interception point).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickBinding {
    /// Swallow the click and open the shame interstitial.
    Intercept,
    /// Interstitial confirm: ask the host to close the current view.
    ConfirmClose,
    /// Interstitial dismiss: remove the overlay, nothing else.
    DismissOverlay,
}

/// Small closed set of element roles, resolved once per candidate instead of
/// ad hoc tag checks scattered through classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Image,
    Button,
    Input,
    Anchor,
    Other,
}

#[derive(Debug)]
pub struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    text: String,
    natural_width: u32,
    natural_height: u32,
    rendered_width: u32,
    rendered_height: u32,
    styles: HashMap<String, String>,
    click: Option<ClickBinding>,
    fallback_src: Option<String>,
    children: Vec<ElementHandle>,
    parent: Option<WeakElement>,
}

/// Shared handle to a live element. Identity is pointer identity, like a DOM
/// node reference: two handles are the same element iff they point at the
/// same allocation.
#[derive(Debug, Clone)]
pub struct ElementHandle(Rc<RefCell<ElementData>>);

/// Non-owning reference; upgrading fails once the document has dropped the
/// element.
#[derive(Debug, Clone)]
pub struct WeakElement(Weak<RefCell<ElementData>>);

impl PartialEq for ElementHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for ElementHandle {}

impl ElementHandle {
    pub fn new(tag: &str) -> Self {
        ElementHandle(Rc::new(RefCell::new(ElementData {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attrs: HashMap::new(),
            text: String::new(),
            natural_width: 0,
            natural_height: 0,
            rendered_width: 0,
            rendered_height: 0,
            styles: HashMap::new(),
            click: None,
            fallback_src: None,
            children: Vec::new(),
            parent: None,
        })))
    }

    pub fn downgrade(&self) -> WeakElement {
        WeakElement(Rc::downgrade(&self.0))
    }

    /// Stable address-based key for ledger association.
    pub fn ptr_key(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    /// Resolve the element's role from tag, `type`, and `role` attributes.
    pub fn role(&self) -> ElementRole {
        let data = self.0.borrow();
        match data.tag.as_str() {
            "img" => ElementRole::Image,
            "button" => ElementRole::Button,
            "a" => ElementRole::Anchor,
            "input" => match data.attrs.get("type").map(String::as_str) {
                Some("submit") | Some("button") | Some("image") => ElementRole::Button,
                _ => ElementRole::Input,
            },
            _ => {
                if data.attrs.get("role").map(String::as_str) == Some("button") {
                    ElementRole::Button
                } else {
                    ElementRole::Other
                }
            }
        }
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn set_id(&self, id: &str) {
        self.0.borrow_mut().id = Some(id.to_string());
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn class_string(&self) -> String {
        self.0.borrow().classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    pub fn add_class(&self, class: &str) {
        let mut data = self.0.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.0.borrow().attrs.contains_key(name)
    }

    /// Direct attribute write, bypassing the document journal. Used while
    /// assembling subtrees that are not attached yet; live writes go through
    /// `Document::set_attr`.
    pub fn set_attr_silent(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr_silent(&self, name: &str) {
        self.0.borrow_mut().attrs.remove(name);
    }

    /// Own text content of this node (not the subtree).
    pub fn own_text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    /// Replace the whole visible label: children go away, own text remains
    /// (the `innerHTML = label` analogue).
    pub fn replace_text(&self, text: &str) {
        let mut data = self.0.borrow_mut();
        data.children.clear();
        data.text = text.to_string();
    }

    /// Subtree text, whitespace-joined — the `innerText` analogue.
    pub fn visible_text(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ").trim().to_string()
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        let data = self.0.borrow();
        let own = data.text.trim();
        if !own.is_empty() {
            out.push(own.to_string());
        }
        for child in &data.children {
            child.collect_text(out);
        }
    }

    pub fn natural_size(&self) -> (u32, u32) {
        let data = self.0.borrow();
        (data.natural_width, data.natural_height)
    }

    pub fn set_natural_size(&self, width: u32, height: u32) {
        let mut data = self.0.borrow_mut();
        data.natural_width = width;
        data.natural_height = height;
    }

    pub fn rendered_size(&self) -> (u32, u32) {
        let data = self.0.borrow();
        (data.rendered_width, data.rendered_height)
    }

    pub fn set_rendered_size(&self, width: u32, height: u32) {
        let mut data = self.0.borrow_mut();
        data.rendered_width = width;
        data.rendered_height = height;
    }

    pub fn style(&self, name: &str) -> Option<String> {
        self.0.borrow().styles.get(name).cloned()
    }

    pub fn set_style(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(name.to_string(), value.to_string());
    }

    pub fn click_binding(&self) -> Option<ClickBinding> {
        self.0.borrow().click
    }

    pub fn bind_click(&self, binding: ClickBinding) {
        self.0.borrow_mut().click = Some(binding);
    }

    pub fn fallback_src(&self) -> Option<String> {
        self.0.borrow().fallback_src.clone()
    }

    pub fn set_fallback_src(&self, src: &str) {
        self.0.borrow_mut().fallback_src = Some(src.to_string());
    }

    pub fn children(&self) -> Vec<ElementHandle> {
        self.0.borrow().children.clone()
    }

    pub fn parent(&self) -> Option<ElementHandle> {
        self.0
            .borrow()
            .parent
            .as_ref()
            .and_then(|weak| weak.upgrade())
    }

    pub(crate) fn push_child(&self, child: &ElementHandle) {
        child.0.borrow_mut().parent = Some(self.downgrade());
        self.0.borrow_mut().children.push(child.clone());
    }

    pub(crate) fn insert_child_front(&self, child: &ElementHandle) {
        child.0.borrow_mut().parent = Some(self.downgrade());
        self.0.borrow_mut().children.insert(0, child.clone());
    }

    pub(crate) fn remove_child(&self, child: &ElementHandle) {
        self.0.borrow_mut().children.retain(|c| c != child);
        child.0.borrow_mut().parent = None;
    }
}

impl WeakElement {
    pub fn upgrade(&self) -> Option<ElementHandle> {
        self.0.upgrade().map(ElementHandle)
    }
}
