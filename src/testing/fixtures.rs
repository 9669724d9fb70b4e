//! Ready-made pages for tests and demos.

use crate::dom::{Dom, NodeData};
use crate::page::Page;

/// The landing page the controller is written for.
///
/// ```text
///   body
///    ├── nav.navbar
///    │    └── ul.navbar-nav
///    │         ├── li.nav-item > a.nav-link.active[href=#home]
///    │         ├── li.nav-item > a.nav-link[href=#about]
///    │         └── li.nav-item > a.nav-link[href=#contact]
///    ├── section#home      0..500
///    │    ├── button#primary-btn
///    │    └── button#secondary-btn
///    ├── section#about     500..1200
///    │    ├── div.progress > div.progress-bar  75%
///    │    └── button#demo-btn > span.spinner-border.d-none
///    ├── section#contact   1200..2000
///    │    └── form#contact-form
///    │         ├── input[name=name]
///    │         ├── input[name=email]
///    │         ├── textarea[name=message]
///    │         └── button[type=submit]
///    └── div#notification-toast.toast > div#toast-message.toast-body
/// ```
pub fn landing_page() -> Page {
    let mut dom = Dom::new();
    let body = dom.insert(NodeData::new("body"));

    let nav = dom.insert_child(body, NodeData::new("nav").with_class("navbar"));
    let list = dom.insert_child(nav, NodeData::new("ul").with_class("navbar-nav"));
    for (section, label) in [("home", "Home"), ("about", "About"), ("contact", "Contact")] {
        let item = dom.insert_child(list, NodeData::new("li").with_class("nav-item"));
        let mut link = NodeData::new("a")
            .with_class("nav-link")
            .with_attr("href", format!("#{section}"))
            .with_text(label);
        if section == "home" {
            link = link.with_class("active");
        }
        dom.insert_child(item, link);
    }

    let home = dom.insert_child(
        body,
        NodeData::new("section").with_id("home").with_layout(0, 500),
    );
    dom.insert_child(
        home,
        NodeData::new("button")
            .with_id("primary-btn")
            .with_classes(["btn", "btn-primary"])
            .with_text("Get started"),
    );
    dom.insert_child(
        home,
        NodeData::new("button")
            .with_id("secondary-btn")
            .with_classes(["btn", "btn-secondary"])
            .with_text("Learn more"),
    );

    let about = dom.insert_child(
        body,
        NodeData::new("section").with_id("about").with_layout(500, 700),
    );
    let progress = dom.insert_child(about, NodeData::new("div").with_class("progress"));
    let mut bar = NodeData::new("div").with_class("progress-bar").with_text("75%");
    bar.width = Some("75%".to_owned());
    dom.insert_child(progress, bar);
    let demo = dom.insert_child(
        about,
        NodeData::new("button")
            .with_id("demo-btn")
            .with_classes(["btn", "btn-success"])
            .with_text("Run demo"),
    );
    dom.insert_child(
        demo,
        NodeData::new("span").with_classes(["spinner-border", "spinner-border-sm", "d-none"]),
    );

    let contact = dom.insert_child(
        body,
        NodeData::new("section").with_id("contact").with_layout(1200, 800),
    );
    let form = dom.insert_child(contact, NodeData::new("form").with_id("contact-form"));
    dom.insert_child(
        form,
        NodeData::new("input")
            .with_attr("type", "text")
            .with_attr("name", "name"),
    );
    dom.insert_child(
        form,
        NodeData::new("input")
            .with_attr("type", "email")
            .with_attr("name", "email"),
    );
    dom.insert_child(form, NodeData::new("textarea").with_attr("name", "message"));
    dom.insert_child(
        form,
        NodeData::new("button")
            .with_attr("type", "submit")
            .with_text("Send"),
    );

    let toast = dom.insert_child(
        body,
        NodeData::new("div").with_id("notification-toast").with_class("toast"),
    );
    dom.insert_child(
        toast,
        NodeData::new("div").with_id("toast-message").with_class("toast-body"),
    );

    Page::new(dom)
}

/// A page with nothing but a body.
pub fn empty_page() -> Page {
    let mut dom = Dom::new();
    dom.insert(NodeData::new("body"));
    Page::new(dom)
}
