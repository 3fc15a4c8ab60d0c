//! Stateless renderers. Each function takes props and returns terminal
//! text; nothing here reads or mutates application state.

use crate::controller::ViewProps;
use phonebook_types::Contact;

pub fn render_notification(notification: Option<&str>) -> Option<String> {
    notification.map(|message| format!("** {message} **"))
}

pub fn render_filter(filter: &str) -> String {
    format!("Filter shown with: {filter}")
}

pub fn render_form(pending_name: &str, pending_number: &str) -> String {
    format!("Name: {pending_name}\nNumber: {pending_number}")
}

pub fn render_contacts(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .map(|contact| format!("{} {}  [delete {}]", contact.name, contact.number, contact.id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The whole page: banner, filter box, entry form, visible list.
pub fn render_page(props: &ViewProps) -> String {
    let mut sections = vec!["Phonebook".to_string()];

    if let Some(banner) = render_notification(props.notification.as_deref()) {
        sections.push(banner);
    }

    sections.push(render_filter(&props.filter));
    sections.push("Add a new".to_string());
    sections.push(render_form(&props.pending_name, &props.pending_number));
    sections.push("Numbers".to_string());
    sections.push(render_contacts(&props.visible_contacts));

    sections.join("\n\n")
}
