//! Contact directory formatting — the one document kind with no model
//! call. A pure, local, stable sort plus one formatted block per contact.

use serde::{Deserialize, Serialize};

/// A directory entry. Email and phone may be absent; a missing value
/// compares as the empty string when sorting and renders empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Field a contact list can be ordered by. Ties keep input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactSortField {
    Name,
    Role,
    Email,
}

impl Contact {
    fn sort_key(&self, field: ContactSortField) -> &str {
        match field {
            ContactSortField::Name => &self.name,
            ContactSortField::Role => &self.role,
            ContactSortField::Email => self.email.as_deref().unwrap_or(""),
        }
    }
}

/// Renders one contact as a labeled block. Missing fields render empty
/// rather than being omitted, so every block has the same shape.
pub fn format_contact(contact: &Contact) -> String {
    format!(
        "Name: {}\nRole: {}\nEmail: {}\nPhone: {}",
        contact.name,
        contact.role,
        contact.email.as_deref().unwrap_or(""),
        contact.phone.as_deref().unwrap_or(""),
    )
}

/// Stable sort by the requested field, then one formatted block per
/// contact in the sorted order.
pub fn generate_contact_list(contacts: &[Contact], sort_field: ContactSortField) -> Vec<String> {
    let mut ordered: Vec<&Contact> = contacts.iter().collect();
    ordered.sort_by(|a, b| a.sort_key(sort_field).cmp(b.sort_key(sort_field)));
    ordered.into_iter().map(format_contact).collect()
}
