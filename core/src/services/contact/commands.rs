use crate::domain::entities::ContactId;

/// Input for creating a contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContactCommand {
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
}

/// Input for replacing a contact's details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateContactCommand {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
}
