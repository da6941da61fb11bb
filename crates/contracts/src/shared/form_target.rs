use std::fmt;

/// Endpoints the page forms are submitted to.
///
/// The server owns the handlers; the UI only needs the `action` URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    SubscriberCreate,
    SubscriberEdit(i64),
    SubscriberDelete(i64),
    OrderCreate,
    OrderDelete(i64),
    Payment,
    UserCreate,
    UserEdit(i64),
    UserDelete(i64),
    PricesUpdate,
}

impl FormTarget {
    pub fn action(&self) -> String {
        match self {
            FormTarget::SubscriberCreate => "/subscribers/create".to_string(),
            FormTarget::SubscriberEdit(id) => format!("/subscribers/{}/edit", id),
            FormTarget::SubscriberDelete(id) => format!("/subscribers/{}/delete", id),
            FormTarget::OrderCreate => "/orders/create".to_string(),
            FormTarget::OrderDelete(id) => format!("/orders/{}/delete", id),
            FormTarget::Payment => "/orders/payment".to_string(),
            FormTarget::UserCreate => "/admin/users/create".to_string(),
            FormTarget::UserEdit(id) => format!("/admin/users/{}/edit", id),
            FormTarget::UserDelete(id) => format!("/admin/users/{}/delete", id),
            FormTarget::PricesUpdate => "/admin/prices/update".to_string(),
        }
    }
}

impl fmt::Display for FormTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.action())
    }
}
