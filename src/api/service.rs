//! Service registry: the fixed set of API resources and what each offers.

use std::fmt;
use std::str::FromStr;

use http::Method;

use crate::error::Error;

/// An API service, identified by the resource collection it manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    /// `/customers`
    Customers,
    /// `/links`
    Links,
    /// `/payments`
    Payments,
    /// `/payment_intents`
    PaymentIntents,
    /// `/payment_methods`
    PaymentMethods,
    /// `/refunds`
    Refunds,
    /// `/sources`
    Sources,
    /// `/webhooks`
    Webhooks,
}

/// A named operation on a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create a resource.
    Create,
    /// List resources.
    List,
    /// Retrieve a resource by id.
    Retrieve,
    /// Update a resource by id.
    Update,
    /// Delete a resource by id.
    Delete,
    /// Perform an action on a resource by id.
    Action(Action),
}

/// A state-changing action posted to `/<resource>/<id>/<action>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Attach a payment method to a payment intent.
    Attach,
    /// Capture an authorized payment intent.
    Capture,
    /// Cancel a payment intent.
    Cancel,
    /// Archive a link.
    Archive,
    /// Unarchive a link.
    Unarchive,
    /// Enable a webhook.
    Enable,
    /// Disable a webhook.
    Disable,
}

impl ServiceKind {
    /// Every registered service.
    pub const ALL: [Self; 8] = [
        Self::Customers,
        Self::Links,
        Self::Payments,
        Self::PaymentIntents,
        Self::PaymentMethods,
        Self::Refunds,
        Self::Sources,
        Self::Webhooks,
    ];

    /// Returns the snake_case name, which is also the URL path segment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Links => "links",
            Self::Payments => "payments",
            Self::PaymentIntents => "payment_intents",
            Self::PaymentMethods => "payment_methods",
            Self::Refunds => "refunds",
            Self::Sources => "sources",
            Self::Webhooks => "webhooks",
        }
    }

    const fn alias(self) -> &'static str {
        match self {
            Self::PaymentIntents => "paymentIntents",
            Self::PaymentMethods => "paymentMethods",
            other => other.name(),
        }
    }

    /// Returns the HTTP method used for updates, if the service supports them.
    #[must_use]
    pub fn update_method(self) -> Option<Method> {
        match self {
            Self::Customers => Some(Method::POST),
            Self::Webhooks => Some(Method::PUT),
            _ => None,
        }
    }

    /// Returns true if the service offers `operation`.
    #[must_use]
    pub fn supports(self, operation: Operation) -> bool {
        use Operation::{Create, Delete, List, Retrieve, Update};

        match operation {
            Retrieve => true,
            Create => !matches!(self, Self::PaymentMethods),
            List => matches!(
                self,
                Self::Links | Self::Payments | Self::Refunds | Self::Webhooks
            ),
            Update => self.update_method().is_some(),
            Delete => matches!(self, Self::Customers),
            Operation::Action(action) => matches!(
                (self, action),
                (
                    Self::PaymentIntents,
                    Action::Attach | Action::Capture | Action::Cancel
                ) | (Self::Links, Action::Archive | Action::Unarchive)
                    | (Self::Webhooks, Action::Enable | Action::Disable)
            ),
        }
    }

    /// Fails with [`Error::UnsupportedOperation`] unless `operation` is offered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] for operations the service lacks.
    pub fn ensure_supports(self, operation: Operation) -> Result<(), Error> {
        if self.supports(operation) {
            Ok(())
        } else {
            Err(Error::UnsupportedOperation {
                service: self,
                operation,
            })
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServiceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.alias() == s)
            .ok_or_else(|| Error::UnknownService(s.to_string()))
    }
}

impl Action {
    /// Returns the URL path segment for this action.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Attach => "attach",
            Self::Capture => "capture",
            Self::Cancel => "cancel",
            Self::Archive => "archive",
            Self::Unarchive => "unarchive",
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::List => f.write_str("list"),
            Self::Retrieve => f.write_str("retrieve"),
            Self::Update => f.write_str("update"),
            Self::Delete => f.write_str("delete"),
            Self::Action(action) => write!(f, "{action}"),
        }
    }
}
