//! Tests for the service registry.

use http::Method;

use super::service::{Action, Operation, ServiceKind};
use crate::error::{Error, ErrorKind};

mod names {
    use super::*;

    #[test]
    fn snake_case_names_resolve() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.name().parse::<ServiceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn camel_case_aliases_resolve() {
        assert_eq!(
            "paymentIntents".parse::<ServiceKind>().unwrap(),
            ServiceKind::PaymentIntents
        );
        assert_eq!(
            "paymentMethods".parse::<ServiceKind>().unwrap(),
            ServiceKind::PaymentMethods
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let error = "invoices".parse::<ServiceKind>().unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UnknownService);
        assert_eq!(error.to_string(), "Service 'invoices' does not exist");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!("Payments".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn display_matches_path_segment() {
        assert_eq!(ServiceKind::PaymentIntents.to_string(), "payment_intents");
        assert_eq!(Action::Unarchive.to_string(), "unarchive");
        assert_eq!(Operation::Action(Action::Capture).to_string(), "capture");
        assert_eq!(Operation::List.to_string(), "list");
    }
}

mod capabilities {
    use super::*;

    #[test]
    fn every_service_retrieves() {
        for kind in ServiceKind::ALL {
            assert!(kind.supports(Operation::Retrieve), "{kind}");
        }
    }

    #[test]
    fn payment_methods_only_retrieve() {
        let kind = ServiceKind::PaymentMethods;

        assert!(!kind.supports(Operation::Create));
        assert!(!kind.supports(Operation::List));
        assert!(!kind.supports(Operation::Update));
        assert!(!kind.supports(Operation::Delete));
    }

    #[test]
    fn list_support() {
        let listing: Vec<_> = ServiceKind::ALL
            .into_iter()
            .filter(|kind| kind.supports(Operation::List))
            .collect();

        assert_eq!(
            listing,
            vec![
                ServiceKind::Links,
                ServiceKind::Payments,
                ServiceKind::Refunds,
                ServiceKind::Webhooks,
            ]
        );
    }

    #[test]
    fn only_customers_delete() {
        for kind in ServiceKind::ALL {
            assert_eq!(
                kind.supports(Operation::Delete),
                kind == ServiceKind::Customers,
                "{kind}"
            );
        }
    }

    #[test]
    fn update_methods() {
        assert_eq!(ServiceKind::Customers.update_method(), Some(Method::POST));
        assert_eq!(ServiceKind::Webhooks.update_method(), Some(Method::PUT));
        assert_eq!(ServiceKind::Payments.update_method(), None);
        assert!(!ServiceKind::Payments.supports(Operation::Update));
    }

    #[test]
    fn actions_belong_to_their_service() {
        use Action::{Archive, Attach, Cancel, Capture, Disable, Enable, Unarchive};

        for action in [Attach, Capture, Cancel] {
            assert!(ServiceKind::PaymentIntents.supports(Operation::Action(action)));
            assert!(!ServiceKind::Links.supports(Operation::Action(action)));
        }
        for action in [Archive, Unarchive] {
            assert!(ServiceKind::Links.supports(Operation::Action(action)));
            assert!(!ServiceKind::Webhooks.supports(Operation::Action(action)));
        }
        for action in [Enable, Disable] {
            assert!(ServiceKind::Webhooks.supports(Operation::Action(action)));
            assert!(!ServiceKind::PaymentIntents.supports(Operation::Action(action)));
        }
    }

    #[test]
    fn ensure_supports_reports_service_and_operation() {
        let error = ServiceKind::Refunds
            .ensure_supports(Operation::Delete)
            .unwrap_err();

        assert!(matches!(
            error,
            Error::UnsupportedOperation {
                service: ServiceKind::Refunds,
                operation: Operation::Delete,
            }
        ));
        assert_eq!(
            error.to_string(),
            "The refunds service does not support delete"
        );
    }
}
