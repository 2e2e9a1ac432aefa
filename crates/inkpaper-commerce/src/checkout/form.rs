//! Checkout form and validation.

use crate::checkout::{ContactDetails, ShippingAddress};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// How the customer pays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card details. Nothing is charged; the fields are only checked for presence.
    Card {
        number: String,
        expiry: String,
        cvc: String,
        name_on_card: String,
    },
    /// UPI / netbanking, handled off-site.
    Upi,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card { .. } => "Credit Card",
            PaymentMethod::Upi => "UPI / Netbanking",
        }
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            PaymentMethod::Card {
                number,
                expiry,
                cvc,
                name_on_card,
            } => vec![
                ("card number", number.as_str()),
                ("expiry", expiry.as_str()),
                ("cvc", cvc.as_str()),
                ("name on card", name_on_card.as_str()),
            ],
            PaymentMethod::Upi => Vec::new(),
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Card {
            number: String::new(),
            expiry: String::new(),
            cvc: String::new(),
            name_on_card: String::new(),
        }
    }
}

/// Everything the checkout screen collects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CheckoutForm {
    pub contact: ContactDetails,
    pub shipping: ShippingAddress,
    pub payment: PaymentMethod,
}

impl CheckoutForm {
    /// Names of every required field that is blank or malformed.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        let email = self.contact.email.trim();
        if email.is_empty() || !email.contains('@') {
            missing.push("email");
        }

        let fields = self
            .shipping
            .required_fields()
            .into_iter()
            .chain(self.payment.required_fields());
        for (name, value) in fields {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }

        missing
    }

    /// Check every required field is present.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::CheckoutIncomplete(missing.join(", ")))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn complete_form() -> CheckoutForm {
        CheckoutForm {
            contact: ContactDetails::new("you@example.com"),
            shipping: ShippingAddress {
                first_name: "Alex".into(),
                last_name: "Johnson".into(),
                address: "123 Main St".into(),
                city: "Mumbai".into(),
                state: "Maharashtra".into(),
                pincode: "400001".into(),
                phone: "+91 98765 43210".into(),
            },
            payment: PaymentMethod::Card {
                number: "4111 1111 1111 1111".into(),
                expiry: "12/29".into(),
                cvc: "123".into(),
                name_on_card: "Alex Johnson".into(),
            },
        }
    }

    #[test]
    fn test_complete_form_validates() {
        assert!(complete_form().validate().is_ok());
    }

    #[test]
    fn test_empty_form_lists_every_field() {
        let missing = CheckoutForm::default().missing_fields();
        assert_eq!(missing.len(), 12);
        assert_eq!(missing[0], "email");
        assert!(missing.contains(&"name on card"));
    }

    #[test]
    fn test_upi_needs_no_card_fields() {
        let mut form = complete_form();
        form.payment = PaymentMethod::Upi;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_blank_and_malformed_fields() {
        let mut form = complete_form();
        form.contact.email = "not-an-email".into();
        form.shipping.city = "   ".into();
        let err = form.validate().unwrap_err();
        assert!(matches!(
            err,
            CommerceError::CheckoutIncomplete(ref s) if s == "email, city"
        ));
    }
}
