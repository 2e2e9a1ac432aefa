//! Contact and shipping address details.

use serde::{Deserialize, Serialize};

/// Contact details collected at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactDetails {
    /// Email for the confirmation.
    pub email: String,
}

impl ContactDetails {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// A shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShippingAddress {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Six-digit postal code.
    pub pincode: String,
    /// Phone number.
    pub phone: String,
}

impl ShippingAddress {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.pincode
        )
    }

    /// Required fields paired with their form names.
    pub(crate) fn required_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("first name", self.first_name.as_str()),
            ("last name", self.last_name.as_str()),
            ("address", self.address.as_str()),
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
            ("pincode", self.pincode.as_str()),
            ("phone", self.phone.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting() {
        let addr = ShippingAddress {
            first_name: "Alex".into(),
            last_name: "Johnson".into(),
            address: "123 Main St, Apt 4B".into(),
            city: "Mumbai".into(),
            state: "Maharashtra".into(),
            pincode: "400001".into(),
            phone: "+91 98765 43210".into(),
        };
        assert_eq!(addr.full_name(), "Alex Johnson");
        assert_eq!(
            addr.one_line(),
            "123 Main St, Apt 4B, Mumbai, Maharashtra 400001"
        );
    }
}
