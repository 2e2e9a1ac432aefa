//! Screens and their payloads.

use crate::catalog::Product;
use crate::checkout::OrderConfirmation;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The screen currently shown, with whatever it needs to render.
///
/// Detail always carries its product and order-success always carries its
/// confirmation, so neither can be entered without one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "view", content = "payload", rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Listing,
    Detail(Product),
    Support(SupportTopic),
    Account,
    Checkout,
    OrderSuccess(OrderConfirmation),
}

impl View {
    /// Payload-free tag for this view.
    pub fn kind(&self) -> ViewKind {
        match self {
            View::Home => ViewKind::Home,
            View::Listing => ViewKind::Listing,
            View::Detail(_) => ViewKind::Detail,
            View::Support(_) => ViewKind::Support,
            View::Account => ViewKind::Account,
            View::Checkout => ViewKind::Checkout,
            View::OrderSuccess(_) => ViewKind::OrderSuccess,
        }
    }

    /// Whether the header and footer are shown around this view.
    pub fn shows_chrome(&self) -> bool {
        !matches!(self, View::Checkout | View::OrderSuccess(_))
    }
}

/// Screen tag without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    Home,
    Listing,
    Detail,
    Support,
    Account,
    Checkout,
    OrderSuccess,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Home => "home",
            ViewKind::Listing => "listing",
            ViewKind::Detail => "detail",
            ViewKind::Support => "support",
            ViewKind::Account => "account",
            ViewKind::Checkout => "checkout",
            ViewKind::OrderSuccess => "order-success",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Support articles linked from the footer and account page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportTopic {
    #[serde(rename = "FAQ")]
    Faq,
    #[serde(rename = "Shipping & Returns")]
    ShippingReturns,
    #[serde(rename = "Track Order")]
    TrackOrder,
    #[serde(rename = "Contact Us")]
    ContactUs,
}

impl SupportTopic {
    pub const ALL: [SupportTopic; 4] = [
        SupportTopic::Faq,
        SupportTopic::ShippingReturns,
        SupportTopic::TrackOrder,
        SupportTopic::ContactUs,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SupportTopic::Faq => "FAQ",
            SupportTopic::ShippingReturns => "Shipping & Returns",
            SupportTopic::TrackOrder => "Track Order",
            SupportTopic::ContactUs => "Contact Us",
        }
    }
}

impl fmt::Display for SupportTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SupportTopic {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let short = match key.to_lowercase().as_str() {
            "faq" => Some(SupportTopic::Faq),
            "shipping" | "returns" => Some(SupportTopic::ShippingReturns),
            "track" => Some(SupportTopic::TrackOrder),
            "contact" => Some(SupportTopic::ContactUs),
            _ => None,
        };
        short
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|t| t.label().eq_ignore_ascii_case(key))
            })
            .ok_or_else(|| CommerceError::UnknownSupportTopic(s.to_string()))
    }
}

/// Footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FooterLink {
    NewArrivals,
    BestSellers,
    Sales,
    Pens,
    Notebooks,
    Support(SupportTopic),
}

impl FooterLink {
    /// The shop column, in display order.
    pub const SHOP: [FooterLink; 5] = [
        FooterLink::NewArrivals,
        FooterLink::BestSellers,
        FooterLink::Pens,
        FooterLink::Notebooks,
        FooterLink::Sales,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FooterLink::NewArrivals => "New Arrivals",
            FooterLink::BestSellers => "Best Sellers",
            FooterLink::Sales => "Sales",
            FooterLink::Pens => "Pens",
            FooterLink::Notebooks => "Notebooks",
            FooterLink::Support(topic) => topic.label(),
        }
    }
}

impl FromStr for FooterLink {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if let Some(link) = Self::SHOP
            .into_iter()
            .find(|l| l.label().eq_ignore_ascii_case(key))
        {
            return Ok(link);
        }
        key.parse::<SupportTopic>().map(FooterLink::Support)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(View::Home.kind().as_str(), "home");
        assert_eq!(ViewKind::OrderSuccess.to_string(), "order-success");
    }

    #[test]
    fn test_chrome_hidden_during_checkout() {
        assert!(View::Listing.shows_chrome());
        assert!(!View::Checkout.shows_chrome());
    }

    #[test]
    fn test_support_topic_parse() {
        assert_eq!("FAQ".parse::<SupportTopic>().unwrap(), SupportTopic::Faq);
        assert_eq!(
            "shipping & returns".parse::<SupportTopic>().unwrap(),
            SupportTopic::ShippingReturns
        );
        assert_eq!("track".parse::<SupportTopic>().unwrap(), SupportTopic::TrackOrder);
        assert!("careers".parse::<SupportTopic>().is_err());
    }

    #[test]
    fn test_footer_link_parse() {
        assert_eq!("Best Sellers".parse::<FooterLink>().unwrap(), FooterLink::BestSellers);
        assert_eq!(
            "Contact Us".parse::<FooterLink>().unwrap(),
            FooterLink::Support(SupportTopic::ContactUs)
        );
        assert!("Blog".parse::<FooterLink>().is_err());
    }
}
