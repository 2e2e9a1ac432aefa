//! Line commands for the interactive shop.

use anyhow::{anyhow, bail, Result};
use inkpaper_commerce::catalog::CategorySelection;
use inkpaper_commerce::search::SpecialTag;
use inkpaper_commerce::storefront::{FooterLink, Intent, SupportTopic};
use inkpaper_commerce::ProductId;

/// One parsed line of shop input.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Goes straight to the storefront.
    Intent(Intent),
    /// Prompt for the checkout form, then place the order.
    Place,
    /// Message for the advisor.
    Ask(String),
    /// Re-render the current screen.
    Show,
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

/// Command summary shown by `help`.
pub const HELP: &[(&str, &str)] = &[
    ("home", "Go to the home page"),
    ("search <text>", "Search products by name or category"),
    ("category <name|all>", "Browse a category"),
    ("new | sale | bestsellers", "Browse curated picks"),
    ("footer <link>", "Follow a footer link (e.g. \"Best Sellers\", faq)"),
    ("clear", "Clear the active filter"),
    ("view <id>", "Open a product"),
    ("back", "Back to the listing from a product"),
    ("add <id> | remove <id>", "Add to or remove from the cart"),
    ("qty <id> <+n|-n>", "Change a cart quantity"),
    ("cart | close", "Open or close the cart panel"),
    ("checkout | leave", "Go to or leave checkout"),
    ("place", "Fill in the checkout form and place the order"),
    ("support [topic]", "Help pages: faq, shipping, track, contact"),
    ("account", "Your account"),
    ("ask <question>", "Ask the stationery advisor"),
    ("show", "Show the current screen again"),
    ("help | quit", "This list, or leave the shop"),
];

/// Parse one input line.
pub fn parse(line: &str) -> Result<ShellCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ShellCommand::Nothing);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let intent = match word.to_lowercase().as_str() {
        "home" => Intent::Home,
        "search" => Intent::Search(rest.to_string()),
        "category" | "cat" => {
            let selection = if rest.is_empty() {
                CategorySelection::All
            } else {
                rest.parse()?
            };
            Intent::SelectCategory(selection)
        }
        "new" => Intent::ShowSpecial(SpecialTag::New),
        "sale" => Intent::ShowSpecial(SpecialTag::Sale),
        "bestsellers" | "bestseller" => Intent::ShowSpecial(SpecialTag::Bestseller),
        "footer" => Intent::FooterLink(required(rest, "footer link")?.parse::<FooterLink>()?),
        "clear" => Intent::ClearFilters,
        "view" | "open" => Intent::OpenProduct(ProductId::new(required(rest, "product id")?)),
        "back" => Intent::BackToShop,
        "add" => Intent::AddToCart(ProductId::new(required(rest, "product id")?)),
        "remove" | "rm" => Intent::RemoveFromCart(ProductId::new(required(rest, "product id")?)),
        "qty" => {
            let mut args = rest.split_whitespace();
            let (Some(id), Some(delta), None) = (args.next(), args.next(), args.next()) else {
                bail!("usage: qty <id> <+n|-n>");
            };
            let delta = delta
                .parse::<i64>()
                .map_err(|_| anyhow!("quantity change must be a whole number, got '{}'", delta))?;
            Intent::AdjustQuantity {
                id: ProductId::new(id),
                delta,
            }
        }
        "cart" => Intent::OpenCart,
        "close" => Intent::CloseCart,
        "checkout" => Intent::Checkout,
        "leave" => Intent::LeaveCheckout,
        "support" | "help-center" => {
            let topic = if rest.is_empty() {
                SupportTopic::Faq
            } else {
                rest.parse()?
            };
            Intent::OpenSupport(topic)
        }
        "account" => Intent::OpenAccount,
        "place" => return Ok(ShellCommand::Place),
        "ask" => return Ok(ShellCommand::Ask(required(rest, "question")?.to_string())),
        "show" | "ls" => return Ok(ShellCommand::Show),
        "help" | "?" => return Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => return Ok(ShellCommand::Quit),
        other => bail!("unknown command '{}' (type 'help')", other),
    };

    Ok(ShellCommand::Intent(intent))
}

fn required<'a>(rest: &'a str, what: &str) -> Result<&'a str> {
    if rest.is_empty() {
        bail!("missing {}", what);
    }
    Ok(rest)
}
