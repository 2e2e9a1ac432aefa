//! Interactive shopping session.

use std::io::{self, Write};

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};
use inkpaper_commerce::checkout::{CheckoutForm, ContactDetails, PaymentMethod, ShippingAddress};
use inkpaper_commerce::storefront::{Intent, Storefront, ViewKind};
use inkpaper_commerce::CommerceError;
use tracing::debug;

use super::ShopArgs;
use crate::context::Context;
use crate::render;
use crate::shell::{self, ShellCommand, HELP};

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront(args.seed)?;
    let mut advisor = ctx.advisor_session(store.catalog())?;
    let store_name = &ctx.config.store.name;
    let assistant = &ctx.config.advisor.assistant_name;

    render::snapshot(&ctx.output, store_name, &store.snapshot());
    ctx.output.info("Type 'help' for commands, 'quit' to leave.");

    let mut line = String::new();
    loop {
        if !ctx.output.is_json() {
            print!("{} ", style(format!("{}>", store.view().kind())).cyan());
            io::stdout().flush()?;
        }

        // The stdin lock is released between lines so prompts can read too.
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let command = match shell::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                ctx.output.warn(&e.to_string());
                continue;
            }
        };
        debug!(?command, "Shop command");

        match command {
            ShellCommand::Nothing => {}
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                ctx.output.header("Commands");
                for (usage, what) in HELP {
                    ctx.output.kv(usage, what);
                }
            }
            ShellCommand::Show => render::snapshot(&ctx.output, store_name, &store.snapshot()),
            ShellCommand::Intent(intent) => apply(ctx, &mut store, intent),
            ShellCommand::Place => place(ctx, &mut store)?,
            ShellCommand::Ask(question) => {
                let spinner = ctx.output.spinner(&format!("{} is thinking...", assistant));
                let reply = advisor.send(&question).await.map(|m| m.text.clone());
                spinner.finish_and_clear();
                if let Some(reply) = reply {
                    ctx.output.speaker(assistant, &reply);
                }
            }
        }
    }

    ctx.output.success(&format!("Thanks for visiting {}!", store_name));
    Ok(())
}

/// Dispatch one intent and redraw, or explain why it was refused.
fn apply(ctx: &Context, store: &mut Storefront, intent: Intent) {
    match store.dispatch(intent) {
        Ok(()) => render::snapshot(&ctx.output, &ctx.config.store.name, &store.snapshot()),
        Err(e) => ctx.output.warn(&refusal(&e)),
    }
}

fn refusal(e: &CommerceError) -> String {
    match e {
        CommerceError::InvalidTransition { from, .. } if from == ViewKind::OrderSuccess.as_str() => {
            "Your order is complete. Type 'home' to continue shopping.".to_string()
        }
        CommerceError::InvalidTransition { from, intent } => {
            format!("Can't do '{}' from the {} page", intent, from)
        }
        other => other.to_string(),
    }
}

/// Collect the checkout form and place the order.
fn place(ctx: &Context, store: &mut Storefront) -> Result<()> {
    if store.view().kind() != ViewKind::Checkout {
        ctx.output.warn("Go to checkout first ('checkout').");
        return Ok(());
    }
    if store.cart().is_empty() {
        ctx.output.warn(&refusal(&CommerceError::EmptyCart));
        return Ok(());
    }

    let form = prompt_form()?;
    if let Err(e) = form.validate() {
        ctx.output.warn(&e.to_string());
        return Ok(());
    }

    apply(ctx, store, Intent::PlaceOrder(form));
    Ok(())
}

fn prompt_field(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_form() -> Result<CheckoutForm> {
    let contact = ContactDetails::new(prompt_field("Email address")?);
    let shipping = ShippingAddress {
        first_name: prompt_field("First name")?,
        last_name: prompt_field("Last name")?,
        address: prompt_field("Address")?,
        city: prompt_field("City")?,
        state: prompt_field("State")?,
        pincode: prompt_field("Pincode")?,
        phone: prompt_field("Phone")?,
    };

    let methods = [
        PaymentMethod::default().label(),
        PaymentMethod::Upi.label(),
    ];
    let choice = Select::new()
        .with_prompt("Payment method")
        .items(&methods[..])
        .default(0)
        .interact()?;

    let payment = if choice == 0 {
        PaymentMethod::Card {
            number: prompt_field("Card number")?,
            expiry: prompt_field("Expiry (MM/YY)")?,
            cvc: prompt_field("CVC")?,
            name_on_card: prompt_field("Name on card")?,
        }
    } else {
        PaymentMethod::Upi
    };

    Ok(CheckoutForm {
        contact,
        shipping,
        payment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpaper_commerce::catalog::Catalog;
    use inkpaper_commerce::ProductId;

    #[test]
    fn test_refusal_after_order_points_home() {
        let e = CommerceError::InvalidTransition {
            from: "order-success".to_string(),
            intent: "add_to_cart".to_string(),
        };
        assert!(refusal(&e).contains("'home'"));
    }

    #[test]
    fn test_refusal_names_intent_and_page() {
        let mut store = Storefront::new(Catalog::ink_and_paper());
        let err = store.dispatch(Intent::BackToShop).unwrap_err();
        let msg = refusal(&err);
        assert!(msg.contains("back_to_shop"));
        assert!(msg.contains("home"));

        let err = store.dispatch(Intent::AddToCart(ProductId::new("99"))).unwrap_err();
        assert_eq!(refusal(&err), "Product not found: 99");
    }
}
