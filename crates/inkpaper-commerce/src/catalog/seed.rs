//! Built-in Ink & Paper product list.

use crate::catalog::{Category, Product};
use crate::money::Money;

fn picsum(id: u32) -> String {
    format!("https://picsum.photos/id/{}/600/600", id)
}

pub(crate) fn products() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "Lamy Safari Fountain Pen - Charcoal",
            Money::new(2960),
            Category::Pens,
        )
        .with_description(
            "The timeless classic. Made of sturdy ABS plastic with a black steel nib. \
             Ergonomic grip for tireless writing.",
        )
        .with_image(picsum(1))
        .with_rating(4.9, 1250),
        Product::new(
            "2",
            "Archer & Olive Dot Grid Notebook - A5",
            Money::new(3400),
            Category::Notebooks,
        )
        .with_description(
            "Ultra-thick 160gsm crisp white pages. No ghosting or bleeding. \
             Perfect for bullet journaling.",
        )
        .with_image(picsum(24))
        .with_rating(5.0, 890)
        .new_arrival(),
        Product::new(
            "3",
            "Tombow Dual Brush Pen Set - Pastel",
            Money::new(2800),
            Category::ArtSupplies,
        )
        .with_description(
            "Set of 10 pastel colors. Flexible brush tip and fine tip in one marker. \
             Water-based ink blends easily.",
        )
        .with_image(picsum(104))
        .with_rating(4.8, 2100)
        .on_sale(),
        Product::new(
            "4",
            "Rose Gold Desk Organizer Set",
            Money::new(1999),
            Category::DeskAccessories,
        )
        .with_description(
            "Keep your workspace tidy and stylish. Includes pen cup, letter sorter, \
             and sticky note holder.",
        )
        .with_image(picsum(201))
        .with_rating(4.5, 320),
        Product::new(
            "5",
            "Kaweco Sport Classic Fountain Pen - Mint",
            Money::new(2450),
            Category::Pens,
        )
        .with_description(
            "Pocket-sized when closed, full-sized when open. A design icon since 1935. \
             Gold-plated nib.",
        )
        .with_image(picsum(250))
        .with_rating(4.7, 560),
        Product::new(
            "6",
            "Sakura Pigma Micron Set - 005 to 08",
            Money::new(1200),
            Category::ArtSupplies,
        )
        .with_description(
            "6-piece fineliner set. Archival quality ink that is waterproof, \
             chemical resistant, and fade resistant.",
        )
        .with_image(picsum(367))
        .with_rating(4.9, 3200),
        Product::new(
            "7",
            "Midori MD Notebook - A5 Grid",
            Money::new(1150),
            Category::Notebooks,
        )
        .with_description(
            "Made in Japan. Features MD Paper designed for the ultimate writing comfort. \
             Opens flat.",
        )
        .with_image(picsum(366))
        .with_rating(4.8, 450),
        Product::new(
            "8",
            "Pilot Iroshizuku Ink - Kon-peki",
            Money::new(1650),
            Category::Pens,
        )
        .with_description(
            "Premium bottled ink from Japan. \"Deep Cerulean Blue\". \
             Known for its smooth flow and beautiful shading.",
        )
        .with_image(picsum(400))
        .with_rating(5.0, 890),
        Product::new(
            "9",
            "Stationery Gift Box - \"The Writer\"",
            Money::new(6500),
            Category::Gifts,
        )
        .with_description(
            "Includes a fountain pen, a premium notebook, and a bottle of ink. \
             Beautifully gift wrapped.",
        )
        .with_image(picsum(500))
        .with_rating(4.9, 45)
        .new_arrival(),
        Product::new(
            "10",
            "Rotring 600 Mechanical Pencil - 0.5mm",
            Money::new(3200),
            Category::Pens,
        )
        .with_description(
            "Professional drafting pencil with a full metal body. \
             Hexagonal shape prevents sliding on tables.",
        )
        .with_image(picsum(600))
        .with_rating(4.9, 1100),
        Product::new(
            "11",
            "Winsor & Newton Cotman Watercolor Set",
            Money::new(2100),
            Category::ArtSupplies,
        )
        .with_description(
            "12 half pans in a pocket-sized box. High quality, transparent watercolors \
             with good tinting strength.",
        )
        .with_image(picsum(700))
        .with_rating(4.6, 780)
        .on_sale(),
        Product::new(
            "12",
            "MT Washi Tape - 5 Pack",
            Money::new(850),
            Category::ArtSupplies,
        )
        .with_description(
            "Authentic Japanese masking tape. Versatile and decorative. \
             Removes without leaving residue.",
        )
        .with_image(picsum(800))
        .with_rating(4.7, 230),
    ]
}
