//! Render the demo page and print the resulting HTML.
//!
//! Run with: cargo run --example render_page

use dom::HtmlSerializer;
use page::{PageBuilder, PageConfig};

const CONFIG: &str = r##"{
    "title": "Loki",
    "background": "loki/background.jpg",
    "favicon": "loki/logo.png",
    "fontColor": "#fff",
    "backgroundColor": "#141218",
    "subColor": "#9D2929",
    "header": {
        "logo": "loki/logo.png",
        "menu": [
            {"title": "Description", "link": "#"},
            {"title": "Trailer", "link": "#"},
            {"title": "Reviews", "link": "#"}
        ],
        "social": [
            {"title": "Twitter", "link": "https://twitter.com", "image": "loki/social/twitter.svg"},
            {"title": "Instagram", "link": "https://instagram.com", "image": "loki/social/instagram.svg"},
            {"title": "Facebook", "link": "https://facebook.com", "image": "loki/social/facebook.svg"}
        ]
    },
    "main": {
        "genre": "2021, fantasy, action, adventure",
        "rating": "8",
        "description": "After stealing the Tesseract, Loki is brought to the Time Variance Authority and travels through time, altering history.",
        "trailer": "https://youtu.be/YrjHcYqe31g",
        "slider": [
            {"img": "loki/series/series-1.jpg", "title": "Glorious Purpose", "subtitle": "Episode 1"},
            {"img": "loki/series/series-2.jpg", "title": "The Variant", "subtitle": "Episode 2"},
            {"img": "loki/series/series-3.jpg", "title": "Lamentis", "subtitle": "Episode 3"},
            {"img": "loki/series/series-4.jpg", "title": "The Nexus Event", "subtitle": "Episode 4"},
            {"img": "loki/series/series-5.jpg", "title": "Journey into Mystery", "subtitle": "Episode 5"},
            {"img": "loki/series/series-6.jpg", "title": "For All Time. Always.", "subtitle": "Episode 6"}
        ]
    }
}"##;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = PageConfig::from_json(CONFIG)?;

    let mut builder = PageBuilder::new();
    {
        let doc = builder.document_mut();
        let app = doc.create_element("div");
        doc.add_class(app, "app")?;
        let body = doc.body_id();
        doc.append_child(body, app)?;
    }

    builder.render(".app", &config)?;

    let html = HtmlSerializer::new().serialize(builder.document())?;
    println!("{}", html);

    Ok(())
}
