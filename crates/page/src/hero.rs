//! Hero section builder.
//!
//! Produces `main > div.container > div.main-content > div.content` with
//! genre tag, star rating, title, description, trailer call-to-action and
//! the episode slider, each section conditional on its configuration
//! field. The slider hands its container to the carousel collaborator.

use crate::carousel::{BreakpointSettings, CarouselOptions, CarouselWidget};
use crate::config::MainConfig;
use crate::element::{create_element, ElementProps};
use crate::error::Result;
use dom::{Document, NodeId};
use std::collections::BTreeMap;

const STAR_COUNT: i64 = 10;
const STAR_FILLED: &str = "img/star.svg";
const STAR_EMPTY: &str = "img/star-o.svg";
const PLAY_ICON: &str = "img/play.svg";
const TRAILER_LABEL: &str = "Watch trailer";

/// Build the detached hero subtree and mount the carousel if the slider
/// is configured.
pub fn build_main(
    doc: &mut Document,
    title: &str,
    config: &MainConfig,
    carousel: &mut dyn CarouselWidget,
) -> Result<NodeId> {
    let main = create_element(doc, "main", &[], ElementProps::default());
    let container = create_element(doc, "div", &["container"], ElementProps::default());
    doc.append_child(main, container)?;
    let wrapper = create_element(doc, "div", &["main-content"], ElementProps::default());
    doc.append_child(container, wrapper)?;
    let content = create_element(doc, "div", &["content"], ElementProps::default());
    doc.append_child(wrapper, content)?;

    if let Some(genre) = &config.genre {
        let genre_span = create_element(
            doc,
            "span",
            &["genre", "animated", "fadeInRight"],
            ElementProps {
                text: Some(genre.clone()),
                ..Default::default()
            },
        );
        doc.append_child(content, genre_span)?;
    }

    if let Some(rating) = &config.rating {
        let block = build_rating(doc, rating)?;
        doc.append_child(content, block)?;
    }

    let title_el = create_element(
        doc,
        "h1",
        &["main-title", "animated", "fadeInRight"],
        ElementProps {
            text: Some(title.to_string()),
            ..Default::default()
        },
    );
    doc.append_child(content, title_el)?;

    if let Some(description) = &config.description {
        let desc = create_element(
            doc,
            "p",
            &["main-description", "animated", "fadeInRight"],
            ElementProps {
                text: Some(description.clone()),
                ..Default::default()
            },
        );
        doc.append_child(content, desc)?;
    }

    if let Some(trailer) = &config.trailer {
        // Two call-to-action elements pointing at the same URL: a text
        // button inside the content column and an icon-only play link on
        // the wrapper.
        let link = create_element(
            doc,
            "a",
            &["button", "animated", "fadeInRight", "youtube-modal"],
            ElementProps {
                href: Some(trailer.clone()),
                text: Some(TRAILER_LABEL.to_string()),
                ..Default::default()
            },
        );
        doc.append_child(content, link)?;

        let link_img = create_element(
            doc,
            "a",
            &["play", "youtube-modal"],
            ElementProps {
                href: Some(trailer.clone()),
                aria_label: Some(TRAILER_LABEL.to_string()),
                ..Default::default()
            },
        );
        let play = create_element(
            doc,
            "img",
            &["play-img"],
            ElementProps {
                src: Some(PLAY_ICON.to_string()),
                alt: Some(String::new()),
                aria_hidden: Some(true),
                ..Default::default()
            },
        );
        doc.append_child(link_img, play)?;
        doc.append_child(wrapper, link_img)?;
    }

    if let Some(slider) = &config.slider {
        let slider_block = build_slider(doc, slider, carousel)?;
        doc.append_child(container, slider_block)?;
    }

    Ok(main)
}

/// Exactly ten star icons plus the "N/10" label. Star `i` is filled when
/// `i < rating`; only the first icon carries descriptive alt text.
fn build_rating(doc: &mut Document, rating: &str) -> Result<NodeId> {
    let value: i64 = rating.parse().unwrap_or(0);

    let block = create_element(doc, "div", &["rating", "animated", "fadeInRight"], ElementProps::default());
    let stars = create_element(doc, "div", &["rating-stars"], ElementProps::default());
    let number = create_element(
        doc,
        "div",
        &["rating-number"],
        ElementProps {
            text: Some(format!("{}/10", rating)),
            ..Default::default()
        },
    );

    for i in 0..STAR_COUNT {
        let alt = if i == 0 {
            format!("Rating {} of 10", rating)
        } else {
            String::new()
        };
        let star = create_element(
            doc,
            "img",
            &["star"],
            ElementProps {
                src: Some(if i < value { STAR_FILLED } else { STAR_EMPTY }.to_string()),
                alt: Some(alt),
                ..Default::default()
            },
        );
        doc.append_child(stars, star)?;
    }

    doc.append_child(block, stars)?;
    doc.append_child(block, number)?;
    Ok(block)
}

fn build_slider(
    doc: &mut Document,
    slider: &[crate::config::Slide],
    carousel: &mut dyn CarouselWidget,
) -> Result<NodeId> {
    let slider_block = create_element(doc, "div", &["series"], ElementProps::default());
    let swiper_block = create_element(doc, "div", &["swiper-container"], ElementProps::default());
    let swiper_wrapper = create_element(doc, "div", &["swiper-wrapper"], ElementProps::default());
    let arrow = create_element(doc, "button", &["arrow"], ElementProps::default());

    for item in slider {
        let slide = create_element(doc, "div", &["swiper-slide"], ElementProps::default());
        let card = create_element(doc, "figure", &["card"], ElementProps::default());
        let card_img = create_element(
            doc,
            "img",
            &["card-img"],
            ElementProps {
                src: Some(item.img.clone()),
                alt: Some(item.alt_text()),
                ..Default::default()
            },
        );
        doc.append_child(card, card_img)?;

        if item.has_caption() {
            // Subtitle above title, each independently optional.
            let caption = create_element(doc, "figcaption", &["card-description"], ElementProps::default());
            if let Some(subtitle) = item.subtitle.as_deref().filter(|s| !s.is_empty()) {
                let p = create_element(
                    doc,
                    "p",
                    &["card-subtitle"],
                    ElementProps {
                        text: Some(subtitle.to_string()),
                        ..Default::default()
                    },
                );
                doc.append_child(caption, p)?;
            }
            if let Some(title) = item.title.as_deref().filter(|t| !t.is_empty()) {
                let p = create_element(
                    doc,
                    "p",
                    &["card-title"],
                    ElementProps {
                        text: Some(title.to_string()),
                        ..Default::default()
                    },
                );
                doc.append_child(caption, p)?;
            }
            doc.append_child(card, caption)?;
        }

        doc.append_child(slide, card)?;
        doc.append_child(swiper_wrapper, slide)?;
    }

    doc.append_child(swiper_block, swiper_wrapper)?;
    doc.append_child(slider_block, swiper_block)?;
    doc.append_child(slider_block, arrow)?;

    tracing::debug!("Slider: {} slides", slider.len());

    let mut breakpoints = BTreeMap::new();
    breakpoints.insert(
        320,
        BreakpointSettings {
            slides_per_view: 1,
            space_between: 20,
        },
    );
    breakpoints.insert(
        541,
        BreakpointSettings {
            slides_per_view: 2,
            space_between: 40,
        },
    );

    carousel.mount(
        doc,
        swiper_block,
        CarouselOptions {
            loop_slides: true,
            next_el: arrow,
            breakpoints,
        },
    )?;

    Ok(slider_block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::SwiperWidget;
    use crate::config::Slide;
    use dom::utils::text_content;

    fn full_config() -> MainConfig {
        MainConfig {
            genre: Some("2021, fantasy, adventure".to_string()),
            rating: Some("8".to_string()),
            description: Some("Loki lands in the Time Variance Authority.".to_string()),
            trailer: Some("https://youtu.be/YrjHcYqe31g".to_string()),
            slider: Some(vec![
                Slide {
                    img: "loki/series/series-1.jpg".to_string(),
                    title: Some("Glorious Purpose".to_string()),
                    subtitle: Some("Episode 1".to_string()),
                },
                Slide {
                    img: "loki/series/series-2.jpg".to_string(),
                    title: Some("The Variant".to_string()),
                    subtitle: None,
                },
            ]),
        }
    }

    fn build(config: &MainConfig) -> (Document, NodeId) {
        let mut doc = Document::new();
        let mut widget = SwiperWidget::new();
        let main = build_main(&mut doc, "Loki", config, &mut widget).unwrap();
        (doc, main)
    }

    #[test]
    fn test_star_counts_per_rating() {
        for rating in [0, 3, 8, 10] {
            let config = MainConfig {
                rating: Some(rating.to_string()),
                ..empty_config()
            };
            let (doc, _) = build(&config);

            let stars = doc.find_by_class("star");
            assert_eq!(stars.len(), 10);

            let filled = stars
                .iter()
                .filter(|&&s| doc.get(s).unwrap().attr("src") == Some(STAR_FILLED))
                .count();
            assert_eq!(filled as i64, rating);
        }
    }

    fn empty_config() -> MainConfig {
        MainConfig {
            genre: None,
            rating: None,
            description: None,
            trailer: None,
            slider: None,
        }
    }

    #[test]
    fn test_only_first_star_has_alt_text() {
        let (doc, _) = build(&full_config());

        let stars = doc.find_by_class("star");
        assert_eq!(doc.get(stars[0]).unwrap().attr("alt"), Some("Rating 8 of 10"));
        for &star in &stars[1..] {
            assert_eq!(doc.get(star).unwrap().attr("alt"), Some(""));
        }

        let number = doc.find_by_class("rating-number")[0];
        assert_eq!(text_content(&doc, number).unwrap(), "8/10");
    }

    #[test]
    fn test_out_of_range_rating_clamps_without_error() {
        let over = MainConfig {
            rating: Some("15".to_string()),
            ..empty_config()
        };
        let (doc, _) = build(&over);
        let all_filled = doc
            .find_by_class("star")
            .iter()
            .all(|&s| doc.get(s).unwrap().attr("src") == Some(STAR_FILLED));
        assert!(all_filled);

        let junk = MainConfig {
            rating: Some("not-a-number".to_string()),
            ..empty_config()
        };
        let (doc, _) = build(&junk);
        let all_empty = doc
            .find_by_class("star")
            .iter()
            .all(|&s| doc.get(s).unwrap().attr("src") == Some(STAR_EMPTY));
        assert!(all_empty);
    }

    #[test]
    fn test_title_always_renders() {
        let (doc, _) = build(&empty_config());
        let titles = doc.find_by_class("main-title");
        assert_eq!(titles.len(), 1);
        assert_eq!(text_content(&doc, titles[0]).unwrap(), "Loki");
    }

    #[test]
    fn test_trailer_renders_button_and_play_icon() {
        let (doc, _) = build(&full_config());

        let button = doc.find_by_class("button")[0];
        assert_eq!(
            doc.get(button).unwrap().attr("href"),
            Some("https://youtu.be/YrjHcYqe31g")
        );
        assert_eq!(text_content(&doc, button).unwrap(), TRAILER_LABEL);

        let play = doc.find_by_class("play")[0];
        assert_eq!(doc.get(play).unwrap().attr("aria-label"), Some(TRAILER_LABEL));
        let icon = doc.children(play).unwrap()[0];
        assert_eq!(icon.attr("src"), Some(PLAY_ICON));
        assert_eq!(icon.attr("alt"), Some(""));
    }

    #[test]
    fn test_missing_trailer_omits_cta_only() {
        let config = MainConfig {
            trailer: None,
            ..full_config()
        };
        let (doc, _) = build(&config);

        assert!(doc.find_by_class("button").is_empty());
        assert!(doc.find_by_class("play").is_empty());
        assert!(doc.find_by_class("play-img").is_empty());

        // Everything else still renders.
        assert_eq!(doc.find_by_class("genre").len(), 1);
        assert_eq!(doc.find_by_class("star").len(), 10);
        assert_eq!(doc.find_by_class("swiper-slide").len(), 2);
    }

    #[test]
    fn test_slides_in_order_with_alt_text() {
        let (doc, _) = build(&full_config());

        let imgs = doc.find_by_class("card-img");
        assert_eq!(imgs.len(), 2);
        assert_eq!(
            doc.get(imgs[0]).unwrap().attr("alt"),
            Some("Glorious Purpose Episode 1")
        );
        assert_eq!(doc.get(imgs[1]).unwrap().attr("alt"), Some("The Variant"));
    }

    #[test]
    fn test_caption_subtitle_above_title() {
        let (doc, _) = build(&full_config());

        let caption = doc.find_by_class("card-description")[0];
        let children = doc.children(caption).unwrap();
        assert_eq!(children.len(), 2);
        assert!(children[0].has_class("card-subtitle"));
        assert!(children[1].has_class("card-title"));
    }

    #[test]
    fn test_captionless_slide_has_no_figcaption() {
        let config = MainConfig {
            slider: Some(vec![Slide {
                img: "loki/series/series-1.jpg".to_string(),
                title: None,
                subtitle: None,
            }]),
            ..empty_config()
        };
        let (doc, _) = build(&config);

        let imgs = doc.find_by_class("card-img");
        assert_eq!(doc.get(imgs[0]).unwrap().attr("alt"), Some(""));
        assert!(doc.find_by_class("card-description").is_empty());
    }

    #[test]
    fn test_carousel_mounted_with_contract_options() {
        let (doc, _) = build(&full_config());

        let container = doc.find_by_class("swiper-container")[0];
        let node = doc.get(container).unwrap();
        assert_eq!(node.attr("data-carousel"), Some("mounted"));

        let options = node.attr("data-carousel-options").unwrap();
        assert!(options.contains("\"loopSlides\":true"));
        assert!(options.contains("\"slidesPerView\":1"));
        assert!(options.contains("\"slidesPerView\":2"));

        // The arrow button is the registered "next" control.
        let arrow = doc.find_by_class("arrow")[0];
        assert!(options.contains(&format!("\"nextEl\":{}", arrow)));
    }

    #[test]
    fn test_no_slider_means_no_series_block() {
        let config = MainConfig {
            slider: None,
            ..full_config()
        };
        let (doc, _) = build(&config);
        assert!(doc.find_by_class("series").is_empty());
        assert!(doc.find_by_class("swiper-container").is_empty());
    }
}
