//! Viewer page shell
//!
//! The full document the host serves at `/`: head with stylesheets, body
//! with the wave container and the control panel. This is where the control
//! fragment gets inserted into a larger document.

use vcd_web_markup::{stringify, Element, Node};

use crate::controls;

/// Font Awesome 4 stylesheet; the glyph fragments use its `fa fa-*` classes.
const FONT_AWESOME_CDN: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css";

/// Render the complete viewer document.
pub fn render_page(title: &str) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(title))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", FONT_AWESOME_CDN),
        )
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", "/style.css"),
        );

    let app = Element::new("div")
        .attr("id", "vcd-app")
        .child(
            Element::new("div")
                .attr("id", "wave-container")
                .attr("class", "wave-container"),
        )
        .child(controls::controls_tree());

    let document: Node = Element::new("html")
        .attr("lang", "en")
        .child(head)
        .child(Element::new("body").child(app))
        .into();

    format!("<!doctype html>\n{}", stringify(&document))
}
