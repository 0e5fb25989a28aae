//! Waveform control panel
//!
//! Seven fixed buttons: zoom in/out/reset, jump to start, shift left/right,
//! jump to end. Button ids are the contract surface for whatever script
//! binds them client-side.

use vcd_web_markup::{stringify, Element, Node};

use crate::icons;

/// Button table in panel order: (element id, icon glyph fragment).
pub const CONTROL_BUTTONS: [(&str, &str); 7] = [
    ("zoom-in", icons::ZOOM_IN),
    ("zoom-out", icons::ZOOM_OUT),
    ("zoom-reset", icons::ZOOM_RESET),
    ("jump-beginning", icons::JUMP_BEGINNING),
    ("shift-left", icons::SHIFT_LEFT),
    ("shift-right", icons::SHIFT_RIGHT),
    ("jump-end", icons::JUMP_END),
];

/// Build the control panel tree: a `div.controls` whose direct children are
/// the seven buttons, in table order.
pub fn controls_tree() -> Node {
    let mut panel = Element::new("div").attr("class", "controls");
    for (id, glyph) in CONTROL_BUTTONS {
        panel = panel.child(
            Element::new("button")
                .attr("id", id)
                .attr("class", "icon-button")
                .raw(glyph),
        );
    }
    panel.into()
}

/// Render the control panel to markup.
///
/// No inputs, no side effects; identical output on every call.
pub fn render_controls() -> String {
    stringify(&controls_tree())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_IDS: [&str; 7] = [
        "zoom-in",
        "zoom-out",
        "zoom-reset",
        "jump-beginning",
        "shift-left",
        "shift-right",
        "jump-end",
    ];

    #[test]
    fn render_is_deterministic() {
        assert_eq!(render_controls(), render_controls());
    }

    #[test]
    fn panel_wraps_seven_buttons_in_order() {
        let Node::Element(panel) = controls_tree() else {
            panic!("panel must be an element");
        };

        assert_eq!(panel.tag, "div");
        assert_eq!(
            panel.attrs,
            vec![("class".to_string(), "controls".to_string())]
        );
        assert_eq!(panel.children.len(), 7);

        for (child, expected_id) in panel.children.iter().zip(EXPECTED_IDS) {
            let Node::Element(button) = child else {
                panic!("panel children must be button elements");
            };
            assert_eq!(button.tag, "button");
            assert_eq!(
                button.attrs,
                vec![
                    ("id".to_string(), expected_id.to_string()),
                    ("class".to_string(), "icon-button".to_string()),
                ]
            );
            assert_eq!(button.children.len(), 1);
        }
    }

    #[test]
    fn buttons_hold_their_glyphs_verbatim() {
        let html = render_controls();
        for (id, glyph) in CONTROL_BUTTONS {
            assert!(html.contains(glyph), "missing glyph for {id}");
        }
        // Glyphs must render as live elements, not escaped text.
        assert!(!html.contains("&lt;i"));
    }

    #[test]
    fn ids_appear_in_panel_order() {
        let html = render_controls();
        let positions: Vec<usize> = EXPECTED_IDS
            .iter()
            .map(|id| {
                html.find(&format!(r#"id="{id}""#))
                    .unwrap_or_else(|| panic!("id {id} missing from output"))
            })
            .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn every_button_is_an_icon_button() {
        let html = render_controls();
        assert_eq!(html.matches("<button").count(), 7);
        assert_eq!(html.matches(r#"class="icon-button""#).count(), 7);
    }
}
