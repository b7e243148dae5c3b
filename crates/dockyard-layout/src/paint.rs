use dockyard_core::{Edge, Renderer, StyleToken};

use crate::tab_layout::tab_content_rects;
use crate::DockPanel;

/// Draw the auto-hide strips of `panel` through `renderer`.
///
/// Strip backgrounds go first, then each strip's tabs in top, bottom, left,
/// right order. Outlines, icons and text come from the same cached geometry
/// the hit tester reads.
pub fn paint(panel: &DockPanel, renderer: &mut dyn Renderer) {
    renderer.begin_frame(panel.host_size());

    for rect in panel.display_region() {
        renderer.fill_rect(rect, StyleToken::StripBackground);
    }

    let metrics = *panel.strip().metrics();
    for edge in Edge::ALL {
        let tabs = panel.tabs_on(edge);
        if tabs.is_empty() {
            continue;
        }
        let transform = panel.strip_transform(edge);
        let rotated = transform.rotates();

        for tab in tabs {
            let outline = match panel.tab_outline(tab.content) {
                Some(path) if !path.is_empty() => path,
                _ => continue,
            };
            renderer.fill_path(&outline, StyleToken::TabFill);
            renderer.stroke_path(&outline, StyleToken::TabBorder);

            let logical = panel.tab_rectangle(tab.content, false);
            let (image, text) = tab_content_rects(logical, &metrics);
            if !image.is_empty() {
                renderer.draw_icon(tab.content, transform.transform_rect(image), rotated);
            }
            if !text.is_empty() {
                renderer.draw_text(
                    panel.panes().tab_text(tab.content),
                    transform.transform_rect(text),
                    rotated,
                    panel.right_to_left(),
                    StyleToken::TabText,
                );
            }
        }
    }

    renderer.end_frame();
}
