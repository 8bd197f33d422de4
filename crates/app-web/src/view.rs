//! The root view: a palette legend plus one row per deviation marker,
//! rendered as plain DOM under the mount anchor.

use std::rc::Rc;
use web_sys as web;

use app_core::{AppEvent, EventBus, COLORS, DEVIATIONS, SHAPE};

use crate::dom;

/// Builds the view subtree under `anchor` exactly once, replacing whatever
/// the host document had there, and announces the mount on the bus.
pub fn mount(
    document: &web::Document,
    anchor: &web::Element,
    bus: Rc<EventBus>,
) -> anyhow::Result<()> {
    // Take ownership of the anchor's subtree.
    anchor.set_inner_html("");

    let root = dom::create_div(document, "deviation-view")?;

    let header = dom::create_div(document, "view-header")?;
    header.set_text_content(Some(&format!(
        "deviations — sphere r={} {}x{}",
        SHAPE.radius, SHAPE.width_segments, SHAPE.height_segments
    )));
    root.append_child(&header).map_err(dom::js_error)?;

    let legend = dom::create_div(document, "palette-legend")?;
    for entry in &COLORS {
        let swatch = dom::create_div(document, "palette-swatch")?;
        swatch.set_text_content(Some(entry.tag.name()));
        let _ = swatch.set_attribute("style", &format!("background:{}", entry.color));
        legend.append_child(&swatch).map_err(dom::js_error)?;
    }
    root.append_child(&legend).map_err(dom::js_error)?;

    let list = dom::create_div(document, "marker-list")?;
    for (index, marker) in DEVIATIONS.iter().enumerate() {
        let row = dom::create_div(document, "marker-row")?;
        let p = marker.position;
        row.set_text_content(Some(&format!(
            "{} ({:.2}, {:.2}, {:.2}) r={}",
            marker.tag, p.x, p.y, p.z, marker.radius
        )));
        let _ = row.set_attribute("style", &format!("color:{}", marker.color));

        let bus_for_click = Rc::clone(&bus);
        dom::add_click_listener(&row, move || {
            bus_for_click.emit(&AppEvent::MarkerSelected { index });
        });
        list.append_child(&row).map_err(dom::js_error)?;
    }
    root.append_child(&list).map_err(dom::js_error)?;

    anchor.append_child(&root).map_err(dom::js_error)?;
    bus.emit(&AppEvent::ViewMounted {
        marker_count: DEVIATIONS.len(),
    });
    Ok(())
}
