use super::model::{Frame, Marker};
use super::{FONT_FACE, FONT_SIZE};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use radial_core::geometry::Point;
use std::f64::consts::PI;

struct MarkerRenderer<'a> {
    marker: &'a Marker,
}

impl<'a> MarkerRenderer<'a> {
    fn new(marker: &'a Marker) -> Self {
        Self { marker }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let color = if self.marker.hot {
            colors.hot
        } else {
            colors.idle
        };
        set_source(cr, color);
        cr.select_font_face(FONT_FACE, cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(FONT_SIZE);

        // center the label's ink box on the marker position
        let ext = cr.text_extents(&self.marker.label)?;
        cr.move_to(
            self.marker.position.x - ext.x_bearing() - ext.width() / 2.0,
            self.marker.position.y - ext.y_bearing() - ext.height() / 2.0,
        );
        cr.show_text(&self.marker.label)
    }
}

pub fn paint(cr: &Context, frame: &Frame, colors: &ThemeColors) -> Result<(), cairo::Error> {
    if !frame.visible {
        return Ok(());
    }

    cr.save()?;
    cr.translate(frame.origin.x, frame.origin.y);

    let center = frame.layout.center();
    draw_disc(cr, center, frame.layout.radius(), colors.disc)?;
    draw_disc(cr, center, frame.layout.dead_zone_radius(), colors.dead_zone)?;

    for marker in &frame.markers {
        MarkerRenderer::new(marker).draw(cr, colors)?;
    }
    cr.restore()
}

fn draw_disc(
    cr: &Context,
    center: Point,
    radius: f64,
    color: Srgba<f64>,
) -> Result<(), cairo::Error> {
    set_source(cr, color);
    cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    cr.fill()
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}
