use rand::Rng;
use svg::Document;
use svg::node::element::{Circle, Group, Text, Title};

use tagcloud::entities::CloudSnapshot;
use tagcloud::geometry::primitives::{Point, Rect, Size};

use crate::io::svg_util;
use crate::io::svg_util::{Color, SvgDrawOptions};

/// Draws every rectangle of the cloud as an outlined box on a solid background.
///
/// `rng` is only used to pick stroke colors when [`SvgDrawOptions::random_stroke_colors`] is set.
pub fn cloud_to_svg(
    cloud: &CloudSnapshot,
    options: SvgDrawOptions,
    rng: &mut impl Rng,
    title: &str,
) -> Document {
    //an empty cloud is drawn as a single point on its center
    let bbox = cloud
        .bbox()
        .unwrap_or_else(|| Rect::new(cloud.center, Size::new(1, 1)));

    //clouds near the edge of the grid get a clipped border
    let border = options.border.max(0);
    let vbox = Rect::new(
        Point(
            bbox.x_min().saturating_sub(border),
            bbox.y_min().saturating_sub(border),
        ),
        Size::new(
            bbox.width().saturating_add(border.saturating_mul(2)),
            bbox.height().saturating_add(border.saturating_mul(2)),
        ),
    );

    let background = svg_util::rect_to_svg(
        &vbox,
        &[("fill", &*format!("{}", options.background))],
    );

    let tags_group = {
        let mut tags_group = Group::new().set("id", "tags");
        for (i, rect) in cloud.rects.iter().enumerate() {
            let color = match options.random_stroke_colors {
                true => Color::random(rng),
                false => options.stroke_color,
            };
            let title = Title::new(format!("tag #{i}, size: {}, bbox: {rect}", rect.size));
            tags_group = tags_group.add(
                svg_util::rect_to_svg(
                    rect,
                    &[
                        ("fill", "none"),
                        ("stroke", &*format!("{color}")),
                        ("stroke-width", &*format!("{}", options.stroke_width)),
                    ],
                )
                .add(title),
            );
        }
        tags_group
    };

    let mut document = Document::new()
        .set(
            "viewBox",
            (vbox.x_min(), vbox.y_min(), vbox.width(), vbox.height()),
        )
        .add(background)
        .add(tags_group);

    if options.draw_center {
        let Point(cx, cy) = cloud.center;
        document = document.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", options.stroke_width * 2.0)
                .set("fill", "red")
                .add(Title::new(format!("center: {}", cloud.center))),
        );
    }

    if options.label {
        //print some information inside the top left of the border
        let font_size = f32::max(border as f32 * 0.6, 1.0);
        let label_content = format!(
            "tags: {} | width: {} | height: {} | density: {:.3}% | {}",
            cloud.rects.len(),
            bbox.width(),
            bbox.height(),
            cloud.density() * 100.0,
            title,
        );
        document = document.add(
            Text::new(label_content)
                .set("x", vbox.x_min())
                .set("y", vbox.y_min() as f32 + font_size)
                .set("font-size", font_size)
                .set("font-family", "monospace")
                .set("fill", "white"),
        );
    }

    document
}
