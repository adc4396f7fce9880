// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a tooltip over an in-memory scene and print the result as SVG.
//!
//! The pointer sweeps from the top-left to the bottom-right of a small chart,
//! so the bubble goes through all four orientations. Each frame is printed as
//! a standalone `<svg>` document.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_svg`

use kurbo::{Affine, Size};
use understory_tooltip::{
    FixedZoomProbe, MemoryScene, Outline, PointerEvent, SceneNode, Tooltip, TooltipConfig,
    ZoomCorrection,
};

/// Process-wide zoom correction. A browser host would back this with its two
/// hidden reference fixtures instead of fixed readings.
static ZOOM: ZoomCorrection<FixedZoomProbe> = ZoomCorrection::new(FixedZoomProbe {
    plain_height: 18.0,
    embedded_height: 54.0,
    device_pixel_ratio: 1.5,
});

const CHART: Size = Size::new(320.0, 200.0);

/// Pick black or white, whichever contrasts more with a `#rrggbb` fill.
fn contrast(fill: &str, opacity: f64) -> String {
    let channel = |i: usize| {
        fill.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .map_or(255.0, f64::from)
    };
    let luma = (0.299 * channel(1) + 0.587 * channel(3) + 0.114 * channel(5)) / 255.0;
    // Blend towards the white page behind a translucent bubble.
    let seen = luma * opacity + (1.0 - opacity);
    let stroke = if seen > 0.5 { "#000000" } else { "#ffffff" };
    stroke.to_owned()
}

fn render(scene: &MemoryScene) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        CHART.width, CHART.height
    );
    for (_, node) in scene.nodes() {
        match node {
            SceneNode::Group => {}
            SceneNode::Outline {
                outline,
                style,
                origin,
                ..
            } => {
                let (tag, attr) = match outline {
                    Outline::Path(_) => ("path", "d"),
                    Outline::Polygon(_) => ("polygon", "points"),
                };
                svg.push_str(&format!(
                    r#"<{tag} transform="translate({},{})" {attr}="{}" fill="{}" opacity="{}" stroke="{}" stroke-width="{}"/>"#,
                    origin.x,
                    origin.y,
                    outline.svg_data(),
                    style.fill,
                    style.opacity,
                    style.stroke,
                    style.stroke_width,
                ));
            }
            SceneNode::Content { markup, frame, .. } => {
                svg.push_str(&format!(
                    r#"<foreignObject x="{}" y="{}" width="{}" height="{}">{markup}</foreignObject>"#,
                    frame.x0,
                    frame.y0,
                    frame.width(),
                    frame.height(),
                ));
            }
        }
    }
    svg.push_str("</svg>");
    svg
}

fn main() {
    let config = TooltipConfig {
        bubble_width: 120.0,
        background_colour: String::from("#203040"),
        ..TooltipConfig::new(CHART.width, CHART.height)
    };
    let mut tooltip = Tooltip::new(
        config,
        &ZOOM,
        |price: &f64| (*price > 0.0).then(|| format!("<div>price {price:.2}</div>")),
        contrast,
    );

    let mut scene = MemoryScene::new();
    // The page is shown at 150%; the engine reports embedded content 1.5x too
    // tall on top of that.
    scene.set_screen_transform(Some(Affine::scale(1.5)));
    scene.set_content_screen_size(Some(Size::new(270.0, 81.0)));

    let price = 42.5;
    scene.set_pointer((20.0, 20.0));
    tooltip.handle(&mut scene, PointerEvent::Enter, &price);
    println!("{}", render(&scene));

    for pointer in [(300.0, 20.0), (20.0, 190.0), (300.0, 190.0)] {
        scene.set_pointer(pointer);
        tooltip.handle(&mut scene, PointerEvent::Move, &price);
        println!(
            "<!-- pointer {pointer:?}: {:?} -->",
            tooltip.orientation().unwrap_or_default()
        );
        println!("{}", render(&scene));
    }

    tooltip.handle(&mut scene, PointerEvent::Leave, &price);
    assert!(scene.outlines().is_empty());
}
