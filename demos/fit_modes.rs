//! Fit Modes Demo - Prints the modal image style for every fit mode
//!
//! This example shows:
//! - The collapsed style of an `<img>` for each `object-fit` value
//! - The collapsed style of a background container for each `background-size`
//! - The zoomed (centered) style and the ghost placeholder
//!
//! Run with: cargo run --example fit_modes -p zoom-core

use zoom_core::{
    compute_modal_image_style, ghost_style, IntrinsicSize, ModalImageParams, Rect, SourceKind,
    TargetElement, Viewport, ZoomConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ZoomConfig::from_json(r#"{ "zoomMargin": 24, "transitionDuration": "250ms" }"#)?;
    let viewport = Viewport::new(1280.0, 800.0);
    let rect = Rect::new(120.0, 80.0, 320.0, 200.0);
    let natural = IntrinsicSize::new(1600.0, 1200.0);

    println!("=== object-fit ===");
    for fit in ["fill", "contain", "cover", "none", "scale-down"] {
        let target =
            TargetElement::new(SourceKind::PlainImage, rect).with_object_fit(fit, "50% 50%");
        let style = compute_modal_image_style(&ModalImageParams {
            is_zoomed: false,
            loaded_image: Some(natural),
            offset: config.zoom_margin,
            target: &target,
            should_refresh: false,
            img_src: Some("photo.jpg"),
            viewport,
        });
        println!("{:>10}: {}", fit, style.to_css_string());
    }

    println!("\n=== background-size ===");
    for size in ["cover", "contain", "100% auto", "50% 50%"] {
        let target = TargetElement::new(SourceKind::BackgroundContainer, rect)
            .with_background("50% 50%", size);
        let style = compute_modal_image_style(&ModalImageParams {
            is_zoomed: false,
            loaded_image: Some(natural),
            offset: config.zoom_margin,
            target: &target,
            should_refresh: false,
            img_src: Some("photo.jpg"),
            viewport,
        });
        println!("{:>10}: {}", size, style.to_css_string());
    }

    println!("\n=== zoomed ===");
    let target =
        TargetElement::new(SourceKind::PlainImage, rect).with_object_fit("cover", "50% 50%");
    let style = compute_modal_image_style(&ModalImageParams {
        is_zoomed: true,
        loaded_image: Some(natural),
        offset: config.zoom_margin,
        target: &target,
        should_refresh: false,
        img_src: Some("photo.jpg"),
        viewport,
    });
    println!("{}", style.to_css_string());
    println!("transition-duration: {}", config.transition_duration());

    println!("\n=== ghost ===");
    println!("{}", ghost_style(Some(&rect)).to_css_string());

    Ok(())
}
