use iced::widget::{Svg, svg};
use include_dir::{Dir, include_dir};
use tracing::warn;

static ICONS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

/// Load one of the bundled SVG icons by file stem, e.g. `icon("home")`.
pub fn icon<'a>(name: &str) -> Svg<'a> {
    let contents: &'static [u8] = match ICONS.get_file(format!("{name}.svg")) {
        Some(file) => file.contents(),
        None => {
            warn!("Icon `{name}` is not bundled");
            &[]
        }
    };

    svg(svg::Handle::from_memory(contents))
        .width(24.0)
        .height(24.0)
}
