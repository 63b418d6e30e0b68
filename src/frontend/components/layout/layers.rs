//! Stacking order of the fixed layout bars.
//!
//! The user menu's backdrop lives inside the header, so it can only cover the
//! bottom bar if the header stacks above it.

pub const BOTTOM_BAR_LAYER: u16 = 50;
pub const HEADER_LAYER: u16 = 60;

pub fn z_index(layer: u16) -> String {
    format!("z-index: {layer};")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_backdrop_covers_the_bottom_bar() {
        assert!(HEADER_LAYER > BOTTOM_BAR_LAYER);
    }

    #[test]
    fn layers_render_as_inline_style() {
        assert_eq!(z_index(HEADER_LAYER), "z-index: 60;");
        assert_eq!(z_index(BOTTOM_BAR_LAYER), "z-index: 50;");
    }
}
