//! Widget components for the compass display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod gauge;
mod popups;
mod primitives;

pub use gauge::draw_gauge;
pub use popups::draw_toggle_popup;
pub use primitives::{draw_arc_span, draw_filled_triangle, draw_label, draw_ring, to_pixel};
