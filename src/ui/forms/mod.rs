//! Form rendering module
//!
//! - `field_renderer`: input box rendering
//! - `diet_form`: the diet form built from the field catalogs

mod diet_form;
mod field_renderer;

pub use diet_form::draw_diet_form;
