//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront sections and bind DOM events to the controller
//! models in `state`. Each component owns its region's state; nothing is
//! shared through context.

pub mod carousel;
pub mod contact_form;
pub mod product_grid;
pub mod site_footer;
pub mod site_header;
