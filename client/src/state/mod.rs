//! Client-side controller state, one module per UI region.
//!
//! DESIGN
//! ======
//! Each region (`nav`, `carousel`, `contact`, `slide_image`) owns a small
//! plain-Rust model with its operations as methods. Components hold these in
//! signals (or `Rc<RefCell<_>>` when a browser timer is involved) and call
//! into them from event handlers. Regions share no state.

pub mod carousel;
pub mod contact;
pub mod nav;
pub mod slide_image;
