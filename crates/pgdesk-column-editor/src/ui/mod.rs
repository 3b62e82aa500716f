//! UI pieces of the column management panel
//!
//! Sub-module of `panel`; rendering functions extracted to keep the panel
//! itself about state and event handling.

pub(super) mod column_row;
pub(super) mod header;
pub(super) mod notices;
pub(super) mod relation_modal;
