//! Export formatting for roster views.

pub mod csv;
