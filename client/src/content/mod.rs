//! Static reference material for the resistance screens.
//!
//! Neither the contact directory nor the survival guide comes from the
//! backend; both are compiled in and filtered client-side.

pub mod contacts;
pub mod guide;
