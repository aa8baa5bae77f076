//! Static conversion data

pub(crate) mod code_pages;
pub(crate) mod entities;
pub(crate) mod jis0208;
