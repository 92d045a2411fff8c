//! Native event translation, one module per windowing library.

pub(crate) mod winit;
