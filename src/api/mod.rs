//! Defines our main API, using the Builder Pattern -- see [builder::SortMeasurer]

pub mod builder;
