//! Supporting utilities that are not specific to sorting

pub mod measurements;
