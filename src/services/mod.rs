#[cfg(feature = "ssr")]
pub mod nasa;
pub mod neo;
