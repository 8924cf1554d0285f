#[cfg(not(target_family = "wasm"))]
pub mod console;
#[cfg(target_family = "wasm")]
pub mod wasm;
