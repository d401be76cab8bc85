/// Facades - the `wasm-bindgen` surface exposed to the JS host.

#[cfg(target_arch = "wasm32")]
pub mod wasm;
