//! Crate-level scenario tests.  The flow tests drive `update()` directly and
//! run on the host; the DOM tests need a browser (`wasm-pack test`).


#[cfg(target_arch = "wasm32")]
mod dom_panels;
#[cfg(target_arch = "wasm32")]
mod dom_reveal;
