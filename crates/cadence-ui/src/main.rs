#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Cadence settings console entry point.
//!
//! The console only runs in the browser; native builds print how to produce the wasm bundle.

#[cfg(target_arch = "wasm32")]
fn main() {
    cadence_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = concat!(
    "cadence-ui ",
    env!("CARGO_PKG_VERSION"),
    " renders in the browser only.\n",
    "Serve it with `trunk serve` or compile with `--target wasm32-unknown-unknown`.\n",
);

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    std::io::stderr().lock().write_all(NATIVE_HINT.as_bytes())
}
