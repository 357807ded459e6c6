//! Binary entrypoint for the browser-hosted picker demo.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    choice_field_demo::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `choice_field_demo` for wasm32 with the `csr` feature and serve it with trunk."
    );
}
