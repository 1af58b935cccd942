// WASM binary entry point. Trunk builds this with `--features csr` and
// injects it into index.html.

fn main() {
    #[cfg(feature = "csr")]
    floorplan_client::start();
}
