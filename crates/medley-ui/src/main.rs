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
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Medley UI wasm entry point, with a stub for accidental native builds.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    medley_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    writeln!(
        io::stderr().lock(),
        "medley-ui targets wasm32; build with `trunk build` or `cargo build --target wasm32-unknown-unknown`."
    )?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_stub_exits_cleanly() -> std::io::Result<()> {
        main()
    }
}
