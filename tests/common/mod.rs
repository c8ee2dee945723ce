//! Shared test fixtures for the shopstat integration tests.
//!
//! Provides `setup_workspace()` which builds a `Shopstat` instance writing
//! into a temporary directory.

use shopstat::Shopstat;

/// Create a `Shopstat` instance backed by a temporary output directory.
///
/// Returns `(Shopstat, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test so the output directory is
/// not deleted prematurely.
pub fn setup_workspace() -> (Shopstat, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let shop = Shopstat::builder()
        .out_dir(tmp_dir.path())
        .build()
        .unwrap();
    (shop, tmp_dir)
}
