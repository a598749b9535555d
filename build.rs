//! Build script for upcheck.
//!
//! Captures the moment the binary was built so the about panel can show a
//! humanized build age at runtime. `UPCHECK_BUILD_LABEL` may be set in the
//! build environment to replace the computed age with a fixed human-readable
//! string (release pipelines use this to pin a label like "nightly").

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-env-changed=UPCHECK_BUILD_LABEL");

    let epoch = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    println!("cargo:rustc-env=UPCHECK_BUILD_EPOCH={epoch}");

    if let Ok(label) = env::var("UPCHECK_BUILD_LABEL") {
        let label = label.trim();
        if label.contains('\n') {
            return Err("UPCHECK_BUILD_LABEL must be a single line".into());
        }
        if !label.is_empty() {
            println!("cargo:rustc-env=UPCHECK_BUILD_LABEL={label}");
        }
    }

    Ok(())
}
