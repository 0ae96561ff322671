use anyhow::Result;
use std::fs;
use std::path::Path;

/// Starter curations file written by `license-curator init`.
///
/// Every field except `concluded_license` and `reason` is optional; an
/// unset field is unconstrained. The examples stay commented out so a
/// fresh file curates nothing.
const STARTER_CURATIONS: &str = r#"# Curations override license findings reported by the scanner.
# Each [[curations]] entry is a predicate (path/start_lines/line_count/
# detected_license) plus an action (concluded_license).
#
# concluded_license = "NONE" removes the matched finding instead of
# relicensing it. Reasons: incorrect-detection, not-detected,
# license-text-mismatch, other.
#
# [[curations]]
# path = "vendor/**"
# detected_license = "MIT"
# concluded_license = "Apache-2.0"
# reason = "incorrect-detection"
# comment = "Upstream relicensed in 2.0; scanner matched the old header"
#
# [[curations]]
# path = "**/testdata/**"
# concluded_license = "NONE"
# reason = "other"
# comment = "Fixture files, not shipped"
"#;

pub fn generate_curations_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path_ref = path.as_ref();

    if path_ref.exists() {
        anyhow::bail!(
            "Curations file already exists: {}. Refusing to overwrite.",
            path_ref.display()
        );
    }

    fs::write(path_ref, STARTER_CURATIONS)?;
    println!("✅ Created starter curations file: {}", path_ref.display());

    Ok(())
}
