//! Pre-build checks for a site directory.
//!
//! The generator will happily emit pages that reference images nobody
//! shipped, so `validate` runs first: parse site.toml, confirm every
//! image the pages reference exists under assets/, and flag files that
//! nothing references.

use std::collections::BTreeSet;
use std::path::Path;

use saviour_site_core::{content, parse_site_toml};
use walkdir::WalkDir;

const RASTER_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    fn note(&mut self, message: impl Into<String>) {
        self.info.push(message.into());
    }
}

/// Validate the site rooted at `site_root`. Never returns Err: problems
/// land in the report so the CLI can print all of them at once.
pub fn validate_site(site_root: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    let config_path = site_root.join("site.toml");
    match parse_site_toml(&config_path) {
        Ok(site) => {
            report.note(format!(
                "site.toml: {} ({})",
                site.foundation.name, site.site.domain
            ));
        }
        Err(e) => {
            report.error(format!("site.toml: {}", e));
            // Without a config nothing else is worth checking
            return report;
        }
    }

    let referenced = check_referenced_images(site_root, &mut report);
    check_asset_tree(site_root, &referenced, &mut report);

    report
}

/// Every image path the compiled-in pages reference must exist on disk.
/// Returns the set of root-relative paths that were checked.
fn check_referenced_images(site_root: &Path, report: &mut ValidationReport) -> BTreeSet<String> {
    let mut referenced = BTreeSet::new();
    for web_path in content::image_refs() {
        let relative = web_path.trim_start_matches('/');
        referenced.insert(relative.to_string());
        let on_disk = site_root.join(relative);
        if !on_disk.is_file() {
            report.error(format!("missing image: {} (pages reference it)", relative));
        }
    }
    report.note(format!("{} referenced images checked", referenced.len()));
    referenced
}

/// Walk assets/ looking for problems the reference check cannot see:
/// raster files that will not decode, and files nothing references.
fn check_asset_tree(site_root: &Path, referenced: &BTreeSet<String>, report: &mut ValidationReport) {
    let assets = site_root.join("assets");
    if !assets.is_dir() {
        report.error("assets/ directory not found".to_string());
        return;
    }

    for entry in WalkDir::new(&assets).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(site_root) else {
            continue;
        };
        let relative = relative.to_string_lossy().replace('\\', "/");

        let extension = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if RASTER_EXTENSIONS.contains(&extension.as_str()) {
            match image::image_dimensions(entry.path()) {
                Ok((width, height)) => {
                    report.note(format!("{}: {}x{}", relative, width, height));
                }
                Err(e) => {
                    report.error(format!("{}: unreadable image ({})", relative, e));
                }
            }
        }

        if !referenced.contains(&relative) {
            report.warn(format!("{}: no page references this file", relative));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r##"
[site]
domain = "saviourfoundation.org"
accent_color = "#d4af37"
theme_color = "#1e40af"

[foundation]
name = "Saviour Foundation"
tagline = "Empowering Education"
region = "Warri, Delta State"

[contact]
email = "info@saviourfoundation.org"
phones = ["+234 915 743 4271"]
address = "Warri, Delta State, Nigeria"
office_hours = ["Mon-Fri: 9am-5pm"]
"##;

    // Smallest valid PNG: 1x1, RGBA
    const ONE_PIXEL_PNG: [u8; 67] = [
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
        0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78,
        0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
        0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    fn complete_site() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), CONFIG).unwrap();
        for web_path in content::image_refs() {
            let on_disk = dir.path().join(web_path.trim_start_matches('/'));
            fs::create_dir_all(on_disk.parent().unwrap()).unwrap();
            fs::write(on_disk, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
        }
        dir
    }

    #[test]
    fn complete_site_validates_clean() {
        let dir = complete_site();
        let report = validate_site(dir.path());
        assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert!(!report.info.is_empty());
    }

    #[test]
    fn missing_config_is_the_only_error_reported() {
        let dir = TempDir::new().unwrap();
        let report = validate_site(dir.path());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("site.toml:"));
    }

    #[test]
    fn invalid_config_names_the_field() {
        let dir = complete_site();
        let broken = CONFIG.replace("#d4af37", "gold");
        fs::write(dir.path().join("site.toml"), broken).unwrap();
        let report = validate_site(dir.path());
        assert!(!report.is_ok());
        assert!(report.errors[0].contains("accent_color"), "{:?}", report.errors);
    }

    #[test]
    fn missing_referenced_image_is_an_error() {
        let dir = complete_site();
        fs::remove_file(dir.path().join("assets/images/founder.svg")).unwrap();
        let report = validate_site(dir.path());
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("assets/images/founder.svg")));
    }

    #[test]
    fn unreferenced_file_is_a_warning_not_an_error() {
        let dir = complete_site();
        fs::write(dir.path().join("assets/images/extra.svg"), "<svg/>").unwrap();
        let report = validate_site(dir.path());
        assert!(report.is_ok());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("assets/images/extra.svg")));
    }

    #[test]
    fn decodable_raster_reports_its_dimensions() {
        let dir = complete_site();
        fs::write(dir.path().join("assets/images/photo.png"), ONE_PIXEL_PNG).unwrap();
        let report = validate_site(dir.path());
        assert!(report.is_ok(), "{:?}", report.errors);
        assert!(report
            .info
            .iter()
            .any(|i| i.contains("photo.png") && i.contains("1x1")));
    }

    #[test]
    fn corrupt_raster_is_an_error() {
        let dir = complete_site();
        fs::write(dir.path().join("assets/images/photo.png"), b"not a png").unwrap();
        let report = validate_site(dir.path());
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("photo.png") && e.contains("unreadable")));
    }

    #[test]
    fn missing_assets_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), CONFIG).unwrap();
        let report = validate_site(dir.path());
        assert!(report.errors.iter().any(|e| e.contains("assets/")));
    }
}
