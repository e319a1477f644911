use anyhow::{Context, Result};
use saviour_site_core::parse_site_toml;
use saviour_site_generator::generate_site;
use saviour_site_validator::validate_site;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Build static site for deployment
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    let site_toml_path = path.join("site.toml");
    if !site_toml_path.exists() {
        anyhow::bail!("site.toml not found in {}", path.display());
    }

    let site = parse_site_toml(&site_toml_path).context("Failed to parse site.toml")?;

    println!("✓ Loaded: {}", site.foundation.name);
    println!("  Domain: {}", site.site.domain);
    println!("  Region: {}", site.foundation.region);
    println!();

    // Refuse to build a site that fails validation
    println!("🔍 Validating...");
    let report = validate_site(&path);
    for warning in &report.warnings {
        eprintln!("   ⚠ {}", warning);
    }
    if !report.is_ok() {
        for error in &report.errors {
            eprintln!("   ✗ {}", error);
        }
        anyhow::bail!("{} validation error(s), build aborted", report.errors.len());
    }
    println!("   ✓ Validation passed");

    println!("📄 Generating pages...");
    let generated = generate_site(&site);

    fs::create_dir_all(&output).context("Failed to create output directory")?;
    for (page_path, html) in &generated.pages {
        let dst = output.join(page_path);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&dst, html).with_context(|| format!("Failed to write {}", dst.display()))?;
    }
    println!("   ✓ Generated {} pages", generated.pages.len());

    println!("🎨 Writing stylesheet and scripts...");
    for (asset_path, data) in &generated.assets {
        let dst = output.join(asset_path);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&dst, data).with_context(|| format!("Failed to write {}", dst.display()))?;
    }
    println!("   ✓ Wrote {} generated assets", generated.assets.len());

    println!("🖼  Copying assets...");
    let copied = copy_assets(&path, &output)?;
    println!("   ✓ Copied {} asset files", copied);

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Copy the assets/ tree (images and anything else shipped alongside
/// site.toml) into the output, preserving structure.
fn copy_assets(site_root: &Path, output: &Path) -> Result<usize> {
    let assets = site_root.join("assets");
    if !assets.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(&assets) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(site_root)
            .context("Asset path outside site root")?;
        let dst = output.join(relative);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::copy(entry.path(), &dst)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saviour_site_core::content;
    use saviour_site_core::types::Route;
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

    fn site_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), CONFIG).unwrap();
        for web_path in content::image_refs() {
            let on_disk = dir.path().join(web_path.trim_start_matches('/'));
            fs::create_dir_all(on_disk.parent().unwrap()).unwrap();
            fs::write(on_disk, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn build_writes_every_page_and_asset() {
        let src = site_dir();
        let out = TempDir::new().unwrap();

        run(src.path().to_path_buf(), out.path().to_path_buf())
            .await
            .unwrap();

        for route in Route::ALL {
            let page = out.path().join(route.output_path());
            assert!(page.is_file(), "missing {}", route.output_path());
            let html = fs::read_to_string(page).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"));
            // Static builds must not carry the preview reload hook
            assert!(!html.contains("/_reload"));
        }
        assert!(out.path().join("css/site.css").is_file());
        assert!(out.path().join("js/contact-form.js").is_file());
        assert!(out.path().join("js/nav-menu.js").is_file());
        for web_path in content::image_refs() {
            assert!(out.path().join(web_path.trim_start_matches('/')).is_file());
        }
    }

    #[tokio::test]
    async fn build_refuses_a_site_with_missing_images() {
        let src = site_dir();
        let out = TempDir::new().unwrap();
        fs::remove_file(src.path().join("assets/images/logo.svg")).unwrap();

        let result = run(src.path().to_path_buf(), out.path().to_path_buf()).await;
        assert!(result.is_err());
        assert!(!out.path().join("index.html").exists());
    }

    #[tokio::test]
    async fn build_fails_without_config() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let result = run(src.path().to_path_buf(), out.path().to_path_buf()).await;
        assert!(result.is_err());
    }
}
