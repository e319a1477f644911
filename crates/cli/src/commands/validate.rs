use saviour_site_validator::validate_site;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating site at: {}", path.display());
    println!();

    let report = validate_site(&path);

    for line in &report.info {
        println!("  {}", line);
    }
    for warning in &report.warnings {
        println!("⚠ {}", warning);
    }
    for error in &report.errors {
        println!("✗ {}", error);
    }

    println!();
    if report.is_ok() {
        println!(
            "✅ Site is valid ({} warning(s))",
            report.warnings.len()
        );
        Ok(())
    } else {
        anyhow::bail!("{} validation error(s)", report.errors.len())
    }
}
