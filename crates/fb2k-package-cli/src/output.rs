//! Report formatting

use fb2k_package::PackageReport;
use std::path::Path;

/// Format a byte count with thousands separators (e.g., "1,234,567").
pub fn format_bytes(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

/// Line printed for each directory the setup ensured.
pub fn created_line(dir: &Path) -> String {
    format!("  Created: {}", dir.display())
}

/// Line printed after a package was written.
pub fn packaged_line(report: &PackageReport) -> String {
    format!(
        "Packaged: {}  ({} bytes)",
        report.path.display(),
        format_bytes(report.size)
    )
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use fb2k_package::BuildTarget;
    use std::path::PathBuf;
    use test_case::test_case;

    #[test_case(0, "0")]
    #[test_case(999, "999")]
    #[test_case(1_000, "1,000")]
    #[test_case(12_345, "12,345")]
    #[test_case(123_456, "123,456")]
    #[test_case(1_234_567, "1,234,567")]
    #[test_case(u64::MAX, "18,446,744,073,709,551,615")]
    fn format_bytes___groups_thousands(bytes: u64, expected: &str) {
        assert_eq!(format_bytes(bytes), expected);
    }

    #[test]
    fn created_line___indents_path() {
        let line = created_line(Path::new("/ws/_result/x64_Release/bin"));

        assert_eq!(line, "  Created: /ws/_result/x64_Release/bin");
    }

    #[test]
    fn packaged_line___shows_path_and_grouped_size() {
        let report = PackageReport {
            path: PathBuf::from("/ws/_result/foo_monthly_stats.fb2k-component"),
            size: 104_857,
            target: BuildTarget::default(),
            artifact_size: 262_144,
            artifact_sha256: String::new(),
        };

        assert_eq!(
            packaged_line(&report),
            "Packaged: /ws/_result/foo_monthly_stats.fb2k-component  (104,857 bytes)"
        );
    }
}
