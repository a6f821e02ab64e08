//! Console rendering for the mathematical demonstration
//!
//! Pure formatting: every function builds a String so output is
//! testable without capturing stdout.

use primer_sequence::Analysis;

const RULE: &str = "============================================================";

const BANNER: &str = r#"
     ____       _
    |  _ \ _ __(_)_ __ ___   ___ _ __
    | |_) | '__| | '_ ` _ \ / _ \ '__|
    |  __/| |  | | | | | | |  __/ |
    |_|   |_|  |_|_| |_| |_|\___|_|

    Primer - An Interactive Number Demo
    Fibonacci sequences and the golden ratio
"#;

pub fn banner() -> &'static str {
    BANNER
}

pub fn section_header(title: &str) -> String {
    format!("{}\n{}\n{}", RULE, title, RULE)
}

/// Group digits of a non-negative integer with thousands separators.
pub fn thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render the full mathematical demonstration: the indexed sequence,
/// aggregate properties, ratio table, and best φ approximation.
pub fn render_demo(terms: &[u128], analysis: &Analysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", section_header("MATHEMATICAL DEMONSTRATION")));
    out.push_str(&format!("Fibonacci Sequence (first {} terms):\n", terms.len()));
    for (i, term) in terms.iter().enumerate() {
        out.push_str(&format!("  F_{}: {}\n", i, thousands(*term)));
    }

    let report = match analysis.report() {
        Some(r) => r,
        None => {
            out.push_str("\nSequence too short for analysis.");
            return out;
        }
    };

    out.push_str("\nMathematical Properties:\n");
    out.push_str(&format!("  Sum of sequence: {}\n", thousands(report.sum)));
    out.push_str(&format!("  Maximum value: {}\n", thousands(report.max)));
    out.push_str(&format!("  Minimum value: {}\n", thousands(report.min)));
    out.push_str(&format!("  Average value: {:.2}\n", report.average));

    if !report.ratios.is_empty() {
        out.push_str("\nConsecutive Ratios (F_n/F_n-1):\n");
        for (i, ratio) in report.ratios.iter().enumerate() {
            out.push_str(&format!("  Ratio {}: {:.8}\n", i + 1, ratio));
        }

        out.push_str(&format!("\nGolden Ratio (φ): {:.8}\n", report.golden_ratio));
        if let (Some(best), Some(index)) = (report.best_deviation, report.best_index) {
            out.push_str(&format!("Best approximation: {:.8}\n", report.ratios[index]));
            out.push_str(&format!("Difference: {:.10}", best));
        }
    }

    out
}

/// Render the completion summary block.
pub fn render_summary(name: &str, terms: &[u128]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", section_header("PROGRAM COMPLETED SUCCESSFULLY")));
    out.push_str("Summary:\n");
    out.push_str(&format!("  - Greeted: {}\n", name));
    out.push_str(&format!("  - Calculated: {} Fibonacci terms\n", terms.len()));
    let max = terms.iter().max().copied().unwrap_or(0);
    out.push_str(&format!("  - Max Fibonacci value: {}\n", thousands(max)));
    out.push_str(RULE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_sequence::analyze;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_demo_contains_sections() {
        let terms = [0u128, 1, 1, 2, 3];
        let analysis = analyze(&terms).unwrap();
        let text = render_demo(&terms, &analysis);
        assert!(text.contains("MATHEMATICAL DEMONSTRATION"));
        assert!(text.contains("F_0: 0"));
        assert!(text.contains("F_4: 3"));
        assert!(text.contains("Sum of sequence: 7"));
        assert!(text.contains("Average value: 1.40"));
        assert!(text.contains("Golden Ratio"));
        assert!(text.contains("Best approximation"));
    }

    #[test]
    fn test_demo_insufficient() {
        let terms = [0u128];
        let analysis = analyze(&terms).unwrap();
        let text = render_demo(&terms, &analysis);
        assert!(text.contains("too short for analysis"));
        assert!(!text.contains("Mathematical Properties"));
    }

    #[test]
    fn test_summary() {
        let terms = [0u128, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377];
        let text = render_summary("Alice", &terms);
        assert!(text.contains("Greeted: Alice"));
        assert!(text.contains("15 Fibonacci terms"));
        assert!(text.contains("Max Fibonacci value: 377"));
    }

    #[test]
    fn test_banner_mentions_primer() {
        assert!(banner().contains("Primer"));
    }
}
