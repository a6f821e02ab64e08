//! Sequence properties analysis
//!
//! Derives aggregate statistics and golden-ratio convergence data from
//! a generated sequence. A sequence shorter than two terms yields an
//! explicit insufficient-data marker, never partial statistics.

use primer_core::PrimerError;
use serde::Serialize;

/// φ = (1 + √5) / 2, computed once per analysis
pub fn golden_ratio() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}

/// Aggregate properties of a sequence
#[derive(Debug, Clone, Serialize)]
pub struct SequenceAnalysis {
    pub length: usize,
    pub sum: u128,
    pub max: u128,
    pub min: u128,
    pub average: f64,
    /// Consecutive ratios term[i] / term[i-1]. Pairs whose divisor is
    /// zero are skipped outright, so this can be shorter than length-1.
    pub ratios: Vec<f64>,
    pub golden_ratio: f64,
    /// |ratio - φ| for each entry of `ratios`
    pub deviations: Vec<f64>,
    /// Smallest deviation and its index in `ratios`; None when no
    /// ratios exist. First occurrence wins ties.
    pub best_deviation: Option<f64>,
    pub best_index: Option<usize>,
}

/// Analysis outcome: a full report or the insufficient-data marker
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Analysis {
    Report(SequenceAnalysis),
    Insufficient { length: usize },
}

impl Analysis {
    pub fn report(&self) -> Option<&SequenceAnalysis> {
        match self {
            Analysis::Report(r) => Some(r),
            Analysis::Insufficient { .. } => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Analysis::Insufficient { .. })
    }
}

/// Analyze a sequence in a single pass plus one ratio scan.
///
/// Division uses f64 throughout. Fails with OVERFLOW only if the term
/// sum exceeds u128.
pub fn analyze(sequence: &[u128]) -> Result<Analysis, PrimerError> {
    if sequence.len() < 2 {
        return Ok(Analysis::Insufficient { length: sequence.len() });
    }

    let mut sum: u128 = 0;
    let mut min = sequence[0];
    let mut max = sequence[0];
    for &term in sequence {
        sum = sum
            .checked_add(term)
            .ok_or_else(|| PrimerError::overflow("sequence sum exceeds u128"))?;
        if term < min {
            min = term;
        }
        if term > max {
            max = term;
        }
    }
    let average = sum as f64 / sequence.len() as f64;

    let mut ratios = Vec::with_capacity(sequence.len() - 1);
    for pair in sequence.windows(2) {
        if pair[0] != 0 {
            ratios.push(pair[1] as f64 / pair[0] as f64);
        }
    }

    let phi = golden_ratio();
    let deviations: Vec<f64> = ratios.iter().map(|r| (r - phi).abs()).collect();

    // Left-to-right scan so the first minimal deviation wins ties
    let mut best: Option<(usize, f64)> = None;
    for (i, &d) in deviations.iter().enumerate() {
        match best {
            Some((_, current)) if d >= current => {}
            _ => best = Some((i, d)),
        }
    }

    Ok(Analysis::Report(SequenceAnalysis {
        length: sequence.len(),
        sum,
        max,
        min,
        average,
        ratios,
        golden_ratio: phi,
        deviations,
        best_deviation: best.map(|(_, d)| d),
        best_index: best.map(|(i, _)| i),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_insufficient() {
        let analysis = analyze(&[]).unwrap();
        assert!(analysis.is_insufficient());
        assert!(analysis.report().is_none());
    }

    #[test]
    fn test_single_element_insufficient() {
        let analysis = analyze(&[0]).unwrap();
        assert!(matches!(analysis, Analysis::Insufficient { length: 1 }));
    }

    #[test]
    fn test_aggregates() {
        let analysis = analyze(&[0, 1, 1, 2, 3]).unwrap();
        let report = analysis.report().unwrap();
        assert_eq!(report.length, 5);
        assert_eq!(report.sum, 7);
        assert_eq!(report.max, 3);
        assert_eq!(report.min, 0);
        assert!((report.average - 1.4).abs() < 1e-12);
        // 4 consecutive pairs, but the leading 0→1 pair is skipped
        assert_eq!(report.ratios.len(), 3);
    }

    #[test]
    fn test_ratios_skip_zero_divisor() {
        let analysis = analyze(&[0, 1, 1, 2, 3, 5]).unwrap();
        let report = analysis.report().unwrap();
        // 1/0 is skipped, not substituted, so the list starts at 1/1
        let expected = [1.0, 2.0, 1.5, 5.0 / 3.0];
        assert_eq!(report.ratios.len(), expected.len());
        for (actual, want) in report.ratios.iter().zip(expected.iter()) {
            assert!((actual - want).abs() < 1e-10, "got {}, want {}", actual, want);
        }
    }

    #[test]
    fn test_no_ratios_when_all_divisors_zero() {
        let analysis = analyze(&[0, 0, 0]).unwrap();
        let report = analysis.report().unwrap();
        assert!(report.ratios.is_empty());
        assert!(report.best_deviation.is_none());
        assert!(report.best_index.is_none());
    }

    #[test]
    fn test_golden_ratio_value() {
        assert!((golden_ratio() - 1.618_033_988_749_894_8).abs() < 1e-12);
    }

    #[test]
    fn test_best_approximation_is_last_fibonacci_ratio() {
        // Fibonacci ratios converge monotonically in deviation, so the
        // final ratio is the closest to φ
        let terms = [0u128, 1, 1, 2, 3, 5, 8, 13, 21, 34];
        let analysis = analyze(&terms).unwrap();
        let report = analysis.report().unwrap();
        assert_eq!(report.best_index, Some(report.ratios.len() - 1));
        let best = report.best_deviation.unwrap();
        for d in &report.deviations {
            assert!(*d >= best);
        }
    }

    #[test]
    fn test_first_minimum_wins_ties() {
        // [1, 2] and [2, 4] both give ratio 2.0, identical deviation
        let analysis = analyze(&[1, 2, 4]).unwrap();
        let report = analysis.report().unwrap();
        assert_eq!(report.best_index, Some(0));
    }

    #[test]
    fn test_report_serializes() {
        let analysis = analyze(&[0, 1, 1, 2, 3]).unwrap();
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("\"status\":\"report\""));
        assert!(json.contains("\"sum\":7"));
    }

    #[test]
    fn test_insufficient_serializes() {
        let analysis = analyze(&[42]).unwrap();
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("insufficient"));
    }
}
