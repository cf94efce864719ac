//! Threshold-based health classification
//!
//! [`classify`] maps a usage percentage onto [`HealthCategory`]. It is a pure
//! function: the result depends only on the value and the thresholds, and
//! severity never decreases as usage grows. [`score`] folds the individual
//! assessments of a host into a single 0-100 health score.

use crate::types::{round2, DiskReport, HealthAssessment, HealthCategory, HealthRating};

/// Usage levels at which the category changes
///
/// `usage < warning` is ok, `warning <= usage < critical` is a warning and
/// `usage >= critical` is critical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthThresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            warning: 70.0,
            critical: 90.0,
        }
    }
}

/// Classify disk usage with the default thresholds
pub fn classify(usage_percent: f64) -> HealthAssessment {
    classify_with(&HealthThresholds::default(), "disk", usage_percent)
}

/// Classify a usage percentage for `subject` (e.g. "disk", "memory")
///
/// NaN is treated as critical. A critical threshold below the warning
/// threshold wins over it, which keeps the mapping monotonic.
pub fn classify_with(
    thresholds: &HealthThresholds,
    subject: &str,
    usage_percent: f64,
) -> HealthAssessment {
    let category = if usage_percent.is_nan() || usage_percent >= thresholds.critical {
        HealthCategory::Critical
    } else if usage_percent >= thresholds.warning {
        HealthCategory::Warning
    } else {
        HealthCategory::Ok
    };

    let shown = if usage_percent.is_nan() {
        "unknown".to_string()
    } else {
        format!("{:.2}%", round2(usage_percent))
    };

    let message = match category {
        HealthCategory::Ok => format!("{} usage at {} is within normal range", subject, shown),
        HealthCategory::Warning => format!(
            "{} usage at {} exceeds the {}% warning threshold",
            subject, shown, thresholds.warning
        ),
        HealthCategory::Critical => format!(
            "{} usage at {} exceeds the {}% critical threshold",
            subject, shown, thresholds.critical
        ),
    };

    HealthAssessment { category, message }
}

/// Combined score for a host
#[derive(Debug, Clone, PartialEq)]
pub struct HealthScore {
    pub score: u8,
    pub rating: HealthRating,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn rating_for(score: u8) -> HealthRating {
    match score {
        90..=u8::MAX => HealthRating::Excellent,
        70..=89 => HealthRating::Good,
        50..=69 => HealthRating::Fair,
        30..=49 => HealthRating::Poor,
        _ => HealthRating::Critical,
    }
}

/// Score a host from its CPU, memory and disk assessments
///
/// Starts from 100 and subtracts a fixed penalty per degraded subsystem.
/// Missing CPU or memory readings carry no penalty.
pub fn score(
    cpu: Option<&HealthAssessment>,
    memory: Option<&HealthAssessment>,
    disks: &[DiskReport],
) -> HealthScore {
    let mut score: u8 = 100;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    match cpu.map(|a| a.category) {
        Some(HealthCategory::Critical) => {
            score -= 20;
            issues.push("High CPU usage".to_string());
            recommendations.push("Investigate high CPU processes".to_string());
        }
        Some(HealthCategory::Warning) => {
            score -= 10;
            issues.push("Elevated CPU usage".to_string());
        }
        _ => {}
    }

    match memory.map(|a| a.category) {
        Some(HealthCategory::Critical) => {
            score -= 25;
            issues.push("Critical memory usage".to_string());
            recommendations.push("Close unnecessary applications or add more RAM".to_string());
        }
        Some(HealthCategory::Warning) => {
            score -= 15;
            issues.push("High memory usage".to_string());
        }
        _ => {}
    }

    let critical = disks
        .iter()
        .filter(|d| d.health.category == HealthCategory::Critical)
        .count();
    let warning = disks
        .iter()
        .filter(|d| d.health.category == HealthCategory::Warning)
        .count();

    if critical > 0 {
        score -= 30;
        issues.push(format!("Critical disk space on {} volume(s)", critical));
        recommendations.push("Immediate cleanup required for critical volumes".to_string());
    } else if warning > 0 {
        score -= 15;
        issues.push(format!("Low disk space on {} volume(s)", warning));
        recommendations.push("Consider cleanup operations".to_string());
    }

    HealthScore {
        score,
        rating: rating_for(score),
        issues,
        recommendations,
    }
}

/// The most severe of a set of assessments, `Ok` when empty
pub fn worst<'a>(assessments: impl IntoIterator<Item = &'a HealthAssessment>) -> HealthCategory {
    assessments
        .into_iter()
        .map(|a| a.category)
        .max()
        .unwrap_or(HealthCategory::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk(category: HealthCategory) -> DiskReport {
        DiskReport {
            path: "/".to_string(),
            mount_point: "/".to_string(),
            total_gb: 100.0,
            used_gb: 50.0,
            free_gb: 50.0,
            usage_percent: 50.0,
            health: HealthAssessment {
                category,
                message: String::new(),
            },
            recommendations: vec![],
            timestamp: 0.0,
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0.0).category, HealthCategory::Ok);
        assert_eq!(classify(69.99).category, HealthCategory::Ok);
        assert_eq!(classify(70.0).category, HealthCategory::Warning);
        assert_eq!(classify(89.99).category, HealthCategory::Warning);
        assert_eq!(classify(90.0).category, HealthCategory::Critical);
        assert_eq!(classify(100.0).category, HealthCategory::Critical);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let mut previous = HealthCategory::Ok;
        for step in 0..=2000 {
            let usage = step as f64 * 0.05;
            let category = classify(usage).category;
            assert!(category >= previous, "severity dropped at {}", usage);
            previous = category;
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        for usage in [0.0, 42.4242, 70.0, 95.5] {
            assert_eq!(classify(usage), classify(usage));
        }
    }

    #[test]
    fn test_message_mentions_value() {
        let assessment = classify(75.456);
        assert!(assessment.message.contains("75.46%"));
        assert!(assessment.message.starts_with("disk"));
    }

    #[test]
    fn test_nan_is_critical() {
        let assessment = classify(f64::NAN);
        assert_eq!(assessment.category, HealthCategory::Critical);
        assert!(assessment.message.contains("unknown"));
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = HealthThresholds {
            warning: 50.0,
            critical: 60.0,
        };
        assert_eq!(
            classify_with(&thresholds, "memory", 55.0).category,
            HealthCategory::Warning
        );
        assert_eq!(
            classify_with(&thresholds, "memory", 60.0).category,
            HealthCategory::Critical
        );
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(rating_for(100), HealthRating::Excellent);
        assert_eq!(rating_for(90), HealthRating::Excellent);
        assert_eq!(rating_for(75), HealthRating::Good);
        assert_eq!(rating_for(50), HealthRating::Fair);
        assert_eq!(rating_for(30), HealthRating::Poor);
        assert_eq!(rating_for(25), HealthRating::Critical);
    }

    #[test]
    fn test_score_healthy_host() {
        let ok = classify(10.0);
        let result = score(Some(&ok), Some(&ok), &[disk(HealthCategory::Ok)]);
        assert_eq!(result.score, 100);
        assert_eq!(result.rating, HealthRating::Excellent);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_score_worst_case() {
        let critical = classify(99.0);
        let result = score(
            Some(&critical),
            Some(&critical),
            &[disk(HealthCategory::Warning), disk(HealthCategory::Critical)],
        );
        assert_eq!(result.score, 100 - 20 - 25 - 30);
        assert_eq!(result.rating, HealthRating::Critical);
        assert_eq!(result.issues.len(), 3);
        assert!(result.issues[2].contains("1 volume"));
    }

    #[test]
    fn test_score_ignores_missing_readings() {
        let result = score(None, None, &[disk(HealthCategory::Warning)]);
        assert_eq!(result.score, 85);
        assert_eq!(result.rating, HealthRating::Good);
    }

    #[test]
    fn test_worst() {
        let a = classify(10.0);
        let b = classify(80.0);
        assert_eq!(worst([&a, &b]), HealthCategory::Warning);
        assert_eq!(worst(std::iter::empty()), HealthCategory::Ok);
    }
}
