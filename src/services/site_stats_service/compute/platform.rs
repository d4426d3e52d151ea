use crate::models::{PlatformDifference, PlatformStability, StabilityEntry};
use indexmap::IndexMap;

/// Pairs desktop and mobile entries by subject and reports how far their
/// averages drift apart, smallest gap first. Subjects seen on only one
/// platform are left out.
pub fn diff_platforms(stability: &PlatformStability) -> Vec<PlatformDifference> {
    let desktop = by_key(&stability.desktop);
    let mobile = by_key(&stability.mobile);

    let mut differences: Vec<PlatformDifference> = desktop
        .iter()
        .filter_map(|(key, desktop_item)| {
            let mobile_item = mobile.get(key)?;
            Some(PlatformDifference {
                key: key.to_string(),
                slug: desktop_item.slug.clone(),
                url: desktop_item.url.clone(),
                name: desktop_item.name.clone(),
                desktop_average: desktop_item.average,
                mobile_average: mobile_item.average,
                difference: (desktop_item.average - mobile_item.average).abs(),
                desktop_variation: desktop_item.variation,
                mobile_variation: mobile_item.variation,
            })
        })
        .collect();

    differences.sort_by_key(|d| d.difference);
    differences
}

// later entries win on duplicate keys
fn by_key(entries: &[StabilityEntry]) -> IndexMap<&str, &StabilityEntry> {
    let mut map = IndexMap::new();
    for entry in entries {
        map.insert(entry.key.as_str(), entry);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, average: i64, variation: f64) -> StabilityEntry {
        StabilityEntry {
            key: key.to_string(),
            slug: format!("{}-slug", key),
            url: Some(key.to_string()),
            name: None,
            variation,
            average,
            samples: vec![average as f64],
        }
    }

    #[test]
    fn test_difference_is_absolute_gap() {
        let stability = PlatformStability {
            desktop: vec![entry("a", 81, 20.0)],
            mobile: vec![entry("a", 63, 5.0)],
        };

        let diffs = diff_platforms(&stability);

        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].difference, 18);
        assert_eq!(diffs[0].desktop_average, 81);
        assert_eq!(diffs[0].mobile_average, 63);
        assert_eq!(diffs[0].desktop_variation, 20.0);
        assert_eq!(diffs[0].mobile_variation, 5.0);
        assert_eq!(diffs[0].slug, "a-slug");
    }

    #[test]
    fn test_unmatched_subjects_are_excluded() {
        let stability = PlatformStability {
            desktop: vec![entry("a", 70, 1.0), entry("b", 40, 1.0)],
            mobile: vec![entry("b", 90, 1.0), entry("c", 10, 1.0)],
        };

        let diffs = diff_platforms(&stability);

        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].key, "b");
        assert_eq!(diffs[0].difference, 50);
    }

    #[test]
    fn test_sorted_smallest_gap_first() {
        let stability = PlatformStability {
            desktop: vec![entry("a", 90, 1.0), entry("b", 50, 1.0), entry("c", 70, 1.0)],
            mobile: vec![entry("c", 75, 1.0), entry("a", 60, 1.0), entry("b", 49, 1.0)],
        };

        let order: Vec<(String, i64)> = diff_platforms(&stability)
            .into_iter()
            .map(|d| (d.key, d.difference))
            .collect();

        assert_eq!(
            order,
            vec![
                ("b".to_string(), 1),
                ("c".to_string(), 5),
                ("a".to_string(), 30)
            ]
        );
    }

    #[test]
    fn test_empty_platforms() {
        assert!(diff_platforms(&PlatformStability::default()).is_empty());
    }
}
