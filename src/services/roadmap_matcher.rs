// src/services/roadmap_matcher.rs

use crate::models::roadmap::CareerRoadmap;

/// Which lookup stage produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Both career title and current position matched.
    TitleAndPosition,
    /// Only the career title matched; the position was ignored.
    TitleOnly,
}

/// Case-insensitive substring test. An exact match is a special case.
fn matches(field: &str, wanted: &str) -> bool {
    field.to_lowercase().contains(&wanted.to_lowercase())
}

/// Finds the roadmap for a career and starting point.
///
/// Tries title + position first, then title alone. `roadmaps` is scanned in
/// slice order, so the caller decides precedence (the store hands them over
/// by ascending id). A missing or blank position skips the first stage.
pub fn find_roadmap<'a>(
    roadmaps: &'a [CareerRoadmap],
    career_title: &str,
    current_position: Option<&str>,
) -> Option<(&'a CareerRoadmap, MatchPolicy)> {
    let career_title = career_title.trim();
    let current_position = current_position.map(str::trim).filter(|p| !p.is_empty());

    if let Some(position) = current_position {
        let exact = roadmaps.iter().find(|r| {
            matches(&r.career_title, career_title) && matches(&r.current_position, position)
        });
        if let Some(roadmap) = exact {
            return Some((roadmap, MatchPolicy::TitleAndPosition));
        }
    }

    roadmaps
        .iter()
        .find(|r| matches(&r.career_title, career_title))
        .map(|roadmap| (roadmap, MatchPolicy::TitleOnly))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;

    fn roadmap(id: i64, title: &str, position: &str) -> CareerRoadmap {
        CareerRoadmap {
            id,
            career_title: title.to_string(),
            current_position: position.to_string(),
            target_position: "Target".to_string(),
            total_steps: 0,
            estimated_duration: "1 year".to_string(),
            steps: Json(Vec::new()),
            prerequisites: Json(Vec::new()),
            success_rate: "50%".to_string(),
            difficulty: "Medium".to_string(),
            investment: "Low".to_string(),
            alternatives: Json(Vec::new()),
        }
    }

    fn store() -> Vec<CareerRoadmap> {
        vec![
            roadmap(1, "Medical", "10th"),
            roadmap(2, "Engineering", "10th"),
            roadmap(3, "Engineering", "12th"),
            roadmap(4, "Software Engineering", "Graduation"),
        ]
    }

    #[test]
    fn exact_title_and_position() {
        let store = store();
        let (found, policy) = find_roadmap(&store, "Engineering", Some("12th")).unwrap();
        assert_eq!(found.id, 3);
        assert_eq!(policy, MatchPolicy::TitleAndPosition);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let store = store();
        let (found, _) = find_roadmap(&store, "medic", Some("10TH")).unwrap();
        assert_eq!(found.id, 1);

        let (found, policy) = find_roadmap(&store, "software", Some("graduation")).unwrap();
        assert_eq!(found.id, 4);
        assert_eq!(policy, MatchPolicy::TitleAndPosition);
    }

    #[test]
    fn falls_back_to_title_only() {
        let store = store();
        let (found, policy) = find_roadmap(&store, "Medical", Some("Graduation")).unwrap();
        assert_eq!(found.id, 1);
        assert_eq!(policy, MatchPolicy::TitleOnly);
    }

    #[test]
    fn first_match_in_order_wins() {
        let store = store();
        // "engineering" is a substring of ids 2, 3 and 4
        let (found, _) = find_roadmap(&store, "engineering", None).unwrap();
        assert_eq!(found.id, 2);
    }

    #[test]
    fn blank_position_skips_first_stage() {
        let store = store();
        let (found, policy) = find_roadmap(&store, "Engineering", Some("  ")).unwrap();
        assert_eq!(found.id, 2);
        assert_eq!(policy, MatchPolicy::TitleOnly);
    }

    #[test]
    fn unknown_title_is_none() {
        assert!(find_roadmap(&store(), "Astronaut", Some("10th")).is_none());
        assert!(find_roadmap(&[], "Medical", None).is_none());
    }
}
