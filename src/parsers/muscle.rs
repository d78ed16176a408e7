// ABOUTME: Keyword classifier assigning a primary muscle group to an exercise name
// ABOUTME: Ordered first-match-wins table; specific groups are checked before broad ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use logbook_core::models::MuscleGroup;

/// Keyword table in match priority order
///
/// The first group with any keyword contained in the lowercased name wins.
/// Isolation groups precede the compound catch-alls that share their words
/// ("leg curl" is hamstrings before "curl" is biceps, "leg press" is quads
/// before "press" is shoulders, "lats" never claims "lateral raise").
pub const MUSCLE_KEYWORDS: &[(MuscleGroup, &[&str])] = &[
    (
        MuscleGroup::FullBody,
        &["clean", "snatch", "thruster", "burpee", "full body"],
    ),
    (MuscleGroup::Calves, &["calf", "calves"]),
    (
        MuscleGroup::Triceps,
        &[
            "tricep",
            "pushdown",
            "skull",
            "dip",
            "close grip",
            "overhead extension",
            "french press",
        ],
    ),
    (
        MuscleGroup::Forearms,
        &["forearm", "wrist curl", "reverse curl", "grip"],
    ),
    (
        MuscleGroup::Traps,
        &["shrug", "trap", "face pull", "upright row"],
    ),
    (
        MuscleGroup::Hamstrings,
        &[
            "hamstring",
            "rdl",
            "romanian",
            "leg curl",
            "stiff leg",
            "good morning",
            "nordic",
        ],
    ),
    (
        MuscleGroup::Glutes,
        &["glute", "hip thrust", "kickback", "bridge", "sumo"],
    ),
    (
        MuscleGroup::Quads,
        &[
            "squat",
            "quad",
            "leg extension",
            "hack squat",
            "bulgarian",
            "lunge",
            "leg press",
        ],
    ),
    (
        MuscleGroup::Core,
        &[
            "plank",
            "crunch",
            "abs",
            "sit up",
            "sit-up",
            "russian twist",
            "core",
            "hollow",
            "leg raise",
            "ab wheel",
        ],
    ),
    (MuscleGroup::Biceps, &["curl", "bicep", "hammer"]),
    (
        MuscleGroup::Lats,
        &[
            "lat pull",
            "lats",
            "pullup",
            "pull-up",
            "pull up",
            "pulldown",
            "pull down",
            "chin-up",
            "chin up",
            "chinup",
        ],
    ),
    (
        MuscleGroup::Chest,
        &[
            "bench", "chest", "pec", "fly", "flye", "push up", "push-up", "pushup", "incline",
            "decline",
        ],
    ),
    (
        MuscleGroup::Shoulders,
        &[
            "shoulder",
            "overhead",
            "ohp",
            "military",
            "lateral raise",
            "front raise",
            "delt",
            "arnold",
            "press",
        ],
    ),
    (
        MuscleGroup::Back,
        &["row", "deadlift", "back", "rhomboid", "hyperextension"],
    ),
    (MuscleGroup::Legs, &["leg", "step up", "step-up"]),
];

/// Infer the primary muscle group of an exercise
///
/// Total: names matching no keyword fall back to `FullBody`.
#[must_use]
pub fn infer_muscle_group(exercise_name: &str) -> MuscleGroup {
    let lower = exercise_name.to_lowercase();
    MUSCLE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map_or(MuscleGroup::FullBody, |(group, _)| *group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_group_has_keywords() {
        for group in MuscleGroup::ALL {
            assert!(
                MUSCLE_KEYWORDS.iter().any(|(g, words)| *g == group && !words.is_empty()),
                "{group} has no keywords"
            );
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for (_, keywords) in MUSCLE_KEYWORDS {
            for keyword in *keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}
