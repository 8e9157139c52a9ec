//! Mode and road-attribute checks applied to an assembled route.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::Segment;

/// Road attribute tags that a route step may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoadTag {
    Highway,
    Toll,
    Bridge,
    Hazardous,
    Scenic,
}

impl RoadTag {
    pub const ALL: [RoadTag; 5] = [
        RoadTag::Highway,
        RoadTag::Toll,
        RoadTag::Bridge,
        RoadTag::Hazardous,
        RoadTag::Scenic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoadTag::Highway => "HIGHWAY",
            RoadTag::Toll => "TOLL",
            RoadTag::Bridge => "BRIDGE",
            RoadTag::Hazardous => "HAZARDOUS",
            RoadTag::Scenic => "SCENIC",
        }
    }
}

impl fmt::Display for RoadTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoadTag {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        RoadTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| Error::InvalidRoadTag {
                value: value.to_string(),
            })
    }
}

/// How a route's actual sets are compared with the requested ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintMatch {
    /// Accept when the sets share at least one element, or both are empty.
    #[default]
    Overlap,
    /// Accept only when every actual element was requested.
    Containment,
}

impl ConstraintMatch {
    /// The single acceptance predicate used for both modes and road tags.
    pub fn accepts<T: Ord>(self, actual: &BTreeSet<T>, requested: &BTreeSet<T>) -> bool {
        match self {
            ConstraintMatch::Overlap => {
                (actual.is_empty() && requested.is_empty())
                    || !actual.is_disjoint(requested)
            }
            ConstraintMatch::Containment => actual.is_subset(requested),
        }
    }
}

/// Distinct travel modes and road tags used along a segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteFootprint {
    pub modes: BTreeSet<String>,
    pub tags: BTreeSet<RoadTag>,
}

impl RouteFootprint {
    pub fn from_segment(segment: &Segment) -> Self {
        let mut footprint = Self::default();
        for step in &segment.steps {
            footprint.modes.insert(step.mode.clone());
            footprint.tags.extend(step.addition.tags());
        }
        footprint
    }

    /// Tag names as they appear in requests (`HIGHWAY`, `TOLL`, ...).
    pub fn tag_names(&self) -> BTreeSet<String> {
        self.tags.iter().map(|tag| tag.as_str().to_string()).collect()
    }

    /// Check both sets against the caller's request.
    pub fn satisfies(
        &self,
        modes: &[String],
        constraints: &[String],
        matching: ConstraintMatch,
    ) -> bool {
        let requested_modes: BTreeSet<String> = modes.iter().cloned().collect();
        let requested_tags: BTreeSet<String> =
            constraints.iter().map(|value| canonical_tag_name(value)).collect();

        matching.accepts(&self.modes, &requested_modes)
            && matching.accepts(&self.tag_names(), &requested_tags)
    }
}

/// Wire name of a known tag given in any case; other values are kept as given
/// and match no route tag.
fn canonical_tag_name(value: &str) -> String {
    value
        .parse::<RoadTag>()
        .map(|tag| tag.as_str().to_string())
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Coordinates, EdgeAddition};
    use crate::output::RouteStep;

    fn step(mode: &str, addition: EdgeAddition) -> RouteStep {
        RouteStep {
            origin: Coordinates::new(0.0, 0.0),
            destination: Coordinates::new(1.0, 0.0),
            origin_name: "A".to_string(),
            destination_name: "B".to_string(),
            distance: 1.0,
            duration: 1.0,
            mode: mode.to_string(),
            addition,
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn highway_toll_segment() -> Segment {
        Segment {
            steps: vec![
                step(
                    "car",
                    EdgeAddition {
                        highway: true,
                        ..EdgeAddition::default()
                    },
                ),
                step(
                    "car",
                    EdgeAddition {
                        toll: true,
                        highway: true,
                        ..EdgeAddition::default()
                    },
                ),
            ],
        }
    }

    #[test]
    fn road_tags_parse_case_insensitively() {
        assert_eq!("toll".parse::<RoadTag>().unwrap(), RoadTag::Toll);
        assert_eq!("SCENIC".parse::<RoadTag>().unwrap(), RoadTag::Scenic);
        assert!("ferry".parse::<RoadTag>().is_err());
    }

    #[test]
    fn footprint_deduplicates() {
        let footprint = RouteFootprint::from_segment(&highway_toll_segment());
        assert_eq!(footprint.modes.len(), 1);
        assert_eq!(
            footprint.tags.iter().copied().collect::<Vec<_>>(),
            vec![RoadTag::Highway, RoadTag::Toll]
        );
    }

    #[test]
    fn overlap_accepts_partial_intersection() {
        let footprint = RouteFootprint::from_segment(&highway_toll_segment());
        assert!(footprint.satisfies(
            &strings(&["car"]),
            &strings(&["TOLL"]),
            ConstraintMatch::Overlap
        ));
        assert!(!footprint.satisfies(
            &strings(&["bike"]),
            &strings(&["TOLL"]),
            ConstraintMatch::Overlap
        ));
        assert!(!footprint.satisfies(&strings(&["car"]), &[], ConstraintMatch::Overlap));
    }

    #[test]
    fn overlap_accepts_both_empty() {
        let footprint = RouteFootprint::from_segment(&Segment {
            steps: vec![step("walk", EdgeAddition::default())],
        });
        assert!(footprint.satisfies(&strings(&["walk"]), &[], ConstraintMatch::Overlap));
        assert!(!footprint.satisfies(&[], &[], ConstraintMatch::Overlap));
    }

    #[test]
    fn requested_tags_match_in_any_case() {
        let footprint = RouteFootprint::from_segment(&highway_toll_segment());
        for matching in [ConstraintMatch::Overlap, ConstraintMatch::Containment] {
            assert!(footprint.satisfies(
                &strings(&["car"]),
                &strings(&["toll", "Highway"]),
                matching
            ));
        }
        assert!(!footprint.satisfies(
            &strings(&["car"]),
            &strings(&["TOLLL"]),
            ConstraintMatch::Overlap
        ));
    }

    #[test]
    fn containment_rejects_unrequested_tags() {
        let footprint = RouteFootprint::from_segment(&highway_toll_segment());
        assert!(!footprint.satisfies(
            &strings(&["car"]),
            &strings(&["TOLL"]),
            ConstraintMatch::Containment
        ));
        assert!(footprint.satisfies(
            &strings(&["car", "bike"]),
            &strings(&["TOLL", "HIGHWAY", "BRIDGE"]),
            ConstraintMatch::Containment
        ));
    }
}
