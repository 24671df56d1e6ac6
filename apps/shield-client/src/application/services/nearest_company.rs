//! Nearest-company resolution.

use tracing::{debug, warn};

use crate::application::ports::{CateringCompany, DistanceOracle};
use crate::domain::shared::Postcode;

/// Selects the catering company closest to an origin location.
///
/// Candidates are scanned in input order; the first one achieving the
/// strictly smallest non-negative distance wins, so ties are broken by
/// input order. Candidates whose distance lookup fails or comes back
/// negative are skipped. The resolver holds no state — distances and the
/// catalog can change between orders, so every placement resolves afresh.
pub struct NearestCompanyResolver;

impl NearestCompanyResolver {
    /// Resolve the nearest usable company, or `None` if no candidate
    /// yields a usable distance.
    #[must_use]
    pub fn resolve<D: DistanceOracle>(
        oracle: &D,
        origin: &Postcode,
        candidates: &[CateringCompany],
    ) -> Option<CateringCompany> {
        let mut nearest: Option<(f32, &CateringCompany)> = None;
        for company in candidates {
            let distance = match oracle.distance(origin, &company.postcode) {
                Ok(d) if d >= 0.0 => d,
                Ok(d) => {
                    debug!(company = %company.name, distance = d, "skipping unusable distance");
                    continue;
                }
                Err(err) => {
                    warn!(company = %company.name, error = %err, "distance lookup failed");
                    continue;
                }
            };
            if nearest.is_none_or(|(best, _)| distance < best) {
                nearest = Some((distance, company));
            }
        }
        nearest.map(|(_, company)| company.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockDistanceOracle, RemoteError};

    fn company(id: &str, postcode: &str) -> CateringCompany {
        CateringCompany {
            id: id.to_owned(),
            name: format!("caterer {id}"),
            postcode: Postcode::parse(postcode).unwrap(),
        }
    }

    fn origin() -> Postcode {
        Postcode::parse("EH8_9LE").unwrap()
    }

    #[test]
    fn picks_the_strictly_smallest_distance() {
        let candidates = vec![
            company("1", "EH1_1AA"),
            company("2", "EH2_2BB"),
            company("3", "EH3_3CC"),
        ];
        let mut oracle = MockDistanceOracle::new();
        oracle.expect_distance().returning(|_, to| {
            Ok(match to.as_str() {
                "EH1_1AA" => 5.0,
                "EH2_2BB" => 1.5,
                _ => 3.0,
            })
        });

        let nearest = NearestCompanyResolver::resolve(&oracle, &origin(), &candidates).unwrap();
        assert_eq!(nearest.id, "2");
    }

    #[test]
    fn ties_break_by_input_order() {
        let candidates = vec![company("1", "EH1_1AA"), company("2", "EH2_2BB")];
        let mut oracle = MockDistanceOracle::new();
        oracle.expect_distance().returning(|_, _| Ok(2.0));

        let nearest = NearestCompanyResolver::resolve(&oracle, &origin(), &candidates).unwrap();
        assert_eq!(nearest.id, "1");
    }

    #[test]
    fn negative_distances_are_skipped() {
        let candidates = vec![company("1", "EH1_1AA"), company("2", "EH2_2BB")];
        let mut oracle = MockDistanceOracle::new();
        oracle.expect_distance().returning(|_, to| {
            Ok(if to.as_str() == "EH1_1AA" { -1.0 } else { 9.0 })
        });

        let nearest = NearestCompanyResolver::resolve(&oracle, &origin(), &candidates).unwrap();
        assert_eq!(nearest.id, "2");
    }

    #[test]
    fn failed_lookups_are_skipped() {
        let candidates = vec![company("1", "EH1_1AA"), company("2", "EH2_2BB")];
        let mut oracle = MockDistanceOracle::new();
        oracle.expect_distance().returning(|_, to| {
            if to.as_str() == "EH1_1AA" {
                Err(RemoteError::Transport {
                    message: "timeout".into(),
                })
            } else {
                Ok(4.0)
            }
        });

        let nearest = NearestCompanyResolver::resolve(&oracle, &origin(), &candidates).unwrap();
        assert_eq!(nearest.id, "2");
    }

    #[test]
    fn no_usable_candidate_means_none_found() {
        let candidates = vec![company("1", "EH1_1AA")];
        let mut oracle = MockDistanceOracle::new();
        oracle.expect_distance().returning(|_, _| Ok(-1.0));

        assert!(NearestCompanyResolver::resolve(&oracle, &origin(), &candidates).is_none());
    }

    #[test]
    fn empty_candidate_list_means_none_found() {
        let oracle = MockDistanceOracle::new();
        assert!(NearestCompanyResolver::resolve(&oracle, &origin(), &[]).is_none());
    }
}
