//! Solvers for [`CpModel`].
//!
//! # Disjunctive packing
//!
//! When every interval belongs to at most one no-overlap group and may end
//! anywhere up to the horizon, the groups are independent single-machine
//! problems `1|r_j|C_max`. Sequencing each group by earliest `start_min`
//! (ties in declaration order) and packing back-to-back minimizes the
//! group's completion time, so the maximum over groups is the optimal
//! makespan.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 3.1

use std::collections::HashMap;

use tracing::debug;

use crate::error::ExactError;

use super::model::{CpConstraint, CpModel, CpSolution, IntervalSolution, SolverStatus};

/// A solver for constraint models.
pub trait CpSolver {
    fn name(&self) -> &'static str;

    /// Solves `model`, or explains why it cannot.
    fn solve(&self, model: &CpModel) -> Result<CpSolution, ExactError>;
}

/// Exact solver for models whose no-overlap groups are disjoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisjunctivePackingSolver;

impl DisjunctivePackingSolver {
    pub fn new() -> Self {
        Self
    }

    /// Interval positions grouped by no-overlap constraint. Intervals in no
    /// group come back as singleton groups.
    fn groups(model: &CpModel) -> Result<Vec<Vec<usize>>, ExactError> {
        let index: HashMap<&str, usize> = model
            .intervals()
            .iter()
            .enumerate()
            .map(|(i, v)| (v.name.as_str(), i))
            .collect();
        let mut owner: Vec<Option<usize>> = vec![None; model.interval_count()];
        let mut groups = Vec::new();

        for CpConstraint::NoOverlap { intervals } in model.constraints() {
            let mut group = Vec::with_capacity(intervals.len());
            for name in intervals {
                let &i = index.get(name.as_str()).ok_or_else(|| {
                    ExactError::UnsupportedModel(format!(
                        "no-overlap names unknown interval '{name}'"
                    ))
                })?;
                if owner[i].is_some() {
                    return Err(ExactError::UnsupportedModel(format!(
                        "interval '{name}' belongs to more than one no-overlap group"
                    )));
                }
                owner[i] = Some(groups.len());
                group.push(i);
            }
            groups.push(group);
        }

        for (i, o) in owner.iter().enumerate() {
            if o.is_none() {
                groups.push(vec![i]);
            }
        }
        Ok(groups)
    }
}

impl CpSolver for DisjunctivePackingSolver {
    fn name(&self) -> &'static str {
        "DisjunctivePacking"
    }

    fn solve(&self, model: &CpModel) -> Result<CpSolution, ExactError> {
        let horizon = model.horizon();
        for v in model.intervals() {
            if v.duration < 0 {
                return Err(ExactError::UnsupportedModel(format!(
                    "interval '{}' has negative duration {}",
                    v.name, v.duration
                )));
            }
            if v.end_max < horizon || v.start_max < horizon - v.duration {
                return Err(ExactError::UnsupportedModel(format!(
                    "interval '{}' has a deadline inside the horizon",
                    v.name
                )));
            }
        }

        let groups = Self::groups(model)?;
        let mut placements = HashMap::with_capacity(model.interval_count());
        let mut max_end: i64 = 0;

        for mut group in groups {
            group.sort_by_key(|&i| model.intervals()[i].start_min);

            let mut cursor: i64 = 0;
            for i in group {
                let v = &model.intervals()[i];
                let start = cursor.max(v.start_min);
                let end = start + v.duration;
                if end > horizon {
                    return Err(ExactError::NoSolution(format!(
                        "interval '{}' cannot finish by horizon {horizon}",
                        v.name
                    )));
                }
                cursor = end;
                max_end = max_end.max(end);
                placements.insert(v.name.clone(), IntervalSolution { start, end });
            }
        }

        debug!(
            model = model.name(),
            intervals = placements.len(),
            objective = max_end,
            "disjunctive packing solved"
        );

        Ok(CpSolution {
            status: SolverStatus::Optimal,
            intervals: placements,
            objective_value: max_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::IntervalVar;

    fn two_groups() -> CpModel {
        let mut model = CpModel::new("two machines", 16);
        for (name, d) in [("a", 5), ("b", 3), ("c", 2), ("d", 6)] {
            model.add_interval(IntervalVar::within_horizon(name, d, 16));
        }
        model.add_no_overlap(vec!["a".into(), "c".into()]);
        model.add_no_overlap(vec!["b".into(), "d".into()]);
        model
    }

    #[test]
    fn test_packs_groups_back_to_back() {
        let solution = DisjunctivePackingSolver.solve(&two_groups()).unwrap();

        assert!(solution.is_optimal());
        assert_eq!(solution.objective_value, 9);
        assert_eq!(solution.intervals["a"], IntervalSolution { start: 0, end: 5 });
        assert_eq!(solution.intervals["c"], IntervalSolution { start: 5, end: 7 });
        assert_eq!(solution.intervals["d"].end, 9);
    }

    #[test]
    fn test_release_order() {
        let mut model = CpModel::new("release", 20);
        model.add_interval(IntervalVar::new("late", 4, 18, 2, 20));
        model.add_interval(IntervalVar::new("early", 0, 17, 3, 20));
        model.add_no_overlap(vec!["late".into(), "early".into()]);

        let solution = DisjunctivePackingSolver.solve(&model).unwrap();
        assert_eq!(solution.intervals["early"], IntervalSolution { start: 0, end: 3 });
        assert_eq!(solution.intervals["late"], IntervalSolution { start: 4, end: 6 });
        assert_eq!(solution.objective_value, 6);
    }

    #[test]
    fn test_ungrouped_interval_starts_at_release() {
        let mut model = CpModel::new("free", 10);
        model.add_interval(IntervalVar::new("x", 2, 6, 4, 10));

        let solution = DisjunctivePackingSolver.solve(&model).unwrap();
        assert_eq!(solution.intervals["x"], IntervalSolution { start: 2, end: 6 });
    }

    #[test]
    fn test_overlapping_groups_unsupported() {
        let mut model = two_groups();
        model.add_no_overlap(vec!["a".into(), "b".into()]);

        let err = DisjunctivePackingSolver.solve(&model).unwrap_err();
        assert!(matches!(err, ExactError::UnsupportedModel(_)));
    }

    #[test]
    fn test_horizon_too_short() {
        let mut model = CpModel::new("tight", 4);
        model.add_interval(IntervalVar::within_horizon("a", 3, 4));
        model.add_interval(IntervalVar::within_horizon("b", 3, 4));
        model.add_no_overlap(vec!["a".into(), "b".into()]);

        let err = DisjunctivePackingSolver.solve(&model).unwrap_err();
        assert!(matches!(err, ExactError::NoSolution(_)));
    }

    #[test]
    fn test_unknown_interval_name() {
        let mut model = CpModel::new("typo", 4);
        model.add_interval(IntervalVar::within_horizon("a", 3, 4));
        model.add_no_overlap(vec!["z".into()]);

        let err = DisjunctivePackingSolver.solve(&model).unwrap_err();
        assert!(matches!(err, ExactError::UnsupportedModel(_)));
    }
}
