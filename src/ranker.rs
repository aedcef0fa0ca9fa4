use crate::models::{Program, RankedMatches, Student};
use rand::prelude::*;

/// Selects and orders up to `matches_to_find` programs for each student.
pub struct MatchRanker {
    matches_to_find: usize,
    exclude_first_program: bool,
}

impl MatchRanker {
    pub fn new(matches_to_find: usize, exclude_first_program: bool) -> Self {
        Self {
            matches_to_find,
            exclude_first_program,
        }
    }

    /// Rank the programs for one student. Pure in its inputs apart from the
    /// injected RNG, which only breaks ties among equally-scored candidates.
    ///
    /// Priority matches (interest set equal to the student's) always come
    /// first, in original program order, and are never dropped even when
    /// they alone exceed `matches_to_find`. The rest are scored by shared
    /// interest count and fill whatever room remains.
    pub fn rank_matches<R: Rng>(
        &self,
        student: &Student,
        programs: &[Program],
        rng: &mut R,
    ) -> RankedMatches {
        let priority: Vec<usize> = (0..programs.len())
            .filter(|&index| programs[index].interests_match(student))
            .collect();

        // The positional exclusion applies to the secondary tier only
        let skip = if self.exclude_first_program { 1 } else { 0 };
        let mut secondary: Vec<usize> = (skip..programs.len())
            .filter(|index| !priority.contains(index))
            .collect();

        // Shuffle before the stable sort so equal counts land in random
        // order, then reverse to put the highest counts first
        secondary.shuffle(rng);
        secondary.sort_by_key(|&index| programs[index].shared_interest_count(student));
        secondary.reverse();

        let room = self.matches_to_find.saturating_sub(priority.len());
        secondary.truncate(room);

        let matched = priority
            .into_iter()
            .chain(secondary)
            .map(|index| programs[index].clone())
            .collect();
        RankedMatches { programs: matched }
    }
}
