//! Occupancy statistics service

use chrono::{DateTime, Duration, Utc};

use crate::{
    error::AppResult,
    models::library::{GlobalStats, LibraryOccupancy, OccupancySnapshot},
    repository::Repository,
};

/// Number of hourly samples in an occupancy history
const HISTORY_HOURS: i64 = 24;

// TODO: derive energy efficiency from building meter data once that feed
// exists; until then the frontend gets this fixed placeholder.
const ENERGY_EFFICIENCY_PLACEHOLDER: i64 = 56;

#[derive(Clone)]
pub struct OccupancyService {
    repository: Repository,
}

impl OccupancyService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Capacity and current vacancy of a single library
    pub async fn library_occupancy(&self, library_id: i32) -> AppResult<LibraryOccupancy> {
        let capacity = self.repository.seats.count_all(library_id).await?;
        let vacant_seats = self.repository.seats.count_vacant(library_id).await?;
        Ok(LibraryOccupancy {
            capacity,
            vacant_seats,
        })
    }

    /// Aggregate statistics across all libraries
    pub async fn global_stats(&self) -> AppResult<GlobalStats> {
        let capacity = self.repository.seats.count_all_global().await?;
        let vacant_seats = self.repository.seats.count_vacant_global().await?;
        Ok(GlobalStats {
            energy_efficiency: ENERGY_EFFICIENCY_PLACEHOLDER,
            capacity,
            vacant_seats,
        })
    }

    /// Hourly vacancy history for the past 24 hours, oldest entry first.
    ///
    /// Each sample counts the seats whose most recent log entry before the
    /// sample time was occupied and subtracts that from the library's
    /// capacity. The 24 lookups run sequentially; each depends only on
    /// (library_id, time).
    pub async fn history(&self, library_id: i32) -> AppResult<Vec<OccupancySnapshot>> {
        let capacity = self.repository.seats.count_all(library_id).await?;
        let now = Utc::now();

        let mut samples = Vec::with_capacity(HISTORY_HOURS as usize);
        for i in 0..HISTORY_HOURS {
            let time = now - Duration::hours(i);
            let occupied = self.repository.seats.count_occupied_at(library_id, time).await?;
            samples.push((time, occupied));
        }

        Ok(assemble_history(capacity, samples))
    }
}

/// Turn newest-first (time, occupied) samples into a chronological list of
/// vacancy snapshots.
fn assemble_history(
    capacity: i64,
    samples: Vec<(DateTime<Utc>, i64)>,
) -> Vec<OccupancySnapshot> {
    samples
        .into_iter()
        .rev()
        .map(|(time, occupied)| OccupancySnapshot {
            time,
            vacant_seats: capacity - occupied,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples_newest_first(now: DateTime<Utc>, occupied: &[i64]) -> Vec<(DateTime<Utc>, i64)> {
        occupied
            .iter()
            .enumerate()
            .map(|(i, &o)| (now - Duration::hours(i as i64), o))
            .collect()
    }

    #[test]
    fn test_history_is_chronological() {
        let now = Utc::now();
        let occupied: Vec<i64> = (0..24).collect();
        let history = assemble_history(30, samples_newest_first(now, &occupied));

        assert_eq!(history.len(), 24);
        for pair in history.windows(2) {
            assert!(pair[0].time < pair[1].time);
        }
        // Oldest sample was 23 hours ago
        assert_eq!(history[0].time, now - Duration::hours(23));
        assert_eq!(history[23].time, now);
    }

    #[test]
    fn test_history_vacancy_math() {
        let now = Utc::now();
        let history = assemble_history(10, samples_newest_first(now, &[4, 7, 0]));

        // Reversed: oldest first
        assert_eq!(history[0].vacant_seats, 10); // 0 occupied two hours ago
        assert_eq!(history[1].vacant_seats, 3); // 7 occupied one hour ago
        assert_eq!(history[2].vacant_seats, 6); // 4 occupied now
    }

    #[test]
    fn test_history_empty_library() {
        let now = Utc::now();
        let history = assemble_history(0, samples_newest_first(now, &[0; 24]));
        assert_eq!(history.len(), 24);
        assert!(history.iter().all(|s| s.vacant_seats == 0));
    }
}
