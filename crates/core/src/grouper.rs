use crate::capture::CaptureFile;
use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone)]
struct GroupState {
    source_id: String,
    last_timestamp: NaiveDateTime,
    base_name: String,
    part_index: u32,
}

impl GroupState {
    fn start(file: &CaptureFile) -> Self {
        Self {
            source_id: file.source_id.clone(),
            last_timestamp: file.timestamp,
            base_name: file.base_name(),
            part_index: 0,
        }
    }

    // A gap exactly equal to max_gap starts a new group.
    fn continues(&self, file: &CaptureFile, max_gap: Duration) -> bool {
        self.source_id == file.source_id && file.timestamp - self.last_timestamp < max_gap
    }
}

pub fn assign_target_names(files: &[CaptureFile], max_gap: Duration) -> Vec<String> {
    let mut targets = Vec::with_capacity(files.len());
    let mut state: Option<GroupState> = None;

    for file in files {
        let mut current = match state.take() {
            Some(run) if run.continues(file, max_gap) => run,
            _ => GroupState::start(file),
        };

        targets.push(format!(
            "{}.{:02}.avi",
            current.base_name, current.part_index
        ));

        current.part_index += 1;
        current.last_timestamp = file.timestamp;
        state = Some(current);
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::assign_target_names;
    use crate::capture::CaptureFile;
    use chrono::{Duration, NaiveDate};

    fn capture(source: &str, hour: u32, minute: u32, second: u32) -> CaptureFile {
        let timestamp = NaiveDate::from_ymd_opt(2020, 1, 1)
            .expect("date")
            .and_hms_opt(hour, minute, second)
            .expect("time");
        CaptureFile {
            file_name: format!("{source} 2020-01-01 {hour:02}-{minute:02}-{second:02}-00.avi"),
            source_id: source.to_string(),
            timestamp,
        }
    }

    #[test]
    fn close_segments_share_a_base() {
        let files = [capture("GameA", 10, 0, 0), capture("GameA", 10, 3, 0)];
        let targets = assign_target_names(&files, Duration::minutes(5));
        assert_eq!(
            targets,
            vec![
                "GameA 2020-1-1 10-0-0.00.avi".to_string(),
                "GameA 2020-1-1 10-0-0.01.avi".to_string(),
            ]
        );
    }

    #[test]
    fn tighter_gap_override_splits_the_pair() {
        let files = [capture("GameA", 10, 0, 0), capture("GameA", 10, 3, 0)];
        let targets = assign_target_names(&files, Duration::minutes(2));
        assert_eq!(
            targets,
            vec![
                "GameA 2020-1-1 10-0-0.00.avi".to_string(),
                "GameA 2020-1-1 10-3-0.00.avi".to_string(),
            ]
        );
    }

    #[test]
    fn gap_equal_to_max_starts_a_new_group() {
        let files = [capture("GameA", 10, 0, 0), capture("GameA", 10, 5, 0)];
        let targets = assign_target_names(&files, Duration::minutes(5));
        assert_eq!(targets[1], "GameA 2020-1-1 10-5-0.00.avi");
    }

    #[test]
    fn gap_one_second_under_max_continues_the_group() {
        let files = [capture("GameA", 10, 0, 0), capture("GameA", 10, 4, 59)];
        let targets = assign_target_names(&files, Duration::minutes(5));
        assert_eq!(targets[1], "GameA 2020-1-1 10-0-0.01.avi");
    }

    #[test]
    fn source_change_splits_even_at_zero_gap() {
        let files = [capture("GameA", 10, 0, 0), capture("GameB", 10, 0, 0)];
        let targets = assign_target_names(&files, Duration::minutes(5));
        assert_eq!(targets[0], "GameA 2020-1-1 10-0-0.00.avi");
        assert_eq!(targets[1], "GameB 2020-1-1 10-0-0.00.avi");
    }

    #[test]
    fn part_indices_form_a_contiguous_run() {
        let files = [
            capture("GameA", 10, 0, 0),
            capture("GameA", 10, 1, 0),
            capture("GameA", 10, 2, 0),
            capture("GameA", 10, 3, 0),
        ];
        let targets = assign_target_names(&files, Duration::minutes(5));
        for (index, target) in targets.iter().enumerate() {
            assert_eq!(*target, format!("GameA 2020-1-1 10-0-0.{index:02}.avi"));
        }
    }

    #[test]
    fn part_index_widens_past_one_hundred() {
        let files: Vec<_> = (0..101)
            .map(|i| capture("GameA", 10, i / 60, i % 60))
            .collect();
        let targets = assign_target_names(&files, Duration::minutes(5));
        assert_eq!(targets[99], "GameA 2020-1-1 10-0-0.99.avi");
        assert_eq!(targets[100], "GameA 2020-1-1 10-0-0.100.avi");
    }

    #[test]
    fn gap_measures_from_previous_file_not_group_start() {
        let files = [
            capture("GameA", 10, 0, 0),
            capture("GameA", 10, 4, 0),
            capture("GameA", 10, 8, 0),
        ];
        let targets = assign_target_names(&files, Duration::minutes(5));
        assert_eq!(targets[2], "GameA 2020-1-1 10-0-0.02.avi");
    }
}
