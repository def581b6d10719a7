#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worker::db::projects::Projects;
    use worker::db::time_intervals::TimeIntervals;
    use worker::libs::error::WorkerError;
    use worker::libs::project::{
        count_projects, create_project, find_active_projects, find_project, find_projects, remove_project, require_project, ProjectName,
    };
    use worker::libs::time_interval::clock_in;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ProjectTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ProjectTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ProjectTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    fn worker_error(err: &anyhow::Error) -> Option<&WorkerError> {
        err.downcast_ref::<WorkerError>()
    }

    #[test]
    fn test_project_name_rejects_blank() {
        assert_eq!(ProjectName::new(""), Err(WorkerError::InvalidProjectName));
        assert_eq!(ProjectName::new("   "), Err(WorkerError::InvalidProjectName));
        assert_eq!(ProjectName::new("  Worker ").unwrap().as_str(), "Worker");
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_create_project(_ctx: &mut ProjectTestContext) {
        let mut projects = Projects::new().unwrap();

        let project = create_project(&mut projects, "Worker").unwrap();
        assert!(project.id > 0);
        assert_eq!(project.name, "Worker");
        assert_eq!(count_projects(&mut projects).unwrap(), 1);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_create_project_rejects_duplicate_ignoring_case(_ctx: &mut ProjectTestContext) {
        let mut projects = Projects::new().unwrap();
        create_project(&mut projects, "Worker").unwrap();

        let err = create_project(&mut projects, "worker").unwrap_err();
        assert_eq!(worker_error(&err), Some(&WorkerError::ProjectAlreadyExists("Worker".to_string())));
        assert_eq!(count_projects(&mut projects).unwrap(), 1);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_create_project_rejects_blank_name(_ctx: &mut ProjectTestContext) {
        let mut projects = Projects::new().unwrap();

        let err = create_project(&mut projects, "  ").unwrap_err();
        assert_eq!(worker_error(&err), Some(&WorkerError::InvalidProjectName));
        assert_eq!(count_projects(&mut projects).unwrap(), 0);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_find_project_ignores_case(_ctx: &mut ProjectTestContext) {
        let mut projects = Projects::new().unwrap();
        let created = create_project(&mut projects, "Worker").unwrap();

        assert_eq!(find_project(&mut projects, "WORKER").unwrap(), Some(created));
        assert_eq!(find_project(&mut projects, "Other").unwrap(), None);

        let err = require_project(&mut projects, "Other").unwrap_err();
        assert_eq!(worker_error(&err), Some(&WorkerError::ProjectNotFound("Other".to_string())));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_find_projects_sorted_by_name(_ctx: &mut ProjectTestContext) {
        let mut projects = Projects::new().unwrap();
        create_project(&mut projects, "beta").unwrap();
        create_project(&mut projects, "Alpha").unwrap();

        let names: Vec<String> = find_projects(&mut projects).unwrap().into_iter().map(|project| project.name).collect();
        assert_eq!(names, vec!["Alpha", "beta"]);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_find_active_projects(_ctx: &mut ProjectTestContext) {
        let mut projects = Projects::new().unwrap();
        let mut time_intervals = TimeIntervals::new().unwrap();
        let active = create_project(&mut projects, "Active").unwrap();
        create_project(&mut projects, "Idle").unwrap();

        clock_in(&mut time_intervals, &active, 1_000).unwrap();

        assert_eq!(find_active_projects(&mut projects).unwrap(), vec![active]);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_remove_project_cascades_time_intervals(_ctx: &mut ProjectTestContext) {
        let mut projects = Projects::new().unwrap();
        let mut time_intervals = TimeIntervals::new().unwrap();
        let project = create_project(&mut projects, "Worker").unwrap();
        let time_interval = clock_in(&mut time_intervals, &project, 1_000).unwrap();

        remove_project(&mut projects, &project).unwrap();

        assert_eq!(count_projects(&mut projects).unwrap(), 0);
        assert_eq!(time_intervals.fetch_by_id(time_interval.id).unwrap(), None);
    }
}
