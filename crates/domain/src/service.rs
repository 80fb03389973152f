use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    ExerciseName, LoggedSet, ProgressError, ProgressLog, ProgressRepository, ProgressStats,
    Weight,
};

pub trait ProgressService {
    fn log_sets(
        &self,
        exercise: &ExerciseName,
        date: NaiveDate,
        sets: Vec<LoggedSet>,
    ) -> Result<(), ProgressError>;
    fn get_progress(&self) -> Result<ProgressLog, ProgressError>;
    fn get_max_weight_series(
        &self,
        exercise: &ExerciseName,
    ) -> Result<Vec<(NaiveDate, Weight)>, ProgressError>;
    fn get_stats(&self) -> Result<ProgressStats, ProgressError>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ProgressError::NoSets => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                ProgressError::Storage(_) => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ProgressRepository> Service<R> {
    fn read(&self) -> Result<ProgressLog, ProgressError> {
        Ok(self.repository.read_progress()?)
    }

    fn log(
        &self,
        exercise: &ExerciseName,
        date: NaiveDate,
        sets: Vec<LoggedSet>,
    ) -> Result<(), ProgressError> {
        let mut progress = self.read()?;
        progress.log(exercise, date, sets)?;
        self.repository.write_progress(&progress)?;
        debug!("logged {exercise} on {date}");
        Ok(())
    }
}

impl<R: ProgressRepository> ProgressService for Service<R> {
    fn log_sets(
        &self,
        exercise: &ExerciseName,
        date: NaiveDate,
        sets: Vec<LoggedSet>,
    ) -> Result<(), ProgressError> {
        log_on_error!(self.log(exercise, date, sets), "log", "sets")
    }

    fn get_progress(&self) -> Result<ProgressLog, ProgressError> {
        log_on_error!(self.read(), "get", "progress")
    }

    fn get_max_weight_series(
        &self,
        exercise: &ExerciseName,
    ) -> Result<Vec<(NaiveDate, Weight)>, ProgressError> {
        log_on_error!(
            self.read().map(|p| p.max_weight_series(exercise)),
            "get",
            "max weight series"
        )
    }

    fn get_stats(&self) -> Result<ProgressStats, ProgressError> {
        log_on_error!(self.read().map(|p| p.stats()), "get", "stats")
    }
}
