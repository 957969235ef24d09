use log::{debug, error, info};

use crate::{
    Generator, ReadError, Student, StudentID, StudentRepository, UpdateError, WorkoutPlan,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_students(&self) -> Result<Vec<Student>, ReadError>;
    /// Generates and stores a new workout sheet.
    async fn create_workout(
        &self,
        id: StudentID,
        override_level: Option<&str>,
    ) -> Result<WorkoutPlan, UpdateError>;
    /// Fills the stored workout sheet if it has no exercises yet.
    async fn auto_fill_workout(
        &self,
        id: StudentID,
        override_level: Option<&str>,
    ) -> Result<WorkoutPlan, UpdateError>;
}

pub struct Service<R> {
    repository: R,
    generator: Generator,
}

impl<R: StudentRepository> Service<R> {
    pub fn new(repository: R, generator: Generator) -> Self {
        Self {
            repository,
            generator,
        }
    }

    async fn create(
        &self,
        id: StudentID,
        override_level: Option<&str>,
    ) -> Result<WorkoutPlan, UpdateError> {
        let student = self.repository.read_student(id).await?;
        self.generate_and_store(&student, override_level).await
    }

    async fn auto_fill(
        &self,
        id: StudentID,
        override_level: Option<&str>,
    ) -> Result<WorkoutPlan, UpdateError> {
        let student = self.repository.read_student(id).await?;
        if !student.has_empty_workout() {
            return Err(UpdateError::Conflict);
        }
        self.generate_and_store(&student, override_level).await
    }

    async fn generate_and_store(
        &self,
        student: &Student,
        override_level: Option<&str>,
    ) -> Result<WorkoutPlan, UpdateError> {
        let plan = self
            .generator
            .generate_workout(&student.profile, override_level);
        if plan.needs_professional_review {
            info!(
                "workout for {} requires professional review: {}",
                student.name, plan.review_reason
            );
        }
        self.repository.replace_workout(student.id, plan).await
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: StudentRepository> WorkoutService for Service<R> {
    async fn get_students(&self) -> Result<Vec<Student>, ReadError> {
        log_on_error!(
            self.repository.read_students(),
            ReadError,
            "get",
            "students"
        )
    }

    async fn create_workout(
        &self,
        id: StudentID,
        override_level: Option<&str>,
    ) -> Result<WorkoutPlan, UpdateError> {
        log_on_error!(
            self.create(id, override_level),
            UpdateError,
            "create",
            "workout"
        )
    }

    async fn auto_fill_workout(
        &self,
        id: StudentID,
        override_level: Option<&str>,
    ) -> Result<WorkoutPlan, UpdateError> {
        log_on_error!(
            self.auto_fill(id, override_level),
            UpdateError,
            "auto-fill",
            "workout"
        )
    }
}
