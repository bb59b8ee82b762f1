use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tracing::trace;

use crate::core::domain::{
    models::{
        AppError,
        usecases::{AssignDataUseCaseInput, AssignDataUseCaseOutput},
    },
    services::RingService,
};

pub struct AssignDataUseCase {
    ring_service: Arc<dyn RingService>,
}

impl AssignDataUseCase {
    pub fn new(ring_service: Arc<dyn RingService>) -> Self {
        Self { ring_service }
    }
}

#[async_trait]
impl UseCase for AssignDataUseCase {
    type Input = AssignDataUseCaseInput;
    type Output = AssignDataUseCaseOutput;
    type Error = AppError;

    async fn execute(
        &self,
        input: AssignDataUseCaseInput,
    ) -> Result<AssignDataUseCaseOutput, AppError> {
        let placement = self.ring_service.assign_data(&input.key)?;

        trace!(
            "Key {} hashed to {} stored on {}",
            input.key, placement.key_hash, placement.node_id
        );

        Ok(AssignDataUseCaseOutput { placement })
    }
}

#[async_trait]
impl UseCaseValidatable for AssignDataUseCase {
    async fn validate(&self, input: &AssignDataUseCaseInput) -> Result<(), AppError> {
        if input.key.is_empty() {
            return Err(AppError::BadRequest("Key is empty".to_string()));
        }

        Ok(())
    }
}
