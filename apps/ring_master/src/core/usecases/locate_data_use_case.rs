use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tracing::trace;

use crate::core::domain::{
    models::{
        AppError,
        usecases::{LocateDataUseCaseInput, LocateDataUseCaseOutput},
    },
    services::RingService,
};

pub struct LocateDataUseCase {
    ring_service: Arc<dyn RingService>,
}

impl LocateDataUseCase {
    pub fn new(ring_service: Arc<dyn RingService>) -> Self {
        Self { ring_service }
    }
}

#[async_trait]
impl UseCase for LocateDataUseCase {
    type Input = LocateDataUseCaseInput;
    type Output = LocateDataUseCaseOutput;
    type Error = AppError;

    async fn execute(
        &self,
        input: LocateDataUseCaseInput,
    ) -> Result<LocateDataUseCaseOutput, AppError> {
        let placement = self.ring_service.locate_data(&input.key)?;
        trace!("Node for key {}: {}", input.key, placement.node_id);

        Ok(LocateDataUseCaseOutput { placement })
    }
}

#[async_trait]
impl UseCaseValidatable for LocateDataUseCase {
    async fn validate(&self, input: &LocateDataUseCaseInput) -> Result<(), AppError> {
        if input.key.is_empty() {
            return Err(AppError::BadRequest("Key is empty".to_string()));
        }

        Ok(())
    }
}
