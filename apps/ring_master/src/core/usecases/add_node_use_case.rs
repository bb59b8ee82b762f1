use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tracing::info;

use crate::core::domain::{
    models::{
        AppError,
        usecases::{AddNodeUseCaseInput, AddNodeUseCaseOutput},
    },
    services::RingService,
};

pub struct AddNodeUseCase {
    ring_service: Arc<dyn RingService>,
}

impl AddNodeUseCase {
    pub fn new(ring_service: Arc<dyn RingService>) -> Self {
        Self { ring_service }
    }
}

#[async_trait]
impl UseCase for AddNodeUseCase {
    type Input = AddNodeUseCaseInput;
    type Output = AddNodeUseCaseOutput;
    type Error = AppError;

    async fn execute(&self, input: AddNodeUseCaseInput) -> Result<AddNodeUseCaseOutput, AppError> {
        let change = self.ring_service.add_node(&input.node_id)?;

        info!(
            node = %change.node,
            position = change.position,
            keys_moved = change.keys_moved,
            taken_from = change.neighbour,
            "Node joined"
        );

        Ok(AddNodeUseCaseOutput {
            position: change.position,
            taken_from: change.neighbour,
            keys_moved: change.keys_moved,
        })
    }
}

#[async_trait]
impl UseCaseValidatable for AddNodeUseCase {
    async fn validate(&self, input: &AddNodeUseCaseInput) -> Result<(), AppError> {
        if input.node_id.trim().is_empty() {
            return Err(AppError::BadRequest("Node id is empty".to_string()));
        }

        Ok(())
    }
}
