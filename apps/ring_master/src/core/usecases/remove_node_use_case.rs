use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tracing::info;

use crate::core::domain::{
    models::{
        AppError,
        usecases::{RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput},
    },
    services::RingService,
};

pub struct RemoveNodeUseCase {
    ring_service: Arc<dyn RingService>,
}

impl RemoveNodeUseCase {
    pub fn new(ring_service: Arc<dyn RingService>) -> Self {
        Self { ring_service }
    }
}

#[async_trait]
impl UseCase for RemoveNodeUseCase {
    type Input = RemoveNodeUseCaseInput;
    type Output = RemoveNodeUseCaseOutput;
    type Error = AppError;

    async fn execute(
        &self,
        input: RemoveNodeUseCaseInput,
    ) -> Result<RemoveNodeUseCaseOutput, AppError> {
        let node_id = input.node_id.as_str();

        // the ring treats an unknown node as a no-op, callers get told
        let Some(change) = self.ring_service.remove_node(node_id)? else {
            return Err(AppError::NodeNotFound(format!("{node_id} in ring")));
        };

        info!(
            node = %change.node,
            position = change.position,
            keys_moved = change.keys_moved,
            absorbed_by = change.neighbour,
            "Node left"
        );

        Ok(RemoveNodeUseCaseOutput {
            position: change.position,
            absorbed_by: change.neighbour,
            keys_moved: change.keys_moved,
        })
    }
}

#[async_trait]
impl UseCaseValidatable for RemoveNodeUseCase {
    async fn validate(&self, input: &RemoveNodeUseCaseInput) -> Result<(), AppError> {
        if input.node_id.trim().is_empty() {
            return Err(AppError::BadRequest("Node id is empty".to_string()));
        }

        Ok(())
    }
}
