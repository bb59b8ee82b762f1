use std::sync::Arc;

use crate::{
    config::RingMasterConfig,
    core::{
        domain::{models::AppError, services::RingService},
        usecases::{AddNodeUseCase, AssignDataUseCase, LocateDataUseCase, RemoveNodeUseCase},
    },
    infrastructure::adapters::services::LockedRingService,
};

pub struct RingMasterModule {
    pub ring_service: Arc<dyn RingService>,
    pub add_node_use_case: Arc<AddNodeUseCase>,
    pub remove_node_use_case: Arc<RemoveNodeUseCase>,
    pub assign_data_use_case: Arc<AssignDataUseCase>,
    pub locate_data_use_case: Arc<LocateDataUseCase>,
}

impl RingMasterModule {
    pub fn build_from_config(cfg: &RingMasterConfig) -> Result<Self, AppError> {
        let ring_service: Arc<dyn RingService> = Arc::new(LockedRingService::from_config(cfg)?);

        Ok(Self::with_service(ring_service))
    }

    pub fn with_service(ring_service: Arc<dyn RingService>) -> Self {
        Self {
            add_node_use_case: Arc::new(AddNodeUseCase::new(ring_service.clone())),
            remove_node_use_case: Arc::new(RemoveNodeUseCase::new(ring_service.clone())),
            assign_data_use_case: Arc::new(AssignDataUseCase::new(ring_service.clone())),
            locate_data_use_case: Arc::new(LocateDataUseCase::new(ring_service.clone())),
            ring_service,
        }
    }
}
