use std::sync::Arc;

use app_core::UseCaseValidatable;
use tokio::task::JoinSet;

use crate::{
    core::domain::models::{
        AppError, RingCommand,
        usecases::{
            AddNodeUseCaseInput, AssignDataUseCaseInput, LocateDataUseCaseInput,
            RemoveNodeUseCaseInput,
        },
    },
    infrastructure::di::RingMasterModule,
};

pub struct ScriptController {
    module_dependencies: Arc<RingMasterModule>,
}

impl ScriptController {
    pub fn new(module_dependencies: Arc<RingMasterModule>) -> Self {
        Self {
            module_dependencies,
        }
    }

    /// Runs one command and returns a one-line summary of what changed.
    pub async fn handle(&self, command: RingCommand) -> Result<String, AppError> {
        match command {
            RingCommand::Join { node_id } => {
                let out = self
                    .module_dependencies
                    .add_node_use_case
                    .validate_and_execute(AddNodeUseCaseInput {
                        node_id: node_id.clone(),
                    })
                    .await?;

                Ok(format!(
                    "JOIN {node_id} at {} ({} keys from {})",
                    out.position, out.keys_moved, out.taken_from
                ))
            }
            RingCommand::Leave { node_id } => {
                let out = self
                    .module_dependencies
                    .remove_node_use_case
                    .validate_and_execute(RemoveNodeUseCaseInput {
                        node_id: node_id.clone(),
                    })
                    .await?;

                Ok(format!(
                    "LEAVE {node_id} from {} ({} keys to {})",
                    out.position, out.keys_moved, out.absorbed_by
                ))
            }
            RingCommand::Put { key } => {
                let out = self
                    .module_dependencies
                    .assign_data_use_case
                    .validate_and_execute(AssignDataUseCaseInput { key: key.clone() })
                    .await?;

                Ok(format!(
                    "PUT {key} -> {} on {}@{}",
                    out.placement.key_hash, out.placement.node_id, out.placement.position
                ))
            }
            RingCommand::Locate { key } => {
                let out = self
                    .module_dependencies
                    .locate_data_use_case
                    .validate_and_execute(LocateDataUseCaseInput { key: key.clone() })
                    .await?;

                Ok(format!(
                    "LOCATE {key} -> {} on {}@{}",
                    out.placement.key_hash, out.placement.node_id, out.placement.position
                ))
            }
        }
    }

    /// Assigns all keys from concurrent tasks; returns how many were stored.
    pub async fn assign_concurrently(&self, keys: Vec<String>) -> Result<usize, AppError> {
        let mut set = JoinSet::new();

        for key in keys {
            let use_case = self.module_dependencies.assign_data_use_case.clone();
            set.spawn(async move {
                use_case
                    .validate_and_execute(AssignDataUseCaseInput { key })
                    .await
            });
        }

        let mut stored = 0;
        let mut last_err: Option<AppError> = None;

        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(Ok(_)) => stored += 1,
                Ok(Err(e)) => last_err = Some(e),
                Err(join_err) => last_err = Some(AppError::Join(join_err.to_string())),
            }
        }

        match last_err {
            Some(e) => Err(e),
            None => Ok(stored),
        }
    }
}
