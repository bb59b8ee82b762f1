#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use app_core::{UseCase, UseCaseValidatable};
    use app_ring::RingError;

    use crate::{
        core::{
            domain::models::{AppError, usecases::RemoveNodeUseCaseInput},
            usecases::RemoveNodeUseCase,
        },
        tests::test_mocks::{MockRing, change},
    };

    #[tokio::test]
    async fn validate_fails_when_node_id_is_empty() {
        let ring = Arc::new(MockRing::new());
        let uc = RemoveNodeUseCase::new(ring);

        let input = RemoveNodeUseCaseInput { node_id: "".into() };
        let err = uc.validate(&input).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn removes_node_and_reports_successor() {
        let ring = Arc::new(MockRing::new());
        ring.set_remove_result(Ok(Some(change("n2", 33, 66, 4))));
        let uc = RemoveNodeUseCase::new(ring.clone());

        let out = uc
            .execute(RemoveNodeUseCaseInput {
                node_id: "n2".into(),
            })
            .await
            .expect("remove should succeed");

        assert_eq!(out.position, 33);
        assert_eq!(out.absorbed_by, 66);
        assert_eq!(out.keys_moved, 4);
        assert_eq!(ring.last_remove_node.lock().as_deref(), Some("n2"));
    }

    #[tokio::test]
    async fn unknown_node_is_reported_as_not_found() {
        let ring = Arc::new(MockRing::new());
        ring.set_remove_result(Ok(None));
        let uc = RemoveNodeUseCase::new(ring);

        let err = uc
            .execute(RemoveNodeUseCaseInput {
                node_id: "ghost".into(),
            })
            .await
            .unwrap_err();

        match err {
            AppError::NodeNotFound(msg) => assert!(msg.contains("ghost")),
            other => panic!("expected NodeNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn last_node_error_is_propagated() {
        let ring = Arc::new(MockRing::new());
        ring.set_remove_result(Err(AppError::Ring(RingError::LastNode("solo".into()))));
        let uc = RemoveNodeUseCase::new(ring);

        let err = uc
            .execute(RemoveNodeUseCaseInput {
                node_id: "solo".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Ring(RingError::LastNode(_))));
    }
}
