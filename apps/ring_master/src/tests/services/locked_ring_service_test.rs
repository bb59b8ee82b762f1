#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use app_ring::{Ring, RingConfig, RingError, SpacingMode};

    use crate::{
        config::RingMasterConfig,
        core::domain::{models::AppError, services::RingService},
        infrastructure::adapters::services::LockedRingService,
        tests::test_mocks::node_ids,
    };

    fn service(nodes: &[&str], data: &[&str]) -> Arc<LockedRingService> {
        let mut ring = Ring::new(
            nodes.iter().copied(),
            data.iter().copied(),
            RingConfig::new(1_000_000, SpacingMode::Equidistant),
        );
        ring.build().unwrap();
        Arc::new(LockedRingService::new(ring))
    }

    fn total_keys(service: &LockedRingService) -> usize {
        service.distribution().iter().map(|l| l.keys).sum()
    }

    #[test]
    fn from_config_builds_and_assigns_initial_data() {
        let cfg = RingMasterConfig::from_lookup(|name| match name {
            "RING_NODES" => Some("a,b,c,d".into()),
            "RING_DATA" => Some("x,y,z".into()),
            _ => None,
        })
        .unwrap();

        let service = LockedRingService::from_config(&cfg).unwrap();
        let positions: Vec<u64> = service.distribution().iter().map(|l| l.position).collect();

        assert_eq!(positions, vec![0, 250, 500, 750]);
        assert_eq!(total_keys(&service), 3);
    }

    #[test]
    fn assign_and_locate_agree() {
        let service = service(&["a", "b", "c"], &[]);

        let stored = service.assign_data("user:42").unwrap();
        let located = service.locate_data("user:42").unwrap();

        assert_eq!(stored, located);
        assert_eq!(total_keys(&service), 1);
    }

    #[test]
    fn join_and_leave_keep_every_key() {
        let service = service(&["a", "b", "c"], &["k1", "k2", "k3", "k4", "k5"]);

        service.add_node("d").unwrap();
        assert!(node_ids(service.as_ref()).contains(&"d".to_string()));
        assert_eq!(total_keys(&service), 5);

        let change = service.remove_node("a").unwrap().expect("a is on the ring");
        assert_eq!(change.node, "a");
        assert!(!node_ids(service.as_ref()).contains(&"a".to_string()));
        assert_eq!(total_keys(&service), 5);

        assert_eq!(service.remove_node("a").unwrap(), None);
    }

    #[test]
    fn ring_errors_surface_as_app_errors() {
        let service = service(&["solo"], &[]);

        assert!(matches!(
            service.remove_node("solo"),
            Err(AppError::Ring(RingError::LastNode(_)))
        ));
        assert!(matches!(
            service.add_node("solo"),
            Err(AppError::Ring(RingError::NodeExists(_)))
        ));
    }

    #[test]
    fn concurrent_assignment_loses_nothing() {
        let service = service(&["a", "b", "c", "d"], &[]);

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let service = service.clone();
                scope.spawn(move || {
                    for i in 0..250 {
                        service.assign_data(&format!("w{worker}-{i}")).unwrap();
                    }
                });
            }
        });

        assert_eq!(total_keys(&service), 2_000);
    }
}
