pub mod locked_ring_service;

pub use locked_ring_service::LockedRingService;
