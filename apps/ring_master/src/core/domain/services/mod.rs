pub mod ring_service;

pub use ring_service::RingService;
