mod locked_ring_service_test;
