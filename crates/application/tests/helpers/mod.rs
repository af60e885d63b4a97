pub mod builders;
pub mod mock_transport;

pub use builders::build_query;
pub use mock_transport::MockTransport;
