pub mod handle_datagram;
pub mod serve_datagrams;

pub use handle_datagram::HandleDatagramUseCase;
pub use serve_datagrams::{ServeDatagramsUseCase, ServeStats};
