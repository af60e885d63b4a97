//! stub-dns application layer: per-datagram handling and the receive loop
pub mod ports;
pub mod use_cases;
