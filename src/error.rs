//! Fatal server errors. `Serve` mirrors the `io::Result` of `axum::serve`,
//! which retries accept errors, so in practice only `Bind` ends the process.

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_bind_error_names_address() {
        let err = ServeError::Bind {
            addr: "0.0.0.0:8080".to_string(),
            source: Error::new(ErrorKind::AddrInUse, "address in use"),
        };
        let msg = err.to_string();
        assert!(msg.contains("0.0.0.0:8080"), "got {msg}");
        assert!(msg.contains("address in use"), "got {msg}");
    }

    #[test]
    fn test_io_error_converts_to_serve() {
        let err: ServeError = Error::other("accept failed").into();
        assert!(matches!(err, ServeError::Serve(_)));
    }
}
